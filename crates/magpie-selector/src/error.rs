//! Builder usage errors.
//!
//! Both error kinds represent programmer misuse of the fluent API, not
//! transient conditions. They are surfaced at the offending append call,
//! never deferred to rendering, and there is no retry semantics: a chain
//! that produced an error must not be continued.

use thiserror::Error;

use crate::selector::PartKind;

/// Error raised by an invalid append on a [`crate::selector::Selector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A singleton part (element, id, or pseudo-element) was specified a
    /// second time on the same selector.
    #[error("duplicate {kind} part: at most one {kind} may be set per selector")]
    DuplicatePart {
        /// The part kind that was re-specified.
        kind: PartKind,
    },

    /// A part was appended after a higher-ranked part.
    ///
    /// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
    /// fragments must appear in the fixed relative order element, id, class,
    /// attribute, pseudo-class, pseudo-element.
    #[error("{appended} part cannot follow {last} part")]
    OrderViolation {
        /// The part kind the caller tried to append.
        appended: PartKind,
        /// The highest-ranked part kind already on the selector.
        last: PartKind,
    },
}
