//! Fluent construction of CSS selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selector building** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, id, class, attribute, pseudo-class, and pseudo-element parts
//!   - Fail-fast ordering and uniqueness checks at each append call
//! - **Selector combination** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Verbatim combinator tokens, plus a typed [`Combinator`] convenience
//! - **Specificity** ([§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!
//! # Not Implemented
//!
//! - Selector parsing or matching against a document tree
//! - Validation of part text (tags, class names, and attribute fragments
//!   are spliced into the output as given)
//!
//! # Example
//!
//! ```
//! use magpie_selector::element;
//!
//! let selector = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(selector.to_string(), r#"a[href$=".png"]:focus"#);
//! # Ok::<(), magpie_selector::SelectorError>(())
//! ```

/// Builder usage errors.
pub mod error;
/// Selector building and combination per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

// Re-exports for convenience
pub use error::SelectorError;
pub use selector::{
    Combinator, PartKind, Selector, Specificity, attr, class, combine, combine_with, element, id,
    pseudo_class, pseudo_element,
};
