//! CSS selector building and combination.
//!
//! This module implements a fluent builder for selector strings per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
//!
//! A [`Selector`] accumulates the fragments of a single compound selector
//! and enforces, at each append call, the relative order those fragments
//! must appear in. Two built selectors can be joined with [`combine`],
//! which produces a selector that renders a precomputed combination string.

use core::fmt;
use core::ops::Add;

use serde::Serialize;
use strum_macros::Display;

use crate::error::SelectorError;

/// [§ 4.1 Structure and Terminology](https://www.w3.org/TR/selectors-4/#structure)
///
/// The kinds of fragment that can appear in a compound selector.
///
/// The derived ordering is the required relative order of the fragments:
/// element < id < class < attribute < pseudo-class < pseudo-element.
/// Once a part of a given rank has been appended, no lower-ranked part may
/// follow; equal rank is allowed for the multi-valued kinds (class,
/// attribute, pseudo-class).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[repr(u8)]
pub enum PartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// — the element tag, e.g. `div`.
    Element,
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// — rendered as `#value`.
    Id,
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// — rendered as `.name`, repeatable.
    Class,
    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// — rendered as `[fragment]`, repeatable.
    Attribute,
    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// — rendered as `:name`, repeatable.
    PseudoClass,
    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// — rendered as `::name`.
    PseudoElement,
}

impl PartKind {
    /// Integer rank encoding the required relative order.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Whether more than one part of this kind may appear on one selector.
    #[must_use]
    pub const fn is_multi_valued(self) -> bool {
        matches!(self, Self::Class | Self::Attribute | Self::PseudoClass)
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// Typed convenience for [`combine_with`]. The untyped [`combine`] accepts
/// any token string and splices it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// — whitespace, as in `div p`.
    Descendant,
    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// — `>`, as in `ul > li`.
    Child,
    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// — `+`, as in `h1 + p`.
    NextSibling,
    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// — `~`, as in `h1 ~ p`.
    SubsequentSibling,
}

impl Combinator {
    /// The literal combinator token.
    ///
    /// The descendant combinator *is* whitespace, so its token is a single
    /// space.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

/// Precomputed result of [`combine`]. Rendering returns the text verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct CombinedSelector {
    text: String,
    specificity: Specificity,
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// A fluent builder for a compound selector.
///
/// Created fresh by each of the facade functions ([`element`], [`id`],
/// [`class`], [`attr`], [`pseudo_class`], [`pseudo_element`]) or by
/// [`combine`]; extended by the chaining methods, which take the builder by
/// value and hand it back through `Result` so misuse fails at the offending
/// call; rendered by its [`fmt::Display`] impl, which is read-only and
/// repeatable.
///
/// Each append checks the ordering invariant (see [`PartKind`]) and, for
/// element, id, and pseudo-element, that the part is not already set.
///
/// A selector produced by [`combine`] is terminal: appending to it is
/// unsupported usage and asserts in debug builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    /// Highest-ranked part kind appended so far.
    last: Option<PartKind>,
    combined: Option<CombinedSelector>,
}

impl Selector {
    /// Create an empty selector with no parts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Set the element tag.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if a tag is already set;
    /// [`SelectorError::OrderViolation`] if any other part has been appended,
    /// since the tag must come first.
    pub fn element(mut self, tag: impl Into<String>) -> Result<Self, SelectorError> {
        if self.tag.is_some() {
            return Err(SelectorError::DuplicatePart {
                kind: PartKind::Element,
            });
        }
        self.check_order(PartKind::Element)?;
        self.tag = Some(tag.into());
        self.last = Some(PartKind::Element);
        Ok(self)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Set the id, rendered as `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if an id is already set;
    /// [`SelectorError::OrderViolation`] if a higher-ranked part has been
    /// appended.
    pub fn id(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        if self.id.is_some() {
            return Err(SelectorError::DuplicatePart { kind: PartKind::Id });
        }
        self.check_order(PartKind::Id)?;
        self.id = Some(value.into());
        self.last = Some(PartKind::Id);
        Ok(self)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append a class, rendered as `.name`. Repeatable.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if a higher-ranked part (attribute,
    /// pseudo-class, or pseudo-element) has been appended.
    pub fn class(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.check_order(PartKind::Class)?;
        self.classes.push(name.into());
        self.last = Some(PartKind::Class);
        Ok(self)
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append a raw attribute fragment, rendered as `[fragment]`.
    /// Repeatable. The fragment is spliced as given, so any attribute
    /// matcher form works: `href`, `type=text`, `href$=".png"`, …
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if a pseudo-class or pseudo-element
    /// has been appended.
    pub fn attr(mut self, fragment: impl Into<String>) -> Result<Self, SelectorError> {
        self.check_order(PartKind::Attribute)?;
        self.attributes.push(fragment.into());
        self.last = Some(PartKind::Attribute);
        Ok(self)
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Append a pseudo-class, rendered as `:name`. Repeatable.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if a pseudo-element has been
    /// appended.
    pub fn pseudo_class(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.check_order(PartKind::PseudoClass)?;
        self.pseudo_classes.push(name.into());
        self.last = Some(PartKind::PseudoClass);
        Ok(self)
    }

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Set the pseudo-element, rendered as `::name`. Always the final part.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if a pseudo-element is already set.
    pub fn pseudo_element(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        if self.pseudo_element.is_some() {
            return Err(SelectorError::DuplicatePart {
                kind: PartKind::PseudoElement,
            });
        }
        self.check_order(PartKind::PseudoElement)?;
        self.pseudo_element = Some(name.into());
        self.last = Some(PartKind::PseudoElement);
        Ok(self)
    }

    /// Whether this selector was produced by [`combine`].
    #[must_use]
    pub const fn is_combined(&self) -> bool {
        self.combined.is_some()
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// Calculate this selector's specificity: id counts toward A; classes,
    /// attributes, and pseudo-classes toward B; the element tag and
    /// pseudo-element toward C. A combined selector reports the sum of its
    /// two sides.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        if let Some(combined) = &self.combined {
            return combined.specificity;
        }
        Specificity(
            u32::from(self.id.is_some()),
            part_count(&self.classes) + part_count(&self.attributes)
                + part_count(&self.pseudo_classes),
            u32::from(self.tag.is_some()) + u32::from(self.pseudo_element.is_some()),
        )
    }

    /// Ordering invariant: a part may not follow a higher-ranked part.
    fn check_order(&self, kind: PartKind) -> Result<(), SelectorError> {
        debug_assert!(
            self.combined.is_none(),
            "cannot append parts to a combined selector"
        );
        match self.last {
            Some(last) if kind < last => Err(SelectorError::OrderViolation {
                appended: kind,
                last,
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Selector {
    /// Render the selector in the fixed fragment order: tag, `#id`,
    /// `.class`es, `[attribute]`s, `:pseudo-class`es, `::pseudo-element`.
    /// A combined selector renders its precomputed text verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(combined) = &self.combined {
            return f.write_str(&combined.text);
        }
        if let Some(tag) = &self.tag {
            f.write_str(tag)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for attribute in &self.attributes {
            write!(f, "[{attribute}]")?;
        }
        for pseudo_class in &self.pseudo_classes {
            write!(f, ":{pseudo_class}")?;
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            write!(f, "::{pseudo_element}")?;
        }
        Ok(())
    }
}

/// Number of parts in a multi-valued list, saturating at `u32::MAX`.
fn part_count(parts: &[String]) -> u32 {
    u32::try_from(parts.len()).unwrap_or(u32::MAX)
}

/// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
///
/// Start a selector from an element tag.
#[must_use]
pub fn element(tag: impl Into<String>) -> Selector {
    Selector {
        tag: Some(tag.into()),
        last: Some(PartKind::Element),
        ..Selector::default()
    }
}

/// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
///
/// Start a selector from an id.
#[must_use]
pub fn id(value: impl Into<String>) -> Selector {
    Selector {
        id: Some(value.into()),
        last: Some(PartKind::Id),
        ..Selector::default()
    }
}

/// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
///
/// Start a selector from a class name.
#[must_use]
pub fn class(name: impl Into<String>) -> Selector {
    Selector {
        classes: vec![name.into()],
        last: Some(PartKind::Class),
        ..Selector::default()
    }
}

/// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// Start a selector from a raw attribute fragment.
#[must_use]
pub fn attr(fragment: impl Into<String>) -> Selector {
    Selector {
        attributes: vec![fragment.into()],
        last: Some(PartKind::Attribute),
        ..Selector::default()
    }
}

/// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
///
/// Start a selector from a pseudo-class.
#[must_use]
pub fn pseudo_class(name: impl Into<String>) -> Selector {
    Selector {
        pseudo_classes: vec![name.into()],
        last: Some(PartKind::PseudoClass),
        ..Selector::default()
    }
}

/// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
///
/// Start a selector from a pseudo-element.
#[must_use]
pub fn pseudo_element(name: impl Into<String>) -> Selector {
    Selector {
        pseudo_element: Some(name.into()),
        last: Some(PartKind::PseudoElement),
        ..Selector::default()
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// Join two selectors with a combinator token, producing a selector that
/// renders `"{left} {combinator} {right}"`.
///
/// The token is spliced verbatim and deliberately not validated against the
/// CSS combinator set; [`combine_with`] offers the typed variant. Both
/// inputs are only read (rendered), never mutated, and either side may
/// itself be a combined selector — its full precomputed text is embedded
/// unchanged.
///
/// The result's specificity is the sum of both sides.
#[must_use]
pub fn combine(left: &Selector, combinator: &str, right: &Selector) -> Selector {
    Selector {
        combined: Some(CombinedSelector {
            text: format!("{left} {combinator} {right}"),
            specificity: left.specificity() + right.specificity(),
        }),
        ..Selector::default()
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// Join two selectors with a typed [`Combinator`].
///
/// The descendant combinator is whitespace, so the sides are joined with a
/// single space; the other combinators render their token between spaces,
/// as [`combine`] does.
#[must_use]
pub fn combine_with(left: &Selector, combinator: Combinator, right: &Selector) -> Selector {
    match combinator {
        Combinator::Descendant => Selector {
            combined: Some(CombinedSelector {
                text: format!("{left} {right}"),
                specificity: left.specificity() + right.specificity(),
            }),
            ..Selector::default()
        },
        _ => combine(left, combinator.token(), right),
    }
}
