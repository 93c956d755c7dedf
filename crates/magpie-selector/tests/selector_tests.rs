//! Integration tests for selector building and combination.

use magpie_selector::{
    Combinator, PartKind, Selector, SelectorError, Specificity, attr, class, combine,
    combine_with, element, id, pseudo_class, pseudo_element,
};

// Rendering Order Tests
// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)

#[test]
fn test_render_element_only() {
    assert_eq!(element("div").to_string(), "div");
}

#[test]
fn test_render_single_part_entry_points() {
    assert_eq!(id("main").to_string(), "#main");
    assert_eq!(class("highlight").to_string(), ".highlight");
    assert_eq!(attr("href").to_string(), "[href]");
    assert_eq!(pseudo_class("hover").to_string(), ":hover");
    assert_eq!(pseudo_element("before").to_string(), "::before");
}

#[test]
fn test_render_element_attr_pseudo_class() {
    let selector = element("a")
        .attr(r#"href$=".png""#)
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(selector.to_string(), r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_render_id_with_classes() {
    let selector = id("main")
        .class("container")
        .unwrap()
        .class("editable")
        .unwrap();
    assert_eq!(selector.to_string(), "#main.container.editable");
}

#[test]
fn test_render_all_part_kinds_in_fixed_order() {
    let selector = element("div")
        .id("main")
        .unwrap()
        .class("container")
        .unwrap()
        .class("wide")
        .unwrap()
        .attr("data-theme*=dark")
        .unwrap()
        .pseudo_class("hover")
        .unwrap()
        .pseudo_class("focus")
        .unwrap()
        .pseudo_element("after")
        .unwrap();
    assert_eq!(
        selector.to_string(),
        "div#main.container.wide[data-theme*=dark]:hover:focus::after"
    );
}

#[test]
fn test_render_is_idempotent() {
    let selector = element("table").id("data").unwrap();
    assert_eq!(selector.to_string(), selector.to_string());
    assert_eq!(selector.to_string(), "table#data");
}

#[test]
fn test_render_empty_selector() {
    assert_eq!(Selector::new().to_string(), "");
}

// Uniqueness Tests
// Element, id, and pseudo-element may each be set at most once.

#[test]
fn test_duplicate_id_rejected() {
    let err = id("main").id("other").unwrap_err();
    assert_eq!(err, SelectorError::DuplicatePart { kind: PartKind::Id });
}

#[test]
fn test_duplicate_element_rejected() {
    let err = element("div").element("span").unwrap_err();
    assert_eq!(
        err,
        SelectorError::DuplicatePart {
            kind: PartKind::Element
        }
    );
}

#[test]
fn test_duplicate_pseudo_element_rejected() {
    let err = pseudo_element("before").pseudo_element("after").unwrap_err();
    assert_eq!(
        err,
        SelectorError::DuplicatePart {
            kind: PartKind::PseudoElement
        }
    );
}

// Ordering Tests
// Parts must be appended in rank order: element < id < class < attribute
// < pseudo-class < pseudo-element.

#[test]
fn test_class_after_attr_rejected() {
    let err = element("a")
        .attr("href")
        .unwrap()
        .class("external")
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::OrderViolation {
            appended: PartKind::Class,
            last: PartKind::Attribute,
        }
    );
}

#[test]
fn test_element_after_id_rejected() {
    let err = id("main").element("div").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OrderViolation {
            appended: PartKind::Element,
            last: PartKind::Id,
        }
    );
}

#[test]
fn test_id_after_pseudo_class_rejected() {
    let err = pseudo_class("hover").id("main").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OrderViolation {
            appended: PartKind::Id,
            last: PartKind::PseudoClass,
        }
    );
}

#[test]
fn test_multi_valued_parts_repeat_without_violation() {
    // Equal rank never violates ordering for class, attribute, pseudo-class.
    let selector = class("a")
        .class("b")
        .unwrap()
        .attr("x")
        .unwrap()
        .attr("y")
        .unwrap()
        .pseudo_class("hover")
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(selector.to_string(), ".a.b[x][y]:hover:focus");
}

#[test]
fn test_order_violation_reported_at_offending_call() {
    // The failing append reports the highest rank reached, not the first.
    let err = element("div")
        .class("container")
        .unwrap()
        .pseudo_element("before")
        .unwrap()
        .attr("href")
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::OrderViolation {
            appended: PartKind::Attribute,
            last: PartKind::PseudoElement,
        }
    );
}

// Combination Tests
// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

#[test]
fn test_combine_next_sibling() {
    let left = element("div").id("main").unwrap();
    let right = element("table").id("data").unwrap();
    let selector = combine(&left, "+", &right);
    assert_eq!(selector.to_string(), "div#main + table#data");
    assert!(selector.is_combined());
}

#[test]
fn test_combine_token_is_not_validated() {
    // Any token string is accepted and spliced verbatim.
    let selector = combine(&element("a"), ">>>", &element("b"));
    assert_eq!(selector.to_string(), "a >>> b");
}

#[test]
fn test_nested_combine_embeds_inner_text_verbatim() {
    let inner = combine(&element("p"), ">", &element("span"));
    let outer = combine(&inner, "~", &element("a"));
    assert_eq!(outer.to_string(), "p > span ~ a");
}

#[test]
fn test_combine_does_not_mutate_inputs() {
    let left = element("ul");
    let right = element("li");
    let _joined = combine(&left, ">", &right);
    assert_eq!(left.to_string(), "ul");
    assert_eq!(right.to_string(), "li");
}

#[test]
fn test_combine_with_descendant_joins_with_single_space() {
    let selector = combine_with(&element("div"), Combinator::Descendant, &element("p"));
    assert_eq!(selector.to_string(), "div p");
}

#[test]
fn test_combine_with_child() {
    let selector = combine_with(&element("ul"), Combinator::Child, &element("li"));
    assert_eq!(selector.to_string(), "ul > li");
}

#[test]
fn test_combinator_tokens() {
    assert_eq!(Combinator::Descendant.token(), " ");
    assert_eq!(Combinator::Child.token(), ">");
    assert_eq!(Combinator::NextSibling.token(), "+");
    assert_eq!(Combinator::SubsequentSibling.token(), "~");
}

// Specificity Tests
// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)

#[test]
fn test_specificity_of_compound_selector() {
    let selector = element("div")
        .id("main")
        .unwrap()
        .class("container")
        .unwrap()
        .attr("href")
        .unwrap()
        .pseudo_class("focus")
        .unwrap()
        .pseudo_element("before")
        .unwrap();
    // A: one id. B: class + attribute + pseudo-class. C: tag + pseudo-element.
    assert_eq!(selector.specificity(), Specificity(1, 3, 2));
}

#[test]
fn test_specificity_of_combined_selector_sums_both_sides() {
    let left = element("div").id("main").unwrap();
    let right = element("table").class("sortable").unwrap();
    let selector = combine(&left, "+", &right);
    assert_eq!(selector.specificity(), Specificity(1, 1, 2));
}

#[test]
fn test_specificity_ordering_is_lexicographic() {
    assert!(Specificity(1, 0, 0) > Specificity(0, 9, 9));
    assert!(Specificity(0, 1, 0) > Specificity(0, 0, 9));
    assert_eq!(Specificity::new(0, 2, 1), Specificity(0, 2, 1));
}

// Part Kind Tests

#[test]
fn test_part_kind_rank_order() {
    assert_eq!(PartKind::Element.rank(), 0);
    assert_eq!(PartKind::Id.rank(), 1);
    assert_eq!(PartKind::Class.rank(), 2);
    assert_eq!(PartKind::Attribute.rank(), 3);
    assert_eq!(PartKind::PseudoClass.rank(), 4);
    assert_eq!(PartKind::PseudoElement.rank(), 5);
    assert!(PartKind::Element < PartKind::PseudoElement);
}

#[test]
fn test_part_kind_multi_valued() {
    assert!(PartKind::Class.is_multi_valued());
    assert!(PartKind::Attribute.is_multi_valued());
    assert!(PartKind::PseudoClass.is_multi_valued());
    assert!(!PartKind::Element.is_multi_valued());
    assert!(!PartKind::Id.is_multi_valued());
    assert!(!PartKind::PseudoElement.is_multi_valued());
}

// Error Message Tests

#[test]
fn test_error_messages_name_part_kinds() {
    let duplicate = SelectorError::DuplicatePart {
        kind: PartKind::PseudoElement,
    };
    assert_eq!(
        duplicate.to_string(),
        "duplicate pseudo-element part: at most one pseudo-element may be set per selector"
    );

    let order = SelectorError::OrderViolation {
        appended: PartKind::Class,
        last: PartKind::PseudoClass,
    };
    assert_eq!(order.to_string(), "class part cannot follow pseudo-class part");
}

// Serialization Tests

#[test]
fn test_specificity_serializes_as_triple() {
    let json = serde_json::to_string(&Specificity(1, 0, 2)).unwrap();
    assert_eq!(json, "[1,0,2]");
}

#[test]
fn test_part_kind_serializes_as_variant_name() {
    let value = serde_json::to_value(PartKind::PseudoClass).unwrap();
    assert_eq!(value, serde_json::json!("PseudoClass"));
}
