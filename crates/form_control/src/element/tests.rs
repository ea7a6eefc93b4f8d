use super::*;
use input_core::RangeError;
use segment::SegmentKind;
use std::collections::HashMap;

const DATE: &str = r"(\d{4})-(\d{2})-(\d{2})";

fn element(attributes: &[(&str, Option<&str>)]) -> RichInputElement {
    RichInputElement::with_attributes(InputId::from_raw(1), attributes.iter().copied())
}

fn kinds_and_text<S: InputStore>(el: &RichInputElement<S>) -> Vec<(SegmentKind, String)> {
    el.segments()
        .into_iter()
        .map(|s| (s.kind, s.text.to_string()))
        .collect()
}

#[test]
fn date_value_is_split_into_groups() {
    let mut el = element(&[("stylepattern", Some(DATE))]);
    el.set_value("2024-01-15");

    assert_eq!(
        kinds_and_text(&el),
        vec![
            (SegmentKind::Group(1), "2024".to_string()),
            (SegmentKind::Plain, "-".to_string()),
            (SegmentKind::Group(2), "01".to_string()),
            (SegmentKind::Plain, "-".to_string()),
            (SegmentKind::Group(3), "15".to_string()),
        ]
    );
    assert_eq!(
        el.markup(),
        r#"<b part="group-1">2024</b>-<b part="group-2">01</b>-<b part="group-3">15</b>"#
    );
}

#[test]
fn partial_value_renders_plain_and_escaped() {
    let mut el = element(&[("stylepattern", Some(DATE))]);
    el.set_value("2024-01<");
    assert_eq!(
        kinds_and_text(&el),
        vec![(SegmentKind::Plain, "2024-01<".to_string())]
    );
    assert_eq!(el.markup(), "2024-01&lt;");
}

#[test]
fn invalid_style_pattern_disables_highlighting() {
    let mut el = element(&[("stylepattern", Some("(unclosed"))]);
    el.set_value("(unclosed");
    assert!(el.style_pattern_compiled().is_none());
    assert_eq!(el.markup(), "(unclosed");
    assert_eq!(el.style_pattern(), Some("(unclosed"));
}

#[test]
fn style_pattern_change_recolours_current_value() {
    let mut el = element(&[("value", Some("ab"))]);
    assert_eq!(el.markup(), "ab");

    el.attribute_changed("stylepattern", Some("(a)(b)"));
    assert_eq!(el.markup(), r#"<b part="group-1">a</b><b part="group-2">b</b>"#);

    el.attribute_changed("stylepattern", None);
    assert!(el.style_pattern_compiled().is_none());
    assert_eq!(el.markup(), "ab");
}

#[test]
fn identical_style_pattern_keeps_compiled_pattern() {
    let mut el = element(&[("stylepattern", Some(DATE))]);
    let before = el.style_pattern_compiled().cloned();
    el.set_style_pattern(Some(DATE));
    assert_eq!(el.style_pattern_compiled().cloned(), before);
}

#[test]
fn unobserved_attribute_is_ignored() {
    let mut el = element(&[]);
    assert_eq!(el.attribute_changed("class", Some("wide")), None);
    assert_eq!(
        el.attribute_changed("Required", Some("")),
        Some(AttributeName::Required)
    );
    assert!(el.required());
}

#[test]
fn value_attribute_seeds_and_follows_until_dirty() {
    let mut el = element(&[("value", Some("seed"))]);
    assert_eq!(el.value(), "seed");
    assert_eq!(el.default_value(), Some("seed"));

    el.set_default_value(Some("other"));
    assert_eq!(el.value(), "other");

    el.set_value("typed");
    el.set_default_value(Some("ignored"));
    assert_eq!(el.value(), "typed");
    assert_eq!(el.default_value(), Some("ignored"));
}

#[test]
fn value_strips_newlines() {
    let mut el = element(&[]);
    el.set_value("a\nb");
    assert_eq!(el.value(), "ab");
    assert_eq!(el.form_value(), "ab");
}

#[test]
fn unknown_type_falls_back_to_text() {
    let mut el = element(&[("type", Some("number"))]);
    assert_eq!(el.input_type(), InputType::Text);
    el.set_input_type(InputType::Url);
    assert_eq!(el.input_type(), InputType::Url);
    assert!(el.attributes().contains(&("type", "url".to_string())));
}

#[test]
fn read_only_getter_reflects_attribute() {
    let mut el = element(&[("readonly", Some(""))]);
    assert!(el.read_only());
    assert!(!el.disabled());
    el.set_read_only(false);
    assert!(!el.read_only());
    assert!(!el.attributes().iter().any(|(name, _)| *name == "readonly"));
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn no_selection_follows_caret_and_selection() {
    let mut el = element(&[("value", Some("hello"))]);
    assert!(el.no_selection());
    assert_eq!(el.selection_start(), Some(5));

    el.set_selection_range(1, 3, Some(SelectionDirection::Forward))
        .unwrap();
    assert!(!el.no_selection());
    assert_eq!(el.selection_start(), Some(1));
    assert_eq!(el.selection_end(), Some(3));
    assert_eq!(el.selection_direction(), Some(SelectionDirection::Forward));
    assert_eq!(el.selected_text(), Some("el"));

    el.set_selection_range(2, 2, None).unwrap();
    assert!(el.no_selection());
    assert_eq!(el.selected_text(), None);
}

#[test]
fn selection_setters_keep_range_ordered() {
    let mut el = element(&[("value", Some("abcdef"))]);
    el.set_selection_range(1, 2, None).unwrap();

    el.set_selection_start(4).unwrap();
    assert_eq!((el.selection_start(), el.selection_end()), (Some(4), Some(4)));

    el.set_selection_end(6).unwrap();
    assert_eq!((el.selection_start(), el.selection_end()), (Some(4), Some(6)));

    el.set_selection_direction(SelectionDirection::Backward)
        .unwrap();
    assert_eq!(el.selection_direction(), Some(SelectionDirection::Backward));
    assert_eq!((el.selection_start(), el.selection_end()), (Some(4), Some(6)));
}

#[test]
fn email_rejects_selection_apis() {
    let mut el = element(&[("type", Some("email")), ("value", Some("a@b.c"))]);

    assert_eq!(el.selection_start(), None);
    assert_eq!(el.selection_end(), None);
    assert_eq!(el.selection_direction(), None);
    assert!(!el.no_selection());

    assert!(matches!(
        el.set_selection_range(0, 1, None),
        Err(ControlError::InvalidState(_))
    ));
    assert!(matches!(
        el.set_selection_start(0),
        Err(ControlError::InvalidState(_))
    ));
    assert!(matches!(
        el.set_range_text("x", None, SelectMode::Preserve),
        Err(ControlError::InvalidState(_))
    ));
    assert_eq!(el.value(), "a@b.c");

    // select() is allowed for every type.
    el.select();
    assert_eq!(el.value(), "a@b.c");
}

#[test]
fn range_text_updates_output() {
    let mut el = element(&[("stylepattern", Some(r"(\w+) (\w+)")), ("value", Some("hi there"))]);
    el.set_range_text("hello", Some((0, 2)), SelectMode::Select)
        .unwrap();
    assert_eq!(el.value(), "hello there");
    assert_eq!(
        el.markup(),
        r#"<b part="group-1">hello</b> <b part="group-2">there</b>"#
    );
    assert_eq!((el.selection_start(), el.selection_end()), (Some(0), Some(5)));
    assert!(!el.no_selection());
}

#[test]
fn range_text_rejects_inverted_range() {
    let mut el = element(&[("value", Some("abc"))]);
    let err = el
        .set_range_text("x", Some((2, 1)), SelectMode::End)
        .unwrap_err();
    assert_eq!(
        err,
        ControlError::IndexSize(RangeError::StartAfterEnd { start: 2, end: 1 })
    );
    assert_eq!(el.value(), "abc");
}

#[test]
fn select_covers_value() {
    let mut el = element(&[("value", Some("abc"))]);
    el.select();
    assert_eq!((el.selection_start(), el.selection_end()), (Some(0), Some(3)));
    assert!(!el.no_selection());
}

#[test]
fn host_selection_change_is_picked_up() {
    let mut el = element(&[("value", Some("abc"))]);
    let id = el.id();
    el.store_mut()
        .set_selection_range(id, 0, 2, SelectionDirection::None);
    assert!(el.no_selection());
    el.on_selection_change();
    assert!(!el.no_selection());
}

// =============================================================================
// Focus and datalist
// =============================================================================

#[test]
fn datalist_is_copied_while_focused() {
    let mut lists = HashMap::new();
    lists.insert(
        "fruits".to_string(),
        vec!["apple".to_string(), "pear".to_string()],
    );

    let mut el = element(&[("list", Some("fruits"))]);
    assert_eq!(el.list(), Some("fruits"));
    assert_eq!(el.datalist_options(), None);

    el.focus(&lists);
    assert!(el.is_focused());
    assert_eq!(
        el.datalist_options(),
        Some(&["apple".to_string(), "pear".to_string()][..])
    );

    // The copy is independent of later source changes.
    lists.clear();
    assert_eq!(el.datalist_options().map(<[String]>::len), Some(2));

    el.blur();
    assert!(!el.is_focused());
    assert_eq!(el.datalist_options(), None);
}

#[test]
fn missing_datalist_yields_no_options() {
    let mut el = element(&[("list", Some("nope"))]);
    el.focus(&());
    assert!(el.is_focused());
    assert_eq!(el.datalist_options(), None);

    el.set_list(None);
    el.focus(&());
    assert_eq!(el.list(), None);
}

// =============================================================================
// Form association and validation
// =============================================================================

#[test]
fn form_entry_requires_name_and_enabled() {
    let mut el = element(&[("value", Some("v"))]);
    assert_eq!(el.form_entry(), None);

    el.set_name(Some("field"));
    assert_eq!(el.form_entry(), Some(("field", "v")));

    el.set_disabled(true);
    assert_eq!(el.form_entry(), None);
}

#[test]
fn form_owner_is_recorded() {
    let mut el = element(&[]);
    assert_eq!(el.form(), None);
    el.set_form_owner(Some("signup".to_string()));
    assert_eq!(el.form(), Some("signup"));
}

#[test]
fn required_empty_value_is_invalid() {
    let mut el = element(&[("required", Some(""))]);
    assert!(el.validity().value_missing);
    assert!(!el.check_validity());
    assert_eq!(el.validation_message(), "Please fill out this field.");

    el.set_value("x");
    assert!(el.check_validity());
    assert_eq!(el.validation_message(), "");
}

#[test]
fn barred_controls_always_check_valid() {
    let mut el = element(&[("required", Some("")), ("readonly", Some(""))]);
    assert!(!el.will_validate());
    assert!(el.check_validity());
    assert_eq!(el.validation_message(), "");

    el.set_read_only(false);
    el.set_disabled(true);
    assert!(!el.will_validate());
    assert!(el.check_validity());
}

#[test]
fn report_validity_records_message() {
    let mut el = element(&[("pattern", Some(r"\d+")), ("value", Some("abc"))]);
    assert!(!el.report_validity());
    assert_eq!(el.reported_message(), Some("Please match the requested format."));

    el.set_value("123");
    assert!(el.report_validity());
    assert_eq!(el.reported_message(), None);
}

#[test]
fn custom_validity_persists_until_cleared() {
    let mut el = element(&[]);
    el.set_custom_validity("Name taken");
    assert!(el.validity().custom_error);
    assert_eq!(el.validation_message(), "Name taken");

    el.set_value("another");
    assert!(el.validity().custom_error);

    let id = el.id();
    el.store_mut().set(id, "typed".to_string());
    el.on_input();
    assert!(el.validity().custom_error);
    assert_eq!(el.validation_message(), "Name taken");

    el.set_custom_validity("");
    assert!(el.check_validity());
}

#[test]
fn max_length_only_applies_to_user_edits() {
    let mut el = element(&[("maxlength", Some("3"))]);
    el.set_value("abcd");
    assert!(!el.validity().too_long);

    let id = el.id();
    el.store_mut().insert_text(id, "e");
    el.on_input();
    assert_eq!(el.value(), "abcde");
    assert!(el.validity().too_long);

    el.set_value("abcd");
    assert!(!el.validity().too_long);
}

#[test]
fn email_type_mismatch_is_reported() {
    let mut el = element(&[("type", Some("email"))]);
    el.set_value("not-an-email");
    assert!(el.validity().type_mismatch);
    el.set_value("someone@example.org");
    assert!(el.check_validity());
}

#[test]
fn numeric_reflection_round_trips() {
    let mut el = element(&[]);
    el.set_max_length(Some(10));
    el.set_size(Some(30));
    assert_eq!(el.max_length(), Some(10));
    assert_eq!(el.size(), Some(30));
    let attrs = el.attributes();
    assert!(attrs.contains(&("maxlength", "10".to_string())));
    assert!(attrs.contains(&("size", "30".to_string())));

    el.set_max_length(None);
    assert_eq!(el.max_length(), None);
}

#[test]
fn string_reflection_round_trips() {
    let mut el = element(&[]);
    el.set_placeholder(Some("YYYY-MM-DD"));
    el.set_autocomplete(Some("off"));
    el.set_dir_name(Some("field.dir"));
    el.set_pattern(Some("[a-z]+"));
    assert_eq!(el.placeholder(), Some("YYYY-MM-DD"));
    assert_eq!(el.autocomplete(), Some("off"));
    assert_eq!(el.dir_name(), Some("field.dir"));
    assert_eq!(el.pattern(), Some("[a-z]+"));
    assert_eq!(el.name(), None);
    assert_eq!(el.config().placeholder.as_deref(), Some("YYYY-MM-DD"));
}

#[test]
fn absent_style_pattern_leaves_empty_value_plain() {
    let mut seeded = element(&[("stylepattern", None)]);
    seeded.set_value("");
    assert!(seeded.style_pattern().is_none());
    assert_eq!(kinds_and_text(&seeded), vec![(SegmentKind::Plain, String::new())]);

    let mut removed = element(&[("stylepattern", Some(DATE))]);
    removed.attribute_changed("stylepattern", None);
    removed.set_value("");
    assert_eq!(kinds_and_text(&removed), kinds_and_text(&seeded));
}
