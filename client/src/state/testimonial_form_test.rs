use super::*;

fn filled() -> TestimonialForm {
    let mut form = TestimonialForm::create(2);
    form.name = "Ahmad bin Hassan".to_owned();
    form.content = Localized::new("Fast approval.", "Kelulusan pantas.");
    form
}

#[test]
fn defaults_to_five_stars_active() {
    let form = TestimonialForm::create(3);
    assert_eq!(form.rating, 5);
    assert!(form.is_active);
    assert!(!form.is_featured);
    assert_eq!(form.order, 3);
}

#[test]
fn rules_apply_in_order() {
    let mut form = TestimonialForm::create(1);
    assert_eq!(form.validate(), Err(NAME_REQUIRED));
    form.name = "Ahmad".to_owned();
    assert_eq!(form.validate(), Err(INCOMPLETE_REVIEW));
    form.content = Localized::new("Good", "Bagus");
    form.rating = 0;
    assert_eq!(form.validate(), Err(RATING_OUT_OF_RANGE));
    form.rating = 4;
    form.order = 0;
    assert_eq!(form.validate(), Err(ORDER_NOT_POSITIVE));
}

#[test]
fn blank_optional_fields_are_omitted() {
    let mut form = filled();
    form.location = "  ".to_owned();
    form.occupation = "Engineer".to_owned();
    let payload = form.submit().unwrap();
    assert_eq!(payload.location, None);
    assert_eq!(payload.occupation.as_deref(), Some("Engineer"));
    let body = serde_json::to_value(&payload).unwrap();
    assert!(body.get("location").is_none());
}

#[test]
fn header_counts_and_stars() {
    let items: Vec<Testimonial> = serde_json::from_str(
        r#"[{"_id":"a","isActive":true,"isFeatured":true},{"_id":"b","isActive":true},{"_id":"c"}]"#,
    )
    .unwrap();
    assert_eq!(counts(&items), (2, 1));
    assert_eq!(stars(3), "\u{2605}\u{2605}\u{2605}\u{2606}\u{2606}");
}
