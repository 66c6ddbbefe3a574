use super::*;

fn filled() -> FaqForm {
    let mut form = FaqForm::create(4);
    form.question = Localized::new("How long is approval?", "Berapa lama kelulusan?");
    form.answer = Localized::new("Usually 24 hours.", "Biasanya 24 jam.");
    form
}

#[test]
fn new_form_defaults() {
    let form = FaqForm::create(4);
    assert_eq!(form.category, "general");
    assert!(form.is_active);
    assert_eq!(form.order, 4);
    assert_eq!(form.title(), "Add New FAQ");
}

#[test]
fn missing_translation_is_rejected() {
    let mut form = filled();
    form.answer.ms = "   ".to_owned();
    assert_eq!(form.validate(), Err(INCOMPLETE_TRANSLATION));
    assert_eq!(form.submit(), None);
    assert_eq!(form.error.as_deref(), Some(INCOMPLETE_TRANSLATION));
}

#[test]
fn non_positive_order_is_rejected() {
    let mut form = filled();
    form.order = order_from_input("-3");
    assert_eq!(form.validate(), Err(ORDER_NOT_POSITIVE));
}

#[test]
fn dialog_order_input_falls_back_to_one() {
    assert_eq!(order_from_input(""), 1);
    assert_eq!(order_from_input("0"), 1);
    assert_eq!(order_from_input("abc"), 1);
    assert_eq!(order_from_input("6"), 6);
}

#[test]
fn valid_form_builds_payload() {
    let mut form = filled();
    form.category = "fees".to_owned();
    let payload = form.submit().unwrap();
    assert_eq!(payload.order, 4);
    assert_eq!(payload.category, "fees");
    assert_eq!(payload.question.ms, "Berapa lama kelulusan?");
    assert_eq!(form.error, None);
}

#[test]
fn edit_form_copies_record() {
    let faq: Faq = serde_json::from_str(
        r#"{"_id":"f1","question":{"en":"Q","ms":"S"},"answer":{"en":"A","ms":"J"},"category":"payment","order":0,"isActive":false}"#,
    )
    .unwrap();
    let form = FaqForm::edit(&faq);
    assert_eq!(form.editing_id.as_deref(), Some("f1"));
    assert_eq!(form.order, 1);
    assert!(!form.is_active);
    assert_eq!(form.title(), "Edit FAQ");
}
