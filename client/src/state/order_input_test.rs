use super::*;
use contract::types::Faq;

fn faqs() -> Vec<Faq> {
    serde_json::from_str(r#"[{"_id":"a","order":1},{"_id":"b","order":0}]"#).unwrap()
}

#[test]
fn parse_accepts_positive_whole_numbers() {
    assert_eq!(parse_order("3"), Some(3));
    assert_eq!(parse_order(" 12 "), Some(12));
    assert_eq!(parse_order("4.0"), Some(4));
}

#[test]
fn parse_rejects_invalid_input() {
    for raw in ["", "0", "-2", "abc", "2.5", "NaN", "inf"] {
        assert_eq!(parse_order(raw), None, "{raw}");
    }
}

#[test]
fn buffers_mirror_items() {
    let items = faqs();
    let inputs = OrderInputs::from_items(&items);
    assert_eq!(inputs.value(&items[0]), "1");
    assert_eq!(inputs.value(&items[1]), "0");
}

#[test]
fn invalid_save_reverts_to_current_order() {
    let items = faqs();
    let mut inputs = OrderInputs::from_items(&items);
    inputs.set("a", "zero".to_owned());
    assert_eq!(inputs.begin_save(&items[0]), None);
    assert_eq!(inputs.value(&items[0]), "1");
    assert!(!inputs.is_saving("a"));

    inputs.set("b", "-1".to_owned());
    assert_eq!(inputs.begin_save(&items[1]), None);
    assert_eq!(inputs.value(&items[1]), "1");
}

#[test]
fn valid_save_tracks_in_flight_row() {
    let items = faqs();
    let mut inputs = OrderInputs::from_items(&items);
    inputs.set("a", "7".to_owned());
    assert_eq!(inputs.begin_save(&items[0]), Some(7));
    assert!(inputs.is_saving("a"));
    inputs.finish_save("a", Some(7));
    assert!(!inputs.is_saving("a"));
    assert_eq!(inputs.value(&items[0]), "7");
}
