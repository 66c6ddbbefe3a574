use super::*;

#[test]
fn known_loan_types_are_shortened() {
    assert_eq!(loan_type_short("personal-loan"), "Personal");
    assert_eq!(loan_type_short("education-loan"), "Education");
}

#[test]
fn unknown_loan_types_are_humanized() {
    assert_eq!(loan_type_short("islamic-financing"), "Islamic Financing");
}
