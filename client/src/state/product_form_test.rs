use super::*;

fn product() -> Product {
    serde_json::from_str(
        r#"{"_id":"p1","name":{"en":"Personal Loan","ms":"Pinjaman Peribadi"},
            "loanAmount":{"min":1000,"max":50000},
            "interestRate":{"min":4.88,"max":18,"type":"flat"},
            "tenure":{"min":12,"max":60},"isActive":true,"isFeatured":false}"#,
    )
    .unwrap()
}

#[test]
fn update_keeps_rate_type() {
    let mut form = ProductForm::edit(&product());
    form.max_rate = number_input("16.5");
    form.is_featured = true;
    let update = form.update();
    assert_eq!(update.interest_rate.kind, "flat");
    assert!((update.interest_rate.max - 16.5).abs() < f64::EPSILON);
    assert!(update.is_featured);
    assert_eq!(form.title(), "Edit Personal Loan");
}

#[test]
fn number_input_matches_browser_coercion() {
    assert!(number_input("").abs() < f64::EPSILON);
    assert!(number_input("abc").abs() < f64::EPSILON);
    assert!((number_input(" 2500 ") - 2500.0).abs() < f64::EPSILON);
}

#[test]
fn card_labels() {
    let p = product();
    assert_eq!(amount_label(p.loan_amount), "RM 1,000 - 50,000");
    assert_eq!(rate_label(&p.interest_rate), "4.88% - 18% p.a.");
    assert_eq!(tenure_label(p.tenure), "12 - 60 months");
    assert_eq!(counts(&[p]), (1, 0));
}
