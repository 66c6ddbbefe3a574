use super::*;
use crate::notify::NotificationType;

#[test]
fn application_decodes_mongo_document() {
    let json = r#"{
        "_id": "65f0c1",
        "applicationId": "SMC-2026-0001",
        "loanType": "personal-loan",
        "status": "processing",
        "fullName": "Aminah Binti Yusof",
        "icNumberMasked": "******-**-1234",
        "phone": "+60123456789",
        "email": "aminah@example.com",
        "address": { "line1": "12 Jalan Mawar", "city": "Shah Alam", "postcode": "40000" },
        "loanAmount": 15000,
        "loanTerm": 36,
        "termsAccepted": true,
        "ctosConsent": true,
        "createdAt": "2026-01-05T08:30:00.000Z",
        "updatedAt": "2026-01-05T08:30:00.000Z",
        "notifications": [
            { "type": "received", "channel": "whatsapp", "sentAt": "2026-01-05T08:31:00.000Z",
              "sentBy": { "name": "Siti" }, "meta": { "message": "Thanks for applying" } }
        ]
    }"#;
    let app: Application = serde_json::from_str(json).unwrap();
    assert_eq!(app.id, "65f0c1");
    assert_eq!(app.status, ApplicationStatus::Processing);
    assert_eq!(app.loan_amount, Some(15000.0));
    assert_eq!(app.loan_term, Some(36));
    assert!(!app.privacy_accepted);
    assert_eq!(app.ic_display(), "******-**-1234");
    let note = &app.notifications[0];
    assert_eq!(note.kind, NotificationType::Received);
    assert_eq!(note.message(), Some("Thanks for applying"));
    assert_eq!(note.sender_name(), Some("Siti"));
}

#[test]
fn missing_masked_ic_is_hidden() {
    let app: Application = serde_json::from_str(r#"{"_id":"1","icNumber":"900101-10-1234"}"#).unwrap();
    assert_eq!(app.ic_display(), "******");
}

#[test]
fn only_approved_and_rejected_are_final() {
    let finals: Vec<_> = ApplicationStatus::ALL.into_iter().filter(|s| s.is_final()).collect();
    assert_eq!(finals, vec![ApplicationStatus::Approved, ApplicationStatus::Rejected]);
}

#[test]
fn reject_update_serializes_reason() {
    let body = serde_json::to_value(ApplicationUpdate::reject("called twice", "Income too low")).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "status": "rejected", "notes": "called twice", "rejectionReason": "Income too low" })
    );
}

#[test]
fn notes_update_omits_status() {
    let body = serde_json::to_value(ApplicationUpdate::notes("follow up")).unwrap();
    assert_eq!(body, serde_json::json!({ "notes": "follow up" }));
}

#[test]
fn replied_by_accepts_object_or_id() {
    let populated: Contact = serde_json::from_str(
        r#"{"_id":"c1","status":"replied","repliedBy":{"_id":"a1","name":"Farid"}}"#,
    )
    .unwrap();
    assert_eq!(populated.replied_by.as_ref().map(RepliedBy::label), Some("Farid"));

    let bare: Contact = serde_json::from_str(r#"{"_id":"c2","repliedBy":"a9"}"#).unwrap();
    assert_eq!(bare.replied_by, Some(RepliedBy::Id("a9".to_owned())));
    assert_eq!(bare.status, ContactStatus::New);
}

#[test]
fn admin_role_uses_kebab_case() {
    let admin: Admin = serde_json::from_str(
        r#"{"id":"a1","username":"root","name":"Nur Aisyah","email":"n@x.my","role":"super-admin"}"#,
    )
    .unwrap();
    assert_eq!(admin.role, AdminRole::SuperAdmin);
    assert_eq!(admin.initials(), "NA");
}

#[test]
fn admin_without_name_displays_username() {
    let admin: Admin = serde_json::from_str(r#"{"_id":"a1","username":"ops"}"#).unwrap();
    assert_eq!(admin.display_name(), "ops");
    assert_eq!(admin.initials(), "O");
}

#[test]
fn dashboard_growth_accepts_string_or_number() {
    let stats: DashboardStats = serde_json::from_str(r#"{"total":10,"growth":"-12.5"}"#).unwrap();
    assert!((stats.growth_percent() + 12.5).abs() < f64::EPSILON);
    assert!(!stats.is_trending_up());

    let stats: DashboardStats = serde_json::from_str(r#"{"growth":8}"#).unwrap();
    assert_eq!(stats.growth, "8");
    assert!(stats.is_trending_up());
}

#[test]
fn conversion_rate_accepts_numeric_string() {
    let stats: Vec<ConversionStat> = serde_json::from_str(
        r#"[{"date":"2026-01-01","applications":4,"approved":1,"conversionRate":"25.00"},
            {"date":"2026-01-02","applications":2,"approved":2,"conversionRate":100}]"#,
    )
    .unwrap();
    assert!((stats[0].conversion_rate - 25.0).abs() < f64::EPSILON);
    assert!((stats[1].conversion_rate - 100.0).abs() < f64::EPSILON);
}

#[test]
fn overview_share_handles_empty_totals() {
    let overview = AnalyticsOverview::default();
    assert_eq!(overview.share_of_total(3), None);

    let overview: AnalyticsOverview =
        serde_json::from_str(r#"{"applications":{"total":8,"approved":2}}"#).unwrap();
    assert_eq!(overview.share_of_total(2), Some(25.0));
    assert_eq!(overview.snapshot()[0], ("Approved", 2));
}

#[test]
fn analytics_period_round_trips_wire_names() {
    assert_eq!(serde_json::to_string(&AnalyticsPeriod::Week).unwrap(), r#""7d""#);
    assert_eq!(AnalyticsPeriod::parse("90d"), Some(AnalyticsPeriod::Quarter));
    assert_eq!(AnalyticsPeriod::default().label(), "Last 30 days");
}

#[test]
fn next_order_is_max_plus_one() {
    let faqs: Vec<Faq> = serde_json::from_str(r#"[{"_id":"a","order":3},{"_id":"b","order":7}]"#).unwrap();
    assert_eq!(next_order(&faqs), 8);
    assert_eq!(next_order::<Faq>(&[]), 1);
}

#[test]
fn sort_by_order_is_stable() {
    let mut items: Vec<Testimonial> =
        serde_json::from_str(r#"[{"_id":"x","order":2},{"_id":"y","order":1},{"_id":"z","order":2}]"#).unwrap();
    sort_by_order(&mut items);
    let ids: Vec<_> = items.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["y", "x", "z"]);
}

#[test]
fn reorder_moves_item_and_resorts() {
    let mut faqs: Vec<Faq> =
        serde_json::from_str(r#"[{"_id":"a","order":1},{"_id":"b","order":2},{"_id":"c","order":3}]"#).unwrap();
    assert!(reorder(&mut faqs, "a", 5));
    let ids: Vec<_> = faqs.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, ["b", "c", "a"]);
    assert!(!reorder(&mut faqs, "missing", 1));
}

#[test]
fn reordered_faq_keeps_full_record() {
    let faq: Faq = serde_json::from_str(
        r#"{"_id":"f","question":{"en":"Q","ms":"S"},"answer":{"en":"A","ms":"J"},"category":"fees","order":2,"isActive":true}"#,
    )
    .unwrap();
    let body = serde_json::to_value(FaqPayload::reordered(&faq, 5)).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "question": {"en":"Q","ms":"S"},
            "answer": {"en":"A","ms":"J"},
            "category": "fees",
            "isActive": true,
            "order": 5
        })
    );
}

#[test]
fn product_update_preserves_rate_type() {
    let product: Product = serde_json::from_str(
        r#"{"_id":"p","loanAmount":{"min":1000,"max":50000},"interestRate":{"min":4.88,"max":18,"type":"flat"},"tenure":{"min":12,"max":60}}"#,
    )
    .unwrap();
    let update = ProductUpdate {
        loan_amount: product.loan_amount,
        interest_rate: RateRange { min: 5.0, ..product.interest_rate.clone() },
        tenure: product.tenure,
        is_active: true,
        is_featured: false,
    };
    let body = serde_json::to_value(update).unwrap();
    assert_eq!(body["interestRate"]["type"], "flat");
    assert_eq!(body["interestRate"]["min"], 5.0);
}

#[test]
fn settings_round_trip_keeps_absent_members_absent() {
    let settings: SiteSettings = serde_json::from_str(
        r#"{"siteName":"SeaMoneeCredit","contact":{"phone":"+603","geo":{"lat":3.1}},"locations":[{"slug":"kl","name":{"en":"Kuala Lumpur"}}]}"#,
    )
    .unwrap();
    let body = serde_json::to_value(&settings).unwrap();
    assert!(body.get("seo").is_none());
    assert_eq!(body["contact"]["geo"], serde_json::json!({ "lat": 3.1 }));
    assert_eq!(body["locations"][0]["name"], serde_json::json!({ "en": "Kuala Lumpur" }));
}

#[test]
fn localized_completeness_ignores_whitespace() {
    assert!(Localized::new("Hello", "Helo").is_complete());
    assert!(!Localized::new("Hello", "  ").is_complete());
    assert!(LocalizedValue::default().is_empty());
    assert!(!LocalizedValue { en: Some("x".into()), ms: None }.is_empty());
}

#[test]
fn localized_value_set_fills_one_language() {
    let mut value = LocalizedValue::default();
    value.set(Lang::Ms, "Selangor");
    assert_eq!(value.get(Lang::Ms), "Selangor");
    assert_eq!(value.get(Lang::En), "");
    assert_eq!(value.en, None);
}
