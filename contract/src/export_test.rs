use super::*;

#[test]
fn filename_is_taken_from_quoted_header() {
    let header = Some(r#"attachment; filename="applications_2026-01-05.xlsx""#);
    assert_eq!(
        filename_from_content_disposition(header, ExportKind::Applications),
        "applications_2026-01-05.xlsx"
    );
}

#[test]
fn missing_or_unquoted_filename_falls_back_to_kind() {
    assert_eq!(filename_from_content_disposition(None, ExportKind::Contacts), "contacts_export.xlsx");
    assert_eq!(
        filename_from_content_disposition(Some("attachment; filename=raw.xlsx"), ExportKind::Analytics),
        "analytics_export.xlsx"
    );
    assert_eq!(
        filename_from_content_disposition(Some(r#"attachment; filename="""#), ExportKind::Contacts),
        "contacts_export.xlsx"
    );
}

#[test]
fn only_non_empty_filters_are_sent() {
    let filters = ExportFilters {
        status: "approved".into(),
        loan_type: String::new(),
        start_date: "2026-01-01".into(),
        end_date: "  ".into(),
    };
    assert_eq!(
        filters.pairs(),
        vec![("status", "approved".to_owned()), ("startDate", "2026-01-01".to_owned())]
    );
    assert!(ExportFilters::default().is_empty());
}

#[test]
fn analytics_has_no_filter_dialog() {
    assert!(ExportKind::Applications.supports_filters());
    assert!(ExportKind::Contacts.supports_filters());
    assert!(!ExportKind::Analytics.supports_filters());
    assert!(!ExportKind::Contacts.supports_application_filters());
}

#[test]
fn labels_name_the_export() {
    assert_eq!(ExportKind::Contacts.label(), "Export Contacts");
    assert_eq!(ExportKind::parse("analytics"), Some(ExportKind::Analytics));
    assert_eq!(ExportKind::parse("blogs"), None);
}
