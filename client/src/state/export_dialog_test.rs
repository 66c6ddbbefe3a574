use super::*;

#[test]
fn export_all_ignores_filters() {
    let mut dialog = ExportDialog::new(ExportKind::Applications);
    dialog.filters.status = "approved".to_owned();
    assert_eq!(dialog.begin(false), Some(ExportFilters::default()));
    assert!(dialog.exporting);
    assert_eq!(dialog.begin(true), None);
}

#[test]
fn contacts_drop_application_only_filters() {
    let mut dialog = ExportDialog::new(ExportKind::Contacts);
    dialog.open_filters();
    assert!(dialog.show_filters);
    dialog.filters.status = "approved".to_owned();
    dialog.filters.start_date = "2026-01-01".to_owned();
    let filters = dialog.begin(true).unwrap();
    assert_eq!(filters.status, "");
    assert_eq!(filters.start_date, "2026-01-01");
}

#[test]
fn analytics_has_no_filter_dialog() {
    let mut dialog = ExportDialog::new(ExportKind::Analytics);
    dialog.toggle_menu();
    assert!(dialog.menu_open);
    dialog.open_filters();
    assert!(!dialog.show_filters);
    assert!(!dialog.menu_open);
}

#[test]
fn finish_closes_filters_or_reports_failure() {
    let mut dialog = ExportDialog::new(ExportKind::Applications);
    dialog.open_filters();
    dialog.begin(true);
    dialog.finish(false);
    assert!(dialog.show_filters);
    assert_eq!(dialog.error.as_deref(), Some(EXPORT_FAILED_MESSAGE));
    dialog.begin(true);
    assert_eq!(dialog.error, None);
    dialog.finish(true);
    assert!(!dialog.show_filters);
    assert!(!dialog.exporting);
}
