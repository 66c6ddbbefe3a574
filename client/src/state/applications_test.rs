use super::*;

#[test]
fn defaults_hide_duplicates_on_first_page() {
    let filters = ApplicationFilters::default();
    let query = filters.query();
    assert_eq!(query.page, 1);
    assert!(query.dedupe);
    assert_eq!(query.loan_type, None);
    assert_eq!(query.status, None);
}

#[test]
fn search_applies_only_on_submit() {
    let mut filters = ApplicationFilters { page: 4, ..ApplicationFilters::default() };
    filters.search_input = "  Siti  ".to_owned();
    assert_eq!(filters.query().search, "");
    filters.submit_search();
    assert_eq!(filters.query().search, "Siti");
    assert_eq!(filters.page, 1);
}

#[test]
fn status_chip_toggles() {
    let mut filters = ApplicationFilters::default();
    filters.toggle_status(ApplicationStatus::Pending);
    assert_eq!(filters.status, Some(ApplicationStatus::Pending));
    filters.toggle_status(ApplicationStatus::Pending);
    assert_eq!(filters.status, None);
}

#[test]
fn filter_changes_reset_page() {
    let mut filters = ApplicationFilters { page: 3, ..ApplicationFilters::default() };
    filters.set_loan_type("car-loan");
    assert_eq!(filters.page, 1);
    assert_eq!(filters.query().loan_type.as_deref(), Some("car-loan"));

    filters.page = 2;
    filters.set_hide_duplicates(false);
    assert_eq!(filters.page, 1);
    assert!(!filters.query().dedupe);
}

#[test]
fn paging_stays_within_bounds() {
    let mut filters = ApplicationFilters::default();
    filters.prev();
    assert_eq!(filters.page, 1);
    filters.next(2);
    filters.next(2);
    assert_eq!(filters.page, 2);
}

#[test]
fn table_copy() {
    assert_eq!(showing_summary(20, 153), "Showing 20 of 153 applications");
    assert_eq!(term_label(Some(36)), "36 months");
    assert_eq!(term_label(None), "-");
}
