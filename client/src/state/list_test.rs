use super::*;

fn page(rows: Vec<u32>, pagination: Option<Pagination>) -> ApiResponse<Vec<u32>> {
    ApiResponse {
        success: true,
        data: Some(rows),
        message: None,
        error: None,
        pagination,
        status_counts: Some(BTreeMap::from([("pending".to_owned(), 4)])),
    }
}

#[test]
fn apply_replaces_rows_and_metadata() {
    let mut list = PagedList::default();
    list.error = Some("old".to_owned());
    list.apply(page(vec![1, 2], Some(Pagination { page: 2, limit: 20, total: 41, pages: 3 })));
    assert_eq!(list.rows, vec![1, 2]);
    assert_eq!(list.pagination.pages, 3);
    assert_eq!(list.count("pending"), 4);
    assert_eq!(list.count("approved"), 0);
    assert!(!list.loading);
    assert_eq!(list.error, None);
}

#[test]
fn apply_keeps_previous_pagination_when_missing() {
    let mut list = PagedList::default();
    list.apply(page(vec![1], Some(Pagination { page: 1, limit: 20, total: 30, pages: 2 })));
    list.apply(page(vec![2], None));
    assert_eq!(list.pagination.total, 30);
}

#[test]
fn fail_records_display_message() {
    let mut list: PagedList<u32> = PagedList::default();
    list.fail(&ApiError::Network);
    assert_eq!(list.error.as_deref(), Some("Network error. Please check your connection."));
    assert!(!list.loading);
}

#[test]
fn replace_where_swaps_matching_row() {
    let mut list = PagedList::default();
    list.apply(page(vec![1, 2, 3], None));
    list.replace_where(|r| *r == 2, 20);
    assert_eq!(list.rows, vec![1, 20, 3]);
}

#[test]
fn page_navigation_is_bounded() {
    assert_eq!(prev_page(1), 1);
    assert_eq!(prev_page(3), 2);
    assert_eq!(next_page(2, 3), 3);
    assert_eq!(next_page(3, 3), 3);
    assert_eq!(next_page(1, 0), 1);
}

#[test]
fn summary_text() {
    let p = Pagination { page: 2, limit: 20, total: 57, pages: 3 };
    assert_eq!(page_summary(2, &p), "Showing page 2 of 3 (57 total)");
}
