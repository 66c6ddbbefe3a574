use super::*;

fn contact(id: &str, status: ContactStatus) -> Contact {
    serde_json::from_value(serde_json::json!({
        "_id": id,
        "name": "Lim Wei",
        "phone": "0123456789",
        "email": "lim@example.com",
        "subject": "Rates",
        "message": "What is the rate for RM 20k?",
        "status": status.as_str(),
        "createdAt": "2026-01-05T08:30:00Z",
        "updatedAt": "2026-01-05T08:30:00Z"
    }))
    .unwrap()
}

fn list(rows: Vec<Contact>) -> PagedList<Contact> {
    PagedList { rows, loading: false, ..PagedList::default() }
}

#[test]
fn status_filter_resets_page() {
    let mut filters = ContactFilters::new();
    filters.page = 3;
    filters.set_status(Some(ContactStatus::Replied));
    assert_eq!(filters.page, 1);
    assert_eq!(filters.query().status, Some(ContactStatus::Replied));

    filters.toggle_status(ContactStatus::Replied);
    assert_eq!(filters.status, None);
}

#[test]
fn search_trimmed_on_submit() {
    let mut filters = ContactFilters::new();
    filters.search_input = " loan ".to_owned();
    filters.page = 2;
    filters.submit_search();
    assert_eq!(filters.query().search, "loan");
    assert_eq!(filters.page, 1);
}

#[test]
fn unchanged_inline_status_sends_nothing() {
    let mut rows = list(vec![contact("c1", ContactStatus::Read)]);
    assert_eq!(apply_inline_status(&mut rows, "c1", ContactStatus::Read), None);
    assert_eq!(apply_inline_status(&mut rows, "missing", ContactStatus::New), None);
}

#[test]
fn inline_status_updates_row_optimistically() {
    let mut rows = list(vec![contact("c1", ContactStatus::New), contact("c2", ContactStatus::New)]);
    let update = apply_inline_status(&mut rows, "c2", ContactStatus::Archived).unwrap();
    assert_eq!(update, ContactUpdate::status(ContactStatus::Archived));
    assert_eq!(rows.rows[1].status, ContactStatus::Archived);
    assert_eq!(rows.rows[0].status, ContactStatus::New);
}

#[test]
fn row_menu_omits_current_status() {
    assert_eq!(
        other_statuses(ContactStatus::Read),
        vec![ContactStatus::New, ContactStatus::Replied, ContactStatus::Archived]
    );
}

#[test]
fn dialog_draft_starts_from_contact() {
    let mut c = contact("c1", ContactStatus::Read);
    c.reply_message = Some("Called back".to_owned());
    let draft = ContactDraft::open(c);
    assert_eq!(draft.update(), ContactUpdate::reply(ContactStatus::Read, "Called back"));
}

#[test]
fn server_copy_replaces_row() {
    let mut rows = list(vec![contact("c1", ContactStatus::New)]);
    let mut saved = contact("c1", ContactStatus::Replied);
    saved.reply_message = Some("Done".to_owned());
    replace_contact(&mut rows, saved.clone());
    assert_eq!(rows.rows, vec![saved]);

    remove_contact(&mut rows, "c1");
    assert!(rows.rows.is_empty());
}
