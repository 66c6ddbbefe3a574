//! Inbox filters, inline status changes and the contact detail draft.

#[cfg(test)]
#[path = "contacts_test.rs"]
mod contacts_test;

use contract::endpoint::ContactQuery;
use contract::types::{Contact, ContactStatus, ContactUpdate};

use super::list::{PagedList, next_page, prev_page};

pub const FETCH_FAILED: &str = "Failed to fetch contacts";
pub const UPDATE_FAILED: &str = "Failed to update contact";
pub const STATUS_FAILED: &str = "Failed to update status";
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this contact?";
pub const EMPTY_STATE: &str = "No contacts found";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFilters {
    pub search_input: String,
    pub search: String,
    pub status: Option<ContactStatus>,
    pub page: u32,
}

impl ContactFilters {
    #[must_use]
    pub fn new() -> Self {
        Self { page: 1, ..Self::default() }
    }

    pub fn set_status(&mut self, status: Option<ContactStatus>) {
        self.status = status;
        self.page = 1;
    }

    pub fn toggle_status(&mut self, status: ContactStatus) {
        let next = if self.status == Some(status) { None } else { Some(status) };
        self.set_status(next);
    }

    pub fn submit_search(&mut self) {
        self.search = self.search_input.trim().to_owned();
        self.page = 1;
    }

    pub fn prev(&mut self) {
        self.page = prev_page(self.page);
    }

    pub fn next(&mut self, pages: u32) {
        self.page = next_page(self.page, pages);
    }

    #[must_use]
    pub fn query(&self) -> ContactQuery {
        ContactQuery {
            page: self.page.max(1),
            status: self.status,
            search: self.search.clone(),
            ..ContactQuery::default()
        }
    }
}

/// Optimistically mark `id` as `status`.
///
/// Returns the PATCH body, or `None` when the row already has that status
/// (no request is sent).
pub fn apply_inline_status(list: &mut PagedList<Contact>, id: &str, status: ContactStatus) -> Option<ContactUpdate> {
    let row = list.rows.iter_mut().find(|c| c.id == id)?;
    if row.status == status {
        return None;
    }
    row.status = status;
    Some(ContactUpdate::status(status))
}

/// Status options offered in a row's menu: every status except its own.
#[must_use]
pub fn other_statuses(current: ContactStatus) -> Vec<ContactStatus> {
    ContactStatus::ALL.into_iter().filter(|s| *s != current).collect()
}

/// Detail dialog draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactDraft {
    pub contact: Contact,
    pub status: ContactStatus,
    pub reply_message: String,
    pub saving: bool,
}

impl ContactDraft {
    #[must_use]
    pub fn open(contact: Contact) -> Self {
        Self {
            status: contact.status,
            reply_message: contact.reply_message.clone().unwrap_or_default(),
            contact,
            saving: false,
        }
    }

    #[must_use]
    pub fn update(&self) -> ContactUpdate {
        ContactUpdate::reply(self.status, self.reply_message.clone())
    }
}

/// Swap the server copy into the table after a dialog save.
pub fn replace_contact(list: &mut PagedList<Contact>, contact: Contact) {
    let id = contact.id.clone();
    list.replace_where(|c| c.id == id, contact);
}

/// Drop a deleted row locally.
pub fn remove_contact(list: &mut PagedList<Contact>, id: &str) {
    list.rows.retain(|c| c.id != id);
}
