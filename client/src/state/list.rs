//! Paged table state shared by the applications and contacts screens.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use std::collections::BTreeMap;

use contract::{ApiError, ApiResponse, Pagination};

/// Rows of the current page plus the envelope metadata that came with them.
#[derive(Clone, Debug)]
pub struct PagedList<T> {
    pub rows: Vec<T>,
    pub pagination: Pagination,
    pub status_counts: BTreeMap<String, u64>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            pagination: Pagination::default(),
            status_counts: BTreeMap::new(),
            loading: true,
            error: None,
        }
    }
}

impl<T> PagedList<T> {
    /// Absorb a successful page. Missing pagination or counts keep the
    /// previous values.
    pub fn apply(&mut self, resp: ApiResponse<Vec<T>>) {
        if let Some(rows) = resp.data {
            self.rows = rows;
        }
        if let Some(pagination) = resp.pagination {
            self.pagination = pagination;
        }
        if let Some(counts) = resp.status_counts {
            self.status_counts = counts;
        }
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, err: &ApiError) {
        self.loading = false;
        self.error = Some(err.to_string());
    }

    #[must_use]
    pub fn count(&self, status: &str) -> u64 {
        self.status_counts.get(status).copied().unwrap_or(0)
    }

    /// Replace the row matching `id` in place.
    pub fn replace_where(&mut self, matches: impl Fn(&T) -> bool, row: T) {
        if let Some(slot) = self.rows.iter_mut().find(|r| matches(r)) {
            *slot = row;
        }
    }
}

/// "Showing page X of Y (N total)".
#[must_use]
pub fn page_summary(page: u32, pagination: &Pagination) -> String {
    format!("Showing page {page} of {} ({} total)", pagination.pages.max(1), pagination.total)
}

/// Previous page, never below 1.
#[must_use]
pub fn prev_page(page: u32) -> u32 {
    page.saturating_sub(1).max(1)
}

/// Next page, never beyond `pages`.
#[must_use]
pub fn next_page(page: u32, pages: u32) -> u32 {
    (page + 1).min(pages.max(1))
}
