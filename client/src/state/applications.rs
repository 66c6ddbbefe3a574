//! Filter state for the applications table.

#[cfg(test)]
#[path = "applications_test.rs"]
mod applications_test;

use contract::endpoint::{ApplicationQuery, filter_value};
use contract::types::ApplicationStatus;

use super::list::{next_page, prev_page};

pub const LOAN_TYPE_FILTERS: [(&str, &str); 6] = [
    ("all", "All Types"),
    ("personal-loan", "Personal Loan"),
    ("business-loan", "Business Loan"),
    ("car-loan", "Car Loan"),
    ("home-loan", "Home Loan"),
    ("education-loan", "Education Loan"),
];

/// Status select order, after "All Status".
pub const STATUS_FILTERS: [ApplicationStatus; 6] = [
    ApplicationStatus::Pending,
    ApplicationStatus::Processing,
    ApplicationStatus::Approved,
    ApplicationStatus::Contacted,
    ApplicationStatus::Rejected,
    ApplicationStatus::Cancelled,
];

/// Statuses shown as clickable count chips above the table.
pub const SUMMARY_STATUSES: [ApplicationStatus; 5] = [
    ApplicationStatus::Pending,
    ApplicationStatus::Processing,
    ApplicationStatus::Approved,
    ApplicationStatus::Rejected,
    ApplicationStatus::Cancelled,
];

/// Every filter change returns to page 1; typing in the search box does not
/// refetch until the form is submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationFilters {
    pub search_input: String,
    pub search: String,
    pub status: Option<ApplicationStatus>,
    pub loan_type: String,
    pub hide_duplicates: bool,
    pub page: u32,
}

impl Default for ApplicationFilters {
    fn default() -> Self {
        Self {
            search_input: String::new(),
            search: String::new(),
            status: None,
            loan_type: "all".to_owned(),
            hide_duplicates: true,
            page: 1,
        }
    }
}

impl ApplicationFilters {
    pub fn submit_search(&mut self) {
        self.search = self.search_input.trim().to_owned();
        self.page = 1;
    }

    pub fn set_status(&mut self, status: Option<ApplicationStatus>) {
        self.status = status;
        self.page = 1;
    }

    /// Chip click: select `status`, or clear it when already selected.
    pub fn toggle_status(&mut self, status: ApplicationStatus) {
        let next = if self.status == Some(status) { None } else { Some(status) };
        self.set_status(next);
    }

    pub fn set_loan_type(&mut self, loan_type: &str) {
        self.loan_type = loan_type.to_owned();
        self.page = 1;
    }

    pub fn set_hide_duplicates(&mut self, hide: bool) {
        self.hide_duplicates = hide;
        self.page = 1;
    }

    pub fn prev(&mut self) {
        self.page = prev_page(self.page);
    }

    pub fn next(&mut self, pages: u32) {
        self.page = next_page(self.page, pages);
    }

    #[must_use]
    pub fn query(&self) -> ApplicationQuery {
        ApplicationQuery {
            page: self.page,
            search: self.search.clone(),
            status: self.status,
            loan_type: filter_value(&self.loan_type),
            dedupe: self.hide_duplicates,
            ..ApplicationQuery::default()
        }
    }
}

/// "Showing N of T applications".
#[must_use]
pub fn showing_summary(shown: usize, total: u64) -> String {
    format!("Showing {shown} of {total} applications")
}

/// Loan term cell text.
#[must_use]
pub fn term_label(months: Option<u32>) -> String {
    months.map_or_else(|| contract::format::EMPTY.to_owned(), |m| format!("{m} months"))
}
