//! Export menu and filter dialog state.

#[cfg(test)]
#[path = "export_dialog_test.rs"]
mod export_dialog_test;

use contract::export::{EXPORT_FAILED_MESSAGE, ExportFilters, ExportKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportDialog {
    pub kind: ExportKind,
    pub menu_open: bool,
    pub show_filters: bool,
    pub exporting: bool,
    pub filters: ExportFilters,
    pub error: Option<String>,
}

impl ExportDialog {
    #[must_use]
    pub fn new(kind: ExportKind) -> Self {
        Self {
            kind,
            menu_open: false,
            show_filters: false,
            exporting: false,
            filters: ExportFilters::default(),
            error: None,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open && !self.exporting;
    }

    pub fn open_filters(&mut self) {
        self.menu_open = false;
        self.show_filters = self.kind.supports_filters();
    }

    /// Filters to send, or `None` while an export is already running.
    pub fn begin(&mut self, with_filters: bool) -> Option<ExportFilters> {
        if self.exporting {
            return None;
        }
        self.exporting = true;
        self.menu_open = false;
        self.error = None;
        let mut filters = if with_filters { self.filters.clone() } else { ExportFilters::default() };
        if !self.kind.supports_application_filters() {
            filters.status.clear();
            filters.loan_type.clear();
        }
        Some(filters)
    }

    pub fn finish(&mut self, ok: bool) {
        self.exporting = false;
        if ok {
            self.show_filters = false;
        } else {
            self.error = Some(EXPORT_FAILED_MESSAGE.to_owned());
        }
    }
}
