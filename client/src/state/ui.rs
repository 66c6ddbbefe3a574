//! Console chrome: sidebar navigation and its open/closed state.
//!
//! DESIGN
//! ======
//! Screens own their data; this module only knows where they live so the
//! sidebar can highlight the active entry.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
    /// Glyph shown before the name.
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEntry {
    Link(NavLink),
    Group { name: &'static str, items: &'static [NavLink] },
}

const fn link(name: &'static str, href: &'static str, icon: &'static str) -> NavLink {
    NavLink { name, href, icon }
}

pub const CONTENT_LINKS: [NavLink; 4] = [
    link("Blogs", "/content/blogs", "✎"),
    link("FAQs", "/content/faqs", "?"),
    link("Testimonials", "/content/testimonials", "★"),
    link("Products", "/content/products", "▣"),
];

pub const NAVIGATION: [NavEntry; 6] = [
    NavEntry::Link(link("Dashboard", "/dashboard", "▦")),
    NavEntry::Link(link("Applications", "/applications", "▤")),
    NavEntry::Link(link("Contacts", "/contacts", "✉")),
    NavEntry::Group { name: "Content", items: &CONTENT_LINKS },
    NavEntry::Link(link("Analytics", "/analytics", "▥")),
    NavEntry::Link(link("Settings", "/settings", "⚙")),
];

/// Exact match, so `/content/blogs/new` does not light up "Blogs".
#[must_use]
pub fn is_active(pathname: &str, href: &str) -> bool {
    let trimmed = pathname.trim_end_matches('/');
    let path = if trimmed.is_empty() { "/" } else { trimmed };
    path == href
}

/// UI chrome shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Sidebar visibility on narrow screens.
    pub sidebar_open: bool,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Navigating closes the mobile sidebar.
    pub fn navigated(&mut self) {
        self.sidebar_open = false;
    }
}
