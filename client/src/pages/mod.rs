//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, dialogs, optimistic
//! updates) and delegates rendering details to `components` and validation
//! to `state`.

pub mod analytics;
pub mod application_detail;
pub mod applications;
pub mod blog_editor;
pub mod blogs;
pub mod contacts;
pub mod dashboard;
pub mod faqs;
pub mod login;
pub mod products;
pub mod settings;
pub mod testimonials;
