//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs held in `RwSignal`s. Pages own the signals; the logic that
//! decides what a click or a response does lives here so it can be tested
//! without a browser.

pub mod analytics;
pub mod application_detail;
pub mod applications;
pub mod auth;
pub mod blog_form;
pub mod contacts;
pub mod export_dialog;
pub mod faq_form;
pub mod flash;
pub mod list;
pub mod notify_dialog;
pub mod order_input;
pub mod product_form;
pub mod settings_form;
pub mod stats;
pub mod testimonial_form;
pub mod ui;
