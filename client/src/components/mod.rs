//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and shared widgets. Data lives in the
//! `state` modules; components read and write it through signals passed in
//! as props or provided through Leptos context.

pub mod badge;
pub mod export_button;
pub mod flash_banner;
pub mod layout;
pub mod line_chart;
pub mod localized_input;
pub mod order_cell;
pub mod pager;
pub mod recent_applications;
pub mod stat_card;
pub mod whatsapp_button;
