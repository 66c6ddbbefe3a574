//! Browser localStorage helpers for small per-browser preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! The application detail screen keeps WhatsApp message templates here.
//! Reads and writes are hydrate-only; SSR sees nothing stored.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use contract::notify::{MessageTemplates, TEMPLATE_STORAGE_KEY};

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Raw string stored under `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`. Returns false when storage is unavailable.
pub fn save_raw(key: &str, value: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        storage().is_some_and(|s| s.set_item(key, value).is_ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
        false
    }
}

pub fn load_templates() -> MessageTemplates {
    MessageTemplates::from_stored(load_raw(TEMPLATE_STORAGE_KEY).as_deref())
}

pub fn save_templates(templates: &MessageTemplates) -> bool {
    serde_json::to_string(templates).is_ok_and(|raw| save_raw(TEMPLATE_STORAGE_KEY, &raw))
}
