//! Inline display-order editor shared by the FAQ and testimonial tables.
//!
//! Each row keeps its own text buffer. Saving a buffer that is not a whole
//! number of at least 1 reverts it to the record's current order without
//! contacting the API.

#[cfg(test)]
#[path = "order_input_test.rs"]
mod order_input_test;

use std::collections::HashMap;

use contract::types::Ordered;

/// Parse a display order typed by staff.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_order(raw: &str) -> Option<u32> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() || value < 1.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value as u32)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderInputs {
    buffers: HashMap<String, String>,
    /// Row whose order PUT is in flight.
    pub saving: Option<String>,
}

impl OrderInputs {
    /// Fresh buffers mirroring `items`.
    #[must_use]
    pub fn from_items<T: Ordered>(items: &[T]) -> Self {
        let buffers = items.iter().map(|item| (item.id().to_owned(), item.order().to_string())).collect();
        Self { buffers, saving: None }
    }

    /// Buffer text for `item`, falling back to its stored order.
    #[must_use]
    pub fn value<T: Ordered>(&self, item: &T) -> String {
        self.buffers.get(item.id()).cloned().unwrap_or_else(|| item.order().max(1).to_string())
    }

    pub fn set(&mut self, id: &str, raw: String) {
        self.buffers.insert(id.to_owned(), raw);
    }

    /// Validate the buffer for `item`. Invalid input reverts and yields `None`;
    /// valid input marks the row as saving.
    pub fn begin_save<T: Ordered>(&mut self, item: &T) -> Option<u32> {
        let raw = self.value(item);
        let Some(order) = parse_order(&raw) else {
            self.set(item.id(), item.order().max(1).to_string());
            return None;
        };
        self.saving = Some(item.id().to_owned());
        Some(order)
    }

    pub fn finish_save(&mut self, id: &str, saved: Option<u32>) {
        if let Some(order) = saved {
            self.set(id, order.to_string());
        }
        if self.saving.as_deref() == Some(id) {
            self.saving = None;
        }
    }

    #[must_use]
    pub fn is_saving(&self, id: &str) -> bool {
        self.saving.as_deref() == Some(id)
    }
}
