//! Create/edit dialog model for FAQs.

#[cfg(test)]
#[path = "faq_form_test.rs"]
mod faq_form_test;

use contract::types::{Faq, FaqPayload, Localized};

pub const INCOMPLETE_TRANSLATION: &str = "Please complete the question and answer in both languages.";
pub const ORDER_NOT_POSITIVE: &str = "Display order must be a positive number.";
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this FAQ?";
pub const DEFAULT_CATEGORY: &str = "general";

/// Numeric dialog input: unparseable or zero falls back to 1, negatives are
/// kept so validation can reject them.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn order_from_input(raw: &str) -> i64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => value.trunc() as i64,
        _ => 1,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqForm {
    pub editing_id: Option<String>,
    pub question: Localized,
    pub answer: Localized,
    pub category: String,
    pub is_active: bool,
    pub order: i64,
    pub error: Option<String>,
}

impl FaqForm {
    /// Blank form placed after the last FAQ.
    #[must_use]
    pub fn create(next_order: u32) -> Self {
        Self {
            editing_id: None,
            question: Localized::default(),
            answer: Localized::default(),
            category: DEFAULT_CATEGORY.to_owned(),
            is_active: true,
            order: i64::from(next_order),
            error: None,
        }
    }

    #[must_use]
    pub fn edit(faq: &Faq) -> Self {
        Self {
            editing_id: Some(faq.id.clone()),
            question: faq.question.clone(),
            answer: faq.answer.clone(),
            category: faq.category.clone(),
            is_active: faq.is_active,
            order: i64::from(faq.order.max(1)),
            error: None,
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.editing_id.is_some() { "Edit FAQ" } else { "Add New FAQ" }
    }

    /// Check the form and build the request body.
    ///
    /// # Errors
    ///
    /// The first failing rule's message.
    pub fn validate(&self) -> Result<FaqPayload, &'static str> {
        if !self.question.is_complete() || !self.answer.is_complete() {
            return Err(INCOMPLETE_TRANSLATION);
        }
        let order = u32::try_from(self.order).ok().filter(|o| *o >= 1).ok_or(ORDER_NOT_POSITIVE)?;
        Ok(FaqPayload {
            question: self.question.trimmed(),
            answer: self.answer.trimmed(),
            category: self.category.clone(),
            is_active: self.is_active,
            order,
        })
    }

    /// Run validation, recording the message on failure.
    pub fn submit(&mut self) -> Option<FaqPayload> {
        match self.validate() {
            Ok(payload) => {
                self.error = None;
                Some(payload)
            }
            Err(message) => {
                self.error = Some(message.to_owned());
                None
            }
        }
    }
}
