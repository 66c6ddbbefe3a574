//! Create/edit dialog model for testimonials.

#[cfg(test)]
#[path = "testimonial_form_test.rs"]
mod testimonial_form_test;

use contract::types::{Localized, Testimonial, TestimonialPayload};

use super::faq_form::ORDER_NOT_POSITIVE;

pub const NAME_REQUIRED: &str = "Customer name is required.";
pub const INCOMPLETE_REVIEW: &str = "Please provide the review content in both languages.";
pub const RATING_OUT_OF_RANGE: &str = "Rating must be between 1 and 5 stars.";
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this testimonial?";
pub const DEFAULT_RATING: u8 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestimonialForm {
    pub editing_id: Option<String>,
    pub name: String,
    pub location: String,
    pub rating: u8,
    pub content: Localized,
    pub loan_type: String,
    pub occupation: String,
    pub is_active: bool,
    pub is_featured: bool,
    pub order: i64,
    pub error: Option<String>,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

impl TestimonialForm {
    #[must_use]
    pub fn create(next_order: u32) -> Self {
        Self {
            editing_id: None,
            name: String::new(),
            location: String::new(),
            rating: DEFAULT_RATING,
            content: Localized::default(),
            loan_type: String::new(),
            occupation: String::new(),
            is_active: true,
            is_featured: false,
            order: i64::from(next_order),
            error: None,
        }
    }

    #[must_use]
    pub fn edit(item: &Testimonial) -> Self {
        Self {
            editing_id: Some(item.id.clone()),
            name: item.name.clone(),
            location: item.location.clone().unwrap_or_default(),
            rating: item.rating,
            content: item.content.clone(),
            loan_type: item.loan_type.clone().unwrap_or_default(),
            occupation: item.occupation.clone().unwrap_or_default(),
            is_active: item.is_active,
            is_featured: item.is_featured,
            order: i64::from(item.order.max(1)),
            error: None,
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.editing_id.is_some() { "Edit Testimonial" } else { "Add New Testimonial" }
    }

    /// # Errors
    ///
    /// The first failing rule's message.
    pub fn validate(&self) -> Result<TestimonialPayload, &'static str> {
        if self.name.trim().is_empty() {
            return Err(NAME_REQUIRED);
        }
        if !self.content.is_complete() {
            return Err(INCOMPLETE_REVIEW);
        }
        if !(1..=5).contains(&self.rating) {
            return Err(RATING_OUT_OF_RANGE);
        }
        let order = u32::try_from(self.order).ok().filter(|o| *o >= 1).ok_or(ORDER_NOT_POSITIVE)?;
        Ok(TestimonialPayload {
            name: self.name.trim().to_owned(),
            location: optional(&self.location),
            rating: self.rating,
            content: self.content.trimmed(),
            loan_type: optional(&self.loan_type),
            occupation: optional(&self.occupation),
            is_active: self.is_active,
            is_featured: self.is_featured,
            order,
        })
    }

    pub fn submit(&mut self) -> Option<TestimonialPayload> {
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

/// Header badge counts: `(active, featured)`.
#[must_use]
pub fn counts(items: &[Testimonial]) -> (usize, usize) {
    (items.iter().filter(|t| t.is_active).count(), items.iter().filter(|t| t.is_featured).count())
}

/// Star string for a 0-5 rating.
#[must_use]
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "\u{2605}".repeat(filled), "\u{2606}".repeat(5 - filled))
}
