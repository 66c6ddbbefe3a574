//! Product rate-card editor and card labels.

#[cfg(test)]
#[path = "product_form_test.rs"]
mod product_form_test;

use contract::format::{format_number, group_thousands};
use contract::types::{Product, ProductUpdate, Range, RateRange};

/// `Number(value)` semantics for the dialog inputs: blank is 0, garbage is 0.
#[must_use]
pub fn number_input(raw: &str) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductForm {
    pub id: String,
    pub name: String,
    pub min_amount: f64,
    pub max_amount: f64,
    pub min_rate: f64,
    pub max_rate: f64,
    pub min_tenure: f64,
    pub max_tenure: f64,
    pub is_active: bool,
    pub is_featured: bool,
    rate_type: String,
}

impl ProductForm {
    #[must_use]
    pub fn edit(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.en.clone(),
            min_amount: product.loan_amount.min,
            max_amount: product.loan_amount.max,
            min_rate: product.interest_rate.min,
            max_rate: product.interest_rate.max,
            min_tenure: product.tenure.min,
            max_tenure: product.tenure.max,
            is_active: product.is_active,
            is_featured: product.is_featured,
            rate_type: product.interest_rate.kind.clone(),
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!("Edit {}", self.name)
    }

    /// PUT body; the rate type is carried over from the product untouched.
    #[must_use]
    pub fn update(&self) -> ProductUpdate {
        ProductUpdate {
            loan_amount: Range { min: self.min_amount, max: self.max_amount },
            interest_rate: RateRange { min: self.min_rate, max: self.max_rate, kind: self.rate_type.clone() },
            tenure: Range { min: self.min_tenure, max: self.max_tenure },
            is_active: self.is_active,
            is_featured: self.is_featured,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(value: f64) -> String {
    if value.fract() == 0.0 && value >= 0.0 {
        group_thousands(value as u64)
    } else {
        format_number(value)
    }
}

/// "RM 1,000 - 50,000".
#[must_use]
pub fn amount_label(range: Range) -> String {
    format!("RM {} - {}", whole(range.min), whole(range.max))
}

/// "4.88% - 18% p.a.".
#[must_use]
pub fn rate_label(rate: &RateRange) -> String {
    format!("{}% - {}% p.a.", format_number(rate.min), format_number(rate.max))
}

/// "12 - 60 months".
#[must_use]
pub fn tenure_label(range: Range) -> String {
    format!("{} - {} months", format_number(range.min), format_number(range.max))
}

/// Header badge counts: `(active, featured)`.
#[must_use]
pub fn counts(products: &[Product]) -> (usize, usize) {
    (products.iter().filter(|p| p.is_active).count(), products.iter().filter(|p| p.is_featured).count())
}
