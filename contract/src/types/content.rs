//! Marketing content: blog posts, FAQs, testimonials and loan products.

use serde::{Deserialize, Serialize};

use super::localized::{Localized, LocalizedValue};

// =============================================================================
// ORDERING
// =============================================================================

/// Records shown in a staff-controlled display order.
pub trait Ordered {
    fn id(&self) -> &str;
    fn order(&self) -> u32;
    fn set_order(&mut self, order: u32);
}

/// Move `id` to `order` and re-sort. Returns false when `id` is unknown.
pub fn reorder<T: Ordered>(items: &mut [T], id: &str, order: u32) -> bool {
    let Some(item) = items.iter_mut().find(|item| item.id() == id) else {
        return false;
    };
    item.set_order(order);
    sort_by_order(items);
    true
}

/// Sort ascending by display order, keeping ties in server order.
pub fn sort_by_order<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(Ordered::order);
}

/// Order for a newly created record: one past the current maximum, or 1.
#[must_use]
pub fn next_order<T: Ordered>(items: &[T]) -> u32 {
    items.iter().map(Ordered::order).max().map_or(1, |max| max.saturating_add(1))
}

// =============================================================================
// BLOGS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl BlogStatus {
    pub const ALL: [Self; 3] = [Self::Draft, Self::Published, Self::Archived];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
            Self::Archived => "Archived",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw.trim())
    }
}

/// `(value, label)` pairs for the blog category picker.
pub const BLOG_CATEGORIES: [(&str, &str); 5] = [
    ("tips", "Tips"),
    ("news", "News"),
    ("guides", "Guides"),
    ("comparison", "Comparison"),
    ("updates", "Updates"),
];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturedImage {
    pub url: String,
    pub alt: Localized,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogSeo {
    pub title: LocalizedValue,
    pub description: LocalizedValue,
    pub keywords: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogAuthor {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub title: Localized,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub content: Localized,
    #[serde(default)]
    pub excerpt: Localized,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<FeaturedImage>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: BlogStatus,
    #[serde(default)]
    pub views: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<BlogAuthor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<BlogSeo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// POST/PUT body for blog posts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPayload {
    pub title: Localized,
    pub slug: String,
    pub excerpt: Localized,
    pub content: Localized,
    pub category: String,
    pub status: BlogStatus,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<FeaturedImage>,
    pub seo: BlogSeo,
}

// =============================================================================
// FAQS
// =============================================================================

/// Categories offered by the FAQ editor; `general` is the default.
pub const FAQ_CATEGORIES: [&str; 5] = ["general", "application", "payment", "requirements", "fees"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub question: Localized,
    #[serde(default)]
    pub answer: Localized,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Ordered for Faq {
    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPayload {
    pub question: Localized,
    pub answer: Localized,
    pub category: String,
    pub is_active: bool,
    pub order: u32,
}

impl FaqPayload {
    /// Full record with a new display order, as sent by the order editor.
    #[must_use]
    pub fn reordered(faq: &Faq, order: u32) -> Self {
        Self {
            question: faq.question.clone(),
            answer: faq.answer.clone(),
            category: faq.category.clone(),
            is_active: faq.is_active,
            order,
        }
    }
}

// =============================================================================
// TESTIMONIALS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub content: Localized,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub created_at: String,
}

impl Ordered for Testimonial {
    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialPayload {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub rating: u8,
    pub content: Localized,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub order: u32,
}

impl TestimonialPayload {
    #[must_use]
    pub fn reordered(item: &Testimonial, order: u32) -> Self {
        Self {
            name: item.name.clone(),
            location: item.location.clone(),
            rating: item.rating,
            content: item.content.clone(),
            loan_type: item.loan_type.clone(),
            occupation: item.occupation.clone(),
            is_active: item.is_active,
            is_featured: item.is_featured,
            order,
        }
    }
}

// =============================================================================
// PRODUCTS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateRange {
    pub min: f64,
    pub max: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: Localized,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Localized,
    #[serde(default)]
    pub loan_amount: Range,
    #[serde(default)]
    pub interest_rate: RateRange,
    #[serde(default)]
    pub tenure: Range,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub order: u32,
}

/// PUT body for `/admin/products/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub loan_amount: Range,
    pub interest_rate: RateRange,
    pub tenure: Range,
    pub is_active: bool,
    pub is_featured: bool,
}
