//! Blog editor values, validation and payload assembly.
//!
//! Validation runs on submit only; each failing field carries its own
//! message, shown under the input.

#[cfg(test)]
#[path = "blog_form_test.rs"]
mod blog_form_test;

use std::collections::BTreeMap;

use contract::types::{Blog, BlogPayload, BlogSeo, BlogStatus, FeaturedImage, Lang, Localized, LocalizedValue};

pub const SAVE_FAILED: &str = "Failed to save blog post";
pub const DELETE_FAILED: &str = "Failed to delete blog post";
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this blog post?";
pub const NOT_FOUND: &str = "Blog post not found.";
pub const DEFAULT_CATEGORY: &str = "tips";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlogField {
    Title(Lang),
    Slug,
    Excerpt(Lang),
    Content(Lang),
    Category,
    ImageUrl,
}

pub type FieldErrors = BTreeMap<BlogField, &'static str>;

/// Split a comma-separated input, trimming entries and dropping empties.
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned).collect()
}

#[must_use]
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// Absolute `http(s)` URL with a host and no whitespace.
#[must_use]
pub fn is_valid_url(raw: &str) -> bool {
    let rest = raw.strip_prefix("https://").or_else(|| raw.strip_prefix("http://"));
    rest.is_some_and(|rest| {
        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        !host.is_empty() && !raw.chars().any(char::is_whitespace)
    })
}

/// `(published, drafts)` for the list header.
#[must_use]
pub fn blog_counts(blogs: &[Blog]) -> (usize, usize) {
    let count = |status| blogs.iter().filter(|b| b.status == status).count();
    (count(BlogStatus::Published), count(BlogStatus::Draft))
}

fn too_short(value: &str, min: usize) -> bool {
    value.chars().count() < min
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogFormValues {
    pub title: Localized,
    pub slug: String,
    pub excerpt: Localized,
    pub content: Localized,
    pub category: String,
    pub status: BlogStatus,
    pub tags: String,
    pub image_url: String,
    pub image_alt: Localized,
    pub seo_title: Localized,
    pub seo_description: Localized,
    pub seo_keywords: String,
}

impl Default for BlogFormValues {
    fn default() -> Self {
        Self {
            title: Localized::default(),
            slug: String::new(),
            excerpt: Localized::default(),
            content: Localized::default(),
            category: DEFAULT_CATEGORY.to_owned(),
            status: BlogStatus::Draft,
            tags: String::new(),
            image_url: String::new(),
            image_alt: Localized::default(),
            seo_title: Localized::default(),
            seo_description: Localized::default(),
            seo_keywords: String::new(),
        }
    }
}

fn per_lang(lang: Lang, en: &'static str, ms: &'static str) -> &'static str {
    match lang {
        Lang::En => en,
        Lang::Ms => ms,
    }
}

impl BlogFormValues {
    /// Initial values for editing `blog`, or defaults for a new post.
    #[must_use]
    pub fn from_blog(blog: Option<&Blog>) -> Self {
        let Some(blog) = blog else {
            return Self::default();
        };
        let seo = blog.seo.clone().unwrap_or_default();
        let image = blog.featured_image.clone().unwrap_or_default();
        Self {
            title: blog.title.clone(),
            slug: blog.slug.clone(),
            excerpt: blog.excerpt.clone(),
            content: blog.content.clone(),
            category: if blog.category.is_empty() { DEFAULT_CATEGORY.to_owned() } else { blog.category.clone() },
            status: blog.status,
            tags: join_list(&blog.tags),
            image_url: image.url,
            image_alt: image.alt,
            seo_title: Localized::from(&seo.title),
            seo_description: Localized::from(&seo.description),
            seo_keywords: join_list(&seo.keywords),
        }
    }

    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for lang in Lang::ALL {
            if too_short(self.title.get(lang), 3) {
                errors.insert(BlogField::Title(lang), per_lang(lang, "Title (EN) is required", "Title (MS) is required"));
            }
            if too_short(self.excerpt.get(lang), 10) {
                let message = per_lang(lang, "Excerpt (EN) is required", "Excerpt (MS) is required");
                errors.insert(BlogField::Excerpt(lang), message);
            }
            if too_short(self.content.get(lang), 20) {
                let message = per_lang(lang, "Content (EN) is required", "Content (MS) is required");
                errors.insert(BlogField::Content(lang), message);
            }
        }
        if too_short(&self.slug, 3) {
            errors.insert(BlogField::Slug, "Slug is required");
        }
        if too_short(&self.category, 2) {
            errors.insert(BlogField::Category, "Category is required");
        }
        if !self.image_url.is_empty() && !is_valid_url(&self.image_url) {
            errors.insert(BlogField::ImageUrl, "Enter a valid URL");
        }
        errors
    }

    /// # Errors
    ///
    /// Every failing field with its message.
    pub fn validate(&self) -> Result<BlogPayload, FieldErrors> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(self.payload())
    }

    fn payload(&self) -> BlogPayload {
        let featured_image = (!self.image_url.is_empty()).then(|| FeaturedImage {
            url: self.image_url.clone(),
            alt: Localized {
                en: fallback(&self.image_alt.en, &self.title.en),
                ms: fallback(&self.image_alt.ms, &self.title.ms),
            },
        });
        BlogPayload {
            title: self.title.clone(),
            slug: self.slug.clone(),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            category: self.category.clone(),
            status: self.status,
            tags: split_list(&self.tags),
            featured_image,
            seo: BlogSeo {
                title: LocalizedValue::from(self.seo_title.clone()),
                description: LocalizedValue::from(self.seo_description.clone()),
                keywords: split_list(&self.seo_keywords),
            },
        }
    }
}

fn fallback(value: &str, default: &str) -> String {
    if value.is_empty() { default.to_owned() } else { value.to_owned() }
}

/// Editor state around the values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogEditor {
    pub blog_id: Option<String>,
    initial: BlogFormValues,
    pub values: BlogFormValues,
    pub field_errors: FieldErrors,
    pub error: Option<String>,
    pub submitting: bool,
    pub deleting: bool,
}

impl BlogEditor {
    #[must_use]
    pub fn new(blog: Option<&Blog>) -> Self {
        let values = BlogFormValues::from_blog(blog);
        Self {
            blog_id: blog.map(|b| b.id.clone()),
            initial: values.clone(),
            values,
            field_errors: FieldErrors::new(),
            error: None,
            submitting: false,
            deleting: false,
        }
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    /// New posts stay disabled until something was typed.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.submitting && (self.is_dirty() || self.blog_id.is_some())
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.blog_id.is_some() { "Update Post" } else { "Publish Post" }
    }

    #[must_use]
    pub fn field_error(&self, field: BlogField) -> Option<&'static str> {
        self.field_errors.get(&field).copied()
    }

    /// Validate and mark as submitting.
    pub fn begin_submit(&mut self) -> Option<BlogPayload> {
        self.error = None;
        match self.values.validate() {
            Ok(payload) => {
                self.field_errors.clear();
                self.submitting = true;
                Some(payload)
            }
            Err(errors) => {
                self.field_errors = errors;
                None
            }
        }
    }
}
