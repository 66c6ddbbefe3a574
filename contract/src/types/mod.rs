//! Wire model for the admin API.
//!
//! Mongo documents arrive with `_id`; every record type exposes it as `id`.
//! Optional members default when absent so partially populated records from
//! older API versions still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

mod admin;
mod analytics;
mod application;
mod contact;
mod content;
mod de;
mod localized;
mod settings;

pub use admin::{Admin, AdminRole, LoginRequest, LoginResponse};
pub use analytics::{
    AnalyticsOverview, AnalyticsPeriod, ApplicationTotals, ConversionStat, DashboardStats, TrafficTotals,
    VisitorStat,
};
pub use application::{
    Application, ApplicationAddress, ApplicationDocument, ApplicationNotification, ApplicationStatus,
    ApplicationUpdate, NotificationChannel, StaffRef,
};
pub use contact::{Contact, ContactStatus, ContactUpdate, RepliedBy};
pub use content::{
    BLOG_CATEGORIES, Blog, BlogAuthor, BlogPayload, BlogSeo, BlogStatus, FAQ_CATEGORIES, Faq, FaqPayload,
    FeaturedImage, Ordered, Product, ProductUpdate, Range, RateRange, Testimonial, TestimonialPayload,
    next_order, reorder, sort_by_order,
};
pub use localized::{Lang, Localized, LocalizedValue};
pub use settings::{
    AggregateRating, AnalyticsIds, ContactSettings, FeatureFlags, Geo, LegalSettings, LocationFaq, Logo,
    RatingSummary, SeoSettings, SiteLocation, SiteSettings, SocialLinks,
};
