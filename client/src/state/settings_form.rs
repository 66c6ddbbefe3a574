//! Settings screen form state.
//!
//! DESIGN
//! ======
//! The screen edits five sections but the API takes one document, so every
//! section's save button sends [`SettingsForm::payload`], the full record.
//! Members the screen never shows (logo, feature flags, extra social
//! networks) ride along from the last loaded copy untouched.

#[cfg(test)]
#[path = "settings_form_test.rs"]
mod settings_form_test;

use contract::types::{
    AnalyticsIds, ContactSettings, Geo, Lang, LegalSettings, Localized, LocalizedValue, LocationFaq, RatingSummary,
    SeoSettings, SiteLocation, SiteSettings, SocialLinks,
};

pub const LOAD_FAILED: &str = "Failed to load settings";
pub const SAVE_FAILED: &str = "Failed to save settings";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingsSection {
    General,
    Contact,
    Social,
    Seo,
    Locations,
}

impl SettingsSection {
    pub const ALL: [Self; 5] = [Self::General, Self::Contact, Self::Social, Self::Seo, Self::Locations];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Contact => "Contact",
            Self::Social => "Social Media",
            Self::Seo => "SEO & Analytics",
            Self::Locations => "Locations",
        }
    }

    #[must_use]
    pub fn saved_message(self) -> String {
        format!("{} settings saved successfully", self.label())
    }
}

/// Blank input is absent; anything unparseable is absent too.
#[must_use]
pub fn parse_optional_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Leading digits of the input, so `"120 reviews"` reads as 120.
#[must_use]
pub fn parse_optional_count(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let end = trimmed.find(|c: char| !c.is_ascii_digit()).unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Contact geo is sent only when at least one coordinate was typed.
#[must_use]
pub fn geo_from_inputs(lat: &str, lng: &str) -> Option<Geo> {
    if lat.trim().is_empty() && lng.trim().is_empty() {
        return None;
    }
    Some(Geo { lat: parse_optional_number(lat), lng: parse_optional_number(lng) })
}

fn number_input(value: Option<f64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

fn text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

fn localized(value: Option<&LocalizedValue>) -> Localized {
    value.map(Localized::from).unwrap_or_default()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneralFields {
    pub site_name: String,
    pub tagline: Localized,
    pub company_name: String,
    pub registration_number: String,
    pub license_number: String,
}

impl Default for GeneralFields {
    fn default() -> Self {
        Self {
            site_name: "SeaMoneeCredit".to_owned(),
            tagline: Localized::new("Your Trusted Financial Partner", "Rakan Kewangan Anda Yang Dipercayai"),
            company_name: "SeaMonee Credit Sdn Bhd".to_owned(),
            registration_number: String::new(),
            license_number: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFields {
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
    pub address: Localized,
    pub business_hours: Localized,
    pub google_maps_url: String,
    pub geo_lat: String,
    pub geo_lng: String,
}

impl Default for ContactFields {
    fn default() -> Self {
        Self {
            phone: "+60-3-XXXX-XXXX".to_owned(),
            whatsapp: "+60-12-XXX-XXXX".to_owned(),
            email: "info@seamoneecredit.com".to_owned(),
            address: Localized::default(),
            business_hours: Localized::new(
                "Monday - Friday: 9:00 AM - 6:00 PM",
                "Isnin - Jumaat: 9:00 PG - 6:00 PTG",
            ),
            google_maps_url: String::new(),
            geo_lat: String::new(),
            geo_lng: String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SocialFields {
    pub facebook: String,
    pub instagram: String,
    pub linkedin: String,
    pub twitter: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeoFields {
    pub default_title: Localized,
    pub default_description: Localized,
    pub google_verification: String,
    pub google_analytics_id: String,
    pub facebook_pixel_id: String,
}

impl Default for SeoFields {
    fn default() -> Self {
        Self {
            default_title: Localized::new(
                "Personal Loan Malaysia | SeaMoneeCredit",
                "Pinjaman Peribadi Malaysia | SeaMoneeCredit",
            ),
            default_description: Localized::new(
                "Apply for personal loan in Malaysia with interest rates from 4.88% p.a.",
                "Mohon pinjaman peribadi di Malaysia dengan kadar faedah dari 4.88% p.a.",
            ),
            google_verification: String::new(),
            google_analytics_id: String::new(),
            facebook_pixel_id: String::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeoAxis {
    Lat,
    Lng,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatingPart {
    Score,
    Count,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationText {
    Name,
    Summary,
    Address,
    Hours,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationList {
    Services,
    AreasServed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaqPart {
    Question,
    Answer,
}

/// Heading for a location card: English name, then slug, then position.
#[must_use]
pub fn location_heading(location: &SiteLocation, index: usize) -> String {
    let name = location.name.get(Lang::En);
    if !name.is_empty() {
        return name.to_owned();
    }
    if !location.slug.is_empty() {
        return location.slug.clone();
    }
    format!("Location {}", index + 1)
}

#[must_use]
pub fn geo_input(location: &SiteLocation, axis: GeoAxis) -> String {
    let geo = location.geo.unwrap_or_default();
    number_input(match axis {
        GeoAxis::Lat => geo.lat,
        GeoAxis::Lng => geo.lng,
    })
}

#[must_use]
pub fn rating_input(location: &SiteLocation, part: RatingPart) -> String {
    let rating = location.rating_summary.unwrap_or_default();
    match part {
        RatingPart::Score => number_input(rating.score),
        RatingPart::Count => rating.count.map(|n| n.to_string()).unwrap_or_default(),
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsForm {
    base: SiteSettings,
    pub general: GeneralFields,
    pub contact: ContactFields,
    pub social: SocialFields,
    pub seo: SeoFields,
    pub locations: Vec<SiteLocation>,
}

impl SettingsForm {
    #[must_use]
    pub fn from_settings(settings: &SiteSettings) -> Self {
        let mut form = Self::default();
        form.apply(settings);
        form
    }

    /// Replace every field with the server copy. Missing members clear.
    pub fn apply(&mut self, settings: &SiteSettings) {
        let legal = settings.legal.clone().unwrap_or_default();
        let contact = settings.contact.clone().unwrap_or_default();
        let social = settings.social.clone().unwrap_or_default();
        let seo = settings.seo.clone().unwrap_or_default();
        let analytics = settings.analytics.clone().unwrap_or_default();
        let geo = contact.geo.unwrap_or_default();

        self.base = settings.clone();
        self.general = GeneralFields {
            site_name: text(settings.site_name.as_ref()),
            tagline: localized(settings.tagline.as_ref()),
            company_name: text(legal.company_name.as_ref()),
            registration_number: text(legal.registration_number.as_ref()),
            license_number: text(legal.license_number.as_ref()),
        };
        self.contact = ContactFields {
            phone: text(contact.phone.as_ref()),
            whatsapp: text(contact.whatsapp.as_ref()),
            email: text(contact.email.as_ref()),
            address: localized(contact.address.as_ref()),
            business_hours: localized(settings.business_hours.as_ref()),
            google_maps_url: text(contact.google_maps_url.as_ref()),
            geo_lat: number_input(geo.lat),
            geo_lng: number_input(geo.lng),
        };
        self.social = SocialFields {
            facebook: text(social.facebook.as_ref()),
            instagram: text(social.instagram.as_ref()),
            linkedin: text(social.linkedin.as_ref()),
            twitter: text(social.twitter.as_ref()),
        };
        self.seo = SeoFields {
            default_title: localized(seo.default_title.as_ref()),
            default_description: localized(seo.default_description.as_ref()),
            google_verification: text(seo.google_verification.as_ref()),
            google_analytics_id: text(analytics.google_analytics_id.as_ref()),
            facebook_pixel_id: text(analytics.facebook_pixel_id.as_ref()),
        };
        self.locations = settings.locations.clone().unwrap_or_default();
    }

    /// The full settings document for `PUT /admin/settings`.
    #[must_use]
    pub fn payload(&self) -> SiteSettings {
        let base = &self.base;
        let base_contact = base.contact.clone().unwrap_or_default();
        let base_social = base.social.clone().unwrap_or_default();
        let base_seo = base.seo.clone().unwrap_or_default();
        SiteSettings {
            id: None,
            site_name: Some(self.general.site_name.clone()),
            tagline: Some(LocalizedValue::from(self.general.tagline.clone())),
            legal: Some(LegalSettings {
                company_name: Some(self.general.company_name.clone()),
                registration_number: Some(self.general.registration_number.clone()),
                license_number: Some(self.general.license_number.clone()),
            }),
            contact: Some(ContactSettings {
                phone: Some(self.contact.phone.clone()),
                whatsapp: Some(self.contact.whatsapp.clone()),
                email: Some(self.contact.email.clone()),
                address: Some(LocalizedValue::from(self.contact.address.clone())),
                google_maps_url: Some(self.contact.google_maps_url.clone()),
                geo: geo_from_inputs(&self.contact.geo_lat, &self.contact.geo_lng),
                ..base_contact
            }),
            business_hours: Some(LocalizedValue::from(self.contact.business_hours.clone())),
            social: Some(SocialLinks {
                facebook: Some(self.social.facebook.clone()),
                instagram: Some(self.social.instagram.clone()),
                linkedin: Some(self.social.linkedin.clone()),
                twitter: Some(self.social.twitter.clone()),
                ..base_social
            }),
            seo: Some(SeoSettings {
                default_title: Some(LocalizedValue::from(self.seo.default_title.clone())),
                default_description: Some(LocalizedValue::from(self.seo.default_description.clone())),
                google_verification: Some(self.seo.google_verification.clone()),
                ..base_seo
            }),
            analytics: Some(AnalyticsIds {
                google_analytics_id: Some(self.seo.google_analytics_id.clone()),
                facebook_pixel_id: Some(self.seo.facebook_pixel_id.clone()),
            }),
            locations: Some(self.locations.clone()),
            created_at: None,
            updated_at: None,
            ..base.clone()
        }
    }

    // =========================================================================
    // Locations
    // =========================================================================

    pub fn add_location(&mut self) {
        self.locations.push(SiteLocation::default());
    }

    pub fn remove_location(&mut self, index: usize) {
        if index < self.locations.len() {
            self.locations.remove(index);
        }
    }

    pub fn edit_location(&mut self, index: usize, edit: impl FnOnce(&mut SiteLocation)) {
        if let Some(location) = self.locations.get_mut(index) {
            edit(location);
        }
    }

    pub fn set_location_text(&mut self, index: usize, field: LocationText, lang: Lang, value: String) {
        self.edit_location(index, |location| {
            let target = match field {
                LocationText::Name => &mut location.name,
                LocationText::Summary => &mut location.summary,
                LocationText::Address => &mut location.address,
                LocationText::Hours => location.hours.get_or_insert_with(LocalizedValue::default),
            };
            target.set(lang, value);
        });
    }

    /// Blank or unparseable input clears the coordinate.
    pub fn set_location_geo(&mut self, index: usize, axis: GeoAxis, raw: &str) {
        let value = parse_optional_number(raw);
        self.edit_location(index, |location| {
            let geo = location.geo.get_or_insert_with(Geo::default);
            match axis {
                GeoAxis::Lat => geo.lat = value,
                GeoAxis::Lng => geo.lng = value,
            }
        });
    }

    pub fn set_location_rating(&mut self, index: usize, part: RatingPart, raw: &str) {
        self.edit_location(index, |location| {
            let rating = location.rating_summary.get_or_insert_with(RatingSummary::default);
            match part {
                RatingPart::Score => rating.score = parse_optional_number(raw),
                RatingPart::Count => rating.count = parse_optional_count(raw),
            }
        });
    }

    pub fn add_list_item(&mut self, index: usize, list: LocationList) {
        self.edit_location(index, |location| list_mut(location, list).push(LocalizedValue::default()));
    }

    pub fn remove_list_item(&mut self, index: usize, list: LocationList, item: usize) {
        self.edit_location(index, |location| {
            let items = list_mut(location, list);
            if item < items.len() {
                items.remove(item);
            }
        });
    }

    pub fn set_list_item(&mut self, index: usize, list: LocationList, item: usize, lang: Lang, value: String) {
        self.edit_location(index, |location| {
            if let Some(entry) = list_mut(location, list).get_mut(item) {
                entry.set(lang, value);
            }
        });
    }

    pub fn add_faq(&mut self, index: usize) {
        self.edit_location(index, |location| {
            location.faqs.push(LocationFaq {
                question: Some(LocalizedValue::default()),
                answer: Some(LocalizedValue::default()),
            });
        });
    }

    pub fn remove_faq(&mut self, index: usize, faq: usize) {
        self.edit_location(index, |location| {
            if faq < location.faqs.len() {
                location.faqs.remove(faq);
            }
        });
    }

    pub fn set_faq(&mut self, index: usize, faq: usize, part: FaqPart, lang: Lang, value: String) {
        self.edit_location(index, |location| {
            if let Some(entry) = location.faqs.get_mut(faq) {
                let target = match part {
                    FaqPart::Question => &mut entry.question,
                    FaqPart::Answer => &mut entry.answer,
                };
                target.get_or_insert_with(LocalizedValue::default).set(lang, value);
            }
        });
    }
}

fn list_mut(location: &mut SiteLocation, list: LocationList) -> &mut Vec<LocalizedValue> {
    match list {
        LocationList::Services => &mut location.services,
        LocationList::AreasServed => &mut location.areas_served,
    }
}

#[must_use]
pub fn list_items(location: &SiteLocation, list: LocationList) -> &[LocalizedValue] {
    match list {
        LocationList::Services => &location.services,
        LocationList::AreasServed => &location.areas_served,
    }
}
