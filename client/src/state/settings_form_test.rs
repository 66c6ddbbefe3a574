use super::*;

use contract::types::Logo;

fn loaded() -> SiteSettings {
    serde_json::from_str(
        r#"{
            "_id": "s1",
            "siteName": "SeaMoneeCredit",
            "logo": { "light": "/logo.svg" },
            "contact": { "phone": "+603", "geo": { "lat": 3.14 } },
            "social": { "facebook": "https://fb.example", "youtube": "https://yt.example" },
            "seo": { "keywords": ["loan"], "aggregateRating": { "value": 4.8, "count": 12 } },
            "locations": [{ "slug": "kl", "name": { "en": "Kuala Lumpur" } }],
            "updatedAt": "2026-01-01T00:00:00Z"
        }"#,
    )
    .unwrap()
}

#[test]
fn section_messages_use_labels() {
    assert_eq!(SettingsSection::Seo.saved_message(), "SEO & Analytics settings saved successfully");
    assert_eq!(SettingsSection::Social.saved_message(), "Social Media settings saved successfully");
}

#[test]
fn unloaded_form_shows_placeholders() {
    let form = SettingsForm::default();
    assert_eq!(form.general.site_name, "SeaMoneeCredit");
    assert_eq!(form.contact.email, "info@seamoneecredit.com");
}

#[test]
fn loading_clears_missing_members() {
    let form = SettingsForm::from_settings(&loaded());
    assert_eq!(form.contact.email, "");
    assert_eq!(form.contact.phone, "+603");
    assert_eq!(form.contact.geo_lat, "3.14");
    assert_eq!(form.contact.geo_lng, "");
    assert_eq!(form.general.tagline, Localized::default());
}

#[test]
fn geo_is_sent_only_when_typed() {
    assert_eq!(geo_from_inputs(" ", ""), None);
    assert_eq!(geo_from_inputs("3.1", ""), Some(Geo { lat: Some(3.1), lng: None }));
    assert_eq!(geo_from_inputs("abc", "101.6"), Some(Geo { lat: None, lng: Some(101.6) }));
}

#[test]
fn number_parsing() {
    assert_eq!(parse_optional_number(""), None);
    assert_eq!(parse_optional_number(" 4.9 "), Some(4.9));
    assert_eq!(parse_optional_number("nope"), None);
    assert_eq!(parse_optional_count("120"), Some(120));
    assert_eq!(parse_optional_count("120 reviews"), Some(120));
    assert_eq!(parse_optional_count(""), None);
    assert_eq!(parse_optional_count("x1"), None);
}

#[test]
fn payload_keeps_unedited_members() {
    let mut form = SettingsForm::from_settings(&loaded());
    form.social.twitter = "https://x.example".to_owned();
    form.contact.geo_lat.clear();
    let payload = form.payload();

    assert_eq!(payload.id, None);
    assert_eq!(payload.updated_at, None);
    assert_eq!(payload.logo, Some(Logo { light: Some("/logo.svg".to_owned()), dark: None }));
    let social = payload.social.unwrap();
    assert_eq!(social.youtube.as_deref(), Some("https://yt.example"));
    assert_eq!(social.twitter.as_deref(), Some("https://x.example"));
    let seo = payload.seo.unwrap();
    assert_eq!(seo.keywords, Some(vec!["loan".to_owned()]));
    assert_eq!(seo.aggregate_rating.unwrap().count, Some(12));
    assert_eq!(payload.contact.unwrap().geo, None);
}

#[test]
fn payload_serializes_blank_text_as_empty_strings() {
    let body = serde_json::to_value(SettingsForm::from_settings(&loaded()).payload()).unwrap();
    assert_eq!(body["contact"]["email"], "");
    assert_eq!(body["tagline"], serde_json::json!({ "en": "", "ms": "" }));
    assert!(body.get("_id").is_none());
}

#[test]
fn locations_add_edit_remove() {
    let mut form = SettingsForm::from_settings(&loaded());
    form.add_location();
    assert_eq!(form.locations.len(), 2);
    assert_eq!(location_heading(&form.locations[1], 1), "Location 2");
    assert_eq!(location_heading(&form.locations[0], 0), "Kuala Lumpur");

    form.set_location_text(1, LocationText::Hours, Lang::Ms, "9 pagi".to_owned());
    form.set_location_geo(1, GeoAxis::Lng, "101.7");
    form.set_location_rating(1, RatingPart::Count, "44");
    form.set_location_rating(1, RatingPart::Score, "");
    let added = &form.locations[1];
    assert_eq!(added.hours.as_ref().unwrap().get(Lang::Ms), "9 pagi");
    assert_eq!(geo_input(added, GeoAxis::Lng), "101.7");
    assert_eq!(geo_input(added, GeoAxis::Lat), "");
    assert_eq!(rating_input(added, RatingPart::Count), "44");
    assert_eq!(rating_input(added, RatingPart::Score), "");

    form.remove_location(0);
    form.remove_location(9);
    assert_eq!(form.locations.len(), 1);
    assert_eq!(form.locations[0].slug, "");
}

#[test]
fn location_lists_and_faqs() {
    let mut form = SettingsForm::from_settings(&loaded());
    form.add_list_item(0, LocationList::Services);
    form.add_list_item(0, LocationList::Services);
    form.set_list_item(0, LocationList::Services, 1, Lang::En, "Personal loans".to_owned());
    form.remove_list_item(0, LocationList::Services, 0);
    let services = list_items(&form.locations[0], LocationList::Services);
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].get(Lang::En), "Personal loans");
    assert!(list_items(&form.locations[0], LocationList::AreasServed).is_empty());

    form.add_faq(0);
    form.set_faq(0, 0, FaqPart::Answer, Lang::En, "Yes".to_owned());
    let faq = &form.locations[0].faqs[0];
    assert_eq!(faq.answer.as_ref().unwrap().get(Lang::En), "Yes");
    assert_eq!(faq.question, Some(LocalizedValue::default()));
    form.remove_faq(0, 0);
    assert!(form.locations[0].faqs.is_empty());
}
