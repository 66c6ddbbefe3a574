use super::*;

fn valid_values() -> BlogFormValues {
    BlogFormValues {
        title: Localized::new("Smart borrowing", "Pinjaman bijak"),
        slug: "smart-borrowing".to_owned(),
        excerpt: Localized::new("Five tips before you sign.", "Lima tip sebelum menandatangani."),
        content: Localized::new("Always compare the effective rate first.", "Sentiasa bandingkan kadar efektif dahulu."),
        tags: " loan, , finance ,malaysia".to_owned(),
        seo_keywords: "rates, tips".to_owned(),
        ..BlogFormValues::default()
    }
}

#[test]
fn new_post_defaults() {
    let values = BlogFormValues::from_blog(None);
    assert_eq!(values.category, "tips");
    assert_eq!(values.status, BlogStatus::Draft);
}

#[test]
fn empty_form_reports_every_required_field() {
    let errors = BlogFormValues::default().errors();
    assert_eq!(errors.get(&BlogField::Title(Lang::En)), Some(&"Title (EN) is required"));
    assert_eq!(errors.get(&BlogField::Excerpt(Lang::Ms)), Some(&"Excerpt (MS) is required"));
    assert_eq!(errors.get(&BlogField::Content(Lang::En)), Some(&"Content (EN) is required"));
    assert_eq!(errors.get(&BlogField::Slug), Some(&"Slug is required"));
    assert!(!errors.contains_key(&BlogField::Category));
    assert!(!errors.contains_key(&BlogField::ImageUrl));
}

#[test]
fn minimum_lengths_count_characters() {
    let mut values = valid_values();
    values.excerpt.en = "123456789".to_owned();
    assert!(values.errors().contains_key(&BlogField::Excerpt(Lang::En)));
    values.excerpt.en = "1234567890".to_owned();
    assert!(values.errors().is_empty());
}

#[test]
fn image_url_must_be_http() {
    let mut values = valid_values();
    values.image_url = "not a url".to_owned();
    assert_eq!(values.errors().get(&BlogField::ImageUrl), Some(&"Enter a valid URL"));
    values.image_url = "https://cdn.example.com/a.jpg".to_owned();
    assert!(values.errors().is_empty());
    assert!(!is_valid_url("https:///nohost"));
    assert!(is_valid_url("http://localhost:3000"));
}

#[test]
fn payload_splits_lists_and_fills_alt_text() {
    let mut values = valid_values();
    values.image_url = "https://cdn.example.com/a.jpg".to_owned();
    values.image_alt.ms = "Gambar".to_owned();
    let payload = values.validate().unwrap();
    assert_eq!(payload.tags, vec!["loan", "finance", "malaysia"]);
    assert_eq!(payload.seo.keywords, vec!["rates", "tips"]);
    let image = payload.featured_image.unwrap();
    assert_eq!(image.alt.en, "Smart borrowing");
    assert_eq!(image.alt.ms, "Gambar");
}

#[test]
fn payload_without_image_omits_it() {
    let payload = valid_values().validate().unwrap();
    assert_eq!(payload.featured_image, None);
    let body = serde_json::to_value(&payload).unwrap();
    assert!(body.get("featuredImage").is_none());
}

#[test]
fn editing_round_trips_lists() {
    let blog: Blog = serde_json::from_str(
        r#"{"_id":"b1","title":{"en":"T","ms":"T"},"slug":"t","category":"news","status":"published",
            "tags":["a","b"],"seo":{"keywords":["x"],"title":{"en":"SEO"}}}"#,
    )
    .unwrap();
    let values = BlogFormValues::from_blog(Some(&blog));
    assert_eq!(values.tags, "a, b");
    assert_eq!(values.seo_keywords, "x");
    assert_eq!(values.seo_title.en, "SEO");
    assert_eq!(values.seo_title.ms, "");
    assert_eq!(values.status, BlogStatus::Published);
}

#[test]
fn new_post_submit_needs_changes() {
    let mut editor = BlogEditor::new(None);
    assert!(!editor.can_submit());
    assert_eq!(editor.submit_label(), "Publish Post");
    editor.values.slug = "x".to_owned();
    assert!(editor.can_submit());
    assert_eq!(editor.begin_submit(), None);
    assert_eq!(editor.field_error(BlogField::Slug), Some("Slug is required"));
    assert!(!editor.submitting);
}

#[test]
fn valid_submit_clears_errors() {
    let mut editor = BlogEditor::new(None);
    editor.values = valid_values();
    assert!(editor.begin_submit().is_some());
    assert!(editor.submitting);
    assert!(editor.field_errors.is_empty());
}

#[test]
fn list_counts_ignore_archived_posts() {
    let blog = |status: &str| -> Blog {
        serde_json::from_value(serde_json::json!({ "_id": status, "status": status })).unwrap()
    };
    let blogs = [blog("published"), blog("draft"), blog("draft"), blog("archived")];
    assert_eq!(blog_counts(&blogs), (1, 2));
}
