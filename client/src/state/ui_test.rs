use super::*;

#[test]
fn navigation_covers_every_screen() {
    let hrefs: Vec<&str> = NAVIGATION
        .iter()
        .flat_map(|entry| match entry {
            NavEntry::Link(link) => vec![link.href],
            NavEntry::Group { items, .. } => items.iter().map(|l| l.href).collect(),
        })
        .collect();
    assert_eq!(
        hrefs,
        vec![
            "/dashboard",
            "/applications",
            "/contacts",
            "/content/blogs",
            "/content/faqs",
            "/content/testimonials",
            "/content/products",
            "/analytics",
            "/settings",
        ]
    );
}

#[test]
fn active_match_is_exact() {
    assert!(is_active("/content/blogs", "/content/blogs"));
    assert!(is_active("/content/blogs/", "/content/blogs"));
    assert!(!is_active("/content/blogs/new", "/content/blogs"));
    assert!(!is_active("/applications/abc", "/applications"));
}

#[test]
fn navigating_closes_sidebar() {
    let mut ui = UiState::default();
    ui.toggle_sidebar();
    assert!(ui.sidebar_open);
    ui.navigated();
    assert!(!ui.sidebar_open);
}
