//! Site settings: five tabbed sections sharing one document.
//!
//! Each section has its own save button but every save sends the full
//! payload from [`SettingsForm::payload`]. The server copy that comes back
//! replaces the form.

use contract::types::{Lang, Localized, SiteLocation};
use leptos::prelude::*;

use crate::components::flash_banner::FlashBanner;
use crate::components::localized_input::LocalizedFields;
use crate::state::flash::Flash;
use crate::state::settings_form::{
    FaqPart, GeoAxis, LOAD_FAILED, LocationList, LocationText, RatingPart, SAVE_FAILED, SettingsForm,
    SettingsSection, geo_input, list_items, location_heading, rating_input,
};

#[derive(Clone, Copy)]
struct SettingsScreen {
    form: RwSignal<SettingsForm>,
    fetching: RwSignal<bool>,
    saving: RwSignal<Option<SettingsSection>>,
    flash: RwSignal<Option<Flash>>,
}

impl SettingsScreen {
    fn load(self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_settings().await {
                Ok(settings) => self.form.update(|f| f.apply(&settings)),
                Err(e) => {
                    log::warn!("fetch settings failed: {e}");
                    self.flash.set(Some(Flash::error(LOAD_FAILED)));
                }
            }
            self.fetching.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = LOAD_FAILED;
        }
    }

    fn save(self, section: SettingsSection) {
        if self.saving.get_untracked().is_some() {
            return;
        }
        self.saving.set(Some(section));
        self.flash.set(None);
        let payload = self.form.with_untracked(SettingsForm::payload);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_settings(&payload).await {
                Ok(saved) => {
                    if let Some(settings) = saved {
                        self.form.update(|f| f.apply(&settings));
                    }
                    self.flash.set(Some(Flash::success(section.saved_message())));
                }
                Err(e) => {
                    log::warn!("saving {} settings failed: {e}", section.label());
                    let text = match e {
                        contract::ApiError::Network => SAVE_FAILED.to_owned(),
                        other => other.to_string(),
                    };
                    self.flash.set(Some(Flash::error(text)));
                }
            }
            self.saving.set(None);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, SAVE_FAILED);
            self.saving.set(None);
        }
    }

    fn edit(self, change: impl FnOnce(&mut SettingsForm)) {
        self.form.update(change);
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let screen = SettingsScreen {
        form: RwSignal::new(SettingsForm::default()),
        fetching: RwSignal::new(true),
        saving: RwSignal::new(None),
        flash: RwSignal::new(None),
    };
    screen.load();
    let tab = RwSignal::new(SettingsSection::General);

    view! {
        <div class="page">
            <section class="hero">
                <div>
                    <p class="hero__eyebrow">"Control center"</p>
                    <h1>"Settings"</h1>
                    <p class="hero__lead">"Update branding, contact channels, and location details."</p>
                </div>
                <p class="hero__aside">"Changes sync to the marketing site instantly."</p>
            </section>

            <Show
                when=move || !screen.fetching.get()
                fallback=|| view! { <p class="panel__empty">"Loading settings..."</p> }
            >
                <FlashBanner flash=screen.flash/>
                <nav class="tabs">
                    {SettingsSection::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || tab.get() == section
                                    on:click=move |_| tab.set(section)
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                {move || match tab.get() {
                    SettingsSection::General => view! { <GeneralPanel screen=screen/> }.into_any(),
                    SettingsSection::Contact => view! { <ContactPanel screen=screen/> }.into_any(),
                    SettingsSection::Social => view! { <SocialPanel screen=screen/> }.into_any(),
                    SettingsSection::Seo => view! { <SeoPanel screen=screen/> }.into_any(),
                    SettingsSection::Locations => view! { <LocationsPanel screen=screen/> }.into_any(),
                }}
            </Show>
        </div>
    }
}

// =============================================================================
// FIELD HELPERS
// =============================================================================

fn text_field(
    screen: SettingsScreen,
    label: &'static str,
    placeholder: &'static str,
    get: fn(&SettingsForm) -> String,
    set: fn(&mut SettingsForm, String),
) -> impl IntoView {
    view! {
        <label class="dialog__label field">
            {label}
            <input
                class="dialog__input"
                placeholder=placeholder
                prop:value=move || screen.form.with(get)
                on:input=move |ev| screen.edit(|f| set(f, event_target_value(&ev)))
            />
        </label>
    }
}

fn localized_field(
    screen: SettingsScreen,
    label: &'static str,
    multiline: bool,
    get: fn(&SettingsForm) -> Localized,
    set: fn(&mut SettingsForm, Lang, String),
) -> impl IntoView {
    view! {
        <LocalizedFields
            label=label
            multiline=multiline
            rows=3
            value=Signal::derive(move || screen.form.with(get))
            on_change=Callback::new(move |(lang, value): (Lang, String)| screen.edit(|f| set(f, lang, value)))
        />
    }
}

fn save_button(screen: SettingsScreen, section: SettingsSection) -> impl IntoView {
    let busy = move || screen.saving.get() == Some(section);
    view! {
        <div class="form-actions">
            <button
                class="btn btn--primary"
                disabled=move || busy() || screen.fetching.get()
                on:click=move |_| screen.save(section)
            >
                {move || if busy() { "Saving..." } else { "Save Changes" }}
            </button>
        </div>
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

#[component]
fn GeneralPanel(screen: SettingsScreen) -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel__title">"General Settings"</h2>
            <p class="panel__subtitle">"Basic website information"</p>
            <div class="field-pair">
                {text_field(screen, "Site Name", "", |f| f.general.site_name.clone(), |f, v| f.general.site_name = v)}
                {text_field(
                    screen,
                    "Company Name (Legal)",
                    "",
                    |f| f.general.company_name.clone(),
                    |f, v| f.general.company_name = v,
                )}
            </div>
            {localized_field(screen, "Tagline", false, |f| f.general.tagline.clone(), |f, lang, v| f.general.tagline.set(lang, v))}
            <div class="field-pair">
                {text_field(
                    screen,
                    "SSM Registration Number",
                    "e.g., 123456-X",
                    |f| f.general.registration_number.clone(),
                    |f, v| f.general.registration_number = v,
                )}
                {text_field(
                    screen,
                    "Money Lender License Number",
                    "e.g., WP/12345/2024",
                    |f| f.general.license_number.clone(),
                    |f, v| f.general.license_number = v,
                )}
            </div>
            {save_button(screen, SettingsSection::General)}
        </section>
    }
}

#[component]
fn ContactPanel(screen: SettingsScreen) -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel__title">"Contact Information"</h2>
            <p class="panel__subtitle">"How customers can reach you"</p>
            <div class="field-trio">
                {text_field(screen, "Phone Number", "", |f| f.contact.phone.clone(), |f, v| f.contact.phone = v)}
                {text_field(screen, "WhatsApp Number", "", |f| f.contact.whatsapp.clone(), |f, v| f.contact.whatsapp = v)}
                {text_field(screen, "Email Address", "", |f| f.contact.email.clone(), |f, v| f.contact.email = v)}
            </div>
            {localized_field(screen, "Address", true, |f| f.contact.address.clone(), |f, lang, v| f.contact.address.set(lang, v))}
            {localized_field(
                screen,
                "Business Hours",
                false,
                |f| f.contact.business_hours.clone(),
                |f, lang, v| f.contact.business_hours.set(lang, v),
            )}
            <div class="field-trio">
                {text_field(
                    screen,
                    "Google Maps URL",
                    "https://maps.google.com/...",
                    |f| f.contact.google_maps_url.clone(),
                    |f, v| f.contact.google_maps_url = v,
                )}
                {text_field(screen, "Latitude", "3.141592", |f| f.contact.geo_lat.clone(), |f, v| f.contact.geo_lat = v)}
                {text_field(screen, "Longitude", "101.686853", |f| f.contact.geo_lng.clone(), |f, v| f.contact.geo_lng = v)}
            </div>
            {save_button(screen, SettingsSection::Contact)}
        </section>
    }
}

#[component]
fn SocialPanel(screen: SettingsScreen) -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel__title">"Social Media Links"</h2>
            <p class="panel__subtitle">"Connect your social media accounts"</p>
            <div class="field-pair">
                {text_field(
                    screen,
                    "Facebook URL",
                    "https://facebook.com/seamoneecredit",
                    |f| f.social.facebook.clone(),
                    |f, v| f.social.facebook = v,
                )}
                {text_field(
                    screen,
                    "Instagram URL",
                    "https://instagram.com/seamoneecredit",
                    |f| f.social.instagram.clone(),
                    |f, v| f.social.instagram = v,
                )}
                {text_field(
                    screen,
                    "LinkedIn URL",
                    "https://linkedin.com/company/seamoneecredit",
                    |f| f.social.linkedin.clone(),
                    |f, v| f.social.linkedin = v,
                )}
                {text_field(
                    screen,
                    "Twitter URL",
                    "https://twitter.com/seamoneecredit",
                    |f| f.social.twitter.clone(),
                    |f, v| f.social.twitter = v,
                )}
            </div>
            {save_button(screen, SettingsSection::Social)}
        </section>
    }
}

#[component]
fn SeoPanel(screen: SettingsScreen) -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel__title">"SEO & Analytics"</h2>
            <p class="panel__subtitle">"Search engine and tracking settings"</p>
            {localized_field(
                screen,
                "Default Title",
                false,
                |f| f.seo.default_title.clone(),
                |f, lang, v| f.seo.default_title.set(lang, v),
            )}
            {localized_field(
                screen,
                "Default Description",
                true,
                |f| f.seo.default_description.clone(),
                |f, lang, v| f.seo.default_description.set(lang, v),
            )}
            <div class="field-trio">
                {text_field(
                    screen,
                    "Google Site Verification",
                    "Verification code",
                    |f| f.seo.google_verification.clone(),
                    |f, v| f.seo.google_verification = v,
                )}
                {text_field(
                    screen,
                    "Google Analytics ID",
                    "G-XXXXXXXXXX",
                    |f| f.seo.google_analytics_id.clone(),
                    |f, v| f.seo.google_analytics_id = v,
                )}
                {text_field(
                    screen,
                    "Facebook Pixel ID",
                    "XXXXXXXXXXXXXXX",
                    |f| f.seo.facebook_pixel_id.clone(),
                    |f, v| f.seo.facebook_pixel_id = v,
                )}
            </div>
            {save_button(screen, SettingsSection::Seo)}
        </section>
    }
}

// =============================================================================
// LOCATIONS
// =============================================================================

#[component]
fn LocationsPanel(screen: SettingsScreen) -> impl IntoView {
    let count = Memo::new(move |_| screen.form.with(|f| f.locations.len()));

    view! {
        <section class="panel">
            <header class="panel__header">
                <div>
                    <h2 class="panel__title">"Locations"</h2>
                    <p class="panel__subtitle">"Manage multi-city offices for geo-targeted SEO"</p>
                </div>
                <button class="btn" on:click=move |_| screen.edit(SettingsForm::add_location)>"+ Add Location"</button>
            </header>
            {move || {
                if count.get() == 0 {
                    return view! {
                        <p class="panel__empty">
                            "No locations configured yet. Add each branch, service area, or city-specific landing page to expose detailed local information."
                        </p>
                    }
                    .into_any();
                }
                (0..count.get()).map(|index| view! { <LocationCard screen=screen index=index/> }).collect_view().into_any()
            }}
            {save_button(screen, SettingsSection::Locations)}
        </section>
    }
}

fn read_location(screen: SettingsScreen, index: usize, read: impl Fn(&SiteLocation) -> String) -> String {
    screen.form.with(|f| f.locations.get(index).map(read).unwrap_or_default())
}

fn location_text(
    screen: SettingsScreen,
    index: usize,
    label: &'static str,
    placeholder: &'static str,
    get: fn(&SiteLocation) -> String,
    set: fn(&mut SiteLocation, String),
) -> impl IntoView {
    view! {
        <label class="dialog__label field">
            {label}
            <input
                class="dialog__input"
                placeholder=placeholder
                prop:value=move || read_location(screen, index, get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    screen.edit(|f| f.edit_location(index, |l| set(l, value)));
                }
            />
        </label>
    }
}

fn location_localized(
    screen: SettingsScreen,
    index: usize,
    label: &'static str,
    field: LocationText,
    multiline: bool,
) -> impl IntoView {
    let value = Signal::derive(move || {
        screen.form.with(|f| {
            f.locations
                .get(index)
                .map(|l| match field {
                    LocationText::Name => Localized::from(&l.name),
                    LocationText::Summary => Localized::from(&l.summary),
                    LocationText::Address => Localized::from(&l.address),
                    LocationText::Hours => l.hours.as_ref().map(Localized::from).unwrap_or_default(),
                })
                .unwrap_or_default()
        })
    });
    view! {
        <LocalizedFields
            label=label
            multiline=multiline
            rows=3
            value=value
            on_change=Callback::new(move |(lang, text): (Lang, String)| {
                screen.edit(|f| f.set_location_text(index, field, lang, text));
            })
        />
    }
}

fn optional_text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

fn non_blank(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

#[component]
fn LocationCard(screen: SettingsScreen, index: usize) -> impl IntoView {
    let heading = move || screen.form.with(|f| f.locations.get(index).map(|l| location_heading(l, index)).unwrap_or_default());
    let geo = move |axis: GeoAxis| move || read_location(screen, index, |l| geo_input(l, axis));
    let rating = move |part: RatingPart| move || read_location(screen, index, |l| rating_input(l, part));

    view! {
        <div class="location-card">
            <header class="location-card__header">
                <div>
                    <h3>{heading}</h3>
                    <p class="panel__subtitle">"Localized content, NAP details, and structured data signals"</p>
                </div>
                <button class="btn btn--small btn--danger" on:click=move |_| screen.edit(|f| f.remove_location(index))>
                    "Remove"
                </button>
            </header>
            <div class="field-trio">
                {location_text(screen, index, "Slug", "e.g., kuala-lumpur", |l| l.slug.clone(), |l, v| l.slug = v)}
            </div>
            {location_localized(screen, index, "Name", LocationText::Name, false)}
            {location_localized(screen, index, "Summary", LocationText::Summary, true)}
            {location_localized(screen, index, "Address", LocationText::Address, true)}
            <div class="field-trio">
                {location_text(screen, index, "Phone", "", |l| optional_text(l.phone.as_ref()), |l, v| l.phone = non_blank(v))}
                {location_text(
                    screen,
                    index,
                    "WhatsApp",
                    "",
                    |l| optional_text(l.whatsapp.as_ref()),
                    |l, v| l.whatsapp = non_blank(v),
                )}
                {location_text(screen, index, "Email", "", |l| optional_text(l.email.as_ref()), |l, v| l.email = non_blank(v))}
            </div>
            {location_localized(screen, index, "Business Hours", LocationText::Hours, false)}
            <div class="field-trio">
                {location_text(
                    screen,
                    index,
                    "Map Embed URL",
                    "https://www.google.com/maps/embed?...",
                    |l| optional_text(l.map_embed_url.as_ref()),
                    |l, v| l.map_embed_url = non_blank(v),
                )}
                <label class="dialog__label field">
                    "Latitude"
                    <input
                        class="dialog__input"
                        prop:value=geo(GeoAxis::Lat)
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            screen.edit(|f| f.set_location_geo(index, GeoAxis::Lat, &raw));
                        }
                    />
                </label>
                <label class="dialog__label field">
                    "Longitude"
                    <input
                        class="dialog__input"
                        prop:value=geo(GeoAxis::Lng)
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            screen.edit(|f| f.set_location_geo(index, GeoAxis::Lng, &raw));
                        }
                    />
                </label>
            </div>
            <div class="field-pair">
                <label class="dialog__label field">
                    "Average Rating"
                    <input
                        class="dialog__input"
                        placeholder="4.9"
                        prop:value=rating(RatingPart::Score)
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            screen.edit(|f| f.set_location_rating(index, RatingPart::Score, &raw));
                        }
                    />
                </label>
                <label class="dialog__label field">
                    "Review Count"
                    <input
                        class="dialog__input"
                        placeholder="120"
                        prop:value=rating(RatingPart::Count)
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            screen.edit(|f| f.set_location_rating(index, RatingPart::Count, &raw));
                        }
                    />
                </label>
            </div>
            <LocationListEditor screen=screen index=index list=LocationList::Services/>
            <LocationListEditor screen=screen index=index list=LocationList::AreasServed/>
            <LocationFaqEditor screen=screen index=index/>
        </div>
    }
}

#[component]
fn LocationListEditor(screen: SettingsScreen, index: usize, list: LocationList) -> impl IntoView {
    let (title, hint, empty, item_name) = match list {
        LocationList::Services => {
            ("Services", "Local offerings shown on location pages", "No services added yet.", "Service")
        }
        LocationList::AreasServed => ("Areas Served", "Mention nearby suburbs or towns", "No areas added yet.", "Area")
    };
    let count =
        Memo::new(move |_| screen.form.with(|f| f.locations.get(index).map_or(0, |l| list_items(l, list).len())));

    view! {
        <div class="sublist">
            <header class="sublist__header">
                <div>
                    <h4>{title}</h4>
                    <p class="panel__subtitle">{hint}</p>
                </div>
                <button class="btn btn--small" on:click=move |_| screen.edit(|f| f.add_list_item(index, list))>
                    {format!("+ Add {item_name}")}
                </button>
            </header>
            {move || {
                if count.get() == 0 {
                    return view! { <p class="panel__empty">{empty}</p> }.into_any();
                }
                (0..count.get())
                    .map(|item| {
                        let value = Signal::derive(move || {
                            screen.form.with(|f| {
                                f.locations
                                    .get(index)
                                    .and_then(|l| list_items(l, list).get(item))
                                    .map(Localized::from)
                                    .unwrap_or_default()
                            })
                        });
                        view! {
                            <div class="sublist__item">
                                <div class="sublist__item-header">
                                    <span class="table__primary">{format!("{item_name} {}", item + 1)}</span>
                                    <button
                                        class="btn btn--small btn--danger"
                                        on:click=move |_| screen.edit(|f| f.remove_list_item(index, list, item))
                                    >
                                        "Remove"
                                    </button>
                                </div>
                                <LocalizedFields
                                    label="Label"
                                    value=value
                                    on_change=Callback::new(move |(lang, text): (Lang, String)| {
                                        screen.edit(|f| f.set_list_item(index, list, item, lang, text));
                                    })
                                />
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn LocationFaqEditor(screen: SettingsScreen, index: usize) -> impl IntoView {
    let count = Memo::new(move |_| screen.form.with(|f| f.locations.get(index).map_or(0, |l| l.faqs.len())));
    let part_value = move |faq: usize, part: FaqPart| {
        Signal::derive(move || {
            screen.form.with(|f| {
                f.locations
                    .get(index)
                    .and_then(|l| l.faqs.get(faq))
                    .and_then(|entry| match part {
                        FaqPart::Question => entry.question.as_ref(),
                        FaqPart::Answer => entry.answer.as_ref(),
                    })
                    .map(Localized::from)
                    .unwrap_or_default()
            })
        })
    };

    view! {
        <div class="sublist">
            <header class="sublist__header">
                <div>
                    <h4>"Local FAQs"</h4>
                    <p class="panel__subtitle">"Answer city-specific customer questions"</p>
                </div>
                <button class="btn btn--small" on:click=move |_| screen.edit(|f| f.add_faq(index))>"+ Add FAQ"</button>
            </header>
            {move || {
                if count.get() == 0 {
                    return view! { <p class="panel__empty">"No FAQs added yet."</p> }.into_any();
                }
                (0..count.get())
                    .map(|faq| {
                        view! {
                            <div class="sublist__item">
                                <div class="sublist__item-header">
                                    <span class="table__primary">{format!("FAQ {}", faq + 1)}</span>
                                    <button
                                        class="btn btn--small btn--danger"
                                        on:click=move |_| screen.edit(|f| f.remove_faq(index, faq))
                                    >
                                        "Remove"
                                    </button>
                                </div>
                                <LocalizedFields
                                    label="Question"
                                    value=part_value(faq, FaqPart::Question)
                                    on_change=Callback::new(move |(lang, text): (Lang, String)| {
                                        screen.edit(|f| f.set_faq(index, faq, FaqPart::Question, lang, text));
                                    })
                                />
                                <LocalizedFields
                                    label="Answer"
                                    multiline=true
                                    rows=3
                                    value=part_value(faq, FaqPart::Answer)
                                    on_change=Callback::new(move |(lang, text): (Lang, String)| {
                                        screen.edit(|f| f.set_faq(index, faq, FaqPart::Answer, lang, text));
                                    })
                                />
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
