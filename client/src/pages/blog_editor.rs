//! Create or edit one blog post.
//!
//! `/content/blogs/new` starts from defaults; `/content/blogs/:id` loads the
//! post first. Saving or deleting returns to the list.

use contract::types::{BLOG_CATEGORIES, Blog, BlogStatus, Lang, Localized};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::badge::blog_status_class;
use crate::components::localized_input::LocalizedFields;
use crate::state::blog_form::{BlogEditor, BlogField, BlogFormValues, DELETE_CONFIRM, DELETE_FAILED, NOT_FOUND, SAVE_FAILED};
use crate::util::browser;

const LIST_PATH: &str = "/content/blogs";

#[component]
pub fn BlogEditorPage() -> impl IntoView {
    let params = use_params_map();
    let blog_id = params.with_untracked(|p| p.get("id"));
    let blog = RwSignal::new(None::<Blog>);
    let loading = RwSignal::new(blog_id.is_some());
    let load_error = RwSignal::new(None::<String>);
    let editor = RwSignal::new(BlogEditor::new(None));

    if let Some(id) = blog_id.clone() {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_blog(&id).await {
                Ok(found) => {
                    editor.set(BlogEditor::new(Some(&found)));
                    blog.set(Some(found));
                }
                Err(e) => {
                    log::warn!("fetch blog {id} failed: {e}");
                    load_error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }

    let is_new = blog_id.is_none();
    let heading = move || {
        if is_new {
            return "Create a new post".to_owned();
        }
        blog.with(|b| b.as_ref().map_or_else(|| "Edit blog post".to_owned(), |b| b.title.en.clone()))
    };

    view! {
        <div class="page">
            <section class="hero">
                <div>
                    <p class="hero__eyebrow">"Content studio"</p>
                    <h1>{heading}</h1>
                    <p class="hero__lead">
                        {if is_new {
                            "Draft bilingual content, then publish when it is ready."
                        } else {
                            "Review SEO, update content, and publish when ready."
                        }}
                    </p>
                    {move || {
                        blog.get().map(|b| {
                            view! {
                                <div class="hero__tags">
                                    <span class="badge badge--outline">{b.category}</span>
                                    <span class=blog_status_class(b.status)>{b.status.as_str()}</span>
                                </div>
                            }
                        })
                    }}
                </div>
                <div class="hero__actions">
                    <A href=LIST_PATH attr:class="btn">"Back to posts"</A>
                </div>
            </section>

            {move || load_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || {
                if loading.get() {
                    return view! { <p class="panel__empty">"Loading post..."</p> }.into_any();
                }
                if !is_new && blog.with(Option::is_none) {
                    return view! {
                        <div class="panel panel--centered">
                            <p>{NOT_FOUND}</p>
                        </div>
                    }
                    .into_any();
                }
                view! { <BlogFormView editor=editor/> }.into_any()
            }}
        </div>
    }
}

fn set_value(editor: RwSignal<BlogEditor>, edit: impl FnOnce(&mut BlogFormValues)) {
    editor.update(|e| edit(&mut e.values));
}

fn localized_setter(
    editor: RwSignal<BlogEditor>,
    pick: fn(&mut BlogFormValues) -> &mut Localized,
) -> Callback<(Lang, String)> {
    Callback::new(move |(lang, value): (Lang, String)| set_value(editor, |v| pick(v).set(lang, value)))
}

fn localized_value(editor: RwSignal<BlogEditor>, read: fn(&BlogFormValues) -> &Localized) -> Signal<Localized> {
    Signal::derive(move || editor.with(|e| read(&e.values).clone()))
}

fn error_lookup(editor: RwSignal<BlogEditor>, field: fn(Lang) -> BlogField) -> Callback<Lang, Option<&'static str>> {
    Callback::new(move |lang| editor.with(|e| e.field_error(field(lang))))
}

#[component]
fn BlogFormView(editor: RwSignal<BlogEditor>) -> impl IntoView {
    let navigate = use_navigate();

    let go_to_list = {
        let navigate = navigate.clone();
        move || navigate(LIST_PATH, NavigateOptions::default())
    };

    let on_submit = {
        let go_to_list = go_to_list.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(payload) = editor.try_update(BlogEditor::begin_submit).flatten() else {
                return;
            };
            let blog_id = editor.with_untracked(|e| e.blog_id.clone());
            #[cfg(feature = "hydrate")]
            {
                let go_to_list = go_to_list.clone();
                leptos::task::spawn_local(async move {
                    let result = match &blog_id {
                        Some(id) => crate::net::api::update_blog(id, &payload).await,
                        None => crate::net::api::create_blog(&payload).await,
                    };
                    match result {
                        Ok(_) => go_to_list(),
                        Err(e) => {
                            log::warn!("saving blog failed: {e}");
                            editor.update(|ed| {
                                ed.submitting = false;
                                ed.error = Some(save_error(&e));
                            });
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&go_to_list, blog_id, payload);
            }
        }
    };

    let on_delete = move |_| {
        let Some(id) = editor.with_untracked(|e| e.blog_id.clone()) else {
            return;
        };
        if !browser::confirm(DELETE_CONFIRM) {
            return;
        }
        editor.update(|e| {
            e.deleting = true;
            e.error = None;
        });
        #[cfg(feature = "hydrate")]
        {
            let go_to_list = go_to_list.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_blog(&id).await {
                    Ok(()) => go_to_list(),
                    Err(e) => {
                        log::warn!("delete blog {id} failed: {e}");
                        editor.update(|ed| {
                            ed.deleting = false;
                            ed.error = Some(DELETE_FAILED.to_owned());
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, DELETE_FAILED);
        }
    };

    let text = move |read: fn(&BlogFormValues) -> String| move || editor.with(|e| read(&e.values));
    let field_error = move |field: BlogField| {
        move || editor.with(|e| e.field_error(field)).map(|m| view! { <span class="field__error">{m}</span> })
    };

    view! {
        <form class="blog-form" on:submit=on_submit>
            {move || editor.with(|e| e.error.clone()).map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <section class="panel">
                <h2 class="panel__title">"Content"</h2>
                <p class="panel__subtitle">"English & Bahasa Malaysia versions"</p>
                <LocalizedFields
                    label="Title"
                    value=localized_value(editor, |v| &v.title)
                    on_change=localized_setter(editor, |v| &mut v.title)
                    error=error_lookup(editor, BlogField::Title)
                />
                <LocalizedFields
                    label="Excerpt"
                    multiline=true
                    rows=3
                    placeholder="Short intro"
                    value=localized_value(editor, |v| &v.excerpt)
                    on_change=localized_setter(editor, |v| &mut v.excerpt)
                    error=error_lookup(editor, BlogField::Excerpt)
                />
                <LocalizedFields
                    label="Content"
                    multiline=true
                    rows=10
                    placeholder="HTML or markdown content"
                    value=localized_value(editor, |v| &v.content)
                    on_change=localized_setter(editor, |v| &mut v.content)
                    error=error_lookup(editor, BlogField::Content)
                />
            </section>

            <section class="panel">
                <h2 class="panel__title">"Metadata"</h2>
                <p class="panel__subtitle">"Manage slug, category, status and tags"</p>
                <div class="field-pair">
                    <label class="dialog__label field">
                        "Slug"
                        <input
                            class="dialog__input"
                            placeholder="unique-slug"
                            prop:value=text(|v| v.slug.clone())
                            on:input=move |ev| set_value(editor, |v| v.slug = event_target_value(&ev))
                        />
                        {field_error(BlogField::Slug)}
                    </label>
                    <label class="dialog__label field">
                        "Category"
                        <select
                            class="dialog__input"
                            prop:value=text(|v| v.category.clone())
                            on:change=move |ev| set_value(editor, |v| v.category = event_target_value(&ev))
                        >
                            {BLOG_CATEGORIES
                                .into_iter()
                                .map(|(value, label)| view! { <option value=value>{label}</option> })
                                .collect_view()}
                        </select>
                        {field_error(BlogField::Category)}
                    </label>
                    <label class="dialog__label field">
                        "Status"
                        <select
                            class="dialog__input"
                            prop:value=text(|v| v.status.as_str().to_owned())
                            on:change=move |ev| {
                                if let Some(status) = BlogStatus::parse(&event_target_value(&ev)) {
                                    set_value(editor, |v| v.status = status);
                                }
                            }
                        >
                            {BlogStatus::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="dialog__label field">
                        "Tags (comma separated)"
                        <input
                            class="dialog__input"
                            placeholder="loan, finance, malaysia"
                            prop:value=text(|v| v.tags.clone())
                            on:input=move |ev| set_value(editor, |v| v.tags = event_target_value(&ev))
                        />
                    </label>
                </div>
            </section>

            <section class="panel">
                <h2 class="panel__title">"Featured Image & SEO"</h2>
                <p class="panel__subtitle">"Optional assets and metadata"</p>
                <label class="dialog__label field">
                    "Image URL"
                    <input
                        class="dialog__input"
                        placeholder="https://..."
                        prop:value=text(|v| v.image_url.clone())
                        on:input=move |ev| set_value(editor, |v| v.image_url = event_target_value(&ev))
                    />
                    {field_error(BlogField::ImageUrl)}
                </label>
                <LocalizedFields
                    label="Image Alt"
                    placeholder="Alt text"
                    value=localized_value(editor, |v| &v.image_alt)
                    on_change=localized_setter(editor, |v| &mut v.image_alt)
                />
                <LocalizedFields
                    label="SEO Title"
                    value=localized_value(editor, |v| &v.seo_title)
                    on_change=localized_setter(editor, |v| &mut v.seo_title)
                />
                <LocalizedFields
                    label="SEO Description"
                    multiline=true
                    rows=3
                    value=localized_value(editor, |v| &v.seo_description)
                    on_change=localized_setter(editor, |v| &mut v.seo_description)
                />
                <label class="dialog__label field">
                    "SEO Keywords (comma separated)"
                    <input
                        class="dialog__input"
                        placeholder="personal loan, low interest"
                        prop:value=text(|v| v.seo_keywords.clone())
                        on:input=move |ev| set_value(editor, |v| v.seo_keywords = event_target_value(&ev))
                    />
                </label>
            </section>

            <div class="form-actions">
                <button class="btn btn--primary" type="submit" disabled=move || !editor.with(BlogEditor::can_submit)>
                    {move || if editor.with(|e| e.submitting) { "Saving..." } else { editor.with(BlogEditor::submit_label) }}
                </button>
                <Show when=move || editor.with(|e| e.blog_id.is_some())>
                    <button
                        class="btn btn--danger"
                        type="button"
                        disabled=move || editor.with(|e| e.deleting)
                        on:click=on_delete.clone()
                    >
                        {move || if editor.with(|e| e.deleting) { "Deleting..." } else { "Delete Post" }}
                    </button>
                </Show>
            </div>
        </form>
    }
}

/// Server copy when the API explained the failure, otherwise the generic text.
fn save_error(err: &contract::ApiError) -> String {
    match err {
        contract::ApiError::Server { message, .. } | contract::ApiError::Rejected(message) => message.clone(),
        _ => SAVE_FAILED.to_owned(),
    }
}
