//! Blog post list.

use contract::format::short_date;
use contract::types::Blog;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::badge::blog_status_class;
use crate::components::flash_banner::ErrorBanner;
use crate::state::blog_form::{DELETE_CONFIRM, DELETE_FAILED, blog_counts};
use crate::util::browser;

#[component]
pub fn BlogsPage() -> impl IntoView {
    let blogs = RwSignal::new(Vec::<Blog>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_blogs().await {
            Ok(items) => blogs.set(items),
            Err(e) => {
                log::warn!("fetch blogs failed: {e}");
                error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
    });

    let on_delete = move |id: String| {
        if !browser::confirm(DELETE_CONFIRM) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_blog(&id).await {
                Ok(()) => blogs.update(|items| items.retain(|b| b.id != id)),
                Err(e) => {
                    log::warn!("delete blog {id} failed: {e}");
                    error.set(Some(DELETE_FAILED.to_owned()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, DELETE_FAILED);
        }
    };

    view! {
        <div class="page">
            <section class="hero">
                <div>
                    <p class="hero__eyebrow">"Content studio"</p>
                    <h1>"Blog Posts"</h1>
                    <p class="hero__lead">"Plan, publish, and monitor content performance in one view."</p>
                    <div class="hero__tags">
                        {move || {
                            if loading.get() {
                                return view! { <span class="badge badge--outline">"Loading insights..."</span> }.into_any();
                            }
                            let (published, drafts) = blogs.with(|b| blog_counts(b));
                            view! {
                                <span class="badge badge--outline">{format!("Total {}", blogs.with(Vec::len))}</span>
                                <span class="badge badge--green">{format!("Published {published}")}</span>
                                <span class="badge badge--yellow">{format!("Drafts {drafts}")}</span>
                            }
                            .into_any()
                        }}
                    </div>
                </div>
                <div class="hero__actions">
                    <A href="/content/blogs/new" attr:class="btn btn--primary">"+ New Post"</A>
                </div>
            </section>

            <ErrorBanner error=error/>

            <div class="panel">
                {move || {
                    if loading.get() {
                        return view! { <p class="panel__empty">"Loading posts..."</p> }.into_any();
                    }
                    let items = blogs.get();
                    if items.is_empty() {
                        return view! {
                            <div class="panel__empty">
                                <p>"No blog posts yet"</p>
                                <A href="/content/blogs/new" attr:class="btn btn--primary">"Create Your First Post"</A>
                            </div>
                        }
                        .into_any();
                    }
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Category"</th>
                                    <th>"Status"</th>
                                    <th>"Views"</th>
                                    <th>"Date"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {items
                                    .into_iter()
                                    .map(|blog| {
                                        let href = format!("/content/blogs/{}", blog.id);
                                        let id = blog.id.clone();
                                        let date = short_date(Some(blog.published_at.as_deref().unwrap_or(&blog.created_at)));
                                        view! {
                                            <tr>
                                                <td>
                                                    <div class="table__primary">{blog.title.en}</div>
                                                    <div class="table__secondary">{blog.slug}</div>
                                                </td>
                                                <td>
                                                    <span class="badge badge--outline">{blog.category}</span>
                                                </td>
                                                <td>
                                                    <span class=blog_status_class(blog.status)>{blog.status.as_str()}</span>
                                                </td>
                                                <td>{blog.views}</td>
                                                <td class="table__secondary">{date}</td>
                                                <td class="table__actions">
                                                    <A href=href attr:class="btn btn--small">"Edit"</A>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| on_delete(id.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}
