//! Headline number card.

use leptos::prelude::*;

use crate::state::stats::StatCard;

#[component]
pub fn StatCardView(card: StatCard, #[prop(optional)] loading: bool) -> impl IntoView {
    let StatCard { title, value, description, helper, trend, tone } = card;
    let value = if loading { "...".to_owned() } else { value };
    view! {
        <div class=format!("stat-card {tone}")>
            <p class="stat-card__title">{title}</p>
            <p class="stat-card__value">{value}</p>
            <p class="stat-card__description">
                {trend.map(|trend| view! { <span class=trend.class()>{trend.arrow()}" "</span> })}
                {description}
            </p>
            {helper.map(|helper| view! { <p class="stat-card__helper">{helper}</p> })}
        </div>
    }
}
