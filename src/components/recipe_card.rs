//! Recipe Card Component

use leptos::prelude::*;

use crate::components::MatchBar;
use crate::results::RecipeCardView;

#[component]
pub fn RecipeCard(card: RecipeCardView) -> impl IntoView {
    view! {
        <div class="recipe-card card">
            <img src=card.image_src alt=card.name.clone() class="card-img" />
            <div class="card-body">
                <h3 class="card-title">{card.name}</h3>
                <p class="card-text">{card.description}</p>
                <div class="recipe-meta">
                    <span>{card.time_label}</span>
                    <span>{card.difficulty}</span>
                </div>
                <MatchBar percentage=card.percentage />
                <div class="recipe-tags">
                    {card.tags.into_iter().map(|tag| view! {
                        <span class="recipe-tag">{tag}</span>
                    }).collect_view()}
                </div>
                <a href=card.detail_href class="btn btn-primary mt-2">"View Recipe"</a>
            </div>
        </div>
    }
}
