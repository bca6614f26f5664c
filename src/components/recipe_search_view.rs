//! Recipe Search View

use leptos::prelude::*;

use crate::components::{FilterPanel, RecipeResults};

#[component]
pub fn RecipeSearchView(#[prop(into)] term: String) -> impl IntoView {
    view! {
        <section class="recipe-search">
            <h1>"Find Recipes"</h1>
            <FilterPanel term=term />
            <RecipeResults />
        </section>
    }
}
