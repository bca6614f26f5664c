//! Recipe Search Filter Panel
//!
//! Search box plus a collapsible panel of dietary filters.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Dietary filter checkboxes (field name, label)
const DIETARY_FILTERS: &[(&str, &str)] = &[
    ("vegetarian", "Vegetarian"),
    ("vegan", "Vegan"),
    ("gluten_free", "Gluten Free"),
    ("dairy_free", "Dairy Free"),
];

#[component]
pub fn FilterPanel(#[prop(into)] term: String) -> impl IntoView {
    let panel = use_app_context().transition();

    let toggle_label = move || {
        if panel.is_opening() {
            "Hide Filters"
        } else {
            "Show Filters"
        }
    };

    view! {
        <form class="search-form" action="/recipe/search" method="get">
            <div class="search-row">
                <input
                    type="text"
                    name="term"
                    class="form-control"
                    placeholder="Search recipes..."
                    value=term
                />
                <button type="submit" class="btn btn-primary">"Search"</button>
                <button
                    type="button"
                    id="filter-toggle"
                    class="btn btn-secondary"
                    on:click=move |_| panel.toggle()
                >
                    {toggle_label}
                </button>
            </div>

            <div
                id="filter-form"
                class="filter-form"
                class:d-none=move || !panel.is_displayed()
                class:slide-in-up=move || panel.is_open()
            >
                {DIETARY_FILTERS.iter().map(|(name, label)| view! {
                    <label class="filter-option">
                        <input type="checkbox" name=*name />
                        {*label}
                    </label>
                }).collect_view()}
                <button type="submit" class="btn btn-primary">"Apply Filters"</button>
            </div>
        </form>
    }
}
