//! Navigation Bar Component
//!
//! Site navigation with a collapsible menu for small screens.

use leptos::prelude::*;

use crate::context::use_app_context;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/inventory/", "Pantry"),
    ("/recipe/", "Recipes"),
    ("/recipe/search", "Search"),
    ("/meal-plan/", "Meal Plan"),
    ("/recipe/completed", "Cooked"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let menu = use_app_context().transition();

    let links = || {
        NAV_LINKS
            .iter()
            .map(|(href, label)| view! { <a href=*href class="nav-link">{*label}</a> })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar-brand">"CookBookIt"</a>
            <div class="nav-links">{links()}</div>
            <button
                type="button"
                id="mobile-menu-toggle"
                class="mobile-menu-toggle"
                class:open=move || menu.is_opening()
                on:click=move |_| menu.toggle()
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
        </nav>
        <div
            id="mobile-menu"
            class="mobile-menu"
            class:show=move || menu.is_open()
            style=move || if menu.is_displayed() { "" } else { "display: none;" }
        >
            {links()}
        </div>
    }
}
