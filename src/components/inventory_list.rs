//! Inventory List Component
//!
//! Pantry items with category filter controls. Filtering only toggles
//! visibility; every item stays in the document.

use leptos::prelude::*;

use crate::filter::filter_controls;
use crate::store::{store_select_category, use_app_store, AppStateStoreFields};

#[component]
pub fn InventoryList() -> impl IntoView {
    let store = use_app_store();
    let controls = filter_controls(&store.inventory().get_untracked());

    view! {
        <Show
            when=move || !store.inventory().get().is_empty()
            fallback=|| view! { <p class="text-center">"Your pantry is empty."</p> }
        >
            <div class="category-filters">
                {controls.clone().into_iter().map(|filter| {
                    let label = filter.label();
                    let attr = filter.as_attr().to_string();
                    let active_filter = filter.clone();
                    let is_active = move || active_filter.is_active(&store.active_category().get());
                    view! {
                        <button
                            type="button"
                            class="category-filter"
                            class:active=is_active
                            data-category=attr
                            on:click=move |_| store_select_category(&store, filter.clone())
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="inventory-list">
                <For
                    each=move || store.inventory().get()
                    key=|item| item.id
                    children=move |item| {
                        let category = item.category.clone();
                        let display = move || store.active_category().get().item_display(&category);
                        view! {
                            <div class="inventory-item card" data-category=item.category.clone() style=display>
                                <h3 class="inventory-name">{item.ingredient_name}</h3>
                                <p class="inventory-quantity">{format!("{} {}", item.quantity, item.unit)}</p>
                                <div class="inventory-actions">
                                    <a href=format!("/inventory/edit/{}", item.id) class="btn btn-secondary">"Edit"</a>
                                    <form action=format!("/inventory/delete/{}", item.id) method="post">
                                        <button type="submit" class="btn btn-danger">"Delete"</button>
                                    </form>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
