//! Inventory View

use leptos::prelude::*;

use crate::components::{ExpirationWarnings, InventoryList};
use crate::models::InventoryItem;

#[component]
pub fn InventoryView(items: Vec<InventoryItem>) -> impl IntoView {
    view! {
        <section class="inventory">
            <div class="inventory-header">
                <h1>"My Pantry"</h1>
                <a href="/inventory/add" class="btn btn-primary">"Add Ingredient"</a>
            </div>
            <ExpirationWarnings items=items />
            <InventoryList />
        </section>
    }
}
