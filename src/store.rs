//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::CategoryFilter;
use crate::models::{InventoryItem, MealSlot, RecipeSummary};

/// View state shared by the page's features
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Recipes currently shown in the results list
    pub results: Vec<RecipeSummary>,
    /// Bumped on every refresh so match bars re-mount and re-animate
    pub results_version: u32,
    /// Pantry items of the inventory page
    pub inventory: Vec<InventoryItem>,
    /// The single active category filter
    pub active_category: CategoryFilter,
    /// Slot the add-recipe modal was opened for
    pub meal_slot: Option<MealSlot>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the results list and mark it as a new render
pub fn store_replace_results(store: &AppStore, recipes: Vec<RecipeSummary>) {
    store.results().set(recipes);
    store.results_version().update(|v| *v += 1);
}

/// Make `filter` the only active category filter
pub fn store_select_category(store: &AppStore, filter: CategoryFilter) {
    store.active_category().set(filter);
}

/// Remember which grid cell the add-recipe modal belongs to
pub fn store_set_meal_slot(store: &AppStore, slot: MealSlot) {
    store.meal_slot().set(Some(slot));
}
