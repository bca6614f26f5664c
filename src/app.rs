//! Pantry UI App
//!
//! Root component: reads the page's bootstrap data and mounts the matching view.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::bootstrap::PageData;
use crate::components::{IngredientForm, InventoryView, MealPlanView, NavBar, RecipeDetailView, RecipeSearchView};
use crate::config::UiConfig;
use crate::context::AppContext;
use crate::expiry;
use crate::store::AppState;

/// Seed the store from the page's data
fn initial_state(page: &PageData) -> AppState {
    let mut state = AppState::new();
    match page {
        PageData::Inventory { items } => state.inventory = items.clone(),
        PageData::RecipeSearch { recipes, .. } => state.results = recipes.clone(),
        _ => {}
    }
    state
}

#[component]
pub fn App() -> impl IntoView {
    let config = UiConfig::load();
    let page = PageData::load();

    // Provide context to all children
    provide_context(AppContext::new(config, expiry::today()));
    provide_context(Store::new(initial_state(&page)));

    let content = match page {
        PageData::Inventory { items } => {
            web_sys::console::log_1(&format!("[APP] Inventory page, {} items", items.len()).into());
            view! { <InventoryView items=items /> }.into_any()
        }
        PageData::AddIngredient => view! { <IngredientForm /> }.into_any(),
        PageData::RecipeSearch { term, recipes } => {
            web_sys::console::log_1(&format!("[APP] Search page, {} recipes", recipes.len()).into());
            view! { <RecipeSearchView term=term /> }.into_any()
        }
        PageData::RecipeDetail { recipe } => view! { <RecipeDetailView recipe=recipe /> }.into_any(),
        PageData::MealPlan { plan, suggestions } => {
            web_sys::console::log_1(&format!("[APP] Meal plan {}, {} entries", plan.id, plan.items.len()).into());
            view! { <MealPlanView plan=plan suggestions=suggestions /> }.into_any()
        }
        PageData::Home => view! { <div></div> }.into_any(),
    };

    view! {
        <NavBar />
        <main class="container">{content}</main>
    }
}
