//! Recipe Results Component
//!
//! Results list fed by the store. While mounted it is the target of the
//! exported `updateRecipeResults` function.

use leptos::prelude::*;

use crate::bridge::{clear_results_sink, register_results_sink};
use crate::components::RecipeCard;
use crate::context::use_app_context;
use crate::results::{ResultsView, NO_RESULTS_MESSAGE};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RecipeResults() -> impl IntoView {
    let store = use_app_store();
    let fallback_image = use_app_context().config().fallback_image_url;

    register_results_sink(store);
    on_cleanup(clear_results_sink);

    view! {
        <div id="recipe-results" class="recipe-grid">
            {move || {
                // Rebuild every card on refresh so all match bars animate again
                let _ = store.results_version().get();
                match ResultsView::build(&store.results().get(), &fallback_image) {
                    ResultsView::Empty => view! {
                        <p class="text-center">{NO_RESULTS_MESSAGE}</p>
                    }.into_any(),
                    ResultsView::Cards(cards) => cards
                        .into_iter()
                        .map(|card| view! { <RecipeCard card=card /> })
                        .collect_view()
                        .into_any(),
                }
            }}
        </div>
    }
}
