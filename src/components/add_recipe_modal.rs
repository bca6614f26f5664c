//! Add Recipe Modal
//!
//! Puts a recipe on the weekly plan. The day and meal type come from the
//! grid cell whose add button opened the modal.

use leptos::prelude::*;
use leptos_transition::Transition;

use crate::components::Modal;
use crate::meal_plan::AddRecipeFields;
use crate::models::RecipeSummary;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AddRecipeModal(
    transition: Transition,
    plan_id: u32,
    suggestions: Vec<RecipeSummary>,
) -> impl IntoView {
    let store = use_app_store();
    let fields = Memo::new(move |_| AddRecipeFields::new(plan_id, store.meal_slot().get().as_ref()));

    view! {
        <Modal transition=transition id="meal-plan-modal" title="Add Recipe to Meal Plan">
            <form action="/meal-plan/add" method="post" class="modal-body">
                <input type="hidden" name="plan_id" prop:value=move || fields.get().plan_id />
                <input type="hidden" id="day_of_week" name="day_of_week" prop:value=move || fields.get().day_of_week />
                <input type="hidden" id="meal_type" name="meal_type" prop:value=move || fields.get().meal_type />

                {if suggestions.is_empty() {
                    view! {
                        <p class="text-center">"No recipe suggestions yet. Add ingredients to your pantry first."</p>
                    }.into_any()
                } else {
                    view! {
                        <div class="form-group">
                            <label for="recipe_id">"Recipe"</label>
                            <select id="recipe_id" name="recipe_id" class="form-control" required>
                                {suggestions.into_iter().map(|recipe| view! {
                                    <option value=recipe.id>{recipe.name}</option>
                                }).collect_view()}
                            </select>
                        </div>
                    }.into_any()
                }}

                <div class="modal-actions">
                    <button type="button" id="close-meal-plan-modal" class="btn btn-secondary" on:click=move |_| transition.close()>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary">"Add to Plan"</button>
                </div>
            </form>
        </Modal>
    }
}
