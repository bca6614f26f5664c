//! Meal Plan View
//!
//! Weekly grid of planned meals with an add button per day and meal type.

use leptos::prelude::*;

use crate::components::AddRecipeModal;
use crate::context::use_app_context;
use crate::expiry::short_date;
use crate::meal_plan::{day_date, entries_for, slot_for, DAYS, MEAL_TYPES};
use crate::models::{MealPlan, RecipeSummary};
use crate::results::recipe_href;
use crate::store::{store_set_meal_slot, use_app_store};

#[component]
pub fn MealPlanView(plan: MealPlan, suggestions: Vec<RecipeSummary>) -> impl IntoView {
    let store = use_app_store();
    let add_modal = use_app_context().transition();
    let plan_id = plan.id;

    let rows = DAYS.iter().enumerate().map(|(day_index, day_name)| {
        let date = short_date(day_date(plan.week_start_date, day_index));
        let cells = MEAL_TYPES.iter().map(|(meal_type, meal_label)| {
            let entries = entries_for(&plan, day_index, meal_type)
                .into_iter()
                .map(|entry| view! {
                    <div class="meal-entry">
                        <a href=recipe_href(&entry.recipe.id)>{entry.recipe.name.clone()}</a>
                        <form action=format!("/meal-plan/remove/{}", entry.id) method="post" class="inline-form">
                            <button type="submit" class="remove-btn" title="Remove">"×"</button>
                        </form>
                    </div>
                })
                .collect_view();
            let slot = slot_for(day_index, meal_type);
            let data_day = slot.day.clone();
            let data_meal_type = slot.meal_type.clone();
            view! {
                <td class="meal-cell">
                    {entries}
                    <button
                        type="button"
                        class="add-recipe-btn"
                        data-day=data_day
                        data-meal-type=data_meal_type
                        title=format!("Add {}", meal_label)
                        on:click=move |_| {
                            // Context first, so the form fields are set before the modal shows
                            store_set_meal_slot(&store, slot.clone());
                            add_modal.open();
                        }
                    >
                        "+"
                    </button>
                </td>
            }
        }).collect_view();

        view! {
            <tr>
                <th class="day-header">
                    <span class="day-name">{*day_name}</span>
                    <span class="day-date">{date}</span>
                </th>
                {cells}
            </tr>
        }
    }).collect_view();

    view! {
        <section class="meal-plan">
            <div class="meal-plan-header">
                <h1>{format!("Week of {}", short_date(plan.week_start_date))}</h1>
                <div class="meal-plan-actions">
                    <a href=format!("/meal-plan/generate?plan_id={}", plan_id) class="btn btn-secondary">"Generate Plan"</a>
                    <a href="/meal-plan/grocery-list" class="btn btn-secondary">"Grocery List"</a>
                </div>
            </div>

            <table class="meal-plan-grid">
                <thead>
                    <tr>
                        <th></th>
                        {MEAL_TYPES.iter().map(|(_, label)| view! { <th>{*label}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>

            <AddRecipeModal transition=add_modal plan_id=plan_id suggestions=suggestions />
        </section>
    }
}
