//! Recipe Detail View

use leptos::prelude::*;

use crate::components::{CompleteRecipeModal, MatchBar};
use crate::context::use_app_context;
use crate::models::{Ingredient, RecipeDetail};

fn ingredient_line(ingredient: &Ingredient) -> String {
    if ingredient.amount > 0.0 {
        format!("{} {} {}", ingredient.amount, ingredient.unit, ingredient.name)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        ingredient.name.clone()
    }
}

#[component]
pub fn RecipeDetailView(recipe: RecipeDetail) -> impl IntoView {
    let ctx = use_app_context();
    let complete_modal = ctx.transition();
    let fallback_image = ctx.config().fallback_image_url;

    let RecipeDetail {
        summary,
        servings,
        ingredients,
        instructions,
        missing_ingredients,
        has_all_ingredients,
    } = recipe;
    let image_src = summary.image_src(&fallback_image).to_string();
    let percentage = summary.match_percentage();
    let total_time = format!("{} mins", summary.total_time());
    let name = summary.name.clone();

    view! {
        <article class="recipe-detail">
            <img src=image_src alt=name.clone() class="recipe-hero" />
            <h1>{name.clone()}</h1>
            <p class="recipe-description">{summary.description}</p>
            <div class="recipe-meta">
                <span>{total_time}</span>
                <span>{summary.difficulty}</span>
            </div>
            <MatchBar percentage=percentage />
            <div class="recipe-tags">
                {summary.tags.into_iter().map(|tag| view! {
                    <span class="recipe-tag">{tag}</span>
                }).collect_view()}
            </div>

            <section class="recipe-ingredients">
                <h2>"Ingredients"</h2>
                <ul>
                    {ingredients.iter().map(|i| view! { <li>{ingredient_line(i)}</li> }).collect_view()}
                </ul>
            </section>

            {(!missing_ingredients.is_empty()).then(|| view! {
                <section class="missing-ingredients">
                    <h2>"Missing Ingredients"</h2>
                    <ul>
                        {missing_ingredients.iter().map(|i| view! { <li>{ingredient_line(i)}</li> }).collect_view()}
                    </ul>
                </section>
            })}

            <section class="recipe-instructions">
                <h2>"Instructions"</h2>
                <ol>
                    {instructions.into_iter().map(|step| view! { <li>{step}</li> }).collect_view()}
                </ol>
            </section>

            <button
                type="button"
                id="complete-recipe-btn"
                class="btn btn-primary"
                class:btn-muted=!has_all_ingredients
                on:click=move |_| complete_modal.open()
            >
                "Mark as Completed"
            </button>

            <CompleteRecipeModal
                transition=complete_modal
                recipe_id=summary.id
                recipe_name=name
                servings=servings.unwrap_or(1)
            />
        </article>
    }
}
