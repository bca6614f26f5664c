//! Ingredient Form Component
//!
//! Add-to-pantry form, posted to the server as a regular form submission.

use leptos::prelude::*;

use crate::components::QuantityInput;
use crate::filter::CATEGORIES;

/// Unit options
const UNITS: &[(&str, &str)] = &[
    ("g", "Grams (g)"),
    ("kg", "Kilograms (kg)"),
    ("ml", "Milliliters (ml)"),
    ("l", "Liters (l)"),
    ("cups", "Cups"),
    ("tbsp", "Tablespoons"),
    ("tsp", "Teaspoons"),
    ("whole", "Whole"),
    ("slices", "Slices"),
    ("pieces", "Pieces"),
    ("pinch", "Pinch"),
    ("oz", "Ounces (oz)"),
    ("lb", "Pounds (lb)"),
    ("cloves", "Cloves"),
];

#[component]
pub fn IngredientForm() -> impl IntoView {
    view! {
        <form class="ingredient-form card" action="/inventory/add" method="post">
            <h2>"Add Ingredient"</h2>

            <div class="form-group">
                <label for="ingredient_name">"Ingredient Name"</label>
                <input type="text" id="ingredient_name" name="ingredient_name" class="form-control" required />
            </div>

            <div class="form-group">
                <label for="category">"Category"</label>
                <select id="category" name="category" class="form-control" required>
                    {CATEGORIES.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
            </div>

            <QuantityInput />

            <div class="form-group">
                <label for="unit">"Unit"</label>
                <select id="unit" name="unit" class="form-control" required>
                    {UNITS.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="expiry_date">"Expiry Date (Optional)"</label>
                <input type="date" id="expiry_date" name="expiry_date" class="form-control" />
            </div>

            <button type="submit" class="btn btn-primary">"Save"</button>
        </form>
    }
}
