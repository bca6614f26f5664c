//! Frontend Models
//!
//! Data structures matching what the server renders into the page.

use chrono::NaiveDate;
use serde::Deserialize;

/// Recipe summary as produced by the search collaborator
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipeSummary {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub prep_time: u32,
    #[serde(default)]
    pub cook_time: u32,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub match_percentage: Option<f64>,
}

impl RecipeSummary {
    /// Prep plus cook time in minutes
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    /// Match percentage, 0 when absent or NaN (never negative zero)
    pub fn match_percentage(&self) -> f64 {
        match self.match_percentage {
            Some(p) if !p.is_nan() && p != 0.0 => p,
            _ => 0.0,
        }
    }

    /// Image URL, or the fallback when absent or empty
    pub fn image_src<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.image_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => fallback,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

/// Recipe detail page payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub summary: RecipeSummary,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub missing_ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub has_all_ingredients: bool,
}

/// Pantry inventory entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub ingredient_name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
}

/// One recipe placed on the weekly plan
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MealPlanEntry {
    pub id: u32,
    /// 0 = Monday
    pub day_of_week: u8,
    pub meal_type: String,
    pub recipe: RecipeSummary,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MealPlan {
    pub id: u32,
    pub week_start_date: NaiveDate,
    #[serde(default)]
    pub items: Vec<MealPlanEntry>,
}

/// Day/meal-type context carried from an add-recipe trigger into the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealSlot {
    pub day: String,
    pub meal_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_summary_defaults() {
        let recipe: RecipeSummary =
            serde_json::from_str(r#"{"_id": "abc", "name": "Soup"}"#).unwrap();
        assert_eq!(recipe.id, "abc");
        assert_eq!(recipe.total_time(), 0);
        assert_eq!(recipe.match_percentage(), 0.0);
        assert!(recipe.tags.is_empty());
        assert_eq!(recipe.image_src("fallback.jpg"), "fallback.jpg");
    }

    #[test]
    fn test_recipe_summary_accepts_plain_id() {
        let recipe: RecipeSummary = serde_json::from_str(
            r#"{"id": "r1", "name": "Stew", "prep_time": 10, "cook_time": 35, "image_url": ""}"#,
        )
        .unwrap();
        assert_eq!(recipe.id, "r1");
        assert_eq!(recipe.total_time(), 45);
        // Empty URL is treated like a missing one
        assert_eq!(recipe.image_src("fallback.jpg"), "fallback.jpg");
    }

    #[test]
    fn test_total_time_saturates() {
        let recipe: RecipeSummary = serde_json::from_str(
            r#"{"_id": "big", "name": "Cassoulet", "prep_time": 4294967295, "cook_time": 60}"#,
        )
        .unwrap();
        assert_eq!(recipe.total_time(), u32::MAX);
    }

    #[test]
    fn test_match_percentage_normalizes_zero() {
        let recipe: RecipeSummary =
            serde_json::from_str(r#"{"_id": "z", "name": "Toast", "match_percentage": -0.0}"#)
                .unwrap();
        assert!(recipe.match_percentage().is_sign_positive());
        assert_eq!(crate::match_band::bar_width(recipe.match_percentage()), "0%");
        assert_eq!(crate::match_band::match_label(recipe.match_percentage()), "0%");
    }

    #[test]
    fn test_recipe_detail_flattens_summary() {
        let detail: RecipeDetail = serde_json::from_str(
            r#"{
                "_id": "r2",
                "name": "Omelette",
                "match_percentage": 75,
                "ingredients": [{"name": "egg", "amount": 2, "unit": "whole"}],
                "missing_ingredients": [{"name": "chives"}]
            }"#,
        )
        .unwrap();
        assert_eq!(detail.summary.name, "Omelette");
        assert_eq!(detail.summary.match_percentage(), 75.0);
        assert_eq!(detail.ingredients.len(), 1);
        assert_eq!(detail.missing_ingredients[0].amount, 0.0);
        assert!(!detail.has_all_ingredients);
    }

    #[test]
    fn test_inventory_item_expiry_date() {
        let item: InventoryItem = serde_json::from_str(
            r#"{"id": 3, "ingredient_name": "milk", "category": "dairy",
                "quantity": 1.5, "unit": "l", "expiry_date": "2026-10-21"}"#,
        )
        .unwrap();
        assert_eq!(item.expiry_date, NaiveDate::from_ymd_opt(2026, 10, 21));
    }
}
