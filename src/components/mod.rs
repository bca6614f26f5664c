//! UI Components
//!
//! Reusable Leptos components and the per-page views built from them.

mod match_bar;
mod modal;
mod recipe_card;
mod recipe_results;
mod expiration_warnings;
mod quantity_input;
mod ingredient_form;
mod inventory_list;
mod inventory_view;
mod filter_panel;
mod recipe_search_view;
mod complete_recipe_modal;
mod recipe_detail_view;
mod add_recipe_modal;
mod meal_plan_view;
mod nav_bar;

pub use match_bar::MatchBar;
pub use modal::Modal;
pub use recipe_card::RecipeCard;
pub use recipe_results::RecipeResults;
pub use expiration_warnings::ExpirationWarnings;
pub use quantity_input::QuantityInput;
pub use ingredient_form::IngredientForm;
pub use inventory_list::InventoryList;
pub use inventory_view::InventoryView;
pub use filter_panel::FilterPanel;
pub use recipe_search_view::RecipeSearchView;
pub use complete_recipe_modal::CompleteRecipeModal;
pub use recipe_detail_view::RecipeDetailView;
pub use add_recipe_modal::AddRecipeModal;
pub use meal_plan_view::MealPlanView;
pub use nav_bar::NavBar;
