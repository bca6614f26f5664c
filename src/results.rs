//! Recipe Results View Model
//!
//! Pure rendering model for the recipe results list.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::match_band::{match_label, MatchBand};
use crate::models::RecipeSummary;

pub const NO_RESULTS_MESSAGE: &str = "No recipes found matching your criteria.";

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Everything a recipe card displays
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCardView {
    pub id: String,
    pub image_src: String,
    pub name: String,
    pub description: String,
    pub time_label: String,
    pub difficulty: String,
    pub percentage: f64,
    pub match_label: String,
    pub band: MatchBand,
    pub tags: Vec<String>,
    pub detail_href: String,
}

impl RecipeCardView {
    pub fn new(recipe: &RecipeSummary, fallback_image: &str) -> Self {
        let percentage = recipe.match_percentage();
        Self {
            id: recipe.id.clone(),
            image_src: recipe.image_src(fallback_image).to_string(),
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            time_label: format!("{} mins", recipe.total_time()),
            difficulty: recipe.difficulty.clone(),
            percentage,
            match_label: match_label(percentage),
            band: MatchBand::from_percentage(percentage),
            tags: recipe.tags.clone(),
            detail_href: recipe_href(&recipe.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    Empty,
    Cards(Vec<RecipeCardView>),
}

impl ResultsView {
    pub fn build(recipes: &[RecipeSummary], fallback_image: &str) -> Self {
        if recipes.is_empty() {
            ResultsView::Empty
        } else {
            ResultsView::Cards(
                recipes
                    .iter()
                    .map(|recipe| RecipeCardView::new(recipe, fallback_image))
                    .collect(),
            )
        }
    }
}

/// Link to a recipe's detail page
pub fn recipe_href(id: &str) -> String {
    format!("/recipe/{}", utf8_percent_encode(id, PATH_SEGMENT))
}
