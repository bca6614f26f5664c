//! Page Bootstrap Data
//!
//! The server renders the data for the current page into a
//! `<script id="page-data" type="application/json">` element. Features whose
//! data is missing are simply not mounted.

use serde::Deserialize;

use crate::error::{self, BridgeError};
use crate::models::{InventoryItem, MealPlan, RecipeDetail, RecipeSummary};

pub const PAGE_DATA_ELEMENT_ID: &str = "page-data";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageData {
    Inventory {
        #[serde(default)]
        items: Vec<InventoryItem>,
    },
    AddIngredient,
    RecipeSearch {
        #[serde(default)]
        term: String,
        #[serde(default)]
        recipes: Vec<RecipeSummary>,
    },
    RecipeDetail {
        recipe: RecipeDetail,
    },
    MealPlan {
        plan: MealPlan,
        #[serde(default)]
        suggestions: Vec<RecipeSummary>,
    },
    /// Navigation only
    #[serde(other)]
    Home,
}

impl PageData {
    pub fn from_json(json: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(json).map_err(|source| BridgeError::Json {
            element: PAGE_DATA_ELEMENT_ID,
            source,
        })
    }

    /// Read the current page's data, falling back to `Home`
    pub fn load() -> Self {
        let Some(json) = read_json_script(PAGE_DATA_ELEMENT_ID) else {
            return PageData::Home;
        };
        match Self::from_json(&json) {
            Ok(page) => page,
            Err(e) => {
                error::report("BOOTSTRAP", &e);
                PageData::Home
            }
        }
    }
}

/// Text content of a JSON script element, if the page has one
pub fn read_json_script(id: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let text = document.get_element_by_id(id)?.text_content()?;
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
