//! Category Filter
//!
//! Visibility rule for the inventory list and the ordering of filter controls.

use crate::models::InventoryItem;

/// Sentinel category that shows every item
pub const ALL_CATEGORIES: &str = "all";

/// Known inventory categories, in display order
pub const CATEGORIES: &[(&str, &str)] = &[
    ("vegetable", "Vegetable"),
    ("fruit", "Fruit"),
    ("meat", "Meat"),
    ("dairy", "Dairy"),
    ("grain", "Grain"),
    ("spice", "Spice"),
    ("condiment", "Condiment"),
    ("bakery", "Bakery"),
    ("canned goods", "Canned Goods"),
    ("frozen", "Frozen"),
    ("beverage", "Beverage"),
    ("snack", "Snack"),
    ("other", "Other"),
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn as_attr(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(c) => c,
        }
    }

    /// Whether an item tagged with `category` is visible under this filter
    pub fn shows(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => c == category,
        }
    }

    /// Inline display style of an item tagged with `category`
    pub fn item_display(&self, category: &str) -> &'static str {
        if self.shows(category) {
            "display: block;"
        } else {
            "display: none;"
        }
    }

    /// Whether this control is the active one
    pub fn is_active(&self, active: &CategoryFilter) -> bool {
        self == active
    }

    pub fn label(&self) -> String {
        match self {
            CategoryFilter::All => "All".to_string(),
            CategoryFilter::Category(c) => category_label(c),
        }
    }
}

/// Display label for a category value
pub fn category_label(category: &str) -> String {
    CATEGORIES
        .iter()
        .find(|(value, _)| *value == category)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| {
            let mut chars = category.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
}

/// "All" followed by the categories present in `items`: known ones in
/// display order, unknown ones alphabetically after them
pub fn filter_controls(items: &[InventoryItem]) -> Vec<CategoryFilter> {
    let mut controls = vec![CategoryFilter::All];

    for (value, _) in CATEGORIES {
        if items.iter().any(|item| item.category == *value) {
            controls.push(CategoryFilter::Category(value.to_string()));
        }
    }

    let mut unknown: Vec<&str> = items
        .iter()
        .map(|item| item.category.as_str())
        .filter(|c| *c != ALL_CATEGORIES && !CATEGORIES.iter().any(|(value, _)| value == c))
        .collect();
    unknown.sort_unstable();
    unknown.dedup();
    controls.extend(unknown.into_iter().map(|c| CategoryFilter::Category(c.to_string())));

    controls
}
