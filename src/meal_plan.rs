//! Meal Plan Helpers
//!
//! Week grid layout and the form values threaded into the add-recipe modal.

use chrono::{Duration, NaiveDate};

use crate::models::{MealPlan, MealPlanEntry, MealSlot};

pub const DAYS: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const MEAL_TYPES: &[(&str, &str)] = &[
    ("breakfast", "Breakfast"),
    ("lunch", "Lunch"),
    ("dinner", "Dinner"),
];

/// Trigger context for a grid cell: day index as posted to the server
pub fn slot_for(day_index: usize, meal_type: &str) -> MealSlot {
    MealSlot {
        day: day_index.to_string(),
        meal_type: meal_type.to_string(),
    }
}

/// Calendar date of a weekday in the plan's week
pub fn day_date(week_start: NaiveDate, day_index: usize) -> NaiveDate {
    week_start + Duration::days(day_index as i64)
}

/// Entries planned for one cell of the grid
pub fn entries_for<'a>(plan: &'a MealPlan, day_index: usize, meal_type: &str) -> Vec<&'a MealPlanEntry> {
    plan.items
        .iter()
        .filter(|entry| entry.day_of_week as usize == day_index && entry.meal_type == meal_type)
        .collect()
}

/// Hidden fields of the add-recipe form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddRecipeFields {
    pub plan_id: String,
    pub day_of_week: String,
    pub meal_type: String,
}

impl AddRecipeFields {
    pub fn new(plan_id: u32, slot: Option<&MealSlot>) -> Self {
        match slot {
            Some(slot) => Self {
                plan_id: plan_id.to_string(),
                day_of_week: slot.day.clone(),
                meal_type: slot.meal_type.clone(),
            },
            None => Self {
                plan_id: plan_id.to_string(),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeSummary;

    fn make_entry(id: u32, day: u8, meal_type: &str) -> MealPlanEntry {
        MealPlanEntry {
            id,
            day_of_week: day,
            meal_type: meal_type.to_string(),
            recipe: RecipeSummary {
                id: format!("r{}", id),
                name: format!("Recipe {}", id),
                description: String::new(),
                image_url: None,
                prep_time: 0,
                cook_time: 0,
                difficulty: String::new(),
                tags: vec![],
                match_percentage: None,
            },
        }
    }

    #[test]
    fn test_fields_carry_trigger_context() {
        let slot = MealSlot {
            day: "Monday".to_string(),
            meal_type: "breakfast".to_string(),
        };
        let fields = AddRecipeFields::new(4, Some(&slot));
        assert_eq!(fields.plan_id, "4");
        assert_eq!(fields.day_of_week, "Monday");
        assert_eq!(fields.meal_type, "breakfast");
    }

    #[test]
    fn test_fields_without_slot_are_blank() {
        let fields = AddRecipeFields::new(4, None);
        assert_eq!(fields.day_of_week, "");
        assert_eq!(fields.meal_type, "");
    }

    #[test]
    fn test_slot_for_uses_day_index() {
        assert_eq!(slot_for(2, "dinner"), MealSlot {
            day: "2".to_string(),
            meal_type: "dinner".to_string(),
        });
    }

    #[test]
    fn test_entries_for_cell() {
        let plan = MealPlan {
            id: 1,
            week_start_date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            items: vec![
                make_entry(1, 0, "breakfast"),
                make_entry(2, 0, "dinner"),
                make_entry(3, 1, "breakfast"),
                make_entry(4, 0, "breakfast"),
            ],
        };
        let ids: Vec<u32> = entries_for(&plan, 0, "breakfast").iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(day_date(plan.week_start_date, 6), NaiveDate::from_ymd_opt(2026, 10, 25).unwrap());
    }
}
