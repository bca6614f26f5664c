//! Expiry Warnings
//!
//! Which pantry items get an expiration warning, and how it reads.

use chrono::{Datelike, NaiveDate};

use crate::models::InventoryItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    /// Past its date by this many days
    Expired(i64),
    Today,
    /// Expires in this many days
    Soon(i64),
}

impl ExpiryStatus {
    pub fn label(&self) -> String {
        match self {
            ExpiryStatus::Expired(_) => "Expired".to_string(),
            ExpiryStatus::Today => "Expires today".to_string(),
            ExpiryStatus::Soon(1) => "Expires in 1 day".to_string(),
            ExpiryStatus::Soon(days) => format!("Expires in {} days", days),
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, ExpiryStatus::Expired(_))
    }
}

/// Status of an item expiring on `expiry`, None when outside the window
pub fn expiry_status(expiry: NaiveDate, today: NaiveDate, window_days: i64) -> Option<ExpiryStatus> {
    let days = (expiry - today).num_days();
    if days > window_days {
        None
    } else if days < 0 {
        Some(ExpiryStatus::Expired(-days))
    } else if days == 0 {
        Some(ExpiryStatus::Today)
    } else {
        Some(ExpiryStatus::Soon(days))
    }
}

/// Items that need a warning, soonest first
pub fn expiring_items(
    items: &[InventoryItem],
    today: NaiveDate,
    window_days: i64,
) -> Vec<(InventoryItem, ExpiryStatus)> {
    let mut expiring: Vec<(InventoryItem, ExpiryStatus)> = items
        .iter()
        .filter_map(|item| {
            let expiry = item.expiry_date?;
            expiry_status(expiry, today, window_days).map(|status| (item.clone(), status))
        })
        .collect();
    expiring.sort_by_key(|(item, _)| item.expiry_date);
    expiring
}

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// Short date for display, e.g. "Oct 21"
pub fn short_date(date: NaiveDate) -> String {
    format!("{} {}", date.format("%b"), date.day())
}
