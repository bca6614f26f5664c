//! UI Configuration
//!
//! Timing and presentation constants. Defaults match the stylesheet's
//! transition durations; a page may override any subset through a
//! `<script id="ui-config" type="application/json">` element.

use leptos_transition::TransitionTiming;
use serde::Deserialize;

use crate::bootstrap::read_json_script;
use crate::error::{self, BridgeError};

pub const CONFIG_ELEMENT_ID: &str = "ui-config";

pub const DEFAULT_RECIPE_IMAGE: &str =
    "https://images.pexels.com/photos/1640774/pexels-photo-1640774.jpeg";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Delay before a match bar animates to its width
    pub bar_delay_ms: u32,
    /// Delay before expiration warnings fade in
    pub reveal_delay_ms: u32,
    /// Delay between displaying a panel and applying its open state
    pub enter_delay_ms: u32,
    /// Delay between removing the open state and hiding a panel
    pub leave_delay_ms: u32,
    /// Image shown for recipes without one
    pub fallback_image_url: String,
    /// Items expiring within this many days get a warning
    pub expiration_warning_days: i64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            bar_delay_ms: 100,
            reveal_delay_ms: 300,
            enter_delay_ms: 10,
            leave_delay_ms: 300,
            fallback_image_url: DEFAULT_RECIPE_IMAGE.to_string(),
            expiration_warning_days: 3,
        }
    }
}

impl UiConfig {
    pub fn from_json(json: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(json).map_err(|source| BridgeError::Json {
            element: CONFIG_ELEMENT_ID,
            source,
        })
    }

    /// Read overrides from the page, falling back to defaults
    pub fn load() -> Self {
        let Some(json) = read_json_script(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                error::report("CONFIG", &e);
                Self::default()
            }
        }
    }

    pub fn transition_timing(&self) -> TransitionTiming {
        TransitionTiming {
            enter_delay_ms: self.enter_delay_ms,
            leave_delay_ms: self.leave_delay_ms,
        }
    }
}
