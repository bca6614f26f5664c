//! Application Context
//!
//! Shared, non-reactive settings provided via Leptos Context API.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos_transition::{create_transition, Transition};

use crate::config::UiConfig;

/// App-wide settings provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Timing and presentation constants
    config: StoredValue<UiConfig>,
    /// Date expiry warnings are computed against
    pub today: NaiveDate,
}

impl AppContext {
    pub fn new(config: UiConfig, today: NaiveDate) -> Self {
        Self {
            config: StoredValue::new(config),
            today,
        }
    }

    pub fn config(&self) -> UiConfig {
        self.config.get_value()
    }

    /// New open/close transition using the configured delays
    pub fn transition(&self) -> Transition {
        create_transition(self.config.with_value(|c| c.transition_timing()))
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
