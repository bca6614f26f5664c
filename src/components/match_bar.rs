//! Match Bar Component
//!
//! Progress bar for a recipe's match percentage. Renders empty, then fills
//! after a short delay so the CSS width transition plays.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::match_band::{match_label, progress_style};

#[component]
pub fn MatchBar(percentage: f64) -> impl IntoView {
    let ctx = use_app_context();
    let delay = ctx.config().bar_delay_ms;
    let (filled, set_filled) = signal(false);

    // Fill once mounted; every re-mount animates again
    Effect::new(move |_| {
        Timeout::new(delay, move || {
            set_filled.try_set(true);
        })
        .forget();
    });

    view! {
        <div class="match-indicator">
            <div class="match-bar" data-percentage=percentage.to_string()>
                <div class="match-progress" style=move || progress_style(percentage, filled.get())></div>
            </div>
            <span class="match-text">{match_label(percentage)}</span>
        </div>
    }
}
