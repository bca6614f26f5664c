//! Expiration Warnings Component
//!
//! Lists pantry items close to (or past) their expiry date. All warnings
//! fade in together after a short delay.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::expiry::{expiring_items, short_date};
use crate::models::InventoryItem;

#[component]
pub fn ExpirationWarnings(items: Vec<InventoryItem>) -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let expiring = expiring_items(&items, ctx.today, config.expiration_warning_days);
    let (revealed, set_revealed) = signal(false);

    if !expiring.is_empty() {
        let delay = config.reveal_delay_ms;
        Effect::new(move |_| {
            Timeout::new(delay, move || {
                set_revealed.try_set(true);
            })
            .forget();
        });
    }

    (!expiring.is_empty()).then(|| view! {
        <section class="expiring-section">
            <h2>"Expiring Soon"</h2>
            {expiring.into_iter().map(|(item, status)| {
                let date = item.expiry_date.map(short_date).unwrap_or_default();
                view! {
                    <div
                        class="expiration-warning"
                        class:fade-in=move || revealed.get()
                        class:expired=status.is_expired()
                    >
                        <strong>{item.ingredient_name}</strong>
                        <span class="expiry-quantity">{format!("{} {}", item.quantity, item.unit)}</span>
                        <span class="expiry-label">{status.label()}</span>
                        <span class="expiry-date">{date}</span>
                    </div>
                }
            }).collect_view()}
        </section>
    })
}
