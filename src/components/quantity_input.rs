//! Quantity Input Component
//!
//! Decimal text input that flags non-positive quantities while typing.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::quantity::quantity_validity;

#[component]
pub fn QuantityInput(#[prop(optional)] initial: Option<f64>) -> impl IntoView {
    let (message, set_message) = signal::<Option<&'static str>>(None);

    let on_input = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let validity = quantity_validity(&input.value());
        input.set_custom_validity(validity.unwrap_or(""));
        set_message.set(validity);
    };

    view! {
        <div class="form-group">
            <label for="quantity">"Quantity"</label>
            <input
                type="text"
                inputmode="decimal"
                id="quantity"
                name="quantity"
                class="form-control"
                class:is-invalid=move || message.get().is_some()
                required
                value=initial.map(|q| q.to_string()).unwrap_or_default()
                on:input=on_input
            />
            {move || message.get().map(|m| view! { <div class="invalid-feedback">{m}</div> })}
        </div>
    }
}
