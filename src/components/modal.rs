//! Modal Component
//!
//! Overlay dialog driven by a shared open/close transition. Clicking the
//! backdrop itself (not the dialog content) closes it.

use leptos::prelude::*;
use leptos_transition::{make_on_backdrop_click, Transition};

#[component]
pub fn Modal(
    transition: Transition,
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    let display = move || {
        if transition.is_displayed() {
            "display: flex;"
        } else {
            "display: none;"
        }
    };

    view! {
        <div
            id=id
            class="modal"
            class:modal-open=move || transition.is_open()
            style=display
            on:click=make_on_backdrop_click(transition)
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h3 class="modal-title">{title}</h3>
                    <button type="button" class="close-btn" on:click=move |_| transition.close()>"×"</button>
                </div>
                {children()}
            </div>
        </div>
    }
}
