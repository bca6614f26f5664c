//! Complete Recipe Modal
//!
//! Confirms cooking a recipe; the server deducts the ingredients.

use leptos::prelude::*;
use leptos_transition::Transition;

use crate::components::Modal;
use crate::results::recipe_href;

#[component]
pub fn CompleteRecipeModal(
    transition: Transition,
    #[prop(into)] recipe_id: String,
    #[prop(into)] recipe_name: String,
    servings: u32,
) -> impl IntoView {
    let action = format!("{}/complete", recipe_href(&recipe_id));

    view! {
        <Modal transition=transition id="complete-modal" title="Mark Recipe as Completed">
            <form action=action method="post" class="modal-body">
                <p>{format!("Cooked {}? Your pantry will be updated.", recipe_name)}</p>
                <div class="form-group">
                    <label for="servings">"Servings made"</label>
                    <input
                        type="number"
                        id="servings"
                        name="servings"
                        class="form-control"
                        min="1"
                        value=servings.to_string()
                    />
                </div>
                <div class="modal-actions">
                    <button type="button" id="close-modal" class="btn btn-secondary" on:click=move |_| transition.close()>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary">"Complete"</button>
                </div>
            </form>
        </Modal>
    }
}
