//! JavaScript Bridge
//!
//! Entry points callable from page scripts. The search collaborator fetches
//! recipes itself and hands them over through `updateRecipeResults`.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::error::{self, BridgeError};
use crate::models::RecipeSummary;
use crate::store::{store_replace_results, AppStore};

thread_local! {
    /// Store of the mounted results list, if any
    static RESULTS_SINK: RefCell<Option<AppStore>> = RefCell::new(None);
}

/// Called by the results list when it mounts
pub fn register_results_sink(store: AppStore) {
    RESULTS_SINK.with(|sink| *sink.borrow_mut() = Some(store));
}

/// Called by the results list when it unmounts
pub fn clear_results_sink() {
    RESULTS_SINK.with(|sink| *sink.borrow_mut() = None);
}

/// What an `updateRecipeResults` call turns into
#[derive(Debug)]
pub enum UpdateOutcome {
    /// Nothing to do: no payload, or no results list mounted
    Ignored,
    Rendered(Vec<RecipeSummary>),
    Rejected(BridgeError),
}

/// Decide the outcome of a results update. `decode` runs only when there is
/// a payload and somewhere to render it.
pub fn plan_update<F>(has_payload: bool, sink_mounted: bool, decode: F) -> UpdateOutcome
where
    F: FnOnce() -> Result<Vec<RecipeSummary>, BridgeError>,
{
    if !has_payload || !sink_mounted {
        return UpdateOutcome::Ignored;
    }
    match decode() {
        Ok(recipes) => UpdateOutcome::Rendered(recipes),
        Err(e) => UpdateOutcome::Rejected(e),
    }
}

/// Replace the rendered recipe results.
///
/// No-op when `recipes` is null/undefined or no results list is mounted.
#[wasm_bindgen(js_name = updateRecipeResults)]
pub fn update_recipe_results(recipes: JsValue) {
    let store = RESULTS_SINK.with(|sink| sink.borrow().clone());
    let has_payload = !(recipes.is_null() || recipes.is_undefined());

    match plan_update(has_payload, store.is_some(), || decode_recipes(recipes)) {
        UpdateOutcome::Ignored => {}
        UpdateOutcome::Rendered(recipes) => {
            web_sys::console::log_1(&format!("[BRIDGE] Rendering {} recipes", recipes.len()).into());
            if let Some(store) = store {
                store_replace_results(&store, recipes);
            }
        }
        UpdateOutcome::Rejected(e) => error::report("BRIDGE", &e),
    }
}

fn decode_recipes(value: JsValue) -> Result<Vec<RecipeSummary>, BridgeError> {
    if !js_sys::Array::is_array(&value) {
        return Err(BridgeError::NotAnArray(
            value.js_typeof().as_string().unwrap_or_default(),
        ));
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| BridgeError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str) -> RecipeSummary {
        serde_json::from_value(serde_json::json!({ "_id": id, "name": "Soup" })).unwrap()
    }

    #[test]
    fn test_missing_payload_is_ignored_without_decoding() {
        let outcome = plan_update(false, true, || panic!("decoded a null payload"));
        assert!(matches!(outcome, UpdateOutcome::Ignored));
    }

    #[test]
    fn test_unmounted_list_is_ignored_without_decoding() {
        let outcome = plan_update(true, false, || panic!("decoded with no list mounted"));
        assert!(matches!(outcome, UpdateOutcome::Ignored));
    }

    #[test]
    fn test_decode_failure_is_rejected() {
        let outcome = plan_update(true, true, || Err(BridgeError::NotAnArray("object".into())));
        match outcome {
            UpdateOutcome::Rejected(e) => {
                assert!(matches!(e, BridgeError::NotAnArray(ref kind) if kind == "object"));
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_decoded_recipes_are_rendered() {
        let outcome = plan_update(true, true, || Ok(vec![recipe("a1"), recipe("b2")]));
        match outcome {
            UpdateOutcome::Rendered(recipes) => {
                let ids: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
                assert_eq!(ids, vec!["a1", "b2"]);
            }
            other => panic!("expected Rendered, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_array_still_renders() {
        let outcome = plan_update(true, true, || Ok(Vec::new()));
        assert!(matches!(outcome, UpdateOutcome::Rendered(ref r) if r.is_empty()));
    }
}
