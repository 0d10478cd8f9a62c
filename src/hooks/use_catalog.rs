use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use super::DataState;
use crate::models::product::Catalog;
use crate::services::api::fetch_catalog;
use wasm_bindgen_futures::spawn_local;

/// Fetches products and categories once, when the calling view mounts.
///
/// Failures are logged; callers render an empty catalog in that case.
#[hook]
pub fn use_catalog() -> UseStateHandle<DataState<Catalog>> {
    let state = use_state(|| DataState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |()| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let result = fetch_catalog().await;
                if aborted_check.get() {
                    return; // View unmounted, drop the late result
                }

                match result {
                    Ok(catalog) => state.set(DataState::Loaded(Rc::new(catalog))),
                    Err(e) => {
                        gloo::console::error!(&format!(
                            "Error fetching products or categories: {e}"
                        ));
                        state.set(DataState::Error(e.to_string()));
                    }
                }
            });

            move || aborted.set(true)
        });
    }

    state
}
