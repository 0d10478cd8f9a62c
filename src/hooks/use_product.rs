use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use super::DataState;
use crate::models::error::AppError;
use crate::models::product::Product;
use crate::services::api::fetch_product;
use wasm_bindgen_futures::spawn_local;

fn failure_message(id: u32, error: &AppError) -> String {
    format!("Error fetching product {id}: {error}")
}

/// Fetches a single product, refetching whenever `id` changes
#[hook]
pub fn use_product(id: u32) -> UseStateHandle<DataState<Product>> {
    let state = use_state(|| DataState::Loading);

    {
        let state = state.clone();

        use_effect_with(id, move |id| {
            let id = *id;
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            state.set(DataState::Loading);

            spawn_local(async move {
                match fetch_product(id).await {
                    Ok(product) if !aborted_check.get() => {
                        state.set(DataState::Loaded(Rc::new(product)));
                    }
                    Err(e) if !aborted_check.get() => {
                        gloo::console::error!(&failure_message(id, &e));
                        state.set(DataState::Error(e.to_string()));
                    }
                    _ => {}
                }
            });

            move || aborted.set(true)
        });
    }

    state
}
