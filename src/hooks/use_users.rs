use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use super::DataState;
use crate::models::user::User;
use crate::services::api::fetch_users;
use wasm_bindgen_futures::spawn_local;

#[hook]
pub fn use_users() -> UseStateHandle<DataState<Vec<User>>> {
    let state = use_state(|| DataState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |()| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                match fetch_users().await {
                    Ok(users) if !aborted_check.get() => {
                        state.set(DataState::Loaded(Rc::new(users)));
                    }
                    Err(e) if !aborted_check.get() => {
                        gloo::console::error!(&format!("Error fetching users: {e}"));
                        state.set(DataState::Error(e.to_string()));
                    }
                    _ => {} // Request was aborted, ignore result
                }
            });

            move || aborted.set(true)
        });
    }

    state
}
