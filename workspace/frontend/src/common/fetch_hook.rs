use std::future::Future;
use yew::prelude::*;

use crate::hooks::FetchState;

/// Runs the async loader once on mount and tracks its state. There is no
/// retry path: a failed load leaves the dashboard in its error state.
#[hook]
pub fn use_load<T, F, Fut>(load_fn: F) -> UseStateHandle<FetchState<T>>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = use_state(|| FetchState::Loading);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match load_fn().await {
                    Ok(data) => state.set(FetchState::Success(data)),
                    Err(err) => {
                        log::error!("Dashboard startup failed: {}", err);
                        state.set(FetchState::Error(err));
                    }
                }
            });
            || ()
        });
    }

    state
}
