// ============================================================================
// USE REMOTE HOOK - Fetch one endpoint on mount
// ============================================================================
// The fetch is bound to the component lifetime: unmount aborts the request
// and drops the result. Failures are logged and leave the state in Loading.
// ============================================================================

use serde::de::DeserializeOwned;
use std::cell::Cell;
use std::rc::Rc;
use web_sys::AbortController;
use yew::prelude::*;
use crate::models::{CountryStats, GlobalStats, HistoricalData};
use crate::services::{DiseaseApiClient, Endpoint, FetchError};
use crate::stores::FetchState;

#[hook]
pub fn use_remote<T>(endpoint: Endpoint) -> FetchState<T>
where
    T: DeserializeOwned + PartialEq + 'static,
{
    let state = use_state(FetchState::<T>::default);

    {
        let state = state.clone();
        use_effect_with(endpoint, move |endpoint| {
            let endpoint = *endpoint;
            let alive = Rc::new(Cell::new(true));
            let controller = AbortController::new().ok();
            let signal = controller.as_ref().map(|c| c.signal());

            {
                let alive = alive.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let client = DiseaseApiClient::new();
                    let result = client.fetch::<T>(endpoint, signal.as_ref()).await;
                    if let Some(next) = settle(endpoint, result, alive.get()) {
                        state.set(next);
                    }
                });
            }

            move || {
                alive.set(false);
                if let Some(controller) = controller {
                    controller.abort();
                }
            }
        });
    }

    (*state).clone()
}

/// State to move to once a fetch finishes; `None` keeps the current one.
/// Only a success on a still-mounted view produces `Ready`.
pub(crate) fn settle<T>(
    endpoint: Endpoint,
    result: Result<T, FetchError>,
    alive: bool,
) -> Option<FetchState<T>> {
    match result {
        Ok(data) if alive => Some(FetchState::Ready(Rc::new(data))),
        Ok(_) => {
            log::debug!("🔌 {} resolved after unmount, dropped", endpoint.path());
            None
        }
        Err(e) if e.is_aborted() => {
            log::debug!("🔌 {} aborted", endpoint.path());
            None
        }
        Err(e) => {
            // No retry: the view keeps showing its placeholder
            log::error!("❌ Error fetching {}: {}", endpoint.path(), e);
            None
        }
    }
}

#[hook]
pub fn use_global_stats() -> FetchState<GlobalStats> {
    use_remote(Endpoint::GlobalStats)
}

#[hook]
pub fn use_countries() -> FetchState<Vec<CountryStats>> {
    use_remote(Endpoint::Countries)
}

#[hook]
pub fn use_historical() -> FetchState<HistoricalData> {
    use_remote(Endpoint::HistoricalAll)
}
