// ============================================================================
// CHARTS & MAPS - historical chart + country map
// ============================================================================
// Two independent fetches; each section waits only for its own payload.
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;
use crate::hooks::{use_countries, use_historical};
use super::loading::LoadingPlaceholder;
use super::time_series_chart::TimeSeriesChart;
use super::world_map::WorldMap;

#[function_component(ChartsAndMaps)]
pub fn charts_and_maps() -> Html {
    let historical = use_historical();
    let countries = use_countries();

    let series = historical.data().map(|data| Rc::clone(&data.cases));

    html! {
        <div>
            <div class="chart-container">
                <h2 class="text-2xl font-bold mb-4 mt-2 text-center">{"Cases Fluctuations"}</h2>
                {
                    match series {
                        Some(series) => html! { <TimeSeriesChart series={series} /> },
                        None => html! { <LoadingPlaceholder text="Loading Line Graph..." /> },
                    }
                }
            </div>

            <div class="map-container">
                <h2 class="text-2xl font-bold mb-4 text-center">{"Map"}</h2>
                {
                    match countries.data() {
                        Some(countries) => html! { <WorldMap countries={countries} /> },
                        None => html! { <LoadingPlaceholder text="Loading Map..." /> },
                    }
                }
            </div>
        </div>
    }
}
