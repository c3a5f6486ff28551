use yew::prelude::*;
use crate::hooks::use_global_stats;
use super::charts_and_maps::ChartsAndMaps;
use super::summary_cards::SummaryCardGrid;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let stats = use_global_stats();

    html! {
        <div class="p-4">
            <h1 class="text-4xl font-extrabold tracking-tight mb-4 text-center font-custom">
                <span class="text-red-400">{"COVID-19"}</span>{" Dashboard"}
            </h1>

            <SummaryCardGrid stats={stats.data()} />

            <div class="charts-maps-section mt-8 sm:p-8">
                <ChartsAndMaps />
            </div>
        </div>
    }
}
