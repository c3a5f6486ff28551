// ============================================================================
// TIME SERIES CHART - single filled line series (Chart.js)
// ============================================================================
// No incremental update: every data change destroys the chart instance and
// builds a new one. Unmount destroys it too.
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;
use crate::models::TimeSeries;
use crate::utils::chart_ffi::{destroy_chart, render_line_chart};
use crate::viewmodels::ChartViewModel;

#[derive(Properties, PartialEq)]
pub struct TimeSeriesChartProps {
    pub series: Rc<TimeSeries>,
    #[prop_or(AttrValue::Static("cases-chart"))]
    pub canvas_id: AttrValue,
}

#[function_component(TimeSeriesChart)]
pub fn time_series_chart(props: &TimeSeriesChartProps) -> Html {
    use_effect_with(
        (props.series.clone(), props.canvas_id.clone()),
        |(series, canvas_id)| {
            let canvas_id = canvas_id.clone();
            log::info!("📈 Rendering chart with {} points", series.len());
            let config = ChartViewModel::line_chart_config(series);

            match serde_json::to_string(&config) {
                Ok(json) => render_line_chart(&canvas_id, &json),
                Err(e) => log::error!("❌ Error serializing chart config: {}", e),
            }

            move || destroy_chart(&canvas_id)
        },
    );

    html! {
        <div class="chart-canvas-wrapper" style="display: flex; justify-content: center; height: 400px;">
            <canvas id={props.canvas_id.clone()} height="400"></canvas>
        </div>
    }
}
