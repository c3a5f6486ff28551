// ============================================================================
// CHART VIEWMODEL - TimeSeries -> Chart.js line config
// ============================================================================

use serde::Serialize;
use crate::models::TimeSeries;

pub const SERIES_LABEL: &str = "Cases";
const BORDER_COLOR: &str = "rgba(255, 0, 0, 0.8)";
const FILL_COLOR: &str = "rgba(243, 58, 106, 0.4)";

/// Parallel label/value sequences; `labels[i]` belongs to `values[i]`
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LineChartConfig {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: LineChartData,
    pub options: LineChartOptions,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LineChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<LineDataset>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    pub label: &'static str,
    pub data: Vec<f64>,
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub fill: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineChartOptions {
    pub maintain_aspect_ratio: bool,
    pub responsive: bool,
}

pub struct ChartViewModel;

impl ChartViewModel {
    /// Keys to labels, values to data, upstream order untouched.
    /// No gap filling for missing dates.
    pub fn project(series: &TimeSeries) -> ChartSeries {
        let (labels, values) = series
            .iter()
            .map(|(label, value)| (label.to_string(), value))
            .unzip();
        ChartSeries { labels, values }
    }

    pub fn line_chart_config(series: &TimeSeries) -> LineChartConfig {
        let ChartSeries { labels, values } = Self::project(series);
        LineChartConfig {
            chart_type: "line",
            data: LineChartData {
                labels,
                datasets: vec![LineDataset {
                    label: SERIES_LABEL,
                    data: values,
                    border_color: BORDER_COLOR,
                    background_color: FILL_COLOR,
                    fill: true,
                }],
            },
            options: LineChartOptions {
                maintain_aspect_ratio: false,
                responsive: true,
            },
        }
    }
}
