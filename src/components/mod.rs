pub mod app;
pub mod sidebar;
pub mod dashboard;
pub mod summary_cards;
pub mod charts_and_maps;
pub mod time_series_chart;
pub mod world_map;
pub mod static_pages;
pub mod loading;
pub mod lottie_icon;

pub use app::App;
pub use sidebar::{NavigationShell, Sidebar};
pub use summary_cards::SummaryCardGrid;
pub use time_series_chart::TimeSeriesChart;
pub use world_map::WorldMap;
pub use charts_and_maps::ChartsAndMaps;
pub use lottie_icon::LottieIcon;
