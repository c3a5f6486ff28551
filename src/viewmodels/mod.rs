pub mod summary_viewmodel;
pub mod chart_viewmodel;
pub mod map_viewmodel;

pub use summary_viewmodel::{SummaryCard, SummaryViewModel};
pub use chart_viewmodel::ChartViewModel;
pub use map_viewmodel::{MapMarker, MapViewModel};
