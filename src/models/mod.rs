pub mod count;
pub mod global_stats;
pub mod country;
pub mod time_series;

pub use global_stats::GlobalStats;
pub use country::{CountryInfo, CountryStats};
pub use time_series::{HistoricalData, TimeSeries};
