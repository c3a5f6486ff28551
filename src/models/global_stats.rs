use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use super::count::deserialize_count;

/// Worldwide totals from `/v3/covid-19/all`
///
/// Every number goes through `deserialize_count`, so a `null` anywhere
/// reads as 0 instead of failing the whole payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalStats {
    /// Milliseconds since epoch of the upstream snapshot
    pub updated: Option<i64>,
    #[serde(deserialize_with = "deserialize_count")]
    pub cases: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub today_cases: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub deaths: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub today_deaths: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub recovered: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub today_recovered: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub active: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub critical: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub cases_per_one_million: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub deaths_per_one_million: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub tests: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub tests_per_one_million: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub population: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub affected_countries: f64,
}

impl GlobalStats {
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        let ms = self.updated.filter(|ms| *ms > 0)?;
        Utc.timestamp_millis_opt(ms).single()
    }
}
