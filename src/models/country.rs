use serde::{Deserialize, Serialize};
use super::count::deserialize_count;

/// One entry of `/v3/covid-19/countries`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CountryStats {
    /// Display name only, not guaranteed unique
    #[serde(default)]
    pub country: String,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub cases: f64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub deaths: f64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub recovered: f64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub active: f64,
    #[serde(default)]
    pub country_info: CountryInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CountryInfo {
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub long: Option<f64>,
}

impl CountryStats {
    /// `(lat, long)` when upstream sent both
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.country_info.lat?, self.country_info.long?))
    }
}
