// ============================================================================
// APP CONFIG - Compile-time configuration
// ============================================================================
// Values come from env vars at build time (build.rs loads .env).
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::utils::number_format::NumberLocale;

pub const DEFAULT_API_BASE_URL: &str = "https://disease.sh";
pub const DEFAULT_TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_MARKER_ICON_URL: &str = "https://img.icons8.com/?size=512&id=U1cbNtgDXO2m&format=png";
pub const DEFAULT_ANIMATION_BASE_URL: &str = "/lottie";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub number_locale: String,
    pub cache_ttl_seconds: u32,
    /// Where the Lottie icon files are served from
    pub animation_base_url: String,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            number_locale: "en-IN".to_string(),
            cache_ttl_seconds: 300,
            animation_base_url: DEFAULT_ANIMATION_BASE_URL.to_string(),
            map_config: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    pub tile_url_template: String,
    pub marker_icon_url: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 20.0,
            default_center_lng: 0.0,
            default_zoom: 2.0,
            tile_url_template: DEFAULT_TILE_URL_TEMPLATE.to_string(),
            marker_icon_url: DEFAULT_MARKER_ICON_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the env vars captured at compile time
    pub fn from_env() -> Self {
        Self::from_vars(|key| match key {
            "API_BASE_URL" => option_env!("API_BASE_URL"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "LOG_LEVEL" => option_env!("LOG_LEVEL"),
            "NUMBER_LOCALE" => option_env!("NUMBER_LOCALE"),
            "CACHE_TTL_SECONDS" => option_env!("CACHE_TTL_SECONDS"),
            "ANIMATION_BASE_URL" => option_env!("ANIMATION_BASE_URL"),
            "MAP_CENTER_LAT" => option_env!("MAP_CENTER_LAT"),
            "MAP_CENTER_LNG" => option_env!("MAP_CENTER_LNG"),
            "MAP_ZOOM" => option_env!("MAP_ZOOM"),
            "TILE_URL_TEMPLATE" => option_env!("TILE_URL_TEMPLATE"),
            "MARKER_ICON_URL" => option_env!("MARKER_ICON_URL"),
            _ => None,
        })
    }

    /// Builds the config from any key lookup, falling back to defaults on
    /// missing or unparsable values.
    pub fn from_vars<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let defaults = Self::default();
        let map_defaults = MapConfig::default();

        Self {
            api_base_url: lookup("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            enable_logging: lookup("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: lookup("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            number_locale: lookup("NUMBER_LOCALE")
                .map(str::to_string)
                .unwrap_or(defaults.number_locale),
            cache_ttl_seconds: lookup("CACHE_TTL_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl_seconds),
            animation_base_url: lookup("ANIMATION_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.animation_base_url),
            map_config: MapConfig {
                default_center_lat: lookup("MAP_CENTER_LAT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(map_defaults.default_center_lat),
                default_center_lng: lookup("MAP_CENTER_LNG")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(map_defaults.default_center_lng),
                default_zoom: lookup("MAP_ZOOM")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(map_defaults.default_zoom),
                tile_url_template: lookup("TILE_URL_TEMPLATE")
                    .map(str::to_string)
                    .unwrap_or(map_defaults.tile_url_template),
                marker_icon_url: lookup("MARKER_ICON_URL")
                    .map(str::to_string)
                    .unwrap_or(map_defaults.marker_icon_url),
            },
        }
    }

    /// Console log level. Disabled logging still lets errors through.
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn locale(&self) -> NumberLocale {
        NumberLocale::from_tag(&self.number_locale)
    }

    pub fn animation_url(&self, file: &str) -> String {
        format!("{}/{}", self.animation_base_url, file)
    }

    pub fn cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(i64::from(self.cache_ttl_seconds))
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&'static str, &'static str)]) -> AppConfig {
        let vars: HashMap<&str, &str> = pairs.iter().copied().collect();
        AppConfig::from_vars(|key| vars.get(key).copied())
    }

    #[test]
    fn empty_env_uses_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.api_base_url, "https://disease.sh");
        assert_eq!(config.locale(), NumberLocale::EnIn);
        assert_eq!(config.cache_ttl_seconds, 300);
        assert_eq!(config.map_config, MapConfig::default());
        assert_eq!(config.log_level(), log::Level::Info);
        assert_eq!(config.animation_url("skull.json"), "/lottie/skull.json");
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config_from(&[
            ("API_BASE_URL", "http://localhost:8080/"),
            ("NUMBER_LOCALE", "en-US"),
            ("CACHE_TTL_SECONDS", "60"),
            ("MAP_ZOOM", "4.5"),
            ("LOG_LEVEL", "debug"),
            ("ANIMATION_BASE_URL", "https://cdn.example.org/lottie/"),
        ]);
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.locale(), NumberLocale::EnUs);
        assert_eq!(config.cache_ttl(), chrono::Duration::seconds(60));
        assert_eq!(config.map_config.default_zoom, 4.5);
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.animation_url("Globe.json"), "https://cdn.example.org/lottie/Globe.json");
    }

    #[test]
    fn garbage_values_fall_back() {
        let config = config_from(&[
            ("CACHE_TTL_SECONDS", "soon"),
            ("MAP_CENTER_LAT", "north"),
            ("ENABLE_LOGGING", "maybe"),
        ]);
        assert_eq!(config.cache_ttl_seconds, 300);
        assert_eq!(config.map_config.default_center_lat, 20.0);
        assert!(config.enable_logging);
    }

    #[test]
    fn disabled_logging_keeps_errors() {
        let config = config_from(&[("ENABLE_LOGGING", "false"), ("LOG_LEVEL", "trace")]);
        assert_eq!(config.log_level(), log::Level::Error);
    }
}
