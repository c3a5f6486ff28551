// ============================================================================
// MAP VIEWMODEL - CountryStats -> Leaflet markers
// ============================================================================
// One marker per record, same order as the input. Nothing is filtered.
// ============================================================================

use serde::Serialize;
use crate::config::MapConfig;
use crate::models::CountryStats;

/// Marker sent to the map bridge
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub lat: f64,
    pub lng: f64,
    /// False when upstream had no coordinates and the marker sits at (0, 0)
    pub has_position: bool,
    pub popup: MarkerPopup,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MarkerPopup {
    pub title: String,
    pub flag: Option<String>,
    pub lines: Vec<String>,
}

/// Everything the bridge needs to build the base map
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapSettings {
    pub center: [f64; 2],
    pub zoom: f64,
    pub tile_url: String,
    pub icon_url: String,
    pub icon_size: [u32; 2],
    pub icon_anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
}

pub const MARKER_ICON_SIZE: u32 = 32;

pub struct MapViewModel;

impl MapViewModel {
    pub fn settings(config: &MapConfig) -> MapSettings {
        let size = MARKER_ICON_SIZE as i32;
        MapSettings {
            center: [config.default_center_lat, config.default_center_lng],
            zoom: config.default_zoom,
            tile_url: config.tile_url_template.clone(),
            icon_url: config.marker_icon_url.clone(),
            icon_size: [MARKER_ICON_SIZE, MARKER_ICON_SIZE],
            // Pin tip at the bottom center, popup opens above it
            icon_anchor: [size / 2, size],
            popup_anchor: [0, -size],
        }
    }

    pub fn markers(countries: &[CountryStats]) -> Vec<MapMarker> {
        let markers: Vec<MapMarker> = countries.iter().map(Self::marker).collect();

        let unplaced = markers.iter().filter(|m| !m.has_position).count();
        if unplaced > 0 {
            log::warn!("⚠️ {} countries without coordinates, placed at (0, 0)", unplaced);
        }
        log::info!("📍 Prepared {} markers", markers.len());
        markers
    }

    fn marker(country: &CountryStats) -> MapMarker {
        let (lat, lng, has_position) = match country.coordinates() {
            Some((lat, lng)) => (lat, lng, true),
            None => (0.0, 0.0, false),
        };

        MapMarker {
            lat,
            lng,
            has_position,
            popup: MarkerPopup {
                title: country.country.clone(),
                flag: country.country_info.flag.clone(),
                lines: vec![
                    format!("Total Active Cases: {}", country.active),
                    format!("Total Recovered Cases: {}", country.recovered),
                    format!("Total Deaths: {}", country.deaths),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CountryInfo;

    fn country(name: &str, lat: Option<f64>, long: Option<f64>) -> CountryStats {
        CountryStats {
            country: name.to_string(),
            cases: 100.0,
            deaths: 3.0,
            recovered: 90.0,
            active: 7.0,
            country_info: CountryInfo { lat, long, ..CountryInfo::default() },
        }
    }

    #[test]
    fn one_marker_per_country_at_its_coordinates() {
        let countries = vec![
            country("India", Some(20.0), Some(77.0)),
            country("Peru", Some(-10.0), Some(-76.0)),
            country("Peru", Some(-10.0), Some(-76.0)),
        ];
        let markers = MapViewModel::markers(&countries);

        assert_eq!(markers.len(), countries.len());
        for (marker, country) in markers.iter().zip(&countries) {
            assert_eq!(Some((marker.lat, marker.lng)), country.coordinates());
            assert!(marker.has_position);
            assert_eq!(marker.popup.title, country.country);
        }
    }

    #[test]
    fn empty_list_gives_no_markers() {
        assert!(MapViewModel::markers(&[]).is_empty());
    }

    #[test]
    fn missing_coordinates_are_kept() {
        let markers = MapViewModel::markers(&[country("MS Zaandam", None, Some(5.0))]);
        assert_eq!(markers.len(), 1);
        assert!(!markers[0].has_position);
        assert_eq!((markers[0].lat, markers[0].lng), (0.0, 0.0));
    }

    #[test]
    fn popup_lines() {
        let markers = MapViewModel::markers(&[country("India", Some(20.0), Some(77.0))]);
        assert_eq!(
            markers[0].popup.lines,
            vec![
                "Total Active Cases: 7".to_string(),
                "Total Recovered Cases: 90".to_string(),
                "Total Deaths: 3".to_string(),
            ]
        );
    }

    #[test]
    fn popup_numbers_are_shown_as_received() {
        let mut odd = country("Nowhere", Some(1.0), Some(2.0));
        odd.active = -5.0;
        odd.recovered = 42.9;
        let markers = MapViewModel::markers(&[odd]);
        assert_eq!(markers[0].popup.lines[0], "Total Active Cases: -5");
        assert_eq!(markers[0].popup.lines[1], "Total Recovered Cases: 42.9");
    }

    #[test]
    fn settings_from_config() {
        let settings = MapViewModel::settings(&MapConfig::default());
        assert_eq!(settings.center, [20.0, 0.0]);
        assert_eq!(settings.zoom, 2.0);
        assert_eq!(settings.icon_size, [32, 32]);
        assert_eq!(settings.icon_anchor, [16, 32]);
        assert_eq!(settings.popup_anchor, [0, -32]);

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["tileUrl"], "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png");
    }
}
