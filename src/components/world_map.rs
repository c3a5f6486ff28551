// ============================================================================
// WORLD MAP - Leaflet map with one marker per country
// ============================================================================

use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;
use crate::config::CONFIG;
use crate::models::CountryStats;
use crate::utils::leaflet_ffi::{destroy_world_map, init_world_map, refresh_map_size, set_map_markers};
use crate::viewmodels::MapViewModel;

#[derive(Properties, PartialEq)]
pub struct WorldMapProps {
    pub countries: Rc<Vec<CountryStats>>,
    #[prop_or(AttrValue::Static("world-map"))]
    pub container_id: AttrValue,
}

#[function_component(WorldMap)]
pub fn world_map(props: &WorldMapProps) -> Html {
    // Base map: created once per mount, removed on unmount
    use_effect_with(props.container_id.clone(), |container_id| {
        let container_id = container_id.clone();
        let settings = MapViewModel::settings(&CONFIG.map_config);

        match serde_json::to_string(&settings) {
            Ok(json) => {
                log::info!("🗺️ Initializing world map");
                init_world_map(&container_id, &json);
            }
            Err(e) => log::error!("❌ Error serializing map settings: {}", e),
        }

        // Leaflet measures the container on init; re-measure once layout settles
        let resize = {
            let container_id = container_id.clone();
            Timeout::new(100, move || refresh_map_size(&container_id))
        };

        move || {
            drop(resize);
            destroy_world_map(&container_id);
        }
    });

    // Markers: replaced wholesale whenever the country list changes
    use_effect_with(
        (props.countries.clone(), props.container_id.clone()),
        |(countries, container_id)| {
            let markers = MapViewModel::markers(countries);
            match serde_json::to_string(&markers) {
                Ok(json) => set_map_markers(container_id, &json),
                Err(e) => log::error!("❌ Error serializing markers: {}", e),
            }
            || ()
        },
    );

    html! {
        <div
            id={props.container_id.clone()}
            class="world-map"
            style="width: 100%; height: 426px; margin: 0 auto;"
        ></div>
    }
}
