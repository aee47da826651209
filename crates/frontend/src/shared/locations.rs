/// Location reference data, fetched once per screen mount.
use contracts::domain::location::{build_location_map, Location, LocationMap};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::get_envelope;

pub async fn fetch_locations() -> Result<Vec<Location>, String> {
    Ok(get_envelope::<Vec<Location>>("/location/get_location.php")
        .await?
        .data)
}

/// Signals for the location collection and the id -> abbreviation map.
/// Every screen that shows or filters by location mounts this; display
/// always goes through `location_label` so unknown ids never render blank.
pub fn use_locations() -> (ReadSignal<Vec<Location>>, ReadSignal<LocationMap>) {
    let (locations, set_locations) = signal(Vec::<Location>::new());
    let (location_map, set_location_map) = signal(LocationMap::new());

    spawn_local(async move {
        match fetch_locations().await {
            Ok(list) => {
                set_location_map.set(build_location_map(&list));
                set_locations.set(list);
            }
            Err(e) => log::warn!("failed to load locations: {}", e),
        }
    });

    (locations, location_map)
}
