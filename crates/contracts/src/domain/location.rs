use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Role names a location may admit. Fixed list, serialized comma-joined.
pub const ROLE_OPTIONS: [&str; 6] = [
    "DA (Packet)",
    "DA (Salary)",
    "SSA",
    "TL",
    "Supervisor",
    "Manager",
];

/// Office location as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub id: i64,
    // Backend field is spelled without the second "i".
    #[serde(rename = "abbrevation", default)]
    pub abbreviation: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub latlong: String,
    /// Comma-joined role names.
    #[serde(default)]
    pub roles: String,
}

/// id -> abbreviation lookup shared by every screen that shows a location.
pub type LocationMap = HashMap<i64, String>;

pub fn build_location_map(locations: &[Location]) -> LocationMap {
    locations
        .iter()
        .map(|loc| (loc.id, loc.abbreviation.clone()))
        .collect()
}

/// Resolve a raw location-id field for display. Ids the map does not know
/// (and unparseable ids) render as `ID: <raw>` rather than blank.
pub fn location_label(map: &LocationMap, raw_id: &str) -> String {
    raw_id
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|id| map.get(&id).cloned())
        .unwrap_or_else(|| format!("ID: {}", raw_id))
}

/// Create/edit form state for a location.
#[derive(Debug, Clone, Default)]
pub struct LocationForm {
    /// Present when editing an existing location.
    pub id: Option<i64>,
    pub abbreviation: String,
    pub address: String,
    pub latlong: String,
    pub roles: Vec<String>,
}

impl LocationForm {
    pub fn from_location(loc: &Location) -> Self {
        Self {
            id: Some(loc.id),
            abbreviation: loc.abbreviation.clone(),
            address: loc.address.clone(),
            latlong: loc.latlong.clone(),
            roles: loc
                .roles
                .split(',')
                .filter(|r| !r.trim().is_empty())
                .map(|r| r.trim().to_string())
                .collect(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.abbreviation.trim().is_empty()
            || self.address.trim().is_empty()
            || self.latlong.trim().is_empty()
            || self.roles.is_empty()
        {
            return Err("Please fill all fields".to_string());
        }
        Ok(())
    }

    pub fn to_payload(&self) -> serde_json::Value {
        let mut payload = serde_json::json!({
            "abbrevation": self.abbreviation,
            "address": self.address,
            "latlong": self.latlong,
            "roles": self.roles.join(","),
        });
        if let Some(id) = self.id {
            payload["id"] = serde_json::json!(id);
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Location> {
        vec![
            Location {
                id: 7,
                abbreviation: "PNQ".to_string(),
                address: "Pune".to_string(),
                latlong: "18.52,73.85".to_string(),
                roles: "Supervisor,TL".to_string(),
            },
            Location {
                id: 12,
                abbreviation: "BLR".to_string(),
                address: "Bengaluru".to_string(),
                latlong: "12.97,77.59".to_string(),
                roles: "Manager".to_string(),
            },
        ]
    }

    #[test]
    fn label_resolves_known_ids() {
        let map = build_location_map(&sample());
        assert_eq!(location_label(&map, "7"), "PNQ");
        assert_eq!(location_label(&map, " 12 "), "BLR");
    }

    #[test]
    fn label_falls_back_to_raw_id_never_blank() {
        let map = build_location_map(&sample());
        assert_eq!(location_label(&map, "99"), "ID: 99");
        assert_eq!(location_label(&map, "abc"), "ID: abc");
    }

    #[test]
    fn form_requires_every_field_and_a_role() {
        let mut form = LocationForm {
            id: None,
            abbreviation: "PNQ".to_string(),
            address: "Pune".to_string(),
            latlong: "18.52,73.85".to_string(),
            roles: vec!["TL".to_string()],
        };
        assert!(form.validate().is_ok());

        form.roles.clear();
        assert!(form.validate().is_err());

        form.roles.push("TL".to_string());
        form.address = "   ".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn payload_joins_roles_and_keeps_id_only_when_editing() {
        let form = LocationForm::from_location(&sample()[0]);
        let payload = form.to_payload();
        assert_eq!(payload["roles"], "Supervisor,TL");
        assert_eq!(payload["id"], 7);

        let fresh = LocationForm {
            roles: vec!["SSA".to_string()],
            abbreviation: "DEL".to_string(),
            address: "Delhi".to_string(),
            latlong: "28.6,77.2".to_string(),
            id: None,
        };
        assert!(fresh.to_payload().get("id").is_none());
    }
}
