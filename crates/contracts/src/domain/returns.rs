use serde::{Deserialize, Serialize};

use crate::domain::common::{MatchFilter, MatchStatus};

/// Fixed page size of the returns list.
pub const PER_PAGE: usize = 15;

/// Inbound return record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnRecord {
    #[serde(rename = "ID", default)]
    pub id: i64,
    #[serde(rename = "VehicleNumber", default)]
    pub vehicle_number: String,
    #[serde(rename = "ManualNumber", default)]
    pub manual_number: String,
    #[serde(rename = "NoOfPackets", default)]
    pub no_of_packets: String,
    #[serde(rename = "Pic", default)]
    pub pic: String,
    #[serde(rename = "Combined_Pic", default)]
    pub combined_pic: String,
    #[serde(rename = "LocationId", default)]
    pub location_id: String,
    #[serde(rename = "DateTime", default)]
    pub date_time: String,
    #[serde(rename = "LatLong", default)]
    pub lat_long: String,
}

impl ReturnRecord {
    /// Exact, case-sensitive comparison of the two number fields.
    /// No trimming: what the scanner and the operator typed is what counts.
    pub fn match_status(&self) -> MatchStatus {
        if self.vehicle_number == self.manual_number {
            MatchStatus::Ok
        } else {
            MatchStatus::NotOk
        }
    }

    /// The date part (`YYYY-MM-DD`) of the record timestamp.
    fn date_part(&self) -> &str {
        self.date_time
            .split([' ', 'T'])
            .next()
            .unwrap_or(&self.date_time)
    }
}

/// Client-side filter set for the returns list; the whole collection is
/// fetched unpaginated and filtered locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturnFilters {
    pub from_date: String,
    pub to_date: String,
    pub location_id: Option<i64>,
    pub match_status: MatchFilter,
}

impl ReturnFilters {
    /// The date range only applies once both ends are set, and is inclusive.
    /// ISO date strings compare lexicographically, so no parsing is needed.
    pub fn accepts(&self, record: &ReturnRecord) -> bool {
        if !self.from_date.is_empty() && !self.to_date.is_empty() {
            let date = record.date_part();
            if date < self.from_date.as_str() || date > self.to_date.as_str() {
                return false;
            }
        }
        if let Some(wanted) = self.location_id {
            if record.location_id.trim().parse::<i64>() != Ok(wanted) {
                return false;
            }
        }
        self.match_status.accepts(record.match_status())
    }

    pub fn apply(&self, records: &[ReturnRecord]) -> Vec<ReturnRecord> {
        records
            .iter()
            .filter(|r| self.accepts(r))
            .cloned()
            .collect()
    }
}

/// Column header of the returns CSV export.
pub const EXPORT_HEADER: [&str; 6] = [
    "Vehicle Number",
    "Manual Number",
    "No. of Packets",
    "Location",
    "Date & Time",
    "Status",
];

pub fn export_row(record: &ReturnRecord, location_name: &str) -> Vec<String> {
    vec![
        record.vehicle_number.clone(),
        record.manual_number.clone(),
        record.no_of_packets.clone(),
        location_name.to_string(),
        record.date_time.clone(),
        record.match_status().as_str().to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(vehicle: &str, manual: &str, date_time: &str, location: &str) -> ReturnRecord {
        ReturnRecord {
            id: 1,
            vehicle_number: vehicle.to_string(),
            manual_number: manual.to_string(),
            no_of_packets: "12".to_string(),
            pic: String::new(),
            combined_pic: String::new(),
            location_id: location.to_string(),
            date_time: date_time.to_string(),
            lat_long: String::new(),
        }
    }

    #[test]
    fn match_is_exact_and_case_sensitive() {
        assert_eq!(
            record("MH12AB1234", "MH12AB1234", "2025-06-01 10:00:00", "7").match_status(),
            MatchStatus::Ok
        );
        assert_eq!(
            record("MH12AB1234", "mh12ab1234", "2025-06-01 10:00:00", "7").match_status(),
            MatchStatus::NotOk
        );
        // No trimming either.
        assert_eq!(
            record("MH12AB1234", "MH12AB1234 ", "2025-06-01 10:00:00", "7").match_status(),
            MatchStatus::NotOk
        );
    }

    #[test]
    fn date_range_is_inclusive_and_needs_both_ends() {
        let r = record("A", "A", "2025-06-15 09:30:00", "7");

        let mut filters = ReturnFilters {
            from_date: "2025-06-15".to_string(),
            to_date: "2025-06-15".to_string(),
            ..Default::default()
        };
        assert!(filters.accepts(&r));

        filters.to_date.clear();
        // Only one end set: range not applied.
        assert!(filters.accepts(&r));

        filters.to_date = "2025-06-14".to_string();
        filters.from_date = "2025-06-01".to_string();
        assert!(!filters.accepts(&r));
    }

    #[test]
    fn location_filter_with_no_matches_yields_empty_not_panic() {
        let records = vec![
            record("A", "A", "2025-06-01 10:00:00", "7"),
            record("B", "B", "2025-06-02 10:00:00", "7"),
        ];
        let filters = ReturnFilters {
            location_id: Some(99),
            ..Default::default()
        };
        assert!(filters.apply(&records).is_empty());
    }

    #[test]
    fn match_status_filter_applies_to_derived_value() {
        let records = vec![
            record("A", "A", "2025-06-01 10:00:00", "7"),
            record("A", "B", "2025-06-01 11:00:00", "7"),
        ];
        let filters = ReturnFilters {
            match_status: MatchFilter::NotOk,
            ..Default::default()
        };
        let filtered = filters.apply(&records);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].manual_number, "B");
    }

    #[test]
    fn export_row_carries_resolved_location_and_status() {
        let row = export_row(&record("A", "B", "2025-06-01 10:00:00", "7"), "PNQ");
        assert_eq!(row[3], "PNQ");
        assert_eq!(row[5], "Not OK");
    }
}
