use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::common::{MatchFilter, MatchStatus};
use crate::system::auth::UserInfo;

/// Page sizes offered by the delivery list.
pub const PER_PAGE_OPTIONS: [u32; 4] = [25, 50, 75, 100];
/// Page size used when gathering rows for CSV export.
pub const EXPORT_LIMIT: u32 = 1000;
/// A delivery may be completed only after this much time on the yard.
pub const COMPLETE_AFTER_HOURS: i64 = 3;

pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_COMPLETE: &str = "Complete";
/// Soft delete: sent as the new status, the record is never removed.
pub const STATUS_DELETE: &str = "Delete";

/// Outbound delivery record. Vehicle-number and manually-entered-number
/// slots are positionally paired: slot i of one corresponds to slot i of
/// the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    #[serde(rename = "ID", default)]
    pub id: i64,
    #[serde(rename = "EmpId", default)]
    pub emp_id: String,
    #[serde(rename = "EmpName", default)]
    pub emp_name: String,
    #[serde(rename = "EmpPic", default)]
    pub emp_pic: String,
    #[serde(rename = "TypeOfDelivery", default)]
    pub type_of_delivery: String,
    #[serde(rename = "NumberOfVehicle", default)]
    pub number_of_vehicle: String,
    #[serde(rename = "TypeOfVehicle", default)]
    pub type_of_vehicle: String,
    #[serde(rename = "VehicleNo1", default)]
    pub vehicle_no1: Option<String>,
    #[serde(rename = "VehicleNo2", default)]
    pub vehicle_no2: Option<String>,
    #[serde(rename = "VehicleNo3", default)]
    pub vehicle_no3: Option<String>,
    #[serde(rename = "VehicleNo4", default)]
    pub vehicle_no4: Option<String>,
    #[serde(rename = "VehicleNo5", default)]
    pub vehicle_no5: Option<String>,
    #[serde(rename = "ManualNumber1", default)]
    pub manual_number1: Option<String>,
    #[serde(rename = "ManualNumber2", default)]
    pub manual_number2: Option<String>,
    #[serde(rename = "ManualNumber3", default)]
    pub manual_number3: Option<String>,
    #[serde(rename = "ManualNumber4", default)]
    pub manual_number4: Option<String>,
    #[serde(rename = "ManualNumber5", default)]
    pub manual_number5: Option<String>,
    #[serde(rename = "VehiclePic1", default)]
    pub vehicle_pic1: Option<String>,
    #[serde(rename = "VehiclePic2", default)]
    pub vehicle_pic2: Option<String>,
    #[serde(rename = "VehiclePic3", default)]
    pub vehicle_pic3: Option<String>,
    #[serde(rename = "VehiclePic4", default)]
    pub vehicle_pic4: Option<String>,
    #[serde(rename = "VehiclePic5", default)]
    pub vehicle_pic5: Option<String>,
    #[serde(rename = "CombinedVehiclePic", default)]
    pub combined_vehicle_pic: Option<String>,
    #[serde(rename = "CompName", default)]
    pub comp_name: String,
    #[serde(rename = "LocationId", default)]
    pub location_id: String,
    #[serde(rename = "Datetime", default)]
    pub datetime: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "LatLong", default)]
    pub lat_long: String,
}

fn present(slot: &Option<String>) -> Option<&str> {
    slot.as_deref().filter(|s| !s.is_empty())
}

impl Delivery {
    /// Filled vehicle-number slots, in slot order.
    pub fn vehicle_numbers(&self) -> Vec<&str> {
        [
            &self.vehicle_no1,
            &self.vehicle_no2,
            &self.vehicle_no3,
            &self.vehicle_no4,
            &self.vehicle_no5,
        ]
        .into_iter()
        .filter_map(present)
        .collect()
    }

    /// Filled manually-entered-number slots, in slot order.
    pub fn manual_numbers(&self) -> Vec<&str> {
        [
            &self.manual_number1,
            &self.manual_number2,
            &self.manual_number3,
            &self.manual_number4,
            &self.manual_number5,
        ]
        .into_iter()
        .filter_map(present)
        .collect()
    }

    /// Filled vehicle-photo slots, in slot order.
    pub fn vehicle_pics(&self) -> Vec<&str> {
        [
            &self.vehicle_pic1,
            &self.vehicle_pic2,
            &self.vehicle_pic3,
            &self.vehicle_pic4,
            &self.vehicle_pic5,
        ]
        .into_iter()
        .filter_map(present)
        .collect()
    }

    /// Derived, never stored. `N/A` when both slot sets are empty, `OK` iff
    /// the two sequences are equal elementwise in order, else `Not OK`.
    pub fn match_status(&self) -> MatchStatus {
        let vehicles = self.vehicle_numbers();
        let manuals = self.manual_numbers();
        if vehicles.is_empty() && manuals.is_empty() {
            return MatchStatus::NotApplicable;
        }
        if vehicles == manuals {
            MatchStatus::Ok
        } else {
            MatchStatus::NotOk
        }
    }

    /// Case-insensitive substring search over the columns the list shows.
    pub fn matches_search(&self, term: &str, location_name: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let mut haystacks: Vec<&str> = vec![
            &self.emp_name,
            &self.emp_id,
            &self.type_of_delivery,
            &self.type_of_vehicle,
            location_name,
            &self.datetime,
        ];
        haystacks.extend(self.vehicle_numbers());
        haystacks.extend(self.manual_numbers());
        haystacks
            .iter()
            .any(|h| h.to_lowercase().contains(&needle))
    }

    /// Completion is allowed once the record has aged three hours and is not
    /// already complete. An unparseable timestamp never becomes eligible.
    pub fn can_complete(&self, now: NaiveDateTime) -> bool {
        if self.status == STATUS_COMPLETE {
            return false;
        }
        match parse_timestamp(&self.datetime) {
            Some(entered) => now - entered >= Duration::hours(COMPLETE_AFTER_HOURS),
            None => false,
        }
    }

    /// Soft delete is blocked only for completed deliveries.
    pub fn can_delete(&self) -> bool {
        self.status != STATUS_COMPLETE
    }
}

/// Backend timestamps arrive as `YYYY-MM-DD HH:MM:SS`; tolerate the ISO
/// `T` separator and trailing fractional seconds / zone suffix as well.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(ts);
    }
    let head: &str = trimmed
        .split(['.', 'Z', '+'])
        .next()
        .unwrap_or(trimmed);
    NaiveDateTime::parse_from_str(head, "%Y-%m-%dT%H:%M:%S").ok()
}

/// The user-editable filter set of the delivery list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryFilters {
    pub from_date: String,
    pub to_date: String,
    pub location_id: Option<i64>,
    pub match_status: MatchFilter,
    pub search: String,
}

impl DeliveryFilters {
    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.from_date.is_empty() {
            count += 1;
        }
        if !self.to_date.is_empty() {
            count += 1;
        }
        if self.location_id.is_some() {
            count += 1;
        }
        if self.match_status != MatchFilter::All {
            count += 1;
        }
        if !self.search.trim().is_empty() {
            count += 1;
        }
        count
    }
}

/// Role scoping appended to every delivery/return query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryScope {
    Admin,
    Location(String),
    Unscoped,
}

impl QueryScope {
    pub fn from_user(user: Option<&UserInfo>) -> Self {
        match user {
            Some(u) if u.is_admin() => QueryScope::Admin,
            Some(u) if !u.location_id.is_empty() => QueryScope::Location(u.location_id.clone()),
            _ => QueryScope::Unscoped,
        }
    }

    fn append_to(&self, params: &mut Vec<(String, String)>) {
        match self {
            QueryScope::Admin => params.push(("role".to_string(), "admin".to_string())),
            QueryScope::Location(id) => params.push(("LocationId".to_string(), id.clone())),
            QueryScope::Unscoped => {}
        }
    }
}

/// One page request against the delivery list endpoint. Date range,
/// location and free-text search travel to the server; the match-status
/// value is a placeholder the backend currently ignores and is re-applied
/// client-side to the returned page.
#[derive(Debug, Clone)]
pub struct DeliveryQuery {
    /// 1-indexed.
    pub page: u32,
    pub limit: u32,
    pub filters: DeliveryFilters,
    pub scope: QueryScope,
}

impl DeliveryQuery {
    pub fn query_string(&self) -> String {
        let mut params: Vec<(String, String)> = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if !self.filters.from_date.is_empty() {
            params.push(("fromDate".to_string(), self.filters.from_date.clone()));
        }
        if !self.filters.to_date.is_empty() {
            params.push(("toDate".to_string(), self.filters.to_date.clone()));
        }
        if let Some(id) = self.filters.location_id {
            params.push(("locationFilter".to_string(), id.to_string()));
        }
        if self.filters.match_status != MatchFilter::All {
            params.push((
                "matchStatus".to_string(),
                self.filters.match_status.as_str().to_string(),
            ));
        }
        let search = self.filters.search.trim();
        if !search.is_empty() {
            params.push(("search".to_string(), search.to_string()));
        }
        self.scope.append_to(&mut params);

        params
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(&v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Column header of the delivery CSV export.
pub const EXPORT_HEADER: [&str; 12] = [
    "Sr No.",
    "EmpId",
    "Emp Name",
    "Type of Delivery",
    "Number of Vehicles",
    "Type Of Vehicle",
    "Vehicle Numbers",
    "Manual Numbers",
    "Packets",
    "Location",
    "Datetime",
    "Status",
];

/// One export row. Slot values are comma-joined inside their field (the
/// CSV escaper then quotes them).
pub fn export_row(delivery: &Delivery, sr_no: usize, location_name: &str) -> Vec<String> {
    vec![
        sr_no.to_string(),
        delivery.emp_id.clone(),
        delivery.emp_name.clone(),
        delivery.type_of_delivery.clone(),
        delivery.number_of_vehicle.clone(),
        delivery.type_of_vehicle.clone(),
        delivery.vehicle_numbers().join(","),
        delivery.manual_numbers().join(","),
        delivery.comp_name.clone(),
        location_name.to_string(),
        delivery.datetime.clone(),
        delivery.match_status().as_str().to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::csv::build_csv;

    fn delivery() -> Delivery {
        Delivery {
            id: 1,
            emp_id: "EMP042".to_string(),
            emp_name: "Ravi Kumar".to_string(),
            emp_pic: String::new(),
            type_of_delivery: "Packet".to_string(),
            number_of_vehicle: "1".to_string(),
            type_of_vehicle: "Bike".to_string(),
            vehicle_no1: None,
            vehicle_no2: None,
            vehicle_no3: None,
            vehicle_no4: None,
            vehicle_no5: None,
            manual_number1: None,
            manual_number2: None,
            manual_number3: None,
            manual_number4: None,
            manual_number5: None,
            vehicle_pic1: None,
            vehicle_pic2: None,
            vehicle_pic3: None,
            vehicle_pic4: None,
            vehicle_pic5: None,
            combined_vehicle_pic: None,
            comp_name: "C12".to_string(),
            location_id: "7".to_string(),
            datetime: "2025-06-01 08:00:00".to_string(),
            status: STATUS_PENDING.to_string(),
            lat_long: "18.52,73.85".to_string(),
        }
    }

    #[test]
    fn match_status_na_when_both_slot_sets_empty() {
        assert_eq!(delivery().match_status(), MatchStatus::NotApplicable);
    }

    #[test]
    fn match_status_ok_for_equal_single_slot() {
        let mut d = delivery();
        d.vehicle_no1 = Some("MH12AB1234".to_string());
        d.manual_number1 = Some("MH12AB1234".to_string());
        assert_eq!(d.match_status(), MatchStatus::Ok);
    }

    #[test]
    fn match_status_not_ok_on_mismatch() {
        let mut d = delivery();
        d.vehicle_no1 = Some("MH12AB1234".to_string());
        d.manual_number1 = Some("MH12XY9999".to_string());
        assert_eq!(d.match_status(), MatchStatus::NotOk);
    }

    #[test]
    fn match_status_not_ok_on_length_mismatch() {
        let mut d = delivery();
        d.vehicle_no1 = Some("MH12AB1234".to_string());
        d.vehicle_no2 = Some("MH12CD5678".to_string());
        d.manual_number1 = Some("MH12AB1234".to_string());
        assert_eq!(d.match_status(), MatchStatus::NotOk);
    }

    #[test]
    fn match_status_respects_slot_order() {
        let mut d = delivery();
        d.vehicle_no1 = Some("AAA".to_string());
        d.vehicle_no2 = Some("BBB".to_string());
        d.manual_number1 = Some("BBB".to_string());
        d.manual_number2 = Some("AAA".to_string());
        assert_eq!(d.match_status(), MatchStatus::NotOk);
    }

    #[test]
    fn empty_slots_are_skipped_not_compared() {
        // Slots 1 and 3 filled on one side, 1 and 2 on the other: the
        // filled sequences are what gets compared.
        let mut d = delivery();
        d.vehicle_no1 = Some("AAA".to_string());
        d.vehicle_no3 = Some("BBB".to_string());
        d.manual_number1 = Some("AAA".to_string());
        d.manual_number2 = Some("BBB".to_string());
        assert_eq!(d.match_status(), MatchStatus::Ok);
    }

    #[test]
    fn search_is_case_insensitive_across_columns() {
        let mut d = delivery();
        d.vehicle_no1 = Some("MH12AB1234".to_string());
        assert!(d.matches_search("ravi", "PNQ"));
        assert!(d.matches_search("mh12ab", "PNQ"));
        assert!(d.matches_search("pnq", "PNQ"));
        assert!(d.matches_search("2025-06-01", "PNQ"));
        assert!(!d.matches_search("nagpur", "PNQ"));
        assert!(d.matches_search("   ", "PNQ"), "blank term matches all");
    }

    #[test]
    fn complete_needs_three_hours_on_the_yard() {
        let d = delivery();
        let two_hours = parse_timestamp("2025-06-01 10:00:00").unwrap();
        let four_hours = parse_timestamp("2025-06-01 12:00:00").unwrap();
        assert!(!d.can_complete(two_hours));
        assert!(d.can_complete(four_hours));
    }

    #[test]
    fn complete_blocked_for_completed_and_bad_timestamps() {
        let mut d = delivery();
        d.status = STATUS_COMPLETE.to_string();
        let much_later = parse_timestamp("2025-06-02 08:00:00").unwrap();
        assert!(!d.can_complete(much_later));
        assert!(!d.can_delete());

        let mut bad = delivery();
        bad.datetime = "not a date".to_string();
        assert!(!bad.can_complete(much_later));
        assert!(bad.can_delete());
    }

    #[test]
    fn parse_timestamp_accepts_both_separators() {
        assert!(parse_timestamp("2025-06-01 08:00:00").is_some());
        assert!(parse_timestamp("2025-06-01T08:00:00.123Z").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn query_string_includes_only_active_filters() {
        let q = DeliveryQuery {
            page: 1,
            limit: 50,
            filters: DeliveryFilters::default(),
            scope: QueryScope::Unscoped,
        };
        assert_eq!(q.query_string(), "page=1&limit=50");

        let q = DeliveryQuery {
            page: 3,
            limit: 25,
            filters: DeliveryFilters {
                from_date: "2025-06-01".to_string(),
                to_date: "2025-06-30".to_string(),
                location_id: Some(7),
                match_status: MatchFilter::NotOk,
                search: "  ravi kumar ".to_string(),
            },
            scope: QueryScope::Admin,
        };
        assert_eq!(
            q.query_string(),
            "page=3&limit=25&fromDate=2025-06-01&toDate=2025-06-30\
             &locationFilter=7&matchStatus=Not%20OK&search=ravi%20kumar&role=admin"
        );
    }

    #[test]
    fn non_admin_queries_are_location_scoped() {
        let user = UserInfo {
            username: "sup1".to_string(),
            role: "Supervisor".to_string(),
            location_id: "7".to_string(),
            image: String::new(),
        };
        let scope = QueryScope::from_user(Some(&user));
        assert_eq!(scope, QueryScope::Location("7".to_string()));

        let q = DeliveryQuery {
            page: 1,
            limit: 50,
            filters: DeliveryFilters::default(),
            scope,
        };
        assert_eq!(q.query_string(), "page=1&limit=50&LocationId=7");
    }

    #[test]
    fn export_rows_quote_comma_joined_slots() {
        let mut d = delivery();
        d.vehicle_no1 = Some("AAA".to_string());
        d.vehicle_no2 = Some("BBB".to_string());
        d.manual_number1 = Some("AAA".to_string());
        d.manual_number2 = Some("BBB".to_string());

        let rows = vec![export_row(&d, 1, "PNQ")];
        let csv = build_csv(&EXPORT_HEADER, &rows);
        let lines: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("\"AAA,BBB\""));
        assert!(lines[1].ends_with("OK"));
    }

    #[test]
    fn filter_active_count_tracks_every_field() {
        let mut f = DeliveryFilters::default();
        assert!(!f.is_active());
        f.search = "x".to_string();
        f.location_id = Some(1);
        assert_eq!(f.active_count(), 2);
        f.from_date = "2025-06-01".to_string();
        f.to_date = "2025-06-02".to_string();
        f.match_status = MatchFilter::Ok;
        assert_eq!(f.active_count(), 5);
    }
}
