use serde::{Deserialize, Serialize};

use crate::shared::csv::build_csv;

/// Page sizes offered by the Amazon-ID list (client-side pagination).
pub const PAGE_SIZES: [usize; 4] = [5, 10, 25, 50];

/// Office-to-Amazon identifier mapping row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmazonIdRow {
    #[serde(rename = "ID", default)]
    pub id: i64,
    /// Office abbreviation, not a location id.
    #[serde(rename = "Office", default)]
    pub office: String,
    #[serde(rename = "daAmazonId", default)]
    pub amazon_id: String,
    #[serde(rename = "CompId", default)]
    pub comp_id: String,
    #[serde(rename = "CompName", default)]
    pub comp_name: String,
    /// "1" active, anything else inactive.
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "UpdateDateTime", default)]
    pub update_date_time: String,
}

impl AmazonIdRow {
    pub fn is_active(&self) -> bool {
        self.status.trim().parse::<i32>() == Ok(1)
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active() {
            "Active"
        } else {
            "Inactive"
        }
    }

    /// Office filter is an exact abbreviation match; the search term matches
    /// case-insensitively across the visible columns, including the word
    /// "active"/"inactive" derived from the flag.
    pub fn matches(&self, office: Option<&str>, search: &str) -> bool {
        if let Some(wanted) = office {
            if self.office != wanted {
                return false;
            }
        }
        let needle = search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.comp_name.to_lowercase().contains(&needle)
            || self.office.to_lowercase().contains(&needle)
            || self.amazon_id.to_lowercase().contains(&needle)
            || self.comp_id.to_lowercase().contains(&needle)
            || self.update_date_time.to_lowercase().contains(&needle)
            || self.status_label().to_lowercase().contains(&needle)
    }
}

/// Column header of the Amazon-ID CSV export.
pub const EXPORT_HEADER: [&str; 6] = [
    "Comp Name",
    "Office",
    "Amazon ID",
    "Comp ID",
    "Update Date",
    "Status",
];

pub fn export_row(row: &AmazonIdRow) -> Vec<String> {
    vec![
        row.comp_name.clone(),
        row.office.clone(),
        row.amazon_id.clone(),
        row.comp_id.clone(),
        row.update_date_time.clone(),
        row.status_label().to_string(),
    ]
}

/// Sample file offered next to the bulk upload, showing the expected
/// spreadsheet column layout.
pub fn sample_template() -> String {
    build_csv(
        &["Office", "Amazon ID", "Comp ID", "Comp Name"],
        &[
            vec![
                "NY".to_string(),
                "A12345".to_string(),
                "C789".to_string(),
                "AmazonComp1".to_string(),
            ],
            vec![
                "CA".to_string(),
                "B54321".to_string(),
                "C321".to_string(),
                "AmazonComp2".to_string(),
            ],
        ],
    )
}

/// One row of the multi-row add dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmazonIdEntry {
    pub office: String,
    pub amazon_id: String,
    pub comp_id: String,
    pub comp_name: String,
}

impl AmazonIdEntry {
    pub fn is_complete(&self) -> bool {
        !self.office.is_empty()
            && !self.amazon_id.is_empty()
            && !self.comp_id.is_empty()
            && !self.comp_name.is_empty()
    }
}

/// The whole batch is rejected if any row is incomplete.
pub fn validate_entries(entries: &[AmazonIdEntry]) -> Result<(), String> {
    if entries.iter().any(|e| !e.is_complete()) {
        return Err("Please fill all fields in each entry".to_string());
    }
    Ok(())
}

pub fn entries_payload(entries: &[AmazonIdEntry]) -> serde_json::Value {
    let rows: Vec<serde_json::Value> = entries
        .iter()
        .map(|e| {
            serde_json::json!({
                "Office": e.office,
                "daAmazonId": e.amazon_id,
                "CompId": e.comp_id,
                "CompName": e.comp_name,
            })
        })
        .collect();
    serde_json::json!({ "entries": rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> AmazonIdRow {
        AmazonIdRow {
            id: 3,
            office: "PNQ".to_string(),
            amazon_id: "A1B2C3".to_string(),
            comp_id: "C789".to_string(),
            comp_name: "Northstar Logistics".to_string(),
            status: "1".to_string(),
            update_date_time: "2025-06-01 10:00:00".to_string(),
        }
    }

    #[test]
    fn status_flag_parses_loosely() {
        assert!(row().is_active());
        let mut inactive = row();
        inactive.status = " 0 ".to_string();
        assert!(!inactive.is_active());
        inactive.status = String::new();
        assert!(!inactive.is_active());
    }

    #[test]
    fn search_covers_derived_status_words() {
        let r = row();
        assert!(r.matches(None, "northstar"));
        assert!(r.matches(None, "active"));
        assert!(r.matches(Some("PNQ"), "a1b2"));
        assert!(!r.matches(Some("BLR"), ""));
        let mut inactive = row();
        inactive.status = "0".to_string();
        assert!(inactive.matches(None, "inactive"));
    }

    #[test]
    fn batch_validation_rejects_any_incomplete_row() {
        let full = AmazonIdEntry {
            office: "PNQ".to_string(),
            amazon_id: "A1".to_string(),
            comp_id: "C1".to_string(),
            comp_name: "X".to_string(),
        };
        let mut partial = full.clone();
        partial.comp_name.clear();

        assert!(validate_entries(&[full.clone()]).is_ok());
        assert!(validate_entries(&[full, partial]).is_err());
    }

    #[test]
    fn payload_uses_backend_field_names() {
        let entry = AmazonIdEntry {
            office: "PNQ".to_string(),
            amazon_id: "A1".to_string(),
            comp_id: "C1".to_string(),
            comp_name: "X".to_string(),
        };
        let payload = entries_payload(&[entry]);
        assert_eq!(payload["entries"][0]["daAmazonId"], "A1");
        assert_eq!(payload["entries"][0]["Office"], "PNQ");
    }

    #[test]
    fn sample_template_lists_two_example_rows() {
        let sample = sample_template();
        assert_eq!(sample.trim_end().lines().count(), 3);
        assert!(sample.starts_with("Office,Amazon ID,Comp ID,Comp Name"));
    }
}
