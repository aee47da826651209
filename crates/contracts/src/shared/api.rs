//! Normalization of backend response envelopes.
//!
//! The backend answers with one of two conventions, inconsistently across
//! endpoints: `{success: bool, data, message}` or
//! `{status: "success" | ..., data, message}`. Everything above this layer
//! sees a single `Result<Envelope<T>, String>`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

pub const GENERIC_FAILURE: &str = "Request failed";

/// Pagination block returned by paginated list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageInfo {
    pub current_page: u32,
    pub per_page: u32,
    pub total_records: u64,
    pub total_pages: u32,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            current_page: 1,
            per_page: 50,
            total_records: 0,
            total_pages: 1,
        }
    }
}

/// A logically successful response: payload plus optional pagination.
#[derive(Debug, Clone)]
pub struct Envelope<T> {
    pub data: T,
    pub pagination: Option<PageInfo>,
}

#[derive(Deserialize)]
struct RawEnvelope {
    success: Option<bool>,
    status: Option<String>,
    message: Option<String>,
    data: Option<serde_json::Value>,
    pagination: Option<PageInfo>,
}

impl RawEnvelope {
    fn is_ok(&self) -> bool {
        self.success == Some(true) || self.status.as_deref() == Some("success")
    }
}

/// Parse a response body into a normalized envelope.
///
/// A backend-reported failure (`success: false` or a non-"success" status)
/// becomes `Err` carrying the backend message, falling back to a generic
/// text when the message is absent.
pub fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<Envelope<T>, String> {
    let raw: RawEnvelope =
        serde_json::from_str(body).map_err(|e| format!("Malformed response: {}", e))?;

    if !raw.is_ok() {
        return Err(raw.message.unwrap_or_else(|| GENERIC_FAILURE.to_string()));
    }

    let data = raw.data.unwrap_or(serde_json::Value::Null);
    let data: T =
        serde_json::from_value(data).map_err(|e| format!("Unexpected payload shape: {}", e))?;

    Ok(Envelope {
        data,
        pagination: raw.pagination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_success_boolean_convention() {
        let env = parse_envelope::<Vec<u32>>(r#"{"success": true, "data": [1, 2, 3]}"#).unwrap();
        assert_eq!(env.data, vec![1, 2, 3]);
        assert!(env.pagination.is_none());
    }

    #[test]
    fn accepts_status_string_convention() {
        let body = r#"{
            "status": "success",
            "data": ["a"],
            "pagination": {"current_page": 2, "per_page": 50, "total_records": 120, "total_pages": 3}
        }"#;
        let env = parse_envelope::<Vec<String>>(body).unwrap();
        assert_eq!(env.data, vec!["a".to_string()]);
        let page = env.pagination.unwrap();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_records, 120);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn failure_carries_backend_message() {
        let err = parse_envelope::<Vec<u32>>(r#"{"success": false, "message": "No access"}"#)
            .unwrap_err();
        assert_eq!(err, "No access");

        let err = parse_envelope::<Vec<u32>>(r#"{"status": "error"}"#).unwrap_err();
        assert_eq!(err, GENERIC_FAILURE);
    }

    #[test]
    fn neither_flag_is_a_failure() {
        assert!(parse_envelope::<Vec<u32>>(r#"{"data": []}"#).is_err());
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(parse_envelope::<Vec<u32>>("<html>gateway timeout</html>").is_err());
    }
}
