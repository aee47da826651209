//! API utilities for talking to the backend.
//!
//! All list/mutation endpoints answer with the envelope conventions handled
//! by `contracts::shared::api`; the helpers here do the transport leg and
//! hand the body to that parser.

use contracts::shared::api::{parse_envelope, Envelope};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

const API_BASE_KEY: &str = "api_base";

/// Base URL for API requests.
///
/// A `localStorage["api_base"]` entry overrides the default of the current
/// origin plus `/api`, which covers both the deployed setup and a locally
/// proxied backend.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(base)) = storage.get_item(API_BASE_KEY) {
            if !base.is_empty() {
                return base.trim_end_matches('/').to_string();
            }
        }
    }
    let origin = window
        .location()
        .origin()
        .unwrap_or_else(|_| String::new());
    format!("{}/api", origin)
}

/// GET a path (relative to the API base) and normalize the envelope.
pub async fn get_envelope<T: DeserializeOwned>(path: &str) -> Result<Envelope<T>, String> {
    let response = Request::get(&format!("{}{}", api_base(), path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    parse_envelope(&body)
}

/// POST a JSON payload and normalize the envelope. Mutation endpoints carry
/// no meaningful data, so the payload type defaults to a raw JSON value.
pub async fn post_envelope<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<Envelope<T>, String> {
    let response = Request::post(&format!("{}{}", api_base(), path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    parse_envelope(&body)
}

/// POST that only cares whether the backend reported success.
pub async fn post_command<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    post_envelope::<Option<serde_json::Value>, B>(path, body).await?;
    Ok(())
}
