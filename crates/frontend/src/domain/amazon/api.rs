use contracts::domain::amazon::{entries_payload, AmazonIdEntry, AmazonIdRow};
use contracts::shared::api::parse_envelope;
use gloo_net::http::Request;
use serde_json::json;
use web_sys::{File, FormData};

use crate::shared::api_utils::{api_base, get_envelope, post_command};

pub async fn fetch_amazon_ids() -> Result<Vec<AmazonIdRow>, String> {
    Ok(get_envelope::<Vec<AmazonIdRow>>("/location/amazon_id_list.php")
        .await?
        .data)
}

pub async fn add_entries(entries: &[AmazonIdEntry]) -> Result<(), String> {
    post_command("/location/add_amazon_id.php", &entries_payload(entries)).await
}

/// Flips the active flag of one mapping row.
pub async fn toggle_status(id: i64) -> Result<(), String> {
    post_command("/location/update_comp_status.php", &json!({ "id": id })).await
}

/// Uploads a spreadsheet (`.xls`/`.xlsx`) as multipart form data. This is
/// the one endpoint that takes a file instead of JSON.
pub async fn bulk_upload(file: File) -> Result<(), String> {
    let form = FormData::new().map_err(|e| format!("Failed to build form data: {:?}", e))?;
    form.append_with_blob("file", &file)
        .map_err(|e| format!("Failed to attach file: {:?}", e))?;

    let response = Request::post(&format!("{}/location/bulk_amazon_id.php", api_base()))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
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
    parse_envelope::<Option<serde_json::Value>>(&body)?;
    Ok(())
}
