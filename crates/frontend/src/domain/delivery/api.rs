use contracts::domain::delivery::{Delivery, DeliveryQuery};
use contracts::shared::api::Envelope;
use serde_json::json;

use crate::shared::api_utils::{get_envelope, post_command};

/// One page of deliveries; pagination counters ride in the envelope.
pub async fn fetch_deliveries(query: &DeliveryQuery) -> Result<Envelope<Vec<Delivery>>, String> {
    let path = format!("/delivery/delivery_get.php?{}", query.query_string());
    get_envelope(&path).await
}

/// Status transition (completion or soft delete). The backend keeps the
/// record either way.
pub async fn update_status(id: i64, status: &str) -> Result<(), String> {
    post_command(
        "/delivery/update_status.php",
        &json!({ "ID": id, "Status": status }),
    )
    .await
}
