use contracts::domain::delivery::QueryScope;
use contracts::domain::returns::ReturnRecord;

use crate::shared::api_utils::get_envelope;

/// The whole return collection in one response; filtering and paging happen
/// client-side.
pub async fn fetch_returns(scope: &QueryScope) -> Result<Vec<ReturnRecord>, String> {
    let path = match scope {
        QueryScope::Admin => "/return/get_return.php?role=admin".to_string(),
        QueryScope::Location(id) => {
            format!("/return/get_return.php?LocationId={}", urlencoding::encode(id))
        }
        QueryScope::Unscoped => "/return/get_return.php".to_string(),
    };
    Ok(get_envelope::<Vec<ReturnRecord>>(&path).await?.data)
}
