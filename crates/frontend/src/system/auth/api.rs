use contracts::system::auth::{parse_login_response, LoginRequest, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Login with credentials. The login endpoint carries the user in a `user`
/// field rather than the usual `data` envelope, so it has its own parser.
pub async fn login(login_id: String, password: String) -> Result<UserInfo, String> {
    let request = LoginRequest { login_id, password };

    let response = Request::post(&format!("{}/auth/login_web.php", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    parse_login_response(&body)
}
