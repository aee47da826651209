use serde::{Deserialize, Serialize};

/// Authenticated operator as returned by the login endpoint and persisted
/// between page reloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: String,
    /// Location the account is pinned to; empty for admins.
    #[serde(default)]
    pub location_id: String,
    #[serde(default)]
    pub image: String,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role.trim() == "admin"
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub login_id: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    user: Option<UserInfo>,
}

/// Parses the login endpoint's reply. On success the user object is
/// required; a success flag without one is treated as a server fault.
pub fn parse_login_response(body: &str) -> Result<UserInfo, String> {
    let parsed: LoginResponse =
        serde_json::from_str(body).map_err(|e| format!("Unexpected server response: {e}"))?;
    let ok = parsed.success == Some(true)
        || parsed.status.as_deref() == Some("success");
    if !ok {
        return Err(parsed
            .message
            .unwrap_or_else(|| "Invalid credentials".to_string()));
    }
    parsed
        .user
        .ok_or_else(|| "Server response missing user details".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_role_is_trimmed() {
        let user = UserInfo {
            role: " admin ".to_string(),
            ..Default::default()
        };
        assert!(user.is_admin());
        let other = UserInfo {
            role: "supervisor".to_string(),
            ..Default::default()
        };
        assert!(!other.is_admin());
    }

    #[test]
    fn successful_login_yields_user() {
        let body = r#"{"success":true,"user":{"username":"ravi","role":"admin","location_id":"","image":""}}"#;
        let user = parse_login_response(body).unwrap();
        assert_eq!(user.username, "ravi");
        assert!(user.is_admin());
    }

    #[test]
    fn status_string_convention_also_accepted() {
        let body =
            r#"{"status":"success","user":{"username":"asha","role":"location","location_id":"4"}}"#;
        let user = parse_login_response(body).unwrap();
        assert_eq!(user.location_id, "4");
    }

    #[test]
    fn failure_surfaces_server_message() {
        let body = r#"{"success":false,"message":"Wrong password"}"#;
        assert_eq!(parse_login_response(body).unwrap_err(), "Wrong password");
    }

    #[test]
    fn success_without_user_is_a_fault() {
        let body = r#"{"success":true}"#;
        assert!(parse_login_response(body).is_err());
    }

    #[test]
    fn garbage_body_is_reported() {
        assert!(parse_login_response("<html>").is_err());
    }
}
