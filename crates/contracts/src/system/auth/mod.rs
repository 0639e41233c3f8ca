use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub access_token: String,
    #[serde(alias = "refresh_token")]
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    #[serde(alias = "access_token")]
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl UserInfo {
    /// Older accounts only carry the `isAdmin` flag, newer ones a role name
    pub fn has_admin_rights(&self) -> bool {
        self.is_admin || self.role.as_deref() == Some("admin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_rights_from_role_or_flag() {
        let by_role: UserInfo =
            serde_json::from_str(r#"{"id": "1", "username": "a", "role": "admin"}"#).unwrap();
        let by_flag: UserInfo =
            serde_json::from_str(r#"{"id": "2", "username": "b", "isAdmin": true}"#).unwrap();
        let staff: UserInfo =
            serde_json::from_str(r#"{"id": "3", "username": "c", "role": "staff"}"#).unwrap();

        assert!(by_role.has_admin_rights());
        assert!(by_flag.has_admin_rights());
        assert!(!staff.has_admin_rights());
    }

    #[test]
    fn test_login_response_accepts_snake_case_tokens() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"access_token": "a", "refresh_token": "r",
                "user": {"id": "1", "username": "admin"}}"#,
        )
        .unwrap();
        assert_eq!(resp.access_token, "a");
        assert_eq!(resp.refresh_token, "r");
    }
}
