use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::shared::api_client;
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_url;
use crate::shared::envelope::extract_object;

/// POST without a bearer token (login, refresh, logout).
async fn post_public<B: Serialize>(path: &str, body: &B) -> Result<Value, ApiError> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(format!("failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        log::warn!("POST {} -> {}", path, status);
        return Err(ApiError::from_status(status, &text));
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    let value = post_public("/api/auth/login", &request).await?;
    decode_enveloped_or_bare(&value, None)
}

/// Auth endpoints answer either enveloped or with the bare object.
fn decode_enveloped_or_bare<T: DeserializeOwned>(
    value: &Value,
    key: Option<&str>,
) -> Result<T, ApiError> {
    match extract_object::<T>(value, key) {
        Err(ApiError::UnexpectedShape { .. }) => {
            serde_json::from_value(value.clone()).map_err(|e| ApiError::Decode(e.to_string()))
        }
        other => other,
    }
}

/// Exchange the refresh token for a new access token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    let request = RefreshRequest { refresh_token };
    let value = post_public("/api/auth/refresh", &request).await?;
    decode_enveloped_or_bare(&value, None)
}

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), ApiError> {
    let request = RefreshRequest { refresh_token };
    post_public("/api/auth/logout", &request).await.map(|_| ())
}

/// Current user for the stored access token
pub async fn get_current_user() -> Result<UserInfo, ApiError> {
    let value = api_client::get_json("/api/auth/me").await?;
    decode_enveloped_or_bare(&value, Some("user"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_login_bare_and_enveloped() {
        let user = json!({"id": "u1", "username": "admin", "role": "admin"});
        let bare = json!({"accessToken": "a", "refreshToken": "r", "user": user});
        let wrapped = json!({"success": true, "data": bare.clone()});

        let a: LoginResponse = decode_enveloped_or_bare(&bare, None).unwrap();
        let b: LoginResponse = decode_enveloped_or_bare(&wrapped, None).unwrap();
        assert_eq!(a.access_token, "a");
        assert_eq!(b.refresh_token, "r");
        assert!(b.user.has_admin_rights());
    }

    #[test]
    fn test_decode_login_rejects_garbage() {
        assert!(decode_enveloped_or_bare::<LoginResponse>(&json!({"token": 1}), None).is_err());
    }

    #[test]
    fn test_current_user_under_user_key() {
        let me = json!({"data": {"user": {"id": "u1", "username": "kim"}}});
        let user: UserInfo = decode_enveloped_or_bare(&me, Some("user")).unwrap();
        assert_eq!(user.username, "kim");

        let bare = json!({"id": "u2", "username": "lee", "isAdmin": true});
        let user: UserInfo = decode_enveloped_or_bare(&bare, Some("user")).unwrap();
        assert!(user.has_admin_rights());
    }
}
