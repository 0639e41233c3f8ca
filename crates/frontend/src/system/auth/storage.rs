//! Session tokens kept in `localStorage`.

use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "admin_access_token";
const REFRESH_TOKEN_KEY: &str = "admin_refresh_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn write(key: &str, value: &str) {
    match get_local_storage() {
        Some(storage) => {
            if storage.set_item(key, value).is_err() {
                log::warn!("Failed to store '{}'", key);
            }
        }
        None => log::warn!("localStorage unavailable, '{}' kept in memory only", key),
    }
}

fn read(key: &str) -> Option<String> {
    get_local_storage()?
        .get_item(key)
        .ok()?
        .filter(|v| !v.trim().is_empty())
}

/// Save both tokens after a successful login
pub fn save_tokens(access_token: &str, refresh_token: &str) {
    write(ACCESS_TOKEN_KEY, access_token);
    write(REFRESH_TOKEN_KEY, refresh_token);
}

pub fn save_access_token(token: &str) {
    write(ACCESS_TOKEN_KEY, token);
}

pub fn get_access_token() -> Option<String> {
    read(ACCESS_TOKEN_KEY)
}

pub fn get_refresh_token() -> Option<String> {
    read(REFRESH_TOKEN_KEY)
}

/// Clear all authentication tokens
pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}

/// `Authorization` header value for a token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
