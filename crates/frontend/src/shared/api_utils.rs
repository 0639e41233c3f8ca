//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::{config, ApiConfig};

/// Get the base URL for API requests
///
/// Uses `[api] base_url` when configured, otherwise the current window
/// location with the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://shop.example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let api = &config().api;
    if !api.base_url.is_empty() {
        return api.base_url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_from_location(api, &protocol, &hostname)
}

fn base_from_location(api: &ApiConfig, protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, api.port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/products/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Path of one record under a collection, e.g. `/api/products/p%2F1`.
pub fn item_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection.trim_end_matches('/'), urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_location() {
        let api = ApiConfig {
            base_url: String::new(),
            port: 8080,
        };
        assert_eq!(
            base_from_location(&api, "https:", "shop.example.com"),
            "https://shop.example.com:8080"
        );
    }

    #[test]
    fn test_item_path() {
        assert_eq!(item_path("/api/faqs", "f1"), "/api/faqs/f1");
        assert_eq!(item_path("/api/faqs/", "a b/c"), "/api/faqs/a%20b%2Fc");
    }
}
