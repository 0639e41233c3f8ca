//! Authenticated JSON requests against the admin backend.
//!
//! Every call attaches the stored bearer token and fails with
//! [`ApiError::Unauthenticated`] before touching the network when there is
//! none. Response bodies are parsed into `serde_json::Value` and then handed
//! to the envelope normalizer, so entity modules only name a path and the key
//! their payload may be nested under.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::api_error::ApiError;
use super::api_utils::api_url;
use super::envelope::{extract_array, extract_object};
use crate::system::auth::storage;

fn authorized(builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
    let token = storage::get_access_token().ok_or(ApiError::Unauthenticated)?;
    Ok(builder.header("Authorization", &storage::bearer(&token)))
}

fn with_body<B: Serialize + ?Sized>(builder: RequestBuilder, body: &B) -> Result<Request, ApiError> {
    authorized(builder)?
        .json(body)
        .map_err(|e| ApiError::Decode(format!("failed to serialize request: {}", e)))
}

/// Parses a finished response; an empty 2xx body becomes `Value::Null`.
async fn read_json(method: &str, path: &str, response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        log::warn!("{} {} -> {}", method, path, status);
        return Err(ApiError::from_status(status, &body));
    }
    log::debug!("{} {} -> {}", method, path, status);
    parse_body(&body)
}

fn parse_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn network(method: &str, path: &str, e: gloo_net::Error) -> ApiError {
    log::error!("{} {} failed: {}", method, path, e);
    ApiError::Network(e.to_string())
}

pub async fn get_json(path: &str) -> Result<Value, ApiError> {
    let response = authorized(Request::get(&api_url(path)))?
        .send()
        .await
        .map_err(|e| network("GET", path, e))?;
    read_json("GET", path, response).await
}

/// Fetches a list. A response that matches no known envelope is an empty
/// list, not an error.
pub async fn get_list<T: DeserializeOwned>(path: &str, key: Option<&str>) -> Result<Vec<T>, ApiError> {
    let value = get_json(path).await?;
    Ok(extract_array(&value, key))
}

pub async fn get_one<T: DeserializeOwned>(path: &str, key: Option<&str>) -> Result<T, ApiError> {
    let value = get_json(path).await?;
    extract_object(&value, key)
}

pub async fn post_json<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<Value, ApiError> {
    let response = with_body(Request::post(&api_url(path)), body)?
        .send()
        .await
        .map_err(|e| network("POST", path, e))?;
    read_json("POST", path, response).await
}

pub async fn put_json<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<Value, ApiError> {
    let response = with_body(Request::put(&api_url(path)), body)?
        .send()
        .await
        .map_err(|e| network("PUT", path, e))?;
    read_json("PUT", path, response).await
}

pub async fn patch_json<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<Value, ApiError> {
    let response = with_body(Request::patch(&api_url(path)), body)?
        .send()
        .await
        .map_err(|e| network("PATCH", path, e))?;
    read_json("PATCH", path, response).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = authorized(Request::delete(&api_url(path)))?
        .send()
        .await
        .map_err(|e| network("DELETE", path, e))?;
    read_json("DELETE", path, response).await.map(|_| ())
}

/// Decodes a create/update response into the saved record, falling back to
/// `fallback` when the backend answers without one (e.g. `204` or
/// `{"message": "updated"}`).
pub fn saved_or<T: DeserializeOwned>(response: &Value, key: Option<&str>, fallback: T) -> T {
    match extract_object(response, key) {
        Ok(saved) => saved,
        Err(e) => {
            log::debug!("Save response carried no record ({}), keeping local copy", e);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Saved {
        id: String,
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body("").unwrap(), Value::Null);
        assert_eq!(parse_body("  \n").unwrap(), Value::Null);
        assert_eq!(parse_body(r#"{"data": []}"#).unwrap(), json!({"data": []}));
        assert!(matches!(parse_body("<html>"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_saved_or() {
        let local = Saved { id: "local".into() };
        let saved: Saved = saved_or(&json!({"data": {"id": "srv"}}), None, local);
        assert_eq!(saved.id, "srv");

        let local = Saved { id: "local".into() };
        let saved: Saved = saved_or(&json!({"message": "updated"}), Some("product"), local);
        assert_eq!(saved.id, "local");
    }
}
