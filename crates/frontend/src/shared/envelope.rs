//! Response normalizer for the backend's inconsistent envelopes.
//!
//! Endpoints answer with a bare array, `{data: [...]}`,
//! `{status: "success", data: [...]}`, `{success: true, data: {items: [...]}}`
//! or a named key such as `{staffAccounts: [...]}`. The shapes are tried in a
//! fixed order and the first structural match wins.
//!
//! Lists and single records fail differently: a list that matches no shape
//! becomes an empty list (the page renders "no rows"), a record that matches
//! no shape is an [`ApiError`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api_error::ApiError;

/// Where the list payload was found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListEnvelope<'a> {
    /// `[...]`
    Bare(&'a [Value]),
    /// `{data: [...]}`
    Data(&'a [Value]),
    /// `{data: {<key>: [...]}}`
    NestedUnderData(&'a [Value]),
    /// `{<key>: [...]}`
    Keyed(&'a [Value]),
    Unrecognized,
}

impl<'a> ListEnvelope<'a> {
    pub fn classify(response: &'a Value, key: Option<&str>) -> Self {
        if let Value::Array(items) = response {
            return ListEnvelope::Bare(items);
        }
        let data = response.get("data");
        if let Some(Value::Array(items)) = data {
            return ListEnvelope::Data(items);
        }
        if let Some(key) = key {
            if let Some(Value::Array(items)) = data.and_then(|d| d.get(key)) {
                return ListEnvelope::NestedUnderData(items);
            }
            if let Some(Value::Array(items)) = response.get(key) {
                return ListEnvelope::Keyed(items);
            }
        }
        ListEnvelope::Unrecognized
    }

    pub fn items(self) -> Option<&'a [Value]> {
        match self {
            ListEnvelope::Bare(items)
            | ListEnvelope::Data(items)
            | ListEnvelope::NestedUnderData(items)
            | ListEnvelope::Keyed(items) => Some(items),
            ListEnvelope::Unrecognized => None,
        }
    }
}

/// Where the single-record payload was found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectEnvelope<'a> {
    /// `{data: {<key>: {...}}}`
    NestedUnderData(&'a Value),
    /// `{data: {...}}`
    Data(&'a Value),
    /// `{<key>: {...}}`
    Keyed(&'a Value),
    Unrecognized,
}

impl<'a> ObjectEnvelope<'a> {
    pub fn classify(response: &'a Value, key: Option<&str>) -> Self {
        let data = response.get("data").filter(|d| d.is_object());
        if let Some(key) = key {
            if let Some(inner) = data.and_then(|d| d.get(key)).filter(|v| v.is_object()) {
                return ObjectEnvelope::NestedUnderData(inner);
            }
        }
        if let Some(data) = data {
            return ObjectEnvelope::Data(data);
        }
        if let Some(key) = key {
            if let Some(inner) = response.get(key).filter(|v| v.is_object()) {
                return ObjectEnvelope::Keyed(inner);
            }
        }
        ObjectEnvelope::Unrecognized
    }

    pub fn value(self) -> Option<&'a Value> {
        match self {
            ObjectEnvelope::NestedUnderData(v)
            | ObjectEnvelope::Data(v)
            | ObjectEnvelope::Keyed(v) => Some(v),
            ObjectEnvelope::Unrecognized => None,
        }
    }
}

/// Extracts a list from `response`. Never fails.
///
/// An unrecognized envelope yields an empty Vec and a warning in the console.
/// Rows that do not deserialize into `T` are dropped with a warning, the rest
/// are kept.
pub fn extract_array<T: DeserializeOwned>(response: &Value, key: Option<&str>) -> Vec<T> {
    let Some(items) = ListEnvelope::classify(response, key).items() else {
        log::warn!(
            "extract_array: no list found in response (key: {:?}); rendering empty list",
            key
        );
        return Vec::new();
    };

    let mut skipped = 0usize;
    let rows: Vec<T> = items
        .iter()
        .filter_map(|item| match serde_json::from_value::<T>(item.clone()) {
            Ok(row) => Some(row),
            Err(e) => {
                skipped += 1;
                log::debug!("extract_array: skipping row: {}", e);
                None
            }
        })
        .collect();

    if skipped > 0 {
        log::warn!(
            "extract_array: skipped {} of {} rows that did not match the expected schema",
            skipped,
            items.len()
        );
    }
    rows
}

/// Extracts a single record from `response`.
pub fn extract_object<T: DeserializeOwned>(response: &Value, key: Option<&str>) -> Result<T, ApiError> {
    let value = ObjectEnvelope::classify(response, key)
        .value()
        .ok_or_else(|| ApiError::UnexpectedShape {
            key: key.map(str::to_string),
        })?;
    serde_json::from_value(value.clone()).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    #[test]
    fn test_bare_and_data_arrays() {
        assert_eq!(extract_array::<i64>(&json!([1, 2, 3]), None), vec![1, 2, 3]);
        assert_eq!(extract_array::<i64>(&json!({"data": [1, 2, 3]}), None), vec![1, 2, 3]);
        assert_eq!(
            extract_array::<i64>(&json!({"status": "success", "data": [4]}), Some("items")),
            vec![4]
        );
    }

    #[test]
    fn test_nested_and_keyed_arrays() {
        let nested = json!({"success": true, "data": {"items": [{"id": "a"}]}});
        assert_eq!(
            extract_array::<Item>(&nested, Some("items")),
            vec![Item { id: "a".into() }]
        );

        let keyed = json!({"staffAccounts": [{"id": "s1"}, {"id": "s2"}]});
        assert_eq!(extract_array::<Item>(&keyed, Some("staffAccounts")).len(), 2);
    }

    #[test]
    fn test_unrecognized_list_is_empty() {
        assert!(extract_array::<Value>(&json!({"foo": "bar"}), None).is_empty());
        assert!(extract_array::<Value>(&json!({"foo": "bar"}), Some("items")).is_empty());
        assert!(extract_array::<Value>(&json!("text"), None).is_empty());
        assert!(extract_array::<Value>(&Value::Null, None).is_empty());
    }

    #[test]
    fn test_precedence_prefers_data_over_key() {
        let both = json!({"data": [1], "items": [2, 3]});
        assert_eq!(
            ListEnvelope::classify(&both, Some("items")),
            ListEnvelope::Data(&[json!(1)])
        );
    }

    #[test]
    fn test_key_is_ignored_without_being_supplied() {
        let keyed = json!({"staffAccounts": [{"id": "s1"}]});
        assert_eq!(ListEnvelope::classify(&keyed, None), ListEnvelope::Unrecognized);
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let response = json!({"data": [{"id": "a"}, {"name": "no id"}, {"id": "b"}]});
        let items = extract_array::<Item>(&response, None);
        assert_eq!(items, vec![Item { id: "a".into() }, Item { id: "b".into() }]);
    }

    #[test]
    fn test_object_from_data() {
        let item: Item = extract_object(&json!({"data": {"id": "x"}}), None).unwrap();
        assert_eq!(item, Item { id: "x".into() });
    }

    #[test]
    fn test_object_nested_and_keyed() {
        let nested = json!({"success": true, "data": {"product": {"id": "p1"}}});
        let item: Item = extract_object(&nested, Some("product")).unwrap();
        assert_eq!(item.id, "p1");

        let keyed = json!({"staffAccount": {"id": "s1"}});
        let item: Item = extract_object(&keyed, Some("staffAccount")).unwrap();
        assert_eq!(item.id, "s1");
    }

    #[test]
    fn test_object_missing_shape_is_error() {
        let err = extract_object::<Value>(&json!({}), None).unwrap_err();
        assert_eq!(err, ApiError::UnexpectedShape { key: None });

        let err = extract_object::<Value>(&json!({"data": [1]}), Some("product")).unwrap_err();
        assert_eq!(
            err,
            ApiError::UnexpectedShape {
                key: Some("product".into())
            }
        );
    }

    #[test]
    fn test_object_schema_mismatch_is_decode_error() {
        let err = extract_object::<Item>(&json!({"data": {"name": "x"}}), None).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
