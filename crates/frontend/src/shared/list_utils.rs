//! Client-side list shaping: search filter and the multi-type sort engine.
//!
//! Every list page pipes its fetched collection through [`filter_list`] and
//! then [`sort_items`] before handing it to the pagination engine.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::cmp::Ordering;

/// Row type that can be matched by the search box.
pub trait Searchable {
    /// Case-insensitive match; `filter` is already lowercased and trimmed.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Row type whose columns can be sorted.
pub trait Sortable {
    /// Value of the column `key`. Unknown keys return [`SortValue::Null`].
    fn sort_value(&self, key: &str) -> SortValue;
}

/// Sort direction of a column. `None` means original order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    Descending,
    #[default]
    None,
}

/// Active sort column and direction.
///
/// A key is present exactly when the direction is not `None`; the only way
/// to change it is through [`SortConfig::handle_sort`] and
/// [`SortConfig::clear`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortConfig {
    key: Option<String>,
    direction: SortDirection,
}

impl SortConfig {
    /// Initial sort for a page, e.g. newest first.
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        if direction == SortDirection::None {
            return Self::default();
        }
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Column header click.
    ///
    /// A new column starts ascending; repeated clicks on the same column go
    /// ascending → descending → unsorted.
    pub fn handle_sort(&mut self, key: &str) {
        if self.key.as_deref() != Some(key) {
            self.key = Some(key.to_string());
            self.direction = SortDirection::Ascending;
            return;
        }
        match self.direction {
            SortDirection::None => self.direction = SortDirection::Ascending,
            SortDirection::Ascending => self.direction = SortDirection::Descending,
            SortDirection::Descending => self.clear(),
        }
    }

    /// Direction shown in the header of column `key`.
    pub fn direction_for(&self, key: &str) -> SortDirection {
        if self.key.as_deref() == Some(key) {
            self.direction
        } else {
            SortDirection::None
        }
    }

    pub fn clear(&mut self) {
        self.key = None;
        self.direction = SortDirection::None;
    }
}

/// A comparable cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Null,
    Timestamp(DateTime<Utc>),
    Number(f64),
    Text(String),
}

impl SortValue {
    fn as_text(&self) -> String {
        match self {
            SortValue::Null => String::new(),
            SortValue::Timestamp(ts) => ts.to_rfc3339(),
            SortValue::Number(n) => n.to_string(),
            SortValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        SortValue::Text(value.to_string())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        SortValue::Text(value)
    }
}

impl From<&String> for SortValue {
    fn from(value: &String) -> Self {
        SortValue::Text(value.clone())
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::Number(value)
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<u32> for SortValue {
    fn from(value: u32) -> Self {
        SortValue::Number(f64::from(value))
    }
}

impl From<bool> for SortValue {
    fn from(value: bool) -> Self {
        SortValue::Number(if value { 1.0 } else { 0.0 })
    }
}

impl From<DateTime<Utc>> for SortValue {
    fn from(value: DateTime<Utc>) -> Self {
        SortValue::Timestamp(value)
    }
}

impl<T: Into<SortValue>> From<Option<T>> for SortValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SortValue::Null)
    }
}

impl From<&Value> for SortValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => SortValue::Null,
            Value::Bool(b) => (*b).into(),
            Value::Number(n) => n.as_f64().map(SortValue::Number).unwrap_or(SortValue::Null),
            Value::String(s) => SortValue::Text(s.clone()),
            other => SortValue::Text(other.to_string()),
        }
    }
}

/// Walks a dot-separated path (`"department.name"`) through nested objects.
///
/// Returns `None` as soon as a segment is missing or resolves to `null`.
pub fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, segment| match current.get(segment) {
        Some(Value::Null) | None => None,
        Some(next) => Some(next),
    })
}

impl Sortable for Value {
    fn sort_value(&self, key: &str) -> SortValue {
        lookup_path(self, key).map(SortValue::from).unwrap_or(SortValue::Null)
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Descending => ordering.reverse(),
        _ => ordering,
    }
}

/// Compares two cell values.
///
/// Nulls always sink to the bottom, whatever the direction. Timestamps and
/// numbers compare by value; anything else (including mixed kinds) compares
/// as case-insensitive text.
pub fn compare_values(a: &SortValue, b: &SortValue, direction: SortDirection) -> Ordering {
    match (a, b) {
        (SortValue::Null, SortValue::Null) => Ordering::Equal,
        (SortValue::Null, _) => Ordering::Greater,
        (_, SortValue::Null) => Ordering::Less,
        (SortValue::Timestamp(x), SortValue::Timestamp(y)) => directed(x.cmp(y), direction),
        (SortValue::Number(x), SortValue::Number(y)) => {
            directed(x.total_cmp(y), direction)
        }
        _ => {
            let left = a.as_text().to_lowercase();
            let right = b.as_text().to_lowercase();
            directed(left.cmp(&right), direction)
        }
    }
}

/// Returns a sorted copy of `items`. The input is left untouched and equal
/// rows keep their relative order.
pub fn sort_items<T: Sortable + Clone>(items: &[T], config: &SortConfig) -> Vec<T> {
    let mut sorted = items.to_vec();
    let Some(key) = config.key() else {
        return sorted;
    };
    if config.direction() == SortDirection::None {
        return sorted;
    }

    let direction = config.direction();
    sorted.sort_by(|a, b| compare_values(&a.sort_value(key), &b.sort_value(key), direction));
    sorted
}

/// Rows matching the search box; a blank query keeps everything.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(&needle))
        .cloned()
        .collect()
}

/// Case-insensitive substring test for `Searchable` impls.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Same as [`contains_ci`] for optional fields.
pub fn contains_ci_opt(haystack: Option<&str>, needle: &str) -> bool {
    haystack.map(|h| contains_ci(h, needle)).unwrap_or(false)
}

/// Arrow shown next to a sorted column header.
pub fn sort_indicator(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => " ▲",
        SortDirection::Descending => " ▼",
        SortDirection::None => " ⇅",
    }
}

/// CSS class for the indicator span.
pub fn sort_class(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::None => "table__sort-indicator",
        _ => "table__sort-indicator table__sort-indicator--active",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn names(rows: &[Value]) -> Vec<String> {
        rows.iter()
            .map(|r| r["name"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    fn staff() -> Vec<Value> {
        vec![
            json!({"name": "carol", "age": 41, "department": {"name": "Sales"}}),
            json!({"name": "Alice", "age": 29, "department": null}),
            json!({"name": "bob", "age": 35, "department": {"name": "Ops"}}),
            json!({"name": "dave", "department": {"name": "Finance"}}),
            json!({"name": "erin", "age": 22}),
        ]
    }

    #[test]
    fn test_three_clicks_reset_to_unsorted() {
        let mut config = SortConfig::default();
        config.handle_sort("name");
        assert_eq!(config.key(), Some("name"));
        assert_eq!(config.direction(), SortDirection::Ascending);

        config.handle_sort("name");
        assert_eq!(config.direction(), SortDirection::Descending);

        config.handle_sort("name");
        assert_eq!(config, SortConfig::default());
        assert_eq!(config.key(), None);
        assert_eq!(config.direction(), SortDirection::None);
    }

    #[test]
    fn test_other_column_starts_ascending() {
        let mut config = SortConfig::by("name", SortDirection::Descending);
        config.handle_sort("age");
        assert_eq!(config.key(), Some("age"));
        assert_eq!(config.direction(), SortDirection::Ascending);
        assert_eq!(config.direction_for("name"), SortDirection::None);
        assert_eq!(config.direction_for("age"), SortDirection::Ascending);
    }

    #[test]
    fn test_by_with_none_direction_has_no_key() {
        let config = SortConfig::by("name", SortDirection::None);
        assert_eq!(config.key(), None);
    }

    #[test]
    fn test_unsorted_keeps_original_order() {
        let rows = staff();
        let sorted = sort_items(&rows, &SortConfig::default());
        assert_eq!(sorted, rows);
    }

    #[test]
    fn test_text_sort_is_case_insensitive() {
        let rows = staff();
        let asc = sort_items(&rows, &SortConfig::by("name", SortDirection::Ascending));
        assert_eq!(names(&asc), vec!["Alice", "bob", "carol", "dave", "erin"]);
    }

    #[test]
    fn test_descending_reverses_ascending_for_distinct_values() {
        let rows = staff();
        let asc = sort_items(&rows, &SortConfig::by("name", SortDirection::Ascending));
        let desc = sort_items(&asc, &SortConfig::by("name", SortDirection::Descending));
        let mut reversed = names(&asc);
        reversed.reverse();
        assert_eq!(names(&desc), reversed);
    }

    #[test]
    fn test_numbers_compare_numerically_with_missing_last() {
        let rows = staff();
        let asc = sort_items(&rows, &SortConfig::by("age", SortDirection::Ascending));
        assert_eq!(names(&asc), vec!["erin", "Alice", "bob", "carol", "dave"]);

        let desc = sort_items(&rows, &SortConfig::by("age", SortDirection::Descending));
        assert_eq!(names(&desc), vec!["carol", "bob", "Alice", "erin", "dave"]);
    }

    #[test]
    fn test_nested_path_with_null_department_sinks_both_ways() {
        let rows = staff();
        let asc = sort_items(
            &rows,
            &SortConfig::by("department.name", SortDirection::Ascending),
        );
        assert_eq!(names(&asc), vec!["dave", "bob", "carol", "Alice", "erin"]);

        let desc = sort_items(
            &rows,
            &SortConfig::by("department.name", SortDirection::Descending),
        );
        assert_eq!(names(&desc), vec!["carol", "bob", "dave", "Alice", "erin"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let rows = staff();
        let before = rows.clone();
        let _ = sort_items(&rows, &SortConfig::by("age", SortDirection::Descending));
        assert_eq!(rows, before);
    }

    #[test]
    fn test_timestamps_compare_by_instant() {
        let early = SortValue::Timestamp(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        let late = SortValue::Timestamp(Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap());
        assert_eq!(
            compare_values(&early, &late, SortDirection::Ascending),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&early, &late, SortDirection::Descending),
            Ordering::Greater
        );
    }

    #[test]
    fn test_null_policy_ignores_direction() {
        let value = SortValue::from("x");
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            assert_eq!(
                compare_values(&SortValue::Null, &value, direction),
                Ordering::Greater
            );
            assert_eq!(
                compare_values(&value, &SortValue::Null, direction),
                Ordering::Less
            );
            assert_eq!(
                compare_values(&SortValue::Null, &SortValue::Null, direction),
                Ordering::Equal
            );
        }
    }

    #[test]
    fn test_mixed_kinds_fall_back_to_text() {
        let number = SortValue::Number(10.0);
        let text = SortValue::from("9 items");
        // "10" < "9 items" as text
        assert_eq!(
            compare_values(&number, &text, SortDirection::Ascending),
            Ordering::Less
        );
    }

    #[test]
    fn test_nan_has_a_fixed_place_among_numbers() {
        let order = |input: [f64; 4]| {
            let mut values: Vec<SortValue> = input.into_iter().map(SortValue::Number).collect();
            values.sort_by(|a, b| compare_values(a, b, SortDirection::Ascending));
            values
                .iter()
                .map(|v| match v {
                    SortValue::Number(n) if n.is_nan() => "NaN".to_string(),
                    SortValue::Number(n) => n.to_string(),
                    other => other.as_text(),
                })
                .collect::<Vec<_>>()
        };
        let expected = vec!["1", "2", "3", "NaN"];
        assert_eq!(order([f64::NAN, 3.0, 1.0, 2.0]), expected);
        assert_eq!(order([2.0, 1.0, f64::NAN, 3.0]), expected);
    }

    #[test]
    fn test_lookup_path() {
        let row = json!({"a": {"b": {"c": 3}}, "n": null});
        assert_eq!(lookup_path(&row, "a.b.c"), Some(&json!(3)));
        assert_eq!(lookup_path(&row, "a.x.c"), None);
        assert_eq!(lookup_path(&row, "n.name"), None);
        assert_eq!(lookup_path(&row, "n"), None);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(SortValue::from(None::<String>), SortValue::Null);
        assert_eq!(SortValue::from(Some(3_i64)), SortValue::Number(3.0));
        assert_eq!(SortValue::from(true), SortValue::Number(1.0));
    }

    #[derive(Clone)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.0, filter)
        }
    }

    #[test]
    fn test_filter_list() {
        let rows = vec![Row("Red Shirt"), Row("Blue Cap"), Row("red scarf")];
        assert_eq!(filter_list(&rows, "  RED ").len(), 2);
        assert_eq!(filter_list(&rows, "").len(), 3);
        assert!(filter_list(&rows, "green").is_empty());
    }

    #[test]
    fn test_indicator() {
        assert_eq!(sort_indicator(SortDirection::Ascending), " ▲");
        assert_eq!(sort_indicator(SortDirection::None), " ⇅");
        assert!(sort_class(SortDirection::Descending).contains("--active"));
    }
}
