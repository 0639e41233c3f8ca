use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storefront colour theme. Exactly one theme is active on the shop at a time;
/// the backend enforces that when a theme is activated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreTheme {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub primary_color: String,
    #[serde(default)]
    pub secondary_color: Option<String>,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreThemeInput {
    pub name: String,
    pub primary_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl From<&StoreTheme> for StoreThemeInput {
    fn from(t: &StoreTheme) -> Self {
        Self {
            name: t.name.clone(),
            primary_color: t.primary_color.clone(),
            secondary_color: t.secondary_color.clone(),
            font_family: t.font_family.clone(),
        }
    }
}

/// Accepts `#rgb` and `#rrggbb`
pub fn is_hex_color(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#1A2b3C"));
        assert!(!is_hex_color("fff"));
        assert!(!is_hex_color("#12345"));
        assert!(!is_hex_color("#ggg"));
    }
}
