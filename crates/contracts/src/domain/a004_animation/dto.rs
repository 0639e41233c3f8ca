use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storefront animation (banner transitions, add-to-cart effects and so on)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreAnimation {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", alias = "animationType")]
    pub animation_type: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub duration_ms: Option<u32>,
    #[serde(default)]
    pub is_enabled: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreAnimationInput {
    pub name: String,
    #[serde(rename = "type")]
    pub animation_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,
    pub is_enabled: bool,
}

impl From<&StoreAnimation> for StoreAnimationInput {
    fn from(a: &StoreAnimation) -> Self {
        Self {
            name: a.name.clone(),
            animation_type: a.animation_type.clone(),
            target: a.target.clone(),
            duration_ms: a.duration_ms,
            is_enabled: a.is_enabled,
        }
    }
}

/// Animation kinds the storefront renderer understands
pub const ANIMATION_TYPES: &[&str] = &["fade", "slide", "zoom", "bounce", "flip"];
