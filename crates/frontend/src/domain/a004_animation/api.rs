use contracts::domain::a004_animation::{StoreAnimation, StoreAnimationInput};

use crate::shared::api_client;
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::item_path;

const COLLECTION: &str = "/api/animations";

pub async fn fetch_animations() -> Result<Vec<StoreAnimation>, ApiError> {
    api_client::get_list(COLLECTION, Some("animations")).await
}

pub async fn create_animation(input: &StoreAnimationInput) -> Result<(), ApiError> {
    api_client::post_json(COLLECTION, input).await.map(|_| ())
}

pub async fn update_animation(id: &str, input: &StoreAnimationInput) -> Result<(), ApiError> {
    api_client::put_json(&item_path(COLLECTION, id), input)
        .await
        .map(|_| ())
}

/// Switches one storefront animation on or off.
pub async fn toggle_animation(id: &str, is_enabled: bool) -> Result<(), ApiError> {
    let path = format!("{}/toggle", item_path(COLLECTION, id));
    api_client::patch_json(&path, &serde_json::json!({ "isEnabled": is_enabled }))
        .await
        .map(|_| ())
}

pub async fn delete_animation(id: &str) -> Result<(), ApiError> {
    api_client::delete(&item_path(COLLECTION, id)).await
}
