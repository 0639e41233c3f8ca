use contracts::domain::a003_theme::{StoreTheme, StoreThemeInput};

use crate::shared::api_client;
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::item_path;

const COLLECTION: &str = "/api/store-themes";

pub async fn fetch_themes() -> Result<Vec<StoreTheme>, ApiError> {
    api_client::get_list(COLLECTION, Some("themes")).await
}

pub async fn create_theme(input: &StoreThemeInput) -> Result<(), ApiError> {
    api_client::post_json(COLLECTION, input).await.map(|_| ())
}

pub async fn update_theme(id: &str, input: &StoreThemeInput) -> Result<(), ApiError> {
    api_client::put_json(&item_path(COLLECTION, id), input)
        .await
        .map(|_| ())
}

/// Makes `id` the storefront theme; the backend deactivates the others.
pub async fn activate_theme(id: &str) -> Result<(), ApiError> {
    let path = format!("{}/activate", item_path(COLLECTION, id));
    api_client::post_json(&path, &serde_json::json!({})).await.map(|_| ())
}

pub async fn delete_theme(id: &str) -> Result<(), ApiError> {
    api_client::delete(&item_path(COLLECTION, id)).await
}

/// Local mirror of an activation: exactly `id` ends up active.
pub fn mark_active(themes: &mut [StoreTheme], id: &str) {
    for theme in themes.iter_mut() {
        theme.is_active = theme.id == id;
    }
}
