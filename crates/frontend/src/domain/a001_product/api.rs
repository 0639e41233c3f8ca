use contracts::domain::a001_product::{Product, ProductInput};

use crate::shared::api_client;
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::item_path;

const COLLECTION: &str = "/api/products";

pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    api_client::get_list(COLLECTION, Some("products")).await
}

pub async fn fetch_product(id: &str) -> Result<Product, ApiError> {
    api_client::get_one(&item_path(COLLECTION, id), Some("product")).await
}

pub async fn create_product(input: &ProductInput) -> Result<(), ApiError> {
    api_client::post_json(COLLECTION, input).await.map(|_| ())
}

pub async fn update_product(id: &str, input: &ProductInput) -> Result<(), ApiError> {
    api_client::put_json(&item_path(COLLECTION, id), input)
        .await
        .map(|_| ())
}

pub async fn delete_product(id: &str) -> Result<(), ApiError> {
    api_client::delete(&item_path(COLLECTION, id)).await
}
