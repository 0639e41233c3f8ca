use contracts::domain::a002_faq::{Faq, FaqInput};

use crate::shared::api_client;
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::item_path;

const COLLECTION: &str = "/api/faqs";

pub async fn fetch_faqs() -> Result<Vec<Faq>, ApiError> {
    api_client::get_list(COLLECTION, Some("faqs")).await
}

pub async fn create_faq(input: &FaqInput) -> Result<(), ApiError> {
    api_client::post_json(COLLECTION, input).await.map(|_| ())
}

pub async fn update_faq(id: &str, input: &FaqInput) -> Result<(), ApiError> {
    api_client::put_json(&item_path(COLLECTION, id), input)
        .await
        .map(|_| ())
}

/// Publishes or hides one entry without sending the whole record.
pub async fn set_faq_published(id: &str, is_published: bool) -> Result<(), ApiError> {
    let body = serde_json::json!({ "isPublished": is_published });
    api_client::patch_json(&item_path(COLLECTION, id), &body)
        .await
        .map(|_| ())
}

pub async fn delete_faq(id: &str) -> Result<(), ApiError> {
    api_client::delete(&item_path(COLLECTION, id)).await
}
