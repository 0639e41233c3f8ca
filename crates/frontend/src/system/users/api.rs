use contracts::system::users::{CreateStaffDto, StaffAccount, UpdateStaffDto};

use crate::shared::api_client;
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::item_path;

const COLLECTION: &str = "/api/staff";

/// The staff endpoint answers `{ "staffAccounts": [...] }`.
pub async fn fetch_staff() -> Result<Vec<StaffAccount>, ApiError> {
    api_client::get_list(COLLECTION, Some("staffAccounts")).await
}

pub async fn create_staff(dto: &CreateStaffDto) -> Result<(), ApiError> {
    api_client::post_json(COLLECTION, dto).await.map(|_| ())
}

pub async fn update_staff(dto: &UpdateStaffDto) -> Result<(), ApiError> {
    api_client::put_json(&item_path(COLLECTION, &dto.id), dto)
        .await
        .map(|_| ())
}

/// Sets a new password for another account; the old one is not required.
pub async fn reset_password(id: &str, password: &str) -> Result<(), ApiError> {
    let path = format!("{}/reset-password", item_path(COLLECTION, id));
    api_client::post_json(&path, &serde_json::json!({ "password": password }))
        .await
        .map(|_| ())
}

pub async fn delete_staff(id: &str) -> Result<(), ApiError> {
    api_client::delete(&item_path(COLLECTION, id)).await
}
