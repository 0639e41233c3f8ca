use contracts::domain::a005_payroll::{PayrollEntry, PayrollInput};

use crate::shared::api_client;
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::item_path;

const COLLECTION: &str = "/api/payroll";

pub async fn fetch_payroll() -> Result<Vec<PayrollEntry>, ApiError> {
    api_client::get_list(COLLECTION, Some("payroll")).await
}

pub async fn fetch_payroll_entry(id: &str) -> Result<PayrollEntry, ApiError> {
    api_client::get_one(&item_path(COLLECTION, id), Some("entry")).await
}

pub async fn create_payroll_entry(input: &PayrollInput) -> Result<(), ApiError> {
    api_client::post_json(COLLECTION, input).await.map(|_| ())
}

pub async fn update_payroll_entry(id: &str, input: &PayrollInput) -> Result<(), ApiError> {
    api_client::put_json(&item_path(COLLECTION, id), input)
        .await
        .map(|_| ())
}

/// Marks an entry as paid and returns the updated record. When the backend
/// answers without one, `entry` is returned with `status = "paid"`.
pub async fn mark_paid(entry: &PayrollEntry) -> Result<PayrollEntry, ApiError> {
    let body = serde_json::json!({ "status": "paid" });
    let response = api_client::patch_json(&item_path(COLLECTION, &entry.id), &body).await?;
    let fallback = PayrollEntry {
        status: Some("paid".to_string()),
        ..entry.clone()
    };
    Ok(api_client::saved_or(&response, Some("entry"), fallback))
}

pub async fn delete_payroll_entry(id: &str) -> Result<(), ApiError> {
    api_client::delete(&item_path(COLLECTION, id)).await
}
