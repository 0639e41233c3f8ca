use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Department;

/// Staff account managed from the admin dashboard.
///
/// The staff endpoint wraps its list as `{ "staffAccounts": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffAccount {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub department: Option<Department>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
}

fn default_role() -> String {
    "staff".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaffDto {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaffDto {
    #[serde(skip_serializing)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub role: String,
    pub is_active: bool,
}

/// Roles the backend accepts for staff accounts
pub const STAFF_ROLES: &[&str] = &["admin", "manager", "staff"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_sparse_account() {
        let acc: StaffAccount =
            serde_json::from_str(r#"{"_id": "s1", "username": "kim"}"#).unwrap();
        assert_eq!(acc.role, "staff");
        assert!(acc.is_active);
        assert!(acc.department.is_none());
    }

    #[test]
    fn test_update_dto_keeps_id_out_of_body() {
        let dto = UpdateStaffDto {
            id: "s1".into(),
            email: None,
            full_name: Some("Kim Lee".into()),
            role: "manager".into(),
            is_active: false,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["fullName"], "Kim Lee");
        assert_eq!(json["isActive"], false);
    }
}
