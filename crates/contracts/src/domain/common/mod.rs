use serde::{Deserialize, Serialize};

/// Organisational unit a staff account or payroll entry belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub name: String,
}

/// Maps blank form input to `None` so optional fields are omitted on save
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" Sales "), Some("Sales".to_string()));
    }

    #[test]
    fn test_department_accepts_mongo_id() {
        let dep: Department =
            serde_json::from_str(r#"{"_id": "d1", "name": "Warehouse"}"#).unwrap();
        assert_eq!(dep.id.as_deref(), Some("d1"));
        assert_eq!(dep.name, "Warehouse");
    }
}
