use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Department;

/// One payroll line for one staff member and one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollEntry {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub staff_id: Option<String>,
    pub employee_name: String,
    #[serde(default)]
    pub department: Option<Department>,
    /// Period in `YYYY-MM` form
    pub period: String,
    pub base_salary: f64,
    #[serde(default)]
    pub bonus: f64,
    #[serde(default)]
    pub deductions: f64,
    #[serde(default)]
    pub net_pay: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
}

impl PayrollEntry {
    /// Net pay as reported by the backend, or computed from the components
    pub fn net_amount(&self) -> f64 {
        self.net_pay
            .unwrap_or(self.base_salary + self.bonus - self.deductions)
    }

    pub fn is_paid(&self) -> bool {
        self.paid_at.is_some() || self.status.as_deref() == Some("paid")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<String>,
    pub employee_name: String,
    pub period: String,
    pub base_salary: f64,
    pub bonus: f64,
    pub deductions: f64,
}

impl From<&PayrollEntry> for PayrollInput {
    fn from(e: &PayrollEntry) -> Self {
        Self {
            staff_id: e.staff_id.clone(),
            employee_name: e.employee_name.clone(),
            period: e.period.clone(),
            base_salary: e.base_salary,
            bonus: e.bonus,
            deductions: e.deductions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(net_pay: Option<f64>) -> PayrollEntry {
        PayrollEntry {
            id: "e1".into(),
            staff_id: None,
            employee_name: "Dana".into(),
            department: None,
            period: "2026-09".into(),
            base_salary: 1000.0,
            bonus: 150.0,
            deductions: 50.0,
            net_pay,
            status: None,
            paid_at: None,
        }
    }

    #[test]
    fn test_net_amount_falls_back_to_components() {
        assert_eq!(entry(None).net_amount(), 1100.0);
        assert_eq!(entry(Some(990.0)).net_amount(), 990.0);
    }

    #[test]
    fn test_null_department_deserializes() {
        let e: PayrollEntry = serde_json::from_str(
            r#"{"id": "e2", "employeeName": "Lee", "department": null,
                "period": "2026-08", "baseSalary": 800, "status": "paid"}"#,
        )
        .unwrap();
        assert!(e.department.is_none());
        assert!(e.is_paid());
        assert_eq!(e.bonus, 0.0);
    }
}
