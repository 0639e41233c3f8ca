use contracts::domain::a005_payroll::{PayrollEntry, PayrollInput};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_payroll::api;
use crate::shared::components::table::format_money;
use crate::shared::components::{FormField, FormModal};
use crate::shared::date_utils::{current_period, parse_period};
use crate::system::auth::context::{handle_api_error, use_auth};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayrollDraft {
    pub staff_id: Option<String>,
    pub employee_name: String,
    pub period: String,
    pub base_salary: String,
    pub bonus: String,
    pub deductions: String,
}

/// Blank means zero; anything else must be a finite, non-negative amount.
fn parse_amount(label: &str, raw: &str) -> Result<f64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(format!("{} must be a non-negative amount", label)),
    }
}

impl PayrollDraft {
    pub fn from_entry(entry: Option<&PayrollEntry>) -> Self {
        match entry {
            Some(e) => Self {
                staff_id: e.staff_id.clone(),
                employee_name: e.employee_name.clone(),
                period: e.period.clone(),
                base_salary: format!("{:.2}", e.base_salary),
                bonus: format!("{:.2}", e.bonus),
                deductions: format!("{:.2}", e.deductions),
            },
            None => Self {
                period: current_period(),
                ..Self::default()
            },
        }
    }

    pub fn to_input(&self) -> Result<PayrollInput, String> {
        let employee_name = self.employee_name.trim();
        if employee_name.is_empty() {
            return Err("Employee name is required".into());
        }
        let period = self.period.trim();
        if parse_period(period).is_none() {
            return Err("Period must look like 2024-03".into());
        }
        if self.base_salary.trim().is_empty() {
            return Err("Base salary is required".into());
        }
        Ok(PayrollInput {
            staff_id: self.staff_id.clone(),
            employee_name: employee_name.to_string(),
            period: period.to_string(),
            base_salary: parse_amount("Base salary", &self.base_salary)?,
            bonus: parse_amount("Bonus", &self.bonus)?,
            deductions: parse_amount("Deductions", &self.deductions)?,
        })
    }

    /// Net pay preview; `None` while any amount is invalid.
    pub fn net_preview(&self) -> Option<f64> {
        let base = parse_amount("", &self.base_salary).ok()?;
        let bonus = parse_amount("", &self.bonus).ok()?;
        let deductions = parse_amount("", &self.deductions).ok()?;
        Some(base + bonus - deductions)
    }
}

#[component]
pub fn PayrollDetails(
    entry: Option<PayrollEntry>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let draft = PayrollDraft::from_entry(entry.as_ref());
    let id = entry.map(|e| e.id);
    let title = if id.is_some() { "Edit payroll entry" } else { "New payroll entry" };

    let staff_id = StoredValue::new(draft.staff_id);
    let employee_name = RwSignal::new(draft.employee_name);
    let period = RwSignal::new(draft.period);
    let base_salary = RwSignal::new(draft.base_salary);
    let bonus = RwSignal::new(draft.bonus);
    let deductions = RwSignal::new(draft.deductions);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let disabled = Signal::derive(move || saving.get());

    let current_draft = move || PayrollDraft {
        staff_id: staff_id.get_value(),
        employee_name: employee_name.get_untracked(),
        period: period.get_untracked(),
        base_salary: base_salary.get_untracked(),
        bonus: bonus.get_untracked(),
        deductions: deductions.get_untracked(),
    };

    if let Some(existing_id) = id.clone() {
        spawn_local(async move {
            match api::fetch_payroll_entry(&existing_id).await {
                Ok(fresh) => {
                    let d = PayrollDraft::from_entry(Some(&fresh));
                    staff_id.set_value(d.staff_id);
                    employee_name.set(d.employee_name);
                    period.set(d.period);
                    base_salary.set(d.base_salary);
                    bonus.set(d.bonus);
                    deductions.set(d.deductions);
                }
                Err(e) => log::warn!("Could not reload payroll entry {}: {}", existing_id, e),
            }
        });
    }

    let net = move || {
        base_salary.track();
        bonus.track();
        deductions.track();
        current_draft()
            .net_preview()
            .map(format_money)
            .unwrap_or_else(|| "-".to_string())
    };

    let on_save = Callback::new(move |_: ()| {
        let input = match current_draft().to_input() {
            Ok(input) => input,
            Err(msg) => return error.set(Some(msg)),
        };

        saving.set(true);
        error.set(None);
        let id = id.clone();
        spawn_local(async move {
            let result = match id.as_deref() {
                Some(id) => api::update_payroll_entry(id, &input).await,
                None => api::create_payroll_entry(&input).await,
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    error.set(Some(handle_api_error(set_auth_state, &e)));
                    saving.set(false);
                }
            }
        });
    });

    view! {
        <FormModal title=title error=error saving=saving on_close=on_close on_save=on_save>
            <FormField label="Employee *" value=employee_name disabled=disabled />
            <FormField label="Period *" value=period placeholder="YYYY-MM" disabled=disabled />
            <div class="form__row">
                <FormField label="Base salary *" value=base_salary input_type=InputType::Number disabled=disabled />
                <FormField label="Bonus" value=bonus input_type=InputType::Number disabled=disabled />
                <FormField label="Deductions" value=deductions input_type=InputType::Number disabled=disabled />
            </div>
            <div class="form__summary">
                <Label>"Net pay"</Label>
                <span class="form__summary-value">{net}</span>
            </div>
        </FormModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> PayrollDraft {
        PayrollDraft {
            employee_name: "Dana".into(),
            period: "2026-09".into(),
            base_salary: "1000".into(),
            ..PayrollDraft::default()
        }
    }

    #[test]
    fn test_blank_bonus_and_deductions_are_zero() {
        let input = valid().to_input().unwrap();
        assert_eq!(input.base_salary, 1000.0);
        assert_eq!(input.bonus, 0.0);
        assert_eq!(input.deductions, 0.0);
    }

    #[test]
    fn test_validation_messages() {
        let mut draft = valid();
        draft.period = "Sept 2026".into();
        assert!(draft.to_input().unwrap_err().contains("Period"));

        let mut draft = valid();
        draft.deductions = "-5".into();
        assert!(draft.to_input().unwrap_err().contains("Deductions"));

        let mut draft = valid();
        draft.base_salary = " ".into();
        assert!(draft.to_input().unwrap_err().contains("Base salary"));
    }

    #[test]
    fn test_net_preview() {
        let mut draft = valid();
        draft.bonus = "150".into();
        draft.deductions = "50.5".into();
        assert_eq!(draft.net_preview(), Some(1099.5));
        draft.bonus = "abc".into();
        assert_eq!(draft.net_preview(), None);
    }
}
