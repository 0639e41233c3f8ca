use contracts::domain::common::non_empty;
use contracts::system::users::{CreateStaffDto, StaffAccount, UpdateStaffDto, STAFF_ROLES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_error::ApiError;
use crate::shared::components::{FormField, FormModal, FormSelect};
use crate::system::auth::context::{handle_api_error, use_auth};
use crate::system::users::api;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct StaffDraft {
    pub username: String,
    /// Required on create; on edit a non-blank value resets the password.
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub department_id: String,
    pub is_active: bool,
}

impl Default for StaffDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            email: String::new(),
            full_name: String::new(),
            role: "staff".to_string(),
            department_id: String::new(),
            is_active: true,
        }
    }
}

impl StaffDraft {
    pub fn from_account(account: Option<&StaffAccount>) -> Self {
        match account {
            Some(a) => Self {
                username: a.username.clone(),
                email: a.email.clone().unwrap_or_default(),
                full_name: a.full_name.clone().unwrap_or_default(),
                role: a.role.clone(),
                department_id: a
                    .department
                    .as_ref()
                    .and_then(|d| d.id.clone())
                    .unwrap_or_default(),
                is_active: a.is_active,
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    fn check_common(&self) -> Result<(), String> {
        if !STAFF_ROLES.contains(&self.role.as_str()) {
            return Err(format!("Unknown role '{}'", self.role));
        }
        if let Some(email) = non_empty(&self.email) {
            if !email.contains('@') {
                return Err("Email address is not valid".into());
            }
        }
        Ok(())
    }

    fn check_password(password: &str) -> Result<(), String> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            ));
        }
        Ok(())
    }

    pub fn to_create(&self) -> Result<CreateStaffDto, String> {
        let username = self.username.trim();
        if username.is_empty() || username.contains(char::is_whitespace) {
            return Err("Username is required and cannot contain spaces".into());
        }
        Self::check_password(&self.password)?;
        self.check_common()?;
        Ok(CreateStaffDto {
            username: username.to_string(),
            password: self.password.clone(),
            email: non_empty(&self.email),
            full_name: non_empty(&self.full_name),
            role: self.role.clone(),
            department_id: non_empty(&self.department_id),
        })
    }

    /// Update payload plus the new password, if one was typed.
    pub fn to_update(&self, id: &str) -> Result<(UpdateStaffDto, Option<String>), String> {
        self.check_common()?;
        let new_password = if self.password.is_empty() {
            None
        } else {
            Self::check_password(&self.password)?;
            Some(self.password.clone())
        };
        let dto = UpdateStaffDto {
            id: id.to_string(),
            email: non_empty(&self.email),
            full_name: non_empty(&self.full_name),
            role: self.role.clone(),
            is_active: self.is_active,
        };
        Ok((dto, new_password))
    }
}

/// What one press of "Save" sends.
#[derive(Debug, Clone)]
pub enum StaffSave {
    Create(CreateStaffDto),
    Update {
        dto: UpdateStaffDto,
        new_password: Option<String>,
    },
}

impl StaffSave {
    pub fn plan(draft: &StaffDraft, id: Option<&str>) -> Result<Self, String> {
        match id {
            None => draft.to_create().map(StaffSave::Create),
            Some(id) => draft
                .to_update(id)
                .map(|(dto, new_password)| StaffSave::Update { dto, new_password }),
        }
    }

    async fn send(self) -> Result<(), ApiError> {
        match self {
            StaffSave::Create(dto) => api::create_staff(&dto).await,
            StaffSave::Update { dto, new_password } => {
                api::update_staff(&dto).await?;
                if let Some(password) = new_password {
                    api::reset_password(&dto.id, &password).await?;
                }
                Ok(())
            }
        }
    }
}

#[component]
pub fn StaffDetails(
    account: Option<StaffAccount>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let draft = StaffDraft::from_account(account.as_ref());
    let id = account.map(|a| a.id);
    let is_new = id.is_none();
    let title = if is_new { "New staff account" } else { "Edit staff account" };

    let username = RwSignal::new(draft.username);
    let password = RwSignal::new(draft.password);
    let email = RwSignal::new(draft.email);
    let full_name = RwSignal::new(draft.full_name);
    let role = RwSignal::new(draft.role);
    let department_id = RwSignal::new(draft.department_id);
    let is_active = RwSignal::new(draft.is_active);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let disabled = Signal::derive(move || saving.get());

    let on_save = Callback::new(move |_: ()| {
        let draft = StaffDraft {
            username: username.get_untracked(),
            password: password.get_untracked(),
            email: email.get_untracked(),
            full_name: full_name.get_untracked(),
            role: role.get_untracked(),
            department_id: department_id.get_untracked(),
            is_active: is_active.get_untracked(),
        };
        let plan = match StaffSave::plan(&draft, id.as_deref()) {
            Ok(plan) => plan,
            Err(msg) => return error.set(Some(msg)),
        };

        saving.set(true);
        error.set(None);
        spawn_local(async move {
            match plan.send().await {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    error.set(Some(handle_api_error(set_auth_state, &e)));
                    saving.set(false);
                }
            }
        });
    });

    let role_options = STAFF_ROLES
        .iter()
        .map(|r| (r.to_string(), r.to_string()))
        .collect::<Vec<_>>();
    let password_label = if is_new { "Password *" } else { "New password" };
    let password_hint = if is_new { "" } else { "Leave blank to keep the current password" };

    view! {
        <FormModal title=title error=error saving=saving on_close=on_close on_save=on_save>
            <FormField
                label="Username *"
                value=username
                disabled=Signal::derive(move || saving.get() || !is_new)
            />
            <FormField
                label=password_label
                value=password
                input_type=InputType::Password
                placeholder=password_hint
                disabled=disabled
            />
            <div class="form__row">
                <FormField label="Full name" value=full_name disabled=disabled />
                <FormField label="Email" value=email input_type=InputType::Email disabled=disabled />
            </div>
            <div class="form__row">
                <FormSelect label="Role *" value=role options=role_options disabled=disabled />
                <Show when=move || is_new>
                    <FormField label="Department ID" value=department_id disabled=disabled />
                </Show>
            </div>
            <Show when=move || !is_new>
                <div class="form__group">
                    <Checkbox checked=is_active label="Active" />
                </div>
            </Show>
        </FormModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_account() -> StaffDraft {
        StaffDraft {
            username: "kim".into(),
            password: "correct-horse".into(),
            email: " kim@shop.test ".into(),
            ..StaffDraft::default()
        }
    }

    #[test]
    fn test_create_requires_username_and_password() {
        let dto = new_account().to_create().unwrap();
        assert_eq!(dto.role, "staff");
        assert_eq!(dto.email.as_deref(), Some("kim@shop.test"));
        assert_eq!(dto.department_id, None);

        let mut draft = new_account();
        draft.password = "short".into();
        assert!(draft.to_create().unwrap_err().contains("at least 8"));

        let mut draft = new_account();
        draft.username = "kim lee".into();
        assert!(draft.to_create().is_err());
    }

    #[test]
    fn test_update_with_blank_password_keeps_it() {
        let mut draft = new_account();
        draft.password = String::new();
        draft.role = "manager".into();
        let (dto, new_password) = draft.to_update("s1").unwrap();
        assert_eq!(dto.id, "s1");
        assert_eq!(dto.role, "manager");
        assert_eq!(new_password, None);

        draft.password = "new-secret-1".into();
        assert_eq!(draft.to_update("s1").unwrap().1.as_deref(), Some("new-secret-1"));
    }

    #[test]
    fn test_rejects_unknown_role_and_bad_email() {
        let mut draft = new_account();
        draft.role = "owner".into();
        assert!(draft.to_create().unwrap_err().contains("owner"));

        let mut draft = new_account();
        draft.email = "not-an-email".into();
        assert!(draft.to_update("s1").is_err());
    }

    #[test]
    fn test_plan_picks_create_or_update() {
        assert!(matches!(
            StaffSave::plan(&new_account(), None),
            Ok(StaffSave::Create(_))
        ));
        assert!(matches!(
            StaffSave::plan(&new_account(), Some("s1")),
            Ok(StaffSave::Update { new_password: Some(_), .. })
        ));
    }

    #[test]
    fn test_update_body_omits_id() {
        let (dto, _) = new_account().to_update("s1").unwrap();
        let body = serde_json::to_value(&dto).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["isActive"], true);
    }
}
