use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_error::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// Stored session is still being validated.
    pub restoring: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.user_info.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.access_token.is_some()
            && self
                .user_info
                .as_ref()
                .map(UserInfo::has_admin_rights)
                .unwrap_or(false)
    }

    pub fn display_name(&self) -> String {
        self.user_info
            .as_ref()
            .map(|u| u.full_name.clone().unwrap_or_else(|| u.username.clone()))
            .unwrap_or_default()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let has_stored_session = storage::get_access_token().is_some();
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: has_stored_session,
        ..AuthState::default()
    });

    // Try to restore session from localStorage on mount
    Effect::new(move |_| {
        if !has_stored_session {
            return;
        }
        spawn_local(async move {
            let restored = restore_session().await;
            set_auth_state.set(restored);
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Validates the stored access token, refreshing it once if the backend
/// rejects it.
async fn restore_session() -> AuthState {
    if let Some(state) = current_user_state().await {
        return state;
    }
    let Some(refresh_token) = storage::get_refresh_token() else {
        storage::clear_tokens();
        return AuthState::default();
    };
    match api::refresh_token(refresh_token).await {
        Ok(response) => {
            storage::save_access_token(&response.access_token);
            current_user_state().await.unwrap_or_else(|| {
                storage::clear_tokens();
                AuthState::default()
            })
        }
        Err(e) => {
            log::info!("Stored session expired: {}", e);
            storage::clear_tokens();
            AuthState::default()
        }
    }
}

async fn current_user_state() -> Option<AuthState> {
    match api::get_current_user().await {
        Ok(user_info) => Some(AuthState {
            access_token: storage::get_access_token(),
            user_info: Some(user_info),
            restoring: false,
        }),
        Err(e) => {
            log::debug!("Current user lookup failed: {}", e);
            None
        }
    }
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Stores the tokens of a successful login and publishes the user.
pub fn apply_login(set_auth_state: WriteSignal<AuthState>, response: LoginResponse) {
    storage::save_tokens(&response.access_token, &response.refresh_token);
    log::info!("Signed in as {}", response.user.username);
    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
        restoring: false,
    });
}

/// Drops the session locally; the login page is shown again.
pub fn end_session(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}

/// Ends the session when an API call reports it is no longer valid.
/// Returns the message for the page's error banner.
pub fn handle_api_error(set_auth_state: WriteSignal<AuthState>, error: &ApiError) -> String {
    if error.ends_session() {
        log::warn!("Session rejected by backend: {}", error);
        end_session(set_auth_state);
    } else {
        log::error!("API request failed: {}", error);
    }
    error.user_message()
}

/// Helper: Perform logout
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("Logout request failed: {}", e);
        }
    }
    end_session(set_auth_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            username: "jdoe".into(),
            full_name: None,
            email: None,
            role: Some(role.into()),
            is_admin: false,
        }
    }

    #[test]
    fn test_admin_requires_token_and_role() {
        let mut state = AuthState {
            access_token: Some("t".into()),
            user_info: Some(user("admin")),
            restoring: false,
        };
        assert!(state.is_authenticated());
        assert!(state.is_admin());

        state.user_info = Some(user("staff"));
        assert!(!state.is_admin());

        state.access_token = None;
        state.user_info = Some(user("admin"));
        assert!(!state.is_admin());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        let mut info = user("staff");
        let state = AuthState {
            user_info: Some(info.clone()),
            ..AuthState::default()
        };
        assert_eq!(state.display_name(), "jdoe");

        info.full_name = Some("Jane Doe".into());
        let state = AuthState {
            user_info: Some(info),
            ..AuthState::default()
        };
        assert_eq!(state.display_name(), "Jane Doe");
    }
}
