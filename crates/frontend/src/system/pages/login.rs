use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_error::ApiError;
use crate::system::auth::api;
use crate::system::auth::context::{apply_login, use_auth};

/// Banner text for a failed sign-in. Bad credentials get one generic message
/// so the form does not reveal which half was wrong.
fn login_error_message(error: &ApiError) -> String {
    match error.status() {
        Some(400) | Some(401) => "Invalid username or password.".to_string(),
        _ => error.user_message(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let disabled = Signal::derive(move || submitting.get());

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        let name = username.get_untracked().trim().to_string();
        let secret = password.get_untracked();
        if name.is_empty() || secret.is_empty() {
            error.set(Some("Enter your username and password.".into()));
            return;
        }

        submitting.set(true);
        error.set(None);
        spawn_local(async move {
            match api::login(name, secret).await {
                Ok(response) => apply_login(set_auth_state, response),
                Err(e) => {
                    log::warn!("Sign-in failed: {}", e);
                    password.set(String::new());
                    error.set(Some(login_error_message(&e)));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="login">
            <form
                class="login__card"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }
            >
                <h1 class="login__title">"Shop Admin"</h1>
                <p class="login__subtitle">"Sign in with your staff account"</p>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <Label>"Username"</Label>
                    <Input value=username disabled=disabled attr:autocomplete="username" />
                </div>
                <div class="form__group">
                    <Label>"Password"</Label>
                    <Input
                        value=password
                        input_type=InputType::Password
                        disabled=disabled
                        attr:autocomplete="current-password"
                    />
                </div>

                <button type="submit" class="btn btn--primary login__submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_credentials_share_one_message() {
        let bad_password = ApiError::from_status(401, r#"{"message": "wrong password"}"#);
        let unknown_user = ApiError::from_status(400, r#"{"error": "no such user"}"#);
        assert_eq!(login_error_message(&bad_password), login_error_message(&unknown_user));
        assert_eq!(login_error_message(&bad_password), "Invalid username or password.");
    }

    #[test]
    fn test_other_failures_use_generic_text() {
        let offline = ApiError::Network("timeout".into());
        assert_eq!(login_error_message(&offline), offline.user_message());
    }
}
