use leptos::prelude::*;

use super::context::use_auth;

/// Renders `children` for administrators only.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_admin())
            fallback=|| view! {
                <div class="alert alert--warning">
                    "Access denied. Administrator rights are required for this page."
                </div>
            }
        >
            {children()}
        </Show>
    }
}
