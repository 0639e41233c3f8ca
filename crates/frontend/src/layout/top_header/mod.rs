//! Top bar: sidebar toggle, title, preferences, signed-in user and logout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::preferences::AnimationToggle;
use crate::shared::theme::ThemeSelect;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();
    let logging_out = RwSignal::new(false);

    let logout = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);
        spawn_local(async move {
            do_logout(set_auth_state).await;
            logging_out.set(false);
        });
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"Shop Admin"</span>
            </div>

            <div class="top-header__actions">
                <AnimationToggle />
                <ThemeSelect />

                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || auth_state.with(|s| s.display_name())}</span>
                    <Show when=move || auth_state.with(|s| s.is_admin())>
                        <span class="badge badge--info">"admin"</span>
                    </Show>
                </div>

                <button
                    class="top-header__icon-btn"
                    on:click=logout
                    disabled=move || logging_out.get()
                    title="Sign out"
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
