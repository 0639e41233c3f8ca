use leptos::prelude::*;

use crate::layout::center::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::tabs::HOME_TAB;
use crate::layout::Shell;
use crate::shared::preferences::AnimationProvider;
use crate::shared::theme::ThemeProvider;
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::pages::login::LoginPage;

/// Signed-in layout: sidebar plus tabs, with the active tab mirrored to
/// `?active=`.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    tabs_store.init_router_integration(HOME_TAB);
    on_cleanup(move || tabs_store.close_all());

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || view! { <Tabs tabs_store=tabs_store /> }.into_any()
        />
    }
}

/// Auth gate: the login page until a session exists, a loading screen while
/// a stored session is being checked.
#[component]
fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || !auth_state.with(|s| s.restoring)
            fallback=|| view! { <div class="app-loading">"Restoring session..."</div> }
        >
            <Show
                when=move || auth_state.with(|s| s.is_authenticated())
                fallback=|| view! { <LoginPage /> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    view! {
        <ThemeProvider>
            <AnimationProvider>
                <AuthProvider>
                    <AppShell />
                </AuthProvider>
            </AnimationProvider>
        </ThemeProvider>
    }
}
