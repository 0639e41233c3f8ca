use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{is_admin_only, tab_icon_for_key, tab_label_for_key};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_CUSTOM};
use crate::system::auth::context::use_auth;

const SECTIONS: &[(&str, &str)] = &[
    ("a001_product", "Catalog items, prices and stock"),
    ("a002_faq", "Questions shown on the help page"),
    ("a003_theme", "Storefront colour schemes"),
    ("a004_animation", "Storefront effects and transitions"),
    ("a005_payroll", "Monthly pay per employee"),
    ("sys_staff", "Dashboard accounts and roles"),
];

/// Sections shown on the start page for the given access level.
fn sections_for(is_admin: bool) -> Vec<(&'static str, &'static str)> {
    SECTIONS
        .iter()
        .copied()
        .filter(|(key, _)| is_admin || !is_admin_only(key))
        .collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    view! {
        <PageFrame page_id="home--dashboard" category=PAGE_CAT_CUSTOM>
            <div class="page__header">
                <h1 class="page__title">
                    {move || format!("Welcome, {}", auth_state.with(|s| s.display_name()))}
                </h1>
            </div>
            <div class="page__content home-grid">
                {move || sections_for(auth_state.with(|s| s.is_admin())).into_iter().map(|(key, hint)| view! {
                    <button class="home-card" on:click=move |_| ctx.open_tab(key, tab_label_for_key(key))>
                        <span class="home-card__icon">{icon(tab_icon_for_key(key))}</span>
                        <span class="home-card__title">{tab_label_for_key(key)}</span>
                        <span class="home-card__hint">{hint}</span>
                    </button>
                }).collect_view()}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_respect_admin_rights() {
        assert_eq!(sections_for(true).len(), SECTIONS.len());
        let staff: Vec<_> = sections_for(false).into_iter().map(|(k, _)| k).collect();
        assert!(!staff.contains(&"a005_payroll"));
        assert!(!staff.contains(&"sys_staff"));
        assert!(staff.contains(&"a001_product"));
    }
}
