//! Maps a tab key to the page it shows.

use leptos::prelude::*;

use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_faq::ui::list::FaqList;
use crate::domain::a003_theme::ui::list::ThemeList;
use crate::domain::a004_animation::ui::list::AnimationList;
use crate::domain::a005_payroll::ui::list::PayrollList;
use super::tab_labels::HOME_TAB;
use crate::system::pages::home::HomePage;
use crate::system::users::ui::list::StaffList;

/// Renders the content of the tab `key`, or a placeholder for unknown keys.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        HOME_TAB => view! { <HomePage /> }.into_any(),
        "a001_product" => view! { <ProductList /> }.into_any(),
        "a002_faq" => view! { <FaqList /> }.into_any(),
        "a003_theme" => view! { <ThemeList /> }.into_any(),
        "a004_animation" => view! { <AnimationList /> }.into_any(),
        "a005_payroll" => view! { <PayrollList /> }.into_any(),
        "sys_staff" => view! { <StaffList /> }.into_any(),
        _ => {
            log::warn!("Unknown tab type: {}", key);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    }
}
