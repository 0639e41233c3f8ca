use leptos::prelude::*;

use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;

/// Tab strip plus the content of every opened tab.
#[component]
pub fn Tabs(tabs_store: AppGlobalContext) -> impl IntoView {
    view! {
        <div class="tabs">
            <div class="tabs__bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| view! { <TabComponent tab=tab tabs_store=tabs_store /> }
                />
            </div>
            <div class="tabs__content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                />
                <Show when=move || tabs_store.opened.with(Vec::is_empty)>
                    <div class="placeholder">"Pick a section in the menu."</div>
                </Show>
            </div>
        </div>
    }
}
