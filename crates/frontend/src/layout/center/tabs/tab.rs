use leptos::ev;
use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::tab_icon_for_key;
use crate::shared::icons::icon;

/// Tab strip button: click activates, the cross closes.
#[component]
pub fn Tab(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| {
        tabs_store.active.with(|a| a.as_deref() == Some(key.get_value().as_str()))
    });

    let on_click = move |_| tabs_store.activate_tab(&key.get_value());
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key.get_value());
    };

    view! {
        <div class="tab" class:tab--active=is_active on:click=on_click>
            {icon(tab_icon_for_key(&tab.key))}
            <span class="tab__title">{tab.title}</span>
            <button class="tab__close" title="Close" on:click=on_close>
                {icon("x")}
            </button>
        </div>
    }
}
