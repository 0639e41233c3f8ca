use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::layout::tabs::tab_label_for_key;

/// Query parameter holding the active tab key.
const ACTIVE_PARAM: &str = "active";

/// Opened tabs, the active one and sidebar visibility.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Opens the tab named in `?active=` (or `fallback`) and keeps the URL in
    /// sync with the active tab from then on.
    pub fn init_router_integration(&self, fallback: &str) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let key = active_from_query(&search)
            .filter(|key| !tab_label_for_key(key).is_empty())
            .unwrap_or_else(|| fallback.to_string());
        self.open_tab(&key, tab_label_for_key(&key));

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = query_for_active(&active_key);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("Opening tab '{}'", key);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    /// Closes a tab; closing the active one activates the last remaining tab.
    pub fn close_tab(&self, key: &str) {
        log::debug!("Closing tab '{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    /// Drops every tab, e.g. on sign-out.
    pub fn close_all(&self) {
        self.opened.set(Vec::new());
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Reads `active` from a `?a=b&...` query string.
pub fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(ACTIVE_PARAM).filter(|k| !k.is_empty()).cloned()
}

pub fn query_for_active(key: &str) -> String {
    let params = HashMap::from([(ACTIVE_PARAM.to_string(), key.to_string())]);
    format!("?{}", serde_qs::to_string(&params).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_from_query() {
        assert_eq!(active_from_query("?active=a002_faq").as_deref(), Some("a002_faq"));
        assert_eq!(active_from_query("?x=1&active=sys_staff").as_deref(), Some("sys_staff"));
        assert_eq!(active_from_query("?active="), None);
        assert_eq!(active_from_query(""), None);
    }

    #[test]
    fn test_query_for_active() {
        assert_eq!(query_for_active("a001_product"), "?active=a001_product");
        assert_eq!(active_from_query(&query_for_active("a005_payroll")).as_deref(), Some("a005_payroll"));
    }

    #[test]
    fn test_tab_lifecycle() {
        let owner = Owner::new();
        owner.set();

        let ctx = AppGlobalContext::new();
        ctx.open_tab("home", "Home");
        ctx.open_tab("a001_product", "Products");
        ctx.open_tab("a002_faq", "FAQ");
        ctx.open_tab("a001_product", "Products");
        assert_eq!(ctx.opened.get_untracked().len(), 3);
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a001_product"));

        ctx.close_tab("a001_product");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a002_faq"));

        ctx.close_tab("home");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a002_faq"));

        ctx.close_all();
        assert!(ctx.opened.get_untracked().is_empty());
        assert_eq!(ctx.active.get_untracked(), None);
    }
}
