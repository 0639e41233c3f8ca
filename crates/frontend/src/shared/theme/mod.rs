//! Dashboard colour scheme.
//!
//! The chosen scheme is persisted through the same [`PreferenceStore`] as the
//! animation toggle and applied as `<body data-theme="...">`.

use leptos::prelude::*;
use std::sync::Arc;

use crate::shared::icons::icon;
use crate::shared::preferences::{LocalStorageStore, PreferenceStore};

const THEME_STORAGE_KEY: &str = "admin-theme";

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for CSS and storage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Parse theme from string; unknown values fall back to the default.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn all() -> [Theme; 2] {
        [Theme::Light, Theme::Dark]
    }
}

pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    store
        .load(THEME_STORAGE_KEY)
        .map(|s| Theme::parse(&s))
        .unwrap_or_default()
}

fn apply_theme(theme: Theme) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
    store: Arc<dyn PreferenceStore>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        self.store.save(THEME_STORAGE_KEY, theme.as_str());
        apply_theme(theme);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let store: Arc<dyn PreferenceStore> = Arc::new(LocalStorageStore);
    let initial = load_theme(store.as_ref());
    apply_theme(initial);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial),
        store,
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// ThemeSelect component for switching themes
#[component]
pub fn ThemeSelect() -> impl IntoView {
    let ctx = use_theme();
    let current = ctx.theme;
    let is_open = RwSignal::new(false);

    view! {
        <div class="theme-select-wrapper">
            <button
                class="top-header__icon-btn"
                on:click=move |_| is_open.update(|v| *v = !*v)
                title="Theme"
            >
                {icon("moon")}
            </button>

            <Show when=move || is_open.get()>
                <div class="theme-dropdown">
                    {Theme::all().into_iter().map(|theme| {
                        let ctx = ctx.clone();
                        view! {
                            <button
                                class=move || {
                                    if current.get() == theme {
                                        "theme-dropdown__item theme-dropdown__item--active"
                                    } else {
                                        "theme-dropdown__item"
                                    }
                                }
                                on:click=move |_| {
                                    ctx.set_theme(theme);
                                    is_open.set(false);
                                }
                            >
                                {theme.display_name()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::preferences::MemoryStore;

    #[test]
    fn test_load_theme() {
        let store = MemoryStore::default();
        assert_eq!(load_theme(&store), Theme::Light);
        store.save(THEME_STORAGE_KEY, "dark");
        assert_eq!(load_theme(&store), Theme::Dark);
        store.save(THEME_STORAGE_KEY, "forest");
        assert_eq!(load_theme(&store), Theme::Light);
    }
}
