//! Dashboard-wide preferences persisted on the client.
//!
//! Preferences are read once when their provider mounts and written back on
//! every change. The storage backend is injected through [`PreferenceStore`]
//! so the same load/save logic runs against `localStorage` in the browser and
//! against [`MemoryStore`] in tests.

use leptos::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const ANIMATIONS_ENABLED_KEY: &str = "admin-animations-enabled";

/// Key-value backend for preferences.
pub trait PreferenceStore: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Browser `localStorage`. Reads and writes are silently skipped when
/// storage is unavailable (private mode, disabled cookies).
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("Failed to persist preference '{}'", key);
                }
            }
            None => log::debug!("localStorage unavailable, preference '{}' not saved", key),
        }
    }
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }
}

/// Reads a boolean flag; anything other than `"true"`/`"false"` yields `default`.
pub fn load_flag(store: &dyn PreferenceStore, key: &str, default: bool) -> bool {
    match store.load(key).as_deref() {
        Some("true") => true,
        Some("false") => false,
        _ => default,
    }
}

pub fn save_flag(store: &dyn PreferenceStore, key: &str, value: bool) {
    store.save(key, if value { "true" } else { "false" });
}

/// Global "animations enabled" toggle.
#[derive(Clone)]
pub struct AnimationSettings {
    pub enabled: RwSignal<bool>,
    store: Arc<dyn PreferenceStore>,
}

impl AnimationSettings {
    /// Loads the persisted flag; animations are on by default.
    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let enabled = load_flag(store.as_ref(), ANIMATIONS_ENABLED_KEY, true);
        Self {
            enabled: RwSignal::new(enabled),
            store,
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
        save_flag(self.store.as_ref(), ANIMATIONS_ENABLED_KEY, enabled);
        log::debug!("Animations {}", if enabled { "enabled" } else { "disabled" });
    }

    pub fn toggle(&self) {
        self.set_enabled(!self.enabled.get_untracked());
    }
}

/// Provides [`AnimationSettings`] backed by `localStorage` and mirrors the
/// flag onto `<body data-animations>` for CSS.
#[component]
pub fn AnimationProvider(children: Children) -> impl IntoView {
    let settings = AnimationSettings::load(Arc::new(LocalStorageStore));
    let enabled = settings.enabled;
    provide_context(settings);

    Effect::new(move |_| {
        let value = if enabled.get() { "on" } else { "off" };
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body.set_attribute("data-animations", value);
        }
    });

    children()
}

/// Hook to use the animation settings.
pub fn use_animations() -> AnimationSettings {
    use_context::<AnimationSettings>()
        .expect("AnimationSettings not found. Wrap your app with AnimationProvider.")
}

/// Top bar button toggling animations.
#[component]
pub fn AnimationToggle() -> impl IntoView {
    let settings = use_animations();
    let enabled = settings.enabled;

    view! {
        <button
            class="top-header__icon-btn"
            class:top-header__icon-btn--active=move || enabled.get()
            on:click=move |_| settings.toggle()
            title=move || if enabled.get() { "Disable animations" } else { "Enable animations" }
        >
            {crate::shared::icons::icon("sparkles")}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_defaults_when_missing_or_garbled() {
        let store = MemoryStore::default();
        assert!(load_flag(&store, "k", true));
        assert!(!load_flag(&store, "k", false));

        store.save("k", "yes");
        assert!(load_flag(&store, "k", true));
    }

    #[test]
    fn test_flag_round_trips_through_store() {
        let store = MemoryStore::default();
        save_flag(&store, ANIMATIONS_ENABLED_KEY, false);
        assert_eq!(store.load(ANIMATIONS_ENABLED_KEY).as_deref(), Some("false"));
        assert!(!load_flag(&store, ANIMATIONS_ENABLED_KEY, true));
    }

    #[test]
    fn test_animation_settings_load_and_write_on_change() {
        let owner = Owner::new();
        owner.set();

        let store = Arc::new(MemoryStore::default());
        store.save(ANIMATIONS_ENABLED_KEY, "false");

        let settings = AnimationSettings::load(store.clone());
        assert!(!settings.enabled.get_untracked());

        settings.toggle();
        assert!(settings.enabled.get_untracked());
        assert_eq!(store.load(ANIMATIONS_ENABLED_KEY).as_deref(), Some("true"));

        settings.set_enabled(false);
        assert_eq!(store.load(ANIMATIONS_ENABLED_KEY).as_deref(), Some("false"));
    }
}
