use contracts::domain::a003_theme::{is_hex_color, StoreTheme, StoreThemeInput};
use contracts::domain::common::non_empty;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_theme::api;
use crate::shared::components::{FormField, FormModal};
use crate::system::auth::context::{handle_api_error, use_auth};

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeDraft {
    pub name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
}

impl Default for ThemeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            primary_color: "#2563eb".to_string(),
            secondary_color: String::new(),
            font_family: String::new(),
        }
    }
}

impl ThemeDraft {
    pub fn from_theme(theme: Option<&StoreTheme>) -> Self {
        match theme {
            Some(t) => Self {
                name: t.name.clone(),
                primary_color: t.primary_color.clone(),
                secondary_color: t.secondary_color.clone().unwrap_or_default(),
                font_family: t.font_family.clone().unwrap_or_default(),
            },
            None => Self::default(),
        }
    }

    pub fn to_input(&self) -> Result<StoreThemeInput, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".into());
        }
        let primary = self.primary_color.trim();
        if !is_hex_color(primary) {
            return Err("Primary colour must look like #1a2b3c".into());
        }
        let secondary = non_empty(&self.secondary_color);
        if let Some(color) = secondary.as_deref() {
            if !is_hex_color(color) {
                return Err("Secondary colour must look like #1a2b3c".into());
            }
        }
        Ok(StoreThemeInput {
            name: name.to_string(),
            primary_color: primary.to_lowercase(),
            secondary_color: secondary.map(|c| c.to_lowercase()),
            font_family: non_empty(&self.font_family),
        })
    }
}

#[component]
pub fn ThemeDetails(
    theme: Option<StoreTheme>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let draft = ThemeDraft::from_theme(theme.as_ref());
    let id = theme.map(|t| t.id);
    let title = if id.is_some() { "Edit theme" } else { "New theme" };

    let name = RwSignal::new(draft.name);
    let primary_color = RwSignal::new(draft.primary_color);
    let secondary_color = RwSignal::new(draft.secondary_color);
    let font_family = RwSignal::new(draft.font_family);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let disabled = Signal::derive(move || saving.get());

    let on_save = Callback::new(move |_: ()| {
        let draft = ThemeDraft {
            name: name.get_untracked(),
            primary_color: primary_color.get_untracked(),
            secondary_color: secondary_color.get_untracked(),
            font_family: font_family.get_untracked(),
        };
        let input = match draft.to_input() {
            Ok(input) => input,
            Err(msg) => return error.set(Some(msg)),
        };

        saving.set(true);
        error.set(None);
        let id = id.clone();
        spawn_local(async move {
            let result = match id.as_deref() {
                Some(id) => api::update_theme(id, &input).await,
                None => api::create_theme(&input).await,
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    error.set(Some(handle_api_error(set_auth_state, &e)));
                    saving.set(false);
                }
            }
        });
    });

    let swatch = move |color: RwSignal<String>| {
        view! {
            <span
                class="color-swatch"
                style=move || format!("background: {};", color.get())
            ></span>
        }
    };

    view! {
        <FormModal title=title error=error saving=saving on_close=on_close on_save=on_save>
            <FormField label="Name *" value=name disabled=disabled />
            <div class="form__row">
                <FormField label="Primary colour *" value=primary_color placeholder="#2563eb" disabled=disabled />
                {swatch(primary_color)}
            </div>
            <div class="form__row">
                <FormField label="Secondary colour" value=secondary_color placeholder="#f59e0b" disabled=disabled />
                {swatch(secondary_color)}
            </div>
            <FormField label="Font family" value=font_family placeholder="Inter, sans-serif" disabled=disabled />
        </FormModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colours_are_validated_and_normalised() {
        let draft = ThemeDraft {
            name: "Summer".into(),
            primary_color: " #FFAA00 ".into(),
            ..ThemeDraft::default()
        };
        let input = draft.to_input().unwrap();
        assert_eq!(input.primary_color, "#ffaa00");
        assert_eq!(input.secondary_color, None);

        let bad = ThemeDraft {
            secondary_color: "orange".into(),
            ..draft
        };
        assert!(bad.to_input().unwrap_err().starts_with("Secondary"));
    }

    #[test]
    fn test_default_draft_needs_a_name() {
        assert_eq!(ThemeDraft::default().to_input().unwrap_err(), "Name is required");
    }
}
