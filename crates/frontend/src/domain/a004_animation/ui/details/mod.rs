use contracts::domain::a004_animation::{StoreAnimation, StoreAnimationInput, ANIMATION_TYPES};
use contracts::domain::common::non_empty;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_animation::api;
use crate::shared::components::{FormField, FormModal, FormSelect};
use crate::system::auth::context::{handle_api_error, use_auth};

/// Longest duration accepted by the storefront renderer.
const MAX_DURATION_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDraft {
    pub name: String,
    pub animation_type: String,
    pub target: String,
    pub duration_ms: String,
    pub is_enabled: bool,
}

impl Default for AnimationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            animation_type: ANIMATION_TYPES[0].to_string(),
            target: String::new(),
            duration_ms: "300".to_string(),
            is_enabled: true,
        }
    }
}

impl AnimationDraft {
    pub fn from_animation(animation: Option<&StoreAnimation>) -> Self {
        match animation {
            Some(a) => Self {
                name: a.name.clone(),
                animation_type: a.animation_type.clone(),
                target: a.target.clone().unwrap_or_default(),
                duration_ms: a.duration_ms.map(|d| d.to_string()).unwrap_or_default(),
                is_enabled: a.is_enabled,
            },
            None => Self::default(),
        }
    }

    pub fn to_input(&self) -> Result<StoreAnimationInput, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".into());
        }
        if !ANIMATION_TYPES.contains(&self.animation_type.as_str()) {
            return Err(format!("Unknown animation type '{}'", self.animation_type));
        }
        let duration_ms = match self.duration_ms.trim() {
            "" => None,
            s => match s.parse::<u32>() {
                Ok(ms) if ms <= MAX_DURATION_MS => Some(ms),
                _ => return Err(format!("Duration must be 0-{} ms", MAX_DURATION_MS)),
            },
        };
        Ok(StoreAnimationInput {
            name: name.to_string(),
            animation_type: self.animation_type.clone(),
            target: non_empty(&self.target),
            duration_ms,
            is_enabled: self.is_enabled,
        })
    }
}

#[component]
pub fn AnimationDetails(
    animation: Option<StoreAnimation>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let draft = AnimationDraft::from_animation(animation.as_ref());
    let id = animation.map(|a| a.id);
    let title = if id.is_some() { "Edit animation" } else { "New animation" };

    let name = RwSignal::new(draft.name);
    let animation_type = RwSignal::new(draft.animation_type);
    let target = RwSignal::new(draft.target);
    let duration_ms = RwSignal::new(draft.duration_ms);
    let is_enabled = RwSignal::new(draft.is_enabled);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let disabled = Signal::derive(move || saving.get());

    let on_save = Callback::new(move |_: ()| {
        let draft = AnimationDraft {
            name: name.get_untracked(),
            animation_type: animation_type.get_untracked(),
            target: target.get_untracked(),
            duration_ms: duration_ms.get_untracked(),
            is_enabled: is_enabled.get_untracked(),
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
                Some(id) => api::update_animation(id, &input).await,
                None => api::create_animation(&input).await,
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

    let type_options = ANIMATION_TYPES
        .iter()
        .map(|t| (t.to_string(), t.to_string()))
        .collect::<Vec<_>>();

    view! {
        <FormModal title=title error=error saving=saving on_close=on_close on_save=on_save>
            <FormField label="Name *" value=name disabled=disabled />
            <div class="form__row">
                <FormSelect label="Type *" value=animation_type options=type_options disabled=disabled />
                <FormField label="Duration, ms" value=duration_ms input_type=InputType::Number disabled=disabled />
            </div>
            <FormField label="Target selector" value=target placeholder=".hero-banner" disabled=disabled />
            <div class="form__group">
                <Checkbox checked=is_enabled label="Enabled" />
            </div>
        </FormModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft_is_valid_once_named() {
        let draft = AnimationDraft {
            name: "Hero fade".into(),
            ..AnimationDraft::default()
        };
        let input = draft.to_input().unwrap();
        assert_eq!(input.animation_type, "fade");
        assert_eq!(input.duration_ms, Some(300));
        assert!(input.is_enabled);
    }

    #[test]
    fn test_rejects_unknown_type_and_long_duration() {
        let mut draft = AnimationDraft {
            name: "x".into(),
            animation_type: "spin".into(),
            ..AnimationDraft::default()
        };
        assert!(draft.to_input().unwrap_err().contains("spin"));

        draft.animation_type = "zoom".into();
        draft.duration_ms = "60000".into();
        assert!(draft.to_input().is_err());

        draft.duration_ms = String::new();
        assert_eq!(draft.to_input().unwrap().duration_ms, None);
    }
}
