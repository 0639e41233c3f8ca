use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Create/edit dialog: header, error banner, form body, Cancel/Save footer.
#[component]
pub fn FormModal(
    #[prop(into)] title: String,
    error: RwSignal<Option<String>>,
    saving: RwSignal<bool>,
    on_close: Callback<()>,
    on_save: Callback<()>,
    children: Children,
) -> impl IntoView {
    let busy = Signal::derive(move || saving.get());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    {children()}
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=busy
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_save.run(())
                        disabled=busy
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

/// Labelled text input inside a [`FormModal`].
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional)] input_type: Option<InputType>,
    #[prop(optional, into)] placeholder: String,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <Label>{label}</Label>
            <Input
                value=value
                input_type=input_type.unwrap_or(InputType::Text)
                placeholder=placeholder
                disabled=disabled
            />
        </div>
    }
}

/// Native `<select>` bound to a string signal.
#[component]
pub fn FormSelect(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    options: Vec<(String, String)>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <Label>{label}</Label>
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                {options.into_iter().map(|(option_value, option_label)| {
                    let selected_value = option_value.clone();
                    view! {
                        <option value=option_value selected=move || value.get() == selected_value>
                            {option_label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
