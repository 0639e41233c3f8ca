use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Modal asking to confirm a destructive action.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional, default = "Delete")] confirm_label: &'static str,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal modal--small" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_cancel.run(())>
                        {icon("x")}
                    </Button>
                </div>
                <div class="modal-body">
                    <p>{message}</p>
                </div>
                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                        disabled=busy
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        class="button--danger"
                        on_click=move |_| on_confirm.run(())
                        disabled=busy
                    >
                        {move || if busy.get() { "Working..." } else { confirm_label }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
