use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;

const DEBOUNCE_MS: u32 = 300;

/// Search input that reports the query after typing pauses.
///
/// Only the last keystroke inside the debounce window fires `on_search`;
/// earlier timers see a newer generation and drop out.
#[component]
pub fn SearchBar(
    on_search: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let generation = StoredValue::new(0u64);

    Effect::new(move |prev: Option<()>| {
        let value = query.get();
        if prev.is_none() {
            return;
        }
        generation.update_value(|g| *g += 1);
        let mine = generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.get_value() == mine {
                on_search.run(value);
            }
        });
    });

    view! {
        <div class="filter-panel">
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <div class="filter-panel__search">
                    {icon("search")}
                    <Input value=query placeholder=placeholder />
                </div>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| {
                        generation.update_value(|g| *g += 1);
                        query.set(String::new());
                        on_search.run(String::new());
                    }
                    disabled=Signal::derive(move || query.with(|q| q.is_empty()))
                >
                    "Clear"
                </Button>
            </Flex>
        </div>
    }
}
