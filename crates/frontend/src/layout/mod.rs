//! Application frame: top bar, collapsible sidebar and the tabbed work area.

pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;

use global_context::AppGlobalContext;
use top_header::TopHeader;

/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |   Tabs + page    |
/// +------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside
                    data-zone="left"
                    class="app-sidebar"
                    class:app-sidebar--hidden=move || !ctx.left_open.get()
                >
                    {left()}
                </aside>
                <main data-zone="center" class="app-main">
                    {center()}
                </main>
            </div>
        </div>
    }
}
