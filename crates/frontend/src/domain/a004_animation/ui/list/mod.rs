use contracts::domain::a004_animation::StoreAnimation;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_animation::api;
use crate::domain::a004_animation::ui::details::AnimationDetails;
use crate::shared::components::table::{RowActions, SortableHeaderCell, StatusBadge};
use crate::shared::components::{ConfirmDialog, PageHeader, PaginationControls, SearchBar};
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_ci, contains_ci_opt, Searchable, SortConfig, SortDirection, SortValue, Sortable,
};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::preferences::use_animations;
use crate::shared::table_state::use_table;
use crate::system::auth::context::{handle_api_error, use_auth};

impl Sortable for StoreAnimation {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "name" => self.name.as_str().into(),
            "type" => self.animation_type.as_str().into(),
            "target" => self.target.as_deref().into(),
            "duration_ms" => self.duration_ms.into(),
            "is_enabled" => self.is_enabled.into(),
            "updated_at" => self.updated_at.into(),
            _ => SortValue::Null,
        }
    }
}

impl Searchable for StoreAnimation {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || contains_ci(&self.animation_type, filter)
            || contains_ci_opt(self.target.as_deref(), filter)
    }
}

fn duration_label(duration_ms: Option<u32>) -> String {
    match duration_ms {
        Some(ms) if ms >= 1000 => format!("{:.1} s", f64::from(ms) / 1000.0),
        Some(ms) => format!("{} ms", ms),
        None => "-".to_string(),
    }
}

#[component]
pub fn AnimationList() -> impl IntoView {
    let table = use_table::<StoreAnimation>(SortConfig::by("name", SortDirection::Ascending));
    let settings = use_animations();
    let (_, set_auth_state) = use_auth();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let editing: RwSignal<Option<Option<StoreAnimation>>> = RwSignal::new(None);
    let deleting: RwSignal<Option<StoreAnimation>> = RwSignal::new(None);
    let delete_busy = RwSignal::new(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_animations().await {
                Ok(items) => table.set_items(items),
                Err(e) => set_error.set(Some(handle_api_error(set_auth_state, &e))),
            }
            set_loading.set(false);
        });
    };
    load_data();

    let toggle_enabled = move |animation: StoreAnimation| {
        let next = !animation.is_enabled;
        spawn_local(async move {
            match api::toggle_animation(&animation.id, next).await {
                Ok(()) => table.items.update(|items| {
                    if let Some(item) = items.iter_mut().find(|a| a.id == animation.id) {
                        item.is_enabled = next;
                    }
                }),
                Err(e) => set_error.set(Some(handle_api_error(set_auth_state, &e))),
            }
        });
    };

    let confirm_delete = move |_: ()| {
        let Some(animation) = deleting.get_untracked() else {
            return;
        };
        delete_busy.set(true);
        spawn_local(async move {
            match api::delete_animation(&animation.id).await {
                Ok(()) => table.remove_where(|a| a.id == animation.id),
                Err(e) => set_error.set(Some(handle_api_error(set_auth_state, &e))),
            }
            delete_busy.set(false);
            deleting.set(None);
        });
    };

    let on_sort = Callback::new(move |key: String| table.handle_sort(&key));
    let direction = move |key: &'static str| Signal::derive(move || table.sort_direction(key));

    view! {
        <PageFrame page_id="a004_animation--list" category=PAGE_CAT_LIST>
            <PageHeader title="Animations" count=table.total_rows>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    " New"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <Show when=move || !settings.enabled.get()>
                    <div class="alert alert--info">
                        "Dashboard animations are turned off. Storefront animations below are not affected."
                    </div>
                </Show>
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="list-toolbar">
                    <SearchBar
                        placeholder="Name, type or target..."
                        on_search=Callback::new(move |q: String| table.set_search(q))
                    />
                    <PaginationControls
                        current_page=table.current_page
                        total_pages=table.total_pages
                        total_rows=table.total_rows
                        rows_per_page=table.rows_per_page
                        on_page_change=Callback::new(move |p| table.handle_page_change(p))
                        on_rows_per_page_change=Callback::new(move |n| table.handle_rows_per_page_change(n))
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:id="a004-animation-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Name" sort_key="name" direction=direction("name") on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Type" sort_key="type" direction=direction("type") on_sort=on_sort min_width=90.0 />
                                <SortableHeaderCell label="Target" sort_key="target" direction=direction("target") on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Duration" sort_key="duration_ms" direction=direction("duration_ms") on_sort=on_sort min_width=90.0 align="right" />
                                <SortableHeaderCell label="Status" sort_key="is_enabled" direction=direction("is_enabled") on_sort=on_sort min_width=100.0 />
                                <SortableHeaderCell label="Updated" sort_key="updated_at" direction=direction("updated_at") on_sort=on_sort min_width=110.0 />
                                <TableHeaderCell resizable=false min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || table.paginated_data.get().into_iter().map(|animation| {
                                let for_edit = animation.clone();
                                let for_delete = animation.clone();
                                let for_toggle = animation.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span style="font-weight: 500;">{animation.name.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <code>{animation.animation_type.clone()}</code>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{animation.target.clone().unwrap_or_default()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <div style="text-align: right; width: 100%;">{duration_label(animation.duration_ms)}</div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <button
                                                    class="badge-button"
                                                    title="Click to enable or disable"
                                                    on:click=move |_| toggle_enabled(for_toggle.clone())
                                                >
                                                    <StatusBadge active=animation.is_enabled on_label="Enabled" off_label="Disabled" />
                                                </button>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date_opt(animation.updated_at.as_ref())}</TableCellLayout>
                                        </TableCell>
                                        <RowActions
                                            on_edit=Callback::new(move |_| editing.set(Some(Some(for_edit.clone()))))
                                            on_delete=Callback::new(move |_| deleting.set(Some(for_delete.clone())))
                                        />
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && table.total_rows.get() == 0>
                        <div class="table__empty">"No animations found."</div>
                    </Show>
                </div>
            </div>

            {move || editing.get().map(|animation| view! {
                <AnimationDetails
                    animation=animation
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        load_data();
                    })
                />
            })}

            {move || deleting.get().map(|animation| view! {
                <ConfirmDialog
                    title="Delete animation"
                    message=format!("Delete \"{}\"?", animation.name)
                    busy=delete_busy
                    on_confirm=Callback::new(confirm_delete)
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{filter_list, sort_items};
    use serde_json::json;

    fn animations() -> Vec<StoreAnimation> {
        serde_json::from_value(json!([
            {"id": "1", "name": "Hero fade", "type": "fade", "durationMs": 600, "isEnabled": true},
            {"id": "2", "name": "Cart bounce", "type": "bounce", "target": ".cart-icon", "durationMs": 1500},
            {"id": "3", "name": "Promo slide", "type": "slide"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_duration_label() {
        assert_eq!(duration_label(Some(250)), "250 ms");
        assert_eq!(duration_label(Some(1500)), "1.5 s");
        assert_eq!(duration_label(None), "-");
    }

    #[test]
    fn test_sort_by_duration_puts_missing_last() {
        let sorted = sort_items(&animations(), &SortConfig::by("duration_ms", SortDirection::Ascending));
        let ids: Vec<_> = sorted.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_search_matches_target_selector() {
        let hits = filter_list(&animations(), "cart-icon");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }
}
