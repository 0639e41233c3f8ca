use contracts::domain::a003_theme::StoreTheme;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_theme::api;
use crate::domain::a003_theme::ui::details::ThemeDetails;
use crate::shared::components::table::{RowActions, SortableHeaderCell};
use crate::shared::components::{ConfirmDialog, PageHeader, PaginationControls, SearchBar};
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_ci, contains_ci_opt, Searchable, SortConfig, SortDirection, SortValue, Sortable,
};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::table_state::use_table;
use crate::system::auth::context::{handle_api_error, use_auth};

impl Sortable for StoreTheme {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "name" => self.name.as_str().into(),
            "primary_color" => self.primary_color.as_str().into(),
            "font_family" => self.font_family.as_deref().into(),
            "is_active" => self.is_active.into(),
            "updated_at" => self.updated_at.into(),
            _ => SortValue::Null,
        }
    }
}

impl Searchable for StoreTheme {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || contains_ci(&self.primary_color, filter)
            || contains_ci_opt(self.font_family.as_deref(), filter)
    }
}

#[component]
pub fn ThemeList() -> impl IntoView {
    let table = use_table::<StoreTheme>(SortConfig::by("is_active", SortDirection::Descending));
    let (_, set_auth_state) = use_auth();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let activating = RwSignal::new(None::<String>);
    let editing: RwSignal<Option<Option<StoreTheme>>> = RwSignal::new(None);
    let deleting: RwSignal<Option<StoreTheme>> = RwSignal::new(None);
    let delete_busy = RwSignal::new(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_themes().await {
                Ok(items) => table.set_items(items),
                Err(e) => set_error.set(Some(handle_api_error(set_auth_state, &e))),
            }
            set_loading.set(false);
        });
    };
    load_data();

    let activate = move |id: String| {
        activating.set(Some(id.clone()));
        spawn_local(async move {
            match api::activate_theme(&id).await {
                Ok(()) => {
                    log::info!("Storefront theme {} activated", id);
                    table.items.update(|items| api::mark_active(items, &id));
                }
                Err(e) => set_error.set(Some(handle_api_error(set_auth_state, &e))),
            }
            activating.set(None);
        });
    };

    let confirm_delete = move |_: ()| {
        let Some(theme) = deleting.get_untracked() else {
            return;
        };
        delete_busy.set(true);
        spawn_local(async move {
            match api::delete_theme(&theme.id).await {
                Ok(()) => table.remove_where(|t| t.id == theme.id),
                Err(e) => set_error.set(Some(handle_api_error(set_auth_state, &e))),
            }
            delete_busy.set(false);
            deleting.set(None);
        });
    };

    let on_sort = Callback::new(move |key: String| table.handle_sort(&key));
    let direction = move |key: &'static str| Signal::derive(move || table.sort_direction(key));

    view! {
        <PageFrame page_id="a003_theme--list" category=PAGE_CAT_LIST>
            <PageHeader title="Storefront themes" count=table.total_rows>
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
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="list-toolbar">
                    <SearchBar
                        placeholder="Name, colour or font..."
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
                    <Table attr:id="a003-theme-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Name" sort_key="name" direction=direction("name") on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Colours" sort_key="primary_color" direction=direction("primary_color") on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Font" sort_key="font_family" direction=direction("font_family") on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="Active" sort_key="is_active" direction=direction("is_active") on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Updated" sort_key="updated_at" direction=direction("updated_at") on_sort=on_sort min_width=110.0 />
                                <TableHeaderCell resizable=false min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || table.paginated_data.get().into_iter().map(|theme| {
                                let for_edit = theme.clone();
                                let for_delete = theme.clone();
                                let id = theme.id.clone();
                                let id_busy = theme.id.clone();
                                let secondary = theme.secondary_color.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span style="font-weight: 500;">{theme.name.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="color-swatch" title=theme.primary_color.clone()
                                                    style=format!("background: {};", theme.primary_color)></span>
                                                {secondary.map(|c| view! {
                                                    <span class="color-swatch" title=c.clone() style=format!("background: {};", c)></span>
                                                })}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{theme.font_family.clone().unwrap_or_default()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {if theme.is_active {
                                                    view! { <span class="badge badge--success">"Active"</span> }.into_any()
                                                } else {
                                                    view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Secondary
                                                            on_click=move |_| activate(id.clone())
                                                            disabled=Signal::derive(move || activating.get().is_some())
                                                        >
                                                            {move || if activating.get().as_deref() == Some(id_busy.as_str()) { "Activating..." } else { "Activate" }}
                                                        </Button>
                                                    }.into_any()
                                                }}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date_opt(theme.updated_at.as_ref())}</TableCellLayout>
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
                        <div class="table__empty">"No themes yet."</div>
                    </Show>
                </div>
            </div>

            {move || editing.get().map(|theme| view! {
                <ThemeDetails
                    theme=theme
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        load_data();
                    })
                />
            })}

            {move || deleting.get().map(|theme| {
                let message = if theme.is_active {
                    format!("\"{}\" is the active storefront theme. Delete it anyway?", theme.name)
                } else {
                    format!("Delete theme \"{}\"?", theme.name)
                };
                view! {
                    <ConfirmDialog
                        title="Delete theme"
                        message=message
                        busy=delete_busy
                        on_confirm=Callback::new(confirm_delete)
                        on_cancel=Callback::new(move |_| deleting.set(None))
                    />
                }
            })}
        </PageFrame>
    }
}
