use contracts::domain::a002_faq::Faq;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_faq::api;
use crate::domain::a002_faq::ui::details::FaqDetails;
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

impl Sortable for Faq {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "question" => self.question.as_str().into(),
            "category" => self.category.as_deref().into(),
            "sort_order" => self.sort_order.into(),
            "is_published" => self.is_published.into(),
            "updated_at" => self.updated_at.into(),
            _ => SortValue::Null,
        }
    }
}

impl Searchable for Faq {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.question, filter)
            || contains_ci(&self.answer, filter)
            || contains_ci_opt(self.category.as_deref(), filter)
    }
}

#[component]
pub fn FaqList() -> impl IntoView {
    let table = use_table::<Faq>(SortConfig::by("sort_order", SortDirection::Ascending));
    let (_, set_auth_state) = use_auth();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let editing: RwSignal<Option<Option<Faq>>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Faq>> = RwSignal::new(None);
    let delete_busy = RwSignal::new(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_faqs().await {
                Ok(items) => table.set_items(items),
                Err(e) => set_error.set(Some(handle_api_error(set_auth_state, &e))),
            }
            set_loading.set(false);
        });
    };
    load_data();

    let toggle_published = move |faq: Faq| {
        let next = !faq.is_published;
        spawn_local(async move {
            match api::set_faq_published(&faq.id, next).await {
                Ok(()) => table.items.update(|items| {
                    if let Some(item) = items.iter_mut().find(|f| f.id == faq.id) {
                        item.is_published = next;
                    }
                }),
                Err(e) => set_error.set(Some(handle_api_error(set_auth_state, &e))),
            }
        });
    };

    let confirm_delete = move |_: ()| {
        let Some(faq) = deleting.get_untracked() else {
            return;
        };
        delete_busy.set(true);
        spawn_local(async move {
            match api::delete_faq(&faq.id).await {
                Ok(()) => table.remove_where(|f| f.id == faq.id),
                Err(e) => set_error.set(Some(handle_api_error(set_auth_state, &e))),
            }
            delete_busy.set(false);
            deleting.set(None);
        });
    };

    let on_sort = Callback::new(move |key: String| table.handle_sort(&key));
    let direction = move |key: &'static str| Signal::derive(move || table.sort_direction(key));

    view! {
        <PageFrame page_id="a002_faq--list" category=PAGE_CAT_LIST>
            <PageHeader title="FAQ" count=table.total_rows>
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
                        placeholder="Question, answer or category..."
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
                    <Table attr:id="a002-faq-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="#" sort_key="sort_order" direction=direction("sort_order") on_sort=on_sort min_width=60.0 align="right" />
                                <SortableHeaderCell label="Question" sort_key="question" direction=direction("question") on_sort=on_sort min_width=280.0 />
                                <SortableHeaderCell label="Category" sort_key="category" direction=direction("category") on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Status" sort_key="is_published" direction=direction("is_published") on_sort=on_sort min_width=100.0 />
                                <SortableHeaderCell label="Updated" sort_key="updated_at" direction=direction("updated_at") on_sort=on_sort min_width=110.0 />
                                <TableHeaderCell resizable=false min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || table.paginated_data.get().into_iter().map(|faq| {
                                let for_edit = faq.clone();
                                let for_delete = faq.clone();
                                let for_toggle = faq.clone();
                                let (badge_class, badge_label) = if faq.is_published {
                                    ("badge badge--success", "Published")
                                } else {
                                    ("badge badge--neutral", "Hidden")
                                };
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                {faq.sort_order.map(|n| n.to_string()).unwrap_or_default()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span style="font-weight: 500;" title=faq.answer.clone()>{faq.question.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{faq.category.clone().unwrap_or_default()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <button
                                                    class=format!("{} badge--clickable", badge_class)
                                                    title="Click to publish or hide"
                                                    on:click=move |_| toggle_published(for_toggle.clone())
                                                >
                                                    {badge_label}
                                                </button>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date_opt(faq.updated_at.as_ref())}</TableCellLayout>
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
                        <div class="table__empty">"No questions found."</div>
                    </Show>
                </div>
            </div>

            {move || editing.get().map(|faq| view! {
                <FaqDetails
                    faq=faq
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        load_data();
                    })
                />
            })}

            {move || deleting.get().map(|faq| view! {
                <ConfirmDialog
                    title="Delete FAQ entry"
                    message=format!("Delete \"{}\"?", faq.question)
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

    fn faqs() -> Vec<Faq> {
        serde_json::from_value(json!([
            {"id": "a", "question": "Returns?", "answer": "Within 30 days", "sortOrder": 2, "category": "Orders"},
            {"id": "b", "question": "Shipping cost?", "answer": "Free over $50"},
            {"id": "c", "question": "Gift cards?", "answer": "Yes", "sortOrder": 1, "isPublished": true}
        ]))
        .unwrap()
    }

    #[test]
    fn test_unordered_entries_sink() {
        let sorted = sort_items(&faqs(), &SortConfig::by("sort_order", SortDirection::Descending));
        let ids: Vec<_> = sorted.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "b"]);
    }

    #[test]
    fn test_search_includes_answer_text() {
        let hits = filter_list(&faqs(), "30 days");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");
    }
}
