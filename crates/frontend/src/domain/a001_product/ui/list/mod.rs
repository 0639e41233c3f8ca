use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::shared::components::table::{
    format_count, RowActions, SortableHeaderCell, StatusBadge, TableCellMoney,
};
use crate::shared::components::{ConfirmDialog, PageHeader, PaginationControls, SearchBar};
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_ci, contains_ci_opt, Searchable, SortConfig, SortDirection, SortValue, Sortable,
};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::table_state::use_table;
use crate::system::auth::context::{handle_api_error, use_auth};

impl Sortable for Product {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "name" => self.name.as_str().into(),
            "sku" => self.sku.as_deref().into(),
            "price" => self.price.into(),
            "stock" => self.stock.into(),
            "category.name" => self.category.as_ref().map(|c| c.name.as_str()).into(),
            "is_published" => self.is_published.into(),
            "created_at" => self.created_at.into(),
            "updated_at" => self.updated_at.into(),
            _ => SortValue::Null,
        }
    }
}

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || contains_ci_opt(self.sku.as_deref(), filter)
            || contains_ci_opt(self.category.as_ref().map(|c| c.name.as_str()), filter)
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let table = use_table::<Product>(SortConfig::by("updated_at", SortDirection::Descending));
    let (_, set_auth_state) = use_auth();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    // Some(None) opens the create form.
    let editing: RwSignal<Option<Option<Product>>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Product>> = RwSignal::new(None);
    let delete_busy = RwSignal::new(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(items) => {
                    log::debug!("Loaded {} products", items.len());
                    table.set_items(items);
                }
                Err(e) => set_error.set(Some(handle_api_error(set_auth_state, &e))),
            }
            set_loading.set(false);
        });
    };
    load_data();

    let confirm_delete = move |_: ()| {
        let Some(product) = deleting.get_untracked() else {
            return;
        };
        delete_busy.set(true);
        spawn_local(async move {
            match api::delete_product(&product.id).await {
                Ok(()) => table.remove_where(|p| p.id == product.id),
                Err(e) => set_error.set(Some(handle_api_error(set_auth_state, &e))),
            }
            delete_busy.set(false);
            deleting.set(None);
        });
    };

    let on_sort = Callback::new(move |key: String| table.handle_sort(&key));
    let direction = move |key: &'static str| Signal::derive(move || table.sort_direction(key));

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <PageHeader title="Products" count=table.total_rows>
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
                        placeholder="Name, SKU or category..."
                        on_search=Callback::new(move |q: String| table.set_search(q))
                    />
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| table.clear_sort()
                        disabled=Signal::derive(move || !table.is_sorted())
                    >
                        "Reset sort"
                    </Button>
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
                    <Table attr:id="a001-product-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Name" sort_key="name" direction=direction("name") on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="SKU" sort_key="sku" direction=direction("sku") on_sort=on_sort />
                                <SortableHeaderCell label="Category" sort_key="category.name" direction=direction("category.name") on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="Price" sort_key="price" direction=direction("price") on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Stock" sort_key="stock" direction=direction("stock") on_sort=on_sort align="right" min_width=80.0 />
                                <SortableHeaderCell label="Status" sort_key="is_published" direction=direction("is_published") on_sort=on_sort min_width=90.0 />
                                <SortableHeaderCell label="Updated" sort_key="updated_at" direction=direction("updated_at") on_sort=on_sort min_width=110.0 />
                                <TableHeaderCell resizable=false min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || table.paginated_data.get().into_iter().map(|product| {
                                let for_edit = product.clone();
                                let for_delete = product.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span style="font-weight: 500;">{product.name.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{product.sku.clone().unwrap_or_default()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {product.category.as_ref().map(|c| c.name.clone()).unwrap_or_default()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCellMoney value=product.price color_by_sign=false />
                                        <TableCell>
                                            <TableCellLayout>
                                                {product.stock.map(format_count).unwrap_or_else(|| "-".to_string())}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <StatusBadge active=product.is_published on_label="Published" off_label="Draft" />
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date_opt(product.updated_at.as_ref())}</TableCellLayout>
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
                        <div class="table__empty">"No products found."</div>
                    </Show>
                </div>
            </div>

            {move || editing.get().map(|product| view! {
                <ProductDetails
                    product=product
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        load_data();
                    })
                />
            })}

            {move || deleting.get().map(|product| view! {
                <ConfirmDialog
                    title="Delete product"
                    message=format!("Delete \"{}\"? This cannot be undone.", product.name)
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

    fn products() -> Vec<Product> {
        serde_json::from_value(json!([
            {"id": "1", "name": "Tea", "price": 4.5, "stock": 10, "category": {"name": "Drinks"}},
            {"id": "2", "name": "apple", "price": 1.0, "sku": "APL-1"},
            {"id": "3", "name": "Bread", "price": 2.25, "stock": 0, "category": {"name": "Bakery"}}
        ]))
        .unwrap()
    }

    fn ids(items: &[Product]) -> Vec<&str> {
        items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_sort_by_price_and_name() {
        let items = products();
        let by_price = sort_items(&items, &SortConfig::by("price", SortDirection::Ascending));
        assert_eq!(ids(&by_price), ["2", "3", "1"]);

        let by_name = sort_items(&items, &SortConfig::by("name", SortDirection::Ascending));
        assert_eq!(ids(&by_name), ["2", "3", "1"]);
    }

    #[test]
    fn test_missing_category_and_stock_sort_last() {
        let items = products();
        for dir in [SortDirection::Ascending, SortDirection::Descending] {
            let sorted = sort_items(&items, &SortConfig::by("category.name", dir));
            assert_eq!(sorted.last().map(|p| p.id.as_str()), Some("2"));
            let sorted = sort_items(&items, &SortConfig::by("stock", dir));
            assert_eq!(sorted.last().map(|p| p.id.as_str()), Some("2"));
        }
    }

    #[test]
    fn test_search_matches_sku_and_category() {
        let items = products();
        assert_eq!(ids(&filter_list(&items, "apl")), ["2"]);
        assert_eq!(ids(&filter_list(&items, "BAKERY")), ["3"]);
        assert_eq!(filter_list(&items, "").len(), 3);
    }
}
