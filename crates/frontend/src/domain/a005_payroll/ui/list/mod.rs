use contracts::domain::a005_payroll::PayrollEntry;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_payroll::api;
use crate::domain::a005_payroll::ui::details::PayrollDetails;
use crate::shared::components::table::{
    format_money, RowActions, SortableHeaderCell, StatusBadge, TableCellMoney, TableTotalsRow,
};
use crate::shared::components::{
    ConfirmDialog, PageHeader, PaginationControls, PeriodSelector, SearchBar,
};
use crate::shared::date_utils::format_period;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_ci, Searchable, SortConfig, SortDirection, SortValue, Sortable,
};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::table_state::use_table;
use crate::system::auth::context::{handle_api_error, use_auth};
use crate::system::auth::guard::RequireAdmin;

impl Sortable for PayrollEntry {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "employee_name" => self.employee_name.as_str().into(),
            "department.name" => self.department.as_ref().map(|d| d.name.as_str()).into(),
            "period" => self.period.as_str().into(),
            "base_salary" => self.base_salary.into(),
            "bonus" => self.bonus.into(),
            "deductions" => self.deductions.into(),
            "net_amount" => self.net_amount().into(),
            "is_paid" => self.is_paid().into(),
            _ => SortValue::Null,
        }
    }
}

impl Searchable for PayrollEntry {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.employee_name, filter)
            || self
                .department
                .as_ref()
                .is_some_and(|d| contains_ci(&d.name, filter))
            || contains_ci(&self.period, filter)
    }
}

/// Entries of one period, or all of them for `None`.
fn in_period(entries: &[PayrollEntry], period: Option<&str>) -> Vec<PayrollEntry> {
    match period {
        Some(p) => entries.iter().filter(|e| e.period == p).cloned().collect(),
        None => entries.to_vec(),
    }
}

fn total_net(entries: &[PayrollEntry]) -> f64 {
    entries.iter().map(PayrollEntry::net_amount).sum()
}

/// Payroll is visible to administrators only.
#[component]
pub fn PayrollList() -> impl IntoView {
    view! {
        <RequireAdmin>
            <PayrollTable />
        </RequireAdmin>
    }
}

#[component]
fn PayrollTable() -> impl IntoView {
    let table = use_table::<PayrollEntry>(SortConfig::by("employee_name", SortDirection::Ascending));
    let (_, set_auth_state) = use_auth();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let all_entries: RwSignal<Vec<PayrollEntry>> = RwSignal::new(Vec::new());
    let period: RwSignal<Option<String>> = RwSignal::new(None);
    let editing: RwSignal<Option<Option<PayrollEntry>>> = RwSignal::new(None);
    let deleting: RwSignal<Option<PayrollEntry>> = RwSignal::new(None);
    let delete_busy = RwSignal::new(false);

    Effect::new(move |_| {
        let rows = all_entries.with(|all| period.with(|p| in_period(all, p.as_deref())));
        table.set_items(rows);
    });

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_payroll().await {
                Ok(items) => all_entries.set(items),
                Err(e) => set_error.set(Some(handle_api_error(set_auth_state, &e))),
            }
            set_loading.set(false);
        });
    };
    load_data();

    let pay = move |entry: PayrollEntry| {
        spawn_local(async move {
            match api::mark_paid(&entry).await {
                Ok(updated) => all_entries.update(|all| {
                    if let Some(item) = all.iter_mut().find(|e| e.id == updated.id) {
                        *item = updated;
                    }
                }),
                Err(e) => set_error.set(Some(handle_api_error(set_auth_state, &e))),
            }
        });
    };

    let confirm_delete = move |_: ()| {
        let Some(entry) = deleting.get_untracked() else {
            return;
        };
        delete_busy.set(true);
        spawn_local(async move {
            match api::delete_payroll_entry(&entry.id).await {
                Ok(()) => all_entries.update(|all| all.retain(|e| e.id != entry.id)),
                Err(e) => set_error.set(Some(handle_api_error(set_auth_state, &e))),
            }
            delete_busy.set(false);
            deleting.set(None);
        });
    };

    let net_total = Signal::derive(move || table.sorted_data.with(|rows| total_net(rows)));
    let on_sort = Callback::new(move |key: String| table.handle_sort(&key));
    let direction = move |key: &'static str| Signal::derive(move || table.sort_direction(key));

    view! {
        <PageFrame page_id="a005_payroll--list" category=PAGE_CAT_LIST>
            <PageHeader title="Payroll" count=table.total_rows>
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
                        placeholder="Employee or department..."
                        on_search=Callback::new(move |q: String| table.set_search(q))
                    />
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| table.clear_sort()
                        disabled=Signal::derive(move || !table.is_sorted())
                    >
                        "Reset sort"
                    </Button>
                    <PeriodSelector value=period />
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
                    <Table attr:id="a005-payroll-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Employee" sort_key="employee_name" direction=direction("employee_name") on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Department" sort_key="department.name" direction=direction("department.name") on_sort=on_sort min_width=130.0 />
                                <SortableHeaderCell label="Period" sort_key="period" direction=direction("period") on_sort=on_sort min_width=100.0 />
                                <SortableHeaderCell label="Base" sort_key="base_salary" direction=direction("base_salary") on_sort=on_sort min_width=100.0 align="right" />
                                <SortableHeaderCell label="Bonus" sort_key="bonus" direction=direction("bonus") on_sort=on_sort min_width=90.0 align="right" />
                                <SortableHeaderCell label="Deductions" sort_key="deductions" direction=direction("deductions") on_sort=on_sort min_width=100.0 align="right" />
                                <SortableHeaderCell label="Net" sort_key="net_amount" direction=direction("net_amount") on_sort=on_sort min_width=110.0 align="right" />
                                <SortableHeaderCell label="Status" sort_key="is_paid" direction=direction("is_paid") on_sort=on_sort min_width=120.0 />
                                <TableHeaderCell resizable=false min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || table.paginated_data.get().into_iter().map(|entry| {
                                let for_edit = entry.clone();
                                let for_delete = entry.clone();
                                let for_pay = entry.clone();
                                let paid = entry.is_paid();
                                let net = entry.net_amount();
                                let (base, bonus, deductions) = (entry.base_salary, entry.bonus, entry.deductions);
                                let department = entry
                                    .department
                                    .as_ref()
                                    .map(|d| d.name.clone())
                                    .unwrap_or_else(|| "-".to_string());
                                let period_label = format_period(&entry.period);
                                let name = entry.employee_name;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span style="font-weight: 500;">{name}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {department}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{period_label}</TableCellLayout>
                                        </TableCell>
                                        <TableCellMoney value=base color_by_sign=false />
                                        <TableCellMoney value=bonus color_by_sign=false />
                                        <TableCellMoney value={-deductions} />
                                        <TableCellMoney value=net bold=true />
                                        <TableCell>
                                            <TableCellLayout>
                                                <StatusBadge active=paid on_label="Paid" off_label="Pending" />
                                                <Show when=move || !paid>
                                                    <button
                                                        class="link-button"
                                                        on:click={
                                                            let for_pay = for_pay.clone();
                                                            move |_| pay(for_pay.clone())
                                                        }
                                                    >
                                                        "Mark paid"
                                                    </button>
                                                </Show>
                                            </TableCellLayout>
                                        </TableCell>
                                        <RowActions
                                            on_edit=Callback::new(move |_| editing.set(Some(Some(for_edit.clone()))))
                                            on_delete=Callback::new(move |_| deleting.set(Some(for_delete.clone())))
                                        />
                                    </TableRow>
                                }
                            }).collect_view()}
                            <Show when=move || { table.total_rows.get() > 0 }>
                                <TableTotalsRow>
                                    <td colspan="6">{move || format!("Entries: {}", table.total_rows.get())}</td>
                                    <td class="table__cell--right">{move || format_money(net_total.get())}</td>
                                    <td colspan="2"></td>
                                </TableTotalsRow>
                            </Show>
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && table.total_rows.get() == 0>
                        <div class="table__empty">"No payroll entries found."</div>
                    </Show>
                </div>
            </div>

            {move || editing.get().map(|entry| view! {
                <PayrollDetails
                    entry=entry
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        load_data();
                    })
                />
            })}

            {move || deleting.get().map(|entry| view! {
                <ConfirmDialog
                    title="Delete payroll entry"
                    message=format!("Delete the {} entry for {}?", format_period(&entry.period), entry.employee_name)
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

    fn entries() -> Vec<PayrollEntry> {
        serde_json::from_value(json!([
            {"id": "1", "employeeName": "Dana", "department": {"name": "Sales"},
             "period": "2026-09", "baseSalary": 1000, "bonus": 200},
            {"id": "2", "employeeName": "Lee", "department": null,
             "period": "2026-09", "baseSalary": 900, "status": "paid"},
            {"id": "3", "employeeName": "Ari", "department": {"name": "Ops"},
             "period": "2026-08", "baseSalary": 1200, "deductions": 100},
            {"id": "4", "employeeName": "Kim",
             "period": "2026-08", "baseSalary": 700, "netPay": 650}
        ]))
        .unwrap()
    }

    fn ids(rows: &[PayrollEntry]) -> Vec<&str> {
        rows.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_department_sort_keeps_missing_departments_last() {
        let asc = sort_items(&entries(), &SortConfig::by("department.name", SortDirection::Ascending));
        assert_eq!(ids(&asc), ["3", "1", "2", "4"]);

        let desc = sort_items(&entries(), &SortConfig::by("department.name", SortDirection::Descending));
        assert_eq!(ids(&desc), ["1", "3", "2", "4"]);
    }

    #[test]
    fn test_net_sort_uses_reported_or_computed_amount() {
        let sorted = sort_items(&entries(), &SortConfig::by("net_amount", SortDirection::Descending));
        assert_eq!(ids(&sorted), ["1", "3", "2", "4"]);
        assert_eq!(total_net(&entries()), 1200.0 + 900.0 + 1100.0 + 650.0);
    }

    #[test]
    fn test_period_filter_and_search() {
        let september = in_period(&entries(), Some("2026-09"));
        assert_eq!(ids(&september), ["1", "2"]);
        assert_eq!(in_period(&entries(), None).len(), 4);

        let hits = filter_list(&entries(), "ops");
        assert_eq!(ids(&hits), ["3"]);
    }
}
