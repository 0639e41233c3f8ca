use contracts::system::users::StaffAccount;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::table::{RowActions, SortableHeaderCell, StatusBadge};
use crate::shared::components::{ConfirmDialog, PageHeader, PaginationControls, SearchBar};
use crate::shared::date_utils::{format_date_opt, format_datetime_opt};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_ci, contains_ci_opt, Searchable, SortConfig, SortDirection, SortValue, Sortable,
};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::shared::table_state::use_table;
use crate::system::auth::context::{handle_api_error, use_auth};
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api;
use crate::system::users::ui::details::StaffDetails;

impl Sortable for StaffAccount {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "username" => self.username.as_str().into(),
            "full_name" => self.full_name.as_deref().into(),
            "email" => self.email.as_deref().into(),
            "role" => self.role.as_str().into(),
            "department.name" => self.department.as_ref().map(|d| d.name.as_str()).into(),
            "is_active" => self.is_active.into(),
            "created_at" => self.created_at.into(),
            "last_login_at" => self.last_login_at.into(),
            _ => SortValue::Null,
        }
    }
}

impl Searchable for StaffAccount {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.username, filter)
            || contains_ci_opt(self.full_name.as_deref(), filter)
            || contains_ci_opt(self.email.as_deref(), filter)
            || contains_ci(&self.role, filter)
    }
}

fn role_class(role: &str) -> &'static str {
    match role {
        "admin" => "badge badge--danger",
        "manager" => "badge badge--info",
        _ => "badge badge--neutral",
    }
}

/// Staff accounts are managed by administrators only.
#[component]
pub fn StaffList() -> impl IntoView {
    view! {
        <RequireAdmin>
            <StaffTable />
        </RequireAdmin>
    }
}

#[component]
fn StaffTable() -> impl IntoView {
    let table = use_table::<StaffAccount>(SortConfig::by("username", SortDirection::Ascending));
    let (auth_state, set_auth_state) = use_auth();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let editing: RwSignal<Option<Option<StaffAccount>>> = RwSignal::new(None);
    let deleting: RwSignal<Option<StaffAccount>> = RwSignal::new(None);
    let delete_busy = RwSignal::new(false);

    let current_user_id =
        move || auth_state.with(|s| s.user_info.as_ref().map(|u| u.id.clone()));

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_staff().await {
                Ok(items) => table.set_items(items),
                Err(e) => set_error.set(Some(handle_api_error(set_auth_state, &e))),
            }
            set_loading.set(false);
        });
    };
    load_data();

    let request_delete = move |account: StaffAccount| {
        if current_user_id().as_deref() == Some(account.id.as_str()) {
            set_error.set(Some("You cannot delete your own account.".to_string()));
            return;
        }
        deleting.set(Some(account));
    };

    let confirm_delete = move |_: ()| {
        let Some(account) = deleting.get_untracked() else {
            return;
        };
        delete_busy.set(true);
        spawn_local(async move {
            match api::delete_staff(&account.id).await {
                Ok(()) => table.remove_where(|a| a.id == account.id),
                Err(e) => set_error.set(Some(handle_api_error(set_auth_state, &e))),
            }
            delete_busy.set(false);
            deleting.set(None);
        });
    };

    let on_sort = Callback::new(move |key: String| table.handle_sort(&key));
    let direction = move |key: &'static str| Signal::derive(move || table.sort_direction(key));

    view! {
        <PageFrame page_id="sys_staff--list" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Staff" count=table.total_rows>
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
                        placeholder="Username, name, email or role..."
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
                    <Table attr:id="sys-staff-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Username" sort_key="username" direction=direction("username") on_sort=on_sort min_width=130.0 />
                                <SortableHeaderCell label="Full name" sort_key="full_name" direction=direction("full_name") on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Email" sort_key="email" direction=direction("email") on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Role" sort_key="role" direction=direction("role") on_sort=on_sort min_width=90.0 />
                                <SortableHeaderCell label="Department" sort_key="department.name" direction=direction("department.name") on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Status" sort_key="is_active" direction=direction("is_active") on_sort=on_sort min_width=90.0 />
                                <SortableHeaderCell label="Created" sort_key="created_at" direction=direction("created_at") on_sort=on_sort min_width=100.0 />
                                <SortableHeaderCell label="Last login" sort_key="last_login_at" direction=direction("last_login_at") on_sort=on_sort min_width=130.0 />
                                <TableHeaderCell resizable=false min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || table.paginated_data.get().into_iter().map(|account| {
                                let for_edit = account.clone();
                                let for_delete = account.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="font-weight: 500;">{account.username.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{account.full_name.clone().unwrap_or_default()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{account.email.clone().unwrap_or_default()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class=role_class(&account.role)>{account.role.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {account.department.as_ref().map(|d| d.name.clone()).unwrap_or_else(|| "-".to_string())}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <StatusBadge active=account.is_active on_label="Active" off_label="Blocked" />
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date_opt(account.created_at.as_ref())}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_datetime_opt(account.last_login_at.as_ref())}</TableCellLayout>
                                        </TableCell>
                                        <RowActions
                                            on_edit=Callback::new(move |_| editing.set(Some(Some(for_edit.clone()))))
                                            on_delete=Callback::new(move |_| request_delete(for_delete.clone()))
                                        />
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && table.total_rows.get() == 0>
                        <div class="table__empty">"No staff accounts found."</div>
                    </Show>
                </div>
            </div>

            {move || editing.get().map(|account| view! {
                <StaffDetails
                    account=account
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        load_data();
                    })
                />
            })}

            {move || deleting.get().map(|account| view! {
                <ConfirmDialog
                    title="Delete staff account"
                    message=format!("Delete the account \"{}\"? The user will no longer be able to sign in.", account.username)
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

    fn accounts() -> Vec<StaffAccount> {
        serde_json::from_value(json!([
            {"_id": "s1", "username": "kim", "role": "admin", "department": {"name": "Ops"}},
            {"_id": "s2", "username": "ari", "fullName": "Ari Lane", "email": "ari@shop.test"},
            {"_id": "s3", "username": "lee", "role": "manager", "isActive": false,
             "department": {"name": "Sales"}}
        ]))
        .unwrap()
    }

    #[test]
    fn test_sort_by_department_name() {
        let sorted = sort_items(&accounts(), &SortConfig::by("department.name", SortDirection::Descending));
        let ids: Vec<_> = sorted.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["s3", "s1", "s2"]);
    }

    #[test]
    fn test_search_matches_email_and_role() {
        assert_eq!(filter_list(&accounts(), "shop.test").len(), 1);
        assert_eq!(filter_list(&accounts(), "MANAGER")[0].id, "s3");
    }

    #[test]
    fn test_role_class() {
        assert_eq!(role_class("admin"), "badge badge--danger");
        assert_eq!(role_class("staff"), "badge badge--neutral");
    }
}
