//! Sidebar menu with collapsible groups.

use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{is_admin_only, tab_icon_for_key, tab_label_for_key, HOME_TAB};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// Tab keys; labels and icons come from `tab_labels`.
    items: Vec<&'static str>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "products",
            items: vec!["a001_product", "a002_faq"],
        },
        MenuGroup {
            id: "storefront",
            label: "Storefront",
            icon: "palette",
            items: vec!["a003_theme", "a004_animation"],
        },
        MenuGroup {
            id: "team",
            label: "Team",
            icon: "users",
            items: vec!["a005_payroll", "sys_staff"],
        },
    ]
}

/// Groups with the items `is_admin` may open; empty groups are dropped.
fn visible_groups(is_admin: bool) -> Vec<MenuGroup> {
    menu_groups()
        .into_iter()
        .filter_map(|mut group| {
            group.items.retain(|key| is_admin || !is_admin_only(key));
            (!group.items.is_empty()).then_some(group)
        })
        .collect()
}

#[component]
fn MenuItem(key: &'static str, ctx: AppGlobalContext) -> impl IntoView {
    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || ctx.active.with(|a| a.as_deref() == Some(key))
            on:click=move |_| ctx.open_tab(key, tab_label_for_key(key))
        >
            <div class="app-sidebar__item-content">
                {icon(tab_icon_for_key(key))}
                <span>{tab_label_for_key(key)}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();
    let is_admin = Memo::new(move |_| auth_state.with(|s| s.is_admin()));

    let expanded_groups: RwSignal<Vec<&'static str>> =
        RwSignal::new(menu_groups().iter().map(|g| g.id).collect());

    view! {
        <div class="app-sidebar__content">
            <MenuItem key=HOME_TAB ctx=ctx />
            {move || visible_groups(is_admin.get()).into_iter().map(|group| {
                let gid = group.id;
                let items = StoredValue::new(group.items.clone());
                let is_expanded = move || expanded_groups.with(|g| g.contains(&gid));
                view! {
                    <div class="app-sidebar__group">
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| expanded_groups.update(|open| {
                                if let Some(pos) = open.iter().position(|x| *x == gid) {
                                    open.remove(pos);
                                } else {
                                    open.push(gid);
                                }
                            })
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|key| view! { <MenuItem key=key ctx=ctx /> }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_do_not_see_team_group() {
        let ids: Vec<_> = visible_groups(false).iter().map(|g| g.id).collect();
        assert_eq!(ids, ["catalog", "storefront"]);
    }

    #[test]
    fn test_admins_see_everything() {
        let groups = visible_groups(true);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[2].items, ["a005_payroll", "sys_staff"]);
    }
}
