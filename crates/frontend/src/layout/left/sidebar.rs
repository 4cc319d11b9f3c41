//! Sidebar with collapsible menu groups.
//!
//! On mount it fetches the user's permissions once, publishes them to the
//! shared `PermissionBootstrap` and hides items the user may not view.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::crud::CrudEntity;
use crate::shared::icons::icon;
use crate::shared::permissions::fetch_granted;
use crate::shared::services::use_services;
use crate::system::profile::page::PROFILE_TAB_KEY;
use contracts::system::permissions::{permission_code, GrantedPermissions, ACTION_VIEW};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_state::StateEntity;
use crate::domain::a002_city::CityEntity;
use crate::domain::a003_cost_center::CostCenterEntity;
use crate::domain::a004_bank_account::BankAccountEntity;
use crate::domain::a005_payment_method::PaymentMethodEntity;
use crate::domain::a006_chart_of_accounts::AccountEntity;
use crate::domain::a007_sale::SaleEntity;
use crate::domain::a008_fleet_refueling::RefuelingEntity;
use crate::domain::a009_audit_log::AuditEntity;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    key: &'static str,
    label: &'static str,
    icon: &'static str,
    /// `None`: always shown
    permission_prefix: Option<&'static str>,
}

impl MenuItem {
    fn entity<E: CrudEntity>(icon: &'static str) -> Self {
        Self {
            key: E::KEY,
            label: tab_label_for_key(E::KEY),
            icon,
            permission_prefix: Some(E::PERMISSION_PREFIX),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "cadastros",
            label: "Cadastros",
            icon: "folder-open",
            items: vec![
                MenuItem::entity::<StateEntity>("map"),
                MenuItem::entity::<CityEntity>("map-pin"),
                MenuItem::entity::<CostCenterEntity>("target"),
                MenuItem::entity::<BankAccountEntity>("bank"),
                MenuItem::entity::<PaymentMethodEntity>("credit-card"),
                MenuItem::entity::<AccountEntity>("book"),
            ],
        },
        MenuGroup {
            id: "movimentacoes",
            label: "Movimentações",
            icon: "shopping-cart",
            items: vec![
                MenuItem::entity::<SaleEntity>("shopping-cart"),
                MenuItem::entity::<RefuelingEntity>("fuel"),
            ],
        },
        MenuGroup {
            id: "sistema",
            label: "Sistema",
            icon: "shield",
            items: vec![
                MenuItem::entity::<AuditEntity>("shield"),
                MenuItem {
                    key: PROFILE_TAB_KEY,
                    label: tab_label_for_key(PROFILE_TAB_KEY),
                    icon: "user",
                    permission_prefix: None,
                },
            ],
        },
    ]
}

/// Groups with the items the user may view; groups left empty are dropped.
/// `None` means the permission fetch failed and everything is shown.
fn visible_groups(groups: Vec<MenuGroup>, granted: Option<&GrantedPermissions>) -> Vec<MenuGroup> {
    let Some(granted) = granted else {
        return groups;
    };
    groups
        .into_iter()
        .filter_map(|mut group| {
            group.items.retain(|item| match item.permission_prefix {
                Some(prefix) => granted.can(&permission_code(prefix, ACTION_VIEW)),
                None => true,
            });
            (!group.items.is_empty()).then_some(group)
        })
        .collect()
}

/// Sidebar menu state before and after the permission fetch
#[derive(Clone, Debug, PartialEq)]
enum MenuAccess {
    Loading,
    Ready(Option<GrantedPermissions>),
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let services = use_services();

    let access = RwSignal::new(MenuAccess::Loading);
    let expanded_groups = RwSignal::new(vec![
        "cadastros".to_string(),
        "movimentacoes".to_string(),
        "sistema".to_string(),
    ]);

    let client = services.client();
    let bootstrap = services.permissions();
    spawn_local(async move {
        let granted = match fetch_granted(client.as_ref()).await {
            Ok(granted) => {
                log::debug!("Sidebar: {} permission codes granted", granted.len());
                bootstrap.publish(granted.clone());
                Some(granted)
            }
            Err(e) => {
                log::warn!("Sidebar: permission fetch failed, showing every item: {}", e);
                bootstrap.publish(GrantedPermissions::empty());
                None
            }
        };
        let _ = access.try_set(MenuAccess::Ready(granted));
    });

    let groups = move || match access.get() {
        MenuAccess::Loading => Vec::new(),
        MenuAccess::Ready(granted) => visible_groups(get_menu_groups(), granted.as_ref()),
    };

    view! {
        <div class="app-sidebar__content">
            {move || groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_for_click = group_id.clone();
                let group_for_chevron = group_id.clone();
                let group_for_show = group_id;
                let items = StoredValue::new(group.items);

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_for_click.clone();
                                expanded_groups.update(move |ids| {
                                    if let Some(pos) = ids.iter().position(|x| x == &gid) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || {
                                    expanded_groups.with(|ids| ids.contains(&group_for_chevron))
                                }
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|ids| ids.contains(&group_for_show))>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|item| {
                                    let key = item.key;
                                    let label = item.label;
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|active| active.as_deref() == Some(key))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(key, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(item.icon)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
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

    fn keys(groups: &[MenuGroup]) -> Vec<&'static str> {
        groups
            .iter()
            .flat_map(|g| g.items.iter().map(|i| i.key))
            .collect()
    }

    #[test]
    fn test_items_without_view_permission_are_hidden() {
        let granted = GrantedPermissions::new(["estados.visualizar", "vendas.criar"]);
        let groups = visible_groups(get_menu_groups(), Some(&granted));

        assert_eq!(keys(&groups), vec!["a001_state", PROFILE_TAB_KEY]);
        assert!(groups.iter().all(|g| g.id != "movimentacoes"));
    }

    #[test]
    fn test_failed_fetch_shows_everything() {
        let all = get_menu_groups();
        assert_eq!(visible_groups(all.clone(), None), all);
    }

    #[test]
    fn test_every_item_has_a_title() {
        assert!(get_menu_groups()
            .iter()
            .flat_map(|g| g.items.iter())
            .all(|item| !item.label.is_empty()));
    }
}
