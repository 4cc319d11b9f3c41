//! Tab content registry: the one place mapping tab.key → View

use crate::domain::a001_state::StateEntity;
use crate::domain::a002_city::CityEntity;
use crate::domain::a003_cost_center::CostCenterEntity;
use crate::domain::a004_bank_account::BankAccountEntity;
use crate::domain::a005_payment_method::PaymentMethodEntity;
use crate::domain::a006_chart_of_accounts::AccountEntity;
use crate::domain::a007_sale::SaleEntity;
use crate::domain::a008_fleet_refueling::RefuelingEntity;
use crate::domain::a009_audit_log::AuditEntity;
use crate::shared::crud::entity_page;
use crate::system::profile::page::PROFILE_TAB_KEY;
use crate::system::profile::ProfilePage;
use leptos::prelude::*;

/// Content of the tab with this key, or a placeholder for unknown keys
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a001_state" => entity_page::<StateEntity>(),
        "a002_city" => entity_page::<CityEntity>(),
        "a003_cost_center" => entity_page::<CostCenterEntity>(),
        "a004_bank_account" => entity_page::<BankAccountEntity>(),
        "a005_payment_method" => entity_page::<PaymentMethodEntity>(),
        "a006_chart_of_accounts" => entity_page::<AccountEntity>(),
        "a007_sale" => entity_page::<SaleEntity>(),
        "a008_fleet_refueling" => entity_page::<RefuelingEntity>(),
        "a009_audit_log" => entity_page::<AuditEntity>(),
        PROFILE_TAB_KEY => view! { <ProfilePage /> }.into_any(),
        _ => {
            log::warn!("No page registered for tab key '{}'", key);
            let message = format!("Página não encontrada: {}", key);
            view! {
                <div class="page">
                    <div class="alert alert--error">{message}</div>
                </div>
            }
            .into_any()
        }
    }
}
