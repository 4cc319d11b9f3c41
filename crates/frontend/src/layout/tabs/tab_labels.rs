//! Tab titles by tab key.
//!
//! List pages reuse the `TITLE` of their entity; the tests keep both in step.

use crate::system::profile::page::PROFILE_TAB_KEY;

/// Readable title of a tab; `""` for keys no page is registered for
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Cadastros ─────────────────────────────────────────────────────
        "a001_state" => "Estados",
        "a002_city" => "Cidades",
        "a003_cost_center" => "Centros de custo",
        "a004_bank_account" => "Contas bancárias",
        "a005_payment_method" => "Formas de pagamento",
        "a006_chart_of_accounts" => "Plano de contas",

        // ── Movimentações ─────────────────────────────────────────────────
        "a007_sale" => "Vendas",
        "a008_fleet_refueling" => "Abastecimentos",

        // ── Sistema ───────────────────────────────────────────────────────
        "a009_audit_log" => "Auditoria",
        PROFILE_TAB_KEY => "Meu perfil",

        _ => "",
    }
}
