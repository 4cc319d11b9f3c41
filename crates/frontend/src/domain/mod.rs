//! Entity descriptors, one per back-office page

pub mod a001_state;
pub mod a002_city;
pub mod a003_cost_center;
pub mod a004_bank_account;
pub mod a005_payment_method;
pub mod a006_chart_of_accounts;
pub mod a007_sale;
pub mod a008_fleet_refueling;
pub mod a009_audit_log;
