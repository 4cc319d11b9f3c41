//! Back-office entities.
//!
//! Every module exposes the record as returned by the backend, the payload
//! DTO sent on create/update with its local validation, and the endpoint /
//! permission prefix constants.

pub mod common;

pub mod a001_state;
pub mod a002_city;
pub mod a003_cost_center;
pub mod a004_bank_account;
pub mod a005_payment_method;
pub mod a006_chart_of_accounts;
pub mod a007_sale;
pub mod a008_fleet_refueling;
pub mod a009_audit_log;
