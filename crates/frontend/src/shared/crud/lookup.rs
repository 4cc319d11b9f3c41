//! Select options loaded from another entity endpoint

use super::entity::{FieldDef, FieldKind, FilterDef, FilterKind, LookupDef};
use super::list_state::{PAGE_PARAM, PAGE_SIZE_PARAM};
use crate::shared::api::{call, decode, ApiClient, CrudError, Method};
use contracts::shared::ListPayload;
use serde_json::Value;
use std::collections::BTreeMap;

/// Lookups ask for one large page instead of paginating
pub const LOOKUP_PAGE_SIZE: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOption {
    pub value: String,
    pub label: String,
}

/// Options per lookup endpoint
pub type LookupOptions = BTreeMap<&'static str, Vec<LookupOption>>;

pub async fn load_options(client: &dyn ApiClient, def: &LookupDef) -> Result<Vec<LookupOption>, CrudError> {
    let path = format!(
        "{}?{}=1&{}={}",
        def.endpoint, PAGE_PARAM, PAGE_SIZE_PARAM, LOOKUP_PAGE_SIZE
    );
    let payload: ListPayload<Value> = match call(client, Method::Get, &path, None).await? {
        Some(value) if !value.is_null() => decode(value)?,
        _ => ListPayload::Bare(Vec::new()),
    };
    let page = payload.into_page(1, LOOKUP_PAGE_SIZE);
    Ok(page
        .items
        .iter()
        .filter_map(|item| option_from(item, def.label_field))
        .collect())
}

fn option_from(item: &Value, label_field: &str) -> Option<LookupOption> {
    let value = match item.get("id")? {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => return None,
    };
    let label = item
        .get(label_field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| value.clone());
    Some(LookupOption { value, label })
}

/// Every distinct lookup used by the form fields and filters of a page
pub fn lookups_of(fields: &[FieldDef], filters: &[FilterDef]) -> Vec<LookupDef> {
    let mut defs: Vec<LookupDef> = Vec::new();
    let from_fields = fields.iter().filter_map(|f| match &f.kind {
        FieldKind::Lookup(def) => Some(*def),
        _ => None,
    });
    let from_filters = filters.iter().filter_map(|f| match &f.kind {
        FilterKind::Lookup(def) => Some(*def),
        _ => None,
    });
    for def in from_fields.chain(from_filters) {
        if !defs.iter().any(|d| d.endpoint == def.endpoint) {
            defs.push(def);
        }
    }
    defs
}

/// Load all lookups; a failing one is logged and left empty
pub async fn load_all(client: &dyn ApiClient, defs: &[LookupDef]) -> LookupOptions {
    let mut options = LookupOptions::new();
    for def in defs {
        let loaded = match load_options(client, def).await {
            Ok(list) => list,
            Err(e) => {
                log::error!("Lookup {} failed: {}", def.endpoint, e);
                Vec::new()
            }
        };
        options.insert(def.endpoint, loaded);
    }
    options
}
