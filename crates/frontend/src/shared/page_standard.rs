//! Page category constants.
//!
//! Every page rendered inside a tab declares an HTML `id` in the format
//! `{tab key}--{category}` (e.g. `"a007_sale--list"`) and a
//! `data-page-category` with one of the constants below. The tab key is the
//! directory name under `domain/`, so the id found in the DOM inspector
//! leads straight to the descriptor.

/// List of records: table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// System page (user profile).
pub const PAGE_CAT_SYSTEM: &str = "system";

pub fn page_id(key: &str, category: &str) -> String {
    format!("{}--{}", key, category)
}

/// Validate that a page id matches the `{key}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((key, category)) => !key.is_empty() && !category.is_empty(),
        None => false,
    }
}
