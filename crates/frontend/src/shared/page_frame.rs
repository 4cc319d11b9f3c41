//! PageFrame: root wrapper for every page rendered inside a tab.
//!
//! Sets two attributes on the root element:
//!   - `id`                  as `"{tab key}--{category}"`, e.g. `"a002_city--list"`
//!   - `data-page-category`  one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=page_id
            class=page_class(category)
            data-page-category=category
        >
            {children()}
        </div>
    }
}

fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_LIST), "page");
        assert_eq!(page_class(PAGE_CAT_SYSTEM), "page page--system");
    }
}
