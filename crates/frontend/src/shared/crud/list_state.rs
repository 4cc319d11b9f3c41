//! Paged list + filter state of one list page. Pure data, no I/O.

use contracts::shared::{total_pages, PagedList};
use std::collections::BTreeMap;

pub const PAGE_PARAM: &str = "pagina";
pub const PAGE_SIZE_PARAM: &str = "por_pagina";

/// Everything that goes into the `GET /{entity}?...` query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: usize,
    pub page_size: usize,
    pub filters: BTreeMap<String, String>,
}

impl ListQuery {
    pub fn to_query_string(&self) -> String {
        let mut parts = vec![
            format!("{}={}", PAGE_PARAM, self.page),
            format!("{}={}", PAGE_SIZE_PARAM, self.page_size),
        ];
        parts.extend(self.filters.iter().map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        }));
        parts.join("&")
    }

    pub fn path(&self, endpoint: &str) -> String {
        format!("{}?{}", endpoint, self.to_query_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R> {
    pub items: Vec<R>,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// Only non-empty values are kept
    pub filters: BTreeMap<String, String>,
    pub loading: bool,
    /// At least one load has been applied
    pub loaded: bool,
    pub error: Option<String>,
}

impl<R> ListState<R> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
            total_items: 0,
            total_pages: 0,
            filters: BTreeMap::new(),
            loading: false,
            loaded: false,
            error: None,
        }
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            page_size: self.page_size,
            filters: self.filters.clone(),
        }
    }

    /// Highest page the user may be on; an empty list still has page 1
    pub fn max_page(&self) -> usize {
        self.total_pages.max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Empty value removes the filter. Always resets to page 1.
    pub fn set_filter(&mut self, key: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.filters.remove(key);
        } else {
            self.filters.insert(key.to_string(), value.to_string());
        }
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page = 1;
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.len()
    }

    /// `false` (no-op) on the last page
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// `false` (no-op) on page 1
    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Clamped into `1..=max_page`; `false` when the page did not change
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let target = page.clamp(1, self.max_page());
        if target == self.page {
            return false;
        }
        self.page = target;
        true
    }

    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        let page_size = page_size.max(1);
        if page_size == self.page_size {
            return false;
        }
        self.page_size = page_size;
        self.page = 1;
        true
    }

    /// Replace the current page with a server answer.
    ///
    /// `total_pages` is recomputed from `total` and the page size. Returns
    /// `true` when the current page fell out of range and was clamped, in
    /// which case the caller must load the clamped page.
    pub fn apply_page(&mut self, page: PagedList<R>) -> bool {
        self.items = page.items;
        self.total_items = page.total;
        self.total_pages = total_pages(self.total_items, self.page_size);
        self.loading = false;
        self.loaded = true;
        self.error = None;

        let clamped = self.page.clamp(1, self.max_page());
        if clamped != self.page {
            self.page = clamped;
            return true;
        }
        false
    }

    /// A failed load keeps whatever was shown before
    pub fn apply_failure(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// 1-based index of the first and last row shown; `(0, 0)` when empty
    pub fn range(&self) -> (usize, usize) {
        if self.total_items == 0 || self.items.is_empty() {
            return (0, 0);
        }
        let start = (self.page - 1) * self.page_size + 1;
        let end = (self.page * self.page_size).min(self.total_items);
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paged(total: usize, on_page: usize) -> PagedList<u32> {
        PagedList {
            items: (0..on_page as u32).collect(),
            total,
            server_total_pages: None,
        }
    }

    #[test]
    fn test_total_pages_is_recomputed() {
        let mut state = ListState::<u32>::new(20);
        let page = PagedList {
            items: vec![1],
            total: 45,
            server_total_pages: Some(99),
        };
        state.apply_page(page);
        assert_eq!(state.total_pages, 3);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut state = ListState::<u32>::new(20);
        state.apply_page(paged(45, 20));
        assert!(!state.prev_page());
        assert_eq!(state.page, 1);
        assert!(state.next_page());
        assert!(state.next_page());
        assert_eq!(state.page, 3);
        assert!(!state.next_page());
        assert_eq!(state.page, 3);
    }

    #[test]
    fn test_range_on_last_page() {
        let mut state = ListState::<u32>::new(20);
        state.page = 3;
        state.apply_page(paged(45, 5));
        assert_eq!(state.range(), (41, 45));
        assert!(!state.has_next());
        assert!(state.has_prev());
    }

    #[test]
    fn test_page_clamped_when_total_shrinks() {
        let mut state = ListState::<u32>::new(20);
        state.page = 3;
        let reload = state.apply_page(paged(25, 0));
        assert!(reload);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_empty_result_stays_on_page_one() {
        let mut state = ListState::<u32>::new(20);
        assert!(!state.apply_page(paged(0, 0)));
        assert_eq!(state.page, 1);
        assert_eq!(state.total_pages, 0);
        assert_eq!(state.range(), (0, 0));
        assert!(!state.has_next());
    }

    #[test]
    fn test_set_filter_resets_page_and_drops_empty() {
        let mut state = ListState::<u32>::new(20);
        state.page = 4;
        state.set_filter("nome", " São ");
        assert_eq!(state.page, 1);
        assert_eq!(state.filters["nome"], "São");
        state.set_filter("nome", "");
        assert!(state.filters.is_empty());
    }

    #[test]
    fn test_clear_filters_returns_to_first_page() {
        let mut state = ListState::<u32>::new(20);
        state.set_filter("nome", "São");
        state.set_filter("ativo", "true");
        state.page = 3;
        state.clear_filters();
        assert_eq!(state.active_filter_count(), 0);
        assert_eq!(state.page, 1);
        assert!(!state.query().to_query_string().contains("nome"));
    }

    #[test]
    fn test_failure_keeps_items() {
        let mut state = ListState::<u32>::new(20);
        state.apply_page(paged(2, 2));
        state.loading = true;
        state.apply_failure("falhou".into());
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.error.as_deref(), Some("falhou"));
        assert!(!state.loading);
    }

    #[test]
    fn test_query_string_is_encoded() {
        let mut state = ListState::<u32>::new(20);
        state.set_filter("nome", "São Paulo&x");
        assert_eq!(
            state.query().path("/cidades"),
            "/cidades?pagina=1&por_pagina=20&nome=S%C3%A3o%20Paulo%26x"
        );
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut state = ListState::<u32>::new(20);
        state.apply_page(paged(100, 20));
        state.go_to_page(4);
        assert!(state.set_page_size(50));
        assert_eq!(state.page, 1);
        assert!(!state.set_page_size(50));
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut state = ListState::<u32>::new(20);
        state.apply_page(paged(45, 20));
        assert!(state.go_to_page(10));
        assert_eq!(state.page, 3);
        assert!(state.go_to_page(0));
        assert_eq!(state.page, 1);
    }
}
