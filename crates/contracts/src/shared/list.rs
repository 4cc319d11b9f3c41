//! Paged list payloads.
//!
//! List endpoints answer either `dados: { itens, total, total_paginas }` or
//! `dados: [ ... ]`. Both are accepted; a bare array is the whole result set
//! and gets paginated on the client.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Bare(Vec<T>),
    Paged {
        #[serde(alias = "items")]
        itens: Vec<T>,
        total: Option<u64>,
        total_paginas: Option<u64>,
    },
}

/// One page of records plus the total count across all pages
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub total: usize,
    /// Page count the server reported, kept only for diagnostics
    pub server_total_pages: Option<usize>,
}

impl<T> ListPayload<T> {
    /// Normalize into a single page. `page` is 1-based.
    pub fn into_page(self, page: usize, page_size: usize) -> PagedList<T> {
        match self {
            ListPayload::Paged {
                itens,
                total,
                total_paginas,
            } => {
                let total = total.map(|t| t as usize).unwrap_or(itens.len());
                PagedList {
                    items: itens,
                    total,
                    server_total_pages: total_paginas.map(|t| t as usize),
                }
            }
            ListPayload::Bare(all) => {
                let total = all.len();
                let start = page.saturating_sub(1).saturating_mul(page_size);
                let items = all.into_iter().skip(start).take(page_size).collect();
                PagedList {
                    items,
                    total,
                    server_total_pages: None,
                }
            }
        }
    }
}

/// `ceil(total / page_size)`; zero when the page size is zero
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        (total + page_size - 1) / page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(45, 20), 3);
        assert_eq!(total_pages(40, 20), 2);
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_paged_shape() {
        let payload: ListPayload<u32> =
            serde_json::from_value(json!({"itens": [1, 2], "total": 45, "total_paginas": 3})).unwrap();
        let page = payload.into_page(1, 20);
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.total, 45);
        assert_eq!(page.server_total_pages, Some(3));
    }

    #[test]
    fn test_paged_shape_without_total() {
        let payload: ListPayload<u32> = serde_json::from_value(json!({"itens": [1, 2, 3]})).unwrap();
        assert_eq!(payload.into_page(1, 20).total, 3);
    }

    #[test]
    fn test_bare_array_is_sliced() {
        let all: Vec<u32> = (1..=45).collect();
        let payload: ListPayload<u32> = serde_json::from_value(json!(all)).unwrap();
        let page = payload.into_page(3, 20);
        assert_eq!(page.items, (41..=45).collect::<Vec<_>>());
        assert_eq!(page.total, 45);
    }

    #[test]
    fn test_empty_bare_array() {
        let payload: ListPayload<u32> = serde_json::from_value(json!([])).unwrap();
        let page = payload.into_page(1, 20);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }
}
