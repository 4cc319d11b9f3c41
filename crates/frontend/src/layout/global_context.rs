use crate::layout::tabs::tab_label_for_key;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Open tabs, the active one and the sidebar toggle
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Keeps `?active=<tab key>` in the address bar so a reload reopens the tab
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active") {
            let title = tab_label_for_key(active_key);
            if title.is_empty() {
                log::warn!("Ignoring unknown tab key from URL: {}", active_key);
            } else {
                self.open_tab(active_key, title);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("open_tab: {}", key);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    /// Closing the active tab activates the last remaining one
    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: {}", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_twice_keeps_one_tab() {
        let ctx = AppGlobalContext::new();
        ctx.open_tab("a001_state", "Estados");
        ctx.open_tab("a002_city", "Cidades");
        ctx.open_tab("a001_state", "Estados");

        assert_eq!(ctx.opened.get_untracked().len(), 2);
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a001_state"));
    }

    #[test]
    fn test_closing_active_tab_activates_last() {
        let ctx = AppGlobalContext::new();
        ctx.open_tab("a001_state", "Estados");
        ctx.open_tab("a002_city", "Cidades");
        ctx.open_tab("a007_sale", "Vendas");
        ctx.activate_tab("a002_city");

        ctx.close_tab("a002_city");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a007_sale"));

        ctx.close_tab("a001_state");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a007_sale"));

        ctx.close_tab("a007_sale");
        assert_eq!(ctx.active.get_untracked(), None);
    }
}
