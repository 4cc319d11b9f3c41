//! Application configuration, provided once through Leptos context

use super::api_utils::api_base;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL every endpoint path is appended to
    pub api_base: String,
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Upper bound for pages waiting on the sidebar permission bootstrap
    pub permission_wait_ms: u32,
    /// Where the browser goes after a 401
    pub login_url: String,
    pub notice_ttl_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            default_page_size: 20,
            page_size_options: vec![10, 20, 50, 100],
            permission_wait_ms: 5000,
            login_url: "/login".to_string(),
            notice_ttl_ms: 4000,
        }
    }
}

impl AppConfig {
    /// Defaults with the API base resolved from the host page
    pub fn from_environment() -> Self {
        Self {
            api_base: api_base(),
            ..Self::default()
        }
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found in context")
}
