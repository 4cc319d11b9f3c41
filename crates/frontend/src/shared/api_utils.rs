//! API utilities for frontend-backend communication
//!
//! Resolves the base URL every request path is appended to.

/// Name of the `<meta>` tag that overrides the computed API base
pub const API_BASE_META: &str = "api-base";

/// Get the base URL for API requests
///
/// A `<meta name="api-base" content="...">` tag in the host page wins.
/// Otherwise the URL is built from the current window location, using
/// port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000/api"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = meta_api_base() {
        return base;
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    default_api_base(&protocol, &hostname)
}

pub fn default_api_base(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:3000/api", protocol, hostname)
}

fn meta_api_base() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{}\"]", API_BASE_META))
        .ok()??;
    normalize_base(&meta.get_attribute("content")?)
}

/// Trims whitespace and a trailing slash; an empty value is ignored
pub fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Join a base URL and an endpoint path with exactly one slash between them
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_base() {
        assert_eq!(
            default_api_base("https:", "erp.example.com"),
            "https://erp.example.com:3000/api"
        );
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(" /api/ "), Some("/api".to_string()));
        assert_eq!(normalize_base("   "), None);
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h:3000/api/", "/cidades"), "http://h:3000/api/cidades");
        assert_eq!(join_url("/api", "estados?pagina=1"), "/api/estados?pagina=1");
    }
}
