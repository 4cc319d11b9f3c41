use super::storage;

/// Drop the stored token and send the browser to the login page
pub fn expire(login_url: &str) {
    storage::clear_tokens();
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(login_url) {
            log::error!("Failed to redirect to {}: {:?}", login_url, e);
        }
    }
}
