//! API utilities for talking to the task store
//!
//! Provides helper functions for constructing API URLs.

use crate::config;

/// Get the base URL for API requests
///
/// Uses `api.base_url` from the active config when set. Otherwise the URL is
/// built from the current window location, using port 3000 for the task store.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://tasks.example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let configured = config::get().api.base_url.trim();
    if !configured.is_empty() {
        return configured.trim_end_matches('/').to_string();
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
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/tasks/facets");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Build an API URL with a single escaped path segment appended
pub fn api_url_with_id(path: &str, id: &str) -> String {
    format!("{}{}/{}", api_base(), path, urlencoding::encode(id))
}
