//! Persistence and environment helpers for the app shell.

use crate::core::session::SessionStorage;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use web_sys::Url;

/// Session persistence backed by browser `LocalStorage`.
///
/// Write failures (quota, privacy mode) are logged and otherwise ignored;
/// the session then simply does not survive a reload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            log_storage_error("set", key, &format!("{err:?}"));
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = LocalStorage::raw().remove_item(key) {
            log_storage_error("remove", key, &format!("{err:?}"));
        }
    }
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key.to_string(), detail.to_string());
}

/// Base URL of the backend API, derived from the window location.
///
/// In production the UI is served by the backend itself, so the API lives at
/// the same origin under `/api`. The trunk dev server on port 3000 maps to
/// the backend's 8080.
pub(crate) fn api_base_url() -> String {
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    if let Ok(url) = Url::new(&href) {
        let protocol = url.protocol();
        let host = url.hostname();
        let port = url.port();
        let mapped_port = match port.as_str() {
            "" => None,
            "3000" => Some("8080".to_string()),
            other => Some(other.to_string()),
        };

        let mut base = format!("{protocol}//{host}");
        if let Some(port) = mapped_port {
            base.push(':');
            base.push_str(&port);
        }
        base.push_str("/api");
        return base;
    }

    "http://localhost:8080/api".to_string()
}
