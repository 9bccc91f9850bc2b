//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one API client per app boot.
//! - The client reads session state through the store at call time, so no
//!   rebuild is needed when credentials change.

use crate::services::api::ApiClient;
use std::rc::Rc;
use yew_router::prelude::Navigator;

/// Shared API client context for UI services.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Create a new context with the configured base URL and navigator.
    pub(crate) fn new(base_url: impl Into<String>, navigator: Navigator) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url, navigator)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
