//! HTTP client for the Biblio backend (REST).
//!
//! Every exchange passes two interception points. Outbound, the session's
//! bearer token is attached when one is held. Inbound, the body or failure
//! is classified by [`crate::core::pipeline`], surfaced as a toast, and
//! propagated to the caller; authorization loss additionally tears the
//! session down and pushes the login route. Teardown and the redirect are
//! both idempotent, so overlapping failing requests cannot corrupt state.

use crate::app::store::{self, AppStore};
use crate::core::pipeline::{ApiError, classify_fetch_error, classify_transport, decode_payload};
use crate::routes::Route;
use biblio_api_models::{
    Book, BookStatus, BorrowRecord, BorrowRequest, Envelope, LoginData, LoginRequest, Page,
    RegisterRequest, UserProfile, codes,
};
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use yew_router::prelude::Navigator;
use yewdux::prelude::Dispatch;

/// REST client for the backend API.
#[derive(Clone)]
pub(crate) struct ApiClient {
    base_url: String,
    dispatch: Dispatch<AppStore>,
    navigator: Navigator,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>, navigator: Navigator) -> Self {
        Self {
            base_url: base_url.into(),
            dispatch: Dispatch::new(),
            navigator,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Attach the bearer credential when the session holds one; without a
    /// token the exchange goes out unauthenticated and the server decides.
    fn authorize(&self, request: Request) -> Request {
        let token = self
            .dispatch
            .get()
            .session
            .session()
            .token()
            .map(str::to_string);
        match token {
            Some(token) => request.header("Authorization", &format!("Bearer {token}")),
            None => request,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let outcome = exchange(request).await;
        if let Err(error) = &outcome {
            self.recover(error);
        }
        outcome
    }

    async fn execute_json<T, B>(&self, request: Request, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let request = request.json(body).map_err(|_| ApiError::Decode)?;
        self.execute(request).await
    }

    /// Surface a failure and, on authorization loss, tear the session down
    /// and return to the login screen.
    fn recover(&self, error: &ApiError) {
        store::notify_error(&self.dispatch, error.to_string());
        if error.is_auth_loss() {
            store::invalidate_session(&self.dispatch);
            self.navigator.push(&Route::Login);
        }
    }

    /// Exchange credentials for a bearer token and the identity it proves.
    ///
    /// The login endpoint double-wraps its payload (an envelope inside the
    /// envelope); the inner layer is unwrapped here.
    pub(crate) async fn login(&self, credentials: &LoginRequest) -> Result<LoginData, ApiError> {
        let request = self.authorize(Request::post(&self.url("/auth/login")));
        let inner: Envelope<LoginData> = self.execute_json(request, credentials).await?;
        if inner.code == codes::SUCCESS {
            if let Some(data) = inner.data {
                return Ok(data);
            }
        }
        let error = ApiError::Business {
            code: inner.code,
            message: inner
                .message
                .unwrap_or_else(|| "login failed".to_string()),
        };
        self.recover(&error);
        Err(error)
    }

    pub(crate) async fn register(
        &self,
        registration: &RegisterRequest,
    ) -> Result<UserProfile, ApiError> {
        let request = self.authorize(Request::post(&self.url("/users/register")));
        self.execute_json(request, registration).await
    }

    /// Current user's profile; pairs with the session's identity refresh.
    pub(crate) async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        self.execute(self.authorize(Request::get(&self.url("/users/profile"))))
            .await
    }

    pub(crate) async fn fetch_books(&self, page: u32, size: u32) -> Result<Page<Book>, ApiError> {
        let path = format!("/books?page={page}&size={size}");
        self.execute(self.authorize(Request::get(&self.url(&path))))
            .await
    }

    pub(crate) async fn search_books(
        &self,
        keyword: &str,
        page: u32,
        size: u32,
    ) -> Result<Page<Book>, ApiError> {
        let path = format!(
            "/books/search?keyword={}&page={page}&size={size}",
            urlencoding::encode(keyword)
        );
        self.execute(self.authorize(Request::get(&self.url(&path))))
            .await
    }

    pub(crate) async fn delete_book(&self, id: i64) -> Result<(), ApiError> {
        self.execute(self.authorize(Request::delete(&self.url(&format!("/books/{id}")))))
            .await
    }

    pub(crate) async fn update_book_status(
        &self,
        id: i64,
        status: BookStatus,
    ) -> Result<(), ApiError> {
        let path = format!("/books/{id}/status?status={}", enum_query_value(&status));
        self.execute(self.authorize(Request::put(&self.url(&path))))
            .await
    }

    pub(crate) async fn fetch_users(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Page<UserProfile>, ApiError> {
        let path = format!("/users?page={page}&size={size}");
        self.execute(self.authorize(Request::get(&self.url(&path))))
            .await
    }

    pub(crate) async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.execute(self.authorize(Request::delete(&self.url(&format!("/users/{id}")))))
            .await
    }

    pub(crate) async fn request_borrow(
        &self,
        borrow: &BorrowRequest,
    ) -> Result<BorrowRecord, ApiError> {
        let request = self.authorize(Request::post(&self.url("/borrow-records")));
        self.execute_json(request, borrow).await
    }

    pub(crate) async fn fetch_borrow_records_for(
        &self,
        user_id: i64,
        page: u32,
        size: u32,
    ) -> Result<Page<BorrowRecord>, ApiError> {
        let path = format!("/borrow-records/user/{user_id}?page={page}&size={size}");
        self.execute(self.authorize(Request::get(&self.url(&path))))
            .await
    }

    pub(crate) async fn fetch_borrow_records(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Page<BorrowRecord>, ApiError> {
        let path = format!("/borrow-records?page={page}&size={size}");
        self.execute(self.authorize(Request::get(&self.url(&path))))
            .await
    }

    pub(crate) async fn approve_borrow(&self, id: i64) -> Result<BorrowRecord, ApiError> {
        let path = format!("/borrow-records/{id}/approve");
        self.execute(self.authorize(Request::put(&self.url(&path))))
            .await
    }

    pub(crate) async fn reject_borrow(
        &self,
        id: i64,
        reason: &str,
    ) -> Result<BorrowRecord, ApiError> {
        let path = format!(
            "/borrow-records/{id}/reject?reason={}",
            urlencoding::encode(reason)
        );
        self.execute(self.authorize(Request::put(&self.url(&path))))
            .await
    }

    pub(crate) async fn return_book(&self, id: i64) -> Result<BorrowRecord, ApiError> {
        let path = format!("/borrow-records/{id}/return");
        self.execute(self.authorize(Request::put(&self.url(&path))))
            .await
    }
}

/// Run one exchange and classify its outcome; no side effects.
async fn exchange<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|error| classify_fetch_error(&error.to_string()))?;
    if !response.ok() {
        let message = error_body_message(&response).await;
        return Err(classify_transport(response.status(), message.as_deref()));
    }
    let body = response.json::<Value>().await.map_err(|_| ApiError::Decode)?;
    decode_payload(body)
}

/// Best-effort read of the `message` field from an error body.
async fn error_body_message(response: &Response) -> Option<String> {
    let body = response.json::<Value>().await.ok()?;
    body.get("message")?.as_str().map(str::to_string)
}

/// Wire name of an enum value, for query parameters.
fn enum_query_value<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}
