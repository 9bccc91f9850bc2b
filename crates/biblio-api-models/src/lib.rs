#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Biblio library-management API.
//!
//! These types mirror the backend's wire contract exactly (camelCase field
//! names, upper-case enum discriminants) so the UI client and any future
//! tooling encode requests and decode responses against a single source of
//! truth.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Reserved business status codes carried in [`Envelope::code`].
pub mod codes {
    /// Business success.
    pub const SUCCESS: &str = "200";
    /// Credential missing, expired, or rejected; the session must be torn down.
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    /// Credential valid but not permitted; the session must be torn down.
    pub const FORBIDDEN: &str = "FORBIDDEN";
}

/// Business-level response wrapper returned by every backend endpoint.
///
/// `code` is distinct from the transport HTTP status: a `200 OK` exchange may
/// still carry a failing business code. Some endpoints respond with a bare
/// payload instead of this wrapper; decoding handles both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Envelope<T> {
    /// Business status code; [`codes::SUCCESS`] on success.
    pub code: String,
    /// Human-readable outcome description, when provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload carried on success; absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Role attached to an authenticated user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Regular library patron.
    User,
    /// Administrator with access to the management screens.
    Admin,
}

/// Account lifecycle state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    /// Account may log in and borrow.
    Active,
    /// Account locked out by an administrator.
    Disabled,
}

/// Profile attributes of a user account as exposed by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Stable numeric account id.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Authorization role.
    pub role: Role,
    /// Account lifecycle state.
    #[serde(default)]
    pub status: Option<UserStatus>,
}

/// Credentials submitted to the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plaintext password; the exchange is protected by the transport layer.
    pub password: String,
}

/// Successful login payload: the issued bearer token plus the identity it
/// proves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    /// Account id of the authenticated user.
    pub id: i64,
    /// Login name of the authenticated user.
    pub username: String,
    /// Authorization role of the authenticated user.
    pub role: Role,
    /// Opaque bearer token to attach to subsequent requests.
    pub token: String,
}

impl From<&LoginData> for UserProfile {
    /// The identity proven by a login payload; profile attributes beyond
    /// the login fields stay unset until a profile fetch fills them in.
    fn from(data: &LoginData) -> Self {
        Self {
            id: data.id,
            username: data.username.clone(),
            name: None,
            email: None,
            phone: None,
            role: data.role,
            status: None,
        }
    }
}

/// Payload for self-service account registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Desired login name.
    pub username: String,
    /// Desired password.
    pub password: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Payload to open a borrow request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRequest {
    /// Borrowing user's account id.
    pub user_id: i64,
    /// Requested book id.
    pub book_id: i64,
}

/// Availability state of a catalogue book.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookStatus {
    /// Copies may be borrowed.
    Available,
    /// Withdrawn from circulation.
    Unavailable,
    /// Temporarily out for repair or processing.
    Maintenance,
}

/// Catalogue category a book belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Stable numeric category id.
    pub id: i64,
    /// Category display name.
    pub name: String,
}

/// A catalogue book record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Stable numeric book id.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Author display string.
    pub author: String,
    /// ISBN, when catalogued.
    #[serde(default)]
    pub isbn: Option<String>,
    /// Category, when assigned.
    #[serde(default)]
    pub category: Option<Category>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Copies owned by the library.
    pub total_copies: i32,
    /// Copies currently on the shelf.
    pub available_copies: i32,
    /// Availability state.
    pub status: BookStatus,
    /// Record creation timestamp.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// Last modification timestamp.
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Lifecycle state of a borrow record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BorrowStatus {
    /// Requested, awaiting administrator approval.
    Pending,
    /// Approved and checked out.
    Borrowed,
    /// Returned to the shelf.
    Returned,
    /// Past the due date without a return.
    Overdue,
    /// Request declined by an administrator.
    Rejected,
}

/// A borrow transaction linking a user to a book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRecord {
    /// Stable numeric record id.
    pub id: i64,
    /// Borrowed book.
    pub book: Book,
    /// Borrowing user; omitted on endpoints scoped to the caller.
    #[serde(default)]
    pub user: Option<UserProfile>,
    /// Checkout timestamp.
    #[serde(default)]
    pub borrow_date: Option<NaiveDateTime>,
    /// Return deadline.
    #[serde(default)]
    pub due_date: Option<NaiveDateTime>,
    /// Actual return timestamp, once returned.
    #[serde(default)]
    pub return_date: Option<NaiveDateTime>,
    /// Lifecycle state.
    pub status: BorrowStatus,
    /// Administrator remarks (e.g. a rejection reason).
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Page wrapper the backend returns for list endpoints.
///
/// The server serializes more bookkeeping fields than these; only the ones
/// the client reads are modeled, the rest are ignored on decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records on this page.
    pub content: Vec<T>,
    /// Total records across all pages.
    pub total_elements: i64,
    /// Zero-based page index.
    #[serde(default)]
    pub number: i32,
    /// Requested page size.
    #[serde(default)]
    pub size: i32,
}

#[cfg(test)]
mod tests {
    use super::{BookStatus, Envelope, LoginData, Role, UserProfile, codes};

    #[test]
    fn envelope_failure_omits_data() {
        let raw = r#"{"code":"UNAUTHORIZED","message":"token expired"}"#;
        let envelope: Envelope<LoginData> = serde_json::from_str(raw).expect("decode");
        assert_eq!(envelope.code, codes::UNAUTHORIZED);
        assert_eq!(envelope.message.as_deref(), Some("token expired"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn login_data_uses_backend_field_casing() {
        let raw = r#"{"id":7,"username":"reader","role":"ADMIN","token":"tok"}"#;
        let data: LoginData = serde_json::from_str(raw).expect("decode");
        assert_eq!(data.role, Role::Admin);
        assert_eq!(data.token, "tok");
    }

    #[test]
    fn profile_tolerates_missing_optional_fields() {
        let raw = r#"{"id":3,"username":"reader","role":"USER"}"#;
        let profile: UserProfile = serde_json::from_str(raw).expect("decode");
        assert!(profile.name.is_none());
        assert!(profile.status.is_none());
    }

    #[test]
    fn book_status_round_trips_upper_case() {
        let status: BookStatus = serde_json::from_str(r#""MAINTENANCE""#).expect("decode");
        assert_eq!(status, BookStatus::Maintenance);
        assert_eq!(
            serde_json::to_string(&status).expect("encode"),
            r#""MAINTENANCE""#
        );
    }
}
