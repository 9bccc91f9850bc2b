//! Classification rules of the HTTP request pipeline.
//!
//! # Design
//! - Classification is pure: the transport hands in a decoded body or a
//!   failure, and gets back either the operation result or an [`ApiError`].
//! - The business `code` in a response envelope is distinct from the HTTP
//!   status of the exchange; both feed the same error taxonomy.
//! - Authorization loss (`401`, `UNAUTHORIZED`, `FORBIDDEN`) is a property
//!   of the error, so every interception point applies the same recovery.

use biblio_api_models::codes;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Fallback text when a failing envelope carries no message.
const GENERIC_BUSINESS_FAILURE: &str = "request failed";

/// A failed backend operation, as surfaced to the user and propagated to the
/// caller. The `Display` form is the user-visible message.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The exchange completed but the envelope's business code signalled
    /// failure.
    #[error("{message}")]
    Business {
        /// Business status code from the envelope.
        code: String,
        /// User-visible failure description.
        message: String,
    },
    /// The exchange returned a non-success HTTP status.
    #[error("{message}")]
    Transport {
        /// HTTP status of the exchange.
        status: u16,
        /// User-visible failure description.
        message: String,
    },
    /// No response arrived before the transport's deadline.
    #[error("request timed out")]
    Timeout,
    /// The exchange failed without a response or timeout indication.
    #[error("network or server error")]
    Network,
    /// The response body did not decode into the expected shape.
    #[error("unexpected response payload")]
    Decode,
}

impl ApiError {
    /// Whether this failure invalidates the current credential: a `401`
    /// exchange, or an `UNAUTHORIZED`/`FORBIDDEN` business code.
    #[must_use]
    pub fn is_auth_loss(&self) -> bool {
        match self {
            Self::Business { code, .. } => {
                code == codes::UNAUTHORIZED || code == codes::FORBIDDEN
            }
            Self::Transport { status, .. } => *status == 401,
            Self::Timeout | Self::Network | Self::Decode => false,
        }
    }
}

/// Interpret a successful exchange's body.
///
/// Objects carrying a string `code` field are envelopes: [`codes::SUCCESS`]
/// yields the `data` field, anything else is a business failure carrying the
/// envelope's message. A body without a `code` field is the result itself,
/// decoded verbatim.
///
/// # Errors
///
/// [`ApiError::Business`] for failing envelopes, [`ApiError::Decode`] when
/// the payload does not match the expected result shape.
pub fn decode_payload<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    let Some(code) = envelope_code(&body) else {
        return serde_json::from_value(body).map_err(|_| ApiError::Decode);
    };
    if code == codes::SUCCESS {
        let data = body.get("data").cloned().unwrap_or(Value::Null);
        return serde_json::from_value(data).map_err(|_| ApiError::Decode);
    }
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .unwrap_or(GENERIC_BUSINESS_FAILURE)
        .to_string();
    Err(ApiError::Business {
        code: code.to_string(),
        message,
    })
}

fn envelope_code(body: &Value) -> Option<&str> {
    body.as_object()?.get("code")?.as_str()
}

/// Classify a completed exchange with a non-success HTTP status.
///
/// `backend_message` is the `message` field of the error body, when one was
/// readable.
#[must_use]
pub fn classify_transport(status: u16, backend_message: Option<&str>) -> ApiError {
    let message = match status {
        401 => "unauthorized, please log in again".to_string(),
        403 => "access denied".to_string(),
        404 => "requested resource not found".to_string(),
        500 => format!(
            "request error: 500 - {}",
            backend_message.unwrap_or("internal server error")
        ),
        other => backend_message
            .map_or_else(|| format!("request error: {other}"), str::to_string),
    };
    ApiError::Transport { status, message }
}

/// Classify an exchange that produced no response at all.
///
/// The fetch layer reports such failures as opaque text; a timeout
/// indication in that text selects [`ApiError::Timeout`], anything else is
/// [`ApiError::Network`].
#[must_use]
pub fn classify_fetch_error(detail: &str) -> ApiError {
    let lower = detail.to_ascii_lowercase();
    if lower.contains("timed out") || lower.contains("timeout") {
        ApiError::Timeout
    } else {
        ApiError::Network
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, classify_fetch_error, classify_transport, decode_payload};
    use biblio_api_models::{LoginData, Role, codes};
    use serde_json::{Value, json};

    #[test]
    fn success_envelope_yields_data_exactly() {
        let body = json!({
            "code": "200",
            "message": "success",
            "data": {"id": 7, "username": "reader", "role": "USER", "token": "tok"}
        });
        let data: LoginData = decode_payload(body).expect("success envelope");
        assert_eq!(data.id, 7);
        assert_eq!(data.role, Role::User);
        assert_eq!(data.token, "tok");
    }

    #[test]
    fn body_without_code_is_consumed_verbatim() {
        let body = json!({"id": 3, "username": "reader", "role": "USER"});
        let profile: biblio_api_models::UserProfile =
            decode_payload(body).expect("bare payload");
        assert_eq!(profile.id, 3);
    }

    #[test]
    fn failing_envelope_carries_its_message() {
        let body = json!({"code": "INVALID_CREDENTIALS", "message": "bad password"});
        let outcome: Result<Value, ApiError> = decode_payload(body);
        assert_eq!(
            outcome,
            Err(ApiError::Business {
                code: "INVALID_CREDENTIALS".to_string(),
                message: "bad password".to_string(),
            })
        );
    }

    #[test]
    fn failing_envelope_without_message_gets_fallback() {
        let body = json!({"code": "500"});
        let outcome: Result<Value, ApiError> = decode_payload(body);
        let Err(error) = outcome else {
            panic!("expected failure");
        };
        assert_eq!(error.to_string(), "request failed");
    }

    #[test]
    fn unauthorized_envelope_is_auth_loss() {
        let body = json!({"code": codes::UNAUTHORIZED, "message": "token expired"});
        let outcome: Result<Value, ApiError> = decode_payload(body);
        let Err(error) = outcome else {
            panic!("expected failure");
        };
        assert!(error.is_auth_loss());
        assert_eq!(error.to_string(), "token expired");
    }

    #[test]
    fn forbidden_envelope_is_auth_loss() {
        let body = json!({"code": codes::FORBIDDEN, "message": "not yours"});
        let outcome: Result<Value, ApiError> = decode_payload(body);
        assert!(outcome.expect_err("failure").is_auth_loss());
    }

    #[test]
    fn success_envelope_with_null_data_decodes_unit() {
        let body = json!({"code": "200", "message": "success"});
        decode_payload::<()>(body).expect("void result");
    }

    #[test]
    fn transport_statuses_map_to_their_messages() {
        assert_eq!(
            classify_transport(401, None).to_string(),
            "unauthorized, please log in again"
        );
        assert_eq!(classify_transport(403, None).to_string(), "access denied");
        assert_eq!(
            classify_transport(404, None).to_string(),
            "requested resource not found"
        );
        assert_eq!(
            classify_transport(500, Some("boom")).to_string(),
            "request error: 500 - boom"
        );
        assert_eq!(
            classify_transport(500, None).to_string(),
            "request error: 500 - internal server error"
        );
        assert_eq!(
            classify_transport(502, None).to_string(),
            "request error: 502"
        );
        assert_eq!(classify_transport(502, Some("bad gateway")).to_string(), "bad gateway");
    }

    #[test]
    fn only_transport_401_is_auth_loss() {
        assert!(classify_transport(401, None).is_auth_loss());
        assert!(!classify_transport(403, None).is_auth_loss());
        assert!(!classify_transport(500, None).is_auth_loss());
    }

    #[test]
    fn missing_response_classifies_by_timeout_text() {
        assert_eq!(classify_fetch_error("request timed out"), ApiError::Timeout);
        assert_eq!(classify_fetch_error("Timeout exceeded"), ApiError::Timeout);
        assert_eq!(
            classify_fetch_error("failed to fetch"),
            ApiError::Network
        );
    }

    // The end-to-end walk from the top-level contract: anonymous redirect,
    // login, admin denial, 401 teardown, anonymous restart.
    #[test]
    fn session_guard_and_pipeline_compose() {
        use crate::core::guard::{GuardDecision, RouteRequirements, evaluate};
        use crate::core::session::{SessionStorage, SessionStore};
        use biblio_api_models::UserProfile;
        use std::cell::RefCell;
        use std::collections::HashMap;
        use std::rc::Rc;

        #[derive(Clone, Default)]
        struct MemoryStorage(Rc<RefCell<HashMap<String, String>>>);

        impl SessionStorage for MemoryStorage {
            fn get(&self, key: &str) -> Option<String> {
                self.0.borrow().get(key).cloned()
            }

            fn set(&self, key: &str, value: &str) {
                self.0.borrow_mut().insert(key.to_string(), value.to_string());
            }

            fn remove(&self, key: &str) {
                self.0.borrow_mut().remove(key);
            }
        }

        let books = RouteRequirements {
            requires_auth: true,
            requires_admin: false,
        };
        let admin_books = RouteRequirements {
            requires_auth: true,
            requires_admin: true,
        };

        let storage = MemoryStorage::default();
        let mut store = SessionStore::restore(storage.clone());

        // Anonymous: the auth-gated route redirects to login.
        assert_eq!(
            evaluate(store.session(), books),
            GuardDecision::RedirectToLogin
        );

        // Log in as a regular user: the same route is now allowed.
        let identity = UserProfile {
            id: 1,
            username: "reader".to_string(),
            name: None,
            email: None,
            phone: None,
            role: Role::User,
            status: None,
        };
        store.login_success(identity, "tok1".to_string());
        assert_eq!(evaluate(store.session(), books), GuardDecision::Allow);

        // The admin route stays blocked with a privilege notice.
        assert_eq!(
            evaluate(store.session(), admin_books),
            GuardDecision::DenyAdmin
        );

        // A request comes back 401: classification marks it as auth loss and
        // the recovery path invalidates the session.
        let error = classify_transport(401, None);
        assert!(error.is_auth_loss());
        store.invalidate();
        assert_eq!(
            evaluate(store.session(), books),
            GuardDecision::RedirectToLogin
        );

        // A later reload starts anonymous; nothing stale leaks from storage.
        let restored = SessionStore::restore(storage);
        assert!(!restored.is_authenticated());
        assert!(restored.session().identity().is_none());
    }
}
