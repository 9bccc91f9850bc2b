//! App-wide yewdux store.
//!
//! # Design
//! - One store owns the session, the toast queue, and the guard's
//!   navigation bookkeeping, so components, the guard, and the request
//!   pipeline share a consistent view.
//! - Session mutations go through the helpers below, which add console
//!   diagnostics; persistence itself lives inside the session store.

use crate::app::storage::BrowserStorage;
use crate::core::session::SessionStore;
use crate::routes::Route;
use biblio_api_models::UserProfile;
use gloo::console;
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Global application store for shared state.
///
/// `Default` hydrates the session from browser storage, so the first
/// dispatch of an app boot restores any persisted login.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub(crate) struct AppStore {
    /// Session state backed by browser storage.
    pub session: SessionStore<BrowserStorage>,
    /// Pending notification toasts.
    pub toasts: ToastQueue,
    /// Navigation bookkeeping for the guard.
    pub nav: NavState,
}

/// Guard bookkeeping: where the user last was allowed to be.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub(crate) struct NavState {
    /// Last route the guard allowed; privilege denials bounce back here.
    pub last_allowed: Option<Route>,
}

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ToastKind {
    /// Operation feedback.
    Success,
    /// Failure notice.
    Error,
}

/// A queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Toast {
    /// Stable id for dismissal.
    pub id: u64,
    /// Severity.
    pub kind: ToastKind,
    /// User-visible text.
    pub message: String,
}

/// Queue of visible toasts, oldest first.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub(crate) struct ToastQueue {
    /// Visible toasts.
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    fn push(&mut self, kind: ToastKind, message: String) {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push(Toast { id, kind, message });
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }
}

/// Surface a user-visible failure.
pub(crate) fn notify_error(dispatch: &Dispatch<AppStore>, message: impl Into<String>) {
    let message = message.into();
    console::error!("notify", message.clone());
    dispatch.reduce_mut(|store| store.toasts.push(ToastKind::Error, message));
}

/// Surface operation feedback.
pub(crate) fn notify_success(dispatch: &Dispatch<AppStore>, message: impl Into<String>) {
    let message = message.into();
    dispatch.reduce_mut(|store| store.toasts.push(ToastKind::Success, message));
}

/// Install a freshly authenticated session.
pub(crate) fn login_success(dispatch: &Dispatch<AppStore>, identity: UserProfile, token: String) {
    console::debug!("session: login", identity.username.clone());
    dispatch.reduce_mut(|store| store.session.login_success(identity, token));
}

/// Replace the identity after a profile refresh; the token is untouched.
pub(crate) fn refresh_identity(dispatch: &Dispatch<AppStore>, identity: UserProfile) {
    dispatch.reduce_mut(|store| store.session.set_identity(identity));
}

/// Tear the session down. Safe to call repeatedly, e.g. when several
/// in-flight requests observe authorization loss at once.
pub(crate) fn invalidate_session(dispatch: &Dispatch<AppStore>) {
    console::debug!("session: invalidated");
    dispatch.reduce_mut(|store| store.session.invalidate());
}
