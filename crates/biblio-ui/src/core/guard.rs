//! Navigation authorization decisions.
//!
//! # Design
//! - The guard is a pure function over session state and route metadata; it
//!   mutates nothing and is evaluated once per transition attempt.
//! - The authentication check takes precedence over the role check.

use crate::core::session::Session;
use biblio_api_models::Role;

/// Static authorization requirements of a navigable route, already combined
/// with those of its ancestors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteRequirements {
    /// Whether an authenticated session is required.
    pub requires_auth: bool,
    /// Whether the identity must carry the administrator role.
    pub requires_admin: bool,
}

impl RouteRequirements {
    /// No requirements; the transition is always allowed.
    pub const NONE: Self = Self {
        requires_auth: false,
        requires_admin: false,
    };

    /// Combine with an ancestor's requirements; a nested route inherits
    /// every flag set anywhere on its path.
    #[must_use]
    pub const fn union(self, ancestor: Self) -> Self {
        Self {
            requires_auth: self.requires_auth || ancestor.requires_auth,
            requires_admin: self.requires_admin || ancestor.requires_admin,
        }
    }
}

/// Outcome of evaluating a navigation transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the transition proceed.
    Allow,
    /// The route needs authentication the session lacks; go to login.
    RedirectToLogin,
    /// The route needs the administrator role the identity lacks; surface a
    /// privilege notice and stay where the user was.
    DenyAdmin,
}

/// Decide whether a transition to a route with `requirements` may proceed
/// under `session`.
#[must_use]
pub fn evaluate(session: &Session, requirements: RouteRequirements) -> GuardDecision {
    if requirements.requires_auth && !session.is_authenticated() {
        return GuardDecision::RedirectToLogin;
    }
    if requirements.requires_admin
        && session
            .identity()
            .is_none_or(|identity| identity.role != Role::Admin)
    {
        return GuardDecision::DenyAdmin;
    }
    GuardDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::{GuardDecision, RouteRequirements, evaluate};
    use crate::core::session::{SessionStorage, SessionStore};
    use biblio_api_models::{Role, UserProfile};

    struct NullStorage;

    impl SessionStorage for NullStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) {}

        fn remove(&self, _key: &str) {}
    }

    const AUTH_ONLY: RouteRequirements = RouteRequirements {
        requires_auth: true,
        requires_admin: false,
    };
    const ADMIN: RouteRequirements = RouteRequirements {
        requires_auth: true,
        requires_admin: true,
    };

    fn session_with(role: Option<Role>) -> SessionStore<NullStorage> {
        let mut store = SessionStore::restore(NullStorage);
        if let Some(role) = role {
            let identity = UserProfile {
                id: 1,
                username: "reader".to_string(),
                name: None,
                email: None,
                phone: None,
                role,
                status: None,
            };
            store.login_success(identity, "tok".to_string());
        }
        store
    }

    #[test]
    fn open_route_always_allows() {
        let store = session_with(None);
        assert_eq!(
            evaluate(store.session(), RouteRequirements::NONE),
            GuardDecision::Allow
        );
    }

    #[test]
    fn auth_route_redirects_anonymous_to_login() {
        let store = session_with(None);
        assert_eq!(
            evaluate(store.session(), AUTH_ONLY),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn auth_route_allows_authenticated_user() {
        let store = session_with(Some(Role::User));
        assert_eq!(evaluate(store.session(), AUTH_ONLY), GuardDecision::Allow);
    }

    #[test]
    fn admin_route_denies_regular_user() {
        let store = session_with(Some(Role::User));
        assert_eq!(evaluate(store.session(), ADMIN), GuardDecision::DenyAdmin);
    }

    #[test]
    fn admin_route_allows_admin() {
        let store = session_with(Some(Role::Admin));
        assert_eq!(evaluate(store.session(), ADMIN), GuardDecision::Allow);
    }

    #[test]
    fn auth_check_precedes_role_check() {
        // An anonymous session hitting an admin route goes to login, not to
        // the privilege notice.
        let store = session_with(None);
        assert_eq!(
            evaluate(store.session(), ADMIN),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn union_inherits_flags_from_ancestors() {
        let child = RouteRequirements {
            requires_auth: false,
            requires_admin: true,
        };
        let combined = child.union(AUTH_ONLY);
        assert!(combined.requires_auth);
        assert!(combined.requires_admin);
    }
}
