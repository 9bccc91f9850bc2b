//! Routing definitions for the Biblio UI.
//!
//! Authorization requirements are declared per route and inherited down the
//! nesting chain: every screen under the authenticated shell requires a
//! session, and the admin screens additionally require the administrator
//! role.

use crate::core::guard::RouteRequirements;
use yew_router::prelude::*;

/// Navigable paths of the application.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Login (and registration) screen.
    #[at("/login")]
    Login,
    /// Authenticated shell root; forwards to the book catalogue.
    #[at("/")]
    Home,
    /// Book catalogue with search.
    #[at("/books")]
    Books,
    /// Own profile screen.
    #[at("/user/profile")]
    Profile,
    /// Own borrow records.
    #[at("/user/borrow-records")]
    BorrowRecords,
    /// Catalogue management (admin).
    #[at("/admin/books")]
    AdminBooks,
    /// Account management (admin).
    #[at("/admin/users")]
    AdminUsers,
    /// Borrow-record management (admin).
    #[at("/admin/borrow-records")]
    AdminBorrowRecords,
    /// Fallback for unknown paths.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The route this one is nested under, when any.
    const fn parent(&self) -> Option<Self> {
        match self {
            Self::Login | Self::Home | Self::NotFound => None,
            Self::Books
            | Self::Profile
            | Self::BorrowRecords
            | Self::AdminBooks
            | Self::AdminUsers
            | Self::AdminBorrowRecords => Some(Self::Home),
        }
    }

    /// Requirements declared on this route alone, before inheritance.
    const fn own_requirements(&self) -> RouteRequirements {
        match self {
            Self::Login | Self::NotFound => RouteRequirements::NONE,
            Self::Home | Self::Books | Self::Profile | Self::BorrowRecords => {
                RouteRequirements {
                    requires_auth: true,
                    requires_admin: false,
                }
            }
            // Admin screens inherit the authentication requirement from the
            // shell; they only declare the role themselves.
            Self::AdminBooks | Self::AdminUsers | Self::AdminBorrowRecords => {
                RouteRequirements {
                    requires_auth: false,
                    requires_admin: true,
                }
            }
        }
    }

    /// Effective requirements: the OR of the flags declared on this route
    /// and on every ancestor on its path.
    #[must_use]
    pub fn requirements(&self) -> RouteRequirements {
        let mut requirements = self.own_requirements();
        let mut cursor = self.parent();
        while let Some(ancestor) = cursor {
            requirements = requirements.union(ancestor.own_requirements());
            cursor = ancestor.parent();
        }
        requirements
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn login_and_not_found_are_open() {
        assert!(!Route::Login.requirements().requires_auth);
        assert!(!Route::NotFound.requirements().requires_auth);
    }

    #[test]
    fn shell_screens_require_auth() {
        for route in [Route::Home, Route::Books, Route::Profile, Route::BorrowRecords] {
            let requirements = route.requirements();
            assert!(requirements.requires_auth, "{route:?}");
            assert!(!requirements.requires_admin, "{route:?}");
        }
    }

    #[test]
    fn admin_screens_inherit_auth_from_the_shell() {
        for route in [
            Route::AdminBooks,
            Route::AdminUsers,
            Route::AdminBorrowRecords,
        ] {
            let requirements = route.requirements();
            assert!(requirements.requires_auth, "{route:?}");
            assert!(requirements.requires_admin, "{route:?}");
        }
    }

    #[test]
    fn paths_round_trip() {
        use yew_router::Routable;
        assert_eq!(Route::AdminBooks.to_path(), "/admin/books");
        assert_eq!(Route::recognize("/user/profile"), Some(Route::Profile));
        assert_eq!(Route::recognize("/definitely/not/here"), Some(Route::NotFound));
    }
}
