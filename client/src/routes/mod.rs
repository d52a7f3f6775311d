//! Route table and navigation resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`ROUTE_TABLE`] is the single declaration of every URL the app serves.
//! `app::App` mirrors it as a Leptos `<Routes>` tree: public entries at the
//! top level, guarded entries nested under one [`guard::RouteGuard`] and one
//! `ShellLayout`; `tests/route_tree.rs` holds the two in step. The guard
//! decides through [`resolve`], so the table is what gates a mounted route.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod guard;

use crate::state::store::SessionStore;

use self::guard::GuardDecision;

/// Public entry point unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login";
/// Where a successful login or signup lands.
pub const HOME_PATH: &str = "/dashboard";

/// Whether a route needs an authenticated session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Guarded,
}

/// View rendered for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Landing,
    Login,
    Signup,
    Dashboard,
    Projects,
    Productivity,
    Billing,
    Resources,
    MasterDatabase,
    Invoices,
    Settings,
}

impl View {
    /// Heading shown on the page and in the document title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Landing => "Welcome",
            Self::Login => "Sign in",
            Self::Signup => "Create account",
            Self::Dashboard => "Dashboard",
            Self::Projects => "Projects",
            Self::Productivity => "Productivity",
            Self::Billing => "Billing",
            Self::Resources => "Resources",
            Self::MasterDatabase => "Master Database",
            Self::Invoices => "Invoices",
            Self::Settings => "Settings",
        }
    }
}

/// One entry in the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDecl {
    pub path: &'static str,
    pub access: Access,
    pub view: View,
}

impl RouteDecl {
    const fn public(path: &'static str, view: View) -> Self {
        Self { path, access: Access::Public, view }
    }

    const fn guarded(path: &'static str, view: View) -> Self {
        Self { path, access: Access::Guarded, view }
    }
}

pub const ROUTE_TABLE: &[RouteDecl] = &[
    RouteDecl::public("/", View::Landing),
    RouteDecl::public(LOGIN_PATH, View::Login),
    RouteDecl::public("/signup", View::Signup),
    RouteDecl::guarded(HOME_PATH, View::Dashboard),
    RouteDecl::guarded("/projects", View::Projects),
    RouteDecl::guarded("/productivity", View::Productivity),
    RouteDecl::guarded("/billing", View::Billing),
    RouteDecl::guarded("/resources", View::Resources),
    RouteDecl::guarded("/masterdatabase", View::MasterDatabase),
    RouteDecl::guarded("/invoices", View::Invoices),
    RouteDecl::guarded("/settings", View::Settings),
];

/// Exact-path lookup in [`ROUTE_TABLE`].
pub fn route_for(path: &str) -> Option<&'static RouteDecl> {
    ROUTE_TABLE.iter().find(|route| route.path == path)
}

/// Outcome of dispatching a single navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Render `route`; `chrome` is true when it sits inside the navigation shell.
    Render { route: &'static RouteDecl, chrome: bool },
    /// Navigate to `to` instead of rendering.
    Redirect { to: &'static str, replace: bool },
    NotFound,
}

/// Dispatch `path` against the table, consulting the guard for guarded routes.
pub fn resolve(path: &str, store: &dyn SessionStore) -> Resolution {
    let Some(route) = route_for(path) else {
        return Resolution::NotFound;
    };
    match route.access {
        Access::Public => Resolution::Render { route, chrome: false },
        Access::Guarded => match guard::evaluate(store) {
            GuardDecision::Render => Resolution::Render { route, chrome: true },
            GuardDecision::RedirectTo(to) => Resolution::Redirect { to, replace: true },
        },
    }
}
