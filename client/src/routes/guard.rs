//! Route guard gating every authenticated view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once as the parent of all guarded routes. Its decision is
//! recomputed whenever the location changes, so moving between guarded pages
//! re-checks the session the same way the first entry did. The decision comes
//! from [`super::resolve`] over the route table, and the outlet stays
//! unrendered while a redirect is pending.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::is_authenticated;
use crate::state::store::{SessionContext, SessionStore};

use super::{LOGIN_PATH, Resolution, resolve};

/// Result of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the nested routes.
    Render,
    /// Leave for this path without rendering.
    RedirectTo(&'static str),
}

/// Consult the session oracle for the current store contents.
pub fn evaluate(store: &dyn SessionStore) -> GuardDecision {
    if is_authenticated(store) {
        GuardDecision::Render
    } else {
        GuardDecision::RedirectTo(LOGIN_PATH)
    }
}

/// Decision for the guarded location `path`, dispatched through the route
/// table. A path the router mounted but the table lacks is still gated.
pub fn decide(path: &str, store: &dyn SessionStore) -> GuardDecision {
    match resolve(path, store) {
        Resolution::Render { .. } => GuardDecision::Render,
        Resolution::Redirect { to, .. } => GuardDecision::RedirectTo(to),
        Resolution::NotFound => {
            log::warn!("{path} is routed under the guard but missing from the route table");
            evaluate(store)
        }
    }
}

/// Whether the nested routes may render for `decision`.
pub fn shows_outlet(decision: GuardDecision) -> bool {
    decision == GuardDecision::Render
}

/// Navigation options for a guard redirect. The guarded entry is replaced so
/// the back button cannot return to it.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Renders the matched child route, or redirects to `/login` when signed out.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| location.pathname.with(|path| decide(path, &session)));

    Effect::new(move || {
        if let GuardDecision::RedirectTo(path) = decision.get() {
            navigate(path, redirect_options());
        }
    });

    view! {
        <Show when=move || shows_outlet(decision.get())>
            <Outlet/>
        </Show>
    }
}
