//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::ShellLayout;
use crate::pages::landing::LandingPage;
use crate::pages::login::{LoginPage, SignupPage};
use crate::pages::workspace::{
    BillingPage, DashboardPage, InvoicesPage, MasterDatabasePage, NotFoundPage, ProductivityPage, ProjectsPage,
    ResourcesPage, SettingsPage,
};
use crate::routes::guard::RouteGuard;
use crate::state::store::SessionContext;

/// Root application component backed by the browser's `localStorage`.
#[component]
pub fn App() -> impl IntoView {
    view! { <AppWithSession session=SessionContext::browser()/> }
}

/// Root application component over an explicit session store.
///
/// Public routes sit at the top level. Every guarded route is nested under
/// the single [`RouteGuard`] and the single [`ShellLayout`], mirroring
/// `routes::ROUTE_TABLE`.
#[component]
pub fn AppWithSession(session: SessionContext) -> impl IntoView {
    provide_meta_context();
    provide_context(session);

    view! {
        <Title formatter=|text| format!("{text} · Project Starter Pack")/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <ParentRoute path=StaticSegment("") view=RouteGuard>
                    <ParentRoute path=StaticSegment("") view=ShellLayout>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                        <Route path=StaticSegment("projects") view=ProjectsPage/>
                        <Route path=StaticSegment("productivity") view=ProductivityPage/>
                        <Route path=StaticSegment("billing") view=BillingPage/>
                        <Route path=StaticSegment("resources") view=ResourcesPage/>
                        <Route path=StaticSegment("masterdatabase") view=MasterDatabasePage/>
                        <Route path=StaticSegment("invoices") view=InvoicesPage/>
                        <Route path=StaticSegment("settings") view=SettingsPage/>
                    </ParentRoute>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
