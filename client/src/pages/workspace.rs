//! Guarded workspace pages rendered inside the navigation shell.
//!
//! Page content is owned by other teams; each route renders a titled
//! placeholder so the shell, guard and highlighting can be exercised end to
//! end.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::{HOME_PATH, View};

#[component]
fn WorkspacePage(page: View) -> impl IntoView {
    view! {
        <Title text=page.title()/>
        <section class="workspace-page">
            <header class="workspace-page__header">
                <h2>{page.title()}</h2>
            </header>
            <div class="workspace-page__body"></div>
        </section>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! { <WorkspacePage page=View::Dashboard/> }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! { <WorkspacePage page=View::Projects/> }
}

#[component]
pub fn ProductivityPage() -> impl IntoView {
    view! { <WorkspacePage page=View::Productivity/> }
}

#[component]
pub fn BillingPage() -> impl IntoView {
    view! { <WorkspacePage page=View::Billing/> }
}

#[component]
pub fn ResourcesPage() -> impl IntoView {
    view! { <WorkspacePage page=View::Resources/> }
}

#[component]
pub fn MasterDatabasePage() -> impl IntoView {
    view! { <WorkspacePage page=View::MasterDatabase/> }
}

#[component]
pub fn InvoicesPage() -> impl IntoView {
    view! { <WorkspacePage page=View::Invoices/> }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! { <WorkspacePage page=View::Settings/> }
}

/// Fallback for paths missing from the route table.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Not found"/>
        <div class="not-found-page">
            <h1>"Page not found."</h1>
            <a href=HOME_PATH>"Back to dashboard"</a>
        </div>
    }
}
