//! Chrome wrapping every guarded view: sidebar plus a scrollable main area.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use super::sidebar::Sidebar;

#[component]
pub fn ShellLayout() -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar/>
            <main class="shell__main">
                <Outlet/>
            </main>
        </div>
    }
}
