//! Navigation shell sidebar: nav links with active highlighting and logout.
//!
//! DESIGN
//! ======
//! Which item is active is decided by [`active_index`] from an explicit path,
//! and session teardown lives in [`logout`]; the component only wires both to
//! the router's location and navigator.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::guard::redirect_options;
use crate::routes::{HOME_PATH, LOGIN_PATH};
use crate::state::session::{current_user, end_session};
use crate::state::store::{SessionContext, SessionStore, StorageError};

const APP_NAME: &str = "Project Starter Pack";
const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Glyph shown beside a navigation label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Folder,
    Chart,
    Card,
    Book,
    Database,
    Receipt,
    Gear,
}

impl NavIcon {
    fn glyph(self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Folder => "▤",
            Self::Chart => "▥",
            Self::Card => "▭",
            Self::Book => "▯",
            Self::Database => "◫",
            Self::Receipt => "≣",
            Self::Gear => "⚙",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: NavIcon,
    pub path: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", icon: NavIcon::Home, path: HOME_PATH },
    NavItem { label: "Projects", icon: NavIcon::Folder, path: "/projects" },
    NavItem { label: "Productivity", icon: NavIcon::Chart, path: "/productivity" },
    NavItem { label: "Billing", icon: NavIcon::Card, path: "/billing" },
    NavItem { label: "Resources", icon: NavIcon::Book, path: "/resources" },
    NavItem { label: "Master Database", icon: NavIcon::Database, path: "/masterdatabase" },
    NavItem { label: "Invoices", icon: NavIcon::Receipt, path: "/invoices" },
    NavItem { label: "Settings", icon: NavIcon::Gear, path: "/settings" },
];

/// Index of the item whose path equals `current_path` exactly.
pub fn active_index(items: &[NavItem], current_path: &str) -> Option<usize> {
    items.iter().position(|item| item.path == current_path)
}

/// Clear the session and return where to navigate next.
///
/// # Errors
///
/// Propagates [`StorageError`] when the store cannot remove the keys.
pub fn logout(store: &dyn SessionStore) -> Result<&'static str, StorageError> {
    end_session(store)?;
    Ok(LOGIN_PATH)
}

/// Persistent sidebar rendered beside every guarded view.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let location = use_location();
    let navigate = use_navigate();

    let active = Memo::new(move |_| active_index(NAV_ITEMS, &location.pathname.get()));

    let user_name = {
        let session = session.clone();
        move || {
            location.pathname.track();
            current_user(&session).map(|user| user.name)
        }
    };

    let on_logout = move |_| match logout(&session) {
        Ok(target) => navigate(target, redirect_options()),
        Err(err) => log::error!("logout failed: {err}"),
    };

    let links = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let is_active = move || active.get() == Some(idx);
            view! {
                <a
                    href=item.path
                    class="sidebar__link"
                    class:sidebar__link--active=is_active
                    aria-current=move || is_active().then_some("page")
                >
                    <span class="sidebar__icon" aria-hidden="true">{item.icon.glyph()}</span>
                    <span class="sidebar__label">{item.label}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <aside class="sidebar">
            <div class="sidebar__top">
                <div class="sidebar__brand">
                    <h1 class="sidebar__title">{APP_NAME}</h1>
                    <p class="sidebar__version">{APP_VERSION}</p>
                </div>
                <nav class="sidebar__nav">{links}</nav>
            </div>
            <div class="sidebar__footer">
                {move || user_name().map(|name| view! { <p class="sidebar__user">{name}</p> })}
                <button class="sidebar__logout" on:click=on_logout>
                    <span class="sidebar__icon" aria-hidden="true">"⇦"</span>
                    <span class="sidebar__label">"Logout"</span>
                </button>
            </div>
        </aside>
    }
}
