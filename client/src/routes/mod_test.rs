use super::*;
use crate::state::store::{MemoryStore, TOKEN_KEY, USER_KEY};

fn guarded_paths() -> impl Iterator<Item = &'static str> {
    ROUTE_TABLE
        .iter()
        .filter(|route| route.access == Access::Guarded)
        .map(|route| route.path)
}

/// Redirect chains longer than this resolve as not found.
const MAX_REDIRECTS: usize = 4;

/// Where the browser ends up after following every redirect from a path.
#[derive(Debug)]
struct Navigation {
    location: String,
    rendered: Option<&'static RouteDecl>,
    chrome: bool,
    replaced: bool,
}

fn navigate(path: &str, store: &dyn SessionStore) -> Navigation {
    let mut location = path.to_owned();
    let mut replaced = false;
    for _ in 0..=MAX_REDIRECTS {
        match resolve(&location, store) {
            Resolution::Render { route, chrome } => {
                return Navigation { location, rendered: Some(route), chrome, replaced };
            }
            Resolution::Redirect { to, replace } => {
                location = to.to_owned();
                replaced |= replace;
            }
            Resolution::NotFound => break,
        }
    }
    Navigation { location, rendered: None, chrome: false, replaced }
}

fn signed_in() -> MemoryStore {
    MemoryStore::with_entries([(TOKEN_KEY, "abc123")])
}

// =============================================================
// Table shape
// =============================================================

#[test]
fn route_paths_are_distinct() {
    for (i, route) in ROUTE_TABLE.iter().enumerate() {
        assert!(
            ROUTE_TABLE[i + 1..].iter().all(|other| other.path != route.path),
            "duplicate path {}",
            route.path
        );
    }
}

#[test]
fn route_views_are_distinct() {
    for (i, route) in ROUTE_TABLE.iter().enumerate() {
        assert!(
            ROUTE_TABLE[i + 1..].iter().all(|other| other.view != route.view),
            "view {:?} declared twice",
            route.view
        );
    }
}

#[test]
fn public_entries_are_landing_login_signup() {
    let public: Vec<_> = ROUTE_TABLE
        .iter()
        .filter(|route| route.access == Access::Public)
        .map(|route| (route.path, route.view))
        .collect();
    assert_eq!(
        public,
        vec![("/", View::Landing), ("/login", View::Login), ("/signup", View::Signup)]
    );
}

#[test]
fn signup_is_not_an_alias_of_login() {
    let signup = route_for("/signup").expect("signup declared");
    assert_eq!(signup.view, View::Signup);
    assert_ne!(signup.view, route_for(LOGIN_PATH).expect("login declared").view);
}

#[test]
fn route_for_is_exact_match() {
    assert!(route_for("/dashboard").is_some());
    assert!(route_for("/dashboard/").is_none());
    assert!(route_for("/Dashboard").is_none());
    assert!(route_for("/nope").is_none());
}

// =============================================================
// resolve
// =============================================================

#[test]
fn public_routes_render_without_chrome_when_signed_out() {
    let store = MemoryStore::new();
    for path in ["/", "/login", "/signup"] {
        match resolve(path, &store) {
            Resolution::Render { route, chrome } => {
                assert_eq!(route.path, path);
                assert!(!chrome);
            }
            other => panic!("{path} resolved to {other:?}"),
        }
    }
}

#[test]
fn guarded_routes_redirect_with_replace_when_signed_out() {
    let store = MemoryStore::new();
    for path in guarded_paths() {
        assert_eq!(
            resolve(path, &store),
            Resolution::Redirect { to: LOGIN_PATH, replace: true },
            "{path}"
        );
    }
}

#[test]
fn unknown_path_is_not_found() {
    assert_eq!(resolve("/missing", &signed_in()), Resolution::NotFound);
}

// =============================================================
// navigate
// =============================================================

#[test]
fn signed_out_guarded_navigation_lands_on_login() {
    let store = MemoryStore::new();
    for path in guarded_paths() {
        let nav = navigate(path, &store);
        assert_eq!(nav.location, LOGIN_PATH, "{path}");
        assert_eq!(nav.rendered.map(|r| r.view), Some(View::Login));
        assert!(!nav.chrome);
        assert!(nav.replaced);
    }
}

#[test]
fn signed_in_guarded_navigation_renders_inside_shell() {
    let store = signed_in();
    for path in guarded_paths() {
        let nav = navigate(path, &store);
        assert_eq!(nav.location, path);
        assert_eq!(nav.rendered.map(|r| r.path), Some(path));
        assert!(nav.chrome, "{path} must be wrapped by the navigation shell");
        assert!(!nav.replaced);
    }
}

#[test]
fn empty_store_dashboard_redirects_to_login() {
    let nav = navigate("/dashboard", &MemoryStore::new());
    assert_eq!(nav.location, "/login");
}

#[test]
fn token_store_dashboard_renders_dashboard() {
    let nav = navigate("/dashboard", &signed_in());
    assert_eq!(nav.location, "/dashboard");
    assert_eq!(nav.rendered.map(|r| r.view), Some(View::Dashboard));
}

#[test]
fn user_only_store_dashboard_redirects_to_login() {
    let store = MemoryStore::with_entries([(USER_KEY, r#"{"id":"u","name":"n","email":"e@x"}"#)]);
    let nav = navigate("/dashboard", &store);
    assert_eq!(nav.location, "/login");
    assert_ne!(nav.rendered.map(|r| r.view), Some(View::Dashboard));
}

#[test]
fn unavailable_storage_dashboard_redirects_to_login() {
    let nav = navigate("/dashboard", &MemoryStore::unavailable());
    assert_eq!(nav.location, "/login");
}

#[test]
fn unknown_path_navigation_renders_nothing() {
    let nav = navigate("/missing", &MemoryStore::new());
    assert_eq!(nav.location, "/missing");
    assert_eq!(nav.rendered, None);
}

#[test]
fn view_titles_are_non_empty() {
    for route in ROUTE_TABLE {
        assert!(!route.view.title().is_empty());
    }
}
