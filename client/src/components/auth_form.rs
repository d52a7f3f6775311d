//! Email + password form shared by the login and signup pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! How the issuer checks credentials is not this crate's concern. The form
//! validates input shape, asks the issuer for a [`wire::SessionGrant`], and on
//! success persists it and moves into the guarded area.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wire::Credentials;

use crate::state::store::SessionContext;

/// Which issuer endpoint the form talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Login => "/api/auth/login",
            Self::Signup => "/api/auth/signup",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Signup => "Create account",
        }
    }

    pub fn pending_message(self) -> &'static str {
        match self {
            Self::Login => "Signing in...",
            Self::Signup => "Creating account...",
        }
    }

    /// Prompt, link label and href pointing at the other mode.
    pub fn alternate(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Login => ("No account yet?", "Sign up", "/signup"),
            Self::Signup => ("Already registered?", "Sign in", crate::routes::LOGIN_PATH),
        }
    }
}

/// Validate raw input, returning the message to show on failure.
pub fn validate_input(email: &str, password: &str) -> Result<Credentials, String> {
    Credentials::new(email, password).map_err(|e| e.to_string())
}

#[component]
pub fn AuthForm(mode: AuthMode) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message);
                return;
            }
        };
        busy.set(true);
        info.set(mode.pending_message().to_owned());

        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::request_session(mode.endpoint(), &credentials)
                    .await
                    .and_then(|grant| {
                        crate::state::session::establish_session(&session, &grant).map_err(|e| e.to_string())
                    });
                match outcome {
                    Ok(()) => navigate(crate::routes::HOME_PATH, leptos_router::NavigateOptions::default()),
                    Err(e) => {
                        log::warn!("{} failed: {e}", mode.endpoint());
                        info.set(e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&session, &navigate, credentials);
            busy.set(false);
        }
    };

    let (prompt, link_label, link_href) = mode.alternate();
    let password_autocomplete = match mode {
        AuthMode::Login => "current-password",
        AuthMode::Signup => "new-password",
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <input
                class="auth-form__input"
                type="email"
                placeholder="you@example.com"
                autocomplete="email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                class="auth-form__input"
                type="password"
                placeholder="Password"
                autocomplete=password_autocomplete
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                {mode.submit_label()}
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="auth-form__message">{move || info.get()}</p>
            </Show>
            <p class="auth-form__alternate">
                {prompt} " " <a href=link_href>{link_label}</a>
            </p>
        </form>
    }
}
