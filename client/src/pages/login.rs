//! Public login and signup pages.
//!
//! Both render the shared [`AuthForm`]; signup is its own route and view, not
//! an alias of login.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::auth_form::{AuthForm, AuthMode};
use crate::routes::View;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <AuthCard page=View::Login mode=AuthMode::Login/> }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    view! { <AuthCard page=View::Signup mode=AuthMode::Signup/> }
}

#[component]
fn AuthCard(page: View, mode: AuthMode) -> impl IntoView {
    view! {
        <Title text=page.title()/>
        <div class="login-page">
            <div class="login-card">
                <h1>{page.title()}</h1>
                <AuthForm mode=mode/>
            </div>
        </div>
    }
}
