//! Public landing page at `/`.

use leptos::prelude::*;

use crate::routes::{HOME_PATH, LOGIN_PATH};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1>"Project Starter Pack"</h1>
            <p class="landing-page__subtitle">"Plan projects, track time, send invoices."</p>
            <div class="landing-page__actions">
                <a class="landing-page__cta" href=LOGIN_PATH>"Sign in"</a>
                <a class="landing-page__cta landing-page__cta--secondary" href="/signup">"Create account"</a>
                <a class="landing-page__link" href=HOME_PATH>"Go to dashboard"</a>
            </div>
        </div>
    }
}
