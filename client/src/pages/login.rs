//! Login page with Google sign-in.
//!
//! Signed-in viewers are redirected to the dashboard by the route guard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use auth::{GuardDecision, ViewAccess};
use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::auth::{use_auth_actions, use_route_guard};

fn sign_in_label(loading: bool) -> &'static str {
    if loading { "Signing in..." } else { "Sign in with Google" }
}

fn shows_redirect_notice(decision: &GuardDecision) -> bool {
    matches!(decision, GuardDecision::Redirect(_))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let decision = use_route_guard(ViewAccess::RequiresNoSession);
    let auth = expect_context::<RwSignal<AuthState>>();
    let actions = use_auth_actions();
    let loading = move || auth.get().loading;

    move || {
        if shows_redirect_notice(&decision.get()) {
            return view! {
                <div class="loading-screen">
                    <div class="loading-screen__message">"Redirecting to dashboard..."</div>
                </div>
            }
            .into_any();
        }

        view! {
            <div class="login-page">
                <div class="login-card">
                    <h1>"Scera"</h1>
                    <p class="login-card__subtitle">"AI-enhanced reading and knowledge management"</p>
                    <button
                        class="login-button"
                        on:click=move |_| actions.sign_in_with_google()
                        disabled=loading
                    >
                        {move || sign_in_label(loading())}
                    </button>
                    <p class="login-card__help">
                        "Sign in to access your personal library and AI reading features"
                    </p>
                </div>
            </div>
        }
        .into_any()
    }
}
