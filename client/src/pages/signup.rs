//! Sign-up page. Public, so it carries no route guard.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::auth::use_auth_actions;

fn sign_up_label(loading: bool) -> &'static str {
    if loading { "Signing up..." } else { "Sign up with Google" }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let actions = use_auth_actions();
    let loading = move || auth.get().loading;

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign up for Scera"</h1>
                <button
                    class="login-button"
                    on:click=move |_| actions.sign_in_with_google()
                    disabled=loading
                >
                    {move || sign_up_label(loading())}
                </button>
            </div>
        </div>
    }
}
