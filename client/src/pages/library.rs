//! Library page showing the user's book collection. Requires a session.

use auth::{GuardDecision, ViewAccess};
use leptos::prelude::*;

use crate::components::loading_screen::LoadingScreen;
use crate::state::auth::AuthState;
use crate::util::auth::{use_auth_actions, use_route_guard};

#[component]
pub fn LibraryPage() -> impl IntoView {
    let decision = use_route_guard(ViewAccess::RequiresSession);
    let auth = expect_context::<RwSignal<AuthState>>();
    let actions = use_auth_actions();

    // The guard sends the viewer to /login once the sign-out settles.
    let on_sign_out = move |_| actions.sign_out();
    let user_label = move || auth.get().label().unwrap_or_default();

    move || match decision.get() {
        GuardDecision::Checking => view! { <LoadingScreen/> }.into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
        GuardDecision::Render => view! {
            <div class="library-page">
                <header class="library-header">
                    <a href="/" class="library-header__logo">"Scera"</a>
                    <div class="library-header__user">
                        <span>{user_label}</span>
                        <button
                            class="button button--danger"
                            on:click=on_sign_out
                            disabled=move || auth.get().loading
                        >
                            "Sign Out"
                        </button>
                    </div>
                </header>
                <main class="library-main">
                    <h1>"My Library"</h1>
                    <div class="empty-state">
                        <div class="empty-state__icon">"📚"</div>
                        <h3>"Your library is empty"</h3>
                        <p>"Upload your first book to get started with AI-enhanced reading"</p>
                        <div class="badge badge--pending">"📤 Book upload coming soon"</div>
                    </div>
                </main>
            </div>
        }
        .into_any(),
    }
}
