//! Dashboard for authenticated users.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route after sign-in. Unauthenticated viewers are
//! redirected to `/login` by the route guard.

use auth::GuardDecision;
use auth::ViewAccess;
use leptos::prelude::*;

use crate::components::loading_screen::LoadingScreen;
use crate::state::auth::AuthState;
use crate::util::auth::use_route_guard;

#[component]
pub fn HomePage() -> impl IntoView {
    let decision = use_route_guard(ViewAccess::RequiresSession);
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || format!("Hello, {}", auth.get().label().unwrap_or_default());

    move || match decision.get() {
        GuardDecision::Checking => view! { <LoadingScreen/> }.into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
        GuardDecision::Render => view! {
            <div class="home-page">
                <div class="home-page__inner">
                    <h1>"Welcome to Scera"</h1>
                    <p class="home-page__greeting">{greeting}</p>
                    <div class="dashboard-grid">
                        <a href="/library" class="dashboard-card">
                            <div class="dashboard-card__icon">"📚"</div>
                            <h2>"My Library"</h2>
                            <p>"View and manage your books"</p>
                        </a>
                        <div class="dashboard-card dashboard-card--disabled">
                            <div class="dashboard-card__icon">"⬆️"</div>
                            <h2>"Upload Book"</h2>
                            <p>"Coming soon..."</p>
                        </div>
                    </div>
                </div>
            </div>
        }
        .into_any(),
    }
}
