//! Corner overlay with the live auth snapshot. Debug builds only.

use auth::debug::AuthDebugInfo;
use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn AuthDebug() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let lines = move || AuthDebugInfo::from_status(&auth.get().status()).lines();

    cfg!(debug_assertions).then(|| {
        view! {
            <div class="auth-debug">
                {move || lines().into_iter().map(|line| view! { <div>{line}</div> }).collect_view()}
            </div>
        }
    })
}
