//! Full-screen placeholder shown while auth status is unresolved.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen(#[prop(into, default = "Loading...".into())] message: String) -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__message">{message}</div>
        </div>
    }
}
