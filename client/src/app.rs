//! Root application component with routing and context providers.

use auth::GatewayConfig;
use auth::config::CONFIG_ELEMENT_ID;
use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_debug::AuthDebug;
use crate::pages::{home::HomePage, library::LibraryPage, login::LoginPage, signup::SignupPage};
use crate::state::auth::AuthState;

const FIREBASE_APP_SDK: &str = "https://www.gstatic.com/firebasejs/10.12.2/firebase-app-compat.js";
const FIREBASE_AUTH_SDK: &str = "https://www.gstatic.com/firebasejs/10.12.2/firebase-auth-compat.js";

/// HTML shell rendered on the server for SSR + hydration.
///
/// The identity SDK scripts load before the hydration bundle, and the gateway
/// config is embedded as JSON for the browser to pick up.
pub fn shell(options: LeptosOptions, gateway_config: GatewayConfig) -> impl IntoView {
    let config_json = gateway_config.to_json();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src=FIREBASE_APP_SDK></script>
                <script src=FIREBASE_AUTH_SDK></script>
                <script id=CONFIG_ELEMENT_ID type="application/json" inner_html=config_json></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the auth runtime once (browser only) and hands it to the tree
/// through context alongside the `AuthState` mirror.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    {
        match crate::net::connect(auth) {
            Ok(runtime) => provide_context::<crate::state::auth::AuthHandle>(StoredValue::new_local(runtime)),
            Err(e) => tracing::error!(error = %e, "identity gateway init failed; auth stays unresolved"),
        }
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/scera.css"/>
        <Title text="Scera"/>
        <Meta name="description" content="AI-enhanced reading and knowledge management platform"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("library") view=LibraryPage/>
            </Routes>
        </Router>
        <AuthDebug/>
    }
}
