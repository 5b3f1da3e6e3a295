//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical guard behavior: the render decision is
//! derived from the `AuthState` signal, and a `RouteGuard` bound to the view's
//! reactive owner performs the redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use auth::AuthService;
use auth::guard::{self, GuardDecision, GuardRoutes, ViewAccess};
use leptos::prelude::*;

use crate::state::auth::{AuthHandle, AuthState};

/// Render decision for a view given the current auth snapshot.
pub fn decision_for(state: &AuthState, access: ViewAccess) -> GuardDecision {
    guard::evaluate(&state.status(), access, &GuardRoutes::default())
}

/// Guard the current view and return its reactive render decision.
pub fn use_route_guard(access: ViewAccess) -> Memo<GuardDecision> {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_redirect(access);
    Memo::new(move |_| decision_for(&auth.get(), access))
}

#[cfg(feature = "hydrate")]
fn install_redirect(access: ViewAccess) {
    use auth::RouteGuard;
    use leptos_router::NavigateOptions;
    use leptos_router::hooks::use_navigate;

    let Some(service) = use_auth_actions().service() else {
        return;
    };
    let navigate = use_navigate();
    let mounted = MountFlag::current();
    let guard = RouteGuard::activate(&service, access, GuardRoutes::default(), move |path: &str| {
        let navigate = navigate.clone();
        let path = path.to_owned();
        // Navigating mid-render confuses the router; defer to the next frame.
        request_animation_frame(move || {
            if mounted.is_mounted() {
                navigate(&path, NavigateOptions::default());
            } else {
                tracing::debug!(%path, "dropping redirect queued by unmounted view");
            }
        });
    });
    // Owned by the view's reactive owner and dropped when the view unmounts.
    let _ = StoredValue::new_local(guard);
}

#[cfg(not(feature = "hydrate"))]
fn install_redirect(_access: ViewAccess) {}

/// Liveness of the reactive owner that created it.
///
/// The flag lives in the owner's arena and is disposed with it, so deferred
/// work can check it before acting on behalf of a view that has unmounted.
#[derive(Clone, Copy)]
pub struct MountFlag(StoredValue<bool>);

impl MountFlag {
    pub fn current() -> Self {
        Self(StoredValue::new(true))
    }

    pub fn is_mounted(self) -> bool {
        self.0.try_get_value().unwrap_or(false)
    }
}

/// Identity actions available to event handlers.
#[derive(Clone, Copy)]
pub struct AuthActions {
    handle: Option<AuthHandle>,
}

/// Capture the auth runtime for later use in event handlers.
pub fn use_auth_actions() -> AuthActions {
    AuthActions { handle: use_context::<AuthHandle>() }
}

impl AuthActions {
    fn service(self) -> Option<AuthService> {
        self.handle?.try_with_value(|runtime| runtime.service.clone())
    }

    pub fn sign_in_with_google(self) {
        match self.service() {
            Some(service) => leptos::task::spawn_local(async move { service.sign_in_with_google().await }),
            None => tracing::warn!("sign-in requested before auth runtime is available"),
        }
    }

    pub fn sign_out(self) {
        match self.service() {
            Some(service) => leptos::task::spawn_local(async move { service.sign_out().await }),
            None => tracing::warn!("sign-out requested before auth runtime is available"),
        }
    }
}
