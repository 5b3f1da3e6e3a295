//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is the reactive mirror of `auth::AuthStore`, provided as an
//! `RwSignal` so any component can render identity-dependent UI. The live
//! `AuthService` handle lives beside it in browser builds only.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use auth::{AuthService, AuthStatus, Session, Subscription};
use leptos::prelude::{LocalStorage, StoredValue};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::from(&AuthStatus::Initializing)
    }
}

impl From<&AuthStatus> for AuthState {
    fn from(status: &AuthStatus) -> Self {
        Self { user: status.session().cloned(), loading: status.is_loading() }
    }
}

impl AuthState {
    /// Tagged status equivalent of this snapshot.
    #[must_use]
    pub fn status(&self) -> AuthStatus {
        if self.loading {
            return AuthStatus::Initializing;
        }
        AuthStatus::from_notification(self.user.clone())
    }

    /// Greeting name for the signed-in user.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        self.user.as_ref().map(|user| user.label().to_owned())
    }
}

/// Browser-side auth runtime: the service plus the subscription that keeps
/// the `AuthState` signal in sync with it.
pub struct ClientAuth {
    pub service: AuthService,
    _mirror: Subscription,
}

impl ClientAuth {
    pub fn new(service: AuthService, mirror: Subscription) -> Self {
        Self { service, _mirror: mirror }
    }
}

/// Context handle to the auth runtime. Only provided in hydrated builds.
pub type AuthHandle = StoredValue<ClientAuth, LocalStorage>;
