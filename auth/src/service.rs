//! The auth facade handed to the UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `AuthService` is built at startup around the gateway and passed to the
//! component tree as a handle. It is the only path from UI code to the
//! identity provider.
//!
//! ERROR HANDLING
//! ==============
//! Sign-in and sign-out failures are logged and swallowed: callers get `()`
//! and the status drops back to its prior settled value. UI code reacts to
//! status changes, not to call outcomes.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use std::rc::Rc;

use crate::gateway::{IdentityGateway, ProviderId};
use crate::session::Session;
use crate::status::AuthStatus;
use crate::store::{AuthStore, Subscription};

#[derive(Clone)]
pub struct AuthService {
    gateway: Rc<dyn IdentityGateway>,
    store: AuthStore,
}

impl AuthService {
    /// Wrap a gateway and start listening to it.
    pub fn new<G>(gateway: G) -> Self
    where
        G: IdentityGateway + 'static,
    {
        Self::with_store(Rc::new(gateway), AuthStore::new())
    }

    /// Wrap a shared gateway and an existing store. The store is initialized
    /// against the gateway if it has not been already.
    ///
    /// An already-initialized store keeps its existing gateway listener, so
    /// it must have been initialized against this same gateway.
    pub fn with_store(gateway: Rc<dyn IdentityGateway>, store: AuthStore) -> Self {
        if !store.initialize(gateway.as_ref()) {
            tracing::warn!("auth store already listening; reusing its existing gateway subscription");
        }
        Self { gateway, store }
    }

    /// Run the Google popup flow.
    pub async fn sign_in_with_google(&self) {
        let _call = self.store.begin_call();
        match self.gateway.sign_in_interactive(ProviderId::Google).await {
            Ok(session) => {
                tracing::info!(user_id = %session.id, "signed in");
                self.store.apply_notification(Some(session));
            }
            Err(e) => tracing::error!(error = %e, "sign-in failed"),
        }
    }

    pub async fn sign_out(&self) {
        let _call = self.store.begin_call();
        match self.gateway.sign_out().await {
            Ok(()) => {
                tracing::info!("signed out");
                self.store.apply_notification(None);
            }
            Err(e) => tracing::error!(error = %e, "sign-out failed"),
        }
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.store.status()
    }

    #[must_use]
    pub fn current_session(&self) -> Option<Session> {
        self.store.current_session()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&AuthStatus) + 'static,
    {
        self.store.subscribe(callback)
    }

    #[must_use]
    pub fn store(&self) -> &AuthStore {
        &self.store
    }
}
