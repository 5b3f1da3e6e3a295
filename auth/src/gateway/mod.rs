//! Identity gateway capability contract.
//!
//! ARCHITECTURE
//! ============
//! The third-party identity SDK sits behind `IdentityGateway`. The browser
//! build binds the Firebase SDK; tests use `MemoryGateway`. SSR builds no
//! gateway and renders the `Initializing` state. Nothing
//! outside `AuthStore`/`AuthService` calls a gateway directly.

pub mod memory;


use async_trait::async_trait;

use crate::error::AuthError;
use crate::session::Session;

pub use memory::{Deferred, MemoryGateway};

/// Callback receiving every gateway state-change notification.
pub type StateListener = Box<dyn Fn(Option<Session>)>;

/// Identity providers the gateway can run an interactive flow against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderId {
    Google,
}

impl ProviderId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google.com",
        }
    }
}

#[async_trait(?Send)]
pub trait IdentityGateway {
    /// Register for session change notifications, delivered in emission order.
    fn on_state_change(&self, listener: StateListener) -> GatewaySubscription;

    /// Run an interactive sign-in flow (popup or equivalent).
    async fn sign_in_interactive(&self, provider: ProviderId) -> Result<Session, AuthError>;

    /// Invalidate the current session.
    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// Live registration with a gateway's notification stream.
///
/// Dropping it unsubscribes.
#[must_use = "dropping a GatewaySubscription unsubscribes immediately"]
pub struct GatewaySubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl GatewaySubscription {
    pub fn new<F>(release: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self { release: Some(Box::new(release)) }
    }

    /// A subscription with nothing to release.
    pub fn detached() -> Self {
        Self { release: None }
    }

    /// Release now instead of at drop.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for GatewaySubscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for GatewaySubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewaySubscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}
