//! Browser-side gateway wiring.
//!
//! Only hydrated builds talk to the identity provider; SSR renders with the
//! default `Initializing` state and leaves resolution to the browser.

#[cfg(feature = "hydrate")]
pub mod firebase;

#[cfg(feature = "hydrate")]
use auth::{AuthService, GatewayInitError};
#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::auth::{AuthState, ClientAuth};

/// Bring up the Firebase gateway and mirror its status into `auth`.
///
/// # Errors
///
/// Returns `GatewayInitError` when the embedded config is missing or invalid,
/// or when the SDK refuses to initialize.
#[cfg(feature = "hydrate")]
pub fn connect(auth: RwSignal<AuthState>) -> Result<ClientAuth, GatewayInitError> {
    let config = firebase::read_embedded_config()?;
    let gateway = firebase::FirebaseGateway::initialize(&config)?;
    let service = AuthService::new(gateway);

    auth.set(AuthState::from(&service.status()));
    let mirror = service.subscribe(move |status| auth.set(AuthState::from(status)));
    Ok(ClientAuth::new(service, mirror))
}
