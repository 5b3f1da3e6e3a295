//! # auth
//!
//! Authentication state propagation and route guarding for the Scera
//! front-end.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider (Firebase Google sign-in in the browser) is reached
//! only through the `IdentityGateway` trait. `AuthStore` mirrors the gateway's
//! notification stream into an `AuthStatus`, `AuthService` is the single
//! facade the UI talks to, and `guard` turns status + view requirements into
//! navigation decisions.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`); the browser event loop
//! is the only executor.

pub mod config;
pub mod debug;
pub mod error;
pub mod gateway;
pub mod guard;
pub mod service;
pub mod session;
pub mod status;
pub mod store;

pub use config::GatewayConfig;
pub use error::{AuthError, GatewayInitError};
pub use gateway::{GatewaySubscription, IdentityGateway, ProviderId};
pub use guard::{GuardDecision, GuardRoutes, Navigator, RouteGuard, ViewAccess};
pub use service::AuthService;
pub use session::Session;
pub use status::AuthStatus;
pub use store::{AuthStore, Subscription};
