//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page declares its `ViewAccess`, installs the route guard through
//! `util::auth::use_route_guard`, and renders from the resulting decision.

pub mod home;
pub mod library;
pub mod login;
pub mod signup;
