//! Reusable UI components.

pub mod auth_debug;
pub mod loading_screen;
