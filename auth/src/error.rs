//! Error types for gateway initialization and identity actions.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// The gateway could not be brought up. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayInitError {
    /// A required configuration value is absent or blank.
    #[error("missing gateway config: env var {var} not set")]
    MissingConfig { var: String },

    /// Configuration was present but could not be parsed.
    #[error("gateway config parse failed: {0}")]
    Malformed(String),

    /// The identity SDK rejected initialization or is not loaded.
    #[error("identity SDK init failed: {0}")]
    Sdk(String),
}

/// Interactive sign-in or sign-out failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The user closed or cancelled the sign-in flow.
    #[error("sign-in cancelled by user")]
    Cancelled,

    /// The browser refused to open the sign-in popup.
    #[error("sign-in popup blocked")]
    PopupBlocked,

    /// The provider could not be reached.
    #[error("network failure: {0}")]
    Network(String),

    /// Any other provider-reported failure.
    #[error("provider error {code}: {message}")]
    Provider { code: String, message: String },
}

impl AuthError {
    /// Classify a provider error code (`auth/...`) into a typed error.
    #[must_use]
    pub fn from_code(code: &str, message: &str) -> Self {
        match code {
            "auth/popup-closed-by-user" | "auth/cancelled-popup-request" | "auth/user-cancelled" => {
                Self::Cancelled
            }
            "auth/popup-blocked" => Self::PopupBlocked,
            "auth/network-request-failed" | "auth/timeout" => Self::Network(message.to_owned()),
            other => Self::Provider { code: other.to_owned(), message: message.to_owned() },
        }
    }
}
