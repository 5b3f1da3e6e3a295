//! The authenticated principal as reported by the identity gateway.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

const SHORT_ID_LEN: usize = 8;

/// Minimal identity record for the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Provider-assigned unique user id.
    pub id: String,
    /// Display name, if the provider supplies one.
    pub display_name: Option<String>,
    /// Email address, if the provider supplies one.
    pub email: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), display_name: None, email: None }
    }

    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Human-facing name: display name, then email, then the raw id.
    #[must_use]
    pub fn label(&self) -> &str {
        non_blank(self.display_name.as_deref())
            .or_else(|| non_blank(self.email.as_deref()))
            .unwrap_or(&self.id)
    }

    /// Truncated id for diagnostics, e.g. `abcdefgh...`.
    #[must_use]
    pub fn short_id(&self) -> String {
        let prefix: String = self.id.chars().take(SHORT_ID_LEN).collect();
        format!("{prefix}...")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
