//! Development overlay contents.

#[cfg(test)]
#[path = "debug_test.rs"]
mod debug_test;

use std::fmt;

use crate::status::AuthStatus;

const NULL: &str = "null";

/// Three-line snapshot shown in the corner overlay of debug builds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthDebugInfo {
    pub loading: bool,
    pub user: String,
    pub uid: String,
}

impl AuthDebugInfo {
    #[must_use]
    pub fn from_status(status: &AuthStatus) -> Self {
        let session = status.session();
        Self {
            loading: status.is_loading(),
            user: session
                .and_then(|s| s.email.clone())
                .unwrap_or_else(|| NULL.to_owned()),
            uid: session.map_or_else(|| NULL.to_owned(), crate::session::Session::short_id),
        }
    }

    #[must_use]
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Loading: {}", self.loading),
            format!("User: {}", self.user),
            format!("UID: {}", self.uid),
        ]
    }
}

impl fmt::Display for AuthDebugInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
