//! Tagged authentication status.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::session::Session;

/// Exactly one of these holds at any time.
///
/// `Initializing` covers both "the gateway has not reported yet" and "a
/// sign-in or sign-out call is in flight". It is the only state in which
/// navigation decisions are deferred.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Initializing,
    Authenticated(Session),
    Unauthenticated,
}

impl AuthStatus {
    /// Map a gateway notification payload to a settled status.
    #[must_use]
    pub fn from_notification(session: Option<Session>) -> Self {
        match session {
            Some(session) => Self::Authenticated(session),
            None => Self::Unauthenticated,
        }
    }

    /// Short tag for logs; never includes session details.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Authenticated(_) => "authenticated",
            Self::Unauthenticated => "unauthenticated",
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Initializing)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}
