//! Identity gateway configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server reads these six values from the environment once at startup and
//! embeds them in the HTML shell as JSON; the browser parses that JSON back
//! before initializing the gateway. Field names serialize in camelCase so the
//! same document can be handed to the Firebase SDK unchanged.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::GatewayInitError;

pub const ENV_API_KEY: &str = "FIREBASE_API_KEY";
pub const ENV_AUTH_DOMAIN: &str = "FIREBASE_AUTH_DOMAIN";
pub const ENV_PROJECT_ID: &str = "FIREBASE_PROJECT_ID";
pub const ENV_STORAGE_BUCKET: &str = "FIREBASE_STORAGE_BUCKET";
pub const ENV_MESSAGING_SENDER_ID: &str = "FIREBASE_MESSAGING_SENDER_ID";
pub const ENV_APP_ID: &str = "FIREBASE_APP_ID";

/// DOM id of the `<script type="application/json">` element carrying the config.
pub const CONFIG_ELEMENT_ID: &str = "gateway-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

impl GatewayConfig {
    /// Build config from process environment variables.
    ///
    /// Required (all non-blank):
    /// - `FIREBASE_API_KEY`
    /// - `FIREBASE_AUTH_DOMAIN`
    /// - `FIREBASE_PROJECT_ID`
    /// - `FIREBASE_STORAGE_BUCKET`
    /// - `FIREBASE_MESSAGING_SENDER_ID`
    /// - `FIREBASE_APP_ID`
    ///
    /// # Errors
    ///
    /// Returns `MissingConfig` naming the first absent or blank variable.
    pub fn from_env() -> Result<Self, GatewayInitError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `MissingConfig` naming the first absent or blank key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GatewayInitError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| GatewayInitError::MissingConfig { var: var.to_owned() })
        };

        Ok(Self {
            api_key: required(ENV_API_KEY)?,
            auth_domain: required(ENV_AUTH_DOMAIN)?,
            project_id: required(ENV_PROJECT_ID)?,
            storage_bucket: required(ENV_STORAGE_BUCKET)?,
            messaging_sender_id: required(ENV_MESSAGING_SENDER_ID)?,
            app_id: required(ENV_APP_ID)?,
        })
    }

    /// Parse the JSON document embedded in the page shell.
    ///
    /// # Errors
    ///
    /// Returns `Malformed` for invalid JSON and `MissingConfig` for blank fields.
    pub fn from_json(raw: &str) -> Result<Self, GatewayInitError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| GatewayInitError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize for embedding in the page shell.
    ///
    /// `</` is escaped so the document cannot terminate its `<script>` element.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_owned())
            .replace("</", "<\\/")
    }

    /// Reject blank fields.
    ///
    /// # Errors
    ///
    /// Returns `MissingConfig` naming the env var behind the first blank field.
    pub fn validate(&self) -> Result<(), GatewayInitError> {
        let fields = [
            (ENV_API_KEY, &self.api_key),
            (ENV_AUTH_DOMAIN, &self.auth_domain),
            (ENV_PROJECT_ID, &self.project_id),
            (ENV_STORAGE_BUCKET, &self.storage_bucket),
            (ENV_MESSAGING_SENDER_ID, &self.messaging_sender_id),
            (ENV_APP_ID, &self.app_id),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((var, _)) => Err(GatewayInitError::MissingConfig { var: (*var).to_owned() }),
            None => Ok(()),
        }
    }
}
