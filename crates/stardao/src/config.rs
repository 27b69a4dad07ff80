//! Engine configuration

use stardao_core::{Error, Result};

use serde::Deserialize;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Connection URL of the backing store
    #[serde(default = "default_url")]
    pub url: String,

    /// What keyed writes do when the entity's identity is unset
    #[serde(default)]
    pub identity_policy: IdentityPolicy,
}

/// Behavior of `update` and `delete` for an entity whose identity values are
/// unset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityPolicy {
    /// Issue the statement anyway. The identity compares against NULL, so no
    /// row is affected.
    #[default]
    AffectNone,

    /// Fail with a missing identity error before reaching the store.
    Reject,
}

impl Config {
    /// Parse a configuration from JSON.
    pub fn from_json(src: &str) -> Result<Config> {
        serde_json::from_str(src).map_err(|err| {
            Error::invalid_configuration(format!("malformed engine configuration: {err}"))
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: default_url(),
            identity_policy: IdentityPolicy::default(),
        }
    }
}

fn default_url() -> String {
    "sqlite::memory:".to_string()
}
