use std::env;

use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_primary_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/".to_string()
}

fn default_primary_language() -> String {
    "en".to_string()
}

fn default_secondary_url() -> String {
    "https://api.dicionario-aberto.net/".to_string()
}

fn default_user_agent() -> String {
    concat!("lexo/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Where the two dictionary services live and how to talk to them
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServicesConfig {
    /// Base of the English definition API
    #[serde(default = "default_primary_url")]
    pub primary_url: String,
    #[serde(default = "default_primary_language")]
    pub primary_language: String,
    /// Base of the Portuguese open dictionary API
    #[serde(default = "default_secondary_url")]
    pub secondary_url: String,
    /// None keeps the transport default
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            primary_url: default_primary_url(),
            primary_language: default_primary_language(),
            secondary_url: default_secondary_url(),
            request_timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ServicesConfig {
    pub fn new() -> Self {
        let request_timeout_secs = env::var("LEXO_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|secs| *secs > 0);

        Self {
            primary_url: env_or("LEXO_PRIMARY_URL", default_primary_url),
            primary_language: env_or("LEXO_PRIMARY_LANGUAGE", default_primary_language),
            secondary_url: env_or("LEXO_SECONDARY_URL", default_secondary_url),
            request_timeout_secs,
            user_agent: env_or("LEXO_USER_AGENT", default_user_agent),
        }
    }
}
