use std::time::Duration;

use async_trait::async_trait;
use lexo_types::PrimaryEntry;

mod dicionario_aberto;
mod endpoint;
mod error;
mod free_dictionary;

pub use dicionario_aberto::DicionarioAbertoClient;
pub use endpoint::Endpoint;
pub use error::LookupError;
pub use free_dictionary::FreeDictionaryClient;

/// English definition service
#[async_trait]
pub trait PrimarySource: Send + Sync {
    /// All entries for `word`, `LookupError::NotFound` when the service has none
    async fn entries(&self, word: &str) -> Result<Vec<PrimaryEntry>, LookupError>;

    fn metadata(&self) -> SourceMetadata;
}

/// Portuguese open dictionary service.
/// Response shapes differ per endpoint, so the raw JSON is handed back
/// and decoded by whoever picked the endpoint.
#[async_trait]
pub trait SecondarySource: Send + Sync {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<serde_json::Value, LookupError>;

    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub language: String,
}

/// Shared HTTP client for both services. Without a timeout the transport default applies.
pub fn http_client(user_agent: &str, timeout: Option<Duration>) -> Result<reqwest::Client, LookupError> {
    let mut builder = reqwest::Client::builder().user_agent(user_agent);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

async fn read_json<T>(response: reqwest::Response) -> Result<T, LookupError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    LookupError::check_status(response.status())?;

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
