use async_trait::async_trait;
use lexo_types::PrimaryEntry;
use reqwest::Url;

use crate::endpoint::parse_base;
use crate::{Endpoint, LookupError, PrimarySource, SourceMetadata, read_json};

/// Client for the free dictionaryapi.dev entries API
#[derive(Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    base_url: Url,
    language: String,
}

impl FreeDictionaryClient {
    pub fn new(base_url: &str, language: &str) -> Result<Self, LookupError> {
        Self::with_client(reqwest::Client::new(), base_url, language)
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: &str,
        language: &str,
    ) -> Result<Self, LookupError> {
        Ok(Self {
            client,
            base_url: parse_base(base_url)?,
            language: language.to_string(),
        })
    }

    /// `entries/{language}/{word}`
    pub fn endpoint(&self, word: &str) -> Endpoint {
        Endpoint::new(["entries", self.language.as_str(), word])
    }
}

#[async_trait]
impl PrimarySource for FreeDictionaryClient {
    async fn entries(&self, word: &str) -> Result<Vec<PrimaryEntry>, LookupError> {
        let url = self.endpoint(word).resolve(&self.base_url)?;
        tracing::debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Free Dictionary API".to_string(),
            language: self.language.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_uses_language() {
        let client = FreeDictionaryClient::new("https://api.dictionaryapi.dev/api/v2/", "en").unwrap();
        assert_eq!(client.endpoint("hello").to_string(), "entries/en/hello");
        assert_eq!(client.metadata().language, "en");
    }

    #[test]
    fn test_rejects_bad_base() {
        assert!(FreeDictionaryClient::new("::", "en").is_err());
    }

    #[tokio::test]
    async fn test_unreachable_service_is_network_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let client = FreeDictionaryClient::new(&format!("http://127.0.0.1:{port}/"), "en").unwrap();
        let err = client.entries("hello").await.unwrap_err();
        assert!(matches!(err, LookupError::Network(_)));
    }
}
