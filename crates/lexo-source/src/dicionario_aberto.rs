use async_trait::async_trait;
use reqwest::Url;

use crate::endpoint::parse_base;
use crate::{Endpoint, LookupError, SecondarySource, SourceMetadata, read_json};

/// Client for api.dicionario-aberto.net
#[derive(Clone)]
pub struct DicionarioAbertoClient {
    client: reqwest::Client,
    base_url: Url,
}

impl DicionarioAbertoClient {
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, LookupError> {
        Ok(Self {
            client,
            base_url: parse_base(base_url)?,
        })
    }
}

#[async_trait]
impl SecondarySource for DicionarioAbertoClient {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<serde_json::Value, LookupError> {
        let url = endpoint.resolve(&self.base_url)?;
        tracing::debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Dicionário Aberto".to_string(),
            language: "pt".to_string(),
        }
    }
}
