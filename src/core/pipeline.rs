use crate::core::normalize::Normalizer;
use crate::core::render;
use crate::domain::model::{EmojiMapping, NormalizedEntry};
use crate::domain::ports::{ConfigProvider, Pipeline};
use crate::utils::error::Result;
use reqwest::Client;

const USER_AGENT: &str = concat!("emoji-codegen/", env!("CARGO_PKG_VERSION"));

pub struct EmojiPipeline<C: ConfigProvider> {
    config: C,
    client: Client,
    normalizer: Normalizer,
}

impl<C: ConfigProvider> EmojiPipeline<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
            normalizer: Normalizer::new(),
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for EmojiPipeline<C> {
    async fn extract(&self) -> Result<EmojiMapping> {
        tracing::debug!("Making API request to: {}", self.config.api_endpoint());
        // GitHub rejects requests without a User-Agent.
        let response = self
            .client
            .get(self.config.api_endpoint())
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());
        let response = response.error_for_status()?;

        // Parse from text so a malformed body surfaces as a serde_json error
        // rather than a reqwest decode error.
        let body = response.text().await?;
        let mapping: EmojiMapping = serde_json::from_str(&body)?;

        Ok(mapping)
    }

    fn transform(&self, mapping: EmojiMapping) -> Vec<NormalizedEntry> {
        mapping
            .iter()
            .map(|(name, reference)| self.normalizer.normalize(name, reference))
            .collect()
    }

    fn render(&self, entries: &[NormalizedEntry]) -> Result<String> {
        render::render(self.config.output_format(), entries)
    }
}
