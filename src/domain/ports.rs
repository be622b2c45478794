use crate::domain::model::{EmojiMapping, NormalizedEntry, OutputFormat};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
}

/// The three pipeline stages. Only extract touches the network; transform
/// and render are pure so they can run (and be tested) without any I/O.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<EmojiMapping>;
    fn transform(&self, mapping: EmojiMapping) -> Vec<NormalizedEntry>;
    fn render(&self, entries: &[NormalizedEntry]) -> Result<String>;
}
