pub mod engine;
pub mod normalize;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{EmojiMapping, NormalizedEntry, OutputFormat};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
