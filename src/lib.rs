pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::engine::CodegenEngine;
pub use core::normalize::Normalizer;
pub use core::pipeline::EmojiPipeline;
pub use domain::model::{EmojiMapping, NormalizedEntry, OutputFormat};
pub use utils::error::{EmojiError, Result};
