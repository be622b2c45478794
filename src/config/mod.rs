use crate::core::ConfigProvider;
use crate::domain::model::OutputFormat;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "emoji-codegen")]
#[command(about = "Generates an emoji name-to-codepoint source literal from the GitHub emojis API")]
pub struct CliConfig {
    #[arg(long, default_value = "https://api.github.com/emojis")]
    pub endpoint: String,

    #[arg(long, help = "Emit a legacy Objective-C dictionary instead of a JS module")]
    pub objc: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn output_format(&self) -> OutputFormat {
        if self.objc {
            OutputFormat::ObjcDictionary
        } else {
            OutputFormat::Module
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("endpoint", &self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_module() {
        let config = CliConfig::parse_from(["emoji-codegen"]);
        assert_eq!(config.output_format(), OutputFormat::Module);
        assert_eq!(config.endpoint, "https://api.github.com/emojis");
    }

    #[test]
    fn test_objc_flag_selects_legacy_dictionary() {
        let config = CliConfig::parse_from(["emoji-codegen", "--objc"]);
        assert_eq!(config.output_format(), OutputFormat::ObjcDictionary);
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let config = CliConfig::parse_from(["emoji-codegen", "--endpoint", "not a url"]);
        assert!(config.validate().is_err());
    }
}
