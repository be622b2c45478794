use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmojiError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Response body is not an emoji mapping: {0}")]
    FormatError(#[from] serde_json::Error),

    #[error("Invalid codepoint segment '{segment}' in emoji '{name}'")]
    InvalidCodepoint { name: String, segment: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, EmojiError>;

impl EmojiError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            EmojiError::ApiError(e) => format!("Could not fetch the emoji list: {}", e),
            EmojiError::FormatError(e) => {
                format!("The emoji API returned something unexpected: {}", e)
            }
            EmojiError::InvalidCodepoint { name, segment } => format!(
                "Emoji '{}' has a codepoint segment '{}' that is not valid hexadecimal",
                name, segment
            ),
            EmojiError::InvalidConfigValueError { field, value, reason } => {
                format!("Bad value '{}' for {}: {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EmojiError::ApiError(_) => {
                "Check network connectivity and that the endpoint is reachable, then re-run"
            }
            EmojiError::FormatError(_) => {
                "Verify the endpoint returns a JSON object mapping emoji names to image URLs"
            }
            EmojiError::InvalidCodepoint { .. } => {
                "Add an override for this emoji or fix the upstream reference"
            }
            EmojiError::InvalidConfigValueError { .. } => {
                "Fix the command-line arguments and try again"
            }
        }
    }
}
