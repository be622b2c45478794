use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Emoji short-name -> reference string, as fetched from the API.
/// A BTreeMap keeps iteration order stable across runs.
pub type EmojiMapping = BTreeMap<String, String>;

/// One emoji after normalization. `codepoints` is either a hyphen-separated
/// hex codepoint sequence ("1f44d", "1f1e6-1f1f7") or, when no canonical
/// form could be derived, the original reference string carried through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEntry {
    pub name: String,
    pub codepoints: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// JS module literal (default).
    Module,
    /// Legacy Objective-C dictionary literal with escaped codepoints.
    ObjcDictionary,
}
