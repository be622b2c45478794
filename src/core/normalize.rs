use crate::domain::model::NormalizedEntry;
use regex::Regex;
use std::collections::HashMap;

/// Manual corrections for emoji whose upstream image filename does not encode
/// the codepoints we want to display. GitHub serves "heart" as the bare
/// 2764.png, but the glyph should carry the emoji variation selector.
const OVERRIDES: &[(&str, &str)] = &[("heart", "2764-fe0f")];

/// Turns a fetched (name, reference) pair into a codepoint token. Pure; the
/// override table and the URL pattern are fixed at construction.
pub struct Normalizer {
    overrides: HashMap<&'static str, &'static str>,
    unicode_path: Regex,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            overrides: OVERRIDES.iter().copied().collect(),
            // e.g. https://github.githubassets.com/images/icons/emoji/unicode/1f44d.png?v8
            unicode_path: Regex::new(r"/unicode/([0-9A-Fa-f-]+)\.png").unwrap(),
        }
    }

    /// Override first, then the /unicode/<hex>.png pattern, then passthrough.
    /// Never fails: an unrecognized reference is carried through unchanged.
    pub fn normalize(&self, name: &str, reference: &str) -> NormalizedEntry {
        if let Some(codepoints) = self.overrides.get(name) {
            return NormalizedEntry {
                name: name.to_string(),
                codepoints: (*codepoints).to_string(),
            };
        }

        let codepoints = match self.unicode_path.captures(reference) {
            Some(caps) => caps[1].to_string(),
            None => reference.to_string(),
        };

        NormalizedEntry {
            name: name.to_string(),
            codepoints,
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_codepoints_from_unicode_url() {
        let normalizer = Normalizer::new();
        let entry = normalizer.normalize(
            "thumbsup",
            "https://github.githubassets.com/images/icons/emoji/unicode/1f44d.png?v8",
        );
        assert_eq!(entry.name, "thumbsup");
        assert_eq!(entry.codepoints, "1f44d");
    }

    #[test]
    fn test_extracts_multi_codepoint_sequences() {
        let normalizer = Normalizer::new();
        let entry = normalizer.normalize(
            "ar",
            "https://github.githubassets.com/images/icons/emoji/unicode/1f1e6-1f1f7.png?v8",
        );
        assert_eq!(entry.codepoints, "1f1e6-1f1f7");
    }

    #[test]
    fn test_override_wins_over_url_pattern() {
        let normalizer = Normalizer::new();
        let entry = normalizer.normalize(
            "heart",
            "https://github.githubassets.com/images/icons/emoji/unicode/2764.png?v8",
        );
        assert_eq!(entry.codepoints, "2764-fe0f");
    }

    #[test]
    fn test_override_wins_regardless_of_reference_content() {
        let normalizer = Normalizer::new();
        let entry = normalizer.normalize("heart", "not-even-a-url");
        assert_eq!(entry.codepoints, "2764-fe0f");
    }

    #[test]
    fn test_unrecognized_reference_passes_through() {
        let normalizer = Normalizer::new();
        // Non-unicode emoji like "octocat" point at named image files.
        let entry = normalizer.normalize(
            "octocat",
            "https://github.githubassets.com/images/icons/emoji/octocat.png?v8",
        );
        assert_eq!(
            entry.codepoints,
            "https://github.githubassets.com/images/icons/emoji/octocat.png?v8"
        );
    }

    #[test]
    fn test_already_canonical_token_is_unchanged() {
        let normalizer = Normalizer::new();
        let entry = normalizer.normalize("thumbsup", "1f44d");
        assert_eq!(entry.codepoints, "1f44d");

        // Idempotent: a second pass yields the same token.
        let again = normalizer.normalize(&entry.name, &entry.codepoints);
        assert_eq!(again.codepoints, "1f44d");
    }

    #[test]
    fn test_query_string_is_ignored() {
        let normalizer = Normalizer::new();
        let entry = normalizer.normalize(
            "smile",
            "https://assets-cdn.github.com/images/icons/emoji/unicode/1f604.png?v7",
        );
        assert_eq!(entry.codepoints, "1f604");
    }
}
