use crate::domain::model::{NormalizedEntry, OutputFormat};
use crate::utils::error::{EmojiError, Result};
use std::collections::BTreeMap;

/// Renders the normalized mapping as a source-code literal. The caller owns
/// the sink; nothing here writes to stdout.
pub fn render(format: OutputFormat, entries: &[NormalizedEntry]) -> Result<String> {
    match format {
        OutputFormat::Module => render_module(entries),
        OutputFormat::ObjcDictionary => render_objc_dictionary(entries),
    }
}

/// JS module literal: the mapping as indented JSON wrapped in boilerplate,
/// with the leading blank line the wrapping template carries.
fn render_module(entries: &[NormalizedEntry]) -> Result<String> {
    let mapping: BTreeMap<&str, &str> = entries
        .iter()
        .map(|e| (e.name.as_str(), e.codepoints.as_str()))
        .collect();
    let body = serde_json::to_string_pretty(&mapping)?;

    Ok(format!(
        "\nvar EmojiList = {};\n\nexport default EmojiList;\n",
        body
    ))
}

/// Objective-C NSDictionary literal, one entry per line.
fn render_objc_dictionary(entries: &[NormalizedEntry]) -> Result<String> {
    let mut out = String::from("@{\n");
    for entry in entries {
        let value = escape_objc_value(&entry.name, &entry.codepoints)?;
        out.push_str(&format!("  @\"{}\": @\"{}\",\n", entry.name, value));
    }
    out.push_str("}\n");
    Ok(out)
}

/// Escapes a codepoint token into the body of an Objective-C string literal.
///
/// Tokens that are still raw URLs (normalization fell through to passthrough)
/// are emitted verbatim; that is malformed upstream data carried along, not a
/// format we rely on. Everything else is a hyphen-separated hex sequence:
/// codepoints below 0xFF become the literal character, below 0xFFFF a \uXXXX
/// escape, and anything higher a \UXXXXXXXX escape.
fn escape_objc_value(name: &str, token: &str) -> Result<String> {
    if token.starts_with("https://") {
        return Ok(token.to_string());
    }

    let mut escaped = String::new();
    for segment in token.split('-') {
        let value = u32::from_str_radix(segment, 16).map_err(|_| EmojiError::InvalidCodepoint {
            name: name.to_string(),
            segment: segment.to_string(),
        })?;

        if value < 0xFF {
            escaped.push((value as u8) as char);
        } else if value < 0xFFFF {
            escaped.push_str(&format!("\\u{:04x}", value));
        } else {
            escaped.push_str(&format!("\\U{:08x}", value));
        }
    }
    Ok(escaped)
}
