//! Metric key composition from a base name and stream tags.
//!
//! Canonical form: `name|ST[cat:val,cat:val]`, pairs sorted and deduplicated
//! so that two tag sets with the same members always yield the same key.
//! Categories or values that would break the framing are written as
//! `b"<base64>"`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

const STREAM_TAG_MARKER: &str = "|ST[";

/// One stream tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Tag {
    pub category: String,
    pub value: String,
}

impl Tag {
    pub fn new(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
        }
    }
}

/// Ordered tag list as handed in by callers. Order does not affect the key.
pub type StreamTags = Vec<Tag>;

fn needs_encoding(s: &str) -> bool {
    s.chars()
        .any(|c| matches!(c, ',' | ':' | '[' | ']' | '|' | '"') || c.is_control())
}

fn encode_part(s: &str) -> String {
    if needs_encoding(s) {
        format!("b\"{}\"", STANDARD.encode(s))
    } else {
        s.to_string()
    }
}

/// Encode tags into the body of an `|ST[...]` block.
///
/// Returns an empty string when no usable tag remains.
pub fn encode_stream_tags(tags: &[Tag]) -> String {
    let mut parts: Vec<String> = tags
        .iter()
        .filter_map(|t| {
            let category = t.category.trim();
            if category.is_empty() {
                return None;
            }
            let value = t.value.trim();
            Some(format!("{}:{}", encode_part(category), encode_part(value)))
        })
        .collect();
    parts.sort();
    parts.dedup();
    parts.join(",")
}

/// Build the canonical metric key for `name` plus `tags`.
pub fn metric_name_with_stream_tags(name: &str, tags: &[Tag]) -> String {
    if tags.is_empty() || name.contains(STREAM_TAG_MARKER) {
        return name.to_string();
    }
    let body = encode_stream_tags(tags);
    if body.is_empty() {
        return name.to_string();
    }
    format!("{name}{STREAM_TAG_MARKER}{body}]")
}
