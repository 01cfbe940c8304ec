//! Lenient extraction of JSON values from raw generation output.
//!
//! The service is asked for bare JSON but routinely wraps it in prose,
//! markdown fences, smart quotes, or trailing commas. Parsing is total:
//! every attempt either recovers a value or reports the section absent.
//! The repair heuristics are an ordered list of pure text transforms, each
//! usable on its own.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)```json|```").unwrap());
static TRAILING_COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*([}\]])").unwrap());

// ── Repair transforms ──

/// Drop markdown code-fence markers (```json and ```), case-insensitive.
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").into_owned()
}

/// Drop any text before the first `open` and after the last `close`.
/// Unchanged when either delimiter is missing or out of order.
pub fn trim_outside(text: &str, open: char, close: char) -> String {
    match (text.find(open), text.rfind(close)) {
        (Some(start), Some(end)) if start < end => text[start..=end].to_string(),
        _ => text.to_string(),
    }
}

/// Replace typographic quotes with their plain ASCII forms.
pub fn normalize_smart_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            other => other,
        })
        .collect()
}

/// Remove trailing commas immediately before a closing `}` or `]`.
pub fn strip_trailing_commas(text: &str) -> String {
    TRAILING_COMMA.replace_all(text, "$1").into_owned()
}

fn cleanup(text: &str, open: char, close: char) -> String {
    let text = strip_code_fences(text);
    let text = trim_outside(&text, open, close);
    let text = normalize_smart_quotes(&text);
    strip_trailing_commas(&text)
}

// ── Parse entry points ──

/// Recover a JSON object from raw text, or report it absent.
pub fn parse_object(raw: &str) -> Option<Map<String, Value>> {
    if let Ok(Value::Object(map)) = serde_json::from_str(raw) {
        return Some(map);
    }

    let cleaned = cleanup(raw, '{', '}');
    if let Ok(Value::Object(map)) = serde_json::from_str(&cleaned) {
        return Some(map);
    }

    if let Some(slice) = bracket_slice(&cleaned, '{', '}')
        && let Ok(Value::Object(map)) = serde_json::from_str(slice)
    {
        return Some(map);
    }

    None
}

/// Recover a JSON array from raw text, or report it absent.
///
/// The generator sometimes wraps an array answer in an object despite
/// instructions; a parsed object holding the expected array under
/// `wrapper_key` is unwrapped to that array.
pub fn parse_array(raw: &str, wrapper_key: &str) -> Option<Vec<Value>> {
    if let Ok(value) = serde_json::from_str::<Value>(raw)
        && let Some(items) = unwrap_array(value, wrapper_key)
    {
        return Some(items);
    }

    let cleaned = cleanup(raw, '[', ']');
    if let Ok(value) = serde_json::from_str::<Value>(&cleaned)
        && let Some(items) = unwrap_array(value, wrapper_key)
    {
        return Some(items);
    }

    if let Some(slice) = bracket_slice(&cleaned, '[', ']')
        && let Ok(Value::Array(items)) = serde_json::from_str(slice)
    {
        return Some(items);
    }

    // Last resort: the first balanced [...] span anywhere in the text.
    if let Some(span) = first_balanced_array(&cleaned)
        && let Ok(Value::Array(items)) = serde_json::from_str(span)
    {
        return Some(items);
    }

    None
}

fn unwrap_array(value: Value, wrapper_key: &str) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(mut map) => match map.remove(wrapper_key) {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

/// Slice from the first `open` to the last `close`, when both exist in
/// order.
fn bracket_slice(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (start < end).then(|| &text[start..=end])
}

/// The first balanced `[...]` span, tracked by bracket depth. Brackets
/// inside string literals are not interpreted; this is a last-resort
/// heuristic and the candidate still has to parse.
fn first_balanced_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let mut depth = 0usize;
    for (idx, ch) in text[start..].char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&text[start..=start + idx]);
                }
            }
            _ => {}
        }
    }
    None
}
