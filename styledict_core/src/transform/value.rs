//! Value transforms: unit scaling and color normalization.

use crate::token::Token;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

static RGB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
        .expect("invalid rgb() regex")
});

/// Matcher for size-category tokens.
pub fn is_size(token: &Token) -> bool {
    token.category() == Some("size")
}

/// Matcher for color-category tokens.
pub fn is_color(token: &Token) -> bool {
    token.category() == Some("color")
}

/// `size/scale-px`: multiply the integer value by 16 and suffix `px`.
/// `"2"` becomes `"32px"`, `"0"` becomes `"0px"`. Only the leading integer
/// of a string value is read, so `"2rem"` also scales to `"32px"`.
pub fn scale_px(token: &Token) -> Value {
    match leading_i64(&token.value) {
        Some(n) => Value::String(format!("{}px", n * 16)),
        None => {
            warn!(
                "size token {} has non-numeric value {}, leaving unscaled",
                token.path.join("."),
                token.value
            );
            token.value.clone()
        }
    }
}

/// `size/rem`: suffix the numeric value with `rem`.
pub fn rem(token: &Token) -> Value {
    match leading_f64(&token.value) {
        Some(n) => Value::String(format!("{n}rem")),
        None => {
            warn!(
                "size token {} has non-numeric value {}, leaving unitless",
                token.path.join("."),
                token.value
            );
            token.value.clone()
        }
    }
}

/// `color/hex`: normalize to lowercase `#rrggbb`.
pub fn hex(token: &Token) -> Value {
    normalized_color(token)
}

/// `color/css`: hex normalization; values no color syntax matches pass
/// through unchanged.
pub fn css_color(token: &Token) -> Value {
    normalized_color(token)
}

fn normalized_color(token: &Token) -> Value {
    let Value::String(raw) = &token.value else {
        return token.value.clone();
    };
    match normalize_color(raw) {
        Some(normalized) => Value::String(normalized),
        None => token.value.clone(),
    }
}

/// Expand `#rgb` shorthand, lowercase `#rrggbb`, convert `rgb(r,g,b)`.
/// Returns `None` for anything else (named colors, gradients, ...).
fn normalize_color(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if let Some(digits) = trimmed.strip_prefix('#') {
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return match digits.len() {
            3 => {
                let expanded: String = digits
                    .chars()
                    .flat_map(|c| [c, c])
                    .collect::<String>()
                    .to_lowercase();
                Some(format!("#{expanded}"))
            }
            6 => Some(format!("#{}", digits.to_lowercase())),
            _ => None,
        };
    }
    if let Some(capture) = RGB_RE.captures(trimmed) {
        let channel = |i: usize| capture[i].parse::<u16>().ok().filter(|&c| c <= 255);
        let (r, g, b) = (channel(1)?, channel(2)?, channel(3)?);
        return Some(format!("#{r:02x}{g:02x}{b:02x}"));
    }
    None
}

/// Leading-integer parse matching the permissive semantics the token sources
/// rely on: `"2"` and `"2rem"` both read as 2.
fn leading_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_f64().map(|f| f.trunc() as i64),
        Value::String(s) => {
            let trimmed = s.trim();
            let end = trimmed
                .char_indices()
                .take_while(|(i, c)| c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+')))
                .map(|(i, c)| i + c.len_utf8())
                .last()?;
            trimmed[..end].parse().ok()
        }
        _ => None,
    }
}

fn leading_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            let end = trimmed
                .char_indices()
                .take_while(|(i, c)| {
                    c.is_ascii_digit()
                        || *c == '.'
                        || (*i == 0 && (*c == '-' || *c == '+'))
                })
                .map(|(i, c)| i + c.len_utf8())
                .last()?;
            trimmed[..end].parse().ok()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn size_token(value: Value) -> Token {
        let mut token = Token::new(vec!["size".into(), "base".into()], value);
        token.attributes.category = Some("size".into());
        token
    }

    fn color_token(value: Value) -> Token {
        let mut token = Token::new(vec!["color".into(), "base".into()], value);
        token.attributes.category = Some("color".into());
        token
    }

    #[test]
    fn test_scale_px_multiplies_by_sixteen() {
        assert_eq!(scale_px(&size_token(json!("2"))), json!("32px"));
        assert_eq!(scale_px(&size_token(json!("0"))), json!("0px"));
    }

    #[test]
    fn test_scale_px_reads_leading_integer_only() {
        assert_eq!(scale_px(&size_token(json!("2rem"))), json!("32px"));
        assert_eq!(scale_px(&size_token(json!(3))), json!("48px"));
    }

    #[test]
    fn test_scale_px_leaves_non_numeric_values() {
        assert_eq!(scale_px(&size_token(json!("auto"))), json!("auto"));
    }

    #[test]
    fn test_rem_suffix() {
        assert_eq!(rem(&size_token(json!("2"))), json!("2rem"));
        assert_eq!(rem(&size_token(json!("0.5"))), json!("0.5rem"));
        assert_eq!(rem(&size_token(json!(1.25))), json!("1.25rem"));
    }

    #[test]
    fn test_hex_lowercases_six_digit_colors() {
        assert_eq!(hex(&color_token(json!("#FFCC00"))), json!("#ffcc00"));
    }

    #[test]
    fn test_hex_expands_shorthand() {
        assert_eq!(hex(&color_token(json!("#F0a"))), json!("#ff00aa"));
    }

    #[test]
    fn test_hex_converts_rgb_syntax() {
        assert_eq!(
            hex(&color_token(json!("rgb(255, 0, 128)"))),
            json!("#ff0080")
        );
    }

    #[test]
    fn test_css_color_passes_through_unknown_syntax() {
        assert_eq!(css_color(&color_token(json!("papayawhip"))), json!("papayawhip"));
        assert_eq!(css_color(&color_token(json!("rgb(999,0,0)"))), json!("rgb(999,0,0)"));
    }
}
