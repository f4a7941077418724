//! Output formats: serialize a transformed token set into file contents.

use crate::error::Result;
use crate::token::Token;
use serde_json::{Map, Value};
use std::fmt::Write;

pub type Format = fn(&[Token]) -> Result<String>;

const GENERATED_HEADER: &str = "Do not edit directly, this file was auto-generated.";

/// `css/variables`: a `:root` block of custom properties.
pub fn css_variables(tokens: &[Token]) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "/**\n * {GENERATED_HEADER}\n */\n").ok();
    writeln!(out, ":root {{").ok();
    for token in tokens {
        writeln!(out, "  --{}: {};", token.name, token.value_string()).ok();
    }
    writeln!(out, "}}").ok();
    Ok(out)
}

/// `scss/variables`: one `$name: value;` line per token.
pub fn scss_variables(tokens: &[Token]) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "// {GENERATED_HEADER}\n").ok();
    for token in tokens {
        writeln!(out, "${}: {};", token.name, token.value_string()).ok();
    }
    Ok(out)
}

/// `json`: pretty-printed flat object of output name to value.
pub fn json(tokens: &[Token]) -> Result<String> {
    let map: Map<String, Value> = tokens
        .iter()
        .map(|token| (token.name.clone(), token.value.clone()))
        .collect();
    let mut out = serde_json::to_string_pretty(&Value::Object(map))?;
    out.push('\n');
    Ok(out)
}

/// `format/name-value`: bare `name: value` lines, newline-joined.
pub fn name_value(tokens: &[Token]) -> Result<String> {
    Ok(tokens
        .iter()
        .map(|token| format!("{}: {}", token.name, token.value_string()))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `format/values`: token values only, newline-joined.
pub fn values(tokens: &[Token]) -> Result<String> {
    Ok(tokens
        .iter()
        .map(Token::value_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_tokens() -> Vec<Token> {
        let mut red = Token::new(vec!["color".into(), "red".into()], json!("#ff0000"));
        red.name = "color-red".into();
        let mut padding = Token::new(
            vec!["component".into(), "button".into(), "padding".into()],
            json!("32px"),
        );
        padding.name = "component-button-padding".into();
        vec![red, padding]
    }

    #[test]
    fn test_css_variables_block() {
        assert_snapshot!(css_variables(&sample_tokens()).unwrap(), @r"
        /**
         * Do not edit directly, this file was auto-generated.
         */

        :root {
          --color-red: #ff0000;
          --component-button-padding: 32px;
        }
        ");
    }

    #[test]
    fn test_scss_variables_lines() {
        assert_snapshot!(scss_variables(&sample_tokens()).unwrap(), @r"
        // Do not edit directly, this file was auto-generated.

        $color-red: #ff0000;
        $component-button-padding: 32px;
        ");
    }

    #[test]
    fn test_json_is_flat_name_to_value() {
        let out = json(&sample_tokens()).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({
                "color-red": "#ff0000",
                "component-button-padding": "32px"
            })
        );
    }

    #[test]
    fn test_name_value_lines() {
        assert_eq!(
            name_value(&sample_tokens()).unwrap(),
            "color-red: #ff0000\ncomponent-button-padding: 32px"
        );
    }

    #[test]
    fn test_values_only() {
        assert_eq!(values(&sample_tokens()).unwrap(), "#ff0000\n32px");
    }
}
