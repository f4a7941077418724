//! Token transforms.
//!
//! A transform is one of three kinds: attribute transforms attach CTI
//! metadata, name transforms rewrite the output name, and value transforms
//! (optionally gated by a matcher) rewrite the value. Platforms apply their
//! transform list to every token in the listed order.

pub mod name;
pub mod value;

use crate::token::{Attributes, Token};
use serde_json::Value;

#[derive(Clone, Copy)]
pub enum Transform {
    /// Produces classification attributes, or `None` to leave the token
    /// unclassified.
    Attribute(fn(&Token) -> Option<Attributes>),

    /// Produces the token's output name; receives the platform prefix.
    Name(fn(&Token, Option<&str>) -> String),

    /// Rewrites the token's value. When a matcher is present, tokens it
    /// rejects pass through untouched.
    Value {
        matcher: Option<fn(&Token) -> bool>,
        transform: fn(&Token) -> Value,
    },
}

impl Transform {
    pub fn apply(&self, token: &mut Token, prefix: Option<&str>) {
        match self {
            Transform::Attribute(classify) => {
                if let Some(attributes) = classify(token) {
                    token.attributes = attributes;
                }
            }
            Transform::Name(rename) => {
                token.name = rename(token, prefix);
            }
            Transform::Value { matcher, transform } => {
                if matcher.is_none_or(|matches| matches(token)) {
                    token.value = transform(token);
                }
            }
        }
    }
}

/// Built-in transform groups. A platform naming a group gets this list in
/// place of an explicit `transforms` array.
pub fn group(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "css" => Some(&["attribute/cti", "name/cti/kebab", "size/rem", "color/css"]),
        "scss" => Some(&["attribute/cti", "name/cti/kebab", "size/rem", "color/css"]),
        "js" => Some(&["attribute/cti", "name/cti/pascal", "size/rem", "color/hex"]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cti;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_attribute_transform_miss_leaves_attributes_untouched() {
        let mut token = Token::new(
            vec!["component".into(), "card".into(), "unknown-prop".into()],
            json!("1"),
        );
        Transform::Attribute(cti::classify).apply(&mut token, None);
        assert!(token.attributes.is_empty());
    }

    #[test]
    fn test_value_transform_respects_matcher() {
        let mut token = Token::new(vec!["color".into(), "red".into()], json!("2"));
        let transform = Transform::Value {
            matcher: Some(value::is_size),
            transform: value::scale_px,
        };
        // Not classified as size: value passes through.
        transform.apply(&mut token, None);
        assert_eq!(token.value, json!("2"));

        token.attributes.category = Some("size".into());
        transform.apply(&mut token, None);
        assert_eq!(token.value, json!("32px"));
    }

    #[test]
    fn test_groups_exist_for_css_scss_js() {
        for group_name in ["css", "scss", "js"] {
            let transforms = group(group_name).unwrap();
            assert_eq!(transforms[0], "attribute/cti");
        }
        assert_eq!(group("android"), None);
    }
}
