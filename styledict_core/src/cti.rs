//! Category/type/item classification.
//!
//! Tokens under the `component` namespace are keyed by CSS property name
//! rather than by explicit category/type metadata, so their classification is
//! recovered from a static property-name table. Tokens in every other
//! namespace carry CTI information positionally in their path and fall back
//! to the standard positional inference.

use crate::token::{Attributes, Token};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A classification record stored in the property table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: &'static str,
    pub kind: &'static str,
    pub item: Option<&'static str>,
}

impl Classification {
    const fn new(category: &'static str, kind: &'static str) -> Self {
        Classification {
            category,
            kind,
            item: None,
        }
    }

    const fn with_item(category: &'static str, kind: &'static str, item: &'static str) -> Self {
        Classification {
            category,
            kind,
            item: Some(item),
        }
    }

    pub fn to_attributes(self) -> Attributes {
        Attributes {
            category: Some(self.category.to_string()),
            kind: Some(self.kind.to_string()),
            item: self.item.map(str::to_string),
            subitem: None,
            state: None,
        }
    }
}

/// Component property name -> classification. Built once, never mutated.
///
/// The `border-radius` entry is byte-identical to `border-width` and the
/// `padding-horziontal` key is misspelled; both are carried over verbatim
/// from the upstream token sources, which are keyed by these exact strings.
pub static PROPERTIES_TO_CTI: Lazy<HashMap<&'static str, Classification>> = Lazy::new(|| {
    HashMap::from([
        ("width", Classification::new("size", "dimension")),
        ("min-width", Classification::new("size", "dimension")),
        ("max-width", Classification::new("size", "dimension")),
        ("height", Classification::new("size", "dimension")),
        ("min-height", Classification::new("size", "dimension")),
        ("max-height", Classification::new("size", "dimension")),
        (
            "border-width",
            Classification::with_item("size", "border", "width"),
        ),
        (
            "border-radius",
            Classification::with_item("size", "border", "width"),
        ),
        ("border-color", Classification::new("color", "border")),
        ("background-color", Classification::new("color", "background")),
        ("color", Classification::new("color", "font")),
        ("text-color", Classification::new("color", "font")),
        ("padding", Classification::new("size", "padding")),
        ("padding-vertical", Classification::new("size", "padding")),
        ("padding-horziontal", Classification::new("size", "padding")),
        ("icon", Classification::new("content", "icon")),
        ("font-size", Classification::new("size", "font")),
        ("line-height", Classification::new("size", "line-height")),
        ("size", Classification::new("size", "icon")),
    ])
});

/// Classify a token into CTI attributes.
///
/// Component-namespace tokens are looked up by their last path segment; an
/// unmapped property returns `None` silently and the token stays
/// unclassified. All other namespaces use positional inference. Pure
/// function: the token itself is never mutated here.
pub fn classify(token: &Token) -> Option<Attributes> {
    match token.path.first().map(String::as_str) {
        Some("component") => PROPERTIES_TO_CTI
            .get(token.leaf())
            .map(|classification| classification.to_attributes()),
        _ => Some(infer_from_path(&token.path)),
    }
}

/// Standard positional inference: category/type/item/subitem/state are the
/// first five path segments, in order.
fn infer_from_path(path: &[String]) -> Attributes {
    Attributes {
        category: path.first().cloned(),
        kind: path.get(1).cloned(),
        item: path.get(2).cloned(),
        subitem: path.get(3).cloned(),
        state: path.get(4).cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn component_token(path: &[&str]) -> Token {
        Token::new(path.iter().map(|s| s.to_string()).collect(), json!("2"))
    }

    #[test]
    fn test_component_padding_classifies_as_size_padding() {
        let token = component_token(&["component", "button", "padding"]);
        let attributes = classify(&token).unwrap();
        assert_eq!(attributes.category.as_deref(), Some("size"));
        assert_eq!(attributes.kind.as_deref(), Some("padding"));
        assert_eq!(attributes.item, None);
    }

    #[test]
    fn test_component_icon_classifies_as_content_icon() {
        let token = component_token(&["component", "icon-button", "icon"]);
        let attributes = classify(&token).unwrap();
        assert_eq!(attributes.category.as_deref(), Some("content"));
        assert_eq!(attributes.kind.as_deref(), Some("icon"));
    }

    #[test]
    fn test_unmapped_component_property_returns_none() {
        let token = component_token(&["component", "card", "unknown-prop"]);
        assert_eq!(classify(&token), None);
    }

    #[test]
    fn test_lookup_ignores_intermediate_path_segments() {
        let shallow = component_token(&["component", "button", "padding"]);
        let deep = component_token(&["component", "card", "header", "title", "padding"]);
        assert_eq!(classify(&shallow), classify(&deep));
    }

    #[test]
    fn test_non_component_namespace_uses_positional_inference() {
        let token = component_token(&["color", "base", "red"]);
        let attributes = classify(&token).unwrap();
        assert_eq!(attributes.category.as_deref(), Some("color"));
        assert_eq!(attributes.kind.as_deref(), Some("base"));
        assert_eq!(attributes.item.as_deref(), Some("red"));
        assert_eq!(attributes.subitem, None);
        assert_eq!(attributes.state, None);
    }

    #[test]
    fn test_positional_inference_fills_subitem_and_state() {
        let token = component_token(&["color", "button", "background", "primary", "hover"]);
        let attributes = classify(&token).unwrap();
        assert_eq!(attributes.subitem.as_deref(), Some("primary"));
        assert_eq!(attributes.state.as_deref(), Some("hover"));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let token = component_token(&["component", "button", "border-radius"]);
        assert_eq!(classify(&token), classify(&token));
    }

    #[test]
    fn test_every_table_entry_round_trips_through_classify() {
        for (property, classification) in PROPERTIES_TO_CTI.iter() {
            let token = component_token(&["component", "anything", property]);
            assert_eq!(
                classify(&token),
                Some(classification.to_attributes()),
                "table entry {property} did not pass through unchanged"
            );
        }
    }
}
