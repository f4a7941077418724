use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category/type/item classification metadata attached to a token by the
/// attribute transform. All fields are optional: a token that no classifier
/// recognizes simply carries empty attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Attributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// The CTI "type" level. Named `kind` because `type` is reserved.
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subitem: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Attributes {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.kind.is_none()
            && self.item.is_none()
            && self.subitem.is_none()
            && self.state.is_none()
    }
}

/// A single design token: a leaf value in the merged source tree, located by
/// its `path`. The loader constructs tokens, the attribute transform annotates
/// them, and later transform/format stages consume them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Token {
    /// Ordered key sequence from the tree root, e.g.
    /// `["component", "button", "padding"]`.
    pub path: Vec<String>,

    /// Output name. Starts as the dotted path; name transforms rewrite it.
    pub name: String,

    /// Current value. Value transforms rewrite this; `original_value` keeps
    /// the pre-transform value for formats that want it.
    pub value: Value,

    pub original_value: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl Token {
    pub fn new(path: Vec<String>, value: Value) -> Self {
        let name = path.join(".");
        Token {
            path,
            name,
            original_value: value.clone(),
            value,
            comment: None,
            attributes: Attributes::default(),
        }
    }

    /// Last path segment: the property name for component-scoped tokens.
    pub fn leaf(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    pub fn category(&self) -> Option<&str> {
        self.attributes.category.as_deref()
    }

    /// Render the value for text output: strings without surrounding quotes,
    /// everything else via its JSON representation.
    pub fn value_string(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
