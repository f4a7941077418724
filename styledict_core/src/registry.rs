//! Name-keyed registries for transforms and formats.
//!
//! The default registry carries every built-in under its canonical name.
//! Applications extend or override entries at startup; re-registering
//! `attribute/cti` is the supported way to swap in a different classifier.

use crate::format::{self, Format};
use crate::transform::{self, Transform};
use crate::{cti, error::Result, error::StyledictError};
use std::collections::HashMap;
use tracing::debug;

pub struct Registry {
    transforms: HashMap<String, Transform>,
    formats: HashMap<String, Format>,
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Registry {
            transforms: HashMap::new(),
            formats: HashMap::new(),
        };

        registry.register_transform("attribute/cti", Transform::Attribute(cti::classify));
        registry.register_transform("name/cti/kebab", Transform::Name(transform::name::cti_kebab));
        registry.register_transform("name/cti/snake", Transform::Name(transform::name::cti_snake));
        registry.register_transform(
            "name/cti/pascal",
            Transform::Name(transform::name::cti_pascal),
        );
        registry.register_transform(
            "name/path/upper-snake",
            Transform::Name(transform::name::path_upper_snake),
        );
        registry.register_transform(
            "size/scale-px",
            Transform::Value {
                matcher: Some(transform::value::is_size),
                transform: transform::value::scale_px,
            },
        );
        registry.register_transform(
            "size/rem",
            Transform::Value {
                matcher: Some(transform::value::is_size),
                transform: transform::value::rem,
            },
        );
        registry.register_transform(
            "color/hex",
            Transform::Value {
                matcher: Some(transform::value::is_color),
                transform: transform::value::hex,
            },
        );
        registry.register_transform(
            "color/css",
            Transform::Value {
                matcher: Some(transform::value::is_color),
                transform: transform::value::css_color,
            },
        );

        registry.register_format("css/variables", format::css_variables);
        registry.register_format("scss/variables", format::scss_variables);
        registry.register_format("json", format::json);
        registry.register_format("format/name-value", format::name_value);
        registry.register_format("format/values", format::values);

        registry
    }
}

impl Registry {
    pub fn register_transform(&mut self, name: impl Into<String>, transform: Transform) {
        let name = name.into();
        debug!("Registering transform: {}", name);
        self.transforms.insert(name, transform);
    }

    pub fn register_format(&mut self, name: impl Into<String>, format: Format) {
        let name = name.into();
        debug!("Registering format: {}", name);
        self.formats.insert(name, format);
    }

    pub fn transform(&self, name: &str) -> Result<Transform> {
        self.transforms
            .get(name)
            .copied()
            .ok_or_else(|| StyledictError::unknown_transform(name))
    }

    pub fn format(&self, name: &str) -> Result<Format> {
        self.formats
            .get(name)
            .copied()
            .ok_or_else(|| StyledictError::unknown_format(name))
    }

    pub fn transform_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.transforms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn format_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.formats.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
