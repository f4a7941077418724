//! Token source loading: glob expansion, JSON parsing, deep merge, and
//! flattening of the merged tree into tokens.

use crate::error::{Result, StyledictError};
use crate::token::Token;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

/// Expand the configured glob patterns relative to `base`, parse every match
/// as a JSON object tree, deep-merge the trees in sorted file order, and
/// flatten the result into tokens.
pub fn load_sources(base: &Path, patterns: &[String]) -> Result<Vec<Token>> {
    info!("Loading token sources from {} pattern(s)", patterns.len());
    let files = expand_globs(base, patterns)?;
    debug!("Matched {} source file(s)", files.len());

    let mut merged = Value::Object(Map::new());
    for file in &files {
        trace!("Parsing token source: {:?}", file);
        let contents = fs::read_to_string(file)?;
        let tree: Value = serde_json::from_str(&contents)
            .map_err(|e| StyledictError::parse_error(file, e.to_string()))?;
        if !tree.is_object() {
            return Err(StyledictError::parse_error(
                file,
                "top-level value must be an object",
            ));
        }
        deep_merge(&mut merged, tree);
    }

    let mut tokens = Vec::new();
    if let Value::Object(root) = &merged {
        let mut path = Vec::new();
        flatten(root, &mut path, &mut tokens);
    }
    tokens.sort_by(|a, b| a.path.cmp(&b.path));
    info!("Loaded {} token(s)", tokens.len());
    Ok(tokens)
}

/// Expand glob patterns into a sorted, deduplicated file list. Sorting keeps
/// the merge order (and thus conflict resolution) deterministic.
fn expand_globs(base: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let walker = globwalk::GlobWalkerBuilder::from_patterns(base, &[pattern.as_str()])
            .follow_links(true)
            .build()?;
        for entry in walker {
            let entry = entry.map_err(|e| StyledictError::config(e.to_string()))?;
            if entry.file_type().is_file() {
                files.push(entry.path().to_path_buf());
            }
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Recursively merge `incoming` into `target`. Objects merge key-by-key;
/// anything else is replaced, with a warning when a non-null value is
/// overwritten.
fn deep_merge(target: &mut Value, incoming: Value) {
    match (target, incoming) {
        (Value::Object(target_map), Value::Object(incoming_map)) => {
            for (key, incoming_value) in incoming_map {
                match target_map.get_mut(&key) {
                    Some(existing) => deep_merge(existing, incoming_value),
                    None => {
                        target_map.insert(key, incoming_value);
                    }
                }
            }
        }
        (target_slot, incoming_value) => {
            if !target_slot.is_null() && *target_slot != incoming_value {
                warn!(
                    "Token source conflict: overwriting {} with {}",
                    target_slot, incoming_value
                );
            }
            *target_slot = incoming_value;
        }
    }
}

/// A node owning a `value` key is a token leaf; everything else is a group
/// to recurse into. Non-object group members are not valid token trees and
/// are skipped with a warning.
fn flatten(node: &Map<String, Value>, path: &mut Vec<String>, out: &mut Vec<Token>) {
    if let Some(value) = node.get("value") {
        let mut token = Token::new(path.clone(), value.clone());
        token.comment = node
            .get("comment")
            .and_then(Value::as_str)
            .map(str::to_string);
        out.push(token);
        return;
    }

    for (key, child) in node {
        match child {
            Value::Object(child_map) => {
                path.push(key.clone());
                flatten(child_map, path, out);
                path.pop();
            }
            other => {
                warn!(
                    "Skipping non-object entry {:?} at {} (token leaves need a \"value\" key)",
                    other,
                    path.join(".")
                );
            }
        }
    }
}
