//! Token reference resolution.
//!
//! A string value may embed `{path.to.token.value}` (the trailing `.value` is
//! optional) references to other tokens. References are resolved in
//! dependency order over a token graph; a cycle or a dangling reference is a
//! hard error, unlike classification misses which stay silent.

use crate::error::{Result, StyledictError};
use crate::token::Token;
use once_cell::sync::Lazy;
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, trace};

static REFERENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}]+)\}").expect("invalid token reference regex"));

/// Resolve all `{...}` references in place. `tokens` must already be the
/// full merged set: references can only point at loaded tokens.
pub fn resolve_references(tokens: &mut [Token]) -> Result<()> {
    let index: HashMap<String, usize> = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| (token.path.join("."), i))
        .collect();

    // An edge A -> B means "A depends on B".
    let mut graph: DiGraphMap<usize, ()> = DiGraphMap::new();
    for (i, token) in tokens.iter().enumerate() {
        graph.add_node(i);
        for reference in references_in(&token.value) {
            let target = index.get(reference_path(&reference)).copied().ok_or_else(
                || StyledictError::unresolved_reference(&reference, token.path.join(".")),
            )?;
            graph.add_edge(i, target, ());
        }
    }

    // Dependencies first, so every substitution reads an already-resolved
    // value.
    let mut order = toposort(&graph, None).map_err(|cycle| {
        StyledictError::circular_reference(tokens[cycle.node_id()].path.join("."))
    })?;
    order.reverse();
    debug!("Resolving references across {} token(s)", order.len());

    for i in order {
        let Value::String(raw) = tokens[i].value.clone() else {
            continue;
        };
        if !REFERENCE_RE.is_match(&raw) {
            continue;
        }

        // A value that is exactly one reference adopts the target value
        // wholesale, preserving non-string types.
        if let Some(capture) = REFERENCE_RE.captures(&raw)
            && capture.get(0).map(|m| m.as_str()) == Some(raw.as_str())
        {
            let target = index[reference_path(&capture[1])];
            trace!(
                "Token {} adopts value of {}",
                tokens[i].path.join("."),
                tokens[target].path.join(".")
            );
            let adopted = tokens[target].value.clone();
            tokens[i].value = adopted;
            continue;
        }

        let resolved = REFERENCE_RE
            .replace_all(&raw, |capture: &regex::Captures<'_>| {
                let target = index[reference_path(&capture[1])];
                tokens[target].value_string()
            })
            .into_owned();
        tokens[i].value = Value::String(resolved);
    }
    Ok(())
}

fn references_in(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => REFERENCE_RE
            .captures_iter(s)
            .map(|capture| capture[1].to_string())
            .collect(),
        _ => Vec::new(),
    }
}

/// `color.base.red.value` and `color.base.red` refer to the same token.
fn reference_path(reference: &str) -> &str {
    reference.strip_suffix(".value").unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn token(path: &[&str], value: Value) -> Token {
        Token::new(path.iter().map(|s| s.to_string()).collect(), value)
    }

    #[test]
    fn test_whole_value_reference_adopts_target_value() {
        let mut tokens = vec![
            token(&["color", "base", "red"], json!("#ff0000")),
            token(
                &["component", "button", "background-color"],
                json!("{color.base.red.value}"),
            ),
        ];
        resolve_references(&mut tokens).unwrap();
        assert_eq!(tokens[1].value, json!("#ff0000"));
        // The pre-resolution value is preserved.
        assert_eq!(tokens[1].original_value, json!("{color.base.red.value}"));
    }

    #[test]
    fn test_reference_without_value_suffix_resolves() {
        let mut tokens = vec![
            token(&["size", "base"], json!(2)),
            token(&["size", "double"], json!("{size.base}")),
        ];
        resolve_references(&mut tokens).unwrap();
        assert_eq!(tokens[1].value, json!(2));
    }

    #[test]
    fn test_embedded_reference_interpolates_as_string() {
        let mut tokens = vec![
            token(&["size", "base"], json!("4")),
            token(&["size", "padded"], json!("{size.base.value}px 8px")),
        ];
        resolve_references(&mut tokens).unwrap();
        assert_eq!(tokens[1].value, json!("4px 8px"));
    }

    #[test]
    fn test_chained_references_resolve_in_dependency_order() {
        let mut tokens = vec![
            token(&["a"], json!("{b.value}")),
            token(&["b"], json!("{c.value}")),
            token(&["c"], json!("done")),
        ];
        resolve_references(&mut tokens).unwrap();
        assert_eq!(tokens[0].value, json!("done"));
        assert_eq!(tokens[1].value, json!("done"));
    }

    #[test]
    fn test_dangling_reference_is_an_error() {
        let mut tokens = vec![token(&["a"], json!("{missing.value}"))];
        let err = resolve_references(&mut tokens).unwrap_err();
        assert!(matches!(
            err,
            StyledictError::UnresolvedReference { .. }
        ));
    }

    #[test]
    fn test_reference_cycle_is_an_error() {
        let mut tokens = vec![
            token(&["a"], json!("{b.value}")),
            token(&["b"], json!("{a.value}")),
        ];
        let err = resolve_references(&mut tokens).unwrap_err();
        assert!(matches!(err, StyledictError::CircularReference(_)));
    }
}
