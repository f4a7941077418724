//! Name transforms: rewrite a token's output name from its path.

use crate::token::Token;
use convert_case::{Case, Casing};

/// `name/cti/kebab`: prefix + path, kebab-cased.
pub fn cti_kebab(token: &Token, prefix: Option<&str>) -> String {
    cased(token, prefix, Case::Kebab)
}

/// `name/cti/snake`: prefix + path, snake-cased.
pub fn cti_snake(token: &Token, prefix: Option<&str>) -> String {
    cased(token, prefix, Case::Snake)
}

/// `name/cti/pascal`: prefix + path, pascal-cased.
pub fn cti_pascal(token: &Token, prefix: Option<&str>) -> String {
    cased(token, prefix, Case::Pascal)
}

/// `name/path/upper-snake`: path joined with underscores and upper-cased.
/// Hyphens inside path segments are kept as-is; the prefix is ignored.
pub fn path_upper_snake(token: &Token, _prefix: Option<&str>) -> String {
    token.path.join("_").to_uppercase()
}

fn cased(token: &Token, prefix: Option<&str>, case: Case) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(token.path.len() + 1);
    if let Some(prefix) = prefix {
        parts.push(prefix);
    }
    parts.extend(token.path.iter().map(String::as_str));
    parts.join(" ").to_case(case)
}
