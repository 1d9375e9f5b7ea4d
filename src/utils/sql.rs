//! SQL fragment builders
//!
//! These only build strings and parameter maps; running the statements is
//! left to whichever database client the caller uses.

use std::collections::BTreeMap;

use serde::Serialize;

/// Prefix given to named parameters generated by [`build_set_info`]
pub const SET_FIELD_PREFIX: &str = "setField_";

/// Escape `%` and `_` in a LIKE operand and wrap it with `prefix` and `postfix`.
///
/// Pass `"%"` for both to match anywhere, or an empty prefix to match only
/// values starting with `value`.
pub fn escape_like_parameter(value: &str, prefix: &str, postfix: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + prefix.len() + postfix.len());
    escaped.push_str(prefix);
    for c in value.chars() {
        if c == '%' || c == '_' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push_str(postfix);
    escaped
}

/// A `SET` clause body and the named parameters it references
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SetInfo {
    pub query: String,
    pub parameters: BTreeMap<String, String>,
}

/// Build `col = :setField_col, ...` for each field, after any `extra_parts`.
///
/// ```
/// use cgiparams::utils::sql::build_set_info;
///
/// let fields = vec![("comments".to_string(), "some comments".to_string())];
/// let info = build_set_info(&fields, &[]);
/// assert_eq!(info.query, "comments = :setField_comments");
/// assert_eq!(info.parameters["setField_comments"], "some comments");
/// ```
pub fn build_set_info(fields: &[(String, String)], extra_parts: &[&str]) -> SetInfo {
    let mut parts: Vec<String> = extra_parts.iter().map(|p| p.to_string()).collect();
    let mut parameters = BTreeMap::new();
    for (name, value) in fields {
        parts.push(format!("{} = :{}{}", name, SET_FIELD_PREFIX, name));
        parameters.insert(format!("{}{}", SET_FIELD_PREFIX, name), value.clone());
    }
    SetInfo {
        query: parts.join(", "),
        parameters,
    }
}

/// Quote every value with `quote` and join them for use inside `IN (...)`
pub fn in_from_list<I, S, F>(values: I, quote: F) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    values
        .into_iter()
        .map(|v| quote(v.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Standard SQL string literal quoting (single quotes doubled)
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
