//! CGI-style repeated parameter support for query strings
//!
//! A plain form decoder keeps only the last value when a name is repeated:
//! `fields=one&fields=two` decodes as `fields = "two"`. The helpers here
//! find the repeated names first and rewrite every occurrence to bracket
//! syntax (`fields[]=one&fields[]=two`) so the structured decoder in
//! [`crate::utils::url_encoding`] aggregates them into an ordered list.
//!
//! # Examples
//!
//! ```
//! use cgiparams::utils::{parameters_from_query_string, ParamValue};
//!
//! let params = parameters_from_query_string("name1=val1&arrVal=one&arrVal=two");
//! assert_eq!(params["name1"], ParamValue::Single("val1".into()));
//! assert_eq!(params["arrVal"], ParamValue::Many(vec!["one".into(), "two".into()]));
//! ```

use std::collections::HashSet;

use super::url_encoding::{parse_form_encoded, Parameters, ARRAY_MARKER};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    ReadingName,
    ReadingValue,
}

/// Parse a raw query string, aggregating repeated names into ordered lists
pub fn parameters_from_query_string(query: &str) -> Parameters {
    let duplicates = find_duplicate_names(query);
    if duplicates.is_empty() {
        return parse_form_encoded(query);
    }
    tracing::debug!(?duplicates, "Rewriting repeated query parameters");
    let rewritten = rewrite_duplicate_names(query, &duplicates);
    tracing::trace!(%rewritten, "Rewritten query string");
    parse_form_encoded(&rewritten)
}

/// Collect the raw (still encoded) parameter names that occur in more than one pair.
///
/// A segment without `=` counts as a name with an empty value; empty
/// segments such as the middle of `a=1&&b=2` are not pairs and are skipped.
pub fn find_duplicate_names(query: &str) -> HashSet<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut duplicates: HashSet<String> = HashSet::new();
    let mut name = String::new();
    let mut state = ScanState::ReadingName;

    let mut finalize = |name: &mut String| {
        let finished = std::mem::take(name);
        if seen.contains(&finished) {
            duplicates.insert(finished);
        } else {
            seen.insert(finished);
        }
    };

    for c in query.chars() {
        match state {
            ScanState::ReadingName => match c {
                '=' => {
                    finalize(&mut name);
                    state = ScanState::ReadingValue;
                }
                // bare flag
                '&' if !name.is_empty() => finalize(&mut name),
                '&' => {}
                _ => name.push(c),
            },
            ScanState::ReadingValue => {
                if c == '&' {
                    state = ScanState::ReadingName;
                }
            }
        }
    }
    if state == ScanState::ReadingName && !name.is_empty() {
        finalize(&mut name);
    }

    duplicates
}

/// Append the array marker to the name of every pair whose name is in `duplicates`.
///
/// A name that already ends in the marker (`tag[]` or `tag%5B%5D`) is left
/// as it is, so the decoder still keys it as `tag`. Only name portions are inspected. Everything after the `=` of a pair is
/// copied verbatim up to and including the next `&`, so a value that happens
/// to contain a duplicated name (or another `=`) is never altered.
pub fn rewrite_duplicate_names(query: &str, duplicates: &HashSet<String>) -> String {
    let mut out = String::with_capacity(query.len() + duplicates.len() * 2 * ARRAY_MARKER.len());
    let mut name = String::new();
    let mut state = ScanState::ReadingName;

    let emit_name = |out: &mut String, name: &mut String| {
        out.push_str(name);
        if duplicates.contains(name.as_str()) && !has_array_marker(name) {
            out.push_str(ARRAY_MARKER);
        }
        name.clear();
    };

    for c in query.chars() {
        match state {
            ScanState::ReadingName => match c {
                '=' => {
                    emit_name(&mut out, &mut name);
                    out.push('=');
                    state = ScanState::ReadingValue;
                }
                '&' => {
                    if !name.is_empty() {
                        emit_name(&mut out, &mut name);
                    }
                    out.push('&');
                }
                _ => name.push(c),
            },
            ScanState::ReadingValue => {
                out.push(c);
                if c == '&' {
                    state = ScanState::ReadingName;
                }
            }
        }
    }
    if !name.is_empty() {
        emit_name(&mut out, &mut name);
    }

    out
}

/// True if a raw name already ends in `[]`, literally or percent-encoded
fn has_array_marker(name: &str) -> bool {
    const ENCODED_MARKER: &str = "%5b%5d";
    if name.ends_with(ARRAY_MARKER) {
        return true;
    }
    name.len() >= ENCODED_MARKER.len()
        && name.is_char_boundary(name.len() - ENCODED_MARKER.len())
        && name[name.len() - ENCODED_MARKER.len()..].eq_ignore_ascii_case(ENCODED_MARKER)
}
