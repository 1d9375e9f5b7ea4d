use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Suffix that tells [`parse_form_encoded`] to collect a name into a list
pub const ARRAY_MARKER: &str = "[]";

/// Decoded parameters keyed by name (array marker stripped)
pub type Parameters = HashMap<String, ParamValue>;

/// A decoded parameter value: one string, or every value of a repeated name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Many(Vec<String>),
}

impl ParamValue {
    /// The value if this is a single parameter
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Single(s) => Some(s.as_str()),
            ParamValue::Many(_) => None,
        }
    }

    /// All values in appearance order; a single value yields a one-element slice
    pub fn values(&self) -> &[String] {
        match self {
            ParamValue::Single(s) => std::slice::from_ref(s),
            ParamValue::Many(v) => v,
        }
    }

    pub fn is_many(&self) -> bool {
        matches!(self, ParamValue::Many(_))
    }

    pub fn to_csv(&self) -> String {
        self.values().join(",")
    }
}

/// Decode a form-encoded string into [`Parameters`].
///
/// Names ending in `[]` (after decoding) collect their values into
/// [`ParamValue::Many`] in order of appearance. Any other name maps to a
/// single value and a later occurrence replaces an earlier one, unless the
/// name already holds a list, in which case the value is appended. A pair
/// without `=` decodes to an empty value; empty segments are skipped.
pub fn parse_form_encoded(raw: &str) -> Parameters {
    let mut map = Parameters::new();
    for pair in raw.split('&') {
        if pair.is_empty() {
            continue;
        }
        let mut parts = pair.splitn(2, '=');
        let key_enc = parts.next().unwrap_or("");
        let val_enc = parts.next().unwrap_or("");
        let key = decode_component(key_enc);
        let val = decode_component(val_enc);
        match key.strip_suffix(ARRAY_MARKER) {
            Some(name) => match map.get_mut(name) {
                Some(ParamValue::Many(values)) => values.push(val),
                _ => {
                    map.insert(name.to_string(), ParamValue::Many(vec![val]));
                }
            },
            None => match map.get_mut(key.as_str()) {
                Some(ParamValue::Many(values)) => values.push(val),
                _ => {
                    map.insert(key, ParamValue::Single(val));
                }
            },
        }
    }
    map
}

/// Parse a URL-encoded form body, aggregating repeated names like a query string
pub fn parse_urlencoded_body(body: &axum::body::Bytes) -> Parameters {
    let raw = String::from_utf8_lossy(body);
    super::query_string::parameters_from_query_string(&raw)
}

/// Percent-decode one name or value, treating `+` as a space.
///
/// Malformed escapes are kept literally and invalid UTF-8 is replaced
/// rather than rejected.
fn decode_component(encoded: &str) -> String {
    let spaced = encoded.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
