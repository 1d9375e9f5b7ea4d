use serde::Serialize;

use super::query_string::parameters_from_query_string;
use super::url_encoding::Parameters;

/// Default item delimiter tried first by [`split_smart`]
pub const DEFAULT_DELIMITER: char = ';';

/// Default key/value delimiter used by [`split_smart`]
pub const DEFAULT_VALUE_DELIMITER: char = '=';

/// Result of [`split_smart`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SmartSplit {
    /// Plain items, in input order
    List(Vec<String>),
    /// Key/value items, in order of first appearance of each key
    Pairs(Vec<(String, String)>),
    /// Input was `&`-delimited and decoded as a query string
    Query(Parameters),
}

/// Split a loosely delimited string using the best available delimiter.
///
/// Delimiters are tried in order: `delimiter`, then `,`, then `&`. An
/// `&`-delimited input is decoded as a query string. Otherwise items are
/// trimmed and empty items dropped; if `value_delimiter` appears anywhere
/// in the input every item is read as `key=value`.
pub fn split_smart(input: &str, delimiter: char, value_delimiter: char) -> SmartSplit {
    if input.is_empty() {
        return SmartSplit::List(Vec::new());
    }

    let delim = [delimiter, ',', '&']
        .into_iter()
        .find(|d| input.contains(*d));
    let has_value_delim = input.contains(value_delimiter);

    let Some(delim) = delim else {
        if has_value_delim {
            return SmartSplit::Pairs(vec![split_pair(input, value_delimiter)]);
        }
        return SmartSplit::List(vec![input.to_string()]);
    };

    if delim == '&' {
        return SmartSplit::Query(parameters_from_query_string(input));
    }

    let items = input.split(delim).map(str::trim).filter(|item| !item.is_empty());
    if !has_value_delim {
        return SmartSplit::List(items.map(str::to_string).collect());
    }

    let mut pairs: Vec<(String, String)> = Vec::new();
    for item in items {
        let (key, value) = split_pair(item, value_delimiter);
        match pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => pairs.push((key, value)),
        }
    }
    SmartSplit::Pairs(pairs)
}

/// Key is the text before the first delimiter, value the text up to the second
fn split_pair(item: &str, value_delimiter: char) -> (String, String) {
    let mut parts = item.split(value_delimiter);
    let key = parts.next().unwrap_or("").trim().to_string();
    let value = parts.next().unwrap_or("").trim().to_string();
    (key, value)
}
