/// Return `s` with `prefix` removed if it starts with it
pub fn remove_prefix<'a>(s: &'a str, prefix: &str) -> &'a str {
    s.strip_prefix(prefix).unwrap_or(s)
}

/// Return `s` with `postfix` removed if it ends with it
pub fn remove_postfix<'a>(s: &'a str, postfix: &str) -> &'a str {
    if s.is_empty() || postfix.is_empty() {
        return s;
    }
    s.strip_suffix(postfix).unwrap_or(s)
}

/// True if `haystack` ends with `needle`; false when either is empty
pub fn ends_with(haystack: &str, needle: &str) -> bool {
    if haystack.is_empty() || needle.is_empty() {
        return false;
    }
    haystack.ends_with(needle)
}

/// Case-insensitive `starts_with`; false when either is empty
pub fn starts_with_ignore_case(haystack: &str, needle: &str) -> bool {
    if haystack.is_empty() || needle.is_empty() {
        return false;
    }
    haystack.to_lowercase().starts_with(&needle.to_lowercase())
}
