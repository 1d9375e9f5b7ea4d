/// Tests for decoding query strings with repeated parameter names
use cgiparams::utils::{
    find_duplicate_names, parameters_from_query_string, rewrite_duplicate_names, ParamValue,
};

fn many(values: &[&str]) -> ParamValue {
    ParamValue::Many(values.iter().map(|v| v.to_string()).collect())
}

#[test]
fn test_get_parameters_basic() {
    let params = parameters_from_query_string("name1=val1&name2=val2");

    assert_eq!(params.len(), 2);
    assert_eq!(params["name1"], ParamValue::Single("val1".into()));
    assert_eq!(params["name2"], ParamValue::Single("val2".into()));
}

#[test]
fn test_get_parameters_cgi_array_syntax() {
    let params = parameters_from_query_string("name1=val1&arrVal=one&arrVal=two");

    assert_eq!(params.len(), 2);
    assert_eq!(params["name1"].as_str(), Some("val1"));
    assert_eq!(params["arrVal"], many(&["one", "two"]));
}

#[test]
fn test_get_parameters_cgi_array_param_in_data() {
    let params = parameters_from_query_string("name1=val1&arrVal=one&arrVal=arrVal");

    assert_eq!(params.len(), 2);
    assert_eq!(params["name1"].as_str(), Some("val1"));
    assert_eq!(params["arrVal"], many(&["one", "arrVal"]));
}

#[test]
fn test_get_parameters_empty() {
    assert!(parameters_from_query_string("").is_empty());
}

#[test]
fn test_get_parameters_three_occurrences() {
    let params = parameters_from_query_string("a=1&a=2&a=3");

    assert_eq!(params.len(), 1);
    assert_eq!(params["a"], many(&["1", "2", "3"]));
}

#[test]
fn test_value_with_embedded_name_and_equals_survives() {
    let query = "f=one&f=f=two&g=f";
    let rewritten = rewrite_duplicate_names(query, &find_duplicate_names(query));
    assert_eq!(rewritten, "f[]=one&f[]=f=two&g=f");

    let params = parameters_from_query_string(query);
    assert_eq!(params["f"], many(&["one", "f=two"]));
    assert_eq!(params["g"].as_str(), Some("f"));
}

#[test]
fn test_repeated_values_are_percent_decoded_in_order() {
    let params = parameters_from_query_string("q=a+b&q=c%26d&q=%E2%9C%93&x=%2B");

    assert_eq!(params["q"], many(&["a b", "c&d", "\u{2713}"]));
    assert_eq!(params["x"].as_str(), Some("+"));
}

#[test]
fn test_interleaved_repeated_names() {
    let params = parameters_from_query_string("a=1&b=1&a=2&c=x&b=2&a=3");

    assert_eq!(params["a"], many(&["1", "2", "3"]));
    assert_eq!(params["b"], many(&["1", "2"]));
    assert_eq!(params["c"].as_str(), Some("x"));
}

#[test]
fn test_repeated_bare_flags_become_lists_of_empty_strings() {
    let params = parameters_from_query_string("verbose&verbose&level=2");

    assert_eq!(params["verbose"], many(&["", ""]));
    assert_eq!(params["level"].as_str(), Some("2"));
}

#[test]
fn test_single_bare_flag_is_empty_value() {
    let params = parameters_from_query_string("debug&x=1");

    assert_eq!(params["debug"].as_str(), Some(""));
}

#[test]
fn test_repeated_empty_name() {
    let params = parameters_from_query_string("=a&=b");

    assert_eq!(params[""], many(&["a", "b"]));
}

#[test]
fn test_repeated_empty_values() {
    let params = parameters_from_query_string("a=&a=");

    assert_eq!(params["a"], many(&["", ""]));
}

#[test]
fn test_repeated_bracket_names_decode_under_plain_key() {
    let params = parameters_from_query_string("tag[]=a&tag[]=b");

    assert_eq!(params.len(), 1);
    assert_eq!(params["tag"], many(&["a", "b"]));
}

#[test]
fn test_encoded_name_matching_a_list_is_appended() {
    let params = parameters_from_query_string("x=1&x=2&%78=3");

    assert_eq!(params["x"], many(&["1", "2", "3"]));
}
