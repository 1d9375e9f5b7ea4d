// Query string handling
pub mod query_string;
pub mod url_encoding;

// String and list helpers
pub mod string;
pub mod array;
pub mod bundle;

// SQL fragment builders
pub mod sql;

// Re-export the common entry points for convenient access
pub use query_string::{find_duplicate_names, parameters_from_query_string, rewrite_duplicate_names};
pub use url_encoding::{parse_form_encoded, parse_urlencoded_body, ParamValue, Parameters, ARRAY_MARKER};
pub use array::{split_smart, SmartSplit};
pub use bundle::bundle_name;
