//! Query-string and request helpers for axum services
//!
//! The centerpiece is [`utils::parameters_from_query_string`], which decodes
//! CGI-style repeated names (`tag=a&tag=b`) into ordered lists instead of
//! keeping only the last value. [`extract::CgiQuery`] and
//! [`extract::CgiForm`] expose it as axum extractors.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod utils;

pub use error::AppError;
pub use utils::{ParamValue, Parameters};
