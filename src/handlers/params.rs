use axum::{extract::RawQuery, Json};

use crate::extract::{CgiForm, CgiQuery};
use crate::utils::{find_duplicate_names, rewrite_duplicate_names, Parameters};

pub async fn params_get(CgiQuery(params): CgiQuery) -> Json<Parameters> {
    tracing::info!(count = params.len(), "Decoded query parameters");
    Json(params)
}

pub async fn params_post(CgiForm(params): CgiForm) -> Json<Parameters> {
    tracing::info!(count = params.len(), "Decoded form parameters");
    Json(params)
}

/// Repeated raw parameter names, sorted
pub async fn duplicates_get(RawQuery(query): RawQuery) -> Json<Vec<String>> {
    let mut names: Vec<String> = find_duplicate_names(query.as_deref().unwrap_or_default())
        .into_iter()
        .collect();
    names.sort();
    Json(names)
}

pub async fn rewritten_get(RawQuery(query): RawQuery) -> String {
    let query = query.unwrap_or_default();
    let duplicates = find_duplicate_names(&query);
    rewrite_duplicate_names(&query, &duplicates)
}
