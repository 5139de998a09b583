use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::services::{catalog::CatalogIndex, matcher};

#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    q: String,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub query: String,
    pub matched_title: String,
}

/// Handler for the closest-title lookup endpoint
///
/// Returns 404 when no known title is reasonably close to the query.
pub async fn match_title(
    State(catalog): State<Arc<CatalogIndex>>,
    Query(params): Query<MatchQuery>,
) -> AppResult<Json<MatchResponse>> {
    if params.q.trim().is_empty() {
        return Err(AppError::InvalidInput("query must not be empty".to_string()));
    }

    let matched_title = matcher::find_closest_title(&params.q, catalog.titles())?;
    Ok(Json(MatchResponse {
        query: params.q,
        matched_title,
    }))
}
