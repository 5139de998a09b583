use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::Recommendation;
use crate::services::{catalog::CatalogIndex, matcher, recommender};

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub movie_name: String,
    /// Maximum number of results; defaults to 10
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub query: String,
    /// The catalog title the query was matched to, or null when nothing was
    /// close enough
    pub matched_title: Option<String>,
    pub recommendations: Vec<Recommendation>,
}

/// Handler for the recommendations endpoint
///
/// A query that matches no known title is not an error at this boundary: it
/// renders as an empty result set with a null matched title.
pub async fn recommend(
    State(catalog): State<Arc<CatalogIndex>>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    if request.movie_name.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "movie_name must not be empty".to_string(),
        ));
    }
    let limit = request.limit.unwrap_or(recommender::DEFAULT_LIMIT);

    match matcher::find_closest_title(&request.movie_name, catalog.titles()) {
        Ok(matched_title) => {
            let recommendations = recommender::recommend(&catalog, &matched_title, limit)?;
            Ok(Json(RecommendationResponse {
                query: request.movie_name,
                matched_title: Some(matched_title),
                recommendations,
            }))
        }
        Err(AppError::NoMatch(_)) => {
            tracing::info!(query = %request.movie_name, "No close title match for query");
            Ok(Json(RecommendationResponse {
                query: request.movie_name,
                matched_title: None,
                recommendations: Vec::new(),
            }))
        }
        Err(other) => Err(other),
    }
}
