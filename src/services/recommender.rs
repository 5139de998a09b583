//! Ranked recommendation over the precomputed similarity matrix
//!
//! Pure, synchronous computation over the immutable catalog: look up the
//! matched title's similarity row, rank every record by score, take the top
//! `limit` and decode their availability flags into platform names. The
//! queried movie itself is never filtered out, so it usually ranks first.

use std::cmp::Ordering;

use crate::error::{AppError, AppResult};
use crate::models::Recommendation;
use crate::services::catalog::CatalogIndex;

/// Number of recommendations returned when the caller does not ask otherwise
pub const DEFAULT_LIMIT: usize = 10;

/// Returns the `limit` records most similar to `matched_title`, best first.
///
/// `matched_title` must be an exact catalog title, normally the output of
/// the fuzzy matcher; anything else is an internal invariant violation and
/// surfaces as `NotFound`. Equal scores keep catalog order (stable sort), so
/// the ranking is fully deterministic. The result always has
/// `min(limit, catalog.len())` entries.
pub fn recommend(
    catalog: &CatalogIndex,
    matched_title: &str,
    limit: usize,
) -> AppResult<Vec<Recommendation>> {
    let row = catalog.row_of_title(matched_title).ok_or_else(|| {
        AppError::NotFound(format!("matched title {matched_title:?} is not in the catalog"))
    })?;

    let mut ranked: Vec<(usize, f64)> = catalog
        .similarity()
        .row(row)
        .iter()
        .copied()
        .enumerate()
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(limit);

    let recommendations = ranked
        .into_iter()
        .map(|(candidate, _)| {
            let record = &catalog.records()[candidate];
            Recommendation {
                title: record.title.clone(),
                platforms: record.availability.platforms(),
                imdb_rating: record.imdb_rating.clone(),
                rotten_tomatoes_rating: record.rotten_tomatoes_rating.clone(),
                runtime: record.runtime.clone(),
            }
        })
        .collect();

    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, MovieRecord, Platform};

    fn record(id: u32, title: &str, genres: &str, directors: &str) -> MovieRecord {
        MovieRecord {
            id,
            title: title.to_string(),
            genres: genres.to_string(),
            country: "United States".to_string(),
            language: "English".to_string(),
            directors: directors.to_string(),
            availability: Availability {
                netflix: true,
                hulu: false,
                prime_video: true,
                disney_plus: false,
            },
            imdb_rating: "8.0".to_string(),
            rotten_tomatoes_rating: "80/100".to_string(),
            runtime: "120".to_string(),
        }
    }

    /// Records A and B share all feature text except the title; C is distinct
    fn three_record_catalog() -> CatalogIndex {
        let a = record(1, "Alpha", "Action Thriller", "Jane Doe");
        let b = record(2, "Beta", "Action Thriller", "Jane Doe");
        let mut c = record(3, "Gamma", "Documentary Nature", "Someone Else");
        c.country = "Iceland".to_string();
        c.language = "Icelandic".to_string();
        CatalogIndex::from_records(vec![a, b, c]).unwrap()
    }

    #[test]
    fn test_queried_movie_ranks_first_then_closest() {
        let catalog = three_record_catalog();
        let results = recommend(&catalog, "Alpha", 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Alpha");
        assert_eq!(results[1].title, "Beta");
    }

    #[test]
    fn test_limit_respected() {
        let catalog = three_record_catalog();
        for limit in 0..6 {
            let results = recommend(&catalog, "Alpha", limit).unwrap();
            assert_eq!(results.len(), limit.min(catalog.len()));
        }
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let catalog = three_record_catalog();
        let first = recommend(&catalog, "Beta", 3).unwrap();
        let second = recommend(&catalog, "Beta", 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_platforms_decoded_into_results() {
        let catalog = three_record_catalog();
        let results = recommend(&catalog, "Alpha", 1).unwrap();
        assert_eq!(
            results[0].platforms,
            vec![Platform::Netflix, Platform::PrimeVideo]
        );
    }

    #[test]
    fn test_passthrough_fields_survive() {
        let catalog = three_record_catalog();
        let results = recommend(&catalog, "Alpha", 1).unwrap();
        assert_eq!(results[0].imdb_rating, "8.0");
        assert_eq!(results[0].rotten_tomatoes_rating, "80/100");
        assert_eq!(results[0].runtime, "120");
    }

    #[test]
    fn test_unknown_title_is_not_found() {
        let catalog = three_record_catalog();
        let err = recommend(&catalog, "Delta", 10).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
