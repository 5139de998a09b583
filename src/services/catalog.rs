//! Catalog index construction
//!
//! Loads the movie table from CSV, derives one feature text per record,
//! vectorizes the corpus with TF-IDF and precomputes the full pairwise
//! cosine-similarity matrix. Built once at startup; immutable afterward.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::{AppError, AppResult};
use crate::models::{Availability, MovieRecord};
use crate::services::tfidf::{SimilarityMatrix, TfidfModel};

/// Immutable movie catalog plus its precomputed similarity matrix
///
/// Matrix rows are indexed by file-order row position. Lookup by record id or
/// title goes through O(1) maps built at load time; titles are not guaranteed
/// unique and resolve to their first occurrence.
#[derive(Debug)]
pub struct CatalogIndex {
    records: Vec<MovieRecord>,
    id_to_row: HashMap<u32, usize>,
    title_to_row: HashMap<String, usize>,
    similarity: SimilarityMatrix,
}

/// Raw CSV row; the original dataset's extra columns are ignored.
/// All listed columns must be present, but their values may be empty.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Genres")]
    genres: String,
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Language")]
    language: String,
    #[serde(rename = "Directors")]
    directors: String,
    #[serde(rename = "Netflix", deserialize_with = "flag_from_int")]
    netflix: bool,
    #[serde(rename = "Hulu", deserialize_with = "flag_from_int")]
    hulu: bool,
    #[serde(rename = "Prime Video", deserialize_with = "flag_from_int")]
    prime_video: bool,
    #[serde(rename = "Disney+", deserialize_with = "flag_from_int")]
    disney_plus: bool,
    #[serde(rename = "IMDb")]
    imdb_rating: String,
    #[serde(rename = "Rotten Tomatoes")]
    rotten_tomatoes_rating: String,
    #[serde(rename = "Runtime")]
    runtime: String,
}

/// Availability cells hold 0/1; an empty cell decodes as not available
fn flag_from_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<u8> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or(0) != 0)
}

impl From<CsvRow> for MovieRecord {
    fn from(row: CsvRow) -> Self {
        MovieRecord {
            id: row.id,
            title: row.title,
            genres: row.genres,
            country: row.country,
            language: row.language,
            directors: row.directors,
            availability: Availability {
                netflix: row.netflix,
                hulu: row.hulu,
                prime_video: row.prime_video,
                disney_plus: row.disney_plus,
            },
            imdb_rating: row.imdb_rating,
            rotten_tomatoes_rating: row.rotten_tomatoes_rating,
            runtime: row.runtime,
        }
    }
}

impl CatalogIndex {
    /// Builds the index from a CSV file on disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        Self::from_csv(&mut reader)
    }

    /// Builds the index from any CSV source, e.g. an in-memory buffer
    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        Self::from_csv(&mut reader)
    }

    fn from_csv<R: Read>(reader: &mut csv::Reader<R>) -> AppResult<Self> {
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let row: CsvRow = row?;
            records.push(MovieRecord::from(row));
        }
        Self::from_records(records)
    }

    /// Builds the index from already-parsed records
    ///
    /// Fails with a dataset error on an empty catalog (vectorizing zero
    /// documents is undefined) or a duplicated record id.
    pub fn from_records(records: Vec<MovieRecord>) -> AppResult<Self> {
        if records.is_empty() {
            return Err(AppError::Dataset(
                "catalog dataset contains no records".to_string(),
            ));
        }

        let mut id_to_row = HashMap::with_capacity(records.len());
        let mut title_to_row = HashMap::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            if id_to_row.insert(record.id, row).is_some() {
                return Err(AppError::Dataset(format!(
                    "duplicate record id {} at row {}",
                    record.id, row
                )));
            }
            // First occurrence wins for non-unique titles
            title_to_row.entry(record.title.clone()).or_insert(row);
        }

        let documents: Vec<String> = records.iter().map(MovieRecord::feature_text).collect();
        let (model, vectors) = TfidfModel::fit_transform(&documents);
        let similarity = SimilarityMatrix::build(&vectors);

        tracing::info!(
            movies = records.len(),
            vocabulary = model.vocabulary_size(),
            "Built catalog index"
        );

        Ok(Self {
            records,
            id_to_row,
            title_to_row,
            similarity,
        })
    }

    /// Number of records in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All catalog records in matrix row order
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// All known titles in catalog order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.title.as_str())
    }

    /// Record at the given matrix row
    pub fn record(&self, row: usize) -> Option<&MovieRecord> {
        self.records.get(row)
    }

    /// Record with the given catalog id
    pub fn record_by_id(&self, id: u32) -> Option<&MovieRecord> {
        self.id_to_row.get(&id).map(|&row| &self.records[row])
    }

    /// Matrix row of the first record with the given exact title
    pub fn row_of_title(&self, title: &str) -> Option<usize> {
        self.title_to_row.get(title).copied()
    }

    /// The precomputed pairwise similarity matrix
    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }
}
