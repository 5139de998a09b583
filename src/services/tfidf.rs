//! TF-IDF vectorization and cosine similarity
//!
//! Documents are tokenized into lowercase alphanumeric runs, weighted with
//! smoothed inverse document frequency, and L2-normalized. With unit vectors
//! the cosine similarity of two documents is just their sparse dot product.

use std::collections::{BTreeMap, HashMap};

/// Tokens shorter than this carry almost no signal and are dropped
const MIN_TOKEN_LEN: usize = 2;

/// Splits text into lowercase tokens of at least two alphanumeric characters
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// A TF-IDF document vector: (term id, weight) pairs sorted by term id,
/// L2-normalized unless the document produced no tokens (zero vector).
#[derive(Debug, Clone, PartialEq)]
pub struct DocVector {
    terms: Vec<(usize, f64)>,
}

impl DocVector {
    /// Dot product over the sorted sparse representations
    pub fn dot(&self, other: &DocVector) -> f64 {
        let mut sum = 0.0;
        let mut a = self.terms.iter().peekable();
        let mut b = other.terms.iter().peekable();
        while let (Some(&&(ta, wa)), Some(&&(tb, wb))) = (a.peek(), b.peek()) {
            match ta.cmp(&tb) {
                std::cmp::Ordering::Less => {
                    a.next();
                }
                std::cmp::Ordering::Greater => {
                    b.next();
                }
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    a.next();
                    b.next();
                }
            }
        }
        sum
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Vocabulary and IDF weights learned from one corpus
#[derive(Debug)]
pub struct TfidfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfModel {
    /// Learns the vocabulary and IDF weights from `documents` and returns the
    /// model together with one normalized vector per document.
    ///
    /// IDF is the smoothed variant `ln((1 + n) / (1 + df)) + 1`, so terms
    /// occurring in every document still carry a small positive weight.
    pub fn fit_transform(documents: &[String]) -> (TfidfModel, Vec<DocVector>) {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

        // Document frequency per term; BTreeMap gives a deterministic term order
        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let mut seen: Vec<&str> = tokens.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(df.len());
        let mut idf = Vec::with_capacity(df.len());
        for (term_id, (term, count)) in df.into_iter().enumerate() {
            vocabulary.insert(term.to_string(), term_id);
            idf.push(((1.0 + n) / (1.0 + count as f64)).ln() + 1.0);
        }

        let model = TfidfModel { vocabulary, idf };
        let vectors = tokenized
            .iter()
            .map(|tokens| model.vectorize(tokens))
            .collect();
        (model, vectors)
    }

    /// Number of distinct terms in the learned vocabulary
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    fn vectorize(&self, tokens: &[String]) -> DocVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokens {
            if let Some(&term_id) = self.vocabulary.get(token) {
                *counts.entry(term_id).or_insert(0.0) += 1.0;
            }
        }

        let mut terms: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(term_id, tf)| (term_id, tf * self.idf[term_id]))
            .collect();

        let norm = terms.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut terms {
                *weight /= norm;
            }
        }
        DocVector { terms }
    }
}

/// Precomputed pairwise cosine similarities over one corpus
///
/// Square and symmetric; row order matches the document order passed to the
/// build. Diagonal entries are pinned to 1.0, including for zero vectors.
#[derive(Debug)]
pub struct SimilarityMatrix {
    size: usize,
    rows: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Computes the full pairwise matrix, exploiting symmetry
    pub fn build(vectors: &[DocVector]) -> SimilarityMatrix {
        let size = vectors.len();
        let mut rows = vec![vec![0.0; size]; size];
        for i in 0..size {
            rows[i][i] = 1.0;
            for j in (i + 1)..size {
                let score = vectors[i].dot(&vectors[j]);
                rows[i][j] = score;
                rows[j][i] = score;
            }
        }
        SimilarityMatrix { size, rows }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Similarity of row `i` against every document, in document order
    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }
}
