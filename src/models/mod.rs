use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Streaming platforms tracked by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Netflix,
    Hulu,
    #[serde(rename = "Prime Video")]
    PrimeVideo,
    #[serde(rename = "Disney+")]
    DisneyPlus,
}

impl Platform {
    /// Canonical display name of the platform
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Netflix => "Netflix",
            Platform::Hulu => "Hulu",
            Platform::PrimeVideo => "Prime Video",
            Platform::DisneyPlus => "Disney+",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-platform availability flags for one movie
///
/// A movie may be available on several platforms at once; decoding always
/// yields the full set of platforms whose flag is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub netflix: bool,
    pub hulu: bool,
    pub prime_video: bool,
    pub disney_plus: bool,
}

impl Availability {
    /// Decodes the flags into the list of platforms carrying the movie
    pub fn platforms(&self) -> Vec<Platform> {
        let mut platforms = Vec::new();
        if self.netflix {
            platforms.push(Platform::Netflix);
        }
        if self.hulu {
            platforms.push(Platform::Hulu);
        }
        if self.prime_video {
            platforms.push(Platform::PrimeVideo);
        }
        if self.disney_plus {
            platforms.push(Platform::DisneyPlus);
        }
        platforms
    }
}

/// One row of the movie catalog
///
/// The five text fields may be empty; empty is a valid, neutral value. The
/// rating and runtime fields are opaque display values passed through to the
/// client unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: u32,
    pub title: String,
    pub genres: String,
    pub country: String,
    pub language: String,
    pub directors: String,
    pub availability: Availability,
    pub imdb_rating: String,
    pub rotten_tomatoes_rating: String,
    pub runtime: String,
}

impl MovieRecord {
    /// Builds the text the record is vectorized from: genres, country, title,
    /// language, directors joined by single spaces. The field order is
    /// arbitrary but must be identical across all records for their vectors
    /// to live in a comparable space.
    pub fn feature_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.genres, self.country, self.title, self.language, self.directors
        )
    }
}

/// A single ranked recommendation returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub platforms: Vec<Platform>,
    pub imdb_rating: String,
    pub rotten_tomatoes_rating: String,
    pub runtime: String,
}
