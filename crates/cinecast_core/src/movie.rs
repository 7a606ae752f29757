//! Movie records as returned by the metadata service.

use serde::{Deserialize, Serialize};

/// A single movie record.
///
/// Fields mirror the metadata service's list item shape. Anything the service
/// may omit is defaulted so a sparse record still decodes.
///
/// # Examples
///
/// ```
/// use cinecast_core::Movie;
///
/// let movie: Movie = serde_json::from_str(
///     r#"{"id": 603, "title": "The Matrix", "release_date": "1999-03-30",
///         "vote_average": 8.2, "vote_count": 26000, "popularity": 90.5,
///         "poster_path": "/matrix.jpg"}"#,
/// ).unwrap();
///
/// assert_eq!(movie.year(), "1999");
/// assert!(movie.has_poster());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Movie {
    /// Metadata service identifier
    pub id: u64,
    /// Localized title
    #[serde(default)]
    pub title: String,
    /// Primary release date as `YYYY-MM-DD`
    #[serde(default)]
    pub release_date: Option<String>,
    /// Average rating, 0.0 to 10.0
    #[serde(default)]
    pub vote_average: f64,
    /// Number of ratings
    #[serde(default)]
    pub vote_count: u64,
    /// Service-defined popularity score
    #[serde(default)]
    pub popularity: f64,
    /// Poster image path relative to the image CDN
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Plot summary
    #[serde(default)]
    pub overview: Option<String>,
    /// ISO 639-1 code of the original language
    #[serde(default)]
    pub original_language: Option<String>,
}

impl Movie {
    /// Release date string, empty when unknown.
    pub fn release_date_str(&self) -> &str {
        self.release_date.as_deref().unwrap_or("")
    }

    /// First four characters of the release date, empty when unknown.
    pub fn year(&self) -> &str {
        let date = self.release_date_str();
        match date.char_indices().nth(4) {
            Some((idx, _)) => &date[..idx],
            None => date,
        }
    }

    /// Whether the record carries a non-empty poster path.
    pub fn has_poster(&self) -> bool {
        self.poster_path.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Plot summary, empty when missing.
    pub fn overview_str(&self) -> &str {
        self.overview.as_deref().unwrap_or("")
    }
}

/// One page of list results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MoviePage {
    /// 1-based page number
    #[serde(default)]
    pub page: u32,
    /// Movies on this page
    #[serde(default)]
    pub results: Vec<Movie>,
    /// Number of pages the query spans
    #[serde(default)]
    pub total_pages: u32,
    /// Number of results the query spans
    #[serde(default)]
    pub total_results: u64,
}

impl MoviePage {
    /// Create a single page holding the given results.
    pub fn new(results: Vec<Movie>, total_pages: u32) -> Self {
        let total_results = results.len() as u64;
        Self {
            page: 1,
            results,
            total_pages,
            total_results,
        }
    }

    /// Whether the page has no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
