//! Single-title detail models and their display rules.

use super::catalog::ResourceKind;
use serde::{Deserialize, Serialize};

/// Fields whose shape depends on the resource kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DetailKind {
    Movie {
        original_title: String,
        release_date: Option<String>,
        /// Runtime in minutes.
        runtime: Option<u32>,
    },
    Show {
        original_name: String,
        first_air_date: Option<String>,
        /// Per-episode runtimes in minutes; only the first is displayed.
        episode_run_time: Vec<u32>,
    },
}

/// Genre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Spoken language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub iso_639_1: String,
    pub name: String,
}

/// Production company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub id: u64,
    pub name: String,
    pub logo_path: Option<String>,
    pub origin_country: Option<String>,
}

/// Production country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionCountry {
    pub iso_3166_1: String,
    pub name: String,
}

/// A trailer or other video attached to a title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trailer {
    pub key: String,
    pub name: String,
    /// Hosting site, e.g. "YouTube".
    pub site: String,
    /// Video type, e.g. "Trailer", "Teaser".
    pub video_type: Option<String>,
}

impl Trailer {
    /// Watch URL on the hosting site, when the site is known.
    pub fn url(&self) -> Option<String> {
        match self.site.as_str() {
            "YouTube" => Some(format!("https://www.youtube.com/watch?v={}", self.key)),
            "Vimeo" => Some(format!("https://vimeo.com/{}", self.key)),
            _ => None,
        }
    }
}

/// Displayed runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runtime {
    Minutes(u32),
    Unknown,
}

impl std::fmt::Display for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Runtime::Minutes(m) => write!(f, "{} min", m),
            Runtime::Unknown => write!(f, "unknown"),
        }
    }
}

/// Full metadata for one movie or show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    /// TMDB ID.
    pub id: u64,
    #[serde(flatten)]
    pub details: DetailKind,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    /// User rating (0-10).
    pub vote_average: Option<f32>,
    pub vote_count: Option<u32>,
    pub genres: Vec<Genre>,
    pub spoken_languages: Vec<SpokenLanguage>,
    pub production_companies: Vec<ProductionCompany>,
    pub production_countries: Vec<ProductionCountry>,
    pub homepage: Option<String>,
    pub imdb_id: Option<String>,
    pub trailers: Vec<Trailer>,
}

impl DetailRecord {
    pub fn kind(&self) -> ResourceKind {
        match self.details {
            DetailKind::Movie { .. } => ResourceKind::Movie,
            DetailKind::Show { .. } => ResourceKind::Show,
        }
    }

    /// Original title for movies, original name for shows.
    pub fn display_title(&self) -> &str {
        match &self.details {
            DetailKind::Movie { original_title, .. } => original_title,
            DetailKind::Show { original_name, .. } => original_name,
        }
    }

    /// Release date for movies, first air date for shows.
    pub fn display_date(&self) -> Option<&str> {
        match &self.details {
            DetailKind::Movie { release_date, .. } => release_date.as_deref(),
            DetailKind::Show { first_air_date, .. } => first_air_date.as_deref(),
        }
    }

    /// Movie runtime, or the first episode runtime of a show.
    ///
    /// A zero or missing movie runtime and an empty episode list both
    /// yield [`Runtime::Unknown`].
    pub fn display_runtime(&self) -> Runtime {
        let minutes = match &self.details {
            DetailKind::Movie { runtime, .. } => runtime.filter(|m| *m > 0),
            DetailKind::Show { episode_run_time, .. } => episode_run_time.first().copied(),
        };
        minutes.map(Runtime::Minutes).unwrap_or(Runtime::Unknown)
    }

    /// Genre names as "A / B / C".
    pub fn genre_text(&self) -> String {
        slash_join(self.genres.iter().map(|g| g.name.as_str()))
    }

    /// Spoken language names as "A / B / C".
    pub fn language_text(&self) -> String {
        slash_join(self.spoken_languages.iter().map(|l| l.name.as_str()))
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref().filter(|h| !h.is_empty())
    }

    pub fn imdb_url(&self) -> Option<String> {
        self.imdb_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("https://www.imdb.com/title/{}", id))
    }

    /// Nested trailers. Always present, possibly empty.
    pub fn trailers(&self) -> &[Trailer] {
        &self.trailers
    }
}

/// Join names with " / ", no trailing separator.
pub fn slash_join<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names.into_iter().collect::<Vec<_>>().join(" / ")
}
