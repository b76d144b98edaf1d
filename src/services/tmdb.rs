//! TMDB API client.

use crate::models::catalog::{CatalogItem, Category, ResourceKind};
use crate::models::config::TmdbConfig;
use crate::models::detail::{
    DetailKind, DetailRecord, Genre, ProductionCompany, ProductionCountry, SpokenLanguage,
    Trailer,
};
use crate::services::catalog::CatalogApi;
use crate::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// TMDB API client.
///
/// Built from an explicit [`TmdbConfig`]; holds no global state.
pub struct TmdbClient {
    config: TmdbConfig,
    api_key: String,
    client: reqwest::Client,
}

/// Paged list response. Only the first page is used.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    pub results: Vec<T>,
}

/// Movie list item.
#[derive(Debug, Deserialize)]
pub struct MovieListItem {
    pub id: u64,
    pub title: String,
    pub original_title: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: Option<f32>,
    pub vote_count: Option<u32>,
}

/// TV show list item.
#[derive(Debug, Deserialize)]
pub struct TvListItem {
    pub id: u64,
    pub name: String,
    pub original_name: Option<String>,
    pub first_air_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: Option<f32>,
    pub vote_count: Option<u32>,
}

/// Movie details with appended videos.
#[derive(Debug, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    pub imdb_id: Option<String>,
    pub original_title: String,
    pub release_date: Option<String>,
    pub overview: Option<String>,
    pub runtime: Option<u32>,
    pub vote_average: Option<f32>,
    pub vote_count: Option<u32>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub homepage: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,
    #[serde(default)]
    pub videos: VideoList,
}

/// TV show details with appended videos and external ids.
#[derive(Debug, Deserialize)]
pub struct TvDetails {
    pub id: u64,
    pub original_name: String,
    pub first_air_date: Option<String>,
    pub overview: Option<String>,
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    pub vote_average: Option<f32>,
    pub vote_count: Option<u32>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub homepage: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,
    pub external_ids: Option<ExternalIds>,
    #[serde(default)]
    pub videos: VideoList,
}

/// External IDs for a TV show.
#[derive(Debug, Deserialize)]
pub struct ExternalIds {
    pub imdb_id: Option<String>,
}

/// `videos` sub-resource. Absent in the response means empty.
#[derive(Debug, Default, Deserialize)]
pub struct VideoList {
    #[serde(default)]
    pub results: Vec<Video>,
}

/// One video entry.
#[derive(Debug, Deserialize)]
pub struct Video {
    pub key: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: Option<String>,
}

/// TMDB sends "" for unknown dates and paths.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl VideoList {
    fn into_trailers(self) -> Vec<Trailer> {
        self.results
            .into_iter()
            .filter_map(|v| {
                let key = non_empty(v.key)?;
                Some(Trailer {
                    key,
                    name: v.name,
                    site: v.site,
                    video_type: v.video_type,
                })
            })
            .collect()
    }
}

impl From<MovieListItem> for CatalogItem {
    fn from(item: MovieListItem) -> Self {
        Self {
            id: item.id,
            kind: ResourceKind::Movie,
            title: item.title,
            original_title: non_empty(item.original_title),
            poster_path: non_empty(item.poster_path),
            backdrop_path: non_empty(item.backdrop_path),
            vote_average: item.vote_average,
            vote_count: item.vote_count,
            date: non_empty(item.release_date),
        }
    }
}

impl From<TvListItem> for CatalogItem {
    fn from(item: TvListItem) -> Self {
        Self {
            id: item.id,
            kind: ResourceKind::Show,
            title: item.name,
            original_title: non_empty(item.original_name),
            poster_path: non_empty(item.poster_path),
            backdrop_path: non_empty(item.backdrop_path),
            vote_average: item.vote_average,
            vote_count: item.vote_count,
            date: non_empty(item.first_air_date),
        }
    }
}

impl From<MovieDetails> for DetailRecord {
    fn from(movie: MovieDetails) -> Self {
        Self {
            id: movie.id,
            details: DetailKind::Movie {
                original_title: movie.original_title,
                release_date: non_empty(movie.release_date),
                runtime: movie.runtime,
            },
            overview: non_empty(movie.overview),
            poster_path: non_empty(movie.poster_path),
            backdrop_path: non_empty(movie.backdrop_path),
            vote_average: movie.vote_average,
            vote_count: movie.vote_count,
            genres: movie.genres,
            spoken_languages: movie.spoken_languages,
            production_companies: movie.production_companies,
            production_countries: movie.production_countries,
            homepage: non_empty(movie.homepage),
            imdb_id: non_empty(movie.imdb_id),
            trailers: movie.videos.into_trailers(),
        }
    }
}

impl From<TvDetails> for DetailRecord {
    fn from(tv: TvDetails) -> Self {
        Self {
            id: tv.id,
            details: DetailKind::Show {
                original_name: tv.original_name,
                first_air_date: non_empty(tv.first_air_date),
                episode_run_time: tv.episode_run_time,
            },
            overview: non_empty(tv.overview),
            poster_path: non_empty(tv.poster_path),
            backdrop_path: non_empty(tv.backdrop_path),
            vote_average: tv.vote_average,
            vote_count: tv.vote_count,
            genres: tv.genres,
            spoken_languages: tv.spoken_languages,
            production_companies: tv.production_companies,
            production_countries: tv.production_countries,
            homepage: non_empty(tv.homepage),
            imdb_id: tv.external_ids.and_then(|ids| non_empty(ids.imdb_id)),
            trailers: tv.videos.into_trailers(),
        }
    }
}

impl TmdbClient {
    /// Create a new TMDB client. Fails if no API key is configured.
    pub fn new(config: TmdbConfig) -> Result<Self> {
        let api_key = config.api_key()?.to_string();
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| crate::Error::ClientSetup(e.to_string()))?;

        Ok(Self {
            config,
            api_key,
            client,
        })
    }

    pub fn config(&self) -> &TmdbConfig {
        &self.config
    }

    /// Build a request with proper authentication.
    fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(url);
        if self.config.use_bearer() {
            request.bearer_auth(&self.api_key)
        } else {
            request
        }
    }

    /// Build URL with optional api_key parameter (only for v3 style).
    fn build_url(&self, path: &str, extra_params: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        if self.config.use_bearer() {
            format!(
                "{}/{}?language={}{}",
                base, path, self.config.language, extra_params
            )
        } else {
            format!(
                "{}/{}?api_key={}&language={}{}",
                base,
                path,
                urlencoding::encode(&self.api_key),
                self.config.language,
                extra_params
            )
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, extra_params: &str) -> Result<T> {
        tracing::debug!("GET {}", path);
        let url = self.build_url(path, extra_params);
        let resp = self
            .build_request(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(resp)
    }

    /// Verify API key is valid.
    ///
    /// `Ok(false)` means the server rejected the key; `Err` means it could
    /// not be reached.
    pub async fn verify_api_key(&self) -> Result<bool> {
        let url = self.build_url("authentication", "");
        let resp = self.build_request(&url).send().await?;
        Ok(resp.status().is_success())
    }

    async fn fetch_list(&self, category: Category) -> Result<Vec<CatalogItem>> {
        let items = match category.kind() {
            ResourceKind::Movie => {
                let resp: ListResponse<MovieListItem> =
                    self.get_json(category.api_path(), "&page=1").await?;
                resp.results.into_iter().map(CatalogItem::from).collect()
            }
            ResourceKind::Show => {
                let resp: ListResponse<TvListItem> =
                    self.get_json(category.api_path(), "&page=1").await?;
                resp.results.into_iter().map(CatalogItem::from).collect()
            }
        };
        Ok(items)
    }

    pub async fn movie_top_rated(&self) -> Result<Vec<CatalogItem>> {
        self.fetch_list(Category::MovieTopRated).await
    }

    pub async fn movie_now_playing(&self) -> Result<Vec<CatalogItem>> {
        self.fetch_list(Category::MovieNowPlaying).await
    }

    pub async fn movie_upcoming(&self) -> Result<Vec<CatalogItem>> {
        self.fetch_list(Category::MovieUpcoming).await
    }

    pub async fn movie_popular(&self) -> Result<Vec<CatalogItem>> {
        self.fetch_list(Category::MoviePopular).await
    }

    pub async fn show_top_rated(&self) -> Result<Vec<CatalogItem>> {
        self.fetch_list(Category::ShowTopRated).await
    }

    pub async fn show_airing_today(&self) -> Result<Vec<CatalogItem>> {
        self.fetch_list(Category::ShowAiringToday).await
    }

    pub async fn show_on_the_air(&self) -> Result<Vec<CatalogItem>> {
        self.fetch_list(Category::ShowOnTheAir).await
    }

    pub async fn show_popular(&self) -> Result<Vec<CatalogItem>> {
        self.fetch_list(Category::ShowPopular).await
    }

    /// Get movie details with videos.
    pub async fn movie_detail(&self, id: &str) -> Result<DetailRecord> {
        let path = format!("movie/{}", urlencoding::encode(id));
        let resp: MovieDetails = self
            .get_json(&path, "&append_to_response=videos")
            .await?;
        Ok(resp.into())
    }

    /// Get TV show details with videos and external ids.
    pub async fn show_detail(&self, id: &str) -> Result<DetailRecord> {
        let path = format!("tv/{}", urlencoding::encode(id));
        let resp: TvDetails = self
            .get_json(&path, "&append_to_response=videos,external_ids")
            .await?;
        Ok(resp.into())
    }

    /// Get image URL at the given size.
    pub fn image_url(&self, size: &str, path: &str) -> String {
        self.config.image_url(size, path)
    }
}

#[async_trait]
impl CatalogApi for TmdbClient {
    async fn list(&self, category: Category) -> Result<Vec<CatalogItem>> {
        match category {
            Category::MovieTopRated => self.movie_top_rated().await,
            Category::MovieNowPlaying => self.movie_now_playing().await,
            Category::MovieUpcoming => self.movie_upcoming().await,
            Category::MoviePopular => self.movie_popular().await,
            Category::ShowTopRated => self.show_top_rated().await,
            Category::ShowAiringToday => self.show_airing_today().await,
            Category::ShowOnTheAir => self.show_on_the_air().await,
            Category::ShowPopular => self.show_popular().await,
        }
    }

    async fn detail(&self, kind: ResourceKind, id: &str) -> Result<DetailRecord> {
        match kind {
            ResourceKind::Movie => self.movie_detail(id).await,
            ResourceKind::Show => self.show_detail(id).await,
        }
    }
}
