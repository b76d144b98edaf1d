//! Scripted in-memory catalog shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use naflix::models::catalog::{CatalogItem, Category, ResourceKind};
use naflix::models::detail::{DetailKind, DetailRecord, Genre};
use naflix::services::CatalogApi;
use naflix::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

/// One recorded API call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(Category),
    Detail(ResourceKind, String),
}

/// A catalog whose responses are set up by the test.
///
/// A gated call signals `entered` and then blocks until `release` is
/// notified, which lets a test unmount or navigate mid-fetch.
#[derive(Default)]
pub struct FakeCatalog {
    lists: HashMap<Category, Vec<CatalogItem>>,
    failing: HashSet<Category>,
    details: HashMap<(ResourceKind, String), DetailRecord>,
    gated: Option<Call>,
    pub entered: Notify,
    pub release: Notify,
    calls: Mutex<Vec<Call>>,
}

impl FakeCatalog {
    /// Every category returns two items.
    pub fn full() -> Self {
        let mut fake = Self::default();
        for category in Category::ALL {
            fake.lists.insert(category, items_for(category, 2));
        }
        fake
    }

    pub fn failing(mut self, category: Category) -> Self {
        self.failing.insert(category);
        self
    }

    pub fn with_detail(mut self, record: DetailRecord) -> Self {
        let id = record.id.to_string();
        self.details.insert((record.kind(), id), record);
        self
    }

    pub fn gate(mut self, call: Call) -> Self {
        self.gated = Some(call);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn enter(&self, call: Call) {
        self.calls.lock().unwrap().push(call.clone());
        if self.gated.as_ref() == Some(&call) {
            self.entered.notify_one();
            self.release.notified().await;
        }
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn list(&self, category: Category) -> Result<Vec<CatalogItem>> {
        self.enter(Call::List(category)).await;
        if self.failing.contains(&category) {
            return Err(Error::other(format!("fetch error: {}", category)));
        }
        Ok(self.lists.get(&category).cloned().unwrap_or_default())
    }

    async fn detail(&self, kind: ResourceKind, id: &str) -> Result<DetailRecord> {
        self.enter(Call::Detail(kind, id.to_string())).await;
        self.details
            .get(&(kind, id.to_string()))
            .cloned()
            .ok_or_else(|| Error::other(format!("fetch error: {}/{}", kind, id)))
    }
}

/// `count` distinct items for a category, ids unique across categories.
pub fn items_for(category: Category, count: u64) -> Vec<CatalogItem> {
    let base = Category::ALL.iter().position(|c| *c == category).unwrap() as u64 * 100;
    (1..=count)
        .map(|n| CatalogItem {
            id: base + n,
            kind: category.kind(),
            title: format!("{} #{}", category.title(), n),
            original_title: None,
            poster_path: Some(format!("/{}.jpg", base + n)),
            backdrop_path: None,
            vote_average: Some(7.5),
            vote_count: Some(100),
            date: Some("2024-01-01".to_string()),
        })
        .collect()
}

pub fn movie_record(id: u64, original_title: &str) -> DetailRecord {
    DetailRecord {
        id,
        details: DetailKind::Movie {
            original_title: original_title.to_string(),
            release_date: Some("2010-07-15".to_string()),
            runtime: Some(148),
        },
        overview: Some("A thief who steals secrets.".to_string()),
        poster_path: None,
        backdrop_path: None,
        vote_average: Some(8.4),
        vote_count: Some(35000),
        genres: vec![
            Genre { id: 28, name: "Action".to_string() },
            Genre { id: 18, name: "Drama".to_string() },
        ],
        spoken_languages: vec![],
        production_companies: vec![],
        production_countries: vec![],
        homepage: None,
        imdb_id: None,
        trailers: vec![],
    }
}

pub fn show_record(id: u64, original_name: &str, episode_run_time: Vec<u32>) -> DetailRecord {
    DetailRecord {
        details: DetailKind::Show {
            original_name: original_name.to_string(),
            first_air_date: Some("2017-12-01".to_string()),
            episode_run_time,
        },
        ..movie_record(id, "")
    }
}

/// Records the level of every event emitted by this crate.
struct LevelRecorder(Arc<Mutex<Vec<Level>>>);

impl<S: Subscriber> Layer<S> for LevelRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target().starts_with("naflix") {
            self.0.lock().unwrap().push(*event.metadata().level());
        }
    }
}

/// Capture crate log levels on this thread until the guard is dropped.
pub fn record_log_levels() -> (Arc<Mutex<Vec<Level>>>, tracing::subscriber::DefaultGuard) {
    let levels = Arc::new(Mutex::new(Vec::new()));
    let guard = tracing_subscriber::registry()
        .with(LevelRecorder(Arc::clone(&levels)))
        .set_default();
    (levels, guard)
}

/// Whether any recorded event would pass the default `naflix=warn` filter.
pub fn any_warning(levels: &Mutex<Vec<Level>>) -> bool {
    levels
        .lock()
        .unwrap()
        .iter()
        .any(|l| *l == Level::WARN || *l == Level::ERROR)
}
