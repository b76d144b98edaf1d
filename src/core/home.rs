//! Home screen: aggregates the eight category lists into one view.
//!
//! One aggregation cycle runs per mount. With
//! [`FetchStrategy::Sequential`] the categories are fetched one at a time
//! in priority order and the first failure ends the cycle, leaving that
//! category and every later one empty. With [`FetchStrategy::Parallel`]
//! all eight are issued together and each failure only empties its own
//! category. Either way the screen ends up ready; failures are logged at
//! debug level, never surfaced.

use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use tokio::task::JoinHandle;

use super::screen::{Cycle, Screen};
use super::view_state::ViewState;
use crate::models::catalog::{CatalogItem, Category, CategoryList, ResourceKind};
pub use crate::models::config::FetchStrategy;
use crate::services::catalog::CatalogApi;

/// Aggregated home content: always one list per category, in priority order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeContent {
    pub lists: Vec<CategoryList>,
}

/// A renderable home section. Only non-empty lists become sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section<'a> {
    pub title: &'static str,
    pub kind: ResourceKind,
    pub items: &'a [CatalogItem],
}

impl HomeContent {
    /// Every category present, none populated.
    pub fn empty() -> Self {
        Self {
            lists: Category::ALL.iter().map(|c| CategoryList::empty(*c)).collect(),
        }
    }

    pub fn list(&self, category: Category) -> Option<&CategoryList> {
        self.lists.iter().find(|l| l.category == category)
    }

    fn set(&mut self, category: Category, items: Vec<CatalogItem>) {
        if let Some(list) = self.lists.iter_mut().find(|l| l.category == category) {
            *list = CategoryList::new(category, items);
        }
    }

    /// Sections to render, in priority order, skipping empty lists.
    pub fn sections(&self) -> Vec<Section<'_>> {
        self.lists
            .iter()
            .filter(|l| !l.is_empty())
            .map(|l| Section {
                title: l.category.title(),
                kind: l.kind(),
                items: &l.items,
            })
            .collect()
    }

    pub fn populated_count(&self) -> usize {
        self.lists.iter().filter(|l| !l.is_empty()).count()
    }
}

impl Default for HomeContent {
    fn default() -> Self {
        Self::empty()
    }
}

/// Runs aggregation cycles against a catalog API.
pub struct HomeAggregator {
    api: Arc<dyn CatalogApi>,
    strategy: FetchStrategy,
}

impl HomeAggregator {
    pub fn new(api: Arc<dyn CatalogApi>, strategy: FetchStrategy) -> Self {
        Self { api, strategy }
    }

    /// Run one aggregation cycle and resolve it.
    ///
    /// Returns `false` if the cycle was cancelled before it could resolve.
    pub async fn run(&self, cycle: Cycle<HomeContent>) -> bool {
        tracing::info!("Loading home ({:?})", self.strategy);

        let content = match self.strategy {
            FetchStrategy::Sequential => self.fetch_sequential(&cycle).await,
            FetchStrategy::Parallel => self.fetch_parallel(&cycle).await,
        };

        match content {
            Some(content) => {
                tracing::debug!(
                    "Home ready: {}/{} categories populated",
                    content.populated_count(),
                    Category::ALL.len()
                );
                cycle.resolve(content)
            }
            None => {
                tracing::debug!("Home cycle cancelled");
                false
            }
        }
    }

    async fn fetch_sequential(&self, cycle: &Cycle<HomeContent>) -> Option<HomeContent> {
        let mut content = HomeContent::empty();

        for category in Category::ALL {
            match cycle.run(self.api.list(category)).await? {
                Ok(items) => {
                    tracing::debug!("{}: {} items", category, items.len());
                    content.set(category, items);
                }
                Err(e) => {
                    tracing::debug!("Failed to load {}: {}", category, e);
                    break;
                }
            }
        }

        Some(content)
    }

    async fn fetch_parallel(&self, cycle: &Cycle<HomeContent>) -> Option<HomeContent> {
        let fetches = Category::ALL.map(|category| async move {
            (category, self.api.list(category).await)
        });
        let results = cycle.run(join_all(fetches)).await?;

        let mut content = HomeContent::empty();
        for (category, result) in results {
            match result {
                Ok(items) => {
                    tracing::debug!("{}: {} items", category, items.len());
                    content.set(category, items);
                }
                Err(e) => tracing::debug!("Failed to load {}: {}", category, e),
            }
        }

        Some(content)
    }
}

/// A mounted home screen.
pub struct HomeScreen {
    screen: Screen<HomeContent>,
    task: Option<JoinHandle<()>>,
}

impl HomeScreen {
    /// Mount the screen, starting its single aggregation cycle.
    ///
    /// Must be called within a tokio runtime.
    pub fn mount(api: Arc<dyn CatalogApi>, strategy: FetchStrategy) -> Self {
        let mut screen = Screen::new();
        let cycle = screen.begin_cycle();
        let aggregator = HomeAggregator::new(api, strategy);

        let task = tokio::spawn(async move {
            aggregator.run(cycle).await;
        });

        Self {
            screen,
            task: Some(task),
        }
    }

    pub fn state(&self) -> ViewState<HomeContent> {
        self.screen.state()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<ViewState<HomeContent>> {
        self.screen.subscribe()
    }

    /// Wait for the cycle to resolve (or the screen to unmount).
    pub async fn settled(&self) -> ViewState<HomeContent> {
        self.screen.settled().await
    }

    /// Wait for the aggregation task to exit, resolved or cancelled.
    pub async fn finished(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!("Home task failed: {}", e);
            }
        }
    }

    pub fn unmount(&self) {
        self.screen.unmount();
    }
}
