//! Detail screen: loads one title for the current route.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;

use super::screen::{Cycle, Screen};
use super::view_state::ViewState;
use crate::models::detail::DetailRecord;
use crate::models::route::Route;
use crate::services::catalog::CatalogApi;

/// What the detail screen shows once loaded.
///
/// `record` is `None` when no fetch for this screen has succeeded yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub route: Route,
    pub record: Option<DetailRecord>,
}

/// Fetches the record for a route.
pub struct DetailLoader {
    api: Arc<dyn CatalogApi>,
}

impl DetailLoader {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    /// Fetch `route` and resolve the cycle.
    ///
    /// On failure the record from before the cycle (if any) is kept.
    /// Returns `false` if the cycle was cancelled before it could resolve.
    pub async fn load(&self, route: Route, mut cycle: Cycle<DetailView>) -> bool {
        tracing::info!("Loading {}", route);

        let Some(result) = cycle.run(self.api.detail(route.kind, &route.id)).await else {
            tracing::debug!("Load of {} cancelled", route);
            return false;
        };

        let record = match result {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!("Failed to load {}: {}", route, e);
                cycle.take_previous().and_then(|view| view.record)
            }
        };

        cycle.resolve(DetailView { route, record })
    }
}

/// A mounted detail screen.
pub struct DetailScreen {
    screen: Screen<DetailView>,
    loader: Arc<DetailLoader>,
    route: Route,
    task: Option<JoinHandle<()>>,
}

impl DetailScreen {
    /// Mount the screen and start loading `route`.
    ///
    /// Must be called within a tokio runtime.
    pub fn mount(api: Arc<dyn CatalogApi>, route: Route) -> Self {
        let mut screen = Self {
            screen: Screen::new(),
            loader: Arc::new(DetailLoader::new(api)),
            route: route.clone(),
            task: None,
        };
        screen.start(route);
        screen
    }

    /// Switch to another route. A no-op if the route is unchanged;
    /// otherwise any in-flight load is superseded.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        self.route = route.clone();
        self.start(route);
    }

    fn start(&mut self, route: Route) {
        let cycle = self.screen.begin_cycle();
        let loader = Arc::clone(&self.loader);
        // The old task sees its token cancelled and exits on its own.
        self.task = Some(tokio::spawn(async move {
            loader.load(route, cycle).await;
        }));
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn state(&self) -> ViewState<DetailView> {
        self.screen.state()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<ViewState<DetailView>> {
        self.screen.subscribe()
    }

    /// Wait for the current load to resolve (or the screen to unmount).
    pub async fn settled(&self) -> ViewState<DetailView> {
        self.screen.settled().await
    }

    /// Wait for the current load task to exit, resolved or cancelled.
    pub async fn finished(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!("Detail task failed: {}", e);
            }
        }
    }

    pub fn unmount(&self) {
        self.screen.unmount();
    }
}
