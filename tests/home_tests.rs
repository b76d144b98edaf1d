//! Integration tests for the home screen.
//!
//! Tests cover:
//! - Sequential aggregation, full success and fail-fast at every position
//! - Section exposure for non-empty lists only
//! - Parallel aggregation with per-category failure
//! - Unmounting mid-cycle

mod common;

use common::{any_warning, items_for, record_log_levels, Call, FakeCatalog};
use naflix::core::home::{FetchStrategy, HomeContent, HomeScreen};
use naflix::core::ViewState;
use naflix::models::catalog::{Category, ResourceKind};
use std::sync::Arc;

fn ready(state: ViewState<HomeContent>) -> HomeContent {
    match state {
        ViewState::Ready(content) => content,
        ViewState::Loading => panic!("Expected ready home state"),
    }
}

// ========== SEQUENTIAL TESTS ==========

#[tokio::test]
async fn test_all_categories_populated_in_order() {
    let api = Arc::new(FakeCatalog::full());
    let screen = HomeScreen::mount(api.clone(), FetchStrategy::Sequential);

    let content = ready(screen.settled().await);

    assert_eq!(content.lists.len(), 8);
    for (list, category) in content.lists.iter().zip(Category::ALL) {
        assert_eq!(list.category, category);
        assert_eq!(list.items, items_for(category, 2));
    }
    assert_eq!(content.sections().len(), 8);

    let expected: Vec<_> = Category::ALL.iter().map(|c| Call::List(*c)).collect();
    assert_eq!(api.calls(), expected);
}

#[tokio::test]
async fn test_failure_stops_cycle_at_each_position() {
    for (k, failing) in Category::ALL.iter().enumerate() {
        let api = Arc::new(FakeCatalog::full().failing(*failing));
        let screen = HomeScreen::mount(api.clone(), FetchStrategy::Sequential);

        let content = ready(screen.settled().await);

        for (i, list) in content.lists.iter().enumerate() {
            if i < k {
                assert_eq!(list.len(), 2, "category {} should be populated", i + 1);
            } else {
                assert!(list.is_empty(), "category {} should be empty", i + 1);
            }
        }
        // Nothing after the failing fetch is requested.
        assert_eq!(api.calls().len(), k + 1);
    }
}

#[tokio::test]
async fn test_sections_only_for_non_empty_lists() {
    let api = Arc::new(FakeCatalog::full().failing(Category::MovieUpcoming));
    let screen = HomeScreen::mount(api, FetchStrategy::Sequential);

    let content = ready(screen.settled().await);
    let sections = content.sections();

    let titles: Vec<_> = sections.iter().map(|s| s.title).collect();
    assert_eq!(titles, vec!["Movie: Top Rated", "Movie: Now Playing"]);
    assert!(sections.iter().all(|s| s.kind == ResourceKind::Movie));
    assert_eq!(sections[1].items[0].link(), "/movies/101");
}

#[tokio::test]
async fn test_empty_api_results_yield_no_sections() {
    let api = Arc::new(FakeCatalog::default());
    let screen = HomeScreen::mount(api.clone(), FetchStrategy::Sequential);

    let content = ready(screen.settled().await);

    assert_eq!(content.lists.len(), 8);
    assert!(content.sections().is_empty());
    assert_eq!(api.calls().len(), 8);
}

#[tokio::test]
async fn test_failures_stay_below_default_log_level() {
    let (levels, _guard) = record_log_levels();

    let api = Arc::new(FakeCatalog::full().failing(Category::MovieUpcoming));
    let screen = HomeScreen::mount(api.clone(), FetchStrategy::Sequential);
    ready(screen.settled().await);

    let api = Arc::new(FakeCatalog::full().failing(Category::ShowOnTheAir));
    let screen = HomeScreen::mount(api, FetchStrategy::Parallel);
    ready(screen.settled().await);

    assert!(!levels.lock().unwrap().is_empty());
    assert!(!any_warning(&levels));
}

// ========== PARALLEL TESTS ==========

#[tokio::test]
async fn test_parallel_failure_only_empties_its_category() {
    let api = Arc::new(FakeCatalog::full().failing(Category::MovieUpcoming));
    let screen = HomeScreen::mount(api.clone(), FetchStrategy::Parallel);

    let content = ready(screen.settled().await);

    assert_eq!(content.populated_count(), 7);
    assert!(content.list(Category::MovieUpcoming).unwrap().is_empty());
    assert_eq!(
        content.list(Category::ShowPopular).unwrap().items,
        items_for(Category::ShowPopular, 2)
    );
    assert_eq!(api.calls().len(), 8);
}

#[tokio::test]
async fn test_parallel_keeps_priority_order() {
    let api = Arc::new(FakeCatalog::full());
    let screen = HomeScreen::mount(api, FetchStrategy::Parallel);

    let content = ready(screen.settled().await);

    let order: Vec<_> = content.lists.iter().map(|l| l.category).collect();
    assert_eq!(order, Category::ALL.to_vec());
}

// ========== LIFECYCLE TESTS ==========

#[tokio::test]
async fn test_starts_loading() {
    let api = Arc::new(FakeCatalog::full());
    let screen = HomeScreen::mount(api, FetchStrategy::Sequential);

    // The spawned cycle has not run yet on this single-threaded runtime.
    assert!(screen.state().is_loading());
    assert!(screen.state().content().is_none());
}

#[tokio::test]
async fn test_unmount_mid_cycle_leaves_state_untouched() {
    let api = Arc::new(FakeCatalog::full().gate(Call::List(Category::MovieNowPlaying)));
    let mut screen = HomeScreen::mount(api.clone(), FetchStrategy::Sequential);
    let rx = screen.subscribe();

    api.entered.notified().await;
    screen.unmount();
    api.release.notify_one();
    screen.finished().await;

    assert!(screen.state().is_loading());
    assert!(!rx.has_changed().unwrap());
    assert_eq!(
        api.calls(),
        vec![
            Call::List(Category::MovieTopRated),
            Call::List(Category::MovieNowPlaying)
        ]
    );
}

#[tokio::test]
async fn test_unmount_mid_parallel_cycle_leaves_state_untouched() {
    let api = Arc::new(FakeCatalog::full().gate(Call::List(Category::ShowOnTheAir)));
    let mut screen = HomeScreen::mount(api.clone(), FetchStrategy::Parallel);

    api.entered.notified().await;
    screen.unmount();
    screen.finished().await;

    assert!(screen.state().is_loading());
    assert!(screen.settled().await.is_loading());
}
