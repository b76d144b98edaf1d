//! CLI command implementations.
//!
//! Commands mount a screen, show a spinner while it loads and render its
//! content once ready. They only read view-state.

pub mod detail;
pub mod home;

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Neutral loading indicator shown while a screen is loading.
pub(crate) fn loading_spinner(page: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("📡 Loading | {}", page));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
