//! Home command implementation.

use crate::cli::args::OutputFormat;
use crate::core::home::{FetchStrategy, HomeContent, HomeScreen};
use crate::core::ViewState;
use crate::models::catalog::CatalogItem;
use crate::services::CatalogApi;
use crate::Result;
use colored::Colorize;
use serde::Serialize;
use std::sync::Arc;

/// Mount the home screen, wait for it and print it.
pub async fn show_home(
    api: Arc<dyn CatalogApi>,
    strategy: FetchStrategy,
    format: OutputFormat,
) -> Result<()> {
    let pb = super::loading_spinner("Home");
    let screen = HomeScreen::mount(api, strategy);
    let state = screen.settled().await;
    pb.finish_and_clear();

    let content = match state {
        ViewState::Ready(content) => content,
        ViewState::Loading => return Ok(()),
    };

    match format {
        OutputFormat::Json => print_json(&content)?,
        OutputFormat::Table => print_table(&content),
    }

    Ok(())
}

/// Print sections as JSON.
fn print_json(content: &HomeContent) -> Result<()> {
    #[derive(Serialize)]
    struct SectionJson<'a> {
        title: &'a str,
        kind: crate::models::catalog::ResourceKind,
        items: &'a [CatalogItem],
    }

    let sections: Vec<_> = content
        .sections()
        .into_iter()
        .map(|s| SectionJson {
            title: s.title,
            kind: s.kind,
            items: s.items,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&sections)?);
    Ok(())
}

/// Print one table per non-empty section.
fn print_table(content: &HomeContent) {
    println!("{}", "Home | Naflix".bold().cyan());
    println!();

    let sections = content.sections();
    if sections.is_empty() {
        println!("{}", "Nothing to show.".yellow());
        return;
    }

    for section in sections {
        println!("{}", format!("{} ({}):", section.title, section.items.len()).bold());
        println!(
            " {:>4} | {:>4} | {:<40} | {:>6} | {}",
            "#", "Year", "Title", "Rating", "Link"
        );
        println!("{}", "-".repeat(80));

        for (i, item) in section.items.iter().enumerate() {
            println!(
                " {:>4} | {:>4} | {:<40} | {:>6} | {}",
                i + 1,
                item.year().map(|y| y.to_string()).unwrap_or_default(),
                truncate(&item.title, 40),
                item.vote_average
                    .map(|v| format!("{:.1}", v))
                    .unwrap_or_default(),
                item.link().as_str().dimmed()
            );
        }
        println!();
    }
}

/// Shorten to `width` characters, ending in "..." when cut.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        format!("{}...", text.chars().take(width - 3).collect::<String>())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Dune", 10), "Dune");
        assert_eq!(truncate("The Lord of the Rings", 10), "The Lor...");
    }
}
