//! Detail command implementation.

use crate::cli::args::OutputFormat;
use crate::core::detail::{DetailScreen, DetailView};
use crate::core::ViewState;
use crate::models::config::TmdbConfig;
use crate::models::detail::DetailRecord;
use crate::models::route::Route;
use crate::services::CatalogApi;
use crate::Result;
use colored::Colorize;
use std::sync::Arc;

/// Mount the detail screen for `route`, wait for it and print it.
pub async fn show_detail(
    api: Arc<dyn CatalogApi>,
    tmdb: &TmdbConfig,
    route: &str,
    format: OutputFormat,
) -> Result<()> {
    let route = Route::parse(route)?;

    let pb = super::loading_spinner(&route.path());
    let screen = DetailScreen::mount(api, route);
    let state = screen.settled().await;
    pb.finish_and_clear();

    let view = match state {
        ViewState::Ready(view) => view,
        ViewState::Loading => return Ok(()),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Table => print_view(&view, tmdb),
    }

    Ok(())
}

fn print_view(view: &DetailView, tmdb: &TmdbConfig) {
    match &view.record {
        Some(record) => print_record(record, tmdb),
        // Fetch failed before anything loaded: blank page, no error banner.
        None => println!("{}", format!("{} | Naflix", view.route).dimmed()),
    }
}

fn print_record(record: &DetailRecord, tmdb: &TmdbConfig) {
    let mut title = format!("{} | Naflix", record.display_title()).bold().cyan().to_string();
    if let Some(homepage) = record.homepage() {
        title.push_str(&format!("  Homepage↗️ {}", homepage.underline()));
    }
    if let Some(imdb) = record.imdb_url() {
        title.push_str(&format!("  IMDB↗️ {}", imdb.as_str().underline()));
    }
    println!("{}", title);
    println!();

    let mut facts = vec![
        record.display_date().unwrap_or("unknown date").to_string(),
        record.display_runtime().to_string(),
        format!(
            "⭐️ {}/10 ({})",
            record
                .vote_average
                .map(|v| format!("{:.1}", v))
                .unwrap_or_else(|| "-".to_string()),
            record.vote_count.unwrap_or(0)
        ),
    ];
    facts.push(record.genre_text());
    facts.push(record.language_text());
    println!("{}", facts.join(" · "));
    println!();

    if let Some(ref overview) = record.overview {
        println!("{}", overview);
        println!();
    }

    if let Some(ref poster) = record.poster_path {
        println!("  {} {}", "Poster:".bold(), tmdb.image_url("w500", poster));
    }
    if let Some(ref backdrop) = record.backdrop_path {
        println!("  {} {}", "Backdrop:".bold(), tmdb.image_url("original", backdrop));
    }
    println!();

    println!("{}", format!("Companies ({}):", record.production_companies.len()).bold());
    for company in &record.production_companies {
        match company.origin_country.as_deref().filter(|c| !c.is_empty()) {
            Some(country) => println!("  {} ({})", company.name, country),
            None => println!("  {}", company.name),
        }
    }
    println!();

    println!("{}", format!("Countries ({}):", record.production_countries.len()).bold());
    for country in &record.production_countries {
        println!("  {} [{}]", country.name, country.iso_3166_1);
    }
    println!();

    println!("{}", format!("Trailers ({}):", record.trailers().len()).bold());
    for trailer in record.trailers() {
        match trailer.url() {
            Some(url) => println!("  {} - {}", trailer.name, url),
            None => println!("  {} ({})", trailer.name, trailer.site),
        }
    }
}
