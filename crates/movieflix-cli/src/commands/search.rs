use crate::commands::{auth, config, prompts};
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use movieflix_config::PathManager;
use movieflix_core::{SearchController, SearchPhase};
use movieflix_models::{MovieDetail, MovieSummary};
use movieflix_omdb::{MovieDatabase, OmdbClient};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

fn client_from_config(paths: &PathManager) -> Result<(OmdbClient, movieflix_config::Config)> {
    let cfg = config::load_validated(paths)?;
    let client = OmdbClient::new(cfg.omdb.api_key.clone(), cfg.omdb.base_url.clone());
    Ok((client, cfg))
}

pub async fn run_search(paths: &PathManager, query: &str, output: &Output) -> Result<()> {
    let account = auth::require_session(paths)?;
    info!(user = %account.email, query, "running search");

    let (client, _) = client_from_config(paths)?;
    let results = client.search_by_title(query).await?;

    render_results(&results, output);
    Ok(())
}

pub async fn run_movie(paths: &PathManager, imdb_id: &str, output: &Output) -> Result<()> {
    let account = auth::require_session(paths)?;
    info!(user = %account.email, imdb_id, "fetching movie detail");

    let (client, _) = client_from_config(paths)?;
    let detail = client.fetch_by_id(imdb_id).await?;

    render_detail(&detail, output);
    Ok(())
}

/// Interactive search loop over the debounced controller. The configured
/// default query fires once at startup; an empty query exits.
pub async fn run_browse(paths: &PathManager, output: &Output) -> Result<()> {
    let account = auth::require_session(paths)?;
    info!(user = %account.email, "entering browse mode");

    let (client, cfg) = client_from_config(paths)?;
    let mut controller = SearchController::new(
        Arc::new(client),
        Duration::from_millis(cfg.search.debounce_ms),
    );

    controller.mount(&cfg.search.default_query).await;
    controller.settled().await;
    render_state(&controller, output).await;

    loop {
        let query = prompts::prompt_optional("Search (empty to quit)")?;
        if query.trim().is_empty() {
            break;
        }

        controller.input(&query).await;
        controller.settled().await;
        render_state(&controller, output).await;
    }

    Ok(())
}

async fn render_state<D: MovieDatabase>(controller: &SearchController<D>, output: &Output) {
    let state = controller.state().await;
    match state.phase {
        SearchPhase::Success => render_results(&state.results, output),
        SearchPhase::Error(message) => output.error(message),
        SearchPhase::Idle | SearchPhase::Loading => {}
    }
}

fn render_results(results: &[MovieSummary], output: &Output) {
    if output.format() != OutputFormat::Human {
        output.data(&json!(results));
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Title", "Year", "Type", "IMDB ID"]);

    for movie in results {
        table.add_row(vec![
            Cell::new(&movie.title),
            Cell::new(&movie.year),
            Cell::new(movie.media_type.as_deref().unwrap_or("-")),
            Cell::new(&movie.imdb_id),
        ]);
    }

    println!("{table}");
    output.info(format!("{} result(s)", results.len()));
}

fn render_detail(detail: &MovieDetail, output: &Output) {
    if output.format() != OutputFormat::Human {
        output.data(&json!(detail));
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut row = |label: &str, value: Option<&str>| {
        if let Some(value) = value {
            table.add_row(vec![Cell::new(label), Cell::new(value)]);
        }
    };

    row("Title", Some(detail.title.as_str()));
    row("Year", Some(detail.year.as_str()));
    row("Rated", detail.rated.as_deref());
    row("Released", detail.released.as_deref());
    row("Runtime", detail.runtime.as_deref());
    row("Genre", detail.genre.as_deref());
    row("Director", detail.director.as_deref());
    row("Writer", detail.writer.as_deref());
    row("Actors", detail.actors.as_deref());
    row("Plot", detail.plot.as_deref());
    row("Language", detail.language.as_deref());
    row("Country", detail.country.as_deref());
    row("Awards", detail.awards.as_deref());
    row("Metascore", detail.metascore.as_deref());
    row("IMDB rating", detail.imdb_rating.as_deref());
    row("IMDB votes", detail.imdb_votes.as_deref());
    row("Box office", detail.box_office.as_deref());
    row("Poster", Some(detail.poster.as_str()));

    for rating in &detail.ratings {
        table.add_row(vec![Cell::new(&rating.source), Cell::new(&rating.value)]);
    }

    println!("{table}");
}
