mod catalog;
mod config;
mod listing;
mod models;
mod sources;

use anyhow::{Context, Result};
use catalog::{Catalog, DELETE_FAILED, LOAD_FAILED};
use config::{Command, Config};
use listing::render;
use sources::{ApiSource, ListParams, MockSource, PropertySource};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse_args();

    // Logs go to stderr so stdout carries only the rendered listing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    info!("🏠 Property Board");

    let params = ListParams::with_limit(config.limit);
    let interactive = io::stdin().is_terminal();
    if config.demo {
        let catalog = Catalog::with_params(MockSource::with_sample_data(), params);
        run(catalog, config.command(), interactive).await
    } else {
        let source = ApiSource::with_timeout(&config.api_url, config.timeout())?;
        info!("Using listings API at {}", config.api_url);
        run(Catalog::with_params(source, params), config.command(), interactive).await
    }
}

/// Load, then execute one command.
///
/// Load and delete failures surface only the catalog's generic message; the cause has
/// already been logged by the catalog.
async fn run<S: PropertySource>(mut catalog: Catalog<S>, command: Command, interactive: bool) -> Result<()> {
    load_with_retry(&mut catalog, interactive).await?;

    match command {
        Command::List { ref json, .. } => {
            let state = command.filter_state();
            let view = catalog.view(&state);

            println!("{}", render::stats(&catalog.stats()));
            println!();
            print!("{}", render::listing(&view));

            if let Some(path) = json {
                let json = serde_json::to_string_pretty(&view.properties)?;
                tokio::fs::write(path, json)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("💾 Saved {} properties to {}", view.properties.len(), path.display());
            }
        }
        Command::Delete { id, yes } => {
            let Some(property) = catalog.find(id) else {
                anyhow::bail!("Property {} not found", id);
            };
            println!("{}", render::card(property));

            if !yes {
                if !interactive {
                    warn!("No terminal to confirm on, pass --yes to delete");
                    return Ok(());
                }
                if !confirm("Are you sure you want to delete this property?")? {
                    info!("Delete cancelled");
                    return Ok(());
                }
            }

            if catalog.delete(id).await.is_err() {
                return Err(anyhow::Error::msg(catalog.error().unwrap_or(DELETE_FAILED)));
            }

            print!("{}", render::listing(&catalog.view(&command.filter_state())));
        }
        Command::Edit { id } => {
            let Some(property) = catalog.find(id) else {
                anyhow::bail!("Property {} not found", id);
            };
            catalog.request_edit(property);
            println!("Editing is not available yet.");
        }
        Command::Stats => {
            println!("{}", render::stats(&catalog.stats()));
        }
    }

    Ok(())
}

/// Load once; on failure let the user retry when there is a terminal to ask on
async fn load_with_retry<S: PropertySource>(catalog: &mut Catalog<S>, interactive: bool) -> Result<()> {
    let mut result = catalog.load().await;

    while result.is_err() {
        let message = catalog.error().unwrap_or(LOAD_FAILED);
        if !interactive || !confirm(&format!("{}. Retry?", message))? {
            return Err(anyhow::Error::msg(message));
        }
        result = catalog.retry().await;
    }

    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read answer")?;

    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Property;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn listing(id: i64, title: &str, is_available: bool) -> Property {
        Property {
            id,
            title: title.to_string(),
            location: "Goa".to_string(),
            price: 15000.0,
            is_available,
            amenities: None,
            image_url: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn catalog(source: MockSource) -> Catalog<MockSource> {
        Catalog::with_params(source, ListParams::default())
    }

    #[tokio::test]
    async fn failed_load_reports_only_the_generic_message() {
        let source = MockSource::new(vec![listing(1, "Sea View", true)]);
        source.set_fail_list(true);

        let err = run(catalog(source), Command::Stats, false).await.unwrap_err();

        assert_eq!(err.to_string(), LOAD_FAILED);
        assert_eq!(err.chain().count(), 1);
    }

    #[tokio::test]
    async fn failed_delete_reports_only_the_generic_message() {
        let source = MockSource::new(vec![listing(1, "Sea View", true)]);
        source.set_fail_delete(true);

        let err = run(catalog(source), Command::Delete { id: 1, yes: true }, false)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), DELETE_FAILED);
        assert_eq!(err.chain().count(), 1);
    }

    #[tokio::test]
    async fn confirmed_delete_succeeds() {
        let source = MockSource::new(vec![listing(1, "Sea View", true), listing(2, "City Flat", false)]);

        run(catalog(source), Command::Delete { id: 2, yes: true }, false)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unconfirmed_delete_without_terminal_is_skipped() {
        let source = MockSource::new(vec![listing(1, "Sea View", true)]);
        source.set_fail_delete(true);

        // The failing source is never reached
        run(catalog(source), Command::Delete { id: 1, yes: false }, false)
            .await
            .unwrap();
    }
}
