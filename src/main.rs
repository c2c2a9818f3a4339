//! Holocron CLI - search Star Wars characters with a local cache
//!
//! Queries the public SWAPI character endpoint, caches enriched results in a
//! single JSON file, and prints formatted text blocks.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use holocron::api::SwapiClient;
use holocron::cache::{default_cache_path, CacheError, CharacterCache};
use holocron::cli::{CacheOp, Cli, Command};
use holocron::render;
use holocron::service::SearchService;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CacheError> {
    let cache_path = cli.cache_file.unwrap_or_else(default_cache_path);

    // A corrupt cache file is the one condition that aborts the run.
    let mut cache = CharacterCache::load(cache_path)?;

    match cli.command {
        Command::Search { name, world } => {
            let query = name.join(" ");
            let mut service = SearchService::new(cache, SwapiClient::new());
            let characters = service.search(&query).await?;

            if characters.is_empty() {
                println!("{}", render::NO_MATCH_MESSAGE);
            } else {
                println!("Found {} matches:", characters.len());
                for character in &characters {
                    println!("{}", render::render_character(character));
                    if world {
                        if let Some(homeworld) = &character.homeworld {
                            println!();
                            println!("{}", render::render_homeworld(homeworld));
                        }
                    }
                    println!();
                }
            }
        }
        Command::Cache { operation } => match operation {
            CacheOp::Clean => {
                cache.clear()?;
                println!("Removed cache");
            }
            CacheOp::History => {
                println!("{}", render::render_history(cache.history()));
            }
        },
    }

    Ok(())
}
