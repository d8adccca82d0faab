//! # metcat
//!
//! Terminal browser for the Metropolitan Museum of Art's open access
//! collection API. Searches are hydrated a page at a time; `--pages`
//! scrolls further into the result list.

mod app;
mod render;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use metcat_config::{ConfigLoad, ConfigLoader, ConfigLoaderOptions};
use metcat_model::{ObjectId, SearchQuery};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "metcat", version)]
#[command(
    about = "Browse the Metropolitan Museum of Art collection from the terminal"
)]
struct Cli {
    /// Path to metcat.toml (overrides METCAT_CONFIG_PATH)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to a .env file loaded before reading the environment
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Free-text search across the collection
    Search {
        /// Search terms
        query: String,

        #[command(flatten)]
        paging: PagingArgs,
    },
    /// Faceted search
    Advanced(AdvancedArgs),
    /// Show one object in detail
    Object {
        /// Object identifier
        id: ObjectId,
    },
    /// Add an object to favorites, or remove it if already present
    Favorite {
        /// Object identifier
        id: ObjectId,
    },
    /// List favorite objects
    Favorites,
    /// List departments usable with `advanced --department-id`
    Departments,
    /// Show the curated highlights
    Highlights,
}

#[derive(ClapArgs, Debug, Clone)]
struct PagingArgs {
    /// Additional pages to load by scrolling to the end of the results
    #[arg(long, default_value_t = 0)]
    pages: usize,
}

#[derive(ClapArgs, Debug, Clone)]
struct AdvancedArgs {
    /// Keywords
    #[arg(long)]
    q: Option<String>,

    /// Department identifier (see `metcat departments`)
    #[arg(long)]
    department_id: Option<u32>,

    /// Earliest year; negative for BCE
    #[arg(long, allow_negative_numbers = true)]
    date_begin: Option<i32>,

    /// Latest year; negative for BCE
    #[arg(long, allow_negative_numbers = true)]
    date_end: Option<i32>,

    /// Medium or material, e.g. "Ceramics"
    #[arg(long)]
    medium: Option<String>,

    /// Geographic location, e.g. "France"
    #[arg(long)]
    geo_location: Option<String>,

    /// Subject keyword tags
    #[arg(long)]
    tags: Option<String>,

    /// Match keywords against artist or culture only
    #[arg(long)]
    artist_or_culture: bool,

    /// Include objects without images
    #[arg(long)]
    include_imageless: bool,

    #[command(flatten)]
    paging: PagingArgs,
}

impl AdvancedArgs {
    fn to_query(&self) -> SearchQuery {
        SearchQuery {
            q: self.q.clone(),
            department_id: self.department_id,
            artist_or_culture: self.artist_or_culture,
            date_begin: self.date_begin,
            date_end: self.date_end,
            medium: self.medium.clone(),
            has_images: !self.include_imageless,
            geo_location: self.geo_location.clone(),
            tags: self.tags.clone(),
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,reqwest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let ConfigLoad { config, warnings } =
        ConfigLoader::with_options(ConfigLoaderOptions {
            config_path: cli.config.clone(),
            env_file: cli.env_file.clone(),
            env: None,
        })
        .load()
        .context("failed to load configuration")?;

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }

    let app = App::from_config(&config)?;

    match cli.command {
        Command::Search { query, paging } => {
            app.simple_search(&query, paging.pages).await
        }
        Command::Advanced(args) => {
            app.advanced_search(&args.to_query(), args.paging.pages).await
        }
        Command::Object { id } => app.object(id).await,
        Command::Favorite { id } => app.toggle_favorite(id),
        Command::Favorites => app.list_favorites().await,
        Command::Departments => app.departments().await,
        Command::Highlights => app.highlights().await,
    }
}
