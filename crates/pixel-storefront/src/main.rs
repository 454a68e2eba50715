//! PixelMart CLI - exercise the storefront search pipeline from a terminal.
//!
//! Commands:
//! - `pixelmart search` - run a query through fetch → facets → filter → page
//! - `pixelmart url` - round-trip a query string through the state codec

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pixel_commerce::{decode_query, encode_query, FacetDimension, FilterState, SortOption};
use pixel_data::{FixtureBackend, HttpSearchClient, SearchBackend, SearchResponse};
use pixel_storefront::{view, SearchController, StorefrontConfig};

/// PixelMart storefront search, on the command line
#[derive(Parser)]
#[command(name = "pixelmart")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a search and print facets plus one result page
    Search(SearchArgs),

    /// Decode a URL query string and print its canonical re-encoding
    Url(UrlArgs),
}

#[derive(Args)]
struct SearchArgs {
    /// Search term
    #[arg(short, long, default_value = "")]
    term: String,

    /// Sort order (relevance, price_asc, price_desc, name_asc, name_desc, newest)
    #[arg(short, long, default_value = "relevance")]
    sort: String,

    /// Category selections (repeatable)
    #[arg(long)]
    category: Vec<String>,

    /// Subcategory selections (repeatable)
    #[arg(long)]
    subcategory: Vec<String>,

    /// Label selections (repeatable)
    #[arg(long)]
    label: Vec<String>,

    /// Condition selections (repeatable)
    #[arg(long)]
    condition: Vec<String>,

    /// Lower bound of the price filter (enables it)
    #[arg(long)]
    min: Option<f64>,

    /// Upper bound of the price filter (enables it)
    #[arg(long)]
    max: Option<f64>,

    /// Page to display
    #[arg(short, long, default_value_t = 1)]
    page: i64,

    /// Items per page (defaults from config)
    #[arg(long)]
    page_size: Option<i64>,

    /// Serve results from a JSON fixture file instead of the network
    #[arg(long)]
    fixture: Option<String>,
}

#[derive(Args)]
struct UrlArgs {
    /// The query string, with or without a leading '?'
    query: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match cli.config.as_deref() {
        Some(path) => StorefrontConfig::load(path)?,
        None => StorefrontConfig::from_env(),
    };

    match cli.command {
        Commands::Search(args) => run_search(args, &config, cli.json).await,
        Commands::Url(args) => run_url(args, cli.json),
    }
}

async fn run_search(args: SearchArgs, config: &StorefrontConfig, json: bool) -> Result<()> {
    let backend: Arc<dyn SearchBackend> = match &args.fixture {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read fixture file: {}", path))?;
            let response: SearchResponse = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse fixture file: {}", path))?;
            Arc::new(FixtureBackend::new(response))
        }
        None => {
            let mut client = HttpSearchClient::new(&config.endpoint);
            if let Some(key) = &config.api_key {
                client = client.with_api_key(key);
            }
            Arc::new(client)
        }
    };

    let state = state_from_args(&args, config);
    let mut controller = SearchController::new(backend, config.cache_ttl());
    controller.restore(&encode_query(&state)).await;

    let view = controller.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view.page)?);
    } else {
        print!("{}", view::render_view(&view));
        let url = controller.url();
        if !url.is_empty() {
            println!("\nShareable: ?{}", url);
        }
    }
    Ok(())
}

fn run_url(args: UrlArgs, json: bool) -> Result<()> {
    let state = decode_query(&args.query);
    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("{:#?}", state);
        println!("canonical: {}", encode_query(&state));
    }
    Ok(())
}

fn state_from_args(args: &SearchArgs, config: &StorefrontConfig) -> FilterState {
    let mut state = FilterState::new(&args.term)
        .with_sort(SortOption::from_str(&args.sort))
        .with_pagination(args.page, args.page_size.unwrap_or(config.page_size));

    for (dimension, values) in [
        (FacetDimension::Category, &args.category),
        (FacetDimension::Subcategory, &args.subcategory),
        (FacetDimension::Label, &args.label),
        (FacetDimension::Condition, &args.condition),
    ] {
        state.selection_mut(dimension).extend(values.iter().cloned());
    }

    if args.min.is_some() || args.max.is_some() {
        state.price_filter_enabled = true;
        state.price_range = (args.min.unwrap_or(0.0), args.max.unwrap_or(f64::MAX));
    }

    state
}
