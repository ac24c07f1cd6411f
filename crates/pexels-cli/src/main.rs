//! Command-line front end for the Pexels client.
//!
//! Reads the API key from `--api-key`, `PEXELS_API_KEY` or a `.env` file,
//! runs one request and prints the JSON response.

mod summary;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pexels_client::{Paging, PexelsClient, VideoBounds};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pexels", version, about = "Query the Pexels photo and video API")]
struct Cli {
    /// Pexels API key.
    #[arg(long, env = "PEXELS_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Override the API root, e.g. for a local proxy.
    #[arg(long, env = "PEXELS_BASE_URL")]
    base_url: Option<String>,

    /// Print one line per photo/video instead of the raw JSON.
    #[arg(long, global = true)]
    summary: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search photos
    Search {
        query: String,
        #[command(flatten)]
        paging: PagingArgs,
    },
    /// Popular photos
    Popular {
        #[command(flatten)]
        paging: PagingArgs,
    },
    /// Photos curated by the Pexels team
    Curated {
        #[command(flatten)]
        paging: PagingArgs,
    },
    /// Search videos
    SearchVideos {
        query: String,
        #[command(flatten)]
        paging: PagingArgs,
        #[command(flatten)]
        bounds: BoundsArgs,
    },
    /// Popular videos
    PopularVideos {
        #[command(flatten)]
        paging: PagingArgs,
        #[command(flatten)]
        bounds: BoundsArgs,
    },
    /// A single photo by id
    Photo { id: u64 },
}

#[derive(Debug, Args)]
struct PagingArgs {
    /// Results per page (default 10)
    #[arg(long)]
    per_page: Option<u32>,
    /// Page number (default 1)
    #[arg(long)]
    page: Option<u32>,
}

impl From<PagingArgs> for Paging {
    fn from(args: PagingArgs) -> Self {
        Paging::new(args.per_page, args.page)
    }
}

#[derive(Debug, Args)]
struct BoundsArgs {
    /// Minimum width in pixels
    #[arg(long)]
    min_width: Option<u32>,
    /// Maximum width in pixels
    #[arg(long)]
    max_width: Option<u32>,
    /// Minimum duration in seconds
    #[arg(long)]
    min_duration: Option<u32>,
    /// Maximum duration in seconds
    #[arg(long)]
    max_duration: Option<u32>,
}

impl From<BoundsArgs> for VideoBounds {
    fn from(args: BoundsArgs) -> Self {
        VideoBounds {
            min_width: args.min_width,
            max_width: args.max_width,
            min_duration: args.min_duration,
            max_duration: args.max_duration,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the key may come from the flag or environment.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut client = PexelsClient::new(cli.api_key).context("failed to create Pexels client")?;
    if let Some(base_url) = cli.base_url {
        client = client.with_base_url(base_url);
    }
    tracing::debug!(base_url = client.base_url(), "Client ready");

    let (kind, response) = match cli.command {
        Command::Search { query, paging } => {
            let resp = client.search(&query, paging.into()).await;
            (summary::Kind::Photos, resp)
        }
        Command::Popular { paging } => {
            let resp = client.popular_photos(paging.into()).await;
            (summary::Kind::Photos, resp)
        }
        Command::Curated { paging } => {
            let resp = client.curated_photos(paging.into()).await;
            (summary::Kind::Photos, resp)
        }
        Command::SearchVideos {
            query,
            paging,
            bounds,
        } => {
            let resp = client
                .search_videos(&query, paging.into(), bounds.into())
                .await;
            (summary::Kind::Videos, resp)
        }
        Command::PopularVideos { paging, bounds } => {
            let resp = client.popular_videos(paging.into(), bounds.into()).await;
            (summary::Kind::Videos, resp)
        }
        Command::Photo { id } => (summary::Kind::Photo, client.get_photo(id).await),
    };
    let response = response.context("Pexels request failed")?;

    let output = if cli.summary {
        summary::render(kind, response)?
    } else {
        serde_json::to_string_pretty(&response)?
    };
    println!("{output}");

    Ok(())
}
