//! `catalog`: command-line routing layer over the catalog engine.
//!
//! ```text
//! catalog info --id one-piece.dkw
//! catalog recent --type manga --page 2
//! catalog banners --ids '["one-piece.dkw","berserk.b1"]'
//! ```
//!
//! Results and errors are printed to stdout as JSON; logs go to stderr.

mod config;
mod router;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use catalog_engine::{CatalogService, ReqwestSource};
use catalog_logging::{catalog_debug, catalog_error, catalog_warn};
use clap::{ArgAction, Parser};
use serde::Serialize;

use router::{dispatch, Params, Route};

#[derive(Debug, Parser)]
#[command(name = "catalog", version, about = "Normalized catalog data from the upstream site")]
struct Cli {
    /// home, banners, recent, trending, info, chapters, volumes,
    /// chapters-with-ids or read
    endpoint: String,
    #[arg(long)]
    page: Option<String>,
    /// Listing filter for `recent`: all, manga, manwah or manhua
    #[arg(long = "type")]
    kind: Option<String>,
    #[arg(long)]
    lang: Option<String>,
    #[arg(long)]
    id: Option<String>,
    /// JSON array of ids for `banners`
    #[arg(long)]
    ids: Option<String>,
    /// RON file overriding source settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Single-line JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    catalog_logging::initialize(catalog_logging::level_for_verbosity(cli.verbose));

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            catalog_error!("{err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let settings = config::load(cli.config.as_deref())?;
    let source = ReqwestSource::new(settings).context("building document source")?;
    let origin = source.settings().origin.clone();
    catalog_debug!("Fetching from {origin}");
    let service = CatalogService::new(source, origin);
    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;

    let params = Params {
        page: cli.page,
        kind: cli.kind,
        lang: cli.lang,
        id: cli.id,
        ids: cli.ids,
    };
    let outcome = runtime.block_on(async {
        let route = Route::resolve(&cli.endpoint, &params)?;
        dispatch(&service, route).await
    });

    match outcome {
        Ok(payload) => {
            print_json(&payload, cli.compact)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            catalog_warn!("{} failed: {}", cli.endpoint, err);
            print_json(&err.to_body(), cli.compact)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{text}");
    Ok(())
}
