use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::fetch::{CancelToken, FetchOutcome, OlympicsClient};
use crate::lookup::Lookup;
use crate::table;

pub const DEFAULT_BASE_URL: &str = "https://apis.codante.io/olympic-games";

#[derive(Args)]
pub struct ShowArgs {
    /// Olympic games API base URL
    #[arg(short = 'u', long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Page to start fetching from
    #[arg(short, long, default_value = "1")]
    pub page: u32,

    /// Maximum number of pages to fetch in one cycle
    #[arg(short, long, default_value = "50")]
    pub max_pages: u32,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "30")]
    pub timeout: u64,

    /// Path to a lookup JSON file with name overrides and attributes
    #[arg(short, long)]
    pub extras: Option<PathBuf>,

    /// Print each country's flag URL next to its row
    #[arg(short, long)]
    pub flags: bool,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_async(args))
}

pub async fn run_async(args: ShowArgs) -> Result<()> {
    let lookup = match &args.extras {
        Some(path) => Lookup::from_path(path)?,
        None => Lookup::builtin(),
    };

    let client = OlympicsClient::new(args.base_url.clone(), args.timeout, args.max_pages);
    let cancel = CancelToken::new();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));

    // The two loading flags drive distinct spinner messages: the first page
    // in flight, then the remaining pages with a partial count.
    let outcome = client
        .load_all(args.page, &cancel, |state| {
            if state.table_loading {
                spinner.set_message("Fetching first page...");
            } else if state.loading {
                spinner.set_message(format!(
                    "{} countries loaded, fetching remaining pages...",
                    state.countries.len()
                ));
            }
        })
        .await;

    spinner.finish_and_clear();

    match outcome {
        FetchOutcome::Complete(countries) => {
            info!("Fetched {} countries", countries.len());
            let rows = table::build_rows(&countries, &lookup);
            print!("{}", table::render(&rows, args.flags));
            Ok(())
        }
        FetchOutcome::Cancelled { countries } => {
            warn!("Fetch cancelled with {} countries accumulated", countries.len());
            let rows = table::build_rows(&countries, &lookup);
            print!("{}", table::render(&rows, args.flags));
            Ok(())
        }
        FetchOutcome::Partial { countries, error } => {
            if !countries.is_empty() {
                let rows = table::build_rows(&countries, &lookup);
                print!("{}", table::render(&rows, args.flags));
                eprintln!(
                    "Warning: showing {} countries fetched before the failure",
                    countries.len()
                );
            }
            Err(error).context("Fetch cycle failed")
        }
    }
}
