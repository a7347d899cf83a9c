use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use tracing::info;

use crate::fetch::{CancelToken, FetchOutcome, OlympicsClient};
use crate::show::DEFAULT_BASE_URL;

#[derive(Args)]
pub struct ExportArgs {
    /// Output file for the aggregated collection
    #[arg(short, long, default_value = "countries.json")]
    pub output: PathBuf,

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
}

pub fn run(args: ExportArgs) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_async(args))
}

pub async fn run_async(args: ExportArgs) -> Result<()> {
    let client = OlympicsClient::new(args.base_url.clone(), args.timeout, args.max_pages);
    let cancel = CancelToken::new();

    let outcome = client.load_all(args.page, &cancel, |_| {}).await;

    let countries = match outcome {
        FetchOutcome::Complete(countries) => countries,
        FetchOutcome::Cancelled { .. } => return Err(anyhow!("Fetch cancelled")),
        FetchOutcome::Partial { countries, error } => {
            return Err(error).with_context(|| {
                format!(
                    "Fetch cycle failed with {} records accumulated",
                    countries.len()
                )
            });
        }
    };

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &countries)
        .context("Failed to write aggregated collection")?;
    writer.flush().context("Failed to flush output file")?;

    info!(
        "Wrote {} countries to {}",
        countries.len(),
        args.output.display()
    );

    Ok(())
}
