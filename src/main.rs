use anyhow::Result;
use clap::{Parser, Subcommand};
use olympic_medals::{export, show};

#[derive(Parser)]
#[command(name = "olympic-medals")]
#[command(about = "Fetch Olympic medal standings and render the medal table")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all pages and render the medal table
    Show(show::ShowArgs),
    /// Fetch all pages and write the aggregated collection as JSON
    Export(export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    match cli.command {
        Commands::Show(args) => show::run(args),
        Commands::Export(args) => export::run(args),
    }
}
