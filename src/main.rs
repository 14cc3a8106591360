use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eo_tools::sync::{self, ExportConfig};
use eo_tools::{Result, logging};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli).await {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    logging::init()?;

    match cli.command {
        Command::Download(args) => execute_download(args).await,
    }
}

async fn execute_download(args: DownloadArgs) -> Result<()> {
    sync::export_to_csv(&ExportConfig::default(), &args.output).await?;
    println!("Done");
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Download executive order data from the Federal Register's API."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download every executive order since 1937 into a CSV file.
    Download(DownloadArgs),
}

#[derive(clap::Args)]
struct DownloadArgs {
    /// Output CSV file path.
    output: PathBuf,
}
