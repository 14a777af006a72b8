use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use ipfsx::commands::{CidCommand, DownloadCommand, UploadCommand};
use ipfsx::AppConfig;

#[derive(Parser)]
#[command(name = "ipfsx")]
#[command(version)]
#[command(about = "A tool for IPFS operations including CID calculation, uploading and downloading", long_about = None)]
struct Cli {
    /// Daemon API URL, overriding the config file
    #[arg(long, global = true)]
    api: Option<String>,

    /// Path to an alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the CID v1 for a file or directory
    Cid {
        /// Path to the file or directory
        #[arg(short, long)]
        file: PathBuf,

        /// Hash as a UnixFS file node (dag-pb) instead of raw bytes
        #[arg(long, default_value_t = false)]
        unixfs: bool,
    },

    /// Upload a file to the IPFS network
    Upload {
        /// Path to the file or directory
        #[arg(short, long)]
        file: PathBuf,

        /// Upload directories recursively
        #[arg(short, long, default_value_t = false)]
        recursive: bool,

        /// Skip pinning the uploaded content
        #[arg(long, default_value_t = false)]
        no_pin: bool,
    },

    /// Download a file from the IPFS network
    Download {
        /// IPFS CID of the file
        #[arg(short, long)]
        cid: String,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt().with_env_filter(filter).with_target(false).init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ipfsx::Result<()> {
    let config_path = cli.config.unwrap_or_else(AppConfig::default_path);
    let mut config = AppConfig::load(&config_path)?;
    if let Some(api) = cli.api {
        config.ipfs.api_url = api;
    }

    match cli.command {
        Commands::Cid { file, unixfs } => CidCommand::new(file, unixfs).execute(),
        Commands::Upload {
            file,
            recursive,
            no_pin,
        } => {
            UploadCommand::new(file, recursive, no_pin, config.ipfs)
                .execute()
                .await
        }
        Commands::Download { cid, output } => {
            DownloadCommand::new(cid, output, config.ipfs)
                .execute()
                .await
        }
    }
}
