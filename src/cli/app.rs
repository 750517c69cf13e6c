//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use verisense::config::Config;
use verisense::core::models::VerificationStatus;
use verisense::output::OutputMode;

/// verisense - Community misinformation verification
#[derive(Parser, Debug)]
#[command(
    name = "verisense",
    version,
    about = "Verify claims and browse the community misinformation feed",
    long_about = "Verify claims against the analysis service and browse community reports.\n\n\
                  Claims can be text, an image or an audio file.\n\
                  The community feed is a published spreadsheet of verified claims."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ~/.config/verisense/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send a claim to the analysis service
    Verify {
        /// Claim text
        text: Option<String>,

        /// Image or audio file to analyze
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Media type of the file (guessed from the extension by default)
        #[arg(long, value_name = "TYPE", requires = "file")]
        mime: Option<String>,
    },

    /// List claims from the community feed
    Feed {
        /// Only claims whose city contains this text ("All India" for all)
        #[arg(short, long)]
        city: Option<String>,

        /// Only claims with this status: verified, false, misleading, pending
        #[arg(short, long)]
        status: Option<VerificationStatus>,

        /// Case-insensitive search over claim text and city
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Show at most this many claims
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show dashboard aggregates for the community feed
    Stats {
        /// Only claims whose city contains this text
        #[arg(short, long)]
        city: Option<String>,
    },

    /// Show the effective configuration
    Config,
}

/// Run the CLI
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = Config::resolve(cli.config.as_deref())?;
    let config_path = cli.config.unwrap_or_else(Config::config_path);

    match cli.command {
        Command::Verify { text, file, mime } => {
            commands::verify(&config, text, file.as_deref(), mime, output_mode).await
        },
        Command::Feed {
            city,
            status,
            search,
            limit,
        } => commands::feed(&config, city, status, search, limit, output_mode).await,
        Command::Stats { city } => commands::stats(&config, city, output_mode).await,
        Command::Config => {
            commands::config(config, &config_path, output_mode);
            Ok(())
        },
    }
}
