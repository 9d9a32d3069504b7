//! Regdash CLI
//!
//! Command-line access to the dashboard operations:
//! - Refresh health, stats and recent records
//! - Trigger an ingest run
//! - Search regulations
//! - Watch the dashboard

use anyhow::Context;
use clap::{Parser, Subcommand};
use regdash::config::{generate_default_config, Config};
use regdash::dashboard::Dashboard;
use regdash::logging::init_tracing;
use regdash::view::report::{ingest_sections, REFRESH_SECTIONS, SEARCH_SECTIONS};
use regdash::view::{write_snapshot, OutputFormat, Section, Snapshot};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "regdash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dashboard for the regulation platform API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Platform API base URL (overrides config)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Config file (default: standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Log at the configured level instead of warn
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show service health, stats and recent records
    Refresh,

    /// Trigger an ingest run, then refresh
    Ingest {
        /// Seed URL (default: backend.default_seed from config)
        #[arg(short, long)]
        seed: Option<String>,
    },

    /// Search regulations by title or content
    Search {
        /// Search terms
        query: Vec<String>,
    },

    /// Refresh repeatedly until Ctrl+C
    Watch {
        /// Seconds between refreshes (default: poll.interval_secs from config)
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("failed to load config from {:?}", path))?,
        None => Config::from_env(),
    };
    if let Some(url) = &cli.backend_url {
        config.backend.base_url = url.clone();
    }

    let mut logging = config.logging.clone();
    if !cli.verbose {
        logging.level = "warn".to_string();
    }
    init_tracing(&logging);

    let dashboard =
        Dashboard::from_config(&config.backend).context("failed to build HTTP client")?;
    let doc = dashboard.document();

    match cli.command {
        Commands::Refresh => {
            dashboard.refresh().await;
            print_snapshot(&doc.snapshot().await, cli.format, &REFRESH_SECTIONS)?;
        }

        Commands::Ingest { seed } => {
            let seed = seed.unwrap_or_else(|| config.backend.default_seed.clone());
            dashboard.ingest(&seed).await;

            print_snapshot(&doc.snapshot().await, cli.format, &ingest_sections())?;
        }

        Commands::Search { query } => {
            let query = query.join(" ");
            if query.trim().is_empty() {
                tracing::warn!("Empty search query, nothing searched");
            }
            dashboard.search(&query).await;
            print_snapshot(&doc.snapshot().await, cli.format, &SEARCH_SECTIONS)?;
        }

        Commands::Watch { interval } => {
            let secs = interval.unwrap_or(config.poll.interval_secs).max(1);
            let period = Duration::from_secs(secs);

            loop {
                dashboard.refresh().await;
                print_snapshot(&doc.snapshot().await, cli.format, &REFRESH_SECTIONS)?;

                tokio::select! {
                    _ = tokio::time::sleep(period) => {}
                    _ = tokio::signal::ctrl_c() => break,
                }
                if cli.format == OutputFormat::Table {
                    println!();
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn print_snapshot(
    snapshot: &Snapshot,
    format: OutputFormat,
    sections: &[Section],
) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_snapshot(&mut stdout, snapshot, format, sections)?;
    stdout.flush()?;
    Ok(())
}
