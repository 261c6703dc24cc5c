//! # ferrous-resolve
//!
//! Resolves names by walking the DNS delegation tree from the root servers
//! and prints their alias, address and mail exchange records.

mod bootstrap;
mod output;

use bootstrap::config::log_config;
use bootstrap::{build_resolver, init_logging, load_config};
use clap::Parser;
use ferrous_resolve_application::use_cases::CollectRecordsUseCase;
use ferrous_resolve_domain::CliOverrides;
use std::sync::Arc;
use tracing::{debug, error, info};

#[derive(Parser)]
#[command(name = "ferrous-resolve")]
#[command(version)]
#[command(about = "Iterative DNS resolver: walks from the root servers to the answer")]
struct Cli {
    /// Names to look up
    #[arg(required = true, value_name = "NAME")]
    names: Vec<String>,

    /// Raise the log level to debug
    #[arg(short, long)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<String>,

    /// Per-query timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Try the root servers in random order
    #[arg(long)]
    shuffle_roots: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        verbose: cli.verbose,
        query_timeout_ms: cli.timeout_ms,
        shuffle_roots: cli.shuffle_roots,
    };
    let config = load_config(cli.config.as_deref(), overrides)?;

    init_logging(&config);
    log_config(cli.config.as_deref(), &config);

    let resolver = Arc::new(build_resolver(&config));
    let use_case = CollectRecordsUseCase::new(resolver.clone());

    for name in &cli.names {
        match use_case.execute(name).await {
            Ok(report) if report.is_empty() => info!(name = %name, "No records found"),
            Ok(report) => {
                for line in output::render(&report) {
                    println!("{}", line);
                }
            }
            Err(e) => error!(name = %name, error = %e, "Skipping name"),
        }
    }

    let stats = resolver.cache().stats();
    debug!(
        full_entries = stats.full_entries,
        partial_entries = stats.partial_entries,
        full_hits = stats.full_hits,
        partial_hits = stats.partial_hits,
        hit_rate = format!("{:.2}", stats.hit_rate),
        "Cache statistics"
    );

    Ok(())
}
