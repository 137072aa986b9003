//! CLI entrypoint for the ROI simulator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use roi_application::{
    CalculateRoiUseCase, Clock, GetBenchmarksUseCase, ListSectorsUseCase, ReferenceDataPort,
    SimulationRequest,
};
use roi_infrastructure::{ConfigLoader, FileConfig, SystemClock, reference_data_from_config};
use roi_presentation::{AppState, Cli, Command, ConsoleFormatter, OutputFormat, RateLimiter};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {e}"))?;
    config.validate().context("Invalid configuration")?;
    debug!(?config, "Configuration loaded");

    if let Command::Config = cli.command {
        ConfigLoader::print_config_sources();
        println!();
        println!("Effective configuration:");
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    // Wire adapters
    let reference_data = reference_data_from_config(&config.reference)?;
    info!("Using reference tables from {}", reference_data.source());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    match cli.command {
        Command::Serve { host, port } => serve(config, host, port, reference_data, clock).await,
        Command::Calculate { args, output } => {
            let use_case = CalculateRoiUseCase::new(reference_data, clock);
            let report = use_case.execute(&SimulationRequest::from(args))?;
            match output {
                OutputFormat::Text => print!("{}", ConsoleFormatter::format(&report)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&report)),
            }
            Ok(())
        }
        Command::Sectors { output } => {
            let sectors = ListSectorsUseCase::new(reference_data).execute();
            match output {
                OutputFormat::Text => print!("{}", ConsoleFormatter::format_sectors(&sectors)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&sectors)),
            }
            Ok(())
        }
        Command::Benchmarks => {
            let view = GetBenchmarksUseCase::new(reference_data).execute();
            println!("{}", serde_json::to_string_pretty(&view)?);
            Ok(())
        }
        Command::Config => Ok(()),
    }
}

async fn serve(
    config: FileConfig,
    host: Option<String>,
    port: Option<u16>,
    reference_data: Arc<dyn ReferenceDataPort>,
    clock: Arc<dyn Clock>,
) -> Result<()> {
    let host = host.unwrap_or(config.server.host);
    let port = port.unwrap_or(config.server.port);
    let addr: SocketAddr = tokio::net::lookup_host((host.as_str(), port))
        .await
        .with_context(|| format!("Failed to resolve {host}:{port}"))?
        .next()
        .ok_or_else(|| anyhow!("No address found for {host}:{port}"))?;

    let mut state = AppState::new(reference_data, clock, config.server.environment);
    if config.rate_limit.enabled {
        info!(
            max_requests = config.rate_limit.max_requests,
            window_ms = config.rate_limit.window_ms,
            "Rate limiting /api/ routes"
        );
        state = state.with_rate_limiter(RateLimiter::new(
            config.rate_limit.window(),
            config.rate_limit.max_requests,
        ));
    }

    roi_presentation::serve(state, addr)
        .await
        .context("HTTP server failed")
}
