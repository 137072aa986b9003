//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use roi_application::SimulationRequest;
use std::path::PathBuf;

/// Output format for calculation results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Formatted report
    #[default]
    Text,
    /// JSON output (same shape as the HTTP API's `data`)
    Json,
}

/// CLI arguments for roi-simulator
#[derive(Parser, Debug)]
#[command(name = "roi-simulator")]
#[command(author, version, about = "Automation ROI simulator - calculator and HTTP API")]
#[command(long_about = r#"
Estimates the return on investment of automating repetitive business
processes, from a company's sector, size and workload.

Configuration files are loaded from (in priority order):
1. ROI_* environment variables (e.g. ROI_SERVER__PORT=8080)
2. PORT, NODE_ENV, RATE_LIMIT_WINDOW_MS, RATE_LIMIT_MAX_REQUESTS
3. --config <path>        Explicit config file
4. ./roi-simulator.toml   Project-level config
5. ~/.config/roi-simulator/config.toml   Global config

Example:
  roi-simulator serve --port 8080
  roi-simulator calculate --sector finance --employees 120 --processes 4 --time-per-task 1.5
  roi-simulator sectors
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Address to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run one ROI calculation and print it
    Calculate {
        #[command(flatten)]
        args: CalculateArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List the available sectors
    Sectors {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Print the benchmark, maturity and pricing tables as JSON
    Benchmarks,

    /// Show configuration sources and the effective configuration
    Config,
}

/// Calculation parameters
///
/// Values are validated the same way as HTTP requests, so range errors are
/// reported per field rather than by clap.
#[derive(Args, Debug, Clone)]
pub struct CalculateArgs {
    /// Sector id (finance, hr, operations, sales, support, marketing, it, legal, general)
    #[arg(short, long)]
    pub sector: String,

    /// Number of employees (1-10000)
    #[arg(short, long)]
    pub employees: f64,

    /// Number of repetitive processes (1-50)
    #[arg(long)]
    pub processes: f64,

    /// Hours per task (0.1-24)
    #[arg(short, long)]
    pub time_per_task: f64,

    /// Loaded hourly cost (10-500); defaults to the sector average
    #[arg(long)]
    pub hourly_cost: Option<f64>,

    /// Current automation percentage (0-100)
    #[arg(long)]
    pub current_automation: Option<f64>,

    /// Target automation percentage (0-100); defaults to the sector ceiling
    #[arg(long)]
    pub target_automation: Option<f64>,

    /// Digital maturity (low, medium, high); derived from employees if omitted
    #[arg(short, long)]
    pub maturity: Option<String>,
}

impl From<CalculateArgs> for SimulationRequest {
    fn from(args: CalculateArgs) -> Self {
        SimulationRequest {
            sector: Some(args.sector),
            employees: Some(args.employees),
            processes: Some(args.processes),
            time_per_task: Some(args.time_per_task),
            hourly_cost: args.hourly_cost,
            current_automation: args.current_automation,
            target_automation: args.target_automation,
            maturity: args.maturity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calculate() {
        let cli = Cli::parse_from([
            "roi-simulator",
            "-vv",
            "calculate",
            "--sector",
            "finance",
            "--employees",
            "120",
            "--processes",
            "4",
            "--time-per-task",
            "1.5",
            "--maturity",
            "low",
            "--output",
            "json",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Calculate { args, output } => {
                assert_eq!(output, OutputFormat::Json);
                let request = SimulationRequest::from(args);
                assert_eq!(request.sector.as_deref(), Some("finance"));
                assert_eq!(request.employees, Some(120.0));
                assert_eq!(request.time_per_task, Some(1.5));
                assert_eq!(request.hourly_cost, None);
                assert_eq!(request.maturity.as_deref(), Some("low"));
            }
            other => panic!("expected calculate, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_serve_with_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["roi-simulator", "serve", "--port", "8080", "--no-config"]);
        assert!(cli.no_config);
        match cli.command {
            Command::Serve { host, port } => {
                assert_eq!(host, None);
                assert_eq!(port, Some(8080));
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn test_calculate_requires_sector() {
        let result = Cli::try_parse_from([
            "roi-simulator",
            "calculate",
            "--employees",
            "10",
            "--processes",
            "1",
            "--time-per-task",
            "1",
        ]);
        assert!(result.is_err());
    }
}
