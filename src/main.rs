//! CLI entry point for the Statistics API.
//!
//! Provides subcommands for serving the HTTP API, computing statistics
//! locally from a file or stdin, and querying a running service.

use anyhow::Result;
use clap::{Parser, Subcommand};
use stats_api::{
    api,
    client::{BasicClient, StatsClient},
    config::ServerConfig,
    output::{print_pretty, write_json},
    parser::parse_numbers,
    stats::{basic_stats, compute_stats},
    telemetry,
};
use std::io::Read;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "stats_api")]
#[command(about = "Descriptive statistics over lists of numbers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// Address to bind to (overrides config and STATS_API_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config and STATS_API_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// JSON config file
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Compute statistics for numbers read from a file or stdin
    Compute {
        /// File of whitespace or comma separated numbers, `-` for stdin
        #[arg(value_name = "FILE", default_value = "-")]
        input: String,

        /// Only report mean, max and min
        #[arg(short, long, default_value_t = false)]
        basic: bool,
    },
    /// Ask a running service for statistics
    Query {
        /// Base URL of the service
        #[arg(short, long, default_value = "http://localhost:8000")]
        url: String,

        /// Only report mean, max and min
        #[arg(short, long, default_value_t = false)]
        basic: bool,

        /// Request timeout in seconds
        #[arg(short, long, default_value_t = 30)]
        timeout: u64,

        /// Numbers to send
        #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _log_guard = telemetry::init()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port, config } => {
            let mut server_config = match config {
                Some(path) => ServerConfig::load(&path)?,
                None => ServerConfig::default(),
            }
            .apply_env()?;
            if let Some(host) = host {
                server_config.host = host;
            }
            if let Some(port) = port {
                server_config.port = port;
            }

            info!(addr = %server_config.bind_addr(), "Starting Statistics API");
            api::serve(server_config).await?;
        }
        Commands::Compute { input, basic } => {
            let text = read_input(&input)?;
            let numbers = parse_numbers(&text)?;
            info!(count = numbers.len(), source = %input, "Numbers loaded");

            let mut stdout = std::io::stdout().lock();
            if basic {
                write_json(&mut stdout, &basic_stats(&numbers))?;
            } else {
                let stats = compute_stats(&numbers);
                print_pretty(&stats);
                write_json(&mut stdout, &stats)?;
            }
        }
        Commands::Query {
            url,
            basic,
            timeout,
            numbers,
        } => {
            let http = BasicClient::with_timeout(Duration::from_secs(timeout))?;
            let client = StatsClient::new(http, &url);

            let mut stdout = std::io::stdout();
            if basic {
                let stats = client.basic_stats(&numbers).await?;
                write_json(&mut stdout, &stats)?;
            } else {
                let stats = client.stats(&numbers).await?;
                write_json(&mut stdout, &stats)?;
            }
        }
    }

    Ok(())
}

/// Reads the whole input from a file path, or stdin for `-`.
fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(source)?)
    }
}
