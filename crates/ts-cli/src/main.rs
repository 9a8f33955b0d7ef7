//! TierScope CLI
//!
//! Command-line interface for the TierScope catalog viewer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

mod config;
mod logging;

use config::AppConfig;
use logging::LoggingConfig;

use ts_api::server::{ApiServer, ApiServerConfig};
use ts_api::state::AppState;
use ts_core::{load_catalog, Category, InitStage};
use ts_provider::{BackendConfig, BackendProvider};

#[derive(Parser)]
#[command(name = "tierscope")]
#[command(version)]
#[command(about = "Tiered asset catalog viewer for Azure, Entra and MS Graph", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the catalog web server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Catalog backend URL
        #[arg(short, long)]
        backend_url: Option<String>,
    },

    /// Check backend connectivity and catalog health
    Check {
        /// Catalog backend URL
        #[arg(short, long)]
        backend_url: Option<String>,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = AppConfig::load(&config_path).unwrap_or_else(|_| {
        if cli.verbose {
            eprintln!("Using default configuration (no config file found)");
        }
        AppConfig::default()
    });

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        config
            .logging
            .level
            .parse()
            .unwrap_or(tracing::Level::INFO)
    };

    logging::init_logging(LoggingConfig {
        level: log_level,
        json_format: cli.format == OutputFormat::Json || config.logging.json_format,
        ..Default::default()
    });

    match cli.command {
        Commands::Serve {
            port,
            host,
            backend_url,
        } => cmd_serve(config, host, port, backend_url).await,
        Commands::Check { backend_url } => cmd_check(config, backend_url, cli.format).await,
        Commands::Config => cmd_config(config, cli.format),
    }
}

fn default_config_path() -> PathBuf {
    if let Some(dirs) = directories::ProjectDirs::from("com", "tierscope", "tierscope") {
        dirs.config_dir().join("config.yaml")
    } else {
        PathBuf::from("config/default.yaml")
    }
}

fn provider_from(config: &AppConfig, backend_url: Option<String>) -> Result<BackendProvider> {
    let backend = BackendConfig {
        base_url: backend_url.unwrap_or_else(|| config.backend.base_url.clone()),
        timeout: Duration::from_secs(config.backend.timeout_secs),
    };
    BackendProvider::new(backend).context("Failed to construct backend provider")
}

async fn cmd_serve(
    config: AppConfig,
    host: Option<String>,
    port: Option<u16>,
    backend_url: Option<String>,
) -> Result<()> {
    let provider = provider_from(&config, backend_url)?;

    println!("{}", "Loading catalog from backend...".cyan());
    let snapshot = load_catalog(&provider).await;
    print_stage(&snapshot.stage);

    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    let bind_address: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("Invalid bind address: {}:{}", host, port))?;

    println!(
        "Serving catalog on {}",
        format!("http://{}", bind_address).cyan()
    );

    let server = ApiServer::new(
        AppState::new(snapshot),
        ApiServerConfig {
            bind_address,
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
        },
    );
    server.run().await.context("Server error")
}

async fn cmd_check(
    config: AppConfig,
    backend_url: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let provider = provider_from(&config, backend_url)?;
    let snapshot = load_catalog(&provider).await;

    if format == OutputFormat::Json {
        let report = serde_json::json!({
            "ready": snapshot.is_ready(),
            "categories": Category::ALL.iter().map(|&category| {
                serde_json::json!({
                    "category": category.as_str(),
                    "tiered": snapshot.catalog.items(category).len(),
                    "untiered": snapshot.catalog.untiered_count(category),
                })
            }).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", "Catalog Health".bold());
        println!("──────────────");
        for &category in Category::ALL.iter() {
            println!(
                "  {}: {} tiered, {} untiered",
                category.display_name().cyan(),
                snapshot.catalog.items(category).len(),
                snapshot.catalog.untiered_count(category)
            );
        }
        println!();
        print_stage(&snapshot.stage);
    }

    if !snapshot.is_ready() {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_config(config: AppConfig, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{}", serde_yaml::to_string(&config)?);
    }
    Ok(())
}

fn print_stage(stage: &InitStage) {
    match stage {
        InitStage::Ready => println!("{}", "Catalog loaded".green()),
        InitStage::DataUnavailable => {
            println!("{}", "No catalog data could be loaded".red().bold())
        }
        other => println!("Load stopped at stage: {:?}", other),
    }
}
