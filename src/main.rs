//! StoryCrafter API Server
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Loads `config.toml` from the platform config dir,
//! `/etc/storycrafter/`, or the working directory; environment
//! variables (`STORYCRAFTER_*`) override file values, and CLI flags
//! override both. `RUST_LOG` controls log filtering.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storycrafter::aigen::{GenerationClient, GenerationConfig};
use storycrafter::api::{serve, ApiConfig, AppState};
use storycrafter::config::{generate_default_config, Config};
use storycrafter::store::{ContentLibrary, LibraryConfig};

#[derive(Parser)]
#[command(name = "storycrafter", version, about = "StoryCrafter content-generation backend")]
struct Cli {
    /// Path to a config file (overrides default search locations)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the API server (default)
    Serve {
        /// Host to bind to
        #[arg(long, env = "STORYCRAFTER_API_HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(long, env = "STORYCRAFTER_API_PORT")]
        port: Option<u16>,

        /// Data directory for the content library
        #[arg(long, env = "STORYCRAFTER_DATA_DIR")]
        data_dir: Option<PathBuf>,
    },

    /// Print a commented default configuration file
    InitConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
        data_dir: None,
    }) {
        Command::InitConfig => {
            print!("{}", generate_default_config());
            Ok(())
        }
        Command::Serve {
            host,
            port,
            data_dir,
        } => run_server(cli.config, host, port, data_dir).await,
    }
}

async fn run_server(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    data_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut config = match config_path {
        Some(path) => Config::load_with_env(&path)?,
        None => Config::load_default(),
    };

    if let Some(host) = host {
        config.api.host = host;
    }
    if let Some(port) = port {
        config.api.port = port;
    }
    if let Some(data_dir) = data_dir {
        config.store.data_dir = data_dir.to_string_lossy().to_string();
    }

    init_tracing(&config);

    tracing::info!("Starting StoryCrafter API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {}", config.store.data_dir);

    // Open the content library
    let library = Arc::new(ContentLibrary::open(&LibraryConfig::new(
        &config.store.data_dir,
    ))?);

    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        cors_origins: config.api.cors_origins.clone(),
    };

    // Create app state (with or without the generation service)
    let state = if config.aigen.enabled {
        tracing::info!("Generation service enabled: {}", config.aigen.url);

        let generator = Arc::new(GenerationClient::new(GenerationConfig {
            base_url: config.aigen.url.clone(),
            api_key: config.aigen.api_key.clone(),
            request_timeout_ms: config.aigen.request_timeout_ms,
            ..Default::default()
        })?);

        match generator.health_check().await {
            Ok(_) => tracing::info!("Generation service connection verified"),
            Err(e) => tracing::warn!(
                "Generation service not available: {} (generation endpoints will fail until it is)",
                e
            ),
        }

        AppState::with_generator(library, api_config.clone(), generator)
    } else {
        tracing::info!("Generation service disabled (set [aigen] enabled = true to enable)");
        AppState::new(library, api_config.clone())
    };

    serve(state, &api_config).await?;

    tracing::info!("StoryCrafter API server stopped");
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("storycrafter={},tower_http=debug", config.logging.level).into());

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
