//! Employee API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client ──▶ http (axum router, request id, trace, metrics)
//!                  │
//!                  ▼
//!              handlers ──▶ employee::validation
//!                  │
//!                  ▼
//!              EmployeeService (search, aggregates, delete-by-id)
//!                  │
//!                  ▼
//!              EmployeeClient (reqwest) ──▶ upstream employee service
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use employee_api::config::{apply_env_overrides, read_config, validate_config, ApiConfig, ConfigError};
use employee_api::lifecycle::{shutdown_signal, Shutdown};
use employee_api::observability::{logging, metrics};
use employee_api::HttpServer;

#[derive(Parser)]
#[command(name = "employee-api")]
#[command(about = "REST API over an upstream employee service", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults are used when omitted
    #[arg(short, long, env = "EMPLOYEE_API_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address, e.g. 0.0.0.0:8111
    #[arg(short, long)]
    bind: Option<String>,

    /// Upstream employee service base host, e.g. http://localhost:8112
    #[arg(long)]
    upstream_host: Option<String>,
}

fn build_config(cli: &Cli) -> Result<ApiConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => ApiConfig::default(),
    };
    apply_env_overrides(&mut config);
    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
    }
    if let Some(host) = &cli.upstream_host {
        config.upstream.host = host.clone();
    }
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    logging::init_logging(&config.observability);
    tracing::info!("employee-api v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url(),
        max_body_bytes = config.listener.max_body_bytes,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Address format is checked by validate_config.
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    shutdown_signal().await;
    shutdown.trigger();

    server_task.await??;
    tracing::info!("Shutdown complete");
    Ok(())
}
