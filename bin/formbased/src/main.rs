//! `formbased` — the formbase server binary.
//!
//! Usage:
//!   formbased [-c <config.toml>] [--listen <addr>]
//!
//! Without a config file, storage defaults to `./data`.

mod config;
mod routes;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use formbase_core::Module;
use formbase_forms::FormsModule;
use formbase_forms::service::FormsService;

use config::ServerConfig;

/// Formbase server.
#[derive(Parser, Debug)]
#[command(name = "formbased", about = "Formbase form-configuration server")]
struct Cli {
    /// Path to config file.
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Listen address.
    #[arg(long = "listen", default_value = "0.0.0.0:8080")]
    listen: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load server configuration.
    let server_config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path);
            ServerConfig::load(Path::new(path))?
        }
        None => ServerConfig::default(),
    };

    // Initialize storage.
    let data_dir = PathBuf::from(&server_config.storage.data_dir);
    std::fs::create_dir_all(&data_dir)?;

    let core_config = formbase_core::ServiceConfig {
        data_dir: Some(data_dir),
        sqlite_path: server_config.storage.sqlite_path.clone().map(PathBuf::from),
        listen: cli.listen.clone(),
    };

    let sql = formbase_sql::SqliteStore::open(&core_config.resolve_sqlite_path())
        .map_err(|e| anyhow::anyhow!("failed to open SQL store: {}", e))?;

    // Initialize the forms module.
    let forms_module = FormsModule::new(
        FormsService::new(Box::new(sql))
            .map_err(|e| anyhow::anyhow!("failed to initialize forms service: {}", e))?,
    );
    info!("Forms module initialized");

    let module_routes = vec![(forms_module.name(), forms_module.routes())];

    // Build router and serve.
    let app = routes::build_router(module_routes);

    let listener = tokio::net::TcpListener::bind(&core_config.listen).await?;
    info!("formbase server listening on {}", core_config.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
