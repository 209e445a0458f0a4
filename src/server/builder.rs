//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use tracing::{info, warn};

/// Default location of the YAML configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/gateway.yaml";

/// Server builder for easier configuration
#[derive(Debug, Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self { config: None }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::config("Configuration is required"))?;

        HttpServer::new(&config).await
    }
}

/// Load configuration from `path`, falling back to `BFF_*` environment variables
/// only when no file exists there. A file that fails to parse or validate is an error.
pub async fn load_config(path: &str) -> Result<Config> {
    if !tokio::fs::try_exists(path).await? {
        warn!(path, "Configuration file not found, using environment");
        return Config::from_env();
    }

    let config = Config::from_file(path).await?;
    info!(path, "Configuration file loaded");
    Ok(config)
}

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    run_server_with(DEFAULT_CONFIG_PATH).await
}

/// Run the server with configuration from `path`
pub async fn run_server_with(path: &str) -> Result<()> {
    info!("Starting BFF gateway");

    let config = load_config(path).await?;
    let server = ServerBuilder::new().with_config(config).build().await?;

    info!("Server starting at: http://{}", server.config().address());
    info!("   GET  /health");
    info!("   GET  /v1/users/me");
    info!("   POST /v1/permissions/check");
    info!("   GET  /v1/datasets/{{dataset_code}}");

    server.start().await
}
