//! HTTP server core implementation

use crate::auth::{ContextResolver, IdentityCache, IdentityResolver, PermissionGate};
use crate::config::{Config, ServerConfig};
use crate::server::handlers::health_check;
use crate::server::middleware::RequestIdMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::services::{
    HttpDatasetDirectory, HttpPolicyAuthority, HttpProjectDirectory, HttpUserDirectory,
    ProjectDirectory,
};
use crate::storage::create_cache;
use crate::utils::error::{GatewayError, Result};
use crate::utils::net::{HttpClientConfig, create_http_client};
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::DefaultHeaders,
    web,
};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Build the remote clients, cache backend, resolvers and gate
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let services = config.services();
        let client = create_http_client(&HttpClientConfig::with_timeout(services.timeout()))?;

        let directory = Arc::new(HttpUserDirectory::new(client.clone(), &services.auth_service));
        let policy = Arc::new(HttpPolicyAuthority::new(client.clone(), &services.auth_service));
        let projects: Arc<dyn ProjectDirectory> = Arc::new(HttpProjectDirectory::new(
            client.clone(),
            &services.project_service,
        ));
        let datasets = Arc::new(HttpDatasetDirectory::new(client, &services.dataset_service));

        let store = create_cache(config.cache()).await?;
        let identities = IdentityResolver::new(
            IdentityCache::new(store, config.auth().identity_cache_ttl()),
            directory,
        );
        let context = ContextResolver::new(projects.clone(), config.auth().warn_on_legacy_params);
        let gate = PermissionGate::new(identities, context, policy, projects, datasets);

        Ok(Self {
            config: config.gateway.server.clone(),
            state: AppState::new(config.clone(), gate),
        })
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let max_body_size = state.config.server().max_body_size;

        App::new()
            .app_data(state)
            .app_data(web::PayloadConfig::new(max_body_size))
            .wrap(DefaultHeaders::new().add(("Server", "bff-gateway")))
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .route("/health", web::get().to(health_check))
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);
        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()));
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| GatewayError::config(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("HTTP server listening on {}", bind_addr);
        server.await?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
