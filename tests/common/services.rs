//! wiremock stand-ins for the services the gateway calls

use super::fixtures::UserFactory;
use bff_gateway::Config;
use bff_gateway::server::{AppState, HttpServer};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// One mock server hosting the auth, project and dataset services under distinct prefixes
pub struct MockServices {
    pub server: MockServer,
}

impl MockServices {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn auth_url(&self) -> String {
        format!("{}/auth/v1", self.server.uri())
    }

    pub fn project_url(&self) -> String {
        format!("{}/project/v1", self.server.uri())
    }

    pub fn dataset_url(&self) -> String {
        format!("{}/dataset/v1", self.server.uri())
    }

    /// Gateway configuration pointing at this server with the in-memory cache
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.gateway.services.auth_service = self.auth_url();
        config.gateway.services.project_service = self.project_url();
        config.gateway.services.dataset_service = self.dataset_url();
        config.gateway.services.timeout_secs = 2;
        config
    }

    pub async fn app_state(&self) -> AppState {
        HttpServer::new(&self.config()).await.unwrap().state().clone()
    }

    /// Serve `GET /admin/user?username=..` with `user` wrapped in `{result}`
    pub async fn user(&self, username: &str, user: Value, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/auth/v1/admin/user"))
            .and(query_param("username", username))
            .and(query_param("exact", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": user})))
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    pub async fn active_user(&self, username: &str) {
        self.user(username, UserFactory::active(username), 1).await;
    }

    /// Serve `GET /authorize` for `role` with a fixed answer
    pub async fn authorize(&self, role: &str, allowed: bool, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/auth/v1/authorize"))
            .and(query_param("role", role))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"result": {"has_permission": allowed}})),
            )
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    /// Serve `GET /projects/{key}`
    pub async fn project(&self, key: &str, id: &str, code: &str, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/project/v1/projects/{}", key)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": id, "code": code, "name": code})),
            )
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    /// Serve `GET /datasets/{key}`
    pub async fn dataset(&self, key: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/dataset/v1/datasets/{}", key)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}
