//! Remote service clients against mocked services

#[cfg(test)]
mod tests {
    use crate::common::{MockServices, UserFactory};
    use crate::{assert_err_code, assert_ok};
    use bff_gateway::services::{
        DatasetDirectory, HttpDatasetDirectory, HttpPolicyAuthority, HttpProjectDirectory,
        HttpUserDirectory, PolicyAuthority, PolicyQuery, ProjectDirectory, UserDirectory,
    };
    use bff_gateway::utils::net::{HttpClientConfig, create_http_client};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, ResponseTemplate};

    fn client() -> reqwest::Client {
        create_http_client(&HttpClientConfig::with_timeout(Duration::from_millis(500))).unwrap()
    }

    fn query(project_code: Option<&str>) -> PolicyQuery {
        PolicyQuery {
            role: "contributor".to_string(),
            resource: "file".to_string(),
            zone: "greenroom".to_string(),
            operation: "view".to_string(),
            project_code: project_code.map(str::to_string),
        }
    }

    // ==================== User directory ====================

    #[tokio::test]
    async fn test_directory_finds_active_user() {
        let services = MockServices::start().await;
        services.active_user("alice").await;
        let directory = HttpUserDirectory::new(client(), services.auth_url());

        let user = assert_ok!(directory.get_user("alice").await).unwrap();
        assert_eq!(user.id, "id-alice");
        assert_eq!(user.email, "alice@example.org");
        assert!(user.is_active());
    }

    #[tokio::test]
    async fn test_directory_empty_result_is_none() {
        let services = MockServices::start().await;
        services.user("ghost", json!(null), 1).await;
        services.user("blank", json!({}), 1).await;
        let directory = HttpUserDirectory::new(client(), services.auth_url());

        assert!(assert_ok!(directory.get_user("ghost").await).is_none());
        assert!(assert_ok!(directory.get_user("blank").await).is_none());
    }

    #[tokio::test]
    async fn test_directory_not_found_is_none() {
        let services = MockServices::start().await;
        let directory = HttpUserDirectory::new(client(), services.auth_url());

        assert!(assert_ok!(directory.get_user("nobody").await).is_none());
    }

    #[tokio::test]
    async fn test_directory_server_error_is_upstream() {
        let services = MockServices::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/admin/user"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&services.server)
            .await;
        let directory = HttpUserDirectory::new(client(), services.auth_url());

        assert_err_code!(directory.get_user("alice").await, "UPSTREAM_FAILURE");
    }

    #[tokio::test]
    async fn test_directory_timeout_is_upstream() {
        let services = MockServices::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/admin/user"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"result": UserFactory::active("slow")}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&services.server)
            .await;
        let directory = HttpUserDirectory::new(client(), services.auth_url());

        let err = directory.get_user("slow").await.unwrap_err();
        assert!(err.is_upstream());
    }

    // ==================== Authorize ====================

    #[tokio::test]
    async fn test_authorize_forwards_every_parameter() {
        let services = MockServices::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/authorize"))
            .and(query_param("role", "contributor"))
            .and(query_param("resource", "file"))
            .and(query_param("zone", "greenroom"))
            .and(query_param("operation", "view"))
            .and(query_param("project_code", "projA"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"result": {"has_permission": true}})),
            )
            .expect(1)
            .mount(&services.server)
            .await;
        let policy = HttpPolicyAuthority::new(client(), services.auth_url());

        assert!(assert_ok!(policy.has_permission(&query(Some("projA"))).await));
    }

    #[tokio::test]
    async fn test_authorize_omits_missing_project_code() {
        let services = MockServices::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/authorize"))
            .and(query_param_is_missing("project_code"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"result": {"has_permission": false}})),
            )
            .expect(1)
            .mount(&services.server)
            .await;
        let policy = HttpPolicyAuthority::new(client(), services.auth_url());

        assert!(!assert_ok!(policy.has_permission(&query(None)).await));
    }

    #[tokio::test]
    async fn test_authorize_malformed_body_is_upstream() {
        let services = MockServices::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/authorize"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&services.server)
            .await;
        let policy = HttpPolicyAuthority::new(client(), services.auth_url());

        assert_err_code!(policy.has_permission(&query(None)).await, "UPSTREAM_FAILURE");
    }

    // ==================== Projects and datasets ====================

    #[tokio::test]
    async fn test_project_lookup() {
        let services = MockServices::start().await;
        services.project("p-1", "p-1", "projA", 1).await;
        let projects = HttpProjectDirectory::new(client(), services.project_url());

        let project = assert_ok!(projects.get_project("p-1").await).unwrap();
        assert_eq!(project.code, "projA");
        assert!(assert_ok!(projects.get_project("p-404").await).is_none());
    }

    #[tokio::test]
    async fn test_dataset_lookup() {
        let services = MockServices::start().await;
        services
            .dataset(
                "ds1",
                json!({"id": "ds-id-1", "code": "ds1", "creator": "bob", "project_id": "p-1"}),
            )
            .await;
        let datasets = HttpDatasetDirectory::new(client(), services.dataset_url());

        let dataset = assert_ok!(datasets.get_dataset("ds1").await).unwrap();
        assert_eq!(dataset.creator, "bob");
        assert_eq!(dataset.project_id.as_deref(), Some("p-1"));
        assert!(assert_ok!(datasets.get_dataset("missing").await).is_none());
    }
}
