//! Gate scenarios end to end: actix app, real clients, mocked services

#[cfg(test)]
mod tests {
    use crate::common::{MockServices, TokenFactory, UserFactory};
    use actix_web::http::StatusCode;
    use actix_web::test::{TestRequest, call_service, init_service, read_body_json};
    use actix_web::{HttpResponse, web};
    use bff_gateway::auth::{Authorized, PermissionRule};
    use bff_gateway::server::HttpServer;
    use serde_json::{Value, json};

    struct ViewGreenroomFile;

    impl PermissionRule for ViewGreenroomFile {
        const RESOURCE: &'static str = "file";
        const ZONE: &'static str = "greenroom";
        const OPERATION: &'static str = "view";
    }

    async fn list_files(auth: Authorized<ViewGreenroomFile>) -> HttpResponse {
        HttpResponse::Ok().json(json!({"username": auth.identity.username(), "files": []}))
    }

    macro_rules! app {
        ($services:expr) => {
            init_service(
                HttpServer::create_app(web::Data::new($services.app_state().await))
                    .route("/projects/{project_code}/files", web::get().to(list_files)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_contributor_allowed_reaches_handler() {
        let services = MockServices::start().await;
        services.active_user("alice").await;
        services.authorize("contributor", true, 1).await;
        let app = app!(services);

        let req = TestRequest::get()
            .uri("/projects/projA/files")
            .insert_header(("Authorization", TokenFactory::bearer("alice", &["projA-contributor"])))
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["username"], "alice");
    }

    #[actix_web::test]
    async fn test_contributor_denied_is_forbidden() {
        let services = MockServices::start().await;
        services.active_user("alice").await;
        services.authorize("contributor", false, 1).await;
        let app = app!(services);

        let req = TestRequest::get()
            .uri("/projects/projA/files")
            .insert_header(("Authorization", TokenFactory::bearer("alice", &["projA-contributor"])))
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "FORBIDDEN");
        assert!(body.get("files").is_none());
    }

    #[actix_web::test]
    async fn test_authorize_outage_fails_closed() {
        let services = MockServices::start().await;
        services.active_user("alice").await;
        let app = app!(services);

        // No /authorize mock: the service answers 404.
        let req = TestRequest::get()
            .uri("/projects/projA/files")
            .insert_header(("Authorization", TokenFactory::bearer("alice", &["projA-contributor"])))
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_conflicting_project_params_make_no_remote_calls() {
        let services = MockServices::start().await;
        services.active_user("alice").await;
        services.authorize("contributor", true, 0).await;
        services.project("p-1", "p-1", "projA", 0).await;
        let state = web::Data::new(services.app_state().await);
        let app = init_service(HttpServer::create_app(state).route(
            "/projects/{project_code}/{project_id}/files",
            web::get().to(list_files),
        ))
        .await;

        let req = TestRequest::get()
            .uri("/projects/projA/p-1/files")
            .insert_header(("Authorization", TokenFactory::bearer("alice", &["projA-contributor"])))
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "BAD_CONTEXT");
    }

    #[actix_web::test]
    async fn test_identity_is_cached_across_requests() {
        let services = MockServices::start().await;
        services.active_user("alice").await;
        let app = app!(services);

        for _ in 0..3 {
            let req = TestRequest::get()
                .uri("/v1/users/me")
                .insert_header(("Authorization", TokenFactory::bearer("alice", &["projA-admin"])))
                .to_request();
            let resp = call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }
        // `active_user` expects exactly one directory call; verified on drop.
    }

    #[actix_web::test]
    async fn test_inactive_user_is_unauthorized() {
        let services = MockServices::start().await;
        services
            .user("dora", UserFactory::with_status("dora", "disabled"), 1)
            .await;
        let app = app!(services);

        let req = TestRequest::get()
            .uri("/v1/users/me")
            .insert_header(("Authorization", TokenFactory::bearer("dora", &[])))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_directory_outage_is_server_error() {
        let services = MockServices::start().await;
        wiremock::Mock::given(wiremock::matchers::path("/auth/v1/admin/user"))
            .respond_with(wiremock::ResponseTemplate::new(500))
            .mount(&services.server)
            .await;
        let app = app!(services);

        let req = TestRequest::get()
            .uri("/v1/users/me")
            .insert_header(("Authorization", TokenFactory::bearer("alice", &[])))
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UPSTREAM_FAILURE");
    }

    #[actix_web::test]
    async fn test_permission_check_with_legacy_project_id() {
        let services = MockServices::start().await;
        services.active_user("alice").await;
        services.project("p-9", "p-9", "projNine", 1).await;
        services.authorize("collaborator", true, 1).await;
        let app = app!(services);

        let req = TestRequest::post()
            .uri("/v1/permissions/check")
            .insert_header(("Authorization", TokenFactory::bearer("alice", &["projNine-collaborator"])))
            .set_json(json!({
                "resource": "folder",
                "zone": "core",
                "operation": "create",
                "project_geid": "p-9"
            }))
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["data"]["allowed"], true);
        assert_eq!(body["data"]["project_code"], "projNine");
    }

    #[actix_web::test]
    async fn test_dataset_route_creator_wins() {
        let services = MockServices::start().await;
        services.active_user("alice").await;
        services
            .dataset(
                "ds1",
                json!({"id": "ds-id-1", "code": "ds1", "creator": "alice", "project_id": "p-1"}),
            )
            .await;
        let app = app!(services);

        let req = TestRequest::get()
            .uri("/v1/datasets/ds1")
            .insert_header(("Authorization", TokenFactory::bearer("alice", &[])))
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["data"]["code"], "ds1");
    }

    #[actix_web::test]
    async fn test_dataset_route_project_admin() {
        let services = MockServices::start().await;
        services.active_user("alice").await;
        services.project("projA", "p-1", "projA", 1).await;
        services
            .dataset(
                "ds1",
                json!({"id": "ds-id-1", "code": "ds1", "creator": "bob", "project_id": "p-1"}),
            )
            .await;
        let app = app!(services);

        let req = TestRequest::get()
            .uri("/v1/datasets/ds1")
            .insert_header(("Authorization", TokenFactory::bearer("alice", &["projA-admin"])))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_dataset_route_stranger_and_missing() {
        let services = MockServices::start().await;
        services.user("alice", UserFactory::active("alice"), 1).await;
        services
            .dataset(
                "ds1",
                json!({"id": "ds-id-1", "code": "ds1", "creator": "bob", "project_id": "p-1"}),
            )
            .await;
        let app = app!(services);

        let req = TestRequest::get()
            .uri("/v1/datasets/ds1")
            .insert_header(("Authorization", TokenFactory::bearer("alice", &["projB-contributor"])))
            .to_request();
        assert_eq!(call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

        let req = TestRequest::get()
            .uri("/v1/datasets/nope")
            .insert_header(("Authorization", TokenFactory::bearer("alice", &[])))
            .to_request();
        assert_eq!(call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
