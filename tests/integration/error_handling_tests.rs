//! Error taxonomy as seen by HTTP clients

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use bff_gateway::GatewayError;
    use serde_json::Value;

    async fn body_of(err: &GatewayError) -> Value {
        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (GatewayError::unauthenticated("x"), StatusCode::UNAUTHORIZED),
            (GatewayError::bad_context("x"), StatusCode::BAD_REQUEST),
            (GatewayError::forbidden("x"), StatusCode::FORBIDDEN),
            (GatewayError::not_found("x"), StatusCode::NOT_FOUND),
            (GatewayError::upstream("x"), StatusCode::INTERNAL_SERVER_ERROR),
            (GatewayError::config("x"), StatusCode::INTERNAL_SERVER_ERROR),
            (GatewayError::internal("x"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.status_code(), status, "{}", err);
        }
    }

    #[actix_web::test]
    async fn test_client_errors_keep_their_message() {
        let body = body_of(&GatewayError::forbidden("No access to dataset ds1")).await;
        assert_eq!(body["error"]["code"], "FORBIDDEN");
        assert!(
            body["error"]["message"]
                .as_str()
                .unwrap()
                .contains("No access to dataset ds1")
        );
        assert!(body["error"]["timestamp"].is_i64());
    }

    #[actix_web::test]
    async fn test_upstream_details_are_hidden() {
        let body = body_of(&GatewayError::upstream("http://auth.internal:5061 refused")).await;
        assert_eq!(body["error"]["code"], "UPSTREAM_FAILURE");
        let message = body["error"]["message"].as_str().unwrap();
        assert!(!message.contains("auth.internal"));
    }

    #[test]
    fn test_upstream_classification() {
        assert!(GatewayError::upstream("x").is_upstream());
        assert!(!GatewayError::forbidden("x").is_upstream());
    }
}
