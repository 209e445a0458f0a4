//! Configuration loading and validation

#[cfg(test)]
mod tests {
    use bff_gateway::Config;
    use bff_gateway::config::validation::validate_service_url;
    use bff_gateway::config::{CacheBackend, Validate};
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn write_yaml(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.auth().identity_cache_ttl(), Duration::from_secs(300));
        assert!(config.auth().warn_on_legacy_params);
        assert_eq!(config.cache().backend, CacheBackend::Memory);
        assert_eq!(config.services().timeout(), Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_partial_file_keeps_defaults() {
        let file = write_yaml(
            r#"
auth:
  identity_cache_ttl: 60
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.auth().identity_cache_ttl, 60);
        assert_eq!(config.server().port, 5060);
        assert_eq!(config.services().auth_service, "http://auth.utility:5061/v1");
    }

    #[tokio::test]
    async fn test_zero_ttl_is_rejected() {
        let file = write_yaml(
            r#"
auth:
  identity_cache_ttl: 0
"#,
        );

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }

    #[tokio::test]
    async fn test_relative_service_url_is_rejected() {
        let file = write_yaml(
            r#"
services:
  project_service: "project.utility/v1"
"#,
        );

        assert!(Config::from_file(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_unknown_cache_backend_fails_to_parse() {
        let file = write_yaml(
            r#"
cache:
  backend: memcached
"#,
        );

        assert!(Config::from_file(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let err = Config::from_file("/nonexistent/gateway.yaml").await.unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_service_url_validation() {
        assert!(validate_service_url("auth_service", "https://auth.example.org/v1").is_ok());
        assert!(validate_service_url("auth_service", "ftp://auth.example.org").is_err());
        assert!(validate_service_url("auth_service", "").is_err());
    }

    #[test]
    fn test_long_ttl_is_allowed() {
        let mut config = Config::default();
        config.gateway.auth.identity_cache_ttl = 86_400;
        assert!(config.gateway.auth.validate().is_ok());
    }

    #[test]
    fn test_yaml_round_trip() {
        let yaml = Config::default().to_yaml().unwrap();
        assert!(yaml.contains("identity_cache_ttl: 300"));
        assert!(yaml.contains("backend: memory"));
    }
}
