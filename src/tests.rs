#[cfg(test)]
mod integration_tests {
    use crate::cli::commands::{check, export::render_catalog};
    use crate::cli::ExportFormat;
    use crate::schemas::HealthResponse;
    use crate::test_utils::test_utils::{setup_dist_dir, setup_test_app, BUNDLE_JS, INDEX_HTML};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::Catalog;

    #[tokio::test]
    async fn test_health_check() {
        let dist = setup_dist_dir();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.sections, 6);
        assert_eq!(body.citations, 4);
    }

    #[tokio::test]
    async fn test_serves_index_page() {
        let dist = setup_dist_dir();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        let response = server.get("/index.html").await;
        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), INDEX_HTML);

        let root = server.get("/").await;
        root.assert_status(StatusCode::OK);
        assert_eq!(root.text(), INDEX_HTML);
    }

    #[tokio::test]
    async fn test_serves_static_asset() {
        let dist = setup_dist_dir();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        let response = server.get("/frontend.js").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), BUNDLE_JS);
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let dist = setup_dist_dir();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        let response = server.get("/reasoning/syllogisms").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), INDEX_HTML);
    }

    #[test]
    fn test_check_builtin_catalog() {
        assert!(check(None).is_ok());
    }

    #[test]
    fn test_check_rejects_broken_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut catalog = Catalog::builtin();
        catalog.resources[0].citation = "99".to_string();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, serde_json::to_string(&catalog).unwrap()).unwrap();

        let err = check(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("1 issue"));
    }

    #[test]
    fn test_export_round_trips() {
        let catalog = Catalog::builtin();

        let json = render_catalog(&catalog, ExportFormat::Json).unwrap();
        let parsed: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, catalog);

        let yaml = render_catalog(&catalog, ExportFormat::Yaml).unwrap();
        let parsed: Catalog = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, catalog);
    }
}
