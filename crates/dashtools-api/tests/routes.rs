use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use dashtools_api::ApiServer;
use dashtools_config::DashboardConfig;
use dashtools_plugins::{Component, PluginDescriptor, PluginMetadata, PluginRegistry};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    ApiServer::from_config(DashboardConfig::default())
        .unwrap()
        .router()
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_plugins_in_registration_order() {
    let (status, body) = get(app(), "/api/plugins").await;
    assert_eq!(status, StatusCode::OK);

    let plugins = body.as_array().unwrap();
    assert_eq!(plugins.len(), 2);
    assert_eq!(plugins[0]["id"], "example");
    assert_eq!(plugins[0]["category"], "Utilities");
    assert_eq!(plugins[0]["version"], "1.0.0");
    assert_eq!(plugins[1]["id"], "database-admin");
}

#[tokio::test]
async fn test_get_plugin() {
    let (status, body) = get(app(), "/api/plugins/database-admin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Database Admin");
    assert_eq!(body["category"], "Database");
}

#[tokio::test]
async fn test_get_unknown_plugin_is_404() {
    let (status, body) = get(app(), "/api/plugins/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({ "error": "Plugin not found" }));
}

#[tokio::test]
async fn test_categories() {
    let (status, body) = get(app(), "/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!(["Database", "Utilities"]));

    let (status, body) = get(app(), "/api/categories/Database/plugins").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], "database-admin");

    let (_, body) = get(app(), "/api/categories/Nonexistent/plugins").await;
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_themes_report_configured_default() {
    let config = DashboardConfig {
        default_theme: "everforest".to_string(),
        default_theme_variant: "light".to_string(),
        ..Default::default()
    };
    let app = ApiServer::from_config(config).unwrap().router();

    let (status, body) = get(app, "/api/themes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["themes"].as_array().unwrap().len(), 4);
    assert_eq!(body["default"]["theme"], "everforest");
    assert_eq!(body["default"]["variant"], "light");
}

#[tokio::test]
async fn test_invalid_configured_default_falls_back() {
    let config = DashboardConfig {
        default_theme: "solarized".to_string(),
        ..Default::default()
    };
    let app = ApiServer::from_config(config).unwrap().router();

    let (_, body) = get(app, "/api/themes").await;
    assert_eq!(body["default"]["theme"], "rose-pine");
    assert_eq!(body["default"]["variant"], "dark");
}

#[tokio::test]
async fn test_custom_registry() {
    let registry = PluginRegistry::builder()
        .register(PluginDescriptor::new(
            PluginMetadata::new("notes", "Notes", "Scratch pad", "Utilities", "📝"),
            Component("Notes"),
        ))
        .unwrap()
        .build();
    let app = ApiServer::new(DashboardConfig::default(), registry).router();

    let (_, body) = get(app, "/api/plugins").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert!(body[0].get("version").is_none());
}

#[tokio::test]
async fn test_openapi_document() {
    let (status, body) = get(app(), "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/plugins/{id}").is_some());
}

#[tokio::test]
async fn test_unrouted_path_passes_through_logging() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/settings")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_percent_encoded_plugin_id_is_decoded() {
    let (status, body) = get(app(), "/api/plugins/database%2Dadmin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "database-admin");
}
