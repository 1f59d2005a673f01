use crate::helpers::{get_json_response_body, TestApp};
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn root_reports_the_service_is_running(app: &mut TestApp) {
    let response = app.get_path("/").await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        get_json_response_body(response).await,
        json!({"message": "LAMFO API is running"})
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn health_names_the_serving_backend(app: &mut TestApp) {
    let response = app.get_path("/health").await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        get_json_response_body(response).await,
        json!({"status": "healthy", "database": "sqlite", "fallback": false})
    );

    let engine = app.database.get_engine().await.expect("engine");
    assert!(engine.schema_ready());
}
