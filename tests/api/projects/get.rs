use crate::helpers::{add_member, add_project, get_json_response_body, TestApp};
use lamfo_api::ErrorResponse;
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_embed_member_summaries(app: &mut TestApp) {
    let response = app
        .post_member(&json!({
            "name": "Ted",
            "email": "ted@craggy.ie",
            "role": "Researcher",
            "bio": "Not to be embedded"
        }))
        .await;
    let ted = get_json_response_body(response).await["id"]
        .as_i64()
        .unwrap();
    let project = add_project(app, "Parish Fete", &[ted]).await;

    let response = app.get_project(project["id"].as_i64().unwrap()).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_json_response_body(response).await;
    assert_eq!(body, project);
    assert_eq!(
        body["members"],
        json!([{
            "id": ted,
            "name": "Ted",
            "email": "ted@craggy.ie",
            "role": "Researcher"
        }])
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_unknown_project(app: &mut TestApp) {
    add_member(app, "Ted").await;

    let response = app.get_project(9999999).await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(
        response.json::<ErrorResponse>().await.unwrap().error,
        "Project not found"
    );
}
