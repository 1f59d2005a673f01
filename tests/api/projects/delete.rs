use crate::helpers::{add_member, add_project, get_json_response_body, TestApp};
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_delete_project_and_keep_its_members(app: &mut TestApp) {
    let ted = add_member(app, "Ted").await;
    let project = add_project(app, "Parish Fete", &[ted]).await;
    let id = project["id"].as_i64().unwrap();

    let response = app.delete_project(id).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        get_json_response_body(response).await,
        json!({"message": "Project deleted successfully"})
    );
    assert_eq!(app.get_project(id).await.status().as_u16(), 404);

    let member = get_json_response_body(app.get_member(ted).await).await;
    assert_eq!(member["projects"], json!([]));

    assert_eq!(app.delete_project(id).await.status().as_u16(), 404);
}
