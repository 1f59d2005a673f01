use crate::helpers::{
    add_member, add_project, get_json_response_body, member_ids_of, TestApp,
};
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_delete_member_and_keep_its_projects(app: &mut TestApp) {
    let ted = add_member(app, "Ted").await;
    let dougal = add_member(app, "Dougal").await;
    let project = add_project(app, "Parish Fete", &[ted, dougal]).await;
    let project_id = project["id"].as_i64().unwrap();

    let response = app.delete_member(ted).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        get_json_response_body(response).await,
        json!({"message": "Member deleted successfully"})
    );

    assert_eq!(app.get_member(ted).await.status().as_u16(), 404);

    let response = app.get_project(project_id).await;
    assert_eq!(response.status().as_u16(), 200);
    let project = get_json_response_body(response).await;
    assert_eq!(member_ids_of(&project), vec![dougal]);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_unknown_member(app: &mut TestApp) {
    let response = app.delete_member(9999999).await;

    assert_eq!(response.status().as_u16(), 404);
}
