use crate::helpers::{
    add_member, add_project, get_json_response_body, member_ids_of, TestApp,
};
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn member_ids_replace_membership_only_when_present(app: &mut TestApp) {
    let ted = add_member(app, "Ted").await;
    let dougal = add_member(app, "Dougal").await;
    let jack = add_member(app, "Jack").await;
    let project = add_project(app, "Parish Fete", &[ted, dougal]).await;
    let id = project["id"].as_i64().unwrap();

    let retitled = get_json_response_body(
        app.put_project(id, &json!({"title": "Fun Run"})).await,
    )
    .await;
    assert_eq!(retitled["title"], "Fun Run");
    assert_eq!(member_ids_of(&retitled), vec![ted, dougal]);
    assert!(retitled["updated_at"].is_string());

    let restaffed = get_json_response_body(
        app.put_project(id, &json!({"member_ids": [jack, 9999999]}))
            .await,
    )
    .await;
    assert_eq!(member_ids_of(&restaffed), vec![jack]);
    assert_eq!(restaffed["title"], "Fun Run");

    let emptied = get_json_response_body(
        app.put_project(id, &json!({"member_ids": []})).await,
    )
    .await;
    assert!(member_ids_of(&emptied).is_empty());
}

#[test_context(TestApp)]
#[tokio::test]
async fn status_is_free_text_and_nullable(app: &mut TestApp) {
    let project = add_project(app, "Chatbot", &[]).await;
    let id = project["id"].as_i64().unwrap();

    let paused = get_json_response_body(
        app.put_project(id, &json!({"status": "paused for exams"})).await,
    )
    .await;
    assert_eq!(paused["status"], "paused for exams");

    let cleared = get_json_response_body(
        app.put_project(id, &json!({"status": null, "description": null}))
            .await,
    )
    .await;
    assert!(cleared["status"].is_null());
    assert!(cleared["description"].is_null());
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_unknown_project(app: &mut TestApp) {
    let response = app.put_project(9999999, &json!({"title": "Nowhere"})).await;

    assert_eq!(response.status().as_u16(), 404);
}
