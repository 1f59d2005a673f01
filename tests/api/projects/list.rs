use crate::helpers::{add_project, get_json_response_body, TestApp};
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_empty_collection_if_no_projects(app: &mut TestApp) {
    let response = app.get_projects(&[]).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(get_json_response_body(response).await, json!([]));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_page_in_insertion_order(app: &mut TestApp) {
    for title in ["Sistema", "Análise", "Chatbot"] {
        add_project(app, title, &[]).await;
    }

    let response = app.get_projects(&[("skip", "1"), ("limit", "5")]).await;
    assert_eq!(response.status().as_u16(), 200);

    let titles: Vec<String> = get_json_response_body(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|project| project["title"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(titles, ["Análise", "Chatbot"]);

    let response = app.get_projects(&[("limit", "0")]).await;
    assert_eq!(response.status().as_u16(), 400);
}
