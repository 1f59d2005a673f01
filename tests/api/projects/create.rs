use crate::helpers::{
    add_member, get_json_response_body, member_ids_of, TestApp,
};
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_201_with_resolved_members(app: &mut TestApp) {
    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "id": { "type": "integer", "minimum": 1 },
        "title": { "type": "string", "minLength": 1, "maxLength": 200 },
        "description": { "type": ["string", "null"] },
        "status": { "type": ["string", "null"] },
        "github_url": { "type": ["string", "null"] },
        "demo_url": { "type": ["string", "null"] },
        "created_at": { "type": "string" },
        "updated_at": { "type": "null" },
        "members": {
          "type": "array",
          "items": {
            "type": "object",
            "properties": {
              "id": { "type": "integer" },
              "name": { "type": "string" },
              "email": { "type": "string" },
              "role": { "type": ["string", "null"] }
            },
            "required": ["id", "name", "email", "role"],
            "additionalProperties": false
          }
        }
      },
      "required": [
        "id", "title", "description", "status", "github_url", "demo_url",
        "created_at", "updated_at", "members"
      ]
    });

    let ted = add_member(app, "Ted").await;
    let dougal = add_member(app, "Dougal").await;

    let response = app
        .post_project(&json!({
            "title": "Sistema de Recomendação",
            "description": "Recommendations with machine learning",
            "github_url": "https://github.com/lamfo/recommendation-system",
            "member_ids": [ted, dougal]
        }))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let body = get_json_response_body(response).await;
    assert!(
        jsonschema::is_valid(&schema, &body),
        "response does not match schema: {body}"
    );
    assert_eq!(body["status"], "active");
    assert_eq!(member_ids_of(&body), vec![ted, dougal]);
}

#[test_context(TestApp)]
#[tokio::test]
async fn unknown_member_ids_are_ignored(app: &mut TestApp) {
    let response = app
        .post_project(&json!({"title": "Ghost Town", "member_ids": [9999999]}))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body = get_json_response_body(response).await;
    assert!(member_ids_of(&body).is_empty());
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_invalid_input(app: &mut TestApp) {
    let test_cases = [
        json!({"title": ""}),
        json!({"title": "t".repeat(201)}),
        json!({"title": "Chatbot", "status": "s".repeat(51)}),
        json!({"title": "Chatbot", "demo_url": "demo"}),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_project(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Should fail with HTTP400 for input: {test_case}"
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_422_if_malformed_request(app: &mut TestApp) {
    let test_cases = [
        json!({"description": "no title"}),
        json!({"title": "Chatbot", "member_ids": "1,2"}),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_project(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "Failed for input: {test_case}"
        );
    }
}
