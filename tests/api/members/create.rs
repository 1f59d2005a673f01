use crate::helpers::{get_json_response_body, get_random_email, TestApp};
use lamfo_api::ErrorResponse;
use serde_json::json;
use test_context::test_context;

fn member_schema() -> serde_json::Value {
    json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "id": { "type": "integer", "minimum": 1 },
        "name": { "type": "string", "minLength": 1, "maxLength": 100 },
        "email": { "type": "string", "maxLength": 255 },
        "role": { "type": ["string", "null"] },
        "bio": { "type": ["string", "null"] },
        "github_username": { "type": ["string", "null"] },
        "linkedin_url": { "type": ["string", "null"] },
        "created_at": { "type": "string" },
        "updated_at": { "type": "null" },
        "projects": { "type": "array", "maxItems": 0 }
      },
      "required": [
        "id", "name", "email", "role", "bio", "github_username",
        "linkedin_url", "created_at", "updated_at", "projects"
      ]
    })
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_201_for_valid_requests(app: &mut TestApp) {
    let test_cases = [
        json!({
            "name": "Ted Crilly",
            "email": get_random_email()
        }),
        json!({
            "name": "Dougal McGuire",
            "email": get_random_email(),
            "role": "Research Assistant",
            "bio": "Curate",
            "github_username": "dougal",
            "linkedin_url": "https://linkedin.com/in/dougal"
        }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_member(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            201,
            "Failed for input: {test_case}"
        );

        let body = get_json_response_body(response).await;
        assert!(
            jsonschema::is_valid(&member_schema(), &body),
            "response does not match schema: {body}"
        );
        assert_eq!(body["name"], test_case["name"]);
        assert_eq!(body["email"], test_case["email"]);
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_409_if_email_already_registered(app: &mut TestApp) {
    let email = get_random_email();
    let first = app
        .post_member(&json!({"name": "Ted", "email": email}))
        .await;
    assert_eq!(first.status().as_u16(), 201);

    let second = app
        .post_member(&json!({"name": "Imposter", "email": email}))
        .await;
    assert_eq!(second.status().as_u16(), 409);
    assert_eq!(
        second
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialise response body to ErrorResponse")
            .error,
        "Email already registered"
    );

    let members = get_json_response_body(app.get_members(&[]).await).await;
    assert_eq!(members.as_array().unwrap().len(), 1);
}

#[test_context(TestApp)]
#[tokio::test]
async fn email_uniqueness_is_case_sensitive(app: &mut TestApp) {
    let email = format!("Ted.{}", get_random_email());
    for address in [email.clone(), email.to_lowercase()] {
        let response = app
            .post_member(&json!({"name": "Ted", "email": address}))
            .await;
        assert_eq!(response.status().as_u16(), 201, "Failed for {address}");
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_invalid_input(app: &mut TestApp) {
    let test_cases = [
        json!({"name": "", "email": get_random_email()}),
        json!({"name": "a".repeat(101), "email": get_random_email()}),
        json!({"name": "Ted", "email": "not-an-email"}),
        json!({"name": "Ted", "email": get_random_email(), "role": "r".repeat(51)}),
        json!({"name": "Ted", "email": get_random_email(), "linkedin_url": "ted"}),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_member(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Should fail with HTTP400 for input: {test_case}"
        );
        assert!(response.json::<ErrorResponse>().await.is_ok());
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_422_if_malformed_request(app: &mut TestApp) {
    let test_cases = [
        json!({"name": true, "email": get_random_email()}),
        json!({"email": get_random_email()}),
        json!({"foo": "bar"}),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_member(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "Failed for input: {test_case}"
        );
    }
}
