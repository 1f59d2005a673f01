use crate::helpers::{get_json_response_body, get_random_email, TestApp};
use serde_json::json;
use test_context::test_context;

async fn create(app: &TestApp, email: &str) -> serde_json::Value {
    let response = app
        .post_member(&json!({
            "name": "Ted",
            "email": email,
            "role": "Researcher",
            "bio": "Priest"
        }))
        .await;
    assert_eq!(response.status().as_u16(), 201);
    get_json_response_body(response).await
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_only_change_supplied_fields(app: &mut TestApp) {
    let email = get_random_email();
    let created = create(app, &email).await;
    let id = created["id"].as_i64().unwrap();

    let response = app.put_member(id, &json!({"name": "Father Ted"})).await;
    assert_eq!(response.status().as_u16(), 200);

    let updated = get_json_response_body(response).await;
    assert_eq!(updated["name"], "Father Ted");
    assert_eq!(updated["email"], email.as_str());
    assert_eq!(updated["role"], "Researcher");
    assert_eq!(updated["bio"], "Priest");
    assert_eq!(updated["created_at"], created["created_at"]);
    assert!(updated["updated_at"].is_string());

    let fetched = get_json_response_body(app.get_member(id).await).await;
    assert_eq!(fetched, updated);
}

#[test_context(TestApp)]
#[tokio::test]
async fn explicit_null_clears_a_field(app: &mut TestApp) {
    let created = create(app, &get_random_email()).await;
    let id = created["id"].as_i64().unwrap();

    let updated = get_json_response_body(
        app.put_member(id, &json!({"role": null})).await,
    )
    .await;

    assert!(updated["role"].is_null());
    assert_eq!(updated["bio"], "Priest");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_409_when_taking_another_members_email(
    app: &mut TestApp,
) {
    let taken = get_random_email();
    create(app, &taken).await;
    let other = create(app, &get_random_email()).await;

    let response = app
        .put_member(other["id"].as_i64().unwrap(), &json!({"email": taken}))
        .await;

    assert_eq!(response.status().as_u16(), 409);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_or_400_for_bad_targets(app: &mut TestApp) {
    let response = app.put_member(9999999, &json!({"name": "Nobody"})).await;
    assert_eq!(response.status().as_u16(), 404);

    let created = create(app, &get_random_email()).await;
    let response = app
        .put_member(created["id"].as_i64().unwrap(), &json!({"name": ""}))
        .await;
    assert_eq!(response.status().as_u16(), 400);
}
