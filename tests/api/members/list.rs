use crate::helpers::{add_member, get_json_response_body, TestApp};
use serde_json::json;
use test_context::test_context;

async fn names(app: &TestApp, query: &[(&str, &str)]) -> Vec<String> {
    let response = app.get_members(query).await;
    assert_eq!(response.status().as_u16(), 200, "Failed for {query:?}");
    get_json_response_body(response)
        .await
        .as_array()
        .expect("list should be an array")
        .iter()
        .map(|member| member["name"].as_str().unwrap().to_owned())
        .collect()
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_empty_collection_if_no_members(app: &mut TestApp) {
    let response = app.get_members(&[]).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(get_json_response_body(response).await, json!([]));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_page_in_insertion_order(app: &mut TestApp) {
    for name in ["Ted", "Dougal", "Jack"] {
        add_member(app, name).await;
    }

    assert_eq!(names(app, &[]).await, ["Ted", "Dougal", "Jack"]);
    assert_eq!(
        names(app, &[("skip", "0"), ("limit", "2")]).await,
        ["Ted", "Dougal"]
    );
    assert_eq!(names(app, &[("skip", "2"), ("limit", "2")]).await, ["Jack"]);
    assert!(names(app, &[("skip", "10")]).await.is_empty());
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_for_out_of_range_paging(app: &mut TestApp) {
    let test_cases = [
        [("skip", "-1"), ("limit", "10")],
        [("skip", "0"), ("limit", "0")],
        [("skip", "0"), ("limit", "1001")],
    ];

    for query in test_cases.iter() {
        let response = app.get_members(query).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Should fail with HTTP400 for query: {query:?}"
        );
    }
}
