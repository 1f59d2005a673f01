use crate::helpers::{add_member, add_project, TestApp};
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn admin_pages_list_stored_entities(app: &mut TestApp) {
    let ted = add_member(app, "Ted <Crilly>").await;
    add_project(app, "Lovely Girls Competition", &[ted]).await;

    let index = app.get_path("/admin").await;
    assert_eq!(index.status().as_u16(), 200);
    assert!(index.text().await.unwrap().contains("sqlite"));

    let members = app.get_path("/admin/members").await;
    assert_eq!(members.status().as_u16(), 200);
    let content_type = members
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/html"));
    let html = members.text().await.unwrap();
    assert!(html.contains("Ted &lt;Crilly&gt;"), "names must be escaped");

    let projects = app.get_path("/admin/projects").await;
    assert_eq!(projects.status().as_u16(), 200);
    assert!(projects
        .text()
        .await
        .unwrap()
        .contains("Lovely Girls Competition"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn admin_members_search_filter_and_sort(app: &mut TestApp) {
    for (name, email, role) in [
        ("Ted Crilly", "ted@craggy.ie", "Priest"),
        ("Dougal McGuire", "dougal@craggy.ie", "Priest"),
        ("Mrs Doyle", "doyle@parish.ie", "Housekeeper"),
    ] {
        let response = app
            .post_member(&serde_json::json!({
                "name": name,
                "email": email,
                "role": role
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201);
    }

    let html = app
        .get_path("/admin/members?q=CRAGGY&sort=name&order=desc")
        .await
        .text()
        .await
        .unwrap();
    let ted = html.find("Ted Crilly").expect("Ted should match");
    let dougal = html.find("Dougal McGuire").expect("Dougal should match");
    assert!(ted < dougal, "descending name order");
    assert!(!html.contains("Mrs Doyle"));
    assert!(html.contains(r#"<option value="Housekeeper">"#));

    let html = app
        .get_path("/admin/members?role=Housekeeper&q=")
        .await
        .text()
        .await
        .unwrap();
    assert!(html.contains("Mrs Doyle"));
    assert!(!html.contains("Ted Crilly"));
    assert!(html.contains(r#"<option value="Housekeeper" selected>"#));

    let response = app.get_path("/admin/members?sort=bio").await;
    assert_eq!(response.status().as_u16(), 400);
}

#[test_context(TestApp)]
#[tokio::test]
async fn admin_projects_search_and_status_filter(app: &mut TestApp) {
    for (title, description, status) in [
        ("Chatbot", "Conversational NLP", "active"),
        ("Forecasting", "Time series", "completed"),
        ("Dashboards", "Reporting for nlp teams", "on_hold"),
    ] {
        let response = app
            .post_project(&serde_json::json!({
                "title": title,
                "description": description,
                "status": status
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201);
    }

    let html = app
        .get_path("/admin/projects?q=nlp")
        .await
        .text()
        .await
        .unwrap();
    assert!(html.contains("Chatbot"));
    assert!(html.contains("Dashboards"));
    assert!(!html.contains("Forecasting"));

    let html = app
        .get_path("/admin/projects?status=completed")
        .await
        .text()
        .await
        .unwrap();
    assert!(html.contains("Forecasting"));
    assert!(!html.contains("Chatbot"));
    assert!(html.contains(r#"<option value="completed" selected>"#));
    for status in ["active", "on_hold", "cancelled"] {
        assert!(html.contains(&format!(r#"<option value="{status}">"#)));
    }
}
