use std::{path::PathBuf, sync::Arc};

use lamfo_api::{
    app_state::AppState,
    services::{
        data_stores::{SqlMemberStore, SqlProjectStore},
        database::{Database, Settings},
    },
    utils::constants::test,
    Application,
};
use reqwest::Response;
use serde_json::Value;
use test_context::AsyncTestContext;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub database: Arc<Database>,
    pub http_client: reqwest::Client,
    pub db_path: PathBuf,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_path =
            std::env::temp_dir().join(format!("lamfo-api-{}.db", Uuid::new_v4()));
        let settings = Settings::embedded(format!(
            "sqlite://{}?mode=rwc",
            db_path.display()
        ));
        let database = Arc::new(Database::new(settings));
        database
            .get_engine()
            .await
            .expect("Failed to provision test database");

        let app_state = AppState::new(
            Arc::new(SqlMemberStore::new(database.clone())),
            Arc::new(SqlProjectStore::new(database.clone())),
            database.clone(),
        );

        let app = Application::build(app_state, test::APP_ADDRESS, &[])
            .await
            .expect("Failed to build app");
        let address = format!("http://{}", app.address.clone());

        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run());

        let http_client = reqwest::Client::builder()
            .build()
            .expect("Failed to build HTTP client");

        Self {
            address,
            database,
            http_client,
            db_path,
        }
    }

    pub async fn get_path(&self, path: &str) -> Response {
        self.http_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_member<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/members", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_members(&self, query: &[(&str, &str)]) -> Response {
        self.http_client
            .get(format!("{}/members", &self.address))
            .query(query)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_member(&self, member_id: i64) -> Response {
        self.get_path(&format!("/members/{member_id}")).await
    }

    pub async fn put_member<Body>(&self, member_id: i64, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .put(format!("{}/members/{}", &self.address, member_id))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_member(&self, member_id: i64) -> Response {
        self.http_client
            .delete(format!("{}/members/{}", &self.address, member_id))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_project<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/projects", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_projects(&self, query: &[(&str, &str)]) -> Response {
        self.http_client
            .get(format!("{}/projects", &self.address))
            .query(query)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_project(&self, project_id: i64) -> Response {
        self.get_path(&format!("/projects/{project_id}")).await
    }

    pub async fn put_project<Body>(
        &self,
        project_id: i64,
        body: &Body,
    ) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .put(format!("{}/projects/{}", &self.address, project_id))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_project(&self, project_id: i64) -> Response {
        self.http_client
            .delete(format!("{}/projects/{}", &self.address, project_id))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::new().await
    }

    async fn teardown(self) {
        for suffix in ["", "-wal", "-shm"] {
            let _ =
                std::fs::remove_file(format!("{}{suffix}", self.db_path.display()));
        }
    }
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}

pub async fn get_json_response_body(response: Response) -> Value {
    let body: Value = response
        .json()
        .await
        .expect("failed to parse response body JSON");
    body
}

pub async fn add_member(app: &TestApp, name: &str) -> i64 {
    let response = app
        .post_member(&serde_json::json!({
            "name": name,
            "email": get_random_email()
        }))
        .await;

    assert_eq!(
        response.status().as_u16(),
        201,
        "Failed to add member with name: {name}"
    );
    get_json_response_body(response)
        .await
        .get("id")
        .expect("No id in response")
        .as_i64()
        .expect("id should be an integer")
}

pub async fn add_project(app: &TestApp, title: &str, member_ids: &[i64]) -> Value {
    let response = app
        .post_project(&serde_json::json!({
            "title": title,
            "member_ids": member_ids
        }))
        .await;

    assert_eq!(
        response.status().as_u16(),
        201,
        "Failed to add project with title: {title}"
    );
    get_json_response_body(response).await
}

pub fn member_ids_of(project: &Value) -> Vec<i64> {
    project["members"]
        .as_array()
        .expect("members should be an array")
        .iter()
        .map(|member| member["id"].as_i64().expect("member id"))
        .collect()
}
