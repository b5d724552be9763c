pub mod health;
pub mod params;

use axum::{routing::get, Router};

use crate::analytics;
use crate::projects;
use crate::resources;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resources",
            get(resources::handlers::handle_list_resources)
                .post(resources::handlers::handle_create_resource),
        )
        .route(
            "/api/v1/projects",
            get(projects::handlers::handle_list_projects),
        )
        .route(
            "/api/v1/analytics/overview",
            get(analytics::handlers::handle_overview),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::backend::testing::InMemorySource;

    fn source() -> InMemorySource {
        InMemorySource {
            resources: serde_json::from_value(json!([
                {
                    "ResourceID": 1, "Name": "Jane Doe", "Rate": 90,
                    "Domain": ["Fintech"], "AvailableDate": "2024-05-01",
                    "Skills": {"Python": {"level": "expert"}}
                },
                {
                    "ResourceID": 2, "Name": "Bob Stone", "Rate": 70,
                    "Domain": ["Retail"], "AvailableDate": "2024-08-01",
                    "Skills": {"Java": {"level": "mid"}}
                }
            ]))
            .unwrap(),
            projects: serde_json::from_value(json!([
                {
                    "ProjectID": 10, "ProjectName": "Alpha", "Technology": ["React"],
                    "ProjectStartDate": "2024-01-10",
                    "RequiredResources": [{"Role": "Frontend Dev", "Quantity": 2, "Skills": {"React": {"level": "senior"}}}]
                },
                {
                    "ProjectID": 11, "ProjectName": "Beta", "Technology": ["Rust"],
                    "ProjectStartDate": "2024-03-01"
                }
            ]))
            .unwrap(),
            ..Default::default()
        }
    }

    fn app_with(source: Arc<InMemorySource>) -> Router {
        build_router(AppState { records: source })
    }

    fn app() -> Router {
        app_with(Arc::new(source()))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_resources_unfiltered() {
        let (status, body) = get_json(app(), "/api/v1/resources?org_id=org_1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["matched"], 2);
        assert_eq!(body["records"][0]["Name"], "Jane Doe");
        assert_eq!(body["records"][1]["Name"], "Bob Stone");
    }

    #[tokio::test]
    async fn test_list_resources_with_query_and_date() {
        let (_, body) = get_json(app(), "/api/v1/resources?org_id=org_1&q=Fintech%20EXPERT").await;
        assert_eq!(body["matched"], 1);
        assert_eq!(body["records"][0]["ResourceID"], 1);

        let (_, body) = get_json(app(), "/api/v1/resources?org_id=org_1&q=python&from=2024-06-01").await;
        assert_eq!(body["matched"], 0);
        assert_eq!(body["total"], 2);
    }

    #[tokio::test]
    async fn test_empty_from_param_is_ignored() {
        let (_, body) = get_json(app(), "/api/v1/resources?org_id=org_1&q=&from=").await;
        assert_eq!(body["matched"], 2);
    }

    #[tokio::test]
    async fn test_missing_org_is_bad_request() {
        let (status, _) = get_json(app(), "/api/v1/resources").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_blank_org_is_rejected_on_every_route() {
        let source = Arc::new(source());
        for uri in [
            "/api/v1/resources?org_id=",
            "/api/v1/resources?org_id=%20%20",
            "/api/v1/projects?org_id=%20",
            "/api/v1/analytics/overview?org_id=",
            "/api/v1/analytics/overview?org_id=%20&as_of=2024-06-01",
        ] {
            let (status, _) = get_json(app_with(source.clone()), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        }

        let (status, _) = post_json(
            app_with(source.clone()),
            "/api/v1/resources?org_id=%20",
            json!({"Name": "Jane", "Rate": 1, "AvailableDate": "2024-05-01", "Domain": ["Retail"]}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(source.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_org_id_is_trimmed_before_the_fetch() {
        let source = Arc::new(source());
        let (status, _) = post_json(
            app_with(source.clone()),
            "/api/v1/resources?org_id=%20org_1%20",
            json!({"Name": "Jane", "Rate": 1, "AvailableDate": "2024-05-01", "Domain": ["Retail"]}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(source.created.lock().unwrap()[0].0, "org_1");
    }

    #[tokio::test]
    async fn test_list_projects_filters_by_role_skill_and_start_date() {
        let (_, body) = get_json(app(), "/api/v1/projects?org_id=org_1&q=react&from=2024-01-01").await;
        assert_eq!(body["matched"], 1);
        assert_eq!(body["records"][0]["ProjectName"], "Alpha");

        let (_, body) = get_json(app(), "/api/v1/projects?org_id=org_1&q=react&from=2024-02-01").await;
        assert_eq!(body["matched"], 0);

        let (_, body) = get_json(app(), "/api/v1/projects?org_id=org_1&q=frontend").await;
        assert_eq!(body["matched"], 1);
    }

    #[tokio::test]
    async fn test_backend_failure_is_bad_gateway() {
        let failing = Arc::new(InMemorySource {
            fail: true,
            ..Default::default()
        });
        let (status, body) = get_json(app_with(failing), "/api/v1/projects?org_id=org_1").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "BACKEND_ERROR");
    }

    #[tokio::test]
    async fn test_create_resource_forwards_normalized_submission() {
        let source = Arc::new(source());
        let (status, body) = post_json(
            app_with(source.clone()),
            "/api/v1/resources?org_id=org_1",
            json!({
                "Name": "New Hire",
                "Rate": "60",
                "AvailableDate": "2024-09-01",
                "Domain": ["Health"],
                "Skills": {"Go": {"level": "mid"}, "": {"level": ""}}
            }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "created");

        let created = source.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].0, "org_1");
        assert_eq!(created[0].1.name, "New Hire");
        assert_eq!(created[0].1.org_id, "org_1");
        assert_eq!(created[0].1.skills.len(), 1);
    }

    #[tokio::test]
    async fn test_create_resource_validation_error() {
        let source = Arc::new(source());
        let (status, body) = post_json(
            app_with(source.clone()),
            "/api/v1/resources?org_id=org_1",
            json!({"Name": "", "Domain": []}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.contains("Name is required"));
        assert!(message.contains("Domain is required"));
        assert!(source.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_analytics_overview() {
        let (status, body) =
            get_json(app(), "/api/v1/analytics/overview?org_id=org_1&as_of=2024-06-01").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["as_of"], "2024-06-01");
        assert_eq!(body["total_projects"], 2);
        assert_eq!(body["projects_needing_resources"], 1);
        assert_eq!(body["total_resources"], 2);
        assert_eq!(body["available_resources"], 1);
        assert_eq!(body["required_by_role"][0]["name"], "Frontend Dev");
        assert_eq!(body["required_by_role"][0]["count"], 2);
    }
}
