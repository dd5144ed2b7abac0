//! Jobs resource integration tests

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{create_test_jwt, create_test_jwt_with_secret, TestApp};

const JOBS: &str = "/api/v1/jobs";

fn job_uri(id: &str) -> String {
    format!("{}/{}", JOBS, id)
}

fn id_of(job: &Value) -> String {
    job["id"].as_str().expect("job id").to_string()
}

// ============================================================================
// Creation
// ============================================================================
mod test_create {
    use super::*;

    #[tokio::test]
    async fn test_create_returns_201_with_pending_default() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");

        let (status, body) = app
            .send(
                Method::POST,
                JOBS,
                Some(&jwt),
                Some(json!({"company": "Acme", "position": "Engineer"})),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["company"], "Acme");
        assert_eq!(body["position"], "Engineer");
        assert_eq!(body["status"], "pending");
        assert_eq!(body["createdBy"], "user-1");
        assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
        assert!(body["createdAt"].is_string());
        assert!(body["updatedAt"].is_string());
    }

    #[tokio::test]
    async fn test_create_with_explicit_status() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");

        let body = app
            .create_job(
                &jwt,
                json!({"company": "Acme", "position": "Engineer", "status": "interview"}),
            )
            .await;

        assert_eq!(body["status"], "interview");
    }

    #[tokio::test]
    async fn test_create_trims_fields() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");

        let body = app
            .create_job(&jwt, json!({"company": "  Acme  ", "position": " Engineer "}))
            .await;

        assert_eq!(body["company"], "Acme");
        assert_eq!(body["position"], "Engineer");
    }

    #[tokio::test]
    async fn test_create_missing_position_returns_400() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");

        let (status, body) = app
            .send(Method::POST, JOBS, Some(&jwt), Some(json!({"company": "Acme"})))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (_, list) = app.send(Method::GET, JOBS, Some(&jwt), None).await;
        assert_eq!(list["count"], 0);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_fields() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");

        let cases = [
            json!({"company": "", "position": "Engineer"}),
            json!({"company": "   ", "position": "Engineer"}),
            json!({"company": "a".repeat(51), "position": "Engineer"}),
            json!({"company": "Acme", "position": "p".repeat(101)}),
            json!({"company": "Acme", "position": "Engineer", "status": "hired"}),
            json!({"company": 42, "position": "Engineer"}),
        ];

        for payload in cases {
            let (status, body) = app
                .send(Method::POST, JOBS, Some(&jwt), Some(payload.clone()))
                .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "payload {}", payload);
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_create_accepts_max_lengths() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");

        let body = app
            .create_job(
                &jwt,
                json!({"company": "c".repeat(50), "position": "p".repeat(100)}),
            )
            .await;

        assert_eq!(body["company"].as_str().unwrap().len(), 50);
        assert_eq!(body["position"].as_str().unwrap().len(), 100);
    }

    #[tokio::test]
    async fn test_create_measures_length_after_trimming() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");

        let body = app
            .create_job(
                &jwt,
                json!({
                    "company": format!("  {}  ", "c".repeat(50)),
                    "position": format!(" {} ", "p".repeat(100)),
                }),
            )
            .await;

        assert_eq!(body["company"], "c".repeat(50));
        assert_eq!(body["position"], "p".repeat(100));
    }

    #[tokio::test]
    async fn test_validation_message_names_fields() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");

        let (status, body) = app
            .send(
                Method::POST,
                JOBS,
                Some(&jwt),
                Some(json!({"company": "c".repeat(51), "position": "  "})),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "company: Company cannot exceed 50 characters; position: Position cannot be empty"
        );
    }

    #[tokio::test]
    async fn test_create_malformed_json_returns_400() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");

        let req = Request::builder()
            .method(Method::POST)
            .uri(JOBS)
            .header("authorization", format!("Bearer {}", jwt))
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, _) = app.send_request(req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

// ============================================================================
// Reads
// ============================================================================
mod test_read {
    use super::*;

    #[tokio::test]
    async fn test_get_returns_created_job() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");
        let created = app
            .create_job(&jwt, json!({"company": "Acme", "position": "Engineer"}))
            .await;

        let (status, body) = app
            .send(Method::GET, &job_uri(&id_of(&created)), Some(&jwt), None)
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, created);
    }

    #[tokio::test]
    async fn test_get_unknown_id_returns_404() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");
        let id = Uuid::new_v4().to_string();

        let (status, body) = app.send(Method::GET, &job_uri(&id), Some(&jwt), None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], format!("No job with id {}", id));
    }

    #[tokio::test]
    async fn test_malformed_id_returns_404() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");

        for method in [Method::GET, Method::DELETE] {
            let (status, _) = app
                .send(method.clone(), &job_uri("not-a-uuid"), Some(&jwt), None)
                .await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", method);
        }

        let (status, _) = app
            .send(
                Method::PATCH,
                &job_uri("not-a-uuid"),
                Some(&jwt),
                Some(json!({"status": "declined"})),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_returns_only_callers_jobs() {
        let app = TestApp::new();
        let alice = create_test_jwt("alice");
        let bob = create_test_jwt("bob");

        app.create_job(&alice, json!({"company": "Acme", "position": "Engineer"}))
            .await;
        app.create_job(&alice, json!({"company": "Globex", "position": "Analyst"}))
            .await;
        app.create_job(&bob, json!({"company": "Initech", "position": "Tester"}))
            .await;

        let (status, body) = app.send(Method::GET, JOBS, Some(&alice), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 2);
        let jobs = body["jobs"].as_array().unwrap();
        assert!(jobs.iter().all(|j| j["createdBy"] == "alice"));

        let (_, body) = app.send(Method::GET, JOBS, Some(&bob), None).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["jobs"][0]["company"], "Initech");
    }

    #[tokio::test]
    async fn test_list_empty() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");

        let (status, body) = app.send(Method::GET, JOBS, Some(&jwt), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"jobs": [], "count": 0}));
    }

    #[tokio::test]
    async fn test_other_users_job_is_not_found() {
        let app = TestApp::new();
        let alice = create_test_jwt("alice");
        let bob = create_test_jwt("bob");
        let created = app
            .create_job(&alice, json!({"company": "Acme", "position": "Engineer"}))
            .await;
        let uri = job_uri(&id_of(&created));

        let (status, _) = app.send(Method::GET, &uri, Some(&bob), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = app
            .send(Method::PATCH, &uri, Some(&bob), Some(json!({"status": "declined"})))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = app.send(Method::DELETE, &uri, Some(&bob), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = app.send(Method::GET, &uri, Some(&alice), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "pending");
    }
}

// ============================================================================
// Updates
// ============================================================================
mod test_update {
    use super::*;

    #[tokio::test]
    async fn test_patch_status_only_leaves_other_fields() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");
        let created = app
            .create_job(&jwt, json!({"company": "Acme", "position": "Engineer"}))
            .await;
        let uri = job_uri(&id_of(&created));

        let (status, body) = app
            .send(Method::PATCH, &uri, Some(&jwt), Some(json!({"status": "interview"})))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "interview");
        assert_eq!(body["company"], "Acme");
        assert_eq!(body["position"], "Engineer");
        assert_eq!(body["id"], created["id"]);
        assert_eq!(body["createdAt"], created["createdAt"]);

        let (_, fetched) = app.send(Method::GET, &uri, Some(&jwt), None).await;
        assert_eq!(fetched, body);
    }

    #[tokio::test]
    async fn test_patch_multiple_fields() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");
        let created = app
            .create_job(&jwt, json!({"company": "Acme", "position": "Engineer"}))
            .await;

        let (status, body) = app
            .send(
                Method::PATCH,
                &job_uri(&id_of(&created)),
                Some(&jwt),
                Some(json!({"company": "Globex", "position": "Lead", "status": "declined"})),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["company"], "Globex");
        assert_eq!(body["position"], "Lead");
        assert_eq!(body["status"], "declined");
    }

    #[tokio::test]
    async fn test_patch_accepts_padded_max_length() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");
        let created = app
            .create_job(&jwt, json!({"company": "Acme", "position": "Engineer"}))
            .await;

        let (status, body) = app
            .send(
                Method::PATCH,
                &job_uri(&id_of(&created)),
                Some(&jwt),
                Some(json!({"company": format!("   {}", "g".repeat(50))})),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["company"], "g".repeat(50));
    }

    #[tokio::test]
    async fn test_patch_empty_body_returns_400() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");
        let created = app
            .create_job(&jwt, json!({"company": "Acme", "position": "Engineer"}))
            .await;

        let (status, body) = app
            .send(Method::PATCH, &job_uri(&id_of(&created)), Some(&jwt), Some(json!({})))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_patch_invalid_value_leaves_job_unchanged() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");
        let created = app
            .create_job(&jwt, json!({"company": "Acme", "position": "Engineer"}))
            .await;
        let uri = job_uri(&id_of(&created));

        let (status, _) = app
            .send(
                Method::PATCH,
                &uri,
                Some(&jwt),
                Some(json!({"company": "Globex", "position": "   "})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, fetched) = app.send(Method::GET, &uri, Some(&jwt), None).await;
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_patch_unknown_id_returns_404() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");

        let (status, _) = app
            .send(
                Method::PATCH,
                &job_uri(&Uuid::new_v4().to_string()),
                Some(&jwt),
                Some(json!({"status": "declined"})),
            )
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

// ============================================================================
// Deletion
// ============================================================================
mod test_delete {
    use super::*;

    #[tokio::test]
    async fn test_delete_then_get_returns_404() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");
        let created = app
            .create_job(&jwt, json!({"company": "Acme", "position": "Engineer"}))
            .await;
        let uri = job_uri(&id_of(&created));

        let (status, _) = app.send(Method::DELETE, &uri, Some(&jwt), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = app.send(Method::GET, &uri, Some(&jwt), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, list) = app.send(Method::GET, JOBS, Some(&jwt), None).await;
        assert_eq!(list["count"], 0);
    }

    #[tokio::test]
    async fn test_delete_twice_returns_404() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");
        let created = app
            .create_job(&jwt, json!({"company": "Acme", "position": "Engineer"}))
            .await;
        let uri = job_uri(&id_of(&created));

        let (first, _) = app.send(Method::DELETE, &uri, Some(&jwt), None).await;
        let (second, _) = app.send(Method::DELETE, &uri, Some(&jwt), None).await;

        assert_eq!(first, StatusCode::OK);
        assert_eq!(second, StatusCode::NOT_FOUND);
    }
}

// ============================================================================
// Authentication boundary
// ============================================================================
mod test_auth {
    use super::*;

    #[tokio::test]
    async fn test_every_route_requires_token() {
        let app = TestApp::new();
        let id = Uuid::new_v4().to_string();

        let cases = [
            (Method::GET, JOBS.to_string(), None),
            (
                Method::POST,
                JOBS.to_string(),
                Some(json!({"company": "Acme", "position": "Engineer"})),
            ),
            (Method::GET, job_uri(&id), None),
            (Method::PATCH, job_uri(&id), Some(json!({"status": "declined"}))),
            (Method::DELETE, job_uri(&id), None),
        ];

        for (method, uri, body) in cases {
            let (status, resp) = app.send(method.clone(), &uri, None, body).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
            assert_eq!(resp["error"]["code"], "MISSING_AUTHORIZATION");
        }
    }

    #[tokio::test]
    async fn test_unauthenticated_invalid_body_returns_401_not_400() {
        let app = TestApp::new();

        let (status, _) = app
            .send(Method::POST, JOBS, None, Some(json!({"company": ""})))
            .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unauthenticated_unknown_id_returns_401_not_404() {
        let app = TestApp::new();

        let (status, _) = app.send(Method::GET, &job_uri("not-a-uuid"), None, None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_invalid_tokens_rejected() {
        let app = TestApp::new();
        let forged = create_test_jwt_with_secret("user-1", "some_other_secret");

        let (status, body) = app.send(Method::GET, JOBS, Some(&forged), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");

        let (status, _) = app.send(Method::GET, JOBS, Some("garbage"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_rejected() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");

        let req = Request::builder()
            .method(Method::GET)
            .uri(JOBS)
            .header("authorization", format!("Basic {}", jwt))
            .body(Body::empty())
            .unwrap();

        let (status, body) = app.send_request(req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_AUTHORIZATION");
    }

    #[tokio::test]
    async fn test_rejected_request_does_not_mutate() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");

        app.send(
            Method::POST,
            JOBS,
            None,
            Some(json!({"company": "Acme", "position": "Engineer"})),
        )
        .await;

        let (_, list) = app.send(Method::GET, JOBS, Some(&jwt), None).await;
        assert_eq!(list["count"], 0);
    }
}

// ============================================================================
// Unbound routes
// ============================================================================
mod test_unbound {
    use super::*;

    #[tokio::test]
    async fn test_unbound_method_on_jobs_path_is_rejected() {
        let app = TestApp::new();
        let jwt = create_test_jwt("user-1");

        let (status, _) = app
            .send(Method::PUT, &job_uri(&Uuid::new_v4().to_string()), Some(&jwt), Some(json!({})))
            .await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404_json() {
        let app = TestApp::new();

        let (status, body) = app.send(Method::GET, "/api/v1/nope", None, None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Route does not exist");
    }
}
