pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
    Router,
};

use crate::applications::handlers as applications;
use crate::catalog::handlers as catalog;
use crate::matching::handlers as matching;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Skills
        .route("/api/v1/skills", get(catalog::handle_list_skills))
        .route(
            "/api/v1/skills/categories",
            get(catalog::handle_skill_categories),
        )
        // Users & profiles
        .route("/api/v1/users/sign-in", post(profile::handle_sign_in))
        .route("/api/v1/users/:id", get(profile::handle_get_user))
        .route(
            "/api/v1/users/:id/profile",
            put(profile::handle_update_profile),
        )
        // Jobs
        .route(
            "/api/v1/jobs",
            get(catalog::handle_list_jobs).post(catalog::handle_create_job),
        )
        .route("/api/v1/jobs/search", post(matching::handle_search_jobs))
        .route(
            "/api/v1/jobs/:id",
            get(catalog::handle_get_job).put(catalog::handle_replace_job),
        )
        .route(
            "/api/v1/jobs/:id/applications",
            get(applications::handle_job_applications),
        )
        .route("/api/v1/jobs/:id/apply", post(applications::handle_apply))
        // Resumes
        .route(
            "/api/v1/resumes",
            get(catalog::handle_list_resumes).post(catalog::handle_upload_resume),
        )
        .route("/api/v1/resumes/mine", get(catalog::handle_my_resumes))
        .route("/api/v1/resumes/:id", get(catalog::handle_get_resume))
        .route(
            "/api/v1/resumes/:id/analyze/:job_id",
            post(matching::handle_analyze),
        )
        // Applications
        .route(
            "/api/v1/applications",
            get(applications::handle_all_applications),
        )
        .route(
            "/api/v1/applications/mine",
            get(applications::handle_my_applications),
        )
        .route(
            "/api/v1/applications/:id/status",
            patch(applications::handle_update_status),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::actor::USER_ID_HEADER;
    use crate::catalog::fixtures::ADMIN_EMAIL;
    use crate::catalog::latency::SimulatedLatency;
    use crate::catalog::{Catalog, CatalogStore};
    use crate::config::Config;
    use crate::matching::scoring::SkillOverlapScorer;

    fn test_app() -> Router {
        let state = AppState {
            store: CatalogStore::new(Catalog::seeded(), SimulatedLatency::disabled()),
            config: Config::default(),
            match_scorer: Arc::new(SkillOverlapScorer),
        };
        build_router(state)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn json_request(method: &str, uri: &str, user: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(user) = user {
            builder = builder.header(USER_ID_HEADER, user);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get_request(uri: &str, user: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(user) = user {
            builder = builder.header(USER_ID_HEADER, user);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn sign_in(app: &Router, email: &str) -> String {
        let (status, body) = send(
            app,
            json_request("POST", "/api/v1/users/sign-in", None, json!({ "email": email })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["id"].as_str().unwrap().to_string()
    }

    async fn first_ids(app: &Router, admin: &str) -> (String, String) {
        let (_, jobs) = send(app, get_request("/api/v1/jobs", None)).await;
        let (_, resumes) = send(app, get_request("/api/v1/resumes", Some(admin))).await;
        (
            jobs["jobs"][0]["id"].as_str().unwrap().to_string(),
            resumes["resumes"][0]["id"].as_str().unwrap().to_string(),
        )
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app();
        let (status, body) = send(&app, get_request("/health", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_search_with_empty_body_returns_all_jobs() {
        let app = test_app();
        let (status, body) =
            send(&app, json_request("POST", "/api/v1/jobs/search", None, json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 5);
    }

    #[tokio::test]
    async fn test_search_filters_by_employment_type_and_salary() {
        let app = test_app();
        let (_, body) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/jobs/search",
                None,
                json!({
                    "employment_type": ["full-time"],
                    "salary": { "min": 70000, "max": 120000 }
                }),
            ),
        )
        .await;
        let titles: Vec<_> = body["jobs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|j| j["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, vec!["Frontend Developer"]);
    }

    #[tokio::test]
    async fn test_search_rejects_inverted_salary_band() {
        let app = test_app();
        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/jobs/search",
                None,
                json!({ "salary": { "min": 10, "max": 1 } }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_job_requires_admin() {
        let app = test_app();
        let user = sign_in(&app, "dev@example.com").await;
        let admin = sign_in(&app, ADMIN_EMAIL).await;
        let job = json!({
            "title": "Rust Engineer",
            "description": "Services in Rust",
            "required_skills": [{ "name": "Rust", "category": "Backend", "weight": 5 }],
            "employment_type": "full-time",
            "location_type": "remote",
            "experience_level": "expert"
        });

        let (status, _) = send(&app, json_request("POST", "/api/v1/jobs", None, job.clone())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) =
            send(&app, json_request("POST", "/api/v1/jobs", Some(&user), job.clone())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) =
            send(&app, json_request("POST", "/api/v1/jobs", Some(&admin), job)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["experience_level"], "expert");

        let id = body["id"].as_str().unwrap();
        let (status, fetched) = send(&app, get_request(&format!("/api/v1/jobs/{id}"), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["title"], "Rust Engineer");
    }

    #[tokio::test]
    async fn test_create_job_with_missing_fields_is_rejected() {
        let app = test_app();
        let admin = sign_in(&app, ADMIN_EMAIL).await;
        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/jobs",
                Some(&admin),
                json!({ "title": "", "description": "" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("title is required"));
    }

    #[tokio::test]
    async fn test_unknown_job_is_404() {
        let app = test_app();
        let (status, body) = send(
            &app,
            get_request(&format!("/api/v1/jobs/{}", uuid::Uuid::new_v4()), None),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_apply_and_admin_status_flow() {
        let app = test_app();
        let user = sign_in(&app, "dev@example.com").await;
        let admin = sign_in(&app, ADMIN_EMAIL).await;
        let (job_id, resume_id) = first_ids(&app, &admin).await;

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                &format!("/api/v1/jobs/{job_id}/apply"),
                Some(&user),
                json!({}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("select a resume"));

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                &format!("/api/v1/jobs/{job_id}/apply"),
                Some(&user),
                json!({ "resume_id": resume_id, "cover_letter": "Hello" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let application_id = body["application_id"].as_str().unwrap().to_string();

        let status_uri = format!("/api/v1/applications/{application_id}/status");
        let (status, _) = send(
            &app,
            json_request("PATCH", &status_uri, Some(&user), json!({ "status": "hired" })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        for next in ["shortlisted", "rejected"] {
            let (status, body) = send(
                &app,
                json_request("PATCH", &status_uri, Some(&admin), json!({ "status": next })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["status"], next);
        }

        let (_, mine) = send(&app, get_request("/api/v1/applications/mine", Some(&user))).await;
        assert_eq!(mine.as_array().unwrap().len(), 1);
        assert_eq!(mine[0]["status"], "rejected");

        let (status, per_job) = send(
            &app,
            get_request(&format!("/api/v1/jobs/{job_id}/applications"), Some(&admin)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(per_job["summary"]["total"], 1);
        assert_eq!(per_job["summary"]["rejected"], 1);
    }

    #[tokio::test]
    async fn test_analyze_stores_score_on_resume() {
        let app = test_app();
        let user = sign_in(&app, "dev@example.com").await;
        let admin = sign_in(&app, ADMIN_EMAIL).await;
        let (job_id, resume_id) = first_ids(&app, &admin).await;

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                &format!("/api/v1/resumes/{resume_id}/analyze/{job_id}"),
                Some(&user),
                json!({}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let score = body["score"].as_u64().unwrap();
        assert!(score <= 100);

        let (_, resume) =
            send(&app, get_request(&format!("/api/v1/resumes/{resume_id}"), None)).await;
        assert_eq!(resume["score"].as_u64(), Some(score));
    }

    fn upload_request(user: &str, name: &str, filename: &str, text: &str) -> Request<Body> {
        let boundary = "matchboard-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"name\"\r\n\r\n\
             {name}\r\n\
             --{boundary}\r\n\
             Content-Disposition: form-data; name=\"resume\"; filename=\"{filename}\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             {text}\r\n\
             --{boundary}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes")
            .header(USER_ID_HEADER, user)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_upload_text_resume() {
        let app = test_app();
        let user = sign_in(&app, "dev@example.com").await;
        let request = upload_request(
            &user,
            "Dana Lee",
            "dana.txt",
            "Kubernetes, Docker and CI/CD pipelines on AWS.",
        );

        let (status, resume) = send(&app, request).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(resume["name"], "Dana Lee");
        assert_eq!(resume["filename"], "dana.txt");
        let skills: Vec<_> = resume["skills"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(skills, vec!["AWS", "Docker", "Kubernetes", "CI/CD"]);

        let (_, mine) = send(&app, get_request("/api/v1/resumes/mine", Some(&user))).await;
        assert_eq!(mine["resumes"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_uploaded_resume_cannot_be_used_by_another_user() {
        let app = test_app();
        let owner = sign_in(&app, "owner@example.com").await;
        let other = sign_in(&app, "other@example.com").await;
        let (_, jobs) = send(&app, get_request("/api/v1/jobs", None)).await;
        let job_id = jobs["jobs"][0]["id"].as_str().unwrap().to_string();

        let (status, resume) = send(
            &app,
            upload_request(&owner, "Owner", "owner.txt", "React and TypeScript"),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let resume_id = resume["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                &format!("/api/v1/jobs/{job_id}/apply"),
                Some(&other),
                json!({ "resume_id": resume_id }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "FORBIDDEN");

        let analyze_uri = format!("/api/v1/resumes/{resume_id}/analyze/{job_id}");
        let (status, _) = send(
            &app,
            json_request("POST", &analyze_uri, Some(&other), json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (_, stored) =
            send(&app, get_request(&format!("/api/v1/resumes/{resume_id}"), None)).await;
        assert!(stored["score"].is_null());

        let (status, _) = send(
            &app,
            json_request("POST", &analyze_uri, Some(&owner), json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_admin_lists_all_applicants_with_candidate_details() {
        let app = test_app();
        let user = sign_in(&app, "dev@example.com").await;
        let admin = sign_in(&app, ADMIN_EMAIL).await;
        let (job_id, resume_id) = first_ids(&app, &admin).await;

        let (status, _) = send(
            &app,
            json_request(
                "POST",
                &format!("/api/v1/jobs/{job_id}/apply"),
                Some(&user),
                json!({ "resume_id": resume_id }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, get_request("/api/v1/applications", Some(&user))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = send(&app, get_request("/api/v1/applications", Some(&admin))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"]["total"], 1);
        let row = &body["applications"][0];
        assert_eq!(row["status"], "applied");
        assert_eq!(row["job_title"], "Frontend Developer");
        assert_eq!(row["candidate"]["name"], "John Doe");
        assert_eq!(row["candidate"]["score"], 85);
        assert_eq!(row["candidate"]["skills"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_profile_update_by_owner_only() {
        let app = test_app();
        let owner = sign_in(&app, "owner@example.com").await;
        let other = sign_in(&app, "other@example.com").await;
        let uri = format!("/api/v1/users/{owner}/profile");
        let profile = json!({
            "linkedin": "https://linkedin.com/in/owner",
            "extra_activities": ["Chess", "Chess"],
            "employment_status": "student"
        });

        let (status, _) =
            send(&app, json_request("PUT", &uri, Some(&other), profile.clone())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, user) = send(&app, json_request("PUT", &uri, Some(&owner), profile)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(user["profile"]["extra_activities"], json!(["Chess"]));
        assert_eq!(user["profile"]["employment_status"], "student");
    }

    #[tokio::test]
    async fn test_skill_endpoints() {
        let app = test_app();
        let (_, categories) = send(&app, get_request("/api/v1/skills/categories", None)).await;
        assert_eq!(categories.as_array().unwrap().len(), 7);

        let (_, testing) = send(&app, get_request("/api/v1/skills?category=Testing", None)).await;
        assert_eq!(testing, json!([{ "name": "Jest", "category": "Testing", "weight": 3 }]));
    }

    #[tokio::test]
    async fn test_unknown_user_header_is_unauthorized() {
        let app = test_app();
        let (status, body) = send(
            &app,
            get_request(
                "/api/v1/applications/mine",
                Some(&uuid::Uuid::new_v4().to_string()),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }
}
