pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::cv::handlers as cv;
use crate::errors::AppError;
use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/match", post(matching::handle_match_jobs))
        .route("/api/v1/cv/extract", post(cv::handle_extract_cv))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::models::job::JobSummary;
    use crate::state::test_state;

    fn sample_jobs() -> Vec<JobSummary> {
        vec![
            JobSummary {
                id: "mkt".to_string(),
                title: "Маркетингийн Менежер".to_string(),
                requirements: "3-5 жилийн туршлага, маркетинг, сошиал медиа".to_string(),
                location: "Улаанбаатар".to_string(),
                salary: Some("₮3,000,000 - ₮5,000,000".to_string()),
                posted_at: None,
            },
            JobSummary {
                id: "acc".to_string(),
                title: "Нягтлан бодогч".to_string(),
                requirements: "Санхүүгийн чиглэлээр 2 жилийн туршлага".to_string(),
                location: "Эрдэнэт".to_string(),
                salary: None,
                posted_at: None,
            },
        ]
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_ok() {
        let app = build_router(test_state(vec![]));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_jobs() {
        let app = build_router(test_state(sample_jobs()));
        let response = app
            .oneshot(Request::builder().uri("/api/v1/jobs").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[0]["id"], "mkt");
    }

    #[tokio::test]
    async fn test_match_returns_ranked_matches() {
        let app = build_router(test_state(sample_jobs()));
        let cv = "Маркетингийн мэргэжилтэн, 5 жилийн маркетингийн туршлага, сошиал медиа";
        let response = app
            .oneshot(post_json("/api/v1/jobs/match", json!({ "content": cv })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["cvCategory"], "marketing");
        assert_eq!(body["jobsConsidered"], 2);
        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["job"]["id"], "mkt");
        assert_eq!(matches[0]["matchScore"], matches[0]["matchDetails"]["overall"]);
    }

    #[tokio::test]
    async fn test_match_rejects_empty_content() {
        let app = build_router(test_state(sample_jobs()));
        let response = app
            .oneshot(post_json("/api/v1/jobs/match", json!({ "content": "   " })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_match_with_no_jobs_is_empty_list() {
        let app = build_router(test_state(vec![]));
        let response = app
            .oneshot(post_json("/api/v1/jobs/match", json!({ "content": "Graphic designer" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["matches"], json!([]));
    }

    #[tokio::test]
    async fn test_extract_plain_text_upload() {
        let boundary = "cvboundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"cv.txt\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             Маркетингийн   мэргэжилтэн\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/cv/extract")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = build_router(test_state(vec![])).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["content"], "Маркетингийн мэргэжилтэн");
        assert_eq!(body["fileName"], "cv.txt");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = build_router(test_state(vec![]));
        let response = app
            .oneshot(Request::builder().uri("/api/v1/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
