use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use resumatch_api::analysis::Analyzer;
use resumatch_api::config::Config;
use resumatch_api::extraction::DefaultTextExtractor;
use resumatch_api::routes::build_router;
use resumatch_api::state::AppState;

const BOUNDARY: &str = "resumatch-test-boundary";

const RESUME: &str = "EXPERIENCE\n\
    Senior Developer, ABC Tech\n\
    Developed scalable web applications using React, Node.js, and Python.\n\
    Implemented CI/CD pipelines.\n\
    EDUCATION\n\
    BS Computer Science, State University\n";

const JOB: &str = "Frontend developer building scalable web applications with React \
    and TypeScript. Docker and Kubernetes experience. Bachelor's degree preferred.";

fn app() -> Router {
    let config = Config::default();
    let analyzer = Analyzer::new(config.scoring.clone()).unwrap();
    build_router(AppState {
        config,
        analyzer: Arc::new(analyzer),
        extractor: Arc::new(DefaultTextExtractor),
    })
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn multipart_request(
    field: &str,
    filename: &str,
    content_type: &str,
    data: &[u8],
) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri("/api/v1/extract")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_policy_exposes_weight_table() {
    let request = Request::builder()
        .uri("/api/v1/policy")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weights"]["skills"], 0.4);
    assert_eq!(body["weights"]["experience"], 0.3);
    assert_eq!(body["weights"]["keywords"], 0.2);
    assert_eq!(body["weights"]["education"], 0.1);
    assert_eq!(body["thresholds"]["strength"], 80.0);
}

#[tokio::test]
async fn test_keywords_endpoint() {
    let (status, body) = send(json_request(
        Method::POST,
        "/api/v1/keywords",
        json!({"text": "Rust, rust and RUST with Kubernetes!"}),
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keywords"], json!(["kubernetes", "rust"]));
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn test_analyze_returns_full_result() {
    let (status, body) = send(json_request(
        Method::POST,
        "/api/v1/analyze",
        json!({
            "resume_text": RESUME,
            "resume_skills": [{"name": "React", "proficiency": 85}],
            "job_text": JOB,
            "job_title": "Frontend Developer",
            "job_skills": [
                {"name": "React", "importance": "high"},
                {"name": "TypeScript", "importance": "high"},
                {"name": "Kubernetes", "importance": "low"}
            ]
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["analysis_id"].is_string());
    assert!(body["analyzed_at"].is_string());

    let result = &body["result"];
    let overall = result["overall_score"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&overall));
    for category in ["skills", "experience", "education", "keywords"] {
        let score = result["category_scores"][category].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&score), "{category} = {score}");
    }

    assert_eq!(result["skills_comparison"][0]["name"], "React");
    assert_eq!(result["skills_comparison"][0]["resume_score"], 85.0);
    assert_eq!(
        result["missing_skills"],
        json!([
            {"name": "TypeScript", "importance": "high"},
            {"name": "Kubernetes", "importance": "low"}
        ])
    );
    assert_eq!(result["improvements"][0]["section"], "Skills Section");
    assert_eq!(
        result["improvements"][0]["example"],
        "Add \"TypeScript\" to your skills section."
    );
}

#[tokio::test]
async fn test_analyze_is_deterministic_across_requests() {
    let payload = json!({"resume_text": RESUME, "job_text": JOB});
    let (_, first) = send(json_request(Method::POST, "/api/v1/analyze", payload.clone())).await;
    let (_, second) = send(json_request(Method::POST, "/api/v1/analyze", payload)).await;
    assert_eq!(first["result"], second["result"]);
    assert_ne!(first["analysis_id"], second["analysis_id"]);
}

#[tokio::test]
async fn test_analyze_missing_text_is_invalid_argument() {
    let (status, body) = send(json_request(
        Method::POST,
        "/api/v1/analyze",
        json!({"resume_text": RESUME, "job_text": null}),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("job_text"));
}

#[tokio::test]
async fn test_analyze_empty_text_is_invalid_argument() {
    let (status, body) = send(json_request(
        Method::POST,
        "/api/v1/analyze",
        json!({"resume_text": "   ", "job_text": JOB}),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_analyze_blank_skill_name_is_invalid_argument() {
    let (status, body) = send(json_request(
        Method::POST,
        "/api/v1/analyze",
        json!({
            "resume_text": RESUME,
            "job_text": JOB,
            "job_skills": [{"name": "", "importance": "high"}]
        }),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_extract_plain_text_upload() {
    let (status, body) = send(multipart_request(
        "file",
        "resume.txt",
        "text/plain",
        RESUME.as_bytes(),
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["filename"], "resume.txt");
    assert_eq!(body["text"], RESUME);
    assert_eq!(body["char_count"], RESUME.chars().count());
}

#[tokio::test]
async fn test_extract_pdf_text_layer() {
    let pdf = include_bytes!("fixtures/resume.pdf");
    let (status, body) =
        send(multipart_request("file", "resume.pdf", "application/pdf", pdf)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["filename"], "resume.pdf");
    let text = body["text"].as_str().unwrap();
    assert!(text.contains("Rust Engineer"), "{text}");
    assert!(text.contains("Kubernetes"), "{text}");
}

#[tokio::test]
async fn test_extract_whitespace_file_is_extraction_failed() {
    let (status, body) = send(multipart_request("file", "blank.txt", "text/plain", b"   \n")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "EXTRACTION_FAILED");
}

#[tokio::test]
async fn test_extract_corrupt_pdf_is_extraction_failed() {
    let (status, body) = send(multipart_request(
        "file",
        "scan.pdf",
        "application/pdf",
        b"%PDF-1.4 not really a pdf",
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "EXTRACTION_FAILED");
}

#[tokio::test]
async fn test_extract_without_file_field_is_validation_error() {
    let (status, body) = send(multipart_request(
        "attachment",
        "resume.txt",
        "text/plain",
        b"hello",
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
