mod common;

use academy_client::models::{Credentials, QuizSubmission};
use academy_client::{ClientError, RemoteData};
use common::TestApi;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, Request, ResponseTemplate};

#[tokio::test]
async fn not_found_carries_server_message() {
    let api = TestApi::start(None).await;

    Mock::given(method("GET"))
        .and(path("/api/courses/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&api.server)
        .await;

    let err = api.client.get_course("missing").await.unwrap_err();
    assert_eq!(err.to_string(), "not found");
    assert!(matches!(err, ClientError::Http { status: 404, .. }));
}

#[tokio::test]
async fn unparsable_error_body_uses_fallback() {
    let api = TestApi::start(None).await;

    Mock::given(method("GET"))
        .and(path("/api/courses"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&api.server)
        .await;

    let err = api.client.list_courses().await.unwrap_err();
    assert_eq!(err.to_string(), "Request failed with status 500");
}

#[tokio::test]
async fn bearer_token_attached_when_present() {
    let api = TestApi::start(Some("secret-token")).await;

    Mock::given(method("GET"))
        .and(path("/api/enrollments"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"course_id": "c1", "enrolled_at": "2024-01-10T12:00:00Z"}
        ])))
        .expect(1)
        .mount(&api.server)
        .await;

    let enrollments = api.client.list_enrollments().await.unwrap();
    assert_eq!(enrollments.len(), 1);
    assert_eq!(enrollments[0].course_id, "c1");
}

#[tokio::test]
async fn no_authorization_header_when_signed_out() {
    let api = TestApi::start(None).await;

    Mock::given(method("GET"))
        .and(path("/api/faqs"))
        .respond_with(|req: &Request| {
            if req.headers.contains_key("authorization") {
                ResponseTemplate::new(400)
            } else {
                ResponseTemplate::new(200).set_body_json(json!([
                    {"id": "f2", "question": "Q2", "answer": "A2", "order_index": 2},
                    {"id": "f1", "question": "Q1", "answer": "A1", "order_index": 1}
                ]))
            }
        })
        .mount(&api.server)
        .await;

    let faqs = api.client.list_faqs().await.unwrap();
    assert_eq!(faqs.iter().map(|f| f.id.as_str()).collect::<Vec<_>>(), vec!["f1", "f2"]);
}

#[tokio::test]
async fn quiz_submission_posts_json_body() {
    let api = TestApi::start(Some("t")).await;

    Mock::given(method("POST"))
        .and(path("/api/quizzes/q1/submit"))
        .and(body_json(json!({"answers": {"a": 1}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "score": 100, "passed": true, "correct_answers": 1, "total_questions": 1
        })))
        .mount(&api.server)
        .await;

    let result = api
        .client
        .submit_quiz("q1", &QuizSubmission::default().answer("a", 1))
        .await
        .unwrap();
    assert!(result.passed);
    assert_eq!(result.score, 100);
}

#[tokio::test]
async fn login_stores_token_and_logout_clears_it() {
    let api = TestApi::start(None).await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "ana@example.com", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "fresh-token",
            "user": {"id": "u1", "email": "ana@example.com"}
        })))
        .mount(&api.server)
        .await;

    api.client
        .login(&Credentials { email: "ana@example.com".into(), password: "pw".into() })
        .await
        .unwrap();
    assert_eq!(api.client.session().token().as_deref(), Some("fresh-token"));

    api.client.logout().unwrap();
    assert!(api.client.session().token().is_none());
}

#[tokio::test]
async fn failed_login_keeps_session_empty() {
    let api = TestApi::start(None).await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})))
        .mount(&api.server)
        .await;

    let err = api
        .client
        .login(&Credentials { email: "x@example.com".into(), password: "bad".into() })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(err.is_unauthorized());
    assert!(!api.client.session().is_signed_in());
}

#[tokio::test]
async fn certificate_verification_path_is_encoded() {
    let api = TestApi::start(None).await;

    Mock::given(method("GET"))
        .and(path("/api/certificates/verify/CERT-2024-0001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "certificate_number": "CERT-2024-0001",
            "course_id": "c1",
            "course_title": "Liderança",
            "issued_at": "2024-03-01T00:00:00Z"
        })))
        .mount(&api.server)
        .await;

    let certificate = api.client.verify_certificate("CERT-2024-0001").await.unwrap();
    assert_eq!(certificate.course_title.as_deref(), Some("Liderança"));
}

#[tokio::test]
async fn empty_success_body_is_accepted_for_actions() {
    let api = TestApi::start(Some("t")).await;

    Mock::given(method("POST"))
        .and(path("/api/lessons/l1/complete"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&api.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/faqs/f1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&api.server)
        .await;

    api.client.complete_lesson("l1").await.unwrap();
    api.client.delete_faq("f1").await.unwrap();
}

#[tokio::test]
async fn modules_come_back_in_position_order() {
    let api = TestApi::start(None).await;

    Mock::given(method("GET"))
        .and(path("/api/courses/c1/modules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "m2", "title": "Two", "order_index": 2},
            {"id": "m1", "title": "One", "order_index": 1, "has_quiz": true}
        ])))
        .mount(&api.server)
        .await;

    let modules = api.client.list_modules("c1").await.unwrap();
    assert_eq!(modules[0].id, "m1");
    assert!(modules[0].has_quiz);
}

#[tokio::test]
async fn failed_progress_degrades_to_empty() {
    let api = TestApi::start(Some("t")).await;

    Mock::given(method("GET"))
        .and(path("/api/courses/c1/progress"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "db down"})))
        .mount(&api.server)
        .await;

    let progress = RemoteData::from(api.client.course_progress("c1").await);
    assert_eq!(progress.clone().map(|_| ()), RemoteData::Failed("db down".to_string()));
    assert!(progress.unwrap_or_default().completed_lessons.is_empty());
}
