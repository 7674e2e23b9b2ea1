#![allow(dead_code)]

use std::collections::HashSet;

use academy_client::config::AppConfig;
use academy_client::models::Lesson;
use academy_client::{ApiClient, Session};
use wiremock::MockServer;

/// Mock API plus a client pointed at it with an in-memory session.
pub struct TestApi {
    pub server: MockServer,
    pub client: ApiClient,
}

impl TestApi {
    pub async fn start(token: Option<&str>) -> TestApi {
        let server = MockServer::start().await;
        let session = match token {
            Some(token) => Session::with_token(token),
            None => Session::in_memory(),
        };
        let client = ApiClient::new(&AppConfig::with_base_url(format!("{}/api", server.uri())), session)
            .expect("client");
        TestApi { server, client }
    }
}

pub fn lesson(id: &str, order: i32) -> Lesson {
    Lesson {
        id: id.to_string(),
        module_id: Some("m1".to_string()),
        title: format!("Lesson {}", id),
        video_url: None,
        duration: Some(10),
        order_index: order,
        quiz_id: None,
        has_quiz: false,
    }
}

pub fn quizzed(id: &str, order: i32, quiz_id: &str) -> Lesson {
    Lesson {
        quiz_id: Some(quiz_id.to_string()),
        has_quiz: true,
        ..lesson(id, order)
    }
}

pub fn ids(values: &[&str]) -> HashSet<String> {
    values.iter().map(|s| s.to_string()).collect()
}
