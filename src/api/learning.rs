use serde_json::json;

use crate::error::ClientError;
use crate::models::{Certificate, Enrollment, Progress, Quiz, QuizResult, QuizSubmission};

use super::ApiClient;

// Quizzes
impl ApiClient {
    pub async fn get_quiz(&self, quiz_id: &str) -> Result<Quiz, ClientError> {
        self.get(&["quizzes", quiz_id]).await
    }

    pub async fn submit_quiz(&self, quiz_id: &str, submission: &QuizSubmission) -> Result<QuizResult, ClientError> {
        self.post(&["quizzes", quiz_id, "submit"], submission).await
    }
}

// Enrollments
impl ApiClient {
    pub async fn list_enrollments(&self) -> Result<Vec<Enrollment>, ClientError> {
        self.get(&["enrollments"]).await
    }

    pub async fn enroll(&self, course_id: &str) -> Result<Enrollment, ClientError> {
        self.post(&["courses", course_id, "enroll"], &json!({})).await
    }
}

// Progress
impl ApiClient {
    pub async fn course_progress(&self, course_id: &str) -> Result<Progress, ClientError> {
        self.get(&["courses", course_id, "progress"]).await
    }

    pub async fn complete_lesson(&self, lesson_id: &str) -> Result<(), ClientError> {
        self.execute(reqwest::Method::POST, &["lessons", lesson_id, "complete"], Some(&json!({})))
            .await
    }

    /// Clear the viewer's completion state for every lesson of a module.
    pub async fn reset_module(&self, module_id: &str) -> Result<(), ClientError> {
        self.execute(reqwest::Method::POST, &["modules", module_id, "reset"], Some(&json!({})))
            .await
    }
}

// Certificates
impl ApiClient {
    pub async fn list_certificates(&self) -> Result<Vec<Certificate>, ClientError> {
        self.get(&["certificates"]).await
    }

    pub async fn issue_certificate(&self, course_id: &str) -> Result<Certificate, ClientError> {
        self.post(&["courses", course_id, "certificate"], &json!({})).await
    }

    /// Public lookup by certificate number.
    pub async fn verify_certificate(&self, certificate_number: &str) -> Result<Certificate, ClientError> {
        self.get(&["certificates", "verify", certificate_number]).await
    }
}
