use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(default)]
    pub id: Option<String>,
    pub certificate_number: String,
    pub course_id: String,
    #[serde(default)]
    pub course_title: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    pub issued_at: DateTime<Utc>,
}
