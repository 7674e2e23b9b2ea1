use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub leader_id: Option<String>,
    #[serde(default)]
    pub member_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGroup {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_id: Option<String>,
}

/// One row of a leader's group dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMemberProgress {
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub course_id: String,
    #[serde(default)]
    pub percentage: f64,
}
