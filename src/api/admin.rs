use serde_json::json;

use crate::error::ClientError;
use crate::models::{Faq, Group, GroupMemberProgress, NewFaq, NewGroup, Settings};

use super::ApiClient;

// Groups
impl ApiClient {
    pub async fn list_groups(&self) -> Result<Vec<Group>, ClientError> {
        self.get(&["groups"]).await
    }

    pub async fn create_group(&self, group: &NewGroup) -> Result<Group, ClientError> {
        self.post(&["groups"], group).await
    }

    pub async fn add_group_member(&self, group_id: &str, user_id: &str) -> Result<(), ClientError> {
        self.execute(reqwest::Method::POST, &["groups", group_id, "members"], Some(&json!({ "user_id": user_id })))
            .await
    }

    pub async fn group_progress(&self, group_id: &str) -> Result<Vec<GroupMemberProgress>, ClientError> {
        self.get(&["groups", group_id, "progress"]).await
    }
}

// FAQs
impl ApiClient {
    pub async fn list_faqs(&self) -> Result<Vec<Faq>, ClientError> {
        let mut faqs: Vec<Faq> = self.get(&["faqs"]).await?;
        faqs.sort_by_key(|f| f.order_index);
        Ok(faqs)
    }

    pub async fn create_faq(&self, faq: &NewFaq) -> Result<Faq, ClientError> {
        self.post(&["faqs"], faq).await
    }

    pub async fn delete_faq(&self, faq_id: &str) -> Result<(), ClientError> {
        self.delete(&["faqs", faq_id]).await
    }
}

// Settings
impl ApiClient {
    pub async fn get_settings(&self) -> Result<Settings, ClientError> {
        self.get(&["settings"]).await
    }

    pub async fn update_settings(&self, settings: &Settings) -> Result<Settings, ClientError> {
        self.put(&["settings"], settings).await
    }
}
