use crate::error::ClientError;
use crate::models::{AuthResponse, Credentials, Identity, Registration, RoleAssignment};

use super::ApiClient;

impl ApiClient {
    /// Sign in and store the returned token in the session slot.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ClientError> {
        let response: AuthResponse = self.post(&["auth", "login"], credentials).await?;
        self.session().set_token(&response.token)?;
        tracing::info!(email = %credentials.email, "signed in");
        Ok(response)
    }

    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, ClientError> {
        let response: AuthResponse = self.post(&["auth", "register"], registration).await?;
        self.session().set_token(&response.token)?;
        Ok(response)
    }

    pub fn logout(&self) -> Result<(), ClientError> {
        self.session().clear()?;
        Ok(())
    }

    pub async fn me(&self) -> Result<Identity, ClientError> {
        self.get(&["auth", "me"]).await
    }

    pub async fn user_roles(&self, user_id: &str) -> Result<Vec<RoleAssignment>, ClientError> {
        self.get(&["users", user_id, "roles"]).await
    }
}
