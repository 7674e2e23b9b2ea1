//! Capability resolution for role-gated views.
//!
//! One resolver serves every capability; each capability only differs in the
//! predicate it applies to the identity's role set. Resolution fails closed:
//! a missing identity or any store error yields `flag = false`.

use async_trait::async_trait;
use serde::Serialize;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::models::{Identity, Role, RoleSet};

/// Capability required by a guarded view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Admin,
    AdminMaster,
    Editor,
    Leader,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Capability::Admin,
        Capability::AdminMaster,
        Capability::Editor,
        Capability::Leader,
    ];

    /// Roles that grant this capability.
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Capability::Admin => &[Role::Admin, Role::AdminMaster],
            Capability::AdminMaster => &[Role::AdminMaster],
            Capability::Editor => &[Role::Admin, Role::AdminMaster, Role::Editor],
            Capability::Leader => &[Role::Lider],
        }
    }

    pub fn is_granted_by(&self, roles: &RoleSet) -> bool {
        roles.contains_any(self.allowed_roles())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Admin => "admin",
            Capability::AdminMaster => "admin_master",
            Capability::Editor => "editor",
            Capability::Leader => "leader",
        }
    }
}

/// Outcome of one check cycle. `loading` is true only before the cycle settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapabilityCheck {
    pub flag: bool,
    pub loading: bool,
}

impl CapabilityCheck {
    pub const PENDING: CapabilityCheck = CapabilityCheck { flag: false, loading: true };

    pub fn settled(flag: bool) -> Self {
        Self { flag, loading: false }
    }
}

/// Source of the signed-in identity. `Ok(None)` means nobody is signed in.
#[async_trait]
pub trait IdentitySource: Send + Sync {
    async fn current_identity(&self) -> Result<Option<Identity>, ClientError>;
}

/// Remote store of role assignments.
#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn roles_for(&self, identity: &Identity) -> Result<RoleSet, ClientError>;
}

pub struct RoleResolver<'a, I: ?Sized, S: ?Sized> {
    identities: &'a I,
    store: &'a S,
}

impl<'a, I, S> RoleResolver<'a, I, S>
where
    I: IdentitySource + ?Sized,
    S: RoleStore + ?Sized,
{
    pub fn new(identities: &'a I, store: &'a S) -> Self {
        Self { identities, store }
    }

    /// Roles of the current identity. Empty when signed out or on any error.
    pub async fn resolve_roles(&self) -> RoleSet {
        let identity = match self.identities.current_identity().await {
            Ok(Some(identity)) => identity,
            Ok(None) => return RoleSet::new(),
            Err(e) => {
                tracing::warn!(error = %e, "identity lookup failed, treating as signed out");
                return RoleSet::new();
            }
        };

        match self.store.roles_for(&identity).await {
            Ok(roles) => roles,
            Err(e) => {
                tracing::warn!(user = %identity.id, error = %e, "role lookup failed, denying access");
                RoleSet::new()
            }
        }
    }

    /// Run one check cycle for `capability`. Always settles, never errors.
    pub async fn resolve(&self, capability: Capability) -> CapabilityCheck {
        let roles = self.resolve_roles().await;
        let flag = capability.is_granted_by(&roles);
        tracing::debug!(capability = capability.as_str(), flag, "capability resolved");
        CapabilityCheck::settled(flag)
    }
}

#[async_trait]
impl IdentitySource for ApiClient {
    async fn current_identity(&self) -> Result<Option<Identity>, ClientError> {
        if !self.session().is_signed_in() || self.session().is_expired_at(chrono::Utc::now()) {
            return Ok(None);
        }

        match self.me().await {
            Ok(identity) => Ok(Some(identity)),
            Err(e) if e.is_unauthorized() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl RoleStore for ApiClient {
    async fn roles_for(&self, identity: &Identity) -> Result<RoleSet, ClientError> {
        let assignments = self.user_roles(&identity.id).await?;
        Ok(assignments
            .iter()
            .filter(|a| a.user_id == identity.id)
            .filter_map(|a| a.role())
            .collect())
    }
}
