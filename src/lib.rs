pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod presentation;
pub mod roles;
pub mod session;
pub mod unlock;

pub use api::{ApiClient, RemoteData};
pub use error::{ClientError, SessionError};
pub use guard::{Guard, GuardState, GuardView, Route};
pub use roles::{Capability, CapabilityCheck, IdentitySource, RoleResolver, RoleStore};
pub use session::Session;
pub use unlock::{is_unlocked, unlock_states};
