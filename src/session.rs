use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::error::SessionError;

/// Claims read from the stored bearer token. The signature is not checked here,
/// the server remains the authority on whether the token is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| Utc.timestamp_opt(exp, 0).single())
    }
}

/// The single auth-token slot, shared by every clone of the session.
///
/// A session built with a directory persists the token to `<dir>/<slot>`;
/// an in-memory session forgets it when dropped.
#[derive(Debug, Clone)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
    slot_path: Option<PathBuf>,
}

impl Session {
    pub fn in_memory() -> Self {
        Self {
            token: Arc::new(RwLock::new(None)),
            slot_path: None,
        }
    }

    /// In-memory session that starts out signed in.
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::in_memory();
        *session.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token.into());
        session
    }

    /// Open the slot `<dir>/<slot_name>`, loading a token saved by an earlier run.
    pub fn persistent(dir: impl Into<PathBuf>, slot_name: &str) -> Result<Self, SessionError> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        let slot_path = dir.join(slot_name);

        let stored = if slot_path.exists() {
            let content = fs::read_to_string(&slot_path)?;
            let trimmed = content.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        } else {
            None
        };

        Ok(Self {
            token: Arc::new(RwLock::new(stored)),
            slot_path: Some(slot_path),
        })
    }

    pub fn from_config(config: &SessionConfig) -> Result<Self, SessionError> {
        match &config.config_dir {
            Some(dir) => Self::persistent(dir, &config.token_slot),
            None => Ok(Self::in_memory()),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn set_token(&self, token: impl Into<String>) -> Result<(), SessionError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SessionError::InvalidToken("empty token".to_string()));
        }
        if let Some(path) = &self.slot_path {
            write_slot(path, &token)?;
        }
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token);
        tracing::debug!("Session token stored");
        Ok(())
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        if let Some(path) = &self.slot_path {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
        tracing::debug!("Session token cleared");
        Ok(())
    }

    /// Decode the stored token's claims, `None` if absent or not a JWT.
    pub fn claims(&self) -> Option<TokenClaims> {
        let token = self.token()?;
        decode_claims(&token).ok()
    }

    /// True when the stored token carries an `exp` in the past.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.claims()
            .and_then(|c| c.expires_at())
            .map(|exp| exp <= now)
            .unwrap_or(false)
    }
}

/// Write the token readable by the owner only.
#[cfg(unix)]
fn write_slot(path: &Path, token: &str) -> std::io::Result<()> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies on create, tighten a slot left by an older run
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(token.as_bytes())
}

#[cfg(not(unix))]
fn write_slot(path: &Path, token: &str) -> std::io::Result<()> {
    fs::write(path, token)
}

pub fn decode_claims(token: &str) -> Result<TokenClaims, SessionError> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| SessionError::InvalidToken(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn jwt(exp: i64) -> String {
        let claims = TokenClaims {
            sub: Some("user-1".into()),
            email: Some("ana@example.com".into()),
            exp: Some(exp),
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(b"server-secret")).unwrap()
    }

    #[test]
    fn test_token_slot_persists_across_sessions() {
        let dir = tempfile::tempdir().unwrap();

        let session = Session::persistent(dir.path(), "auth_token").unwrap();
        assert!(!session.is_signed_in());
        session.set_token("abc123").unwrap();

        let reopened = Session::persistent(dir.path(), "auth_token").unwrap();
        assert_eq!(reopened.token().as_deref(), Some("abc123"));

        reopened.clear().unwrap();
        assert!(!dir.path().join("auth_token").exists());
        assert!(Session::persistent(dir.path(), "auth_token").unwrap().token().is_none());
    }

    #[test]
    fn test_from_config_uses_slot_name() {
        let dir = tempfile::tempdir().unwrap();
        let config = SessionConfig {
            config_dir: Some(dir.path().join("nested")),
            token_slot: "staging_token".to_string(),
        };

        let session = Session::from_config(&config).unwrap();
        session.set_token("xyz").unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("nested").join("staging_token")).unwrap(),
            "xyz"
        );

        let memory = Session::from_config(&SessionConfig {
            config_dir: None,
            token_slot: "auth_token".to_string(),
        })
        .unwrap();
        assert!(!memory.is_signed_in());
    }

    #[cfg(unix)]
    #[test]
    fn test_token_slot_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth_token");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let session = Session::persistent(dir.path(), "auth_token").unwrap();
        session.set_token("new-token").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new-token");
    }

    #[test]
    fn test_clones_share_the_slot() {
        let session = Session::in_memory();
        let view = session.clone();
        session.set_token("t").unwrap();
        assert_eq!(view.token().as_deref(), Some("t"));
    }

    #[test]
    fn test_empty_token_rejected() {
        let session = Session::in_memory();
        assert!(session.set_token("  ").is_err());
        assert!(!session.is_signed_in());
    }

    #[test]
    fn test_claims_and_expiry() {
        let now = Utc::now();
        let session = Session::with_token(jwt((now + Duration::hours(1)).timestamp()));
        let claims = session.claims().unwrap();
        assert_eq!(claims.sub.as_deref(), Some("user-1"));
        assert!(!session.is_expired_at(now));

        let stale = Session::with_token(jwt((now - Duration::hours(1)).timestamp()));
        assert!(stale.is_expired_at(now));
    }

    #[test]
    fn test_opaque_token_has_no_claims() {
        let session = Session::with_token("not-a-jwt");
        assert!(session.claims().is_none());
        assert!(!session.is_expired_at(Utc::now()));
    }
}
