use serde::Serialize;

use crate::error::ClientError;

/// State of a value fetched from the API, shared by guards and views.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum RemoteData<T> {
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        RemoteData::Pending
    }
}

impl<T> RemoteData<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, RemoteData::Pending)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            RemoteData::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RemoteData<U> {
        match self {
            RemoteData::Pending => RemoteData::Pending,
            RemoteData::Ready(value) => RemoteData::Ready(f(value)),
            RemoteData::Failed(msg) => RemoteData::Failed(msg),
        }
    }

    /// Collapse to a value, using `fallback` while pending or after a failure.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            RemoteData::Ready(value) => value,
            _ => fallback,
        }
    }
}

impl<T: Default> RemoteData<T> {
    pub fn unwrap_or_default(self) -> T {
        self.unwrap_or(T::default())
    }
}

impl<T> From<Result<T, ClientError>> for RemoteData<T> {
    fn from(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => RemoteData::Ready(value),
            Err(e) => {
                tracing::warn!(error = %e, "remote fetch failed");
                RemoteData::Failed(e.to_string())
            }
        }
    }
}
