//! HTTP gateway to the platform API.
//!
//! One method per remote operation, grouped by resource in the submodules.
//! Every call attaches the session's bearer token when present and turns any
//! non-2xx response into [`ClientError::Http`]. There is no retry and no
//! timeout; failures go straight back to the caller.

mod admin;
mod auth;
mod catalog;
mod learning;
pub mod remote;

pub use remote::RemoteData;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::AppConfig;
use crate::error::ClientError;
use crate::session::Session;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Session,
    log_requests: bool,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: Session) -> Result<Self, ClientError> {
        let base_url = Url::parse(config.api.base_url.trim_end_matches('/'))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            session,
            log_requests: config.api.enable_request_logging,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with `segments` appended, each percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn builder(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = self.endpoint(segments);
        if self.log_requests {
            tracing::debug!(%method, %url, "api request");
        }

        let builder = self.http.request(method, url);
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<String, ClientError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = ClientError::from_response(status.as_u16(), &body);
            tracing::debug!(status = status.as_u16(), error = %err, "api request failed");
            return Err(err);
        }

        Ok(body)
    }

    /// Perform a request and decode the JSON response.
    pub async fn request<B, T>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut builder = self.builder(method, segments);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let text = self.send(builder).await?;
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };
        Ok(serde_json::from_str(text)?)
    }

    /// Perform a request whose response body is not needed.
    pub async fn execute<B>(&self, method: Method, segments: &[&str], body: Option<&B>) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        let mut builder = self.builder(method, segments);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.send(builder).await.map(|_| ())
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        self.request::<(), T>(Method::GET, segments, None).await
    }

    pub(crate) async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, segments, Some(body)).await
    }

    pub(crate) async fn put<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, segments, Some(body)).await
    }

    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<(), ClientError> {
        self.execute::<()>(Method::DELETE, segments, None).await
    }
}
