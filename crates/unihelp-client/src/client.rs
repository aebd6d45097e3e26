use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::session::Session;

/// Async client for the UniHelp campus backend
///
/// Endpoint wrappers live in the `requests`, `work`, `funding`, and
/// `profile` modules; this type owns the HTTP plumbing they share.
pub struct UniHelpClient {
    session: Session,
    http: reqwest::Client,
}

/// Envelope the backend wraps mutation responses in
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
    pub status: u16,
}

impl UniHelpClient {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            http: reqwest::Client::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(path, "GET");
        let response = self
            .authorize(self.http.get(self.session.url(path)))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        tracing::debug!(path, "POST");
        let response = self
            .authorize(self.http.post(self.session.url(path)))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<()> {
        tracing::debug!(path, "POST");
        let response = self
            .authorize(self.http.post(self.session.url(path)))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    pub(crate) async fn post_json_empty<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        tracing::debug!(path, "POST");
        let response = self
            .authorize(self.http.post(self.session.url(path)))
            .json(body)
            .send()
            .await?;
        Self::expect_success(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        tracing::debug!(path, "DELETE");
        let response = self
            .authorize(self.http.delete(self.session.url(path)))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(|e| ClientError::Decode {
            reason: e.to_string(),
        })
    }

    async fn expect_success(response: Response) -> Result<()> {
        Self::check_status(response).await?;
        Ok(())
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        // Pass the backend's body through unchanged; interpretation and
        // retry policy belong to the caller.
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "backend error response");
        Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }
}
