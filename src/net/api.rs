//! HTTP client for the question-answering and title-generation endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, each bounded by the
//! configured timeout.
//! Native builds: every call returns [`ApiError::Unavailable`] so the store
//! and components can be compiled and tested off the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, malformed bodies and timeouts all
//! surface as [`ApiError`]. Callers decide how to degrade; nothing here
//! retries or panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{AskRequest, AskResponse, TitleRequest, TitleResponse};
use crate::config::ApiConfig;

/// Errors produced by backend requests.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("request failed with status {status}")]
    Status { status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// No response arrived within the configured timeout.
    #[error("request timed out after {ms}ms")]
    Timeout { ms: u32 },

    /// This build has no browser HTTP client.
    #[error("HTTP client not available in this build")]
    Unavailable,
}

/// The two remote operations the conversation store depends on.
///
/// Futures are `?Send`: in the browser they run on the single UI thread via
/// `spawn_local`.
#[async_trait(?Send)]
pub trait ChatBackend: Send + Sync {
    /// Ask a question and return the answer text.
    async fn ask(&self, question: &str) -> Result<String, ApiError>;

    /// Produce a conversation title from its first user message.
    async fn generate_title(&self, message: &str) -> Result<String, ApiError>;
}

/// [`ChatBackend`] backed by JSON-over-HTTP endpoints.
#[derive(Clone, Debug)]
pub struct HttpChatBackend {
    config: ApiConfig,
}

impl HttpChatBackend {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn post_json<Req, Resp>(&self, url: &str, body: &Req) -> Result<Resp, ApiError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        #[cfg(feature = "csr")]
        {
            use futures::future::{self, Either};

            let ms = self.config.request_timeout_ms;
            let request = Box::pin(send_json::<Req, Resp>(url, body));
            let timer = Box::pin(gloo_timers::future::TimeoutFuture::new(ms));
            match future::select(request, timer).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(ApiError::Timeout { ms }),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, body);
            Err(ApiError::Unavailable)
        }
    }
}

#[async_trait(?Send)]
impl ChatBackend for HttpChatBackend {
    async fn ask(&self, question: &str) -> Result<String, ApiError> {
        let body = AskRequest { question: question.to_owned() };
        let resp: AskResponse = self.post_json(&self.config.api_url, &body).await?;
        Ok(resp.answer)
    }

    async fn generate_title(&self, message: &str) -> Result<String, ApiError> {
        let body = TitleRequest { message: message.to_owned() };
        let resp: TitleResponse = self.post_json(&self.config.title_api_url, &body).await?;
        Ok(resp.title)
    }
}

#[cfg(any(test, feature = "csr"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status { status })
    }
}

#[cfg(feature = "csr")]
async fn send_json<Req, Resp>(url: &str, body: &Req) -> Result<Resp, ApiError>
where
    Req: Serialize,
    Resp: DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    check_status(resp.status())?;
    resp.json::<Resp>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}
