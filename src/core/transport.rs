//! HTTP transport for the registration request
//!
//! The controller only needs "POST this JSON, give me the body back". Two
//! implementations are provided: `reqwest` on the server and for native use,
//! `gloo-net` in the browser. Neither imposes a timeout, and neither looks at
//! the HTTP status; the body alone decides how a response is handled.

use std::future::Future;

use crate::core::registration::RegistrationError;

/// Sends a JSON POST and returns the raw response body.
pub trait AuthTransport {
    fn post_json(
        &self,
        url: &str,
        body: String,
    ) -> impl Future<Output = Result<String, RegistrationError>>;
}

/// `reqwest`-backed transport
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(feature = "ssr")]
impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "ssr")]
impl AuthTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<String, RegistrationError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| RegistrationError::Network(e.to_string()))?;

        tracing::debug!(status = %response.status(), "registration response received");

        response
            .text()
            .await
            .map_err(|e| RegistrationError::Network(e.to_string()))
    }
}

/// Browser `fetch` transport via `gloo-net`
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[cfg(not(feature = "ssr"))]
impl AuthTransport for GlooTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<String, RegistrationError> {
        use gloo_net::http::Request;

        let request = Request::post(url)
            .header("content-type", "application/json")
            .body(body)
            .map_err(|e| RegistrationError::Serialization(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| RegistrationError::Network(e.to_string()))?;

        tracing::debug!(status = response.status(), "registration response received");

        response
            .text()
            .await
            .map_err(|e| RegistrationError::Network(e.to_string()))
    }
}
