//! HTTP clients for the upstream record and reference-data services.
//!
//! Each client wraps a shared [`reqwest::Client`] plus a base URL. Lookups
//! return `Result<Option<T>, ClientError>`: `Ok(Some)` for a found record,
//! `Ok(None)` for a 404, `Err` for everything else — so callers branch on
//! an explicit outcome instead of inspecting error subtypes. No client
//! retries; a failure surfaces immediately.

pub mod codes;
pub mod digital_identity;
pub mod services_card;
pub mod student;

pub use codes::CodesClient;
pub use digital_identity::DigitalIdentityClient;
pub use services_card::ServicesCardClient;
pub use student::StudentClient;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors from an upstream HTTP call.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} from {url}: {body}")]
    Upstream {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Decode a JSON body, treating 404 as `Ok(None)`.
pub(crate) async fn json_or_not_found<T: DeserializeOwned>(
    resp: Response,
    url: &str,
) -> Result<Option<T>, ClientError> {
    if resp.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    json_required(resp, url).await.map(Some)
}

/// Decode a JSON body; any non-success status is an error.
pub(crate) async fn json_required<T: DeserializeOwned>(
    resp: Response,
    url: &str,
) -> Result<T, ClientError> {
    if !resp.status().is_success() {
        return Err(upstream_error(resp, url).await);
    }
    resp.json().await.map_err(|source| ClientError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Check the status of a response whose body is not needed.
pub(crate) async fn expect_success(resp: Response, url: &str) -> Result<(), ClientError> {
    if !resp.status().is_success() {
        return Err(upstream_error(resp, url).await);
    }
    Ok(())
}

async fn upstream_error(resp: Response, url: &str) -> ClientError {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .unwrap_or_else(|_| "<no body>".to_string());
    ClientError::Upstream {
        url: url.to_string(),
        status,
        body,
    }
}

pub(crate) fn transport(url: &str) -> impl FnOnce(reqwest::Error) -> ClientError + '_ {
    move |source| ClientError::Transport {
        url: url.to_string(),
        source,
    }
}
