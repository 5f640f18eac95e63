//! API request/response models.
//!
//! These mirror the camelCase wire contract of the callers (SSO plumbing),
//! distinct from the upstream-service models in `idgate_core::models`.

use idgate_core::models::ServicesCard;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub identifier_type: String,
    pub identifier_value: String,
    /// Card attributes, supplied when the identity provider is the
    /// services-card issuer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services_card: Option<ServicesCard>,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Whether both reference tables have been fetched and cached.
    pub codes_warm: bool,
}

/// JSON error body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
