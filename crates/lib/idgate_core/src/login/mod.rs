//! Login orchestration — resolve or create a digital identity, link the
//! services card, and assemble the composite login result.

pub mod service;

pub use service::{LoginService, LoginSettings};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::clients::ClientError;
use crate::models::{ServicesCard, Student};

/// Errors surfaced by the login workflows.
#[derive(Debug, Error)]
pub enum LoginError {
    /// A caller-supplied parameter failed validation.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// An unexpected upstream condition: a non-404 failure, a 404 where the
    /// record was mandatory, or an undecodable response body.
    #[error("{0}")]
    Orchestration(String),
}

impl From<ClientError> for LoginError {
    fn from(e: ClientError) -> Self {
        LoginError::Orchestration(e.to_string())
    }
}

/// Composite output of a login lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    pub digital_identity_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<Student>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services_card: Option<ServicesCard>,
}
