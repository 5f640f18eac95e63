//! Digital identity — the canonical account record linking an external
//! identifier (type + value) to an optional student and access history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A digital identity record as stored by the digital-identifier service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalIdentity {
    /// Server-generated primary key. `None` until the record is created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_identity_id: Option<Uuid>,

    /// Linked student, if this identity has been associated with one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,

    /// Must be a key of the identity-type reference table.
    pub identity_type_code: String,

    /// Upper-cased external identifier value.
    pub identity_value: String,

    pub last_access_date: DateTime<Utc>,
    pub last_access_channel_code: String,

    pub create_user: String,
    pub create_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_date: Option<DateTime<Utc>>,
}
