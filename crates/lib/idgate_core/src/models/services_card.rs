//! Services card profile — a linked identity profile sourced from the
//! card-issuing identity provider, correlated by the card's own `did` key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A services card record as stored by the services-card service.
///
/// Exactly one digital identity is linked per card; the link is attached by
/// the login orchestrator before any create or update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services_card_info_id: Option<Uuid>,

    /// Key of the linked [`DigitalIdentity`](super::DigitalIdentity).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_identity_id: Option<Uuid>,

    /// Card-issued correlation key.
    pub did: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_assurance_level: Option<String>,

    /// Cleared before an update so the backend re-stamps it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
    /// Cleared before an update so the backend re-stamps it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_payload_deserializes() {
        let card: ServicesCard = serde_json::from_value(serde_json::json!({
            "did": "ABC123",
            "givenName": "Jane",
            "surname": "Doe"
        }))
        .unwrap();
        assert_eq!(card.did, "ABC123");
        assert!(card.digital_identity_id.is_none());
        assert!(card.create_date.is_none());
    }
}
