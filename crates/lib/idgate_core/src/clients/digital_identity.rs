//! Client for the digital-identifier service.

use reqwest::Client;

use super::{ClientError, expect_success, json_or_not_found, json_required, transport};
use crate::models::DigitalIdentity;

/// Wraps the digital-identifier service: lookup by (type, value), create,
/// and update of [`DigitalIdentity`] records.
#[derive(Debug, Clone)]
pub struct DigitalIdentityClient {
    http: Client,
    base_url: String,
}

impl DigitalIdentityClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Look up a digital identity by identifier type and (already
    /// upper-cased) identifier value. `Ok(None)` when no record matches.
    pub async fn find(
        &self,
        identity_type: &str,
        identity_value: &str,
    ) -> Result<Option<DigitalIdentity>, ClientError> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[
                ("identitytype", identity_type),
                ("identityvalue", identity_value),
            ])
            .send()
            .await
            .map_err(transport(&self.base_url))?;
        json_or_not_found(resp, &self.base_url).await
    }

    /// Create a digital identity, returning the stored record (with its
    /// server-generated key).
    pub async fn create(&self, entity: &DigitalIdentity) -> Result<DigitalIdentity, ClientError> {
        let resp = self
            .http
            .post(&self.base_url)
            .json(entity)
            .send()
            .await
            .map_err(transport(&self.base_url))?;
        json_required(resp, &self.base_url).await
    }

    /// Update an existing digital identity. The response body is ignored.
    pub async fn update(&self, entity: &DigitalIdentity) -> Result<(), ClientError> {
        let resp = self
            .http
            .put(&self.base_url)
            .json(entity)
            .send()
            .await
            .map_err(transport(&self.base_url))?;
        expect_success(resp, &self.base_url).await
    }
}
