//! Client for the services-card service.

use reqwest::Client;

use super::{ClientError, expect_success, json_or_not_found, transport};
use crate::models::ServicesCard;

/// Wraps the services-card service: lookup by `did` correlation key, create,
/// and update of [`ServicesCard`] records.
#[derive(Debug, Clone)]
pub struct ServicesCardClient {
    http: Client,
    base_url: String,
}

impl ServicesCardClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Look up a services card by its (already upper-cased) `did`.
    /// `Ok(None)` when no record matches.
    pub async fn find_by_did(&self, did: &str) -> Result<Option<ServicesCard>, ClientError> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("did", did)])
            .send()
            .await
            .map_err(transport(&self.base_url))?;
        json_or_not_found(resp, &self.base_url).await
    }

    pub async fn create(&self, card: &ServicesCard) -> Result<(), ClientError> {
        let resp = self
            .http
            .post(&self.base_url)
            .json(card)
            .send()
            .await
            .map_err(transport(&self.base_url))?;
        expect_success(resp, &self.base_url).await
    }

    pub async fn update(&self, card: &ServicesCard) -> Result<(), ClientError> {
        let resp = self
            .http
            .put(&self.base_url)
            .json(card)
            .send()
            .await
            .map_err(transport(&self.base_url))?;
        expect_success(resp, &self.base_url).await
    }
}
