//! Client for the reference-data (code table) service.

use reqwest::Client;

use super::{ClientError, json_required, transport};
use crate::models::{AccessChannelCode, IdentityTypeCode};

#[derive(Debug, Clone)]
pub struct CodesClient {
    http: Client,
    base_url: String,
}

impl CodesClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub async fn identity_type_codes(&self) -> Result<Vec<IdentityTypeCode>, ClientError> {
        let url = format!("{}/identityTypeCodes", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(transport(&url))?;
        json_required(resp, &url).await
    }

    pub async fn access_channel_codes(&self) -> Result<Vec<AccessChannelCode>, ClientError> {
        let url = format!("{}/accessChannelCodes", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(transport(&url))?;
        json_required(resp, &url).await
    }
}
