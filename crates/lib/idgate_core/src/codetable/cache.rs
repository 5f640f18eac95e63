//! In-memory cache of the identity-type and access-channel code tables.
//!
//! Each table is fetched from the reference-data service at most once per
//! process lifetime in the common path and then served from memory. Two
//! racing first callers may briefly duplicate a fetch; the entries are
//! idempotent, so the last write wins. Entries carry no expiry — restart
//! the process to pick up new codes.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::clients::{ClientError, CodesClient};
use crate::models::{AccessChannelCode, IdentityTypeCode};

type Table<T> = RwLock<Option<Arc<HashMap<String, T>>>>;

/// Cache of the two reference tables, owned by the login service's
/// dependency set rather than any process-wide singleton.
#[derive(Debug)]
pub struct CodeTableCache {
    client: CodesClient,
    identity_types: Table<IdentityTypeCode>,
    access_channels: Table<AccessChannelCode>,
}

impl CodeTableCache {
    pub fn new(client: CodesClient) -> Self {
        Self {
            client,
            identity_types: RwLock::new(None),
            access_channels: RwLock::new(None),
        }
    }

    /// Identity-type codes keyed by code, fetching on first use.
    ///
    /// A failed fetch caches nothing and propagates the upstream error
    /// unchanged; the next caller retries the fetch.
    pub async fn identity_type_codes(
        &self,
    ) -> Result<Arc<HashMap<String, IdentityTypeCode>>, ClientError> {
        if let Some(map) = self.identity_types.read().await.as_ref() {
            return Ok(Arc::clone(map));
        }
        info!("fetching identity type codes");
        let codes = self.client.identity_type_codes().await?;
        let map = Arc::new(index_identity_types(codes));
        *self.identity_types.write().await = Some(Arc::clone(&map));
        Ok(map)
    }

    /// Access-channel codes keyed by code, fetching on first use.
    pub async fn access_channel_codes(
        &self,
    ) -> Result<Arc<HashMap<String, AccessChannelCode>>, ClientError> {
        if let Some(map) = self.access_channels.read().await.as_ref() {
            return Ok(Arc::clone(map));
        }
        info!("fetching access channel codes");
        let codes = self.client.access_channel_codes().await?;
        let map = Arc::new(index_access_channels(codes));
        *self.access_channels.write().await = Some(Arc::clone(&map));
        Ok(map)
    }

    /// Populate both tables eagerly (startup warming).
    pub async fn warm(&self) -> Result<(), ClientError> {
        let types = self.identity_type_codes().await?;
        let channels = self.access_channel_codes().await?;
        info!(
            identity_types = types.len(),
            access_channels = channels.len(),
            "code tables warmed"
        );
        Ok(())
    }

    /// Whether both tables are populated.
    pub async fn is_warm(&self) -> bool {
        self.identity_types.read().await.is_some() && self.access_channels.read().await.is_some()
    }
}

/// Index entries by code, in the order received (a duplicate code keeps the
/// later entry).
fn index_identity_types(codes: Vec<IdentityTypeCode>) -> HashMap<String, IdentityTypeCode> {
    codes
        .into_iter()
        .map(|c| (c.identity_type_code.clone(), c))
        .collect()
}

fn index_access_channels(codes: Vec<AccessChannelCode>) -> HashMap<String, AccessChannelCode> {
    codes
        .into_iter()
        .map(|c| (c.access_channel_code.clone(), c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_type(code: &str, label: &str) -> IdentityTypeCode {
        IdentityTypeCode {
            identity_type_code: code.into(),
            label: label.into(),
            description: None,
            display_order: None,
            effective_date: None,
            expiry_date: None,
        }
    }

    #[test]
    fn indexes_by_code() {
        let map = index_identity_types(vec![
            identity_type("BCSC", "BC Services Card"),
            identity_type("BASIC", "Basic account"),
        ]);
        assert_eq!(map.len(), 2);
        assert_eq!(map["BCSC"].label, "BC Services Card");
    }

    #[test]
    fn duplicate_code_keeps_later_entry() {
        let map = index_identity_types(vec![
            identity_type("BCSC", "old"),
            identity_type("BCSC", "new"),
        ]);
        assert_eq!(map.len(), 1);
        assert_eq!(map["BCSC"].label, "new");
    }
}
