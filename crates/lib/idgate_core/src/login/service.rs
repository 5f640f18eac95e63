//! The login orchestration service.
//!
//! All remote calls within a workflow are sequential: each step consumes
//! the output of the one before it. There is no retry and no compensation —
//! a digital identity created earlier in a workflow stays created even if a
//! later services-card or student step fails.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use super::{LoginError, LoginResult};
use crate::clients::{DigitalIdentityClient, ServicesCardClient, StudentClient};
use crate::codetable::CodeTableCache;
use crate::models::{DigitalIdentity, ServicesCard};

/// Pluggable workflow settings, supplied by configuration.
#[derive(Debug, Clone)]
pub struct LoginSettings {
    /// Identity-type code whose logins carry a services card.
    pub services_card_type_code: String,
    /// Access channel stamped on digital identities created here.
    pub access_channel_code: String,
    /// Audit user recorded on records created here.
    pub audit_user: String,
}

/// Orchestrates the login workflows across the three record services,
/// validating inputs against the code-table cache it owns.
pub struct LoginService {
    digital_identities: DigitalIdentityClient,
    services_cards: ServicesCardClient,
    students: StudentClient,
    codes: Arc<CodeTableCache>,
    settings: LoginSettings,
}

impl LoginService {
    pub fn new(
        digital_identities: DigitalIdentityClient,
        services_cards: ServicesCardClient,
        students: StudentClient,
        codes: Arc<CodeTableCache>,
        settings: LoginSettings,
    ) -> Self {
        Self {
            digital_identities,
            services_cards,
            students,
            codes,
            settings,
        }
    }

    // -----------------------------------------------------------------------
    // Entry points
    // -----------------------------------------------------------------------

    /// Record a login: resolve or create the digital identity for
    /// `(identifier_type, identifier_value)`, stamping its last access, and
    /// resolve or create the linked services card when a payload is given.
    ///
    /// Side effects and errors are the only observable outcomes.
    pub async fn perform_login(
        &self,
        identifier_type: &str,
        identifier_value: &str,
        services_card: Option<ServicesCard>,
    ) -> Result<(), LoginError> {
        self.validate(identifier_type, identifier_value).await?;
        let identifier_value = identifier_value.to_uppercase();

        match self
            .digital_identities
            .find(identifier_type, &identifier_value)
            .await?
        {
            Some(existing) => {
                let stamped = stamp_last_access(existing);
                self.digital_identities.update(&stamped).await?;
                if let Some(card) = services_card {
                    let digital_identity_id = require_id(&stamped)?;
                    self.create_or_update_services_card(card, digital_identity_id)
                        .await?;
                }
            }
            None => {
                info!(identifier_type, "creating digital identity on first login");
                let entity = self.new_digital_identity(identifier_type, &identifier_value);
                let created = self.digital_identities.create(&entity).await?;
                if let Some(card) = services_card {
                    let digital_identity_id = require_id(&created)?;
                    self.create_or_update_services_card(card, digital_identity_id)
                        .await?;
                }
            }
        }
        Ok(())
    }

    /// Look up an existing login and compose the [`LoginResult`].
    ///
    /// By contract a login must already exist here, so an absent digital
    /// identity is an orchestration error, not an empty result. The same
    /// holds for a student referenced by the record; an absent services
    /// card is tolerated.
    pub async fn login_entity(
        &self,
        identifier_type: &str,
        identifier_value: &str,
    ) -> Result<LoginResult, LoginError> {
        self.validate(identifier_type, identifier_value).await?;
        let identifier_value = identifier_value.to_uppercase();

        let digital_identity = self
            .digital_identities
            .find(identifier_type, &identifier_value)
            .await?
            .ok_or_else(|| {
                LoginError::Orchestration(format!(
                    "digital identity was not found; identifierType: {identifier_type} \
                     identifierValue: {identifier_value}"
                ))
            })?;
        let digital_identity_id = require_id(&digital_identity)?;

        let services_card = if identifier_type == self.settings.services_card_type_code {
            self.services_cards.find_by_did(&identifier_value).await?
        } else {
            None
        };

        let student = match &digital_identity.student_id {
            Some(student_id) => Some(self.students.find(student_id).await?.ok_or_else(|| {
                LoginError::Orchestration(format!(
                    "student {student_id} was not found; URL was: {}",
                    self.students.url_for(student_id)
                ))
            })?),
            None => None,
        };

        Ok(LoginResult {
            digital_identity_id,
            student,
            services_card,
        })
    }

    // -----------------------------------------------------------------------
    // Services card resolve/create/update
    // -----------------------------------------------------------------------

    /// Attach the resolved digital-identity key to the card, then update the
    /// existing record for the card's `did` or create one.
    async fn create_or_update_services_card(
        &self,
        mut card: ServicesCard,
        digital_identity_id: Uuid,
    ) -> Result<(), LoginError> {
        card.digital_identity_id = Some(digital_identity_id);
        match self.services_cards.find_by_did(&card.did.to_uppercase()).await? {
            Some(_) => {
                // Cleared so the backend re-stamps them.
                card.create_date = None;
                card.update_date = None;
                self.services_cards.update(&card).await?;
            }
            None => {
                info!(did = %card.did, "creating services card record");
                self.services_cards.create(&card).await?;
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Validation and record construction
    // -----------------------------------------------------------------------

    /// `identifier_type` must be a key of the identity-type reference table
    /// and `identifier_value` must be non-empty; checked in that order,
    /// before any record-service call.
    async fn validate(
        &self,
        identifier_type: &str,
        identifier_value: &str,
    ) -> Result<(), LoginError> {
        let identity_types = self.codes.identity_type_codes().await?;
        if !identity_types.contains_key(identifier_type) {
            error!(identifier_type, "invalid identifier type");
            return Err(LoginError::InvalidParameter("identifierType"));
        }
        if identifier_value.is_empty() {
            return Err(LoginError::InvalidParameter("identifierValue"));
        }
        Ok(())
    }

    /// A fresh digital identity for a first login, stamped with the
    /// configured access channel and audit user.
    fn new_digital_identity(&self, identity_type: &str, identity_value: &str) -> DigitalIdentity {
        let now = Utc::now();
        DigitalIdentity {
            digital_identity_id: None,
            student_id: None,
            identity_type_code: identity_type.to_string(),
            identity_value: identity_value.to_string(),
            last_access_date: now,
            last_access_channel_code: self.settings.access_channel_code.clone(),
            create_user: self.settings.audit_user.clone(),
            create_date: now,
            update_user: Some(self.settings.audit_user.clone()),
            update_date: Some(now),
        }
    }
}

/// Move the last-access timestamp forward; the channel stays as recorded.
fn stamp_last_access(mut entity: DigitalIdentity) -> DigitalIdentity {
    entity.last_access_date = Utc::now();
    entity
}

/// The server-generated key, mandatory once a record exists.
fn require_id(entity: &DigitalIdentity) -> Result<Uuid, LoginError> {
    entity.digital_identity_id.ok_or_else(|| {
        LoginError::Orchestration("digital identity record is missing its identifier".into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::CodesClient;

    fn test_service() -> LoginService {
        let http = reqwest::Client::new();
        LoginService::new(
            DigitalIdentityClient::new(http.clone(), "http://localhost/digital-id"),
            ServicesCardClient::new(http.clone(), "http://localhost/services-card"),
            StudentClient::new(http.clone(), "http://localhost/student"),
            Arc::new(CodeTableCache::new(CodesClient::new(
                http,
                "http://localhost/codes",
            ))),
            LoginSettings {
                services_card_type_code: "BCSC".into(),
                access_channel_code: "OSC".into(),
                audit_user: "IDGATE".into(),
            },
        )
    }

    #[tokio::test]
    async fn new_digital_identity_carries_configured_stamps() {
        let service = test_service();
        let entity = service.new_digital_identity("BCSC", "ABC123");
        assert!(entity.digital_identity_id.is_none());
        assert!(entity.student_id.is_none());
        assert_eq!(entity.identity_type_code, "BCSC");
        assert_eq!(entity.identity_value, "ABC123");
        assert_eq!(entity.last_access_channel_code, "OSC");
        assert_eq!(entity.create_user, "IDGATE");
        assert_eq!(entity.update_user.as_deref(), Some("IDGATE"));
    }

    #[tokio::test]
    async fn stamp_last_access_keeps_recorded_channel() {
        let service = test_service();
        let mut entity = service.new_digital_identity("BCSC", "ABC123");
        entity.last_access_channel_code = "MOBILE".into();
        let before = entity.last_access_date;
        let stamped = stamp_last_access(entity);
        assert_eq!(stamped.last_access_channel_code, "MOBILE");
        assert!(stamped.last_access_date >= before);
    }

    #[tokio::test]
    async fn require_id_rejects_unsaved_record() {
        let service = test_service();
        let entity = service.new_digital_identity("BCSC", "ABC123");
        assert!(matches!(
            require_id(&entity),
            Err(LoginError::Orchestration(_))
        ));
    }

    #[test]
    fn invalid_parameter_names_the_parameter() {
        let err = LoginError::InvalidParameter("identifierType");
        assert_eq!(err.to_string(), "invalid parameter: identifierType");
    }
}
