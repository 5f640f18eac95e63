//! Wire models for the upstream record services.
//!
//! All of these cross an HTTP boundary owned by another service, so every
//! struct serializes with camelCase field names to match the upstream
//! contracts.

pub mod codes;
pub mod identity;
pub mod services_card;
pub mod student;

pub use codes::{AccessChannelCode, IdentityTypeCode};
pub use identity::DigitalIdentity;
pub use services_card::ServicesCard;
pub use student::Student;
