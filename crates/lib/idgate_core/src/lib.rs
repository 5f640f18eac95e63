//! # idgate_core
//!
//! Core domain logic for Idgate: wire models for the upstream record
//! services, thin HTTP clients over them, the reference-data code table
//! cache, and the login orchestration service.

pub mod clients;
pub mod codetable;
pub mod login;
pub mod models;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
