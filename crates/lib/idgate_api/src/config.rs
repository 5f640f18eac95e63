//! API server configuration.

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3200").
    pub bind_addr: String,
    /// Base URL of the digital-identifier service.
    pub digital_id_api_url: String,
    /// Base URL of the services-card service.
    pub services_card_api_url: String,
    /// Base URL of the student service.
    pub student_api_url: String,
    /// Base URL of the reference-data (code table) service.
    pub codes_api_url: String,
    /// Identity-type code whose logins carry a services card.
    pub services_card_identity_type: String,
    /// Access channel stamped on digital identities created at login.
    pub login_access_channel: String,
    /// Audit user recorded on records created by this service.
    pub audit_user: String,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                      | Default                                   |
    /// |-------------------------------|-------------------------------------------|
    /// | `BIND_ADDR`                   | `127.0.0.1:3200`                          |
    /// | `DIGITAL_ID_API_URL`          | `http://localhost:8081/api/v1/digital-id` |
    /// | `SERVICES_CARD_API_URL`       | `http://localhost:8082/api/v1/services-card` |
    /// | `STUDENT_API_URL`             | `http://localhost:8083/api/v1/student`    |
    /// | `CODES_API_URL`               | `http://localhost:8081/api/v1/digital-id` |
    /// | `SERVICES_CARD_IDENTITY_TYPE` | `BCSC`                                    |
    /// | `LOGIN_ACCESS_CHANNEL`        | `OSC`                                     |
    /// | `AUDIT_USER`                  | `IDGATE`                                  |
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("BIND_ADDR", "127.0.0.1:3200"),
            digital_id_api_url: env_or(
                "DIGITAL_ID_API_URL",
                "http://localhost:8081/api/v1/digital-id",
            ),
            services_card_api_url: env_or(
                "SERVICES_CARD_API_URL",
                "http://localhost:8082/api/v1/services-card",
            ),
            student_api_url: env_or("STUDENT_API_URL", "http://localhost:8083/api/v1/student"),
            // The code tables are served by the digital-identifier service
            // unless pointed elsewhere.
            codes_api_url: env_or("CODES_API_URL", "http://localhost:8081/api/v1/digital-id"),
            services_card_identity_type: env_or("SERVICES_CARD_IDENTITY_TYPE", "BCSC"),
            login_access_channel: env_or("LOGIN_ACCESS_CHANNEL", "OSC"),
            audit_user: env_or("AUDIT_USER", "IDGATE"),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.into())
}
