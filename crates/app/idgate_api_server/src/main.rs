//! Idgate API server binary.
//!
//! Fronts the digital-identifier, services-card, student, and
//! reference-data services with the login orchestration API.

use clap::Parser;
use idgate_api::config::ApiConfig;
use tracing::{info, warn};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "idgate_api_server", about = "Idgate login orchestration API server")]
struct Args {
    /// Address to bind the HTTP listener.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3200")]
    bind_addr: String,

    /// Base URL of the digital-identifier service.
    #[arg(
        long,
        env = "DIGITAL_ID_API_URL",
        default_value = "http://localhost:8081/api/v1/digital-id"
    )]
    digital_id_api_url: String,

    /// Base URL of the services-card service.
    #[arg(
        long,
        env = "SERVICES_CARD_API_URL",
        default_value = "http://localhost:8082/api/v1/services-card"
    )]
    services_card_api_url: String,

    /// Base URL of the student service.
    #[arg(
        long,
        env = "STUDENT_API_URL",
        default_value = "http://localhost:8083/api/v1/student"
    )]
    student_api_url: String,

    /// Base URL of the reference-data (code table) service.
    #[arg(
        long,
        env = "CODES_API_URL",
        default_value = "http://localhost:8081/api/v1/digital-id"
    )]
    codes_api_url: String,

    /// Identity-type code whose logins carry a services card.
    #[arg(long, env = "SERVICES_CARD_IDENTITY_TYPE", default_value = "BCSC")]
    services_card_identity_type: String,

    /// Access channel stamped on digital identities created at login.
    #[arg(long, env = "LOGIN_ACCESS_CHANNEL", default_value = "OSC")]
    login_access_channel: String,

    /// Audit user recorded on records created by this service.
    #[arg(long, env = "AUDIT_USER", default_value = "IDGATE")]
    audit_user: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,idgate_api=debug,idgate_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let config = ApiConfig {
        bind_addr: args.bind_addr,
        digital_id_api_url: args.digital_id_api_url,
        services_card_api_url: args.services_card_api_url,
        student_api_url: args.student_api_url,
        codes_api_url: args.codes_api_url,
        services_card_identity_type: args.services_card_identity_type,
        login_access_channel: args.login_access_channel,
        audit_user: args.audit_user,
    };

    info!(
        digital_id_api_url = %config.digital_id_api_url,
        services_card_api_url = %config.services_card_api_url,
        student_api_url = %config.student_api_url,
        codes_api_url = %config.codes_api_url,
        "starting idgate_api_server"
    );

    let state = idgate_api::AppState::from_config(config.clone());

    // Warm the reference caches so the first login doesn't pay the fetch.
    // A failure here is not fatal: the tables populate lazily on demand.
    if let Err(e) = state.codes.warm().await {
        warn!("code table warmup failed: {e}");
    }

    let app = idgate_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
