//! # idgate_api
//!
//! HTTP API library for Idgate.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use idgate_core::clients::{
    CodesClient, DigitalIdentityClient, ServicesCardClient, StudentClient,
};
use idgate_core::codetable::CodeTableCache;
use idgate_core::login::{LoginService, LoginSettings};
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{health, login};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Login orchestration service.
    pub login: Arc<LoginService>,
    /// Reference-data cache (also held by the login service).
    pub codes: Arc<CodeTableCache>,
    /// API configuration.
    pub config: ApiConfig,
}

impl AppState {
    /// Wire the dependency graph from configuration: one shared HTTP
    /// client, the four upstream clients, the code-table cache, and the
    /// login service on top of them.
    pub fn from_config(config: ApiConfig) -> Self {
        let http = reqwest::Client::new();
        let codes = Arc::new(CodeTableCache::new(CodesClient::new(
            http.clone(),
            config.codes_api_url.clone(),
        )));
        let login = Arc::new(LoginService::new(
            DigitalIdentityClient::new(http.clone(), config.digital_id_api_url.clone()),
            ServicesCardClient::new(http.clone(), config.services_card_api_url.clone()),
            StudentClient::new(http, config.student_api_url.clone()),
            Arc::clone(&codes),
            LoginSettings {
                services_card_type_code: config.services_card_identity_type.clone(),
                access_channel_code: config.login_access_channel.clone(),
                audit_user: config.audit_user.clone(),
            },
        ));
        Self {
            login,
            codes,
            config,
        }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/login", post(login::perform_login_handler))
        .route(
            "/api/login/{identifier_type}/{identifier_value}",
            get(login::login_entity_handler),
        )
        .layer(cors)
        .with_state(state)
}
