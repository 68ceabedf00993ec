//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::routes::{
    add_comment, create_agent, create_lead, delete_agent, delete_lead, health_handler,
    leads_closed_last_week, list_agents, list_comments, list_leads, pipeline_count, root_handler,
    update_lead,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool) -> Router {
    let app_state = AppState { db_pool: pool };

    // CORS: the API is consumed from browsers on any origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        // Agents
        .route("/api/agents", post(create_agent))
        .route("/api/agents", get(list_agents))
        .route("/api/agents/:id", delete(delete_agent))
        // Leads
        .route("/api/leads", post(create_lead))
        .route("/api/leads", get(list_leads))
        .route("/api/leads/:id", put(update_lead))
        .route("/api/leads/:id", delete(delete_lead))
        // Comments (lead-scoped)
        .route("/api/leads/:id/comments", post(add_comment))
        .route("/api/leads/:id/comments", get(list_comments))
        // Reports
        .route("/api/report/last-week", get(leads_closed_last_week))
        .route("/api/report/pipeline", get(pipeline_count))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
