use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, require_admin, require_official,
    security_headers_middleware, trace_id,
};
use crate::routes::{about, admin_auth, clubs, gallery, health, news, official_auth, players};
use crate::services::session_events::SessionEvents;
use shared::jwt::JwtConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub jwt: Arc<JwtConfig>,
    pub session_events: SessionEvents,
}

pub fn create_app(
    config: Config,
    pool: PgPool,
    jwt: JwtConfig,
    session_events: SessionEvents,
) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
        jwt: Arc::new(jwt),
        session_events,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Public routes: search/verification, clubs, published news, about,
    // gallery, and both login surfaces.
    let public_routes = Router::new()
        .route("/api/v1/players/search", get(players::search_players))
        .route("/api/v1/players/:id", get(players::get_player))
        .route("/api/v1/clubs", get(clubs::list_clubs))
        .route("/api/v1/clubs/:id", get(clubs::get_club))
        .route("/api/v1/clubs/:id/players", get(players::list_club_players))
        .route("/api/v1/news", get(news::list_published))
        .route("/api/v1/news/:id", get(news::get_article))
        .route("/api/v1/about", get(about::list_sections))
        .route("/api/v1/about/:section", get(about::get_section))
        .route("/api/v1/gallery", get(gallery::list_images))
        .route("/api/v1/gallery/:id", get(gallery::get_image))
        .route("/api/v1/admin/auth/login", post(admin_auth::login))
        .route("/api/v1/admin/auth/refresh", post(admin_auth::refresh))
        .route("/api/v1/admin/auth/logout", post(admin_auth::logout))
        .route("/api/v1/officials/auth/signup", post(official_auth::signup))
        .route("/api/v1/officials/auth/login", post(official_auth::login))
        .route("/api/v1/officials/auth/refresh", post(official_auth::refresh))
        .route("/api/v1/officials/auth/logout", post(official_auth::logout));

    // Admin routes (require an admin access token)
    let admin_routes = Router::new()
        .route("/api/v1/players", get(players::list_players))
        .route("/api/v1/players", post(players::create_player))
        .route("/api/v1/players/:id", put(players::update_player))
        .route("/api/v1/players/:id/status", patch(players::set_player_status))
        .route("/api/v1/players/:id", delete(players::delete_player))
        .route("/api/v1/clubs", post(clubs::create_club))
        .route("/api/v1/clubs/:id", put(clubs::update_club))
        .route("/api/v1/clubs/:id", delete(clubs::delete_club))
        .route("/api/v1/admin/news", get(news::list_all))
        .route("/api/v1/news", post(news::create_article))
        .route("/api/v1/news/:id", put(news::update_article))
        .route("/api/v1/news/:id", delete(news::delete_article))
        .route("/api/v1/about/:section", put(about::upsert_section))
        .route("/api/v1/gallery", post(gallery::create_image))
        .route("/api/v1/gallery/:id", put(gallery::update_image))
        .route("/api/v1/gallery/:id", delete(gallery::delete_image))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    // Official portal routes (require an official access token)
    let official_routes = Router::new()
        .route("/api/v1/officials/me", get(official_auth::me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_official,
        ));

    // Health and metrics (no authentication required)
    let ops_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Merge all routes
    Router::new()
        .merge(ops_routes)
        .merge(public_routes)
        .merge(admin_routes)
        .merge(official_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
