//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API, the chat websocket, and Leptos SSR
//! rendering under a single Axum router. Static client assets (WASM, CSS)
//! are served from `/pkg`; stored uploads from `/uploads`.

pub mod auth;
pub mod groups;
pub mod users;
pub mod ws;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::services::upload;
use crate::state::AppState;

/// JSON API + websocket routes.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/users", post(auth::create_user))
        .route("/api/token", post(auth::login))
        .route("/api/users/me", get(auth::me))
        .route("/api/users/me/profile", put(users::update_profile))
        .route("/api/users/me/avatar", post(users::upload_avatar))
        .route("/api/groups", get(groups::list_groups).post(groups::create_group))
        .route("/api/groups/search", get(groups::search_groups))
        .route("/api/groups/{id}", get(groups::get_group))
        .route("/api/groups/{id}/join", post(groups::join_group))
        .route("/api/groups/{id}/leave", post(groups::leave_group))
        .route(
            "/api/groups/{id}/messages",
            get(groups::list_messages).post(groups::create_message),
        )
        .route("/api/groups/{id}/messages/image", post(groups::create_image_message))
        .route("/api/groups/{id}/messages/file", post(groups::create_file_message))
        .route("/ws/chat", get(ws::handle_ws))
        .route("/healthz", get(healthz))
        .nest_service("/uploads", ServeDir::new(upload::upload_root()))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes plus Leptos SSR for the SPA shell.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Client static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

/// Assemble the full router, falling back to API-only when the Leptos
/// configuration is unavailable (e.g. headless deployments).
pub fn app(state: AppState) -> Router {
    let router = match leptos_app(state.clone()) {
        Ok(router) => router,
        Err(e) => {
            tracing::warn!(error = %e, "leptos unavailable, serving API only");
            api_routes(state)
        }
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
