pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod templates;
pub mod utils;

use crate::config::AppConfig;
use crate::services::metadata::MetadataStore;
use crate::services::storage::ImageStorage;
use axum::Router;
use axum::extract::FromRef;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum_extra::extract::cookie::Key;
use std::sync::Arc;
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub storage: Arc<ImageStorage>,
    pub store: Arc<MetadataStore>,
    key: Key,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let key = config.session_key();
        Self {
            storage: Arc::new(ImageStorage::new(&config.upload_root)),
            store: Arc::new(MetadataStore::new(&config.upload_root)),
            config: Arc::new(config),
            key,
        }
    }
}

// Lets SignedCookieJar extract its signing key from the app state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.key.clone()
    }
}

/// Builds the full router. Galleries and the landing page are public;
/// upload, delete, and edit sit behind the session guard. Image bytes are
/// served straight from the upload tree under `/uploads`.
///
/// The category route is a single parameterized handler validated against
/// the fixed registry, registered after the static routes so `/login`,
/// `/upload`, and friends keep priority.
pub fn create_app(state: AppState) -> Router {
    let guard = from_fn_with_state(state.clone(), middleware::auth::require_login);

    Router::new()
        .route("/", get(handlers::gallery::index))
        .route(
            "/login",
            get(handlers::auth::login_form).post(handlers::auth::login),
        )
        .route("/logout", get(handlers::auth::logout))
        .route(
            "/upload",
            get(handlers::images::upload_form)
                .post(handlers::images::upload)
                .layer(guard.clone()),
        )
        .route(
            "/delete/:category/:filename",
            post(handlers::images::delete).layer(guard.clone()),
        )
        .route(
            "/edit/:category/:filename",
            get(handlers::images::edit_form)
                .post(handlers::images::edit)
                .layer(guard),
        )
        .nest_service("/uploads", ServeDir::new(&state.config.upload_root))
        .route("/:category", get(handlers::gallery::show_category))
        .with_state(state)
}
