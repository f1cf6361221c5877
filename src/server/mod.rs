//! In-memory development API the editor talks to while there is no real
//! backend. Serves `/api/categories` and `/api/entries`.

pub mod error;
pub mod handlers;
pub mod store;
pub mod validation;

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

use crate::constants::{CATEGORIES_API_PATH, ENTRIES_API_PATH};
use crate::models::{Category, Entry};
use handlers::{
    StoredResource, create_resource, delete_resource, get_resource, list_resources,
    update_resource,
};
use store::InMemoryDb;

/// State shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<RwLock<InMemoryDb>>,
}

impl AppState {
    pub fn new(db: InMemoryDb) -> Self {
        Self {
            db: Arc::new(RwLock::new(db)),
        }
    }
}

fn resource_routes<T: StoredResource>(router: Router<AppState>, path: &str) -> Router<AppState> {
    router
        .route(
            &format!("/{}", path),
            get(list_resources::<T>).post(create_resource::<T>),
        )
        .route(
            &format!("/{}/{{id}}", path),
            get(get_resource::<T>)
                .put(update_resource::<T>)
                .delete(delete_resource::<T>),
        )
}

/// Routes for both collections, without CORS.
pub fn router(app_state: AppState) -> Router {
    let router = resource_routes::<Category>(Router::new(), CATEGORIES_API_PATH);
    resource_routes::<Entry>(router, ENTRIES_API_PATH).with_state(app_state)
}

pub fn cors_layer(frontend_origin: &str) -> Result<CorsLayer, String> {
    let origin = frontend_origin
        .parse::<HeaderValue>()
        .map_err(|e| format!("Invalid FRONTEND_ORIGIN '{}': {}", frontend_origin, e))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]))
}
