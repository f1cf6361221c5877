use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::{debug, info};

use crate::constants::ERR_CATEGORY_IN_USE;
use crate::models::{Category, Entry};
use crate::resource::Resource;
use crate::server::AppState;
use crate::server::error::ApiError;
use crate::server::store::{Collection, InMemoryDb};
use crate::server::validation::{validate_category, validate_entry};

/// A resource the in-memory API can serve.
pub trait StoredResource: Resource {
    fn collection(db: &InMemoryDb) -> &Collection<Self>;

    fn collection_mut(db: &mut InMemoryDb) -> &mut Collection<Self>;

    /// Validation messages for a record about to be stored; empty when valid.
    fn validate(&self, db: &InMemoryDb) -> Vec<String>;

    /// Refuses deletes that would leave dangling references.
    fn check_delete(_id: i64, _db: &InMemoryDb) -> Result<(), ApiError> {
        Ok(())
    }
}

impl StoredResource for Category {
    fn collection(db: &InMemoryDb) -> &Collection<Self> {
        &db.categories
    }

    fn collection_mut(db: &mut InMemoryDb) -> &mut Collection<Self> {
        &mut db.categories
    }

    fn validate(&self, _db: &InMemoryDb) -> Vec<String> {
        validate_category(self)
    }

    fn check_delete(id: i64, db: &InMemoryDb) -> Result<(), ApiError> {
        if db.entries.values().any(|e| e.category_id == Some(id)) {
            return Err(ApiError::Conflict(ERR_CATEGORY_IN_USE.to_string()));
        }
        Ok(())
    }
}

impl StoredResource for Entry {
    fn collection(db: &InMemoryDb) -> &Collection<Self> {
        &db.entries
    }

    fn collection_mut(db: &mut InMemoryDb) -> &mut Collection<Self> {
        &mut db.entries
    }

    fn validate(&self, db: &InMemoryDb) -> Vec<String> {
        validate_entry(db, self)
    }
}

// Malformed JSON is reported like any other validation failure so clients
// always get the `{ "errors": [...] }` shape on 422.
fn payload<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(record)| record)
        .map_err(|rejection| ApiError::Validation(vec![rejection.body_text()]))
}

pub async fn list_resources<T: StoredResource>(
    State(app_state): State<AppState>,
) -> Json<Vec<T>> {
    let db = app_state.db.read().await;
    Json(T::collection(&db).all())
}

pub async fn get_resource<T: StoredResource>(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<T>, ApiError> {
    let db = app_state.db.read().await;
    T::collection(&db)
        .get(id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn create_resource<T: StoredResource>(
    State(app_state): State<AppState>,
    body: Result<Json<T>, JsonRejection>,
) -> Result<(StatusCode, Json<T>), ApiError> {
    let record = payload(body)?;
    let mut db = app_state.db.write().await;

    let errors = record.validate(&db);
    if !errors.is_empty() {
        debug!(path = T::API_PATH, ?errors, "create rejected");
        return Err(ApiError::Validation(errors));
    }

    let stored = T::collection_mut(&mut db).insert(record);
    info!(path = T::API_PATH, id = ?stored.id(), "resource created");
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn update_resource<T: StoredResource>(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<T>, JsonRejection>,
) -> Result<Json<T>, ApiError> {
    let record = payload(body)?;
    let mut db = app_state.db.write().await;

    if !T::collection(&db).contains(id) {
        return Err(ApiError::NotFound);
    }

    let errors = record.validate(&db);
    if !errors.is_empty() {
        debug!(path = T::API_PATH, id, ?errors, "update rejected");
        return Err(ApiError::Validation(errors));
    }

    let stored = T::collection_mut(&mut db)
        .replace(id, record)
        .ok_or(ApiError::NotFound)?;
    info!(path = T::API_PATH, id, "resource updated");
    Ok(Json(stored))
}

pub async fn delete_resource<T: StoredResource>(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut db = app_state.db.write().await;

    if !T::collection(&db).contains(id) {
        return Err(ApiError::NotFound);
    }
    T::check_delete(id, &db)?;

    T::collection_mut(&mut db).remove(id);
    info!(path = T::API_PATH, id, "resource deleted");
    Ok(StatusCode::NO_CONTENT)
}
