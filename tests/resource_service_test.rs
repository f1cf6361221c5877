mod common;

use axum::{
    Router,
    http::StatusCode,
    routing::{post, put},
};
use common::{http_client, spawn_router, spawn_test_api, unreachable_base_url};
use ledger_editor::ServiceError;
use ledger_editor::categories::category_service;
use ledger_editor::entries::entry_service;
use ledger_editor::models::{Category, Entry, EntryType};

fn new_entry(name: &str) -> Entry {
    Entry {
        id: None,
        name: name.to_string(),
        description: None,
        kind: EntryType::Expense,
        amount: "1200".to_string(),
        date: "05/03/2024".to_string(),
        paid: false,
        category_id: Some(1),
    }
}

#[tokio::test]
async fn list_returns_full_collection() {
    let api = spawn_test_api().await.expect("spawn api");
    let service = category_service(http_client(), &api.base_url);

    let categories = service.list().await.expect("list categories");

    assert_eq!(categories.len(), 5);
    assert_eq!(categories[0].name, "Moradia");
}

#[tokio::test]
async fn get_by_id_returns_record() {
    let api = spawn_test_api().await.expect("spawn api");
    let service = entry_service(http_client(), &api.base_url);

    let entry = service.get_by_id(3).await.expect("get entry");

    assert_eq!(entry.id, Some(3));
    assert_eq!(entry.kind, EntryType::Revenue);
    assert_eq!(entry.amount, "4405,49");
}

#[tokio::test]
async fn get_by_id_missing_is_not_found() {
    let api = spawn_test_api().await.expect("spawn api");
    let service = entry_service(http_client(), &api.base_url);

    let err = service.get_by_id(999).await.unwrap_err();

    assert!(matches!(err, ServiceError::NotFound), "got {err:?}");
}

#[tokio::test]
async fn create_assigns_id() {
    let api = spawn_test_api().await.expect("spawn api");
    let service = entry_service(http_client(), &api.base_url);

    let created = service.create(&new_entry("Aluguel")).await.expect("create");

    assert_eq!(created.id, Some(7));
    assert_eq!(created.name, "Aluguel");
    assert_eq!(api.state.db.read().await.entries.len(), 7);
}

#[tokio::test]
async fn create_rejected_with_validation_messages() {
    let api = spawn_test_api().await.expect("spawn api");
    let service = category_service(http_client(), &api.base_url);

    let err = service
        .create(&Category {
            name: "A".to_string(),
            ..Category::default()
        })
        .await
        .unwrap_err();

    assert_eq!(
        err.validation_messages(),
        Some(&["Nome deve ter no mínimo 2 caracteres".to_string()][..])
    );
}

#[tokio::test]
async fn update_replaces_record() {
    let api = spawn_test_api().await.expect("spawn api");
    let service = category_service(http_client(), &api.base_url);

    let mut category = service.get_by_id(3).await.expect("get category");
    category.name = "Lazer e Cultura".to_string();

    let updated = service.update(&category).await.expect("update");

    assert_eq!(updated, category);
    let stored = service.get_by_id(3).await.expect("reload");
    assert_eq!(stored.name, "Lazer e Cultura");
}

#[tokio::test]
async fn update_without_id_fails_before_request() {
    let service = category_service(http_client(), "http://127.0.0.1:9");

    let err = service.update(&Category::default()).await.unwrap_err();

    assert!(matches!(err, ServiceError::MissingId));
}

#[tokio::test]
async fn delete_removes_record() {
    let api = spawn_test_api().await.expect("spawn api");
    let service = entry_service(http_client(), &api.base_url);

    service.delete(6).await.expect("delete");

    assert!(matches!(
        service.get_by_id(6).await,
        Err(ServiceError::NotFound)
    ));
    assert!(matches!(service.delete(6).await, Err(ServiceError::NotFound)));
}

#[tokio::test]
async fn delete_category_in_use_is_server_error() {
    let api = spawn_test_api().await.expect("spawn api");
    let service = category_service(http_client(), &api.base_url);

    let err = service.delete(1).await.unwrap_err();

    assert!(
        matches!(err, ServiceError::Server { status: 409, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let base_url = unreachable_base_url().await.expect("free port");
    let service = category_service(http_client(), &base_url);

    let err = service.list().await.unwrap_err();

    assert!(matches!(err, ServiceError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn update_with_empty_response_returns_sent_record() {
    let app = Router::new().route(
        "/api/categories/{id}",
        put(|| async { StatusCode::NO_CONTENT }),
    );
    let base_url = spawn_router(app).await.expect("spawn stub");
    let service = category_service(http_client(), &base_url);
    let category = Category {
        id: Some(3),
        name: "Lazer".to_string(),
        description: Some("Cinema e parques".to_string()),
    };

    let updated = service.update(&category).await.expect("update");

    assert_eq!(updated, category);
}

#[tokio::test]
async fn unstructured_422_is_server_error() {
    let app = Router::new().route(
        "/api/categories",
        post(|| async { (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable") }),
    );
    let base_url = spawn_router(app).await.expect("spawn stub");
    let service = category_service(http_client(), &base_url);

    let err = service
        .create(&Category {
            name: "Educação".to_string(),
            ..Category::default()
        })
        .await
        .unwrap_err();

    assert!(
        matches!(&err, ServiceError::Server { status: 422, message } if message == "unprocessable"),
        "got {err:?}"
    );
    assert!(err.validation_messages().is_none());
}
