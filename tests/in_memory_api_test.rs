mod common;

use axum::http::StatusCode;
use common::{router_request, test_router};
use ledger_editor::constants::ERR_CATEGORY_IN_USE;
use serde_json::{Value, json};

#[tokio::test]
async fn lists_seeded_collections() {
    let app = test_router();

    let (status, body) = router_request(&app, "GET", "/api/categories", None)
        .await
        .expect("list categories");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(5));

    let (status, body) = router_request(&app, "GET", "/api/entries", None)
        .await
        .expect("list entries");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["categoryId"], json!(1));
    assert_eq!(body[0]["type"], json!("expense"));
}

#[tokio::test]
async fn create_returns_created_record() {
    let app = test_router();

    let (status, body) = router_request(
        &app,
        "POST",
        "/api/categories",
        Some(json!({ "name": "Educação", "description": "Cursos e livros" })),
    )
    .await
    .expect("create category");

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], json!(6));
    assert_eq!(body["name"], json!("Educação"));
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let app = test_router();

    let (status, _) = router_request(&app, "DELETE", "/api/entries/6", None)
        .await
        .expect("delete entry");
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = router_request(
        &app,
        "POST",
        "/api/entries",
        Some(json!({
            "name": "Conta de Luz",
            "type": "expense",
            "amount": "120,35",
            "date": "10/11/2018",
            "paid": false,
            "categoryId": 1
        })),
    )
    .await
    .expect("create entry");

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], json!(7));
}

#[tokio::test]
async fn invalid_payload_is_422_with_error_list() {
    let app = test_router();

    let (status, body) = router_request(
        &app,
        "POST",
        "/api/categories",
        Some(json!({ "name": " " })),
    )
    .await
    .expect("create category");

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "errors": ["Nome não pode ficar em branco"] }));
}

#[tokio::test]
async fn malformed_json_is_422_with_error_list() {
    let app = test_router();

    let (status, body) = router_request(
        &app,
        "POST",
        "/api/entries",
        Some(json!({ "name": 42 })),
    )
    .await
    .expect("create entry");

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = body["errors"].as_array().expect("errors array");
    assert_eq!(errors.len(), 1);
}

#[tokio::test]
async fn update_uses_path_id() {
    let app = test_router();

    let (status, body) = router_request(
        &app,
        "PUT",
        "/api/categories/3",
        Some(json!({ "id": 99, "name": "Diversão", "description": null })),
    )
    .await
    .expect("update category");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(3));

    let (status, _) = router_request(&app, "GET", "/api/categories/99", None)
        .await
        .expect("get category");
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_records_are_404() {
    let app = test_router();

    for (method, payload) in [
        ("GET", None),
        ("PUT", Some(json!({ "name": "Outros" }))),
        ("DELETE", None),
    ] {
        let (status, _) = router_request(&app, method, "/api/categories/404", payload)
            .await
            .expect("request");
        assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
    }
}

#[tokio::test]
async fn category_in_use_cannot_be_deleted() {
    let app = test_router();

    let (status, body) = router_request(&app, "DELETE", "/api/categories/2", None)
        .await
        .expect("delete category");

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, Value::String(ERR_CATEGORY_IN_USE.to_string()));
}
