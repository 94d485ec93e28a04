mod support;

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use todopad::adapter::inbound::http::middleware::{RequestTracing, REQUEST_ID_HEADER};
use todopad::adapter::inbound::http::routes;
use todopad::adapter::outbound::{MemoryStore, SqliteTodoStore};
use todopad::domain::TodoId;
use todopad::port::TodoStore;

use support::body_text;
use support::temp_db::TempDb;

macro_rules! todo_app {
    ($store:expr, $ty:ty) => {
        test::init_service(
            App::new()
                .app_data($store.clone())
                .wrap(RequestTracing)
                .configure(routes::<$ty>),
        )
        .await
    };
}

fn location(resp: &actix_web::dev::ServiceResponse) -> Option<&str> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

fn is_html(resp: &actix_web::dev::ServiceResponse) -> bool {
    resp.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/html"))
}

#[actix_web::test]
async fn index_without_items_renders_empty_list() {
    let store = web::Data::new(MemoryStore::new());
    let app = todo_app!(store, MemoryStore);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
    assert!(body_text(resp).await.contains("No todos yet"));
}

#[actix_web::test]
async fn post_root_creates_and_renders_list() {
    let store = web::Data::new(MemoryStore::new());
    let app = todo_app!(store, MemoryStore);

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("title", "Buy milk"), ("description", "2% from the store")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("<td>Buy milk</td>"));
    assert!(body.contains("<td>2% from the store</td>"));

    let items = store.list_all().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, TodoId::new(1));
}

#[actix_web::test]
async fn short_desc_field_name_is_accepted() {
    let store = web::Data::new(MemoryStore::new());
    let app = todo_app!(store, MemoryStore);

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("title", "Water plants"), ("desc", "balcony only")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let items = store.list_all().await.unwrap();
    assert_eq!(items[0].description, "balcony only");
}

#[actix_web::test]
async fn empty_title_is_rejected_with_bad_request() {
    let store = web::Data::new(MemoryStore::new());
    let app = todo_app!(store, MemoryStore);

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("title", "   "), ("description", "something")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await.contains("title cannot be empty"));
    assert!(store.list_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn missing_field_is_rejected_with_bad_request() {
    let store = web::Data::new(MemoryStore::new());
    let app = todo_app!(store, MemoryStore);

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("title", "Buy milk")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp)
        .await
        .contains("missing required field: description"));
}

#[actix_web::test]
async fn edit_form_is_prefilled() {
    let store = web::Data::new(MemoryStore::new());
    let app = todo_app!(store, MemoryStore);
    let draft = todopad::domain::TodoDraft::try_new(Some("Buy milk"), Some("2% from the store"))
        .unwrap();
    store.create(draft).await.unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/update/1").to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("action=\"/update/1\""));
    assert!(body.contains("value=\"Buy milk\""));
    assert!(body.contains(">2% from the store</textarea>"));
}

#[actix_web::test]
async fn unknown_ids_are_not_found() {
    let store = web::Data::new(MemoryStore::new());
    let app = todo_app!(store, MemoryStore);

    let edit = test::call_service(
        &app,
        test::TestRequest::get().uri("/update/99").to_request(),
    )
    .await;
    assert_eq!(edit.status(), StatusCode::NOT_FOUND);

    let update = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/update/99")
            .set_form([("title", "a"), ("description", "b")])
            .to_request(),
    )
    .await;
    assert_eq!(update.status(), StatusCode::NOT_FOUND);

    let delete = test::call_service(
        &app,
        test::TestRequest::get().uri("/delete/99").to_request(),
    )
    .await;
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);
    assert!(body_text(delete).await.contains("todo 99 not found"));
}

#[actix_web::test]
async fn non_numeric_id_is_not_found() {
    let store = web::Data::new(MemoryStore::new());
    let app = todo_app!(store, MemoryStore);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/delete/abc").to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(is_html(&resp));
    assert!(body_text(resp).await.contains("nothing found at /delete/abc"));

    let edit = test::call_service(
        &app,
        test::TestRequest::get().uri("/update/abc").to_request(),
    )
    .await;
    assert_eq!(edit.status(), StatusCode::NOT_FOUND);
    assert!(is_html(&edit));
}

#[actix_web::test]
async fn duplicate_form_field_renders_error_page() {
    let store = web::Data::new(MemoryStore::new());
    let app = todo_app!(store, MemoryStore);

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("title", "Buy milk"), ("description", "a"), ("desc", "b")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(is_html(&resp));
    assert!(body_text(resp).await.contains("invalid form submission"));
    assert!(store.list_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn non_form_body_renders_error_page() {
    let store = web::Data::new(MemoryStore::new());
    let app = todo_app!(store, MemoryStore);

    let req = test::TestRequest::post()
        .uri("/")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload(r#"{"title":"Buy milk","description":"2%"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(is_html(&resp));
    assert!(store.list_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn invalid_update_leaves_item_unchanged() {
    let store = web::Data::new(MemoryStore::new());
    let app = todo_app!(store, MemoryStore);
    let draft = todopad::domain::TodoDraft::try_new(Some("Buy milk"), Some("2% from the store"))
        .unwrap();
    store.create(draft).await.unwrap();

    let blank = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/update/1")
            .set_form([("title", "  "), ("description", "oat")])
            .to_request(),
    )
    .await;
    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(blank).await.contains("title cannot be empty"));

    let missing = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/update/1")
            .set_form([("title", "Buy oat milk")])
            .to_request(),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    let items = store.list_all().await.unwrap();
    assert_eq!(items[0].title, "Buy milk");
    assert_eq!(items[0].description, "2% from the store");
}

#[actix_web::test]
async fn title_length_counts_characters() {
    let store = web::Data::new(MemoryStore::new());
    let app = todo_app!(store, MemoryStore);
    let title = "\u{1F95B}".repeat(40);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/")
            .set_form([("title", title.as_str()), ("description", "forty bottles")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(store.list_all().await.unwrap()[0].title, title);

    let too_long = "\u{1F95B}".repeat(41);
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/")
            .set_form([("title", too_long.as_str()), ("description", "one too many")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn request_id_is_echoed_or_generated() {
    let store = web::Data::new(MemoryStore::new());
    let app = todo_app!(store, MemoryStore);

    let echoed = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/health")
            .insert_header((REQUEST_ID_HEADER, "abc-123"))
            .to_request(),
    )
    .await;
    assert_eq!(
        echoed.headers().get(REQUEST_ID_HEADER).unwrap().to_str().unwrap(),
        "abc-123"
    );
    assert_eq!(body_text(echoed).await, "ok");

    let generated = test::call_service(
        &app,
        test::TestRequest::get().uri("/health").to_request(),
    )
    .await;
    let id = generated.headers().get(REQUEST_ID_HEADER).unwrap().to_str().unwrap();
    assert_eq!(id.len(), 36, "expected a uuid, got {id}");
}

#[actix_web::test]
async fn milk_scenario_against_sqlite() {
    let db = TempDb::create();
    let store = web::Data::new(db.store());
    let app = todo_app!(store, SqliteTodoStore);

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/")
            .set_form([("title", "Buy milk"), ("description", "2% from the store")])
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::OK);
    let items = store.list_all().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, TodoId::new(1));
    assert_eq!(items[0].title, "Buy milk");
    let created_at = items[0].created_at;

    let updated = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/update/1")
            .set_form([("title", "Buy oat milk"), ("description", "organic")])
            .to_request(),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::FOUND);
    assert_eq!(location(&updated), Some("/"));

    let listed = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let body = body_text(listed).await;
    assert!(body.contains("<td>Buy oat milk</td>"));
    assert!(!body.contains("<td>Buy milk</td>"));
    let items = store.list_all().await.unwrap();
    assert_eq!(items[0].id, TodoId::new(1));
    assert_eq!(items[0].created_at, created_at);

    let deleted = test::call_service(
        &app,
        test::TestRequest::get().uri("/delete/1").to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::FOUND);
    assert_eq!(location(&deleted), Some("/"));
    assert!(store.list_all().await.unwrap().is_empty());

    let again = test::call_service(
        &app,
        test::TestRequest::get().uri("/delete/1").to_request(),
    )
    .await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn sqlite_data_survives_reopening() {
    let db = TempDb::create();
    let first = db.store();
    let draft = todopad::domain::TodoDraft::try_new(Some("Persist me"), Some("across pools"))
        .unwrap();
    first.create(draft).await.unwrap();

    let pool = todopad::adapter::outbound::sqlite::database::create_pool(db.url(), 1).unwrap();
    let reopened = SqliteTodoStore::new(pool);
    let items = reopened.list_all().await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Persist me");
}
