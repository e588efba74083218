//! End-to-end tests of the `/users` endpoints against real stores.

use actix_http::Request;
use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test::{self, TestRequest},
    web, App,
};
use rstest::rstest;
use serde_json::{json, Value};
use userdept::http;
use userdept::lifecycle::UserDeptSystem;
use userdept::seed::Seed;

async fn init_app(
    strict: bool,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let system = UserDeptSystem::with_seed(8, Seed::builtin()).expect("Failed to seed stores");
    test::init_service(
        App::new()
            .app_data(web::Data::new(system.resource(strict)))
            .configure(http::configure),
    )
    .await
}

async fn insert(
    app: &impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
    body: Value,
) -> Value {
    let response = test::call_service(
        app,
        TestRequest::post().uri("/users").set_json(body).to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    test::read_body_json(response).await
}

#[actix_web::test]
async fn alice_full_lifecycle() {
    let app = init_app(false).await;

    let created = insert(
        &app,
        json!({"name": "Alice", "email": "alice@x.com", "department": {"id": 1}}),
    )
    .await;
    let id = created["id"].as_u64().unwrap();
    assert_eq!(
        created,
        json!({
            "id": id,
            "name": "Alice",
            "email": "alice@x.com",
            "department": {"id": 1, "name": "Management"}
        })
    );

    let fetched: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri(&format!("/users/{id}")).to_request(),
    )
    .await;
    assert_eq!(fetched, created);

    let patched: Value = test::call_and_read_body_json(
        &app,
        TestRequest::patch()
            .uri(&format!("/users/{id}"))
            .set_json(json!({"name": "Alicia"}))
            .to_request(),
    )
    .await;
    assert_eq!(patched["name"], "Alicia");

    let fetched: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri(&format!("/users/{id}")).to_request(),
    )
    .await;
    assert_eq!(fetched["name"], "Alicia");
    assert_eq!(fetched["email"], "alice@x.com");
    assert_eq!(fetched["department"], json!({"id": 1, "name": "Management"}));

    let deleted = test::call_service(
        &app,
        TestRequest::delete().uri(&format!("/users/{id}")).to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let gone = test::call_service(
        &app,
        TestRequest::get().uri(&format!("/users/{id}")).to_request(),
    )
    .await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    assert!(test::read_body(gone).await.is_empty());
}

#[actix_web::test]
async fn list_returns_users_in_id_order() {
    let app = init_app(false).await;
    insert(&app, json!({"name": "Alice", "email": "a@x.com"})).await;
    insert(&app, json!({"name": "Bob", "email": "b@x.com", "department": {"id": 2}})).await;

    let users: Value =
        test::call_and_read_body_json(&app, TestRequest::get().uri("/users").to_request()).await;

    let names: Vec<_> = users
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(names, ["Alice", "Bob"]);
    assert_eq!(users[0]["department"], Value::Null);
    assert_eq!(users[1]["department"], json!({"id": 2, "name": "IT"}));
}

#[rstest]
#[case::put(TestRequest::put(), json!({"name": "A", "email": "a@x.com"}))]
#[case::patch(TestRequest::patch(), json!({"email": "a@x.com"}))]
#[case::delete(TestRequest::delete(), Value::Null)]
#[actix_web::test]
async fn mutating_unknown_user_is_not_found(#[case] request: TestRequest, #[case] body: Value) {
    let app = init_app(false).await;

    let request = if body.is_null() {
        request.uri("/users/42").to_request()
    } else {
        request.uri("/users/42").set_json(body).to_request()
    };
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let users: Value =
        test::call_and_read_body_json(&app, TestRequest::get().uri("/users").to_request()).await;
    assert_eq!(users, json!([]));
}

#[actix_web::test]
async fn put_replaces_every_field() {
    let app = init_app(false).await;
    let created = insert(
        &app,
        json!({"name": "Alice", "email": "alice@x.com", "department": {"id": 1}}),
    )
    .await;
    let id = created["id"].as_u64().unwrap();

    let replaced: Value = test::call_and_read_body_json(
        &app,
        TestRequest::put()
            .uri(&format!("/users/{id}"))
            .set_json(json!({"name": "A", "email": "a@x.com", "department": null}))
            .to_request(),
    )
    .await;

    assert_eq!(
        replaced,
        json!({"id": id, "name": "A", "email": "a@x.com", "department": null})
    );
}

#[actix_web::test]
async fn patch_with_only_unknown_keys_changes_nothing() {
    let app = init_app(false).await;
    let created = insert(&app, json!({"name": "Alice", "email": "alice@x.com"})).await;
    let id = created["id"].as_u64().unwrap();

    let patched: Value = test::call_and_read_body_json(
        &app,
        TestRequest::patch()
            .uri(&format!("/users/{id}"))
            .set_json(json!({"foo": "bar"}))
            .to_request(),
    )
    .await;

    assert_eq!(patched, created);
}

#[rstest]
#[case::lenient(false, StatusCode::OK)]
#[case::strict(true, StatusCode::UNPROCESSABLE_ENTITY)]
#[actix_web::test]
async fn patch_to_unknown_department(#[case] strict: bool, #[case] expected: StatusCode) {
    let app = init_app(strict).await;
    let created = insert(
        &app,
        json!({"name": "Alice", "email": "alice@x.com", "department": {"id": 2}}),
    )
    .await;
    let id = created["id"].as_u64().unwrap();

    let response = test::call_service(
        &app,
        TestRequest::patch()
            .uri(&format!("/users/{id}"))
            .set_json(json!({"department": {"id": 99}}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), expected);

    let fetched: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri(&format!("/users/{id}")).to_request(),
    )
    .await;
    assert_eq!(fetched["department"], json!({"id": 2, "name": "IT"}));
}

#[actix_web::test]
async fn non_numeric_id_is_not_found() {
    let app = init_app(false).await;
    let response =
        test::call_service(&app, TestRequest::get().uri("/users/abc").to_request()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case::not_json("{")]
#[case::mistyped_name(r#"{"name": 42}"#)]
#[actix_web::test]
async fn malformed_patch_body_is_bad_request(#[case] body: &'static str) {
    let app = init_app(false).await;
    let created = insert(&app, json!({"name": "Alice", "email": "alice@x.com"})).await;
    let id = created["id"].as_u64().unwrap();

    let response = test::call_service(
        &app,
        TestRequest::patch()
            .uri(&format!("/users/{id}"))
            .insert_header(("content-type", "application/json"))
            .set_payload(body)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
