use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use hello_backend_rs::{
    app::App,
    modules::hello::{
        repository::{Error, Hello, HelloMapper, MemoryHelloMapper},
        service::HelloService,
    },
    types::{AppContext, Context},
};
use serde_json::{json, Value};
use tower::ServiceExt;

struct UnavailableMapper;

#[async_trait]
impl HelloMapper for UnavailableMapper {
    async fn select_by_id(&self, _id: i32) -> Result<Option<Hello>, Error> {
        Err(Error::UnexpectedError)
    }
}

fn hello(id: i32, message: &str) -> Hello {
    Hello {
        id,
        message: message.to_string(),
        created_at: NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap(),
        updated_at: None,
    }
}

fn router_with(mapper: Arc<dyn HelloMapper>) -> Router {
    let ctx = Context::new(
        AppContext {
            host: String::from("127.0.0.1"),
            port: 0,
        },
        HelloService::new(mapper),
    );

    App::new(Arc::new(ctx)).router()
}

fn router() -> Router {
    router_with(Arc::new(MemoryHelloMapper::new(vec![
        hello(1, "Hello, world!"),
        hello(2, "Hola, mundo!"),
    ])))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = router
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    (status, content_type, body)
}

#[tokio::test]
async fn returns_stored_hello_as_json() {
    let (status, content_type, body) = get(router(), "/hello/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        json!({
            "id": 1,
            "message": "Hello, world!",
            "created_at": "2024-07-01T09:30:00",
            "updated_at": null
        })
    );
}

#[tokio::test]
async fn body_id_matches_requested_id() {
    for id in [1, 2] {
        let (status, _, body) = get(router(), &format!("/hello/{}", id)).await;
        let hello: Hello = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(hello.id, id);
    }
}

#[tokio::test]
async fn missing_hello_is_not_found() {
    let (status, _, body) = get(router(), "/hello/404").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        json!({ "error": "Hello not found" })
    );
}

#[tokio::test]
async fn non_integer_id_is_a_client_error() {
    let (status, _, _) = get(router(), "/hello/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn out_of_range_id_is_a_client_error() {
    let (status, _, _) = get(router(), "/hello/99999999999").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unavailable_store_is_a_server_error() {
    let (status, _, body) = get(router_with(Arc::new(UnavailableMapper)), "/hello/1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        json!({ "error": "Failed to fetch hello" })
    );
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let router = router();

    let first = get(router.clone(), "/hello/2").await;
    let second = get(router, "/hello/2").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _, _) = get(router(), "/hellos/1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
