//! Header and method behaviour, checked against the bare router.

use axum::{
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use tower::ServiceExt;

mod common;
use common::sample_app;

async fn send(method: Method, uri: &str) -> axum::response::Response {
    sample_app()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn json_resources_carry_permissive_cors_headers() {
    for uri in [
        "/",
        "/catalog/movie/Hello,%20Ruby.json",
        "/meta/series/tt1748166.json",
        "/stream/movie/tt9999999.json",
    ] {
        let response = send(Method::GET, uri).await;
        let headers = response.headers();

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(headers[header::CONTENT_TYPE], "application/json", "{uri}");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*", "{uri}");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "*", "{uri}");
    }
}

#[tokio::test]
async fn not_found_is_plain_text_without_cors() {
    let response = send(Method::GET, "/unknown/foo").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"404 Not Found");
}

#[tokio::test]
async fn any_method_is_dispatched_the_same_way() {
    let response = send(Method::POST, "/stream/movie/tt1254207.json").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        value["streams"][0]["url"],
        "http://clips.vorwaerts-gmbh.de/big_buck_bunny.mp4"
    );
}

#[tokio::test]
async fn catalog_body_is_exact() {
    let response = send(Method::GET, "/catalog/series/Hello,%20Ruby.json").await;
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let expected = concat!(
        r#"{"metas":["#,
        r#"{"id":"tt1748166","type":"series","name":"Pioneer One","genres":["Drama"],"#,
        r#""poster":"https://images.metahub.space/poster/medium/tt1748166/img"},"#,
        r#"{"id":"hrbtt0147753","type":"series","name":"Captain Z-Ro","genres":["Sci-Fi"],"#,
        r#""poster":"https://images.metahub.space/poster/medium/hrbtt0147753/img"}"#,
        r#"]}"#
    );
    assert_eq!(std::str::from_utf8(&body).unwrap(), expected);
}
