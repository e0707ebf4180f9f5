use crate::common::{create_store, rest_config};
use mockito::{Matcher, Server};
use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use storefront_client::constants::ACCESS_TOKEN_KEY;
use storefront_client::storage::{MemoryTokenStore, TokenStore};
use storefront_client::transport::http_client::{ApiClient, Dispatcher};

#[tokio::test]
async fn no_token_means_no_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/catalog/products/mug/")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"id": 1}"#)
        .create_async()
        .await;

    let tokens = Arc::new(MemoryTokenStore::new());
    let dispatcher = Dispatcher::new(&rest_config(&server), tokens).unwrap();
    let request = dispatcher
        .builder(Method::GET, "/catalog/products/mug/")
        .build()
        .unwrap();
    let response = dispatcher.send(request).await.unwrap();

    assert!(response.status().is_success());
    mock.assert_async().await;
}

#[tokio::test]
async fn header_tracks_store_across_login_and_logout() {
    let mut server = Server::new_async().await;
    let with_bearer = server
        .mock("GET", "/catalog/cart/")
        .match_header("authorization", "Bearer A")
        .with_status(200)
        .with_body(r#"{"items": []}"#)
        .expect(1)
        .create_async()
        .await;
    let without_bearer = server
        .mock("GET", "/catalog/cart/")
        .match_header("authorization", Matcher::Missing)
        .with_status(401)
        .with_body(r#"{"detail": "Authentication credentials were not provided."}"#)
        .expect(1)
        .create_async()
        .await;

    let (store, tokens) = create_store(&server);
    let client = store.client();

    tokens.set(ACCESS_TOKEN_KEY, "A").unwrap();
    let _: Value = client
        .request::<(), Value>(Method::GET, "/catalog/cart/", None)
        .await
        .unwrap();

    store.logout();
    let request = client
        .builder(Method::GET, "/catalog/cart/")
        .header(AUTHORIZATION, "Bearer A")
        .build()
        .unwrap();
    let response = client.send(request).await.unwrap();
    assert_eq!(response.status().as_u16(), 401);

    with_bearer.assert_async().await;
    without_bearer.assert_async().await;
}
