use crate::common::create_store;
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use serde_json::json;
use storefront_client::constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use storefront_client::session::interface::SessionView;
use storefront_client::session::user::SellerStatus;
use storefront_client::storage::{TokenStore, TokenStoreExt};

#[tokio::test]
async fn no_token_recovery_is_offline() {
    let mut server = Server::new_async().await;
    let any = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let (store, tokens) = create_store(&server);
    store.start().await;

    assert!(store.user().is_none());
    assert!(!store.is_loading());
    assert!(!store.is_authenticated());
    assert_eq!(tokens.access_token(), None);
    any.assert_async().await;
}

#[tokio::test]
async fn login_then_profile() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", "/accounts/login/")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(
            json!({"phone_number": "9999999999", "password": "pw"}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access": "A", "refresh": "R"}"#)
        .create_async()
        .await;
    let profile = server
        .mock("GET", "/accounts/profile/")
        .match_header("authorization", "Bearer A")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 1, "name": "X", "seller_status": "approved"}"#)
        .create_async()
        .await;

    let (store, tokens) = create_store(&server);
    store.start().await;
    let outcome = store.login("9999999999", "pw").await;

    assert!(outcome.is_success());
    let user = store.user().unwrap();
    assert_eq!(user.seller_status, SellerStatus::Approved);
    assert!(store.is_authenticated());
    assert!(store.is_approved_seller());
    assert_eq!(tokens.access_token(), Some("A".to_string()));
    assert_eq!(tokens.refresh_token(), Some("R".to_string()));
    login.assert_async().await;
    profile.assert_async().await;
}

#[tokio::test]
async fn rejected_login_persists_nothing() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", "/accounts/login/")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "Invalid credentials"}"#)
        .create_async()
        .await;
    let profile = server
        .mock("GET", "/accounts/profile/")
        .expect(0)
        .create_async()
        .await;

    let (store, tokens) = create_store(&server);
    store.start().await;
    let outcome = store.login("9999999999", "wrong").await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.detail(), Some("Invalid credentials"));
    assert!(store.user().is_none());
    assert_eq!(tokens.access_token(), None);
    assert_eq!(tokens.refresh_token(), None);
    login.assert_async().await;
    profile.assert_async().await;
}

#[tokio::test]
async fn expired_token_is_torn_down() {
    let mut server = Server::new_async().await;
    let profile = server
        .mock("GET", "/accounts/profile/")
        .match_header("authorization", "Bearer old")
        .with_status(401)
        .with_body(r#"{"detail": "Given token not valid for any token type"}"#)
        .create_async()
        .await;

    let (store, tokens) = create_store(&server);
    tokens.set(ACCESS_TOKEN_KEY, "old").unwrap();
    tokens.set(REFRESH_TOKEN_KEY, "older").unwrap();

    store.start().await;

    assert_eq!(tokens.access_token(), None);
    assert_eq!(tokens.refresh_token(), None);
    assert!(store.user().is_none());
    assert!(!store.is_loading());
    profile.assert_async().await;
}

#[tokio::test]
async fn logout_is_total() {
    let mut server = Server::new_async().await;
    let _profile = server
        .mock("GET", "/accounts/profile/")
        .with_status(200)
        .with_body(r#"{"id": 5}"#)
        .create_async()
        .await;

    let (store, tokens) = create_store(&server);
    tokens.set(ACCESS_TOKEN_KEY, "A").unwrap();
    tokens.set(REFRESH_TOKEN_KEY, "R").unwrap();
    store.start().await;
    assert!(store.is_authenticated());

    for _ in 0..2 {
        store.logout();
        assert_eq!(tokens.access_token(), None);
        assert_eq!(tokens.refresh_token(), None);
        assert!(store.user().is_none());
        assert!(!store.is_authenticated());
    }
}

#[tokio::test]
async fn state_feed_reports_login_and_logout() {
    let mut server = Server::new_async().await;
    let _login = server
        .mock("POST", "/accounts/login/")
        .with_status(200)
        .with_body(r#"{"access": "A", "refresh": "R"}"#)
        .create_async()
        .await;
    let _profile = server
        .mock("GET", "/accounts/profile/")
        .with_status(200)
        .with_body(r#"{"id": 1, "seller_status": "pending"}"#)
        .create_async()
        .await;

    let (store, _) = create_store(&server);
    let mut rx = store.subscribe();
    assert!(rx.borrow_and_update().is_loading());

    store.start().await;
    store.login("9999999999", "pw").await;
    assert!(rx.has_changed().unwrap());
    {
        let state = rx.borrow_and_update();
        assert!(state.is_authenticated());
        assert_eq!(state.user().unwrap().seller_status, SellerStatus::Pending);
    }

    store.logout();
    assert!(rx.has_changed().unwrap());
    assert!(!rx.borrow_and_update().is_authenticated());
}
