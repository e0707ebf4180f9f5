use crate::common::create_store;
use mockito::Server;
use pretty_assertions::assert_eq;
use storefront_client::constants::ACCESS_TOKEN_KEY;
use storefront_client::session::guard::{authorize_path, Decision};
use storefront_client::storage::TokenStore;

#[tokio::test]
async fn guard_follows_session_lifecycle() {
    let mut server = Server::new_async().await;
    let _profile = server
        .mock("GET", "/accounts/profile/")
        .with_status(200)
        .with_body(r#"{"id": 3, "seller_status": "pending"}"#)
        .create_async()
        .await;

    let (store, tokens) = create_store(&server);
    tokens.set(ACCESS_TOKEN_KEY, "A").unwrap();

    assert_eq!(authorize_path(&store, "/orders"), Decision::Wait);
    assert_eq!(authorize_path(&store, "/products/blue-mug"), Decision::Allow);

    store.start().await;
    assert_eq!(authorize_path(&store, "/orders/12"), Decision::Allow);
    assert_eq!(authorize_path(&store, "/seller/dashboard"), Decision::Forbidden);

    store.logout();
    assert_eq!(authorize_path(&store, "/checkout"), Decision::Login);
    assert_eq!(authorize_path(&store, "/"), Decision::Allow);
}
