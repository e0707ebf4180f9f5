use crate::common::create_store;
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use serde_json::json;
use storefront_client::application::models::address::Address;
use storefront_client::application::models::order::CreateOrderRequest;
use storefront_client::application::services::address_service::{
    AddressService, AddressServiceImpl,
};
use storefront_client::application::services::catalog_service::{
    CatalogService, CatalogServiceImpl,
};
use storefront_client::application::services::order_service::{OrderService, OrderServiceImpl};

#[tokio::test]
async fn login_add_to_cart_and_place_order() {
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
        .with_body(r#"{"id": 1}"#)
        .create_async()
        .await;
    let add = server
        .mock("POST", "/catalog/cart/add/")
        .match_header("authorization", "Bearer A")
        .match_body(Matcher::Json(json!({"product": 7, "qty": 1})))
        .with_status(201)
        .with_body(r#"{"detail": "Added"}"#)
        .create_async()
        .await;
    let cart = server
        .mock("GET", "/catalog/cart/")
        .match_header("authorization", "Bearer A")
        .with_status(200)
        .with_body(r#"{"items": [{"id": 11, "qty": 1, "total_with_gst": "234.82"}], "grand_total": "234.82"}"#)
        .create_async()
        .await;
    let addresses = server
        .mock("GET", "/catalog/addresses/")
        .with_status(200)
        .with_body(
            r#"[{"id": 4, "address_line_1": "a", "city": "Pune", "state": "MH", "pincode": "411001"},
                {"id": 5, "address_line_1": "b", "city": "Pune", "state": "MH", "pincode": "411002", "is_default": true}]"#,
        )
        .create_async()
        .await;
    let order = server
        .mock("POST", "/catalog/orders/create/")
        .match_header("authorization", "Bearer A")
        .match_body(Matcher::Json(json!({"address_id": 5, "voucher_code": "SAVE10"})))
        .with_status(201)
        .with_body(r#"{"id": 12}"#)
        .create_async()
        .await;

    let (store, _) = create_store(&server);
    store.start().await;
    assert!(store.login("9999999999", "pw").await.is_success());

    let client = store.client();
    let catalog = CatalogServiceImpl::new(client.clone());
    let address_book = AddressServiceImpl::new(client.clone());
    let orders = OrderServiceImpl::new(client);

    catalog.add_to_cart(7, 1).await.unwrap();
    let current = catalog.cart().await.unwrap();
    assert_eq!(current.item_count(), 1);

    let saved = address_book.addresses().await.unwrap();
    let ship_to = Address::preferred(&saved).and_then(|a| a.id).unwrap();
    let created = orders
        .create_order(&CreateOrderRequest::new(ship_to, Some("SAVE10")))
        .await
        .unwrap();

    assert_eq!(created.id, 12);
    add.assert_async().await;
    cart.assert_async().await;
    addresses.assert_async().await;
    order.assert_async().await;
}
