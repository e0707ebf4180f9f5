use async_trait::async_trait;
use reqwest::Method;
use serde::de::IgnoredAny;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    application::models::catalog::{AddToCartRequest, Cart, Product, UpdateCartItemRequest},
    constants::{
        CART_ADD_ENDPOINT, CART_CLEAR_ENDPOINT, CART_ENDPOINT, CART_UPDATE_ITEM_ENDPOINT,
        PRODUCTS_ENDPOINT,
    },
    error::AppError,
    transport::http_client::ApiClient,
};

/// Product lookup and the caller's cart.
///
/// Cart calls need a logged-in session; product lookup works anonymously.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn product(&self, slug: &str) -> Result<Product, AppError>;

    async fn cart(&self) -> Result<Cart, AppError>;

    /// Adds `qty` units of `product` to the cart. `qty` must be positive.
    async fn add_to_cart(&self, product: u64, qty: u32) -> Result<(), AppError>;

    /// Sets a cart line's quantity. A quantity of zero removes the line.
    async fn update_cart_item(&self, item_id: u64, qty: u32) -> Result<(), AppError>;

    async fn clear_cart(&self) -> Result<(), AppError>;
}

pub struct CatalogServiceImpl<T: ApiClient> {
    client: Arc<T>,
}

impl<T: ApiClient> CatalogServiceImpl<T> {
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: ApiClient + 'static> CatalogService for CatalogServiceImpl<T> {
    async fn product(&self, slug: &str) -> Result<Product, AppError> {
        let slug = slug.trim_matches('/');
        if slug.is_empty() {
            return Err(AppError::Validation("product slug is required".to_string()));
        }
        let path = format!("{PRODUCTS_ENDPOINT}{slug}/");
        self.client
            .request::<(), Product>(Method::GET, &path, None)
            .await
    }

    async fn cart(&self) -> Result<Cart, AppError> {
        let cart = self
            .client
            .request::<(), Cart>(Method::GET, CART_ENDPOINT, None)
            .await?;
        debug!("Cart holds {} units", cart.item_count());
        Ok(cart)
    }

    async fn add_to_cart(&self, product: u64, qty: u32) -> Result<(), AppError> {
        if qty == 0 {
            return Err(AppError::Validation("quantity must be at least 1".to_string()));
        }
        info!("Adding product {} x{} to cart", product, qty);

        let body = AddToCartRequest { product, qty };
        let _: IgnoredAny = self
            .client
            .request(Method::POST, CART_ADD_ENDPOINT, Some(&body))
            .await?;
        Ok(())
    }

    async fn update_cart_item(&self, item_id: u64, qty: u32) -> Result<(), AppError> {
        let body = UpdateCartItemRequest { item_id, qty };
        let _: IgnoredAny = self
            .client
            .request(Method::PATCH, CART_UPDATE_ITEM_ENDPOINT, Some(&body))
            .await?;
        Ok(())
    }

    async fn clear_cart(&self) -> Result<(), AppError> {
        info!("Clearing cart");
        let _: IgnoredAny = self
            .client
            .request::<(), IgnoredAny>(Method::POST, CART_CLEAR_ENDPOINT, None)
            .await?;
        Ok(())
    }
}
