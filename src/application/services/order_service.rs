use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    application::models::{
        order::{CreateOrderRequest, CreatedOrder, Order},
        ListResponse,
    },
    constants::{ORDERS_ENDPOINT, ORDER_CREATE_ENDPOINT},
    error::AppError,
    transport::http_client::ApiClient,
};

#[async_trait]
pub trait OrderService: Send + Sync {
    /// The caller's orders, newest first as the server returns them.
    async fn orders(&self) -> Result<Vec<Order>, AppError>;

    /// Places an order for the current cart contents.
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<CreatedOrder, AppError>;
}

pub struct OrderServiceImpl<T: ApiClient> {
    client: Arc<T>,
}

impl<T: ApiClient> OrderServiceImpl<T> {
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: ApiClient + 'static> OrderService for OrderServiceImpl<T> {
    async fn orders(&self) -> Result<Vec<Order>, AppError> {
        let orders = self
            .client
            .request::<(), ListResponse<Order>>(Method::GET, ORDERS_ENDPOINT, None)
            .await?
            .into_vec();
        debug!("{} orders fetched", orders.len());
        Ok(orders)
    }

    async fn create_order(&self, request: &CreateOrderRequest) -> Result<CreatedOrder, AppError> {
        info!("Placing order to address {}", request.address_id);

        let created: CreatedOrder = self
            .client
            .request(Method::POST, ORDER_CREATE_ENDPOINT, Some(request))
            .await?;

        info!("Order {} placed", created.id);
        Ok(created)
    }
}
