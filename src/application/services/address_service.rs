use async_trait::async_trait;
use reqwest::Method;
use serde::de::IgnoredAny;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    application::models::{address::Address, ListResponse},
    constants::ADDRESSES_ENDPOINT,
    error::AppError,
    transport::http_client::ApiClient,
};

#[async_trait]
pub trait AddressService: Send + Sync {
    async fn addresses(&self) -> Result<Vec<Address>, AppError>;

    async fn create_address(&self, address: &Address) -> Result<(), AppError>;

    async fn update_address(&self, id: u64, address: &Address) -> Result<(), AppError>;

    async fn delete_address(&self, id: u64) -> Result<(), AppError>;
}

pub struct AddressServiceImpl<T: ApiClient> {
    client: Arc<T>,
}

impl<T: ApiClient> AddressServiceImpl<T> {
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: ApiClient + 'static> AddressService for AddressServiceImpl<T> {
    async fn addresses(&self) -> Result<Vec<Address>, AppError> {
        let list = self
            .client
            .request::<(), ListResponse<Address>>(Method::GET, ADDRESSES_ENDPOINT, None)
            .await?
            .into_vec();
        debug!("{} saved addresses", list.len());
        Ok(list)
    }

    async fn create_address(&self, address: &Address) -> Result<(), AppError> {
        address.validate()?;
        info!("Saving new address");

        let _: IgnoredAny = self
            .client
            .request(Method::POST, ADDRESSES_ENDPOINT, Some(address))
            .await?;
        Ok(())
    }

    async fn update_address(&self, id: u64, address: &Address) -> Result<(), AppError> {
        address.validate()?;
        info!("Updating address {}", id);

        let path = format!("{ADDRESSES_ENDPOINT}{id}/");
        let _: IgnoredAny = self
            .client
            .request(Method::PUT, &path, Some(address))
            .await?;
        Ok(())
    }

    async fn delete_address(&self, id: u64) -> Result<(), AppError> {
        info!("Deleting address {}", id);

        let path = format!("{ADDRESSES_ENDPOINT}{id}/");
        let _: IgnoredAny = self
            .client
            .request::<(), IgnoredAny>(Method::DELETE, &path, None)
            .await?;
        Ok(())
    }
}
