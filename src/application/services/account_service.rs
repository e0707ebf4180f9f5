use async_trait::async_trait;
use reqwest::Method;
use serde::de::IgnoredAny;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    application::models::{
        account::{CompanyInfo, Notification, ProfileUpdate, SignupRequest},
        ListResponse,
    },
    constants::{ABOUT_ENDPOINT, NOTIFICATIONS_ENDPOINT, PROFILE_ENDPOINT, SIGNUP_ENDPOINT},
    error::AppError,
    session::user::UserProfile,
    transport::http_client::ApiClient,
};

/// Account endpoints other than login, which belongs to the session store.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Registers a new account. Does not log in.
    async fn signup(&self, request: &SignupRequest) -> Result<(), AppError>;

    async fn profile(&self) -> Result<UserProfile, AppError>;

    /// Saves profile edits and returns the profile the server now holds.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, AppError>;

    async fn notifications(&self) -> Result<Vec<Notification>, AppError>;

    async fn mark_notification_read(&self, id: u64) -> Result<(), AppError>;

    /// Company details for the about page. Needs no session.
    async fn about(&self) -> Result<CompanyInfo, AppError>;
}

pub struct AccountServiceImpl<T: ApiClient> {
    client: Arc<T>,
}

impl<T: ApiClient> AccountServiceImpl<T> {
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: ApiClient + 'static> AccountService for AccountServiceImpl<T> {
    async fn signup(&self, request: &SignupRequest) -> Result<(), AppError> {
        request.validate()?;
        info!("Registering account");

        let _: IgnoredAny = self
            .client
            .request(Method::POST, SIGNUP_ENDPOINT, Some(request))
            .await?;
        Ok(())
    }

    async fn profile(&self) -> Result<UserProfile, AppError> {
        self.client
            .request::<(), UserProfile>(Method::GET, PROFILE_ENDPOINT, None)
            .await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, AppError> {
        info!("Updating profile");
        self.client
            .request(Method::PATCH, PROFILE_ENDPOINT, Some(update))
            .await
    }

    async fn notifications(&self) -> Result<Vec<Notification>, AppError> {
        let list = self
            .client
            .request::<(), ListResponse<Notification>>(Method::GET, NOTIFICATIONS_ENDPOINT, None)
            .await?
            .into_vec();

        debug!("{} notifications fetched", list.len());
        Ok(list)
    }

    async fn mark_notification_read(&self, id: u64) -> Result<(), AppError> {
        let path = format!("{NOTIFICATIONS_ENDPOINT}{id}/read/");
        let _: IgnoredAny = self
            .client
            .request::<(), IgnoredAny>(Method::POST, &path, None)
            .await?;
        Ok(())
    }

    async fn about(&self) -> Result<CompanyInfo, AppError> {
        self.client
            .request::<(), CompanyInfo>(Method::GET, ABOUT_ENDPOINT, None)
            .await
    }
}
