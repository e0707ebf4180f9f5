/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 18/10/26
 ******************************************************************************/
use crate::constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use crate::error::AppError;
use crate::session::auth::TokenPair;
use tracing::{debug, warn};

/// Client-local persistent key/value storage for opaque credentials.
///
/// The only process-wide mutable state of the client. The dispatcher reads
/// it on every request; only the session store writes it.
#[cfg_attr(test, mockall::automock)]
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// Token-pair operations shared by every [`TokenStore`], trait objects included.
pub trait TokenStoreExt {
    /// The persisted access token. A read failure or an empty value counts
    /// as absent.
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    /// Writes both tokens, access first.
    fn persist(&self, pair: &TokenPair) -> Result<(), AppError>;
    /// Removes both tokens. Failures are logged, never returned.
    fn clear(&self);
}

impl<S: TokenStore + ?Sized> TokenStoreExt for S {
    fn access_token(&self) -> Option<String> {
        read_non_empty(self, ACCESS_TOKEN_KEY)
    }

    fn refresh_token(&self) -> Option<String> {
        read_non_empty(self, REFRESH_TOKEN_KEY)
    }

    fn persist(&self, pair: &TokenPair) -> Result<(), AppError> {
        self.set(ACCESS_TOKEN_KEY, &pair.access)?;
        self.set(REFRESH_TOKEN_KEY, &pair.refresh)?;
        debug!("Token pair persisted");
        Ok(())
    }

    fn clear(&self) {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
            if let Err(e) = self.remove(key) {
                warn!("Failed to remove {} from token storage: {}", key, e);
            }
        }
        debug!("Token pair cleared");
    }
}

fn read_non_empty<S: TokenStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(Some(value)) if !value.is_empty() => Some(value),
        Ok(_) => None,
        Err(e) => {
            warn!("Failed to read {} from token storage: {}", key, e);
            None
        }
    }
}
