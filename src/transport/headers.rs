/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 18/10/26
 ******************************************************************************/

use crate::constants::BEARER_PREFIX;
use crate::storage::{TokenStore, TokenStoreExt};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Request-pipeline stage that mirrors the persisted access token into the
/// `Authorization` header.
#[derive(Clone)]
pub struct BearerAuth {
    tokens: Arc<dyn TokenStore>,
}

impl BearerAuth {
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self { tokens }
    }

    /// Rewrites the authorization header of an outgoing request.
    ///
    /// The token is read at call time, never cached. With a token persisted
    /// the header becomes `Bearer <token>`, marked sensitive so it stays out
    /// of debug output. Without one, any `Authorization` header already on
    /// the request is removed, so a header left over from an earlier session
    /// or from default headers cannot leak through.
    pub fn apply(&self, headers: &mut HeaderMap) {
        let Some(token) = self.tokens.access_token() else {
            if headers.remove(AUTHORIZATION).is_some() {
                debug!("Removed stale authorization header");
            }
            return;
        };

        match HeaderValue::from_str(&format!("{BEARER_PREFIX} {token}")) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Err(e) => {
                warn!("Persisted access token is not a valid header value: {}", e);
                headers.remove(AUTHORIZATION);
            }
        }
    }
}

impl fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerAuth").finish_non_exhaustive()
    }
}
