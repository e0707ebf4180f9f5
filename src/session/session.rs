/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::config::Config;
use crate::constants::{DEFAULT_LOGIN_FAILURE, LOGIN_ENDPOINT, PROFILE_ENDPOINT};
use crate::session::auth::{LoginOutcome, LoginRequest, TokenPair};
use crate::session::interface::SessionView;
use crate::session::user::UserProfile;
use crate::storage::{self, TokenStore, TokenStoreExt};
use crate::transport::http_client::{ApiClient, Dispatcher};
use reqwest::Method;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// Snapshot of the session as seen by the rest of the application.
///
/// `is_authenticated` has no storage of its own; it is computed from `user`.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    user: Option<UserProfile>,
    loading: bool,
}

impl SessionState {
    fn initial() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

impl SessionView for SessionState {
    fn user(&self) -> Option<UserProfile> {
        self.user.clone()
    }

    fn is_loading(&self) -> bool {
        self.loading
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"user_id\":{},\"is_authenticated\":{},\"loading\":{}}}",
            self.user
                .as_ref()
                .map_or("null".to_string(), |u| u.id.to_string()),
            self.is_authenticated(),
            self.loading
        )
    }
}

/// Owner of the token pair and the authenticated profile.
///
/// Share it behind an `Arc`; every operation takes `&self`. Concurrent calls
/// are not de-duplicated and the last write to storage or to `user` wins.
pub struct SessionStore<C: ApiClient = Dispatcher> {
    client: Arc<C>,
    tokens: Arc<dyn TokenStore>,
    state: watch::Sender<SessionState>,
    started: AtomicBool,
}

impl SessionStore<Dispatcher> {
    /// Wires token storage, dispatcher and store from `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let tokens = storage::open(&config.storage)?;
        let client = Arc::new(Dispatcher::new(&config.rest_api, tokens.clone())?);
        Ok(Self::new(client, tokens))
    }
}

impl<C: ApiClient> SessionStore<C> {
    /// An empty session in the loading state. Call [`SessionStore::start`]
    /// to run the start-up recovery.
    pub fn new(client: Arc<C>, tokens: Arc<dyn TokenStore>) -> Self {
        let (state, _) = watch::channel(SessionState::initial());
        Self {
            client,
            tokens,
            state,
            started: AtomicBool::new(false),
        }
    }

    /// Start-up recovery. Runs once per store; `loading` becomes false when
    /// it resolves, whatever the outcome. Later calls return immediately.
    #[instrument(skip(self))]
    pub async fn start(&self) {
        if self.started.swap(true, Ordering::SeqCst) {
            debug!("Session start-up already ran");
            return;
        }
        self.recover_session().await;
        self.state.send_modify(|state| state.loading = false);
        info!("Session ready: {}", *self.state.borrow());
    }

    /// Validates the persisted access token by fetching the profile.
    ///
    /// No token: `user` is cleared and no request is made. Any failure of the
    /// profile call purges both tokens and clears `user`; nothing is
    /// reported to the caller.
    #[instrument(skip(self))]
    pub async fn recover_session(&self) {
        if self.tokens.access_token().is_none() {
            debug!("No persisted access token, session stays empty");
            self.set_user(None);
            return;
        }

        match self
            .client
            .request::<(), UserProfile>(Method::GET, PROFILE_ENDPOINT, None)
            .await
        {
            Ok(user) => {
                debug!("Session recovered for user {}", user.id);
                self.set_user(Some(user));
            }
            Err(e) => {
                warn!("Persisted token rejected, tearing session down: {}", e);
                self.tokens.clear();
                self.set_user(None);
            }
        }
    }

    /// Exchanges credentials for a token pair, persists it and recovers the
    /// profile with it.
    ///
    /// On rejection the persisted tokens are left as they were and the
    /// server's `detail` message is returned for display.
    #[instrument(skip(self, secret))]
    pub async fn login(&self, identifier: &str, secret: &str) -> LoginOutcome {
        let body = LoginRequest {
            phone_number: identifier,
            password: secret,
        };

        let pair = match self
            .client
            .request::<LoginRequest, TokenPair>(Method::POST, LOGIN_ENDPOINT, Some(&body))
            .await
        {
            Ok(pair) => pair,
            Err(e) => {
                warn!("Login rejected: {}", e);
                return LoginOutcome::Failed {
                    detail: e
                        .detail()
                        .unwrap_or_else(|| DEFAULT_LOGIN_FAILURE.to_string()),
                };
            }
        };

        if let Err(e) = self.tokens.persist(&pair) {
            warn!("Failed to persist token pair: {}", e);
            self.tokens.clear();
            return LoginOutcome::Failed {
                detail: format!("Could not store session: {e}"),
            };
        }

        self.recover_session().await;
        if self.state.borrow().user.is_none() {
            warn!("Login succeeded but the profile could not be loaded");
        } else {
            info!("Login successful");
        }
        LoginOutcome::Success
    }

    /// Clears both tokens and the profile. No request, cannot fail.
    #[instrument(skip(self))]
    pub fn logout(&self) {
        self.tokens.clear();
        self.set_user(None);
        info!("Logged out");
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Change feed of the session; the receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// The dispatcher shared with every other outbound caller.
    pub fn client(&self) -> Arc<C> {
        self.client.clone()
    }

    fn set_user(&self, user: Option<UserProfile>) {
        self.state.send_if_modified(|state| {
            if state.user == user {
                return false;
            }
            state.user = user;
            true
        });
    }
}

impl<C: ApiClient> SessionView for SessionStore<C> {
    fn user(&self) -> Option<UserProfile> {
        self.state.borrow().user.clone()
    }

    fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }
}

impl<C: ApiClient> fmt::Debug for SessionStore<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}
