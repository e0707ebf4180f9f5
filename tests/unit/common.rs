use mockito::ServerGuard;
use std::sync::Arc;
use storefront_client::config::RestApiConfig;
use storefront_client::session::session::SessionStore;
use storefront_client::storage::{MemoryTokenStore, TokenStore};
use storefront_client::transport::http_client::Dispatcher;
use storefront_client::utils::logger::setup_logger;

pub fn rest_config(server: &ServerGuard) -> RestApiConfig {
    RestApiConfig {
        base_url: server.url(),
        timeout: 5,
    }
}

/// A session store wired against `server`, sharing one in-memory token store
/// with its dispatcher.
pub fn create_store(server: &ServerGuard) -> (SessionStore, Arc<MemoryTokenStore>) {
    setup_logger();
    let tokens = Arc::new(MemoryTokenStore::new());
    let shared: Arc<dyn TokenStore> = tokens.clone();
    let dispatcher = Dispatcher::new(&rest_config(server), shared.clone()).unwrap();
    (SessionStore::new(Arc::new(dispatcher), shared), tokens)
}
