pub mod file;
pub mod memory;
pub mod token_store;

pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;
pub use token_store::{TokenStore, TokenStoreExt};

use crate::config::{StorageBackend, StorageConfig};
use std::sync::Arc;
use tracing::info;

/// Opens the token storage selected by `config`.
pub fn open(config: &StorageConfig) -> anyhow::Result<Arc<dyn TokenStore>> {
    info!("Opening {} token storage", config.backend);
    let store: Arc<dyn TokenStore> = match config.backend {
        StorageBackend::Memory => Arc::new(MemoryTokenStore::new()),
        StorageBackend::File => Arc::new(FileTokenStore::open(&config.path)?),
    };
    Ok(store)
}
