use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::core::config::{StorageBackend, StorageConfig};
use crate::stores::{memory::MemoryStore, sqlite::SqliteStore, UserStore};

/// The store built at boot, kept concrete so shutdown can close the SQLite pool
pub enum Storage {
    Memory(Arc<MemoryStore>),
    Sqlite(Arc<SqliteStore>),
}

impl Storage {
    pub fn as_user_store(&self) -> Arc<dyn UserStore> {
        match self {
            Storage::Memory(store) => Arc::clone(store) as Arc<dyn UserStore>,
            Storage::Sqlite(store) => Arc::clone(store) as Arc<dyn UserStore>,
        }
    }

    pub async fn close(&self) {
        if let Storage::Sqlite(store) = self {
            store.close().await;
        }
    }
}

// this runs at boot time
pub async fn build_storage(config: &StorageConfig) -> Result<Storage> {
    let storage = match config.backend {
        StorageBackend::Memory => {
            let store = MemoryStore::seeded();
            info!(users = store.len(), "In-memory store seeded");
            Storage::Memory(Arc::new(store))
        }
        StorageBackend::Sqlite => {
            let store = SqliteStore::connect(config)
                .await
                .context(format!("Failed to open SQLite database '{}'", config.database_url))?;
            Storage::Sqlite(Arc::new(store))
        }
    };

    Ok(storage)
}
