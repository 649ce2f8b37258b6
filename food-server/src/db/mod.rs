//! Database Module
//!
//! The persistence gateway owns the physical SurrealDB session and hands
//! out per-entity store handles. When the durable engine cannot be opened
//! the caller may install the ephemeral in-memory backend instead; all
//! upstream code works against the store traits and cannot tell which
//! backend is active.

pub mod repository;
pub mod seed;

use std::sync::Arc;

use parking_lot::Mutex;
use surrealdb::Surreal;
use surrealdb::engine::local::RocksDb;
use thiserror::Error;

use crate::core::Config;
use repository::{
    MemOrderStore, MemRestaurantStore, OrderStore, RestaurantStore, SurrealOrderStore,
    SurrealRestaurantStore,
};

/// Gateway errors
#[derive(Debug, Error)]
pub enum DbError {
    /// Backend could not be opened at startup. Recoverable via the
    /// in-memory fallback unless `REQUIRE_DATABASE` is set.
    #[error("Database connection failed: {0}")]
    Connection(String),

    /// Gateway used after `close()` (or never connected)
    #[error("Database gateway is not initialized")]
    NotInitialized,
}

/// Which backend is serving requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Surreal,
    Memory,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Surreal => "surrealdb",
            BackendKind::Memory => "memory",
        }
    }
}

/// Per-entity store handles, cheap to clone
#[derive(Clone)]
pub struct Stores {
    pub restaurants: Arc<dyn RestaurantStore>,
    pub orders: Arc<dyn OrderStore>,
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores").finish_non_exhaustive()
    }
}

/// Persistence gateway - owns the session lifecycle
#[derive(Debug)]
pub struct Gateway {
    kind: BackendKind,
    stores: Mutex<Option<Stores>>,
}

impl Gateway {
    /// Open the embedded engine at `config.db_path` and select the
    /// configured namespace/database
    pub async fn connect(config: &Config) -> Result<Self, DbError> {
        let db = Surreal::new::<RocksDb>(config.db_path.as_str())
            .await
            .map_err(|e| DbError::Connection(e.to_string()))?;

        db.use_ns(config.db_namespace.clone())
            .use_db(config.db_name.clone())
            .await
            .map_err(|e| DbError::Connection(e.to_string()))?;

        tracing::info!(
            path = %config.db_path,
            ns = %config.db_namespace,
            db = %config.db_name,
            "Database connection established (SurrealDB RocksDB)"
        );

        let stores = Stores {
            restaurants: Arc::new(SurrealRestaurantStore::new(db.clone())),
            orders: Arc::new(SurrealOrderStore::new(db)),
        };

        Ok(Self {
            kind: BackendKind::Surreal,
            stores: Mutex::new(Some(stores)),
        })
    }

    /// Build the volatile in-process backend. Data lives for the process
    /// lifetime only and is lost on restart.
    pub fn ephemeral() -> Self {
        let stores = Stores {
            restaurants: Arc::new(MemRestaurantStore::new()),
            orders: Arc::new(MemOrderStore::new()),
        };

        Self {
            kind: BackendKind::Memory,
            stores: Mutex::new(Some(stores)),
        }
    }

    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    /// Active store handles
    pub fn stores(&self) -> Result<Stores, DbError> {
        self.stores.lock().clone().ok_or(DbError::NotInitialized)
    }

    /// Release the session. Idempotent - closing an already-closed
    /// gateway is a no-op.
    pub fn close(&self) {
        let mut guard = self.stores.lock();
        if guard.take().is_some() {
            tracing::info!(backend = self.kind.as_str(), "Database gateway closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ephemeral_gateway_serves_stores() {
        let gateway = Gateway::ephemeral();
        assert_eq!(gateway.kind(), BackendKind::Memory);

        let stores = gateway.stores().unwrap();
        assert_eq!(stores.restaurants.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn close_is_idempotent_and_stores_fail_after() {
        let gateway = Gateway::ephemeral();
        gateway.close();
        gateway.close();

        assert!(matches!(
            gateway.stores().unwrap_err(),
            DbError::NotInitialized
        ));
    }

    #[tokio::test]
    async fn connect_to_unusable_path_is_a_connection_error() {
        // A file (not a directory) where the engine wants its data dir
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config::with_overrides(file.path().to_string_lossy(), 0);

        let err = Gateway::connect(&config).await.unwrap_err();
        assert!(matches!(err, DbError::Connection(_)));
    }
}
