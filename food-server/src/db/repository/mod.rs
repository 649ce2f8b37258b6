//! Repository Module
//!
//! Storage-agnostic store traits with two concrete backends per entity:
//! SurrealDB (durable) and in-memory (ephemeral fallback). Callers receive
//! only the normalized entity shapes from `shared` — plain string ids,
//! never a backend-native id type.

pub mod memory;
pub mod order;
pub mod restaurant;

// Re-exports
pub use memory::{MemOrderStore, MemRestaurantStore};
pub use order::SurrealOrderStore;
pub use restaurant::SurrealRestaurantStore;

use async_trait::async_trait;
use shared::models::{NewOrder, Order, OrderStatus, Restaurant, RestaurantCreate};
use surrealdb::RecordId;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 对外只暴露纯字符串 ID
// =============================================================================
//
// SurrealDB 记录 ID 形如 "restaurant:abc123"。所有仓库在边界处统一调用
// record_key() 取纯 key；表名前缀和 RecordId 类型不得越过 trait 边界。

/// The single RecordId → String normalization point for SurrealDB stores
pub(crate) fn record_key(id: &RecordId) -> String {
    id.key().to_string()
}

/// Read-side and seed operations for restaurants
///
/// `find_all` returns insertion order (restaurants are seeded once and
/// never mutated afterwards).
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Restaurant>>;
    async fn find_by_id(&self, id: &str) -> RepoResult<Restaurant>;
    /// Assigns a new unique id and creation timestamp, returns the id
    async fn create(&self, data: RestaurantCreate) -> RepoResult<String>;
    async fn count(&self) -> RepoResult<usize>;
}

/// Order persistence
///
/// `find_all` returns newest first. Orders are never deleted; the only
/// mutation is `update_status`, which also refreshes the update timestamp.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Order>>;
    async fn find_by_id(&self, id: &str) -> RepoResult<Order>;
    /// Assigns a new unique id and both timestamps, returns the id
    async fn create(&self, order: NewOrder) -> RepoResult<String>;
    async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<()>;
}
