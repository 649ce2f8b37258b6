//! Order Store (SurrealDB)
//!
//! Orders are append-plus-status-update only. `find_all` is newest first;
//! the status update is a single merge keyed by id.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{NewOrder, Order, OrderItem, OrderStatus};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{OrderStore, RepoError, RepoResult, record_key};

const ORDER_TABLE: &str = "order";

/// Native record shape - stays inside this module
#[derive(Debug, Deserialize)]
struct OrderRecord {
    id: RecordId,
    restaurant_id: Option<String>,
    restaurant_name: Option<String>,
    items: Vec<OrderItem>,
    customer_name: String,
    customer_phone: String,
    customer_address: String,
    subtotal: f64,
    tax: f64,
    delivery_fee: f64,
    total: f64,
    status: OrderStatus,
    /// Epoch millis
    created_at: i64,
    updated_at: i64,
}

#[derive(Debug, Serialize)]
struct OrderContent {
    restaurant_id: Option<String>,
    restaurant_name: Option<String>,
    items: Vec<OrderItem>,
    customer_name: String,
    customer_phone: String,
    customer_address: String,
    subtotal: f64,
    tax: f64,
    delivery_fee: f64,
    total: f64,
    status: OrderStatus,
    created_at: i64,
    updated_at: i64,
}

#[derive(Debug, Serialize)]
struct StatusPatch {
    status: OrderStatus,
    updated_at: i64,
}

fn millis_to_datetime(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

impl OrderRecord {
    fn into_entity(self) -> Order {
        Order {
            id: record_key(&self.id),
            restaurant_id: self.restaurant_id,
            restaurant_name: self.restaurant_name,
            items: self.items,
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            customer_address: self.customer_address,
            subtotal: self.subtotal,
            tax: self.tax,
            delivery_fee: self.delivery_fee,
            total: self.total,
            status: self.status,
            created_at: millis_to_datetime(self.created_at),
            updated_at: millis_to_datetime(self.updated_at),
        }
    }
}

#[derive(Clone)]
pub struct SurrealOrderStore {
    db: Surreal<Db>,
}

impl SurrealOrderStore {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderStore for SurrealOrderStore {
    async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let records: Vec<OrderRecord> = self
            .db
            .query("SELECT * FROM order ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(records.into_iter().map(OrderRecord::into_entity).collect())
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Order> {
        let record: Option<OrderRecord> = self.db.select((ORDER_TABLE, id)).await?;
        record
            .map(OrderRecord::into_entity)
            .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
    }

    async fn create(&self, order: NewOrder) -> RepoResult<String> {
        let now = Utc::now().timestamp_millis();
        let content = OrderContent {
            restaurant_id: order.restaurant_id,
            restaurant_name: order.restaurant_name,
            items: order.items,
            customer_name: order.customer_name,
            customer_phone: order.customer_phone,
            customer_address: order.customer_address,
            subtotal: order.subtotal,
            tax: order.tax,
            delivery_fee: order.delivery_fee,
            total: order.total,
            status: order.status,
            created_at: now,
            updated_at: now,
        };

        let created: Option<OrderRecord> = self.db.create(ORDER_TABLE).content(content).await?;

        created
            .map(|r| record_key(&r.id))
            .ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<()> {
        let patch = StatusPatch {
            status,
            updated_at: Utc::now().timestamp_millis(),
        };

        // UPDATE on a missing id returns no record instead of creating one
        let updated: Option<OrderRecord> = self.db.update((ORDER_TABLE, id)).merge(patch).await?;
        updated
            .map(|_| ())
            .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
    }
}
