//! In-Memory Stores (Fallback)
//!
//! Process-lifetime, volatile stores with the same trait surface as the
//! SurrealDB-backed ones, installed when the durable engine cannot be
//! opened. Data here is intentionally lost on restart.
//!
//! Every operation is a single guarded read or write; no lock is held
//! across an await point.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use shared::models::{NewOrder, Order, OrderStatus, Restaurant, RestaurantCreate};
use uuid::Uuid;

use super::{OrderStore, RepoError, RepoResult, RestaurantStore};

fn new_key() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Volatile restaurant store; `find_all` is insertion order
#[derive(Default)]
pub struct MemRestaurantStore {
    entries: RwLock<Vec<Restaurant>>,
}

impl MemRestaurantStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RestaurantStore for MemRestaurantStore {
    async fn find_all(&self) -> RepoResult<Vec<Restaurant>> {
        Ok(self.entries.read().clone())
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Restaurant> {
        self.entries
            .read()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(format!("Restaurant {id} not found")))
    }

    async fn create(&self, data: RestaurantCreate) -> RepoResult<String> {
        let id = new_key();
        self.entries.write().push(Restaurant {
            id: id.clone(),
            name: data.name,
            cuisine: data.cuisine,
            rating: data.rating,
            delivery_time: data.delivery_time,
            image: data.image,
            menu: data.menu,
        });
        Ok(id)
    }

    async fn count(&self) -> RepoResult<usize> {
        Ok(self.entries.read().len())
    }
}

/// Volatile order store; `find_all` is newest first
#[derive(Default)]
pub struct MemOrderStore {
    entries: RwLock<Vec<Order>>,
}

impl MemOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for MemOrderStore {
    async fn find_all(&self) -> RepoResult<Vec<Order>> {
        // Entries are appended in creation order; reverse for newest first
        Ok(self.entries.read().iter().rev().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Order> {
        self.entries
            .read()
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
    }

    async fn create(&self, order: NewOrder) -> RepoResult<String> {
        let id = new_key();
        let now = Utc::now();
        self.entries.write().push(Order {
            id: id.clone(),
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
        });
        Ok(id)
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<()> {
        let mut entries = self.entries.write();
        let order = entries
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))?;
        order.status = status;
        order.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::OrderItem;

    fn sample_restaurant(name: &str) -> RestaurantCreate {
        RestaurantCreate {
            name: name.to_string(),
            cuisine: "Mexican".into(),
            rating: 4.4,
            delivery_time: "20-30 min".into(),
            image: String::new(),
            menu: vec![],
        }
    }

    fn sample_order(customer: &str) -> NewOrder {
        NewOrder {
            restaurant_id: None,
            restaurant_name: Some("Taco Fiesta".into()),
            items: vec![OrderItem {
                id: 1,
                name: "Beef Tacos".into(),
                price: 8.99,
                quantity: 1,
                image: None,
            }],
            customer_name: customer.to_string(),
            customer_phone: "555-0100".into(),
            customer_address: "1 Main St".into(),
            subtotal: 8.99,
            tax: 0.7192,
            delivery_fee: 49.99,
            total: 59.6992,
            status: OrderStatus::Pending,
        }
    }

    #[tokio::test]
    async fn restaurants_keep_insertion_order_and_unique_ids() {
        let store = MemRestaurantStore::new();
        let a = store.create(sample_restaurant("A")).await.unwrap();
        let b = store.create(sample_restaurant("B")).await.unwrap();
        assert_ne!(a, b);

        let all = store.find_all().await.unwrap();
        assert_eq!(all[0].name, "A");
        assert_eq!(all[1].name, "B");
        assert_eq!(store.count().await.unwrap(), 2);

        assert_eq!(store.find_by_id(&b).await.unwrap().id, b);
        assert!(matches!(
            store.find_by_id("missing").await.unwrap_err(),
            RepoError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn orders_list_newest_first() {
        let store = MemOrderStore::new();
        store.create(sample_order("First")).await.unwrap();
        store.create(sample_order("Second")).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all[0].customer_name, "Second");
        assert_eq!(all[1].customer_name, "First");
    }

    #[tokio::test]
    async fn status_update_rewrites_status_and_timestamp() {
        let store = MemOrderStore::new();
        let id = store.create(sample_order("Ana")).await.unwrap();

        store
            .update_status(&id, OrderStatus::Cancelled)
            .await
            .unwrap();

        let order = store.find_by_id(&id).await.unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
        assert!(order.updated_at >= order.created_at);

        assert!(matches!(
            store
                .update_status("missing", OrderStatus::Preparing)
                .await
                .unwrap_err(),
            RepoError::NotFound(_)
        ));
    }
}
