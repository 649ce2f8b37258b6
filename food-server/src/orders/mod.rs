//! Order Lifecycle Module
//!
//! The [`OrdersManager`] owns what a valid order is: creation validation,
//! derived monetary fields, and the status transition table (via
//! [`shared::models::OrderStatus`]). Storage stays behind the
//! [`OrderStore`] trait; the manager does not know which backend is
//! active.

pub mod money;

use std::sync::Arc;

use shared::models::{
    NewOrder, Order, OrderCreate, OrderItem, OrderStatus, TransitionError,
};
use thiserror::Error;

use crate::db::repository::{OrderStore, RepoError};

pub use money::{DELIVERY_FEE, MONEY_TOLERANCE, OrderTotals, TAX_RATE};

/// Lifecycle errors
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    IllegalTransition(#[from] TransitionError),

    #[error("{0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(RepoError),
}

impl From<RepoError> for OrderError {
    fn from(err: RepoError) -> Self {
        match err {
            // Keep the not-found distinction so the HTTP layer maps it to 404
            RepoError::NotFound(msg) => OrderError::NotFound(msg),
            other => OrderError::Storage(other),
        }
    }
}

/// Validate a required text field (trimmed non-empty)
fn require_text(value: &str, field: &str) -> Result<(), OrderError> {
    if value.trim().is_empty() {
        return Err(OrderError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Order lifecycle manager
#[derive(Clone)]
pub struct OrdersManager {
    store: Arc<dyn OrderStore>,
}

impl OrdersManager {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Validate the checkout payload, compute derived amounts, and persist
    /// the order with status `pending`. Returns the assigned id.
    ///
    /// Any amounts the client sent are discarded; the server's own figures
    /// are persisted.
    pub async fn create(&self, input: OrderCreate) -> Result<String, OrderError> {
        require_text(&input.customer_name, "customerName")?;
        require_text(&input.customer_phone, "customerPhone")?;
        require_text(&input.delivery_address, "deliveryAddress")?;

        if input.items.is_empty() {
            return Err(OrderError::Validation(
                "order must contain at least one item".into(),
            ));
        }
        for item in &input.items {
            money::validate_line_item(item)?;
        }

        // Older clients carried the restaurant reference on the cart items
        // rather than the payload root
        let restaurant_id = input
            .restaurant_id
            .clone()
            .or_else(|| input.items.iter().find_map(|i| i.restaurant_id.clone()));
        let restaurant_name = input
            .restaurant_name
            .clone()
            .or_else(|| input.items.iter().find_map(|i| i.restaurant_name.clone()));
        if restaurant_id.is_none() && restaurant_name.is_none() {
            return Err(OrderError::Validation(
                "a restaurant reference is required".into(),
            ));
        }

        let totals = money::compute_totals(&input.items)?;

        let items: Vec<OrderItem> = input
            .items
            .into_iter()
            .map(|i| OrderItem {
                id: i.id,
                name: i.name,
                price: i.price,
                quantity: i.quantity,
                image: i.image,
            })
            .collect();

        let order = NewOrder {
            restaurant_id,
            restaurant_name,
            items,
            customer_name: input.customer_name.trim().to_string(),
            customer_phone: input.customer_phone.trim().to_string(),
            customer_address: input.delivery_address.trim().to_string(),
            subtotal: totals.subtotal,
            tax: totals.tax,
            delivery_fee: totals.delivery_fee,
            total: totals.total,
            status: OrderStatus::Pending,
        };

        let id = self.store.create(order).await?;
        tracing::info!(order_id = %id, "Order created");
        Ok(id)
    }

    /// Apply a status transition after checking it against the transition
    /// table. Refreshes the update timestamp on success.
    pub async fn update_status(
        &self,
        id: &str,
        new_status: OrderStatus,
    ) -> Result<(), OrderError> {
        let order = self.store.find_by_id(id).await?;
        order.status.transition_to(new_status)?;

        self.store.update_status(id, new_status).await?;
        tracing::info!(order_id = %id, from = %order.status, to = %new_status, "Order status updated");
        Ok(())
    }

    pub async fn get(&self, id: &str) -> Result<Order, OrderError> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// All orders, newest first
    pub async fn list(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self.store.find_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::MemOrderStore;
    use shared::models::OrderItemInput;

    fn manager() -> OrdersManager {
        OrdersManager::new(Arc::new(MemOrderStore::new()))
    }

    fn checkout() -> OrderCreate {
        OrderCreate {
            restaurant_id: Some("r1".into()),
            restaurant_name: Some("Pizza Paradise".into()),
            items: vec![OrderItemInput {
                id: 1,
                name: "Margherita Pizza".into(),
                price: 12.99,
                quantity: 2,
                image: None,
                restaurant_id: None,
                restaurant_name: None,
            }],
            customer_name: "Ana".into(),
            customer_phone: "555-0100".into(),
            delivery_address: "1 Main St".into(),
        }
    }

    #[tokio::test]
    async fn create_persists_server_computed_totals() {
        let mgr = manager();
        let id = mgr.create(checkout()).await.unwrap();

        let order = mgr.get(&id).await.unwrap();
        assert_eq!(order.id, id);
        assert_eq!(order.status, OrderStatus::Pending);
        assert!((order.subtotal - 25.98).abs() < MONEY_TOLERANCE);
        assert!((order.tax - 2.0784).abs() < MONEY_TOLERANCE);
        assert!((order.delivery_fee - 49.99).abs() < MONEY_TOLERANCE);
        assert!(
            (order.total - (order.subtotal + order.tax + order.delivery_fee)).abs()
                < MONEY_TOLERANCE
        );
    }

    #[tokio::test]
    async fn create_rejects_missing_contact_fields() {
        let mgr = manager();

        let mut no_name = checkout();
        no_name.customer_name = "  ".into();
        assert!(matches!(
            mgr.create(no_name).await.unwrap_err(),
            OrderError::Validation(_)
        ));

        let mut no_phone = checkout();
        no_phone.customer_phone = String::new();
        assert!(mgr.create(no_phone).await.is_err());

        let mut no_address = checkout();
        no_address.delivery_address = String::new();
        assert!(mgr.create(no_address).await.is_err());
    }

    #[tokio::test]
    async fn create_rejects_empty_cart_and_bad_items() {
        let mgr = manager();

        let mut empty = checkout();
        empty.items.clear();
        assert!(matches!(
            mgr.create(empty).await.unwrap_err(),
            OrderError::Validation(_)
        ));

        let mut bad_price = checkout();
        bad_price.items[0].price = -1.0;
        assert!(mgr.create(bad_price).await.is_err());

        let mut bad_quantity = checkout();
        bad_quantity.items[0].quantity = 0;
        assert!(mgr.create(bad_quantity).await.is_err());
    }

    #[tokio::test]
    async fn create_resolves_restaurant_reference_from_items() {
        let mgr = manager();

        let mut legacy = checkout();
        legacy.restaurant_id = None;
        legacy.restaurant_name = None;
        legacy.items[0].restaurant_id = Some("r9".into());
        legacy.items[0].restaurant_name = Some("Taco Fiesta".into());

        let id = mgr.create(legacy).await.unwrap();
        let order = mgr.get(&id).await.unwrap();
        assert_eq!(order.restaurant_id.as_deref(), Some("r9"));
        assert_eq!(order.restaurant_name.as_deref(), Some("Taco Fiesta"));

        let mut none_at_all = checkout();
        none_at_all.restaurant_id = None;
        none_at_all.restaurant_name = None;
        assert!(matches!(
            mgr.create(none_at_all).await.unwrap_err(),
            OrderError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn full_delivery_flow_is_accepted() {
        let mgr = manager();
        let id = mgr.create(checkout()).await.unwrap();

        mgr.update_status(&id, OrderStatus::Preparing).await.unwrap();
        mgr.update_status(&id, OrderStatus::OutForDelivery)
            .await
            .unwrap();
        mgr.update_status(&id, OrderStatus::Delivered).await.unwrap();

        let order = mgr.get(&id).await.unwrap();
        assert_eq!(order.status, OrderStatus::Delivered);
        assert!(order.updated_at >= order.created_at);
    }

    #[tokio::test]
    async fn cancel_is_only_allowed_from_pending() {
        let mgr = manager();
        let id = mgr.create(checkout()).await.unwrap();

        mgr.update_status(&id, OrderStatus::Cancelled).await.unwrap();
        assert_eq!(
            mgr.get(&id).await.unwrap().status,
            OrderStatus::Cancelled
        );

        // Terminal: nothing leaves cancelled
        let err = mgr
            .update_status(&id, OrderStatus::Pending)
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::IllegalTransition(_)));
    }

    #[tokio::test]
    async fn illegal_jumps_are_rejected() {
        let mgr = manager();
        let id = mgr.create(checkout()).await.unwrap();

        let err = mgr
            .update_status(&id, OrderStatus::Delivered)
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::IllegalTransition(_)));

        // The failed transition must not have been applied
        assert_eq!(mgr.get(&id).await.unwrap().status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn update_status_on_unknown_id_is_not_found() {
        let mgr = manager();
        let err = mgr
            .update_status("missing", OrderStatus::Preparing)
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::NotFound(_)));
    }
}
