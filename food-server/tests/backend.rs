//! Startup and backend-selection tests
//!
//! Covers the gateway fallback policy end to end: an unopenable database
//! must degrade to the in-memory backend (unless `require_database`),
//! and the durable backend must seed and serve like the ephemeral one.

use shared::models::{OrderCreate, OrderItemInput};

use food_server::db::BackendKind;
use food_server::db::repository::RestaurantStore;
use food_server::{Config, ServerState};

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
async fn startup_survives_an_unopenable_database() {
    // A plain file where the engine expects its data directory
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut config = Config::with_overrides(file.path().to_string_lossy(), 0);
    config.require_database = false;

    let state = ServerState::initialize(&config).await.unwrap();
    assert_eq!(state.backend, BackendKind::Memory);

    // The fallback store is seeded and fully usable
    let restaurants = state.stores.restaurants.find_all().await.unwrap();
    assert_eq!(restaurants.len(), 6);
}

#[tokio::test]
async fn require_database_makes_connection_failures_fatal() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut config = Config::with_overrides(file.path().to_string_lossy(), 0);
    config.require_database = true;

    assert!(ServerState::initialize(&config).await.is_err());
}

#[tokio::test]
async fn rocksdb_backend_seeds_and_serves_orders() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("food.db");
    let config = Config::with_overrides(db_path.to_string_lossy(), 0);

    let state = ServerState::initialize(&config).await.unwrap();
    assert_eq!(state.backend, BackendKind::Surreal);
    assert_eq!(state.stores.restaurants.count().await.unwrap(), 6);

    let id = state.orders.create(checkout()).await.unwrap();
    let order = state.orders.get(&id).await.unwrap();
    assert_eq!(order.id, id);
    assert!((order.total - (order.subtotal + order.tax + order.delivery_fee)).abs() < 0.01);

    state.gateway.close();
    assert!(state.gateway.stores().is_err());
}
