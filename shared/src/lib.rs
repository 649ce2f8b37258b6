//! Shared types for the food ordering service
//!
//! Normalized entity shapes used on both sides of the storage boundary.
//! All identifiers are plain strings here; backend-native id types never
//! appear in this crate.

pub mod models;

// Re-exports
pub use models::{
    MenuItem, NewOrder, Order, OrderCreate, OrderItem, OrderItemInput, OrderStatus, Restaurant,
    RestaurantCreate, TransitionError,
};
pub use serde::{Deserialize, Serialize};
