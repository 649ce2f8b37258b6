//! Entity models
//!
//! - [`restaurant`] - Restaurant and embedded menu items
//! - [`order`] - Order, line items, and the status state machine

pub mod order;
pub mod restaurant;

pub use order::{
    NewOrder, Order, OrderCreate, OrderItem, OrderItemInput, OrderStatus, TransitionError,
};
pub use restaurant::{MenuItem, Restaurant, RestaurantCreate};
