//! Money calculation utilities using rust_decimal for precision
//!
//! All derived amounts are computed as `Decimal` internally and converted
//! to `f64` for storage/serialization. The computed values are persisted
//! unrounded; rounding to two places is a display concern.

use rust_decimal::prelude::*;
use shared::models::OrderItemInput;

use super::OrderError;

/// Fixed tax rate applied to the subtotal (8%)
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Fixed delivery fee per order (49.99)
pub const DELIVERY_FEE: Decimal = Decimal::from_parts(4999, 0, 0, false, 2);

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: f64 = 0.01;

/// Maximum allowed unit price per item
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line item
const MAX_QUANTITY: i32 = 9999;

/// Derived monetary fields, fixed at order creation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub delivery_fee: f64,
    pub total: f64,
}

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> Result<(), OrderError> {
    if !value.is_finite() {
        return Err(OrderError::Validation(format!(
            "{field_name} must be a finite number, got {value}"
        )));
    }
    Ok(())
}

/// Validate a cart line item before totals are computed
pub fn validate_line_item(item: &OrderItemInput) -> Result<(), OrderError> {
    require_finite(item.price, "price")?;
    if item.price < 0.0 {
        return Err(OrderError::Validation(format!(
            "price must be non-negative, got {}",
            item.price
        )));
    }
    if item.price > MAX_PRICE {
        return Err(OrderError::Validation(format!(
            "price exceeds maximum allowed ({MAX_PRICE}), got {}",
            item.price
        )));
    }

    if item.quantity <= 0 {
        return Err(OrderError::Validation(format!(
            "quantity must be positive, got {}",
            item.quantity
        )));
    }
    if item.quantity > MAX_QUANTITY {
        return Err(OrderError::Validation(format!(
            "quantity exceeds maximum allowed ({MAX_QUANTITY}), got {}",
            item.quantity
        )));
    }

    Ok(())
}

/// Compute subtotal / tax / total over validated line items
///
/// subtotal = Σ(price × quantity), tax = subtotal × 8%,
/// total = subtotal + tax + delivery fee.
pub fn compute_totals(items: &[OrderItemInput]) -> Result<OrderTotals, OrderError> {
    let mut subtotal = Decimal::ZERO;
    for item in items {
        let price = Decimal::from_f64(item.price)
            .ok_or_else(|| OrderError::Validation(format!("unrepresentable price {}", item.price)))?;
        subtotal += price * Decimal::from(item.quantity);
    }

    let tax = subtotal * TAX_RATE;
    let total = subtotal + tax + DELIVERY_FEE;

    Ok(OrderTotals {
        subtotal: subtotal.to_f64().unwrap_or(0.0),
        tax: tax.to_f64().unwrap_or(0.0),
        delivery_fee: DELIVERY_FEE.to_f64().unwrap_or(0.0),
        total: total.to_f64().unwrap_or(0.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(price: f64, quantity: i32) -> OrderItemInput {
        OrderItemInput {
            id: 1,
            name: "Margherita Pizza".into(),
            price,
            quantity,
            image: None,
            restaurant_id: None,
            restaurant_name: None,
        }
    }

    #[test]
    fn totals_for_the_reference_cart() {
        // 2 × 12.99 with the fixed 49.99 fee
        let totals = compute_totals(&[line(12.99, 2)]).unwrap();
        assert!((totals.subtotal - 25.98).abs() < MONEY_TOLERANCE);
        assert!((totals.tax - 2.0784).abs() < MONEY_TOLERANCE);
        assert!((totals.delivery_fee - 49.99).abs() < MONEY_TOLERANCE);
        assert!((totals.total - 78.0484).abs() < MONEY_TOLERANCE);
    }

    #[test]
    fn total_always_equals_the_sum_of_its_parts() {
        let carts: &[&[OrderItemInput]] = &[
            &[line(12.99, 2)],
            &[line(8.99, 1), line(11.99, 3), line(5.99, 2)],
            &[line(0.0, 5)],
            &[],
        ];
        for items in carts {
            let t = compute_totals(items).unwrap();
            assert!(
                (t.total - (t.subtotal + t.tax + t.delivery_fee)).abs() < MONEY_TOLERANCE,
                "invariant broken for {t:?}"
            );
        }
    }

    #[test]
    fn empty_cart_totals_to_the_delivery_fee() {
        let totals = compute_totals(&[]).unwrap();
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.tax, 0.0);
        assert!((totals.total - 49.99).abs() < MONEY_TOLERANCE);
    }

    #[test]
    fn line_item_validation_rejects_bad_input() {
        assert!(validate_line_item(&line(12.99, 1)).is_ok());
        assert!(validate_line_item(&line(-0.01, 1)).is_err());
        assert!(validate_line_item(&line(f64::NAN, 1)).is_err());
        assert!(validate_line_item(&line(f64::INFINITY, 1)).is_err());
        assert!(validate_line_item(&line(2_000_000.0, 1)).is_err());
        assert!(validate_line_item(&line(12.99, 0)).is_err());
        assert!(validate_line_item(&line(12.99, -2)).is_err());
        assert!(validate_line_item(&line(12.99, 10_000)).is_err());
    }
}
