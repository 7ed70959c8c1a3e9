//! Shopping Business Logic Helpers
//!
//! This module contains the matching rules, the offer evaluation and the
//! small pricing computations used by the shopping tools.

use super::models::{CartEntry, CartItem, CartLine, Offer};
use rand::Rng;
use rust_decimal::Decimal;

/// Description attached to the single store offer
pub const OFFER_DESCRIPTION: &str = "$1 off travel-size mascara";

/// Flat amount taken off by the store offer
pub fn offer_discount() -> Decimal {
    Decimal::new(100, 2)
}

/// Case-insensitive equality using full Unicode lowercasing.
fn equals_folded(value: &str, expected: &str) -> bool {
    value.to_lowercase() == expected
}

fn is_travel_size(item: &impl CartLine) -> bool {
    equals_folded(item.size(), "travel")
}

/// Returns `true` when the item qualifies for the store offer.
///
/// The name must be exactly "black mascara" (ignoring case), unlike
/// [`is_removable_mascara`] which accepts any name containing "mascara".
pub fn qualifies_for_offer(item: &impl CartLine) -> bool {
    equals_folded(item.name(), "black mascara") && is_travel_size(item)
}

/// Returns `true` when `remove_from_cart` should drop the item: its name
/// contains "mascara" (ignoring case) and its size is travel.
pub fn is_removable_mascara(item: &impl CartLine) -> bool {
    item.name().to_lowercase().contains("mascara") && is_travel_size(item)
}

/// Evaluates the store offer against `cart`.
///
/// # Behaviour
///
/// * `applies` is true when any item qualifies (see [`qualifies_for_offer`]).
/// * Qualifying offers are applied automatically, so `applied == applies`.
/// * `discount` always carries the nominal 1.00, even when not applied.
pub fn evaluate_offer<T: CartLine>(cart: &[T]) -> Offer {
    let applies = cart.iter().any(qualifies_for_offer);
    Offer {
        description: OFFER_DESCRIPTION.to_string(),
        applies,
        discount: offer_discount(),
        applied: applies,
    }
}

/// Splits `cart` into `(kept, removed)`, both in their original order.
pub fn partition_removable(cart: Vec<CartEntry>) -> (Vec<CartEntry>, Vec<CartEntry>) {
    let (removed, kept): (Vec<_>, Vec<_>) = cart.into_iter().partition(is_removable_mascara);
    (kept, removed)
}

/// Sums `price * quantity` over the cart.
pub fn subtotal(cart: &[CartItem]) -> Decimal {
    cart.iter()
        .map(|i| i.variant.price * Decimal::from(i.quantity.get()))
        .sum()
}

/// Draws a fresh 8-digit order number, uniform over 10000000..=99999999.
pub fn generate_order_number() -> String {
    rand::rng()
        .random_range(10_000_000u32..=99_999_999)
        .to_string()
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"1x Black Mascara (Travel)"`.
pub fn format_item_summary(items: &[CartItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {} ({})", i.quantity, i.name, i.variant.size.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}
