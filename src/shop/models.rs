//! Shopping Domain Models
//!
//! This module contains the data structures exchanged by the shopping tools:
//! catalog entries, cart items, offers, delivery options and the order
//! summary returned by `process_payment`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::num::NonZeroU32;

// =============================================================================
// Catalog Models
// =============================================================================

/// Size of a product variant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Size {
    Travel,
    Regular,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Travel => "Travel",
            Size::Regular => "Regular",
        }
    }
}

/// A named color with its `#RRGGBB` code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub name: String,
    pub hex: String,
}

/// One purchasable variant of a catalog product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    pub size: Size,

    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Available colors, in display order
    pub colors: Vec<Color>,
}

/// A catalog entry as returned by `search_item`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub variants: Vec<Variant>,
}

// =============================================================================
// Cart Models
// =============================================================================

/// The variant chosen for a fabricated cart item: one size, one price, one
/// color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectedVariant {
    pub size: Size,

    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    pub color: Color,
}

/// A cart item built by the server itself (`add_to_cart`, `process_payment`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub variant: SelectedVariant,

    /// Always positive
    pub quantity: NonZeroU32,
}

/// A cart item sent by the caller.
///
/// The item is kept exactly as received so it can be echoed back without
/// adding defaults or losing unknown fields. Decoding only checks the shape:
/// an object with a string `name` and, if present, a positive integer
/// `quantity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Map<String, Value>")]
pub struct CartEntry(Map<String, Value>);

impl TryFrom<Map<String, Value>> for CartEntry {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        match fields.get("name") {
            Some(Value::String(_)) => {}
            Some(other) => return Err(format!("cart item name must be a string, got {other}")),
            None => return Err("cart item is missing `name`".to_string()),
        }

        if let Some(quantity) = fields.get("quantity") {
            if !quantity.as_u64().is_some_and(|q| q >= 1) {
                return Err(format!(
                    "cart item quantity must be a positive integer, got {quantity}"
                ));
            }
        }

        Ok(Self(fields))
    }
}

impl CartEntry {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Name and size view over a cart item, used by the matching rules.
pub trait CartLine {
    fn name(&self) -> &str;
    fn size(&self) -> &str;
}

impl CartLine for CartItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> &str {
        self.variant.size.as_str()
    }
}

impl CartLine for CartEntry {
    fn name(&self) -> &str {
        self.get("name").and_then(Value::as_str).unwrap_or_default()
    }

    /// `variant.size`, or empty when absent or not a string
    fn size(&self) -> &str {
        self.get("variant")
            .and_then(|v| v.get("size"))
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

/// Promotional offer evaluated against a cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    pub description: String,

    /// Whether the cart qualifies
    pub applies: bool,

    /// Nominal discount, reported whether or not the cart qualifies
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,

    /// Whether the discount was applied (offers are auto-applied)
    pub applied: bool,
}

/// A shipping method offered by `get_delivery_option`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryOption {
    pub delivery_option: String,
    pub delivery_date: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub cost: Decimal,
}

/// Lifecycle state of a mock payment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentStatus {
    #[serde(rename = "Awaiting confirmation")]
    AwaitingConfirmation,
    Processed,
}

/// Customer details echoed in the order summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub name: String,
    pub email: String,
}

// =============================================================================
// Tool Inputs
// =============================================================================

/// Input for the search_item tool
#[derive(Debug, Default, Deserialize)]
pub struct SearchItemInput {
    /// Accepted but not used for filtering
    #[serde(default)]
    pub search_phrase: String,
}

/// Input for the add_to_cart tool
#[derive(Debug, Default, Deserialize)]
pub struct AddToCartInput {
    /// Accepted but not used; the same item is always added
    #[serde(default)]
    pub item_phrase: String,
}

/// Input shared by the tools that operate on a caller-supplied cart
#[derive(Debug, Default, Deserialize)]
pub struct CartInput {
    #[serde(default)]
    pub cart: Vec<CartEntry>,
}

/// Input for the get_delivery_option tool
#[derive(Debug, Default, Deserialize)]
pub struct DeliveryOptionInput {
    #[serde(default)]
    pub shipping_address: Map<String, Value>,
}

/// Input for the confirm_card_on_file tool (takes no arguments)
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmCardInput {}

/// Input for the process_payment tool
#[derive(Debug, Default, Deserialize)]
pub struct ProcessPaymentInput {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub customer_name: String,

    #[serde(default)]
    pub shipping_selection: Map<String, Value>,
}

// =============================================================================
// Tool Outputs
// =============================================================================

/// Response for search_item
#[derive(Debug, Serialize)]
pub struct SearchItemOutput {
    pub items: Vec<Product>,
}

/// Response for add_to_cart
#[derive(Debug, Serialize)]
pub struct AddToCartOutput {
    pub message: String,
    pub cart: Vec<CartItem>,
    pub offer: Offer,
    pub image_path: String,
}

/// Response for remove_from_cart
#[derive(Debug, Serialize)]
pub struct RemoveFromCartOutput {
    pub message: String,
    pub cart: Vec<CartEntry>,
    pub removed: Vec<CartEntry>,
}

/// Response for get_delivery_option
#[derive(Debug, Serialize)]
pub struct DeliveryOptionsOutput {
    pub available_options: Vec<DeliveryOption>,
    pub shipping_address: Map<String, Value>,
}

/// Response for confirm_card_on_file
#[derive(Debug, Serialize)]
pub struct CardConfirmation {
    pub message: String,
    pub card_last4: String,
    pub confirmed: bool,
}

/// Order summary returned by process_payment
#[derive(Debug, Serialize)]
pub struct OrderSummary {
    pub message: String,
    pub order_number: String,
    pub customer: Customer,
    pub cart: Vec<CartItem>,

    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,

    pub shipping_selection: Map<String, Value>,
    pub payment_status: PaymentStatus,
}
