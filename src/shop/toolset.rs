//! The shopping tool operations.
//!
//! Every operation is a pure function of its input (apart from the random
//! order number) and never fails. Carts are never stored: each call either
//! receives one from the caller or fabricates the canonical one.

use super::{catalog::*, helpers::*, models::*};
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Image shown next to the item added by `add_to_cart`
pub const MASCARA_IMAGE_PATH: &str = "mascara.png";

/// Last four digits of the mock card on file
pub const CARD_LAST4: &str = "1234";

/// Returns the full catalog regardless of the search phrase.
pub fn search_item(input: SearchItemInput) -> SearchItemOutput {
    debug!(search_phrase = %input.search_phrase, "search_item");
    SearchItemOutput { items: catalog() }
}

/// Adds the travel-size Black Mascara, whatever the phrase says.
pub fn add_to_cart(input: AddToCartInput) -> AddToCartOutput {
    debug!(item_phrase = %input.item_phrase, "add_to_cart");
    let item = black_mascara_travel();
    let message = format!("Added '{}' (Travel size, Black) to cart.", item.name);
    let cart = vec![item];
    let offer = evaluate_offer(&cart);

    AddToCartOutput {
        message,
        cart,
        offer,
        image_path: MASCARA_IMAGE_PATH.to_string(),
    }
}

/// Drops every travel-size mascara from the supplied cart.
pub fn remove_from_cart(input: CartInput) -> RemoveFromCartOutput {
    if input.cart.is_empty() {
        return RemoveFromCartOutput {
            message: "Cart is empty.".to_string(),
            cart: Vec::new(),
            removed: Vec::new(),
        };
    }

    let (cart, removed) = partition_removable(input.cart);
    let message = if removed.is_empty() {
        "No travel-size mascara found in cart.".to_string()
    } else {
        format!(
            "Removed {} travel-size mascara item(s) from cart.",
            removed.len()
        )
    };
    debug!(kept = cart.len(), removed = removed.len(), "remove_from_cart");

    RemoveFromCartOutput {
        message,
        cart,
        removed,
    }
}

/// Evaluates the store offer against the supplied cart.
pub fn store_offers(input: CartInput) -> Offer {
    evaluate_offer(&input.cart)
}

/// Echoes the address back with the two fixed shipping methods.
pub fn get_delivery_option(input: DeliveryOptionInput) -> DeliveryOptionsOutput {
    DeliveryOptionsOutput {
        available_options: vec![
            DeliveryOption {
                delivery_option: "Standard Shipping".into(),
                delivery_date: "2025-09-05".into(),
                cost: Decimal::ZERO,
            },
            DeliveryOption {
                delivery_option: "2-Day Shipping".into(),
                delivery_date: "2025-09-02".into(),
                cost: Decimal::new(999, 2),
            },
        ],
        shipping_address: input.shipping_address,
    }
}

/// Confirms the mock card on file. There is no user interaction.
pub fn confirm_card_on_file(_input: ConfirmCardInput) -> CardConfirmation {
    CardConfirmation {
        message: format!("Card on file ending in {} confirmed.", CARD_LAST4),
        card_last4: CARD_LAST4.to_string(),
        confirmed: true,
    }
}

/// Builds the order summary for the canonical cart.
///
/// The customer details and shipping selection are carried through but never
/// change the pricing, and the payment always stays awaiting confirmation.
pub fn process_payment(input: ProcessPaymentInput) -> OrderSummary {
    let cart = vec![black_mascara_travel()];
    let subtotal = subtotal(&cart);
    let offer = evaluate_offer(&cart);
    let discount = if offer.applied {
        offer.discount
    } else {
        Decimal::ZERO
    };
    let order_number = generate_order_number();

    info!(
        order_number = %order_number,
        items = %format_item_summary(&cart),
        %subtotal,
        %discount,
        "Order placed"
    );

    OrderSummary {
        message: "Order placed. Payment is awaiting confirmation.".to_string(),
        order_number,
        customer: Customer {
            name: input.customer_name,
            email: input.email,
        },
        cart,
        subtotal,
        discount,
        total: subtotal - discount,
        shipping_selection: input.shipping_selection,
        payment_status: PaymentStatus::AwaitingConfirmation,
    }
}
