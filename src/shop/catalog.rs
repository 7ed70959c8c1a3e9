//! Fixed product catalog and the canonical cart item.

use super::models::{CartItem, Color, Product, SelectedVariant, Size, Variant};
use rust_decimal::Decimal;
use std::num::NonZeroU32;

/// Category shared by every catalog product
pub const CATEGORY: &str = "Makeup";

fn color(name: &str, hex: &str) -> Color {
    Color {
        name: name.into(),
        hex: hex.into(),
    }
}

fn variant(size: Size, cents: i64, colors: Vec<Color>) -> Variant {
    Variant {
        size,
        price: Decimal::new(cents, 2),
        colors,
    }
}

fn product(id: u32, name: &str, travel: Variant, regular: Variant) -> Product {
    Product {
        id,
        name: name.into(),
        category: CATEGORY.into(),
        variants: vec![travel, regular],
    }
}

/// Returns the five catalog products in their fixed order.
pub fn catalog() -> Vec<Product> {
    let red = color("Red", "#FF0000");
    let coral = color("Coral", "#FF7F50");
    let black = color("Black", "#000000");
    let brown = color("Brown", "#654321");
    let light = color("Light", "#FBE8EB");
    let medium = color("Medium", "#E1B899");
    let deep = color("Deep", "#8D5524");
    let rose = color("Rose", "#FF66CC");
    let peach = color("Peach", "#FFDAB9");

    vec![
        product(
            1,
            "Lipstick",
            variant(Size::Travel, 899, vec![red.clone(), coral.clone()]),
            variant(
                Size::Regular,
                1599,
                vec![red, coral, color("Nude", "#C2B280")],
            ),
        ),
        product(
            2,
            "Mascara",
            variant(Size::Travel, 749, vec![black.clone()]),
            variant(Size::Regular, 1299, vec![black.clone(), brown.clone()]),
        ),
        product(
            3,
            "Foundation SPF 15",
            variant(
                Size::Travel,
                1099,
                vec![light.clone(), medium.clone(), deep.clone()],
            ),
            variant(Size::Regular, 1999, vec![light, medium, deep]),
        ),
        product(
            4,
            "Blush",
            variant(Size::Travel, 699, vec![rose.clone(), peach.clone()]),
            variant(
                Size::Regular,
                1199,
                vec![rose, peach, color("Berry", "#8A0253")],
            ),
        ),
        product(
            5,
            "Eyeliner Pencil",
            variant(Size::Travel, 599, vec![black.clone(), brown.clone()]),
            variant(
                Size::Regular,
                999,
                vec![black, brown, color("Blue", "#0000FF")],
            ),
        ),
    ]
}

/// The travel-size Black Mascara that `add_to_cart` and `process_payment`
/// always work with.
pub fn black_mascara_travel() -> CartItem {
    CartItem {
        id: 2,
        name: "Black Mascara".into(),
        category: CATEGORY.into(),
        variant: SelectedVariant {
            size: Size::Travel,
            price: Decimal::new(749, 2),
            color: color("Black", "#000000"),
        },
        quantity: NonZeroU32::MIN,
    }
}
