//! Line-item types for the cart state manager
//!
//! This module defines the record stored for each product in the cart
//! and the candidate shape handed to `add_to_cart`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product identifier
///
/// Opaque and stable; unique within a cart. The core never interprets it.
pub type ProductId = String;

/// One product entry in the cart with its quantity
///
/// This is also the persisted record shape: field-named, so stored
/// payloads tolerate reordered and unknown fields on read. `image_url`
/// serializes as `imageUrl` to match the stored payload, and `price`
/// round-trips as a plain JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Opaque stable identifier, unique within the collection
    pub id: ProductId,

    /// Descriptive title, never interpreted by the core
    pub title: String,

    /// Product image location, never interpreted by the core
    #[serde(rename = "imageUrl")]
    pub image_url: String,

    /// Non-negative unit price, immutable after the item is created
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Count of this product in the cart
    ///
    /// Invariant: `quantity >= 1` while the item exists. An item whose
    /// quantity reaches zero is removed from the collection, never kept.
    pub quantity: u32,
}

/// Candidate for [`CartState::with_added`](crate::core::CartState::with_added)
///
/// A product about to enter the cart: everything a [`LineItem`] has
/// except a quantity, because a freshly added item always starts at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLineItem {
    /// Opaque stable identifier
    pub id: ProductId,

    /// Descriptive title
    pub title: String,

    /// Product image location
    pub image_url: String,

    /// Non-negative unit price
    pub price: Decimal,
}

impl NewLineItem {
    /// Turn the candidate into a cart entry with quantity 1
    pub fn into_line_item(self) -> LineItem {
        LineItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_into_line_item_starts_at_quantity_one() {
        let candidate = NewLineItem {
            id: "sku-1".to_string(),
            title: "Keyboard".to_string(),
            image_url: "https://img.example/kb.png".to_string(),
            price: Decimal::new(12990, 2), // 129.90
        };

        let item = candidate.into_line_item();
        assert_eq!(item.id, "sku-1");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price, Decimal::new(12990, 2));
    }

    #[test]
    fn test_line_item_serializes_image_url_as_camel_case() {
        let item = LineItem {
            id: "sku-1".to_string(),
            title: "Keyboard".to_string(),
            image_url: "https://img.example/kb.png".to_string(),
            price: Decimal::new(105, 1), // 10.5
            quantity: 2,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["imageUrl"], "https://img.example/kb.png");
        assert!(json.get("image_url").is_none());
        // Price is a plain JSON number, not a string.
        assert!(json["price"].is_number());
    }
}
