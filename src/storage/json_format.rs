//! JSON payload handling for the persisted cart
//!
//! The cart is stored as a self-describing JSON array of field-named
//! records, so field order never matters and unknown extra fields are
//! tolerated on read. Decoding rejects anything that would violate the
//! collection invariants — a half-valid payload never becomes cart
//! state.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::types::{CartError, LineItem};

/// Encode the collection into the stored payload
///
/// # Errors
///
/// Returns [`CartError::Decode`] if serialization fails (not expected
/// for well-formed items; surfaced rather than panicking).
pub fn encode_items(items: &[LineItem]) -> Result<Vec<u8>, CartError> {
    Ok(serde_json::to_vec(items)?)
}

/// Decode a stored payload into a validated collection
///
/// Unknown fields in the records are ignored (forward compatibility).
///
/// # Errors
///
/// Returns [`CartError::Decode`] if:
/// - the bytes are not a JSON array of line-item records
/// - two records share an `id`
/// - a record has `quantity == 0`
/// - a record has a negative `price`
pub fn decode_items(payload: &[u8]) -> Result<Vec<LineItem>, CartError> {
    let items: Vec<LineItem> = serde_json::from_slice(payload)?;

    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(item.id.as_str()) {
            return Err(CartError::decode(format!(
                "duplicate line item id '{}'",
                item.id
            )));
        }
        if item.quantity == 0 {
            return Err(CartError::decode(format!(
                "line item '{}' has zero quantity",
                item.id
            )));
        }
        if item.price < Decimal::ZERO {
            return Err(CartError::decode(format!(
                "line item '{}' has negative price {}",
                item.id, item.price
            )));
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn item(id: &str, quantity: u32) -> LineItem {
        LineItem {
            id: id.to_string(),
            title: format!("Product {}", id),
            image_url: format!("https://img.example/{}.png", id),
            price: Decimal::new(1999, 2),
            quantity,
        }
    }

    #[test]
    fn test_round_trip_preserves_items_and_order() {
        let items = vec![item("b", 2), item("a", 1), item("c", 7)];

        let payload = encode_items(&items).unwrap();
        let decoded = decode_items(&payload).unwrap();

        assert_eq!(decoded, items);
    }

    #[test]
    fn test_round_trip_of_empty_collection() {
        let payload = encode_items(&[]).unwrap();
        let decoded = decode_items(&payload).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_decode_ignores_unknown_extra_fields() {
        let payload = br#"[
            {
                "id": "a",
                "title": "Product a",
                "imageUrl": "https://img.example/a.png",
                "price": 19.99,
                "quantity": 2,
                "discountCode": "SUMMER"
            }
        ]"#;

        let decoded = decode_items(payload).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].id, "a");
        assert_eq!(decoded[0].quantity, 2);
    }

    #[test]
    fn test_decode_accepts_reordered_fields() {
        let payload = br#"[
            {
                "quantity": 1,
                "price": 5.0,
                "imageUrl": "u",
                "title": "T",
                "id": "a"
            }
        ]"#;

        let decoded = decode_items(payload).unwrap();
        assert_eq!(decoded[0].id, "a");
    }

    #[rstest]
    #[case::not_json(b"not json at all".as_slice())]
    #[case::wrong_shape(br#"{"id": "a"}"#.as_slice())]
    #[case::missing_field(br#"[{"id": "a", "title": "T", "price": 1.0, "quantity": 1}]"#.as_slice())]
    #[case::negative_quantity(
        br#"[{"id": "a", "title": "T", "imageUrl": "u", "price": 1.0, "quantity": -1}]"#.as_slice()
    )]
    fn test_decode_rejects_malformed_payloads(#[case] payload: &[u8]) {
        let result = decode_items(payload);
        assert!(matches!(result.unwrap_err(), CartError::Decode { .. }));
    }

    #[test]
    fn test_decode_rejects_duplicate_ids() {
        let payload = encode_items(&[item("a", 1), item("a", 2)]).unwrap();
        let result = decode_items(&payload);
        assert!(matches!(result.unwrap_err(), CartError::Decode { .. }));
    }

    #[test]
    fn test_decode_rejects_zero_quantity() {
        let payload =
            br#"[{"id": "a", "title": "T", "imageUrl": "u", "price": 1.0, "quantity": 0}]"#;
        let result = decode_items(payload);
        assert!(matches!(result.unwrap_err(), CartError::Decode { .. }));
    }

    #[test]
    fn test_decode_rejects_negative_price() {
        let payload =
            br#"[{"id": "a", "title": "T", "imageUrl": "u", "price": -1.5, "quantity": 1}]"#;
        let result = decode_items(payload);
        assert!(matches!(result.unwrap_err(), CartError::Decode { .. }));
    }
}
