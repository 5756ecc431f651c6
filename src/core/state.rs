//! Cart collection state and mutation rules
//!
//! This module provides `CartState`, the ordered collection of line
//! items, and the rules for mutating it:
//! - adding a product merges into an existing entry instead of duplicating it
//! - incrementing bumps the quantity of an existing entry
//! - decrementing reduces the quantity and removes the entry at zero
//!
//! Every mutation produces a fresh collection rather than editing
//! entries in place, so a snapshot handed to an observer never shows a
//! partially-updated item.
//!
//! # Invariants
//!
//! - No two line items share an `id`.
//! - Every line item has `quantity >= 1`.
//! - Order is insertion order and stays stable across mutations.

use crate::types::{CartError, LineItem, NewLineItem};

/// The ordered collection of line items at a point in time
///
/// `CartState` owns the list and preserves its invariants through the
/// mutation methods below. The methods are pure with respect to `self`:
/// each returns the successor state, leaving the receiver untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    /// Line items in insertion order, ids unique
    items: Vec<LineItem>,
}

impl CartState {
    /// Create an empty cart
    pub fn new() -> Self {
        CartState { items: Vec::new() }
    }

    /// Build a cart from already-validated items
    ///
    /// Callers are responsible for the collection invariants; the decode
    /// path in [`storage::json_format`](crate::storage::json_format)
    /// rejects payloads that violate them before this is reached.
    pub(crate) fn from_items(items: Vec<LineItem>) -> Self {
        CartState { items }
    }

    /// The current collection as an ordered, read-only sequence
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products in the cart
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Quantity of the product with this id, if present
    pub fn quantity_of(&self, id: &str) -> Option<u32> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.quantity)
    }

    /// Merge a candidate product into the cart
    ///
    /// If an item with the candidate's id already exists, its quantity
    /// is incremented by one and the existing title, image, and price
    /// are kept — the candidate's metadata never overwrites them.
    /// Otherwise the candidate is appended with quantity 1.
    ///
    /// # Returns
    ///
    /// The successor state, containing exactly one item for the
    /// candidate's id.
    pub fn with_added(&self, candidate: NewLineItem) -> CartState {
        if self.quantity_of(&candidate.id).is_some() {
            // Existing entry: equivalent to increment, which cannot
            // fail because the id was just found.
            let items = self
                .items
                .iter()
                .map(|item| {
                    if item.id == candidate.id {
                        LineItem {
                            quantity: item.quantity + 1,
                            ..item.clone()
                        }
                    } else {
                        item.clone()
                    }
                })
                .collect();
            return CartState { items };
        }

        let mut items = self.items.clone();
        items.push(candidate.into_line_item());
        CartState { items }
    }

    /// Increment the quantity of an existing item by one
    ///
    /// All other fields of the item, and all other items, are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if no item with this id is
    /// in the cart.
    pub fn with_incremented(&self, id: &str) -> Result<CartState, CartError> {
        if self.quantity_of(id).is_none() {
            return Err(CartError::item_not_found(id, "increment"));
        }

        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    LineItem {
                        quantity: item.quantity + 1,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Ok(CartState { items })
    }

    /// Decrement the quantity of an item by one
    ///
    /// An item at quantity 1 is removed from the collection entirely;
    /// a zero-quantity entry is never retained. An absent id is a
    /// no-op: the successor state equals the current one.
    pub fn with_decremented(&self, id: &str) -> CartState {
        match self.quantity_of(id) {
            Some(quantity) if quantity > 1 => {
                let items = self
                    .items
                    .iter()
                    .map(|item| {
                        if item.id == id {
                            LineItem {
                                quantity: item.quantity - 1,
                                ..item.clone()
                            }
                        } else {
                            item.clone()
                        }
                    })
                    .collect();
                CartState { items }
            }
            Some(_) => {
                // Last unit: drop the entry.
                let items = self
                    .items
                    .iter()
                    .filter(|item| item.id != id)
                    .cloned()
                    .collect();
                CartState { items }
            }
            None => self.clone(),
        }
    }
}
