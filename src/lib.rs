//! Marketplace Cart Library
//! # Overview
//!
//! This library provides a client-side shopping-cart state manager with
//! write-through persistence to an injectable key-value adapter.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (LineItem, CartError, etc.)
//! - [`core`] - Business logic components:
//!   - [`core::state`] - The ordered collection and its mutation rules
//!   - [`core::store`] - Mutation orchestration, write-through, snapshot publication
//! - [`storage`] - The durable key-value boundary with pluggable adapters
//!
//! # Operations
//!
//! The cart store supports three mutations plus a one-time load:
//!
//! - **Load**: seed the in-memory cart from the persisted collection
//! - **Add to cart**: append a new product at quantity 1, or merge into
//!   an existing entry by incrementing it
//! - **Increment**: bump the quantity of an existing entry by one
//! - **Decrement**: reduce a quantity by one, removing the entry when
//!   it reaches zero
//!
//! Every successful mutation performs exactly one durable write of the
//! complete post-mutation collection and publishes exactly one new
//! snapshot to subscribers, in that order — the in-memory cart moves
//! only after the write succeeds.
//!
//! # Invariants
//!
//! At all times the collection holds:
//! - no two line items share an `id`
//! - every line item has `quantity >= 1`
//! - item order is insertion order, stable for display

// Module declarations
pub mod core;
pub mod storage;
pub mod types;

pub use crate::core::{CartState, CartStore};
pub use storage::{FileStorage, MemoryStorage, StorageAdapter, CART_STORAGE_KEY};
pub use types::{CartError, LineItem, NewLineItem, ProductId};
