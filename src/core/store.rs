//! Cart store orchestration
//!
//! This module provides the `CartStore`, which composes the collection
//! state with an injected storage adapter. It enforces the side-effect
//! order of every mutation:
//!
//! 1. compute the successor collection
//! 2. await the durable write-through
//! 3. swap the in-memory snapshot
//! 4. publish the new snapshot to subscribers
//!
//! The in-memory snapshot moves only after the write succeeds, so
//! memory never drifts ahead of storage: a failed write leaves the
//! cart exactly as it was, and subscribers hear nothing.
//!
//! # Concurrency
//!
//! Every mutation takes `&mut self` and has a single await point (the
//! durable write), so two mutations can never interleave their
//! read-modify-write cycles against the same store.

use tokio::sync::watch;
use tracing::debug;

use crate::core::state::CartState;
use crate::storage::{json_format, StorageAdapter, CART_STORAGE_KEY};
use crate::types::{CartError, LineItem, NewLineItem};

/// Shopping-cart state manager with write-through persistence
///
/// Owns the current [`CartState`], persists every successful mutation
/// through the injected [`StorageAdapter`], and publishes each new
/// snapshot on a watch channel. Constructed with its adapter, so the
/// store cannot exist without a persistence boundary.
pub struct CartStore<S: StorageAdapter> {
    /// The injected persistence boundary
    storage: S,

    /// Current collection; replaced wholesale on every mutation
    state: CartState,

    /// Snapshot publisher; `subscribe` hands out receivers
    publisher: watch::Sender<CartState>,
}

impl<S: StorageAdapter> CartStore<S> {
    /// Create a store over the given adapter, starting empty
    ///
    /// Call [`load`](Self::load) before the first mutation to seed the
    /// cart from storage; skipping it deliberately yields an ephemeral
    /// cart that starts empty and still writes through.
    pub fn new(storage: S) -> Self {
        let state = CartState::new();
        let (publisher, _) = watch::channel(state.clone());
        CartStore {
            storage,
            state,
            publisher,
        }
    }

    /// Seed the cart from the persisted collection, if one exists
    ///
    /// Expected exactly once, before any mutation. An absent payload
    /// leaves the cart empty. The seeded snapshot is published so
    /// subscribers attached before `load` observe it.
    ///
    /// # Errors
    ///
    /// - [`CartError::Storage`] if the read fails
    /// - [`CartError::Decode`] if the payload is malformed; the store
    ///   keeps its pre-load state rather than guessing a default
    pub async fn load(&mut self) -> Result<(), CartError> {
        let Some(payload) = self.storage.read(CART_STORAGE_KEY).await? else {
            debug!("no persisted cart, starting empty");
            return Ok(());
        };

        let items = json_format::decode_items(&payload)?;
        debug!(items = items.len(), "cart seeded from storage");

        self.state = CartState::from_items(items);
        self.publisher.send_replace(self.state.clone());
        Ok(())
    }

    /// The current collection as an ordered, read-only sequence
    pub fn products(&self) -> &[LineItem] {
        self.state.items()
    }

    /// The current state snapshot
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// A receiver that observes every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.publisher.subscribe()
    }

    /// Add a product to the cart
    ///
    /// If an item with the candidate's id already exists this is
    /// equivalent to [`increment`](Self::increment) — the stored
    /// metadata is kept. Otherwise the product is appended with
    /// quantity 1.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the write-through fails; the
    /// in-memory cart is left unchanged.
    pub async fn add_to_cart(&mut self, candidate: NewLineItem) -> Result<(), CartError> {
        let next = self.state.with_added(candidate);
        self.commit(next).await
    }

    /// Increment the quantity of an existing item by one
    ///
    /// # Errors
    ///
    /// - [`CartError::ItemNotFound`] if no item with this id exists;
    ///   nothing is persisted or published
    /// - [`CartError::Storage`] if the write-through fails
    pub async fn increment(&mut self, id: &str) -> Result<(), CartError> {
        let next = self.state.with_incremented(id)?;
        self.commit(next).await
    }

    /// Decrement the quantity of an item by one
    ///
    /// An item at quantity 1 is removed entirely. An absent id is a
    /// no-op that still writes the unchanged collection through, so
    /// the call is idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the write-through fails.
    pub async fn decrement(&mut self, id: &str) -> Result<(), CartError> {
        let next = self.state.with_decremented(id);
        self.commit(next).await
    }

    /// Persist the successor state, then make it current and publish it
    async fn commit(&mut self, next: CartState) -> Result<(), CartError> {
        let payload = json_format::encode_items(next.items())?;
        self.storage.write(CART_STORAGE_KEY, &payload).await?;
        debug!(items = next.len(), "cart write-through committed");

        self.state = next;
        self.publisher.send_replace(self.state.clone());
        Ok(())
    }
}
