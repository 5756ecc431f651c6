//! Storage module
//!
//! The durable key-value boundary the cart survives restarts through.
//!
//! # Components
//!
//! - `json_format` - payload encoding/decoding and decode-time invariant checks
//! - `memory` - in-memory adapter for tests and ephemeral carts
//! - `file` - file-per-key durable adapter backed by `tokio::fs`

use std::future::Future;

use crate::types::CartError;

pub mod file;
pub mod json_format;
pub mod memory;

pub use file::FileStorage;
pub use json_format::{decode_items, encode_items};
pub use memory::MemoryStorage;

/// The single stable key the serialized cart lives under
///
/// Adapters must keep unrelated keys from colliding with this one.
pub const CART_STORAGE_KEY: &str = "cart/products";

/// Durable key-value read/write boundary
///
/// Implementations take `&self` so they can use interior mutability for
/// their backing store. A missing key is a normal, representable result
/// (`Ok(None)`), never an error. Completion of `write` means the payload
/// is durable from the caller's perspective; any retry or timeout policy
/// is the adapter's own concern and opaque to the cart store.
pub trait StorageAdapter: Send + Sync {
    /// Retrieve the last-written payload for `key`
    ///
    /// Returns `Ok(None)` if the key has never been written.
    fn read(&self, key: &str) -> impl Future<Output = Result<Option<Vec<u8>>, CartError>> + Send;

    /// Durably store `payload` under `key`, replacing any prior value
    fn write(&self, key: &str, payload: &[u8]) -> impl Future<Output = Result<(), CartError>> + Send;
}
