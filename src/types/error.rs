//! Error types for the cart state manager
//!
//! This module defines all error kinds the cart core can report. An
//! absent persisted payload is deliberately NOT an error — the storage
//! boundary represents it as `Ok(None)`.
//!
//! # Error Categories
//!
//! - **Decode Errors**: persisted bytes do not parse into a valid collection
//! - **Precondition Violations**: an operation referenced an id that is not in the cart
//! - **Storage Errors**: the durable read or write did not complete

use thiserror::Error;

/// Main error type for the cart state manager
///
/// Every failure is returned to the direct caller; the core never
/// logs-and-continues and never substitutes a default collection for
/// corrupt data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    /// Persisted bytes do not parse into the expected collection shape
    ///
    /// Reported by `load()`. The store keeps its pre-load state rather
    /// than proceeding with a half-parsed collection.
    #[error("Malformed cart payload: {message}")]
    Decode {
        /// Description of the decode failure
        message: String,
    },

    /// An operation referenced a product id that is not in the cart
    ///
    /// Reported by `increment` for an absent id (`decrement` on an
    /// absent id is defined as a no-op instead).
    #[error("No cart item '{id}' for {operation}")]
    ItemNotFound {
        /// The product id that was not found
        id: String,
        /// Operation that failed
        operation: String,
    },

    /// A durable read or write did not complete
    ///
    /// When a write fails the in-memory collection is left unchanged
    /// and nothing is published to subscribers.
    #[error("Storage failure for key '{key}': {message}")]
    Storage {
        /// The storage key the operation targeted
        key: String,
        /// Description of the storage failure
        message: String,
    },
}

// Helper functions for creating common errors

impl CartError {
    /// Create a Decode error
    pub fn decode(message: impl Into<String>) -> Self {
        CartError::Decode {
            message: message.into(),
        }
    }

    /// Create an ItemNotFound error
    pub fn item_not_found(id: &str, operation: &str) -> Self {
        CartError::ItemNotFound {
            id: id.to_string(),
            operation: operation.to_string(),
        }
    }

    /// Create a Storage error
    pub fn storage(key: &str, message: impl Into<String>) -> Self {
        CartError::Storage {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

// Conversion from serde_json::Error to CartError
impl From<serde_json::Error> for CartError {
    fn from(error: serde_json::Error) -> Self {
        CartError::Decode {
            message: error.to_string(),
        }
    }
}
