//! Types module
//!
//! Contains core data structures used throughout the crate.
//! This module organizes types into logical submodules:
//! - `item`: line-item types and identifiers
//! - `error`: error types for the cart state manager

pub mod error;
pub mod item;

pub use error::CartError;
pub use item::{LineItem, NewLineItem, ProductId};
