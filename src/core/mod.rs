//! Core business logic module
//!
//! This module contains the cart's core components:
//! - `state` - the ordered collection and its mutation rules
//! - `store` - orchestration: load-once seeding, write-through, snapshot publication

pub mod state;
pub mod store;

pub use state::CartState;
pub use store::CartStore;
