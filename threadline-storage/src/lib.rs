//! SQLite persistence adapter for Threadline timelines.
//!
//! Owns everything the entity model deliberately does not: thread
//! registration, per-thread sort-position assignment (serialized behind
//! the connection mutex), saving and loading the wide row, and the
//! quarantine policy for rows that fail rehydration.
//!
//! The store implements the model's `ThreadDirectory` seam, so fresh
//! construction can validate thread linkage against the same database the
//! event will be appended to.

mod error;
mod timeline_store;

pub use error::{StorageError, StorageResult};
pub use timeline_store::TimelineStore;
