//! Core type definitions for Threadline.
//!
//! This crate defines the fundamental, subtype-agnostic types used throughout
//! the timeline persistence core:
//! - Interaction and thread identifiers
//! - The millisecond clock seam (wall-clock trait plus system impl)
//! - The disappearing-messages configuration snapshot
//!
//! All interaction subtypes and the wide-row codec belong to
//! `threadline-model`, not here.

mod clock;
mod config;
mod ids;

pub use clock::{Clock, SystemClock};
pub use config::{DEFAULT_DURATION_SECONDS, DisappearingMessagesConfiguration};
pub use ids::{InteractionId, ThreadId};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
