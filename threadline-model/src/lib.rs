//! Timeline-event entity model for Threadline.
//!
//! Interactions form a shared, append-only, strictly-ordered timeline
//! persisted as rows of a single wide schema. This crate defines:
//! - [`Interaction`] — the base timeline-event record, construct-once and
//!   immutable, with its payload embedded as a closed-set variant
//! - [`InfoEvent`] / [`InfoBody`] — system-generated events, including the
//!   forward-compatible handling of kind tags written by newer code
//! - [`ConfigurationChange`] — the disappearing-message timer change payload
//! - [`InteractionRow`] — the persisted wide-row layout every subtype
//!   encodes through
//! - migration-on-read for the two independent schema-version counters
//!
//! Two construction paths exist and only two: fresh construction from live
//! application state ([`Interaction::record_config_change`]) and rehydration
//! from a stored row ([`Interaction::from_row`]). The storage adapter lives
//! in `threadline-storage`; this crate performs no I/O.

mod collaborators;
mod config_change;
mod error;
mod info;
mod interaction;
mod migration;
mod row;

pub use collaborators::{ConfigurationProvider, ThreadDirectory};
pub use config_change::ConfigurationChange;
pub use error::{ModelError, Result};
pub use info::{InfoBody, InfoEvent};
pub use interaction::{Interaction, InteractionBody};
pub use migration::{BASE_SCHEMA_VERSION, INFO_SCHEMA_VERSION};
pub use row::InteractionRow;
