//! System-generated (non-user-authored) timeline events.
//!
//! The kind registry is a closed set keyed by a stable numeric tag. Rows
//! written by newer code may carry tags this build does not know; those
//! decode into [`InfoBody::Unrecognized`] and render through the fallback
//! text. An unknown tag is never a decode error.

use crate::config_change::ConfigurationChange;
use crate::error::{ModelError, Result};
use crate::migration::INFO_SCHEMA_VERSION;
use crate::row::InteractionRow;
use serde::{Deserialize, Serialize};

/// Stable wire tags for the info-event kinds. Append-only: a tag is never
/// reused or renumbered once a row has been written with it.
pub(crate) mod tag {
    pub const SESSION_ENDED: u32 = 0;
    pub const USER_NOT_REGISTERED: u32 = 1;
    pub const UNSUPPORTED_MESSAGE: u32 = 2;
    pub const GROUP_UPDATED: u32 = 3;
    pub const GROUP_QUIT: u32 = 4;
    pub const DISAPPEARING_MESSAGES_UPDATE: u32 = 5;
    pub const VERIFICATION_STATE_CHANGED: u32 = 6;
}

/// Shown when a row carries a kind tag this build does not recognize and
/// the writer stored no fallback text of its own.
const UNRECOGNIZED_FALLBACK: &str = "Unsupported timeline update";

/// The closed set of info-event kinds, with the payload (when a kind has
/// one) embedded in its variant so a new kind cannot break existing decode
/// paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InfoBody {
    SessionEnded,
    UserNotRegistered,
    UnsupportedMessage,
    GroupUpdated,
    GroupQuit,
    DisappearingMessagesUpdate(ConfigurationChange),
    VerificationStateChanged,
    /// A kind written by a newer code version. The raw tag is carried
    /// opaquely so re-encoding preserves it.
    Unrecognized { raw_tag: u32 },
}

impl InfoBody {
    /// The numeric tag persisted in the wide row.
    #[must_use]
    pub fn raw_tag(&self) -> u32 {
        match self {
            Self::SessionEnded => tag::SESSION_ENDED,
            Self::UserNotRegistered => tag::USER_NOT_REGISTERED,
            Self::UnsupportedMessage => tag::UNSUPPORTED_MESSAGE,
            Self::GroupUpdated => tag::GROUP_UPDATED,
            Self::GroupQuit => tag::GROUP_QUIT,
            Self::DisappearingMessagesUpdate(_) => tag::DISAPPEARING_MESSAGES_UPDATE,
            Self::VerificationStateChanged => tag::VERIFICATION_STATE_CHANGED,
            Self::Unrecognized { raw_tag } => *raw_tag,
        }
    }
}

/// An info event: the kind registry entry plus the attributes shared by
/// every system-generated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoEvent {
    pub(crate) body: InfoBody,
    pub(crate) fallback_text: Option<String>,
    pub(crate) schema_version: u32,
    pub(crate) read: bool,
}

impl InfoEvent {
    /// Creates a fresh info event at the current info schema version.
    #[must_use]
    pub fn new(body: InfoBody) -> Self {
        Self {
            body,
            fallback_text: None,
            schema_version: INFO_SCHEMA_VERSION,
            read: false,
        }
    }

    /// Attaches fallback text for kinds without a structured renderer.
    #[must_use]
    pub fn with_fallback_text(mut self, text: impl Into<String>) -> Self {
        self.fallback_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn body(&self) -> &InfoBody {
        &self.body
    }

    /// Stored fallback text, if any.
    #[must_use]
    pub fn fallback_text(&self) -> Option<&str> {
        self.fallback_text.as_deref()
    }

    /// Info-payload schema version, independent of the base counter.
    #[must_use]
    pub const fn schema_version(&self) -> u32 {
        self.schema_version
    }

    #[must_use]
    pub const fn is_read(&self) -> bool {
        self.read
    }

    /// Rebuilds the info layers from a migrated row.
    ///
    /// Must run after migration: version-gap defaults have already been
    /// substituted, so any field still absent here is row corruption.
    pub(crate) fn from_row(row: &InteractionRow) -> Result<Self> {
        let (body, fallback_text) = match row.kind {
            tag::SESSION_ENDED => (InfoBody::SessionEnded, row.fallback_text.clone()),
            tag::USER_NOT_REGISTERED => (InfoBody::UserNotRegistered, row.fallback_text.clone()),
            tag::UNSUPPORTED_MESSAGE => (InfoBody::UnsupportedMessage, row.fallback_text.clone()),
            tag::GROUP_UPDATED => (InfoBody::GroupUpdated, row.fallback_text.clone()),
            tag::GROUP_QUIT => (InfoBody::GroupQuit, row.fallback_text.clone()),
            tag::VERIFICATION_STATE_CHANGED => {
                (InfoBody::VerificationStateChanged, row.fallback_text.clone())
            }
            tag::DISAPPEARING_MESSAGES_UPDATE => {
                let duration_seconds = row.duration_seconds.ok_or(ModelError::MissingField {
                    field: "duration_seconds",
                })?;
                let is_enabled = row.is_enabled.ok_or(ModelError::MissingField {
                    field: "is_enabled",
                })?;
                let created_in_existing_group =
                    row.created_in_existing_group
                        .ok_or(ModelError::MissingField {
                            field: "created_in_existing_group",
                        })?;
                let change = ConfigurationChange {
                    duration_seconds,
                    is_enabled,
                    created_by_remote_name: row.created_by_remote_name.clone(),
                    created_in_existing_group,
                };
                (
                    InfoBody::DisappearingMessagesUpdate(change),
                    row.fallback_text.clone(),
                )
            }
            raw_tag => {
                // Written by newer code. Keep the tag opaquely and make
                // sure there is always text to render.
                let text = row
                    .fallback_text
                    .clone()
                    .unwrap_or_else(|| UNRECOGNIZED_FALLBACK.to_string());
                (InfoBody::Unrecognized { raw_tag }, Some(text))
            }
        };

        Ok(Self {
            body,
            fallback_text,
            schema_version: row.info_schema_version,
            read: row.read,
        })
    }

    /// Writes the info layers into a wide row under construction.
    pub(crate) fn write_row(&self, row: &mut InteractionRow) {
        row.kind = self.body.raw_tag();
        row.fallback_text = self.fallback_text.clone();
        row.info_schema_version = self.schema_version;
        row.read = self.read;

        if let InfoBody::DisappearingMessagesUpdate(change) = &self.body {
            row.duration_seconds = Some(change.duration_seconds);
            row.is_enabled = Some(change.is_enabled);
            row.created_by_remote_name = change.created_by_remote_name.clone();
            row.created_in_existing_group = Some(change.created_in_existing_group);
        }
    }
}
