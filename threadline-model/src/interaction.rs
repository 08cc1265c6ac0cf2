//! The base timeline-event record and its two construction paths.

use crate::collaborators::{ConfigurationProvider, ThreadDirectory};
use crate::config_change::ConfigurationChange;
use crate::error::{ModelError, Result};
use crate::info::{InfoBody, InfoEvent};
use crate::migration::{self, BASE_SCHEMA_VERSION};
use crate::row::InteractionRow;
use threadline_types::{Clock, DisappearingMessagesConfiguration, InteractionId, ThreadId};

/// The payload of an interaction, keyed by event type.
///
/// A closed set: adding a subtype means adding a variant here, which cannot
/// disturb the decode path of any existing variant.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionBody {
    /// A system-generated event describing a state change.
    Info(InfoEvent),
}

/// One record in a conversation's append-only, strictly-ordered timeline.
///
/// Construct-once and immutable: configuration changes never mutate an
/// existing event, they produce a new one. The only post-construction
/// write is the adapter-facing [`Interaction::with_sort_position`].
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    unique_id: InteractionId,
    thread_id: ThreadId,
    timestamp: u64,
    received_at: u64,
    sort_position: Option<u64>,
    schema_version: u32,
    body: InteractionBody,
}

impl Interaction {
    /// Fresh construction of a base record.
    ///
    /// Assigns a new unique id and the current base schema version. The
    /// sort position stays unassigned until the persistence adapter
    /// appends the event.
    pub fn new(
        thread_id: ThreadId,
        timestamp: u64,
        received_at: u64,
        body: InteractionBody,
    ) -> Result<Self> {
        if thread_id.is_empty() {
            return Err(ModelError::InvalidReference(
                "thread id is empty".to_string(),
            ));
        }
        Ok(Self {
            unique_id: InteractionId::new(),
            thread_id,
            timestamp,
            received_at,
            sort_position: None,
            schema_version: BASE_SCHEMA_VERSION,
            body,
        })
    }

    /// Records a disappearing-message timer change observed right now.
    ///
    /// Copies `is_enabled`/`duration_seconds` out of the snapshot at call
    /// time; later configuration changes never retroactively alter this
    /// event. `changed_by_remote_name` is `None` for a local change.
    pub fn record_config_change(
        threads: &dyn ThreadDirectory,
        clock: &dyn Clock,
        thread_id: ThreadId,
        timestamp: u64,
        configuration: &DisappearingMessagesConfiguration,
        changed_by_remote_name: Option<String>,
        created_in_existing_group: bool,
    ) -> Result<Self> {
        if !threads.contains(&thread_id) {
            return Err(ModelError::InvalidArgument(format!(
                "thread `{thread_id}` does not resolve"
            )));
        }
        let change = ConfigurationChange::from_snapshot(
            configuration,
            changed_by_remote_name,
            created_in_existing_group,
        );
        let info = InfoEvent::new(InfoBody::DisappearingMessagesUpdate(change));
        Self::new(
            thread_id,
            timestamp,
            clock.now_millis(),
            InteractionBody::Info(info),
        )
    }

    /// Like [`Interaction::record_config_change`], pulling the snapshot
    /// from the configuration collaborator instead of the caller.
    pub fn record_config_change_from_current(
        threads: &dyn ThreadDirectory,
        clock: &dyn Clock,
        provider: &dyn ConfigurationProvider,
        thread_id: ThreadId,
        timestamp: u64,
        changed_by_remote_name: Option<String>,
        created_in_existing_group: bool,
    ) -> Result<Self> {
        let snapshot = provider.current_snapshot(&thread_id);
        Self::record_config_change(
            threads,
            clock,
            thread_id,
            timestamp,
            &snapshot,
            changed_by_remote_name,
            created_in_existing_group,
        )
    }

    /// Rehydrates an interaction from a stored row.
    ///
    /// Accepts the field set exactly as persisted, including version
    /// counters older than this build's, then runs migration-on-read.
    /// Fields still absent after default substitution are corruption and
    /// fail with [`ModelError::MissingField`]; an unrecognized kind tag is
    /// not an error and decodes via the fallback path.
    pub fn from_row(mut row: InteractionRow) -> Result<Self> {
        migration::run(&mut row);

        let unique_id = InteractionId::parse(&row.unique_id)?;
        if row.thread_id.is_empty() {
            return Err(ModelError::InvalidReference(
                "stored row has an empty thread id".to_string(),
            ));
        }

        let info = InfoEvent::from_row(&row)?;
        // Migration guarantees received_at after the backfill rule; the
        // fallback keeps this total rather than panicking.
        let received_at = row.received_at.unwrap_or(row.timestamp);

        Ok(Self {
            unique_id,
            thread_id: ThreadId::new(row.thread_id),
            timestamp: row.timestamp,
            received_at,
            sort_position: Some(row.sort_position),
            schema_version: row.schema_version,
            body: InteractionBody::Info(info),
        })
    }

    /// Encodes the event as a wide row for persistence.
    ///
    /// The adapter stamps the sort position (via
    /// [`Interaction::with_sort_position`]) before encoding; an event that
    /// was never appended serializes position 0.
    #[must_use]
    pub fn to_row(&self) -> InteractionRow {
        let mut row = InteractionRow {
            unique_id: self.unique_id.to_string(),
            thread_id: self.thread_id.as_str().to_string(),
            timestamp: self.timestamp,
            received_at: Some(self.received_at),
            sort_position: self.sort_position.unwrap_or(0),
            schema_version: self.schema_version,
            kind: 0,
            fallback_text: None,
            info_schema_version: 0,
            read: false,
            duration_seconds: None,
            is_enabled: None,
            created_by_remote_name: None,
            created_in_existing_group: None,
        };
        let InteractionBody::Info(info) = &self.body;
        info.write_row(&mut row);
        row
    }

    /// Stamps the adapter-assigned sort position.
    ///
    /// For the persistence adapter only, at insert time; a position is
    /// assigned once and never reassigned.
    #[must_use]
    pub fn with_sort_position(mut self, sort_position: u64) -> Self {
        self.sort_position = Some(sort_position);
        self
    }

    #[must_use]
    pub const fn unique_id(&self) -> InteractionId {
        self.unique_id
    }

    #[must_use]
    pub fn thread_id(&self) -> &ThreadId {
        &self.thread_id
    }

    /// Logical event time (may predate local receipt, e.g. for events
    /// synced from another device).
    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Local receipt time.
    #[must_use]
    pub const fn received_at(&self) -> u64 {
        self.received_at
    }

    /// Position within the owning thread, `None` until the adapter
    /// appends the event.
    #[must_use]
    pub const fn sort_position(&self) -> Option<u64> {
        self.sort_position
    }

    /// Base schema version in effect when this record was written.
    #[must_use]
    pub const fn schema_version(&self) -> u32 {
        self.schema_version
    }

    #[must_use]
    pub const fn body(&self) -> &InteractionBody {
        &self.body
    }

    /// The info event, for consumers that only handle system events.
    #[must_use]
    pub fn info(&self) -> Option<&InfoEvent> {
        let InteractionBody::Info(info) = &self.body;
        Some(info)
    }

    /// The configuration-change payload, if this event carries one.
    #[must_use]
    pub fn as_config_change(&self) -> Option<&ConfigurationChange> {
        match &self.body {
            InteractionBody::Info(info) => match info.body() {
                InfoBody::DisappearingMessagesUpdate(change) => Some(change),
                _ => None,
            },
        }
    }
}
