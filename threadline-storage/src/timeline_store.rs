//! SQLite-backed store for threads and their interaction timelines.

use crate::error::{StorageError, StorageResult};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::{Arc, Mutex};
use threadline_model::{Interaction, InteractionRow, ThreadDirectory};
use threadline_types::{InteractionId, ThreadId};

/// Persistent store for timeline events backed by SQLite.
///
/// The connection mutex serializes writes, which is what guarantees that
/// sort positions for a thread are assigned one at a time and that at most
/// one write per unique id is in flight.
pub struct TimelineStore {
    conn: Arc<Mutex<Connection>>,
}

impl TimelineStore {
    /// Opens (or creates) a timeline store at the given path.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Opens an in-memory timeline store (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StorageResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS threads (
                thread_id TEXT PRIMARY KEY
            );

            CREATE TABLE IF NOT EXISTS interactions (
                unique_id TEXT PRIMARY KEY,
                thread_id TEXT NOT NULL,
                timestamp INTEGER NOT NULL,
                received_at INTEGER,
                sort_position INTEGER NOT NULL,
                schema_version INTEGER NOT NULL,
                kind INTEGER NOT NULL,
                fallback_text TEXT,
                info_schema_version INTEGER NOT NULL,
                read INTEGER NOT NULL DEFAULT 0,
                duration_seconds INTEGER,
                is_enabled INTEGER,
                created_by_remote_name TEXT,
                created_in_existing_group INTEGER,
                UNIQUE(thread_id, sort_position)
            );

            CREATE INDEX IF NOT EXISTS idx_interactions_thread
                ON interactions(thread_id, sort_position);
            ",
        )?;
        tracing::debug!("timeline schema initialized");
        Ok(())
    }

    // ── Threads ──────────────────────────────────────────────────

    /// Registers a thread. Idempotent.
    pub fn create_thread(&self, thread_id: &ThreadId) -> StorageResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR IGNORE INTO threads (thread_id) VALUES (?1)",
            params![thread_id.as_str()],
        )?;
        Ok(())
    }

    /// Returns true if the thread id resolves.
    pub fn resolve_thread(&self, thread_id: &ThreadId) -> StorageResult<bool> {
        let conn = self.conn.lock().unwrap();
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM threads WHERE thread_id = ?1)",
            params![thread_id.as_str()],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    // ── Interactions ─────────────────────────────────────────────

    /// The sort position the next append to this thread will receive.
    pub fn next_sort_position(&self, thread_id: &ThreadId) -> StorageResult<u64> {
        let conn = self.conn.lock().unwrap();
        next_position(&conn, thread_id)
    }

    /// Appends an event to its thread's timeline.
    ///
    /// Assigns the next per-thread sort position and inserts the row in
    /// one transaction, then returns the event with the position stamped.
    pub fn append(&self, interaction: Interaction) -> StorageResult<Interaction> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;

        let thread_id = interaction.thread_id().clone();
        let exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM threads WHERE thread_id = ?1)",
            params![thread_id.as_str()],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(StorageError::ThreadNotFound(thread_id.to_string()));
        }

        let position = next_position(&tx, &thread_id)?;
        let interaction = interaction.with_sort_position(position);
        insert_row(&tx, &interaction.to_row())?;
        tx.commit()?;
        Ok(interaction)
    }

    /// Writes a literal row without assigning a position.
    ///
    /// Adapter-level escape hatch for rows that already carry a position
    /// (e.g. restored from a backup written by another build).
    pub fn save_row(&self, row: &InteractionRow) -> StorageResult<()> {
        let conn = self.conn.lock().unwrap();
        insert_row(&conn, row)
    }

    /// Loads the literal stored row for an event, if present.
    pub fn load_row(&self, unique_id: &InteractionId) -> StorageResult<Option<InteractionRow>> {
        let conn = self.conn.lock().unwrap();
        let row = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM interactions WHERE unique_id = ?1"),
                params![unique_id.to_string()],
                row_from_sql,
            )
            .optional()?;
        Ok(row)
    }

    /// Loads and rehydrates an event.
    ///
    /// A row that fails rehydration surfaces [`StorageError::Corrupt`];
    /// callers on the read path usually quarantine rather than crash.
    pub fn load(&self, unique_id: &InteractionId) -> StorageResult<Option<Interaction>> {
        match self.load_row(unique_id)? {
            Some(row) => Ok(Some(Interaction::from_row(row)?)),
            None => Ok(None),
        }
    }

    /// The thread's timeline, ordered by sort position.
    ///
    /// Corrupt rows are quarantined: logged and skipped, never allowed to
    /// fail the whole read.
    pub fn thread_timeline(&self, thread_id: &ThreadId) -> StorageResult<Vec<Interaction>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM interactions WHERE thread_id = ?1 ORDER BY sort_position"
        ))?;
        let rows = stmt.query_map(params![thread_id.as_str()], row_from_sql)?;

        let mut timeline = Vec::new();
        for row in rows {
            let row = row?;
            let unique_id = row.unique_id.clone();
            match Interaction::from_row(row) {
                Ok(interaction) => timeline.push(interaction),
                Err(err) => {
                    tracing::warn!(%unique_id, %err, "quarantining undecodable timeline row");
                }
            }
        }
        Ok(timeline)
    }
}

impl ThreadDirectory for TimelineStore {
    fn contains(&self, thread_id: &ThreadId) -> bool {
        match self.resolve_thread(thread_id) {
            Ok(exists) => exists,
            Err(err) => {
                tracing::warn!(%err, "thread lookup failed");
                false
            }
        }
    }
}

const COLUMNS: &str = "unique_id, thread_id, timestamp, received_at, sort_position, \
     schema_version, kind, fallback_text, info_schema_version, read, \
     duration_seconds, is_enabled, created_by_remote_name, created_in_existing_group";

fn next_position(conn: &Connection, thread_id: &ThreadId) -> StorageResult<u64> {
    let next: i64 = conn.query_row(
        "SELECT COALESCE(MAX(sort_position), 0) + 1 FROM interactions WHERE thread_id = ?1",
        params![thread_id.as_str()],
        |row| row.get(0),
    )?;
    Ok(next as u64)
}

fn insert_row(conn: &Connection, row: &InteractionRow) -> StorageResult<()> {
    conn.execute(
        "INSERT INTO interactions (
            unique_id, thread_id, timestamp, received_at, sort_position,
            schema_version, kind, fallback_text, info_schema_version, read,
            duration_seconds, is_enabled, created_by_remote_name, created_in_existing_group
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            row.unique_id,
            row.thread_id,
            row.timestamp as i64,
            row.received_at.map(|v| v as i64),
            row.sort_position as i64,
            row.schema_version as i64,
            row.kind as i64,
            row.fallback_text,
            row.info_schema_version as i64,
            row.read,
            row.duration_seconds.map(i64::from),
            row.is_enabled,
            row.created_by_remote_name,
            row.created_in_existing_group,
        ],
    )?;
    Ok(())
}

fn row_from_sql(row: &rusqlite::Row<'_>) -> rusqlite::Result<InteractionRow> {
    Ok(InteractionRow {
        unique_id: row.get(0)?,
        thread_id: row.get(1)?,
        timestamp: row.get::<_, i64>(2)? as u64,
        received_at: row.get::<_, Option<i64>>(3)?.map(|v| v as u64),
        sort_position: row.get::<_, i64>(4)? as u64,
        schema_version: row.get::<_, i64>(5)? as u32,
        kind: row.get::<_, i64>(6)? as u32,
        fallback_text: row.get(7)?,
        info_schema_version: row.get::<_, i64>(8)? as u32,
        read: row.get(9)?,
        duration_seconds: row.get::<_, Option<i64>>(10)?.map(|v| v as u32),
        is_enabled: row.get(11)?,
        created_by_remote_name: row.get(12)?,
        created_in_existing_group: row.get(13)?,
    })
}
