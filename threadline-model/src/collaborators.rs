use threadline_types::{DisappearingMessagesConfiguration, ThreadId};

/// Resolves thread ids against the application's thread store.
///
/// Fresh construction refuses to record an event against a thread that does
/// not resolve; rehydration never consults this (the row was already
/// persisted against its thread).
pub trait ThreadDirectory {
    /// Returns true if the thread id resolves to a known thread.
    fn contains(&self, thread_id: &ThreadId) -> bool;
}

/// Supplies the live disappearing-messages configuration for a thread.
pub trait ConfigurationProvider {
    /// Returns the current configuration snapshot for the thread.
    fn current_snapshot(&self, thread_id: &ThreadId) -> DisappearingMessagesConfiguration;
}
