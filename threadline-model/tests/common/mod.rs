//! Shared collaborator fakes for model tests.

#![allow(dead_code)]

use std::collections::HashSet;
use threadline_model::{ConfigurationProvider, ThreadDirectory};
use threadline_types::{Clock, DisappearingMessagesConfiguration, ThreadId};

/// In-memory thread directory.
pub struct Threads(HashSet<ThreadId>);

impl Threads {
    pub fn with(ids: &[&str]) -> Self {
        Self(ids.iter().map(|id| ThreadId::new(*id)).collect())
    }
}

impl ThreadDirectory for Threads {
    fn contains(&self, thread_id: &ThreadId) -> bool {
        self.0.contains(thread_id)
    }
}

/// Clock pinned to a fixed instant.
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

/// Provider that hands out the same snapshot for every thread.
pub struct FixedProvider(pub DisappearingMessagesConfiguration);

impl ConfigurationProvider for FixedProvider {
    fn current_snapshot(&self, _thread_id: &ThreadId) -> DisappearingMessagesConfiguration {
        self.0
    }
}
