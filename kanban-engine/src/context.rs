//! Execution context: clock, configuration and actor

use crate::config::KanbanConfig;
use crate::types::LogEntry;
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

/// Timestamp source for `last_modified` and `archived_on`
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.lock() = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.lock();
        *now += by;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        // A poisoned guard still holds a valid timestamp
        self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.lock()
    }
}

impl Clock for Arc<FixedClock> {
    fn now(&self) -> DateTime<Utc> {
        self.as_ref().now()
    }
}

/// Everything a command needs besides the document it mutates.
///
/// The engine never keeps state between calls; the context only supplies
/// timestamps, configuration and the actor recorded in log entries.
#[derive(Debug, Clone)]
pub struct KanbanContext {
    clock: Arc<dyn Clock>,
    config: KanbanConfig,
    actor: Option<String>,
}

impl KanbanContext {
    /// Context with the wall clock and default configuration
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            config: KanbanConfig::default(),
            actor: None,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_config(mut self, config: KanbanConfig) -> Self {
        self.config = config;
        self
    }

    /// Name the user or agent performing the mutations
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn config(&self) -> &KanbanConfig {
        &self.config
    }

    /// The context's actor, falling back to the configured one
    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref().or(self.config.actor.as_deref())
    }

    pub(crate) fn log_entry(&self, op: &str, input: Value) -> LogEntry {
        let entry = LogEntry::new(op, input, self.now());
        match self.actor() {
            Some(actor) => entry.with_actor(actor),
            None => entry,
        }
    }
}

impl Default for KanbanContext {
    fn default() -> Self {
        Self::new()
    }
}
