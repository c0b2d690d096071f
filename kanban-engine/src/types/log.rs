//! Log entry type for applied mutations

use super::ids::LogEntryId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A log entry recording one applied mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique ID for this log entry
    pub id: LogEntryId,

    /// When the mutation was applied, from the context clock
    pub timestamp: DateTime<Utc>,

    /// Canonical op string (e.g., "move card")
    pub op: String,

    /// The command that was applied
    pub input: Value,

    /// Who performed the mutation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
}

impl LogEntry {
    /// Create a new log entry
    pub fn new(op: impl Into<String>, input: Value, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: LogEntryId::new(),
            timestamp,
            op: op.into(),
            input,
            actor: None,
        }
    }

    /// Set the actor
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }
}
