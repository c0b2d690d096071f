//! Command traits and execution results.
//!
//! Every mutation is a command struct whose fields are its parameters.
//! `Execute::execute` takes the document by value and always hands it back,
//! so only one writer can hold a board for the duration of a call.

use crate::context::KanbanContext;
use crate::error::{KanbanError, Result};
use crate::invariants;
use crate::logging::Pretty;
use crate::types::{Board, Boards, LogEntry};
use serde::Serialize;
use std::fmt::Debug;
use tracing::{debug, trace, warn};

/// Verb/noun naming of a command, e.g. "move card"
pub trait Operation {
    fn verb(&self) -> &'static str;
    fn noun(&self) -> &'static str;

    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Implements [`Operation`] for a command struct
macro_rules! impl_operation {
    ($ty:ty, verb = $verb:literal, noun = $noun:literal) => {
        impl $crate::operation::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }

            fn noun(&self) -> &'static str {
                $noun
            }
        }
    };
}
pub(crate) use impl_operation;

/// A document a command can run against
pub trait Document: Serialize + Debug {
    /// Check the document's invariants
    fn verify(&self) -> Result<()>;
}

impl Document for Board {
    fn verify(&self) -> Result<()> {
        invariants::check(self)
    }
}

impl Document for Boards {
    fn verify(&self) -> Result<()> {
        self.iter().try_for_each(invariants::check)
    }
}

/// What `apply` did to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Changed,
    Unchanged,
}

/// Result of executing a command. The document always comes back.
#[derive(Debug)]
pub enum ExecutionResult<D> {
    /// The document was mutated
    Applied { document: D, log_entry: LogEntry },
    /// A guard clause made the command a no-op
    Skipped { document: D },
    /// A precondition failed before anything was mutated
    Rejected { document: D, error: KanbanError },
}

impl<D> ExecutionResult<D> {
    pub fn document(&self) -> &D {
        match self {
            Self::Applied { document, .. }
            | Self::Skipped { document }
            | Self::Rejected { document, .. } => document,
        }
    }

    /// Take the document back, whatever happened
    pub fn into_document(self) -> D {
        match self {
            Self::Applied { document, .. }
            | Self::Skipped { document }
            | Self::Rejected { document, .. } => document,
        }
    }

    /// The document on success, the error on rejection
    pub fn into_result(self) -> Result<D> {
        match self {
            Self::Applied { document, .. } | Self::Skipped { document } => Ok(document),
            Self::Rejected { error, .. } => Err(error),
        }
    }

    /// The document plus either the log entry (if any) or the error
    pub fn split(self) -> (D, Result<Option<LogEntry>>) {
        match self {
            Self::Applied {
                document,
                log_entry,
            } => (document, Ok(Some(log_entry))),
            Self::Skipped { document } => (document, Ok(None)),
            Self::Rejected { document, error } => (document, Err(error)),
        }
    }

    pub fn log_entry(&self) -> Option<&LogEntry> {
        match self {
            Self::Applied { log_entry, .. } => Some(log_entry),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&KanbanError> {
        match self {
            Self::Rejected { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// A command that mutates a document of type `D`
pub trait Execute<D: Document>: Operation + Serialize {
    /// Mutate the document in place.
    ///
    /// Implementations check every precondition before their first write, so
    /// an `Err` always leaves the document untouched.
    fn apply(&self, document: &mut D, ctx: &KanbanContext) -> Result<Applied>;

    /// Run the command, taking the document for the duration of the call
    fn execute(&self, mut document: D, ctx: &KanbanContext) -> ExecutionResult<D> {
        let op = self.op_string();
        match self.apply(&mut document, ctx) {
            Ok(Applied::Changed) => {
                debug!(op = %op, actor = ?ctx.actor(), "applied");
                trace!("document after {}: {}", op, Pretty(&document));

                if ctx.config().verify_invariants {
                    if let Err(error) = document.verify() {
                        warn!(op = %op, %error, "document inconsistent after mutation");
                    }
                }

                let input = serde_json::to_value(self).unwrap_or_else(|error| {
                    warn!(op = %op, %error, "command input not serializable, logging null");
                    serde_json::Value::Null
                });
                let log_entry = ctx.log_entry(&op, input);
                ExecutionResult::Applied {
                    document,
                    log_entry,
                }
            }
            Ok(Applied::Unchanged) => {
                debug!(op = %op, "skipped");
                ExecutionResult::Skipped { document }
            }
            Err(error) => {
                warn!(op = %op, %error, "rejected");
                ExecutionResult::Rejected { document, error }
            }
        }
    }
}
