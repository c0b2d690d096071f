//! Error types for the kanban engine

use std::path::PathBuf;
use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in kanban operations
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Board not found in the document of boards
    #[error("board not found: {id}")]
    BoardNotFound { id: String },

    /// Card not found among the board's active cards
    #[error("card not found: {id}")]
    CardNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Tag not found in the tag registry
    #[error("tag not found: {id}")]
    TagNotFound { id: String },

    /// No archive entry for the card
    #[error("archived card not found: {id}")]
    ArchiveEntryNotFound { id: String },

    /// Task index past the end of the card's checklist
    #[error("card {card} has {count} tasks, no task at index {index}")]
    TaskNotFound {
        card: String,
        index: usize,
        count: usize,
    },

    /// Position does not exist in the column
    #[error("column '{column}' has {len} cards, no card at position {index}")]
    PositionOutOfRange {
        column: String,
        index: usize,
        len: usize,
    },

    /// Board has no column to place a card into
    #[error("board '{board}' has no columns")]
    NoColumns { board: String },

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// The document no longer satisfies the board invariants
    #[error("invariant violated: {message}")]
    InvariantViolation { message: String },

    /// A checklist pattern could not be compiled
    #[error("invalid task pattern: {source}")]
    Pattern {
        #[source]
        source: regex::Error,
    },

    /// Configuration file extension is not toml, yaml, yml or json
    #[error("unsupported configuration file format: {}", path.display())]
    UnsupportedConfigFormat { path: PathBuf },

    /// Configuration could not be loaded
    #[error("failed to load configuration: {source}")]
    Config {
        #[source]
        source: Box<figment::Error>,
    },
}

impl KanbanError {
    /// Create a card not found error
    pub fn card_not_found(id: impl ToString) -> Self {
        Self::CardNotFound { id: id.to_string() }
    }

    /// Create a column not found error
    pub fn column_not_found(id: impl ToString) -> Self {
        Self::ColumnNotFound { id: id.to_string() }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl ToString) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.to_string(),
        }
    }

    /// Create an invariant violation error
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }

    /// Check if the error means a referenced entity does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BoardNotFound { .. }
                | Self::CardNotFound { .. }
                | Self::ColumnNotFound { .. }
                | Self::TagNotFound { .. }
                | Self::ArchiveEntryNotFound { .. }
                | Self::TaskNotFound { .. }
                | Self::PositionOutOfRange { .. }
        )
    }
}

impl From<figment::Error> for KanbanError {
    fn from(error: figment::Error) -> Self {
        Self::Config {
            source: Box::new(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KanbanError::card_not_found("abc123");
        assert_eq!(err.to_string(), "card not found: abc123");
    }

    #[test]
    fn test_task_not_found_display() {
        let err = KanbanError::TaskNotFound {
            card: "c1".into(),
            index: 3,
            count: 2,
        };
        assert_eq!(err.to_string(), "card c1 has 2 tasks, no task at index 3");
    }

    #[test]
    fn test_not_found_classification() {
        assert!(KanbanError::column_not_found("todo").is_not_found());
        assert!(!KanbanError::invariant("broken").is_not_found());
        assert!(!KanbanError::duplicate_id("card", "x").is_not_found());
    }
}
