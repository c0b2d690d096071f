//! Invariant-preserving mutation engine for in-memory kanban boards
//!
//! A board holds cards, columns, tags and an archive that refer to each other
//! by id. The board's card arena owns every active card, columns list card
//! ids in display order, the archive owns archived cards, and the tag
//! registry keeps an id map next to a display order. The commands in this
//! crate are the only way to change those views, and each one leaves them
//! consistent with each other.
//!
//! ## Overview
//!
//! - **Placement** - [`placement::MoveCard`] within and across columns,
//!   [`placement::MoveCardToBoard`] between boards
//! - **Lifecycle** - add, delete, archive, unarchive and purge cards, plus
//!   card detail and flag updates ([`card`])
//! - **Tags** - add, update and cascade-delete tags ([`tag`])
//! - **Tasks** - toggle checklist items inside a card description ([`task`])
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_engine::{
//!     card::{AddCard, ArchiveCard},
//!     placement::{MoveCard, Slot},
//!     Board, Column, Execute, KanbanContext,
//! };
//!
//! # fn example() -> kanban_engine::Result<()> {
//! let ctx = KanbanContext::new();
//! let mut board = Board::new("My Project")
//!     .with_column(Column::new("To Do").with_id("todo"))
//!     .with_column(Column::new("Done").with_id("done"));
//!
//! let number = board.claim_card_number();
//! let board = AddCard::new("Write docs", "todo", number)
//!     .with_id("docs")
//!     .execute(board, &ctx)
//!     .into_result()?;
//!
//! let board = MoveCard::new(Slot::new("todo", 0), Slot::new("done", 0))
//!     .execute(board, &ctx)
//!     .into_result()?;
//!
//! let board = ArchiveCard::new("docs").execute(board, &ctx).into_result()?;
//! assert_eq!(board.archive().len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! Every command takes the document by value and returns it inside an
//! [`ExecutionResult`], whether it was applied, skipped by a guard clause, or
//! rejected before anything changed.

pub mod checklist;
pub mod config;
mod context;
mod error;
pub mod invariants;
pub mod logging;
mod operation;
pub mod types;

// Command modules
pub mod card;
pub mod column;
pub mod placement;
pub mod tag;
pub mod task;

#[cfg(test)]
mod test_support;

pub use config::KanbanConfig;
pub use context::{Clock, FixedClock, KanbanContext, SystemClock};
pub use error::{KanbanError, Result};
pub use operation::{Applied, Document, Execute, ExecutionResult, Operation};

// Re-export commonly used types
pub use types::{
    ArchiveEntry, Board, BoardId, Boards, Card, CardId, Column, ColumnId, ColumnOptions, Flag,
    LogEntry, Placement, Tag, TagId, TagRegistry,
};
