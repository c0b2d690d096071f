//! Core types for the kanban engine

mod board;
mod card;
mod column;
mod ids;
mod log;
mod tag;

pub use board::{Board, Boards, Placement};
pub use card::{ArchiveEntry, Card, Flag};
pub use column::{Column, ColumnOptions};
pub use ids::{BoardId, CardId, ColumnId, LogEntryId, TagId};
pub use log::LogEntry;
pub use tag::{Tag, TagRegistry};
