//! Board-level types: Board and the Boards document

use super::card::{ArchiveEntry, Card};
use super::column::Column;
use super::ids::{BoardId, CardId, ColumnId};
use super::tag::TagRegistry;
use crate::config::KanbanConfig;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Where a card lands when it is inserted into a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    Top,
    #[default]
    Bottom,
}

impl Placement {
    pub fn from_top(at_top: bool) -> Self {
        if at_top {
            Self::Top
        } else {
            Self::Bottom
        }
    }
}

/// The kanban board aggregate.
///
/// `cards` is the arena that owns every active card. Columns reference cards
/// by id only, and archived cards live inside their archive entry. The
/// helpers below keep the arena and the column lists in step; no caller
/// outside the crate gets raw access to a column's id list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default)]
    pub(crate) cards: IndexMap<CardId, Card>,
    #[serde(default)]
    pub(crate) columns: Vec<Column>,
    #[serde(default)]
    pub(crate) archive: Vec<ArchiveEntry>,
    #[serde(default)]
    pub(crate) tags: TagRegistry,
    #[serde(default)]
    pub(crate) cards_counter: u64,
}

impl Board {
    /// Create an empty board with no columns
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BoardId::new(),
            name: name.into(),
            cards: IndexMap::new(),
            columns: Vec::new(),
            archive: Vec::new(),
            tags: TagRegistry::new(),
            cards_counter: 0,
        }
    }

    /// Create a board with the configured default columns
    pub fn with_default_columns(name: impl Into<String>, config: &KanbanConfig) -> Self {
        let mut board = Self::new(name);
        board.columns = config.default_columns.iter().map(Column::new).collect();
        board
    }

    /// Replace the generated id
    pub fn with_id(mut self, id: impl Into<BoardId>) -> Self {
        self.id = id.into();
        self
    }

    /// Append a column at the right end of the board
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Start the card counter at the given value
    pub fn with_cards_counter(mut self, counter: u64) -> Self {
        self.cards_counter = counter;
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Active cards, in insertion order
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn archive(&self) -> &[ArchiveEntry] {
        &self.archive
    }

    pub fn tags(&self) -> &TagRegistry {
        &self.tags
    }

    pub fn cards_counter(&self) -> u64 {
        self.cards_counter
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    pub(crate) fn card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.get_mut(id)
    }

    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub(crate) fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    pub fn first_column(&self) -> Option<&Column> {
        self.columns.first()
    }

    /// The rightmost column, where restored cards go
    pub fn terminal_column(&self) -> Option<&Column> {
        self.columns.last()
    }

    /// Column index and position of a card id, searching left to right
    pub fn locate_card(&self, id: &CardId) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(col, column)| column.position_of(id).map(|pos| (col, pos)))
    }

    /// Index of the archive entry for a card
    pub fn archive_position(&self, id: &CardId) -> Option<usize> {
        self.archive.iter().position(|e| &e.card_id == id)
    }

    pub fn is_archived(&self, id: &CardId) -> bool {
        self.archive_position(id).is_some()
    }

    /// Advance the card counter and return the new number.
    ///
    /// This is the only place `cards_counter` is written.
    pub fn claim_card_number(&mut self) -> u64 {
        self.cards_counter += 1;
        self.cards_counter
    }

    /// Put a card into the arena and its id into the column at `column`.
    pub(crate) fn attach_card(&mut self, card: Card, column: usize, placement: Placement) {
        let id = card.id.clone();
        self.cards.insert(id.clone(), card);
        let list = &mut self.columns[column].cards;
        match placement {
            Placement::Top => list.insert(0, id),
            Placement::Bottom => list.push(id),
        }
    }

    /// Take a card out of the arena and out of every column list
    pub(crate) fn detach_card(&mut self, id: &CardId) -> Option<Card> {
        for column in &mut self.columns {
            column.cards.retain(|c| c != id);
        }
        self.cards.shift_remove(id)
    }
}

/// A document of boards keyed by id, the scope of cross-board moves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Boards {
    by_id: IndexMap<BoardId, Board>,
}

impl Boards {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a board, replacing any board with the same id
    pub fn insert(&mut self, board: Board) -> Option<Board> {
        self.by_id.insert(board.id.clone(), board)
    }

    pub fn with_board(mut self, board: Board) -> Self {
        self.insert(board);
        self
    }

    pub fn get(&self, id: &BoardId) -> Option<&Board> {
        self.by_id.get(id)
    }

    pub fn get_mut(&mut self, id: &BoardId) -> Option<&mut Board> {
        self.by_id.get_mut(id)
    }

    pub fn contains(&self, id: &BoardId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.by_id.values()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl FromIterator<Board> for Boards {
    fn from_iter<I: IntoIterator<Item = Board>>(iter: I) -> Self {
        let mut boards = Self::new();
        for board in iter {
            boards.insert(board);
        }
        boards
    }
}
