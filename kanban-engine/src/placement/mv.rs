//! MoveCard command

use crate::context::KanbanContext;
use crate::error::{KanbanError, Result};
use crate::operation::{impl_operation, Applied, Execute};
use crate::types::{Board, ColumnId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A position in a column: column id plus zero-based index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub column: ColumnId,
    pub index: usize,
}

impl Slot {
    pub fn new(column: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            column: column.into(),
            index,
        }
    }
}

/// Move a card within a column or between columns of one board.
///
/// The card is removed from the source slot first and then inserted at the
/// destination index of the resulting list. Within one column, moving
/// `[A, B, C, D]` from 0 to 2 therefore yields `[B, C, A, D]`. A destination
/// index past the end of the list appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveCard {
    pub source: Slot,
    /// None when the drag was cancelled
    pub destination: Option<Slot>,
}

impl_operation!(MoveCard, verb = "move", noun = "card");

impl MoveCard {
    pub fn new(source: Slot, destination: Slot) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    /// A drag that was dropped outside any column
    pub fn cancelled(source: Slot) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}

impl Execute<Board> for MoveCard {
    fn apply(&self, board: &mut Board, ctx: &KanbanContext) -> Result<Applied> {
        let Some(destination) = &self.destination else {
            return Ok(Applied::Unchanged);
        };
        if destination == &self.source {
            return Ok(Applied::Unchanged);
        }

        let from = board
            .column_index(&self.source.column)
            .ok_or_else(|| KanbanError::column_not_found(&self.source.column))?;
        let to = board
            .column_index(&destination.column)
            .ok_or_else(|| KanbanError::column_not_found(&destination.column))?;

        let source_column = &board.columns[from];
        let card_id = source_column
            .cards()
            .get(self.source.index)
            .cloned()
            .ok_or_else(|| KanbanError::PositionOutOfRange {
                column: source_column.id.to_string(),
                index: self.source.index,
                len: source_column.len(),
            })?;
        if board.card(&card_id).is_none() {
            return Err(KanbanError::invariant(format!(
                "column '{}' lists card {} which is not on the board",
                source_column.id, card_id
            )));
        }

        board.columns[from].cards.remove(self.source.index);
        let list = &mut board.columns[to].cards;
        let index = destination.index.min(list.len());
        list.insert(index, card_id.clone());

        if let Some(card) = board.card_mut(&card_id) {
            card.last_modified = ctx.now();
        }

        debug!(
            card = %card_id,
            from = %self.source.column,
            to = %destination.column,
            index,
            "moved card"
        );
        Ok(Applied::Changed)
    }
}
