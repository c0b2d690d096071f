//! UnarchiveCards command

use crate::context::KanbanContext;
use crate::error::{KanbanError, Result};
use crate::operation::{impl_operation, Applied, Execute};
use crate::types::{Board, CardId, Placement};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Restore archived cards to the top of the board's last column.
///
/// Ids are restored one after another in the given order, so the last id
/// ends up at the very top.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnarchiveCards {
    pub card_ids: Vec<CardId>,
}

impl_operation!(UnarchiveCards, verb = "unarchive", noun = "cards");

impl UnarchiveCards {
    pub fn new<I, T>(card_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CardId>,
    {
        Self {
            card_ids: card_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Every id must be archived, and only named once
pub(super) fn check_archived(board: &Board, card_ids: &[CardId]) -> Result<()> {
    let mut seen = HashSet::new();
    for id in card_ids {
        if !seen.insert(id) {
            return Err(KanbanError::duplicate_id("card", id));
        }
        if !board.is_archived(id) {
            return Err(KanbanError::ArchiveEntryNotFound { id: id.to_string() });
        }
    }
    Ok(())
}

impl Execute<Board> for UnarchiveCards {
    fn apply(&self, board: &mut Board, _ctx: &KanbanContext) -> Result<Applied> {
        check_archived(board, &self.card_ids)?;
        if self.card_ids.is_empty() {
            return Ok(Applied::Unchanged);
        }
        let last = board
            .columns()
            .len()
            .checked_sub(1)
            .ok_or_else(|| KanbanError::NoColumns {
                board: board.id.to_string(),
            })?;

        for id in &self.card_ids {
            let Some(index) = board.archive_position(id) else {
                continue;
            };
            let entry = board.archive.remove(index);
            debug!(card = %id, "unarchived card");
            board.attach_card(entry.card, last, Placement::Top);
        }
        Ok(Applied::Changed)
    }
}
