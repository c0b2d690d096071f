//! DeleteTag command

use crate::context::KanbanContext;
use crate::error::{KanbanError, Result};
use crate::operation::{impl_operation, Applied, Execute};
use crate::types::{Board, TagId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Delete a tag and remove it from every active and archived card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTag {
    pub id: TagId,
}

impl_operation!(DeleteTag, verb = "delete", noun = "tag");

impl DeleteTag {
    pub fn new(id: impl Into<TagId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<Board> for DeleteTag {
    fn apply(&self, board: &mut Board, _ctx: &KanbanContext) -> Result<Applied> {
        if board.tags.remove(&self.id).is_none() {
            return Err(KanbanError::TagNotFound {
                id: self.id.to_string(),
            });
        }

        let mut untagged = 0usize;
        let cards = board
            .cards
            .values_mut()
            .chain(board.archive.iter_mut().map(|entry| &mut entry.card));
        for card in cards {
            let before = card.tags.len();
            card.tags.retain(|t| t != &self.id);
            if card.tags.len() != before {
                untagged += 1;
            }
        }

        debug!(tag = %self.id, cards = untagged, "deleted tag");
        Ok(Applied::Changed)
    }
}
