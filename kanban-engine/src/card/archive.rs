//! ArchiveCard command

use crate::context::KanbanContext;
use crate::error::{KanbanError, Result};
use crate::operation::{impl_operation, Applied, Execute};
use crate::types::{ArchiveEntry, Board, CardId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Take a card off the board and append it to the archive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveCard {
    pub card_id: CardId,
}

impl_operation!(ArchiveCard, verb = "archive", noun = "card");

impl ArchiveCard {
    pub fn new(card_id: impl Into<CardId>) -> Self {
        Self {
            card_id: card_id.into(),
        }
    }
}

impl Execute<Board> for ArchiveCard {
    fn apply(&self, board: &mut Board, ctx: &KanbanContext) -> Result<Applied> {
        if board.card(&self.card_id).is_none() {
            return Err(KanbanError::card_not_found(&self.card_id));
        }
        if let Some(card) = board.detach_card(&self.card_id) {
            board.archive.push(ArchiveEntry::new(card, ctx.now()));
        }
        debug!(card = %self.card_id, "archived card");
        Ok(Applied::Changed)
    }
}
