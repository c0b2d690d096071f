//! DeleteCard command

use crate::context::KanbanContext;
use crate::error::{KanbanError, Result};
use crate::operation::{impl_operation, Applied, Execute};
use crate::types::{Board, CardId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Remove an active card from its column and from the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCard {
    pub card_id: CardId,
}

impl_operation!(DeleteCard, verb = "delete", noun = "card");

impl DeleteCard {
    pub fn new(card_id: impl Into<CardId>) -> Self {
        Self {
            card_id: card_id.into(),
        }
    }
}

impl Execute<Board> for DeleteCard {
    fn apply(&self, board: &mut Board, _ctx: &KanbanContext) -> Result<Applied> {
        if board.card(&self.card_id).is_none() {
            return Err(KanbanError::card_not_found(&self.card_id));
        }
        board.detach_card(&self.card_id);
        debug!(card = %self.card_id, "deleted card");
        Ok(Applied::Changed)
    }
}
