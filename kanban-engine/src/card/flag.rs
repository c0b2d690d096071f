//! FlagCard command

use crate::context::KanbanContext;
use crate::error::{KanbanError, Result};
use crate::operation::{impl_operation, Applied, Execute};
use crate::types::{Board, CardId, Flag};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Set or clear a card's flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagCard {
    pub card_id: CardId,
    pub status: bool,
}

impl_operation!(FlagCard, verb = "flag", noun = "card");

impl FlagCard {
    pub fn new(card_id: impl Into<CardId>, status: bool) -> Self {
        Self {
            card_id: card_id.into(),
            status,
        }
    }
}

impl Execute<Board> for FlagCard {
    fn apply(&self, board: &mut Board, ctx: &KanbanContext) -> Result<Applied> {
        let card = board
            .card_mut(&self.card_id)
            .ok_or_else(|| KanbanError::card_not_found(&self.card_id))?;

        card.flag.get_or_insert_with(|| Flag::new(self.status)).status = self.status;
        card.last_modified = ctx.now();

        debug!(card = %self.card_id, status = self.status, "flagged card");
        Ok(Applied::Changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{board, ctx, now};

    #[test]
    fn test_flag_creates_flag() {
        let board = FlagCard::new("b", true)
            .execute(board(), &ctx())
            .into_result()
            .unwrap();
        let card = board.card(&"b".into()).unwrap();
        assert_eq!(card.flag, Some(Flag::new(true)));
        assert!(card.is_flagged());
        assert_eq!(card.last_modified, now());
    }

    #[test]
    fn test_unflag_keeps_flag_object() {
        let ctx = ctx();
        let board = FlagCard::new("b", true).execute(board(), &ctx).into_document();
        let board = FlagCard::new("b", false)
            .execute(board, &ctx)
            .into_result()
            .unwrap();
        let card = board.card(&"b".into()).unwrap();
        assert_eq!(card.flag, Some(Flag::new(false)));
        assert!(!card.is_flagged());
    }

    #[test]
    fn test_flag_unknown_card() {
        let result = FlagCard::new("zzz", true).execute(board(), &ctx());
        assert!(matches!(result.error(), Some(KanbanError::CardNotFound { .. })));
    }
}
