//! MoveCardToBoard command

use crate::context::KanbanContext;
use crate::error::{KanbanError, Result};
use crate::operation::{impl_operation, Applied, Execute};
use crate::types::{Board, BoardId, Boards, CardId, Placement};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Move a card to another board.
///
/// The card lands in the destination board's first column and gets the next
/// number of that board. Its tags are dropped because tags belong to a board.
/// Moving a card that is not in any column of the source board is a silent
/// no-op, so a replayed move does nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveCardToBoard {
    pub source_board: BoardId,
    pub destination_board: BoardId,
    pub card_id: CardId,
    #[serde(default)]
    pub placement: Placement,
}

impl_operation!(MoveCardToBoard, verb = "transfer", noun = "card");

impl MoveCardToBoard {
    pub fn new(
        source_board: impl Into<BoardId>,
        destination_board: impl Into<BoardId>,
        card_id: impl Into<CardId>,
    ) -> Self {
        Self {
            source_board: source_board.into(),
            destination_board: destination_board.into(),
            card_id: card_id.into(),
            placement: Placement::Bottom,
        }
    }

    /// Insert at the top of the destination column instead of the bottom
    pub fn at_top(mut self) -> Self {
        self.placement = Placement::Top;
        self
    }
}

enum Lookup {
    Found,
    NotFound,
}

fn lookup(board: &Board, id: &CardId) -> Result<Lookup> {
    if board.locate_card(id).is_none() {
        return Ok(Lookup::NotFound);
    }
    if board.card(id).is_none() {
        return Err(KanbanError::invariant(format!(
            "board '{}' lists card {} in a column but does not hold it",
            board.id, id
        )));
    }
    Ok(Lookup::Found)
}

impl Execute<Boards> for MoveCardToBoard {
    fn apply(&self, boards: &mut Boards, _ctx: &KanbanContext) -> Result<Applied> {
        let destination = boards
            .get(&self.destination_board)
            .ok_or_else(|| KanbanError::BoardNotFound {
                id: self.destination_board.to_string(),
            })?;
        if destination.columns().is_empty() {
            return Err(KanbanError::NoColumns {
                board: destination.id.to_string(),
            });
        }

        let source = boards
            .get_mut(&self.source_board)
            .ok_or_else(|| KanbanError::BoardNotFound {
                id: self.source_board.to_string(),
            })?;
        match lookup(source, &self.card_id)? {
            Lookup::Found => {}
            Lookup::NotFound => {
                debug!(card = %self.card_id, board = %self.source_board, "card not on source board, nothing to move");
                return Ok(Applied::Unchanged);
            }
        }

        let Some(mut card) = source.detach_card(&self.card_id) else {
            return Ok(Applied::Unchanged);
        };
        card.tags.clear();

        let Some(destination) = boards.get_mut(&self.destination_board) else {
            return Err(KanbanError::BoardNotFound {
                id: self.destination_board.to_string(),
            });
        };
        card.number = destination.claim_card_number();
        debug!(
            card = %card.id,
            number = card.number,
            from = %self.source_board,
            to = %self.destination_board,
            "moved card to board"
        );
        destination.attach_card(card, 0, self.placement);
        Ok(Applied::Changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Card, Column, Tag};
    use chrono::Utc;

    fn board(id: &str, counter: u64) -> Board {
        Board::new(id)
            .with_id(id)
            .with_column(Column::new("To Do").with_id(format!("{id}-todo")))
            .with_column(Column::new("Done").with_id(format!("{id}-done")))
            .with_cards_counter(counter)
    }

    fn setup() -> Boards {
        let mut source = board("source", 0);
        source.tags.insert(Tag::new("bug", "", "").with_id("bug"));
        for id in ["a", "b"] {
            let number = source.claim_card_number();
            let card = Card::new(id, "", vec!["bug".into()], number, Utc::now()).with_id(id);
            source.attach_card(card, 1, Placement::Bottom);
        }

        let mut destination = board("dest", 5);
        let card = Card::new("x", "", Vec::new(), 5, Utc::now()).with_id("x");
        destination.attach_card(card, 0, Placement::Bottom);

        Boards::new().with_board(source).with_board(destination)
    }

    #[test]
    fn test_transfer_renumbers_and_clears_tags() {
        let ctx = KanbanContext::new();
        let boards = MoveCardToBoard::new("source", "dest", "a")
            .execute(setup(), &ctx)
            .into_result()
            .unwrap();

        let source = boards.get(&"source".into()).unwrap();
        assert!(source.card(&"a".into()).is_none());
        assert_eq!(source.columns()[1].cards(), &[CardId::from("b")]);

        let dest = boards.get(&"dest".into()).unwrap();
        let card = dest.card(&"a".into()).unwrap();
        assert_eq!(card.number, 6);
        assert!(card.tags.is_empty());
        assert_eq!(dest.cards_counter(), 6);
        assert_eq!(dest.columns()[0].cards(), &[CardId::from("x"), CardId::from("a")]);
        assert!(dest.columns()[1].is_empty());
    }

    #[test]
    fn test_transfer_at_top() {
        let ctx = KanbanContext::new();
        let boards = MoveCardToBoard::new("source", "dest", "b")
            .at_top()
            .execute(setup(), &ctx)
            .into_result()
            .unwrap();
        let dest = boards.get(&"dest".into()).unwrap();
        assert_eq!(dest.columns()[0].cards(), &[CardId::from("b"), CardId::from("x")]);
    }

    #[test]
    fn test_replayed_transfer_is_silent_noop() {
        let ctx = KanbanContext::new();
        let boards = MoveCardToBoard::new("source", "dest", "a")
            .execute(setup(), &ctx)
            .into_document();
        let before = boards.clone();

        let result = MoveCardToBoard::new("source", "dest", "a").execute(boards, &ctx);
        assert!(result.is_skipped());
        assert_eq!(result.into_document(), before);
    }

    #[test]
    fn test_unknown_destination_is_rejected() {
        let ctx = KanbanContext::new();
        let before = setup();
        let result = MoveCardToBoard::new("source", "missing", "a").execute(setup(), &ctx);
        assert!(matches!(
            result.error(),
            Some(KanbanError::BoardNotFound { .. })
        ));
        assert_eq!(result.document().get(&"source".into()).unwrap().card_count(), 2);
        assert_eq!(result.into_document().len(), before.len());
    }

    #[test]
    fn test_destination_without_columns_is_rejected() {
        let ctx = KanbanContext::new();
        let boards = setup().with_board(Board::new("empty").with_id("empty"));
        let result = MoveCardToBoard::new("source", "empty", "a").execute(boards, &ctx);
        assert!(matches!(result.error(), Some(KanbanError::NoColumns { .. })));
    }

    #[test]
    fn test_transfer_within_same_board_lands_in_first_column() {
        let ctx = KanbanContext::new();
        let boards = MoveCardToBoard::new("source", "source", "a")
            .execute(setup(), &ctx)
            .into_result()
            .unwrap();
        let source = boards.get(&"source".into()).unwrap();
        assert_eq!(source.columns()[0].cards(), &[CardId::from("a")]);
        assert_eq!(source.card(&"a".into()).unwrap().number, 3);
    }
}
