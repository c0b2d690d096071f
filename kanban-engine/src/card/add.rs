//! AddCard command

use crate::context::KanbanContext;
use crate::error::{KanbanError, Result};
use crate::operation::{impl_operation, Applied, Execute};
use crate::types::{Board, Card, CardId, ColumnId, Placement, TagId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Create a card and put it at the top or bottom of a column.
///
/// The caller supplies the card number; use `Board::claim_card_number` for a
/// fresh one or pass an existing number when duplicating a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCard {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub column_id: ColumnId,
    #[serde(default)]
    pub placement: Placement,
    #[serde(default)]
    pub tags: Vec<TagId>,
    pub number: u64,
    /// Use this id instead of generating one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CardId>,
}

impl_operation!(AddCard, verb = "add", noun = "card");

impl AddCard {
    pub fn new(title: impl Into<String>, column_id: impl Into<ColumnId>, number: u64) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            column_id: column_id.into(),
            placement: Placement::Bottom,
            tags: Vec::new(),
            number,
            id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<TagId>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_id(mut self, id: impl Into<CardId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Insert at the top of the column instead of the bottom
    pub fn at_top(mut self) -> Self {
        self.placement = Placement::Top;
        self
    }
}

impl Execute<Board> for AddCard {
    fn apply(&self, board: &mut Board, ctx: &KanbanContext) -> Result<Applied> {
        let column = board
            .column_index(&self.column_id)
            .ok_or_else(|| KanbanError::column_not_found(&self.column_id))?;

        let mut card = Card::new(
            self.title.clone(),
            self.description.clone(),
            self.tags.clone(),
            self.number,
            ctx.now(),
        );
        if let Some(id) = &self.id {
            card.id = id.clone();
        }
        if board.card(&card.id).is_some() || board.is_archived(&card.id) {
            return Err(KanbanError::duplicate_id("card", &card.id));
        }

        debug!(card = %card.id, number = card.number, column = %self.column_id, "added card");
        board.attach_card(card, column, self.placement);
        Ok(Applied::Changed)
    }
}
