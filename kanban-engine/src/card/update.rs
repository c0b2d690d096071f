//! UpdateCard command

use crate::context::KanbanContext;
use crate::error::{KanbanError, Result};
use crate::operation::{impl_operation, Applied, Execute};
use crate::types::{Board, CardId, TagId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Overwrite a card's editable details.
///
/// Changing the deadline clears the past-deadline marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCard {
    pub card_id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<TagId>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

impl_operation!(UpdateCard, verb = "update", noun = "card");

impl UpdateCard {
    pub fn new(
        card_id: impl Into<CardId>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            card_id: card_id.into(),
            title: title.into(),
            description: description.into(),
            tags: Vec::new(),
            deadline: None,
        }
    }

    pub fn with_tags(mut self, tags: Vec<TagId>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

impl Execute<Board> for UpdateCard {
    fn apply(&self, board: &mut Board, ctx: &KanbanContext) -> Result<Applied> {
        let card = board
            .card_mut(&self.card_id)
            .ok_or_else(|| KanbanError::card_not_found(&self.card_id))?;

        card.title = self.title.clone();
        card.description = self.description.clone();
        card.tags = self.tags.clone();
        if card.deadline != self.deadline {
            card.deadline = self.deadline;
            card.past_deadline = false;
        }
        card.last_modified = ctx.now();

        debug!(card = %self.card_id, "updated card");
        Ok(Applied::Changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{board, ctx, now};
    use chrono::Duration;

    #[test]
    fn test_update_card_details() {
        let board = UpdateCard::new("a", "Renamed", "- [ ] step")
            .execute(board(), &ctx())
            .into_result()
            .unwrap();
        let card = board.card(&"a".into()).unwrap();
        assert_eq!(card.title, "Renamed");
        assert_eq!(card.description, "- [ ] step");
        assert!(card.tags.is_empty());
        assert_eq!(card.last_modified, now());
    }

    #[test]
    fn test_new_deadline_clears_past_deadline() {
        let mut board = board();
        {
            let card = board.card_mut(&"a".into()).unwrap();
            card.deadline = Some(now() - Duration::days(1));
            card.past_deadline = true;
        }
        let deadline = now() + Duration::days(7);
        let board = UpdateCard::new("a", "a", "")
            .with_deadline(deadline)
            .execute(board, &ctx())
            .into_result()
            .unwrap();
        let card = board.card(&"a".into()).unwrap();
        assert_eq!(card.deadline, Some(deadline));
        assert!(!card.past_deadline);
    }

    #[test]
    fn test_same_deadline_keeps_past_deadline() {
        let deadline = now() - Duration::days(1);
        let mut board = board();
        {
            let card = board.card_mut(&"a".into()).unwrap();
            card.deadline = Some(deadline);
            card.past_deadline = true;
        }
        let board = UpdateCard::new("a", "a", "")
            .with_tags(vec!["bug".into()])
            .with_deadline(deadline)
            .execute(board, &ctx())
            .into_result()
            .unwrap();
        let card = board.card(&"a".into()).unwrap();
        assert!(card.past_deadline);
        assert_eq!(card.tags, vec![TagId::from("bug")]);
    }

    #[test]
    fn test_update_unknown_card() {
        let result = UpdateCard::new("zzz", "x", "").execute(board(), &ctx());
        assert!(matches!(result.error(), Some(KanbanError::CardNotFound { .. })));
    }
}
