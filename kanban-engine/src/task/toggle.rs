//! ToggleTask command

use crate::checklist;
use crate::context::KanbanContext;
use crate::error::{KanbanError, Result};
use crate::operation::{impl_operation, Applied, Execute};
use crate::types::{Board, Card, CardId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Check or uncheck one checklist item of a card's description.
///
/// The item is picked by index, but the rewrite matches on its text: every
/// checklist line with the same text is set to the same state.
///
/// Returns whether the description changed.
pub fn toggle_task(card: &mut Card, task_index: usize, done: bool) -> Result<bool> {
    let tasks = card.tasks();
    let task = tasks.get(task_index).ok_or_else(|| KanbanError::TaskNotFound {
        card: card.id.to_string(),
        index: task_index,
        count: tasks.len(),
    })?;
    let description = checklist::set_task_state(&card.description, &task.content, done)?;
    if description == card.description {
        return Ok(false);
    }
    card.description = description;
    Ok(true)
}

/// Toggle a checklist item on an active card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleTask {
    pub card_id: CardId,
    pub task_index: usize,
    pub done: bool,
}

impl_operation!(ToggleTask, verb = "toggle", noun = "task");

impl ToggleTask {
    pub fn new(card_id: impl Into<CardId>, task_index: usize, done: bool) -> Self {
        Self {
            card_id: card_id.into(),
            task_index,
            done,
        }
    }
}

impl Execute<Board> for ToggleTask {
    fn apply(&self, board: &mut Board, _ctx: &KanbanContext) -> Result<Applied> {
        let card = board
            .card_mut(&self.card_id)
            .ok_or_else(|| KanbanError::card_not_found(&self.card_id))?;
        if !toggle_task(card, self.task_index, self.done)? {
            debug!(card = %self.card_id, index = self.task_index, "task already in requested state");
            return Ok(Applied::Unchanged);
        }
        debug!(card = %self.card_id, index = self.task_index, done = self.done, "toggled task");
        Ok(Applied::Changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{board, created_at, ctx};

    fn card(description: &str) -> Card {
        Card::new("Groceries", description, Vec::new(), 1, created_at())
    }

    #[test]
    fn test_toggle_checks_task() {
        let mut card = card("list\n- [ ] eggs\n- [ ] bread");
        toggle_task(&mut card, 1, true).unwrap();
        assert_eq!(card.description, "list\n- [ ] eggs\n- [x] bread");
        assert!(card.tasks()[1].checked);
    }

    #[test]
    fn test_toggle_unchecks_task() {
        let mut card = card("- [x] eggs");
        toggle_task(&mut card, 0, false).unwrap();
        assert_eq!(card.description, "- [ ] eggs");
    }

    #[test]
    fn test_toggle_flips_duplicate_content_together() {
        let mut card = card("- [ ] buy milk\n- [ ] bread\n- [ ] buy milk");
        toggle_task(&mut card, 0, true).unwrap();
        assert_eq!(card.description, "- [x] buy milk\n- [ ] bread\n- [x] buy milk");
    }

    #[test]
    fn test_toggle_leaves_timestamp_alone() {
        let mut card = card("- [ ] eggs");
        toggle_task(&mut card, 0, true).unwrap();
        assert_eq!(card.last_modified, created_at());
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut card = card("- [ ] eggs");
        let err = toggle_task(&mut card, 1, true).unwrap_err();
        assert!(matches!(err, KanbanError::TaskNotFound { index: 1, count: 1, .. }));
        assert_eq!(card.description, "- [ ] eggs");
    }

    #[test]
    fn test_toggle_task_command() {
        let mut board = board();
        board.card_mut(&"a".into()).unwrap().description = "- [ ] ship it".into();
        let board = ToggleTask::new("a", 0, true)
            .execute(board, &ctx())
            .into_result()
            .unwrap();
        assert_eq!(board.card(&"a".into()).unwrap().description, "- [x] ship it");
    }

    #[test]
    fn test_toggle_to_current_state_is_skipped() {
        let mut board = board();
        board.card_mut(&"a".into()).unwrap().description = "- [x] a".into();
        let before = board.clone();

        let result = ToggleTask::new("a", 0, true).execute(board, &ctx());
        assert!(result.is_skipped());
        assert!(result.log_entry().is_none());
        assert_eq!(result.into_document(), before);
    }

    #[test]
    fn test_toggle_reports_whether_description_changed() {
        let mut card = card("- [ ] eggs");
        assert!(toggle_task(&mut card, 0, true).unwrap());
        assert!(!toggle_task(&mut card, 0, true).unwrap());
        assert_eq!(card.description, "- [x] eggs");
    }

    #[test]
    fn test_toggle_task_with_unicode_whitespace() {
        let mut board = board();
        board.card_mut(&"a".into()).unwrap().description = "- [ ] eggs\u{a0}".into();

        let result = ToggleTask::new("a", 0, true).execute(board, &ctx());
        assert!(result.is_applied());
        let board = result.into_document();
        let card = board.card(&"a".into()).unwrap();
        assert_eq!(card.description, "- [x] eggs");
        assert!(card.tasks()[0].checked);
    }

    #[test]
    fn test_toggle_task_on_unknown_card() {
        let result = ToggleTask::new("zzz", 0, true).execute(board(), &ctx());
        assert!(matches!(result.error(), Some(KanbanError::CardNotFound { .. })));
    }
}
