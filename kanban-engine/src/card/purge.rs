//! PurgeArchivedCards command

use super::unarchive::check_archived;
use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{impl_operation, Applied, Execute};
use crate::types::{Board, CardId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Permanently discard archived cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurgeArchivedCards {
    pub card_ids: Vec<CardId>,
}

impl_operation!(PurgeArchivedCards, verb = "purge", noun = "cards");

impl PurgeArchivedCards {
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

impl Execute<Board> for PurgeArchivedCards {
    fn apply(&self, board: &mut Board, _ctx: &KanbanContext) -> Result<Applied> {
        check_archived(board, &self.card_ids)?;
        if self.card_ids.is_empty() {
            return Ok(Applied::Unchanged);
        }
        board
            .archive
            .retain(|entry| !self.card_ids.contains(&entry.card_id));
        debug!(count = self.card_ids.len(), "purged archived cards");
        Ok(Applied::Changed)
    }
}
