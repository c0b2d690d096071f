//! UpdateTag command

use crate::context::KanbanContext;
use crate::error::{KanbanError, Result};
use crate::operation::{impl_operation, Applied, Execute};
use crate::types::{Board, TagId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Replace a tag's name and colors in place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTag {
    pub id: TagId,
    pub name: String,
    pub color: String,
    pub text_color: String,
}

impl_operation!(UpdateTag, verb = "update", noun = "tag");

impl UpdateTag {
    pub fn new(
        id: impl Into<TagId>,
        name: impl Into<String>,
        color: impl Into<String>,
        text_color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            text_color: text_color.into(),
        }
    }
}

impl Execute<Board> for UpdateTag {
    fn apply(&self, board: &mut Board, _ctx: &KanbanContext) -> Result<Applied> {
        let tag = board
            .tags
            .get_mut(&self.id)
            .ok_or_else(|| KanbanError::TagNotFound {
                id: self.id.to_string(),
            })?;

        tag.name = self.name.clone();
        tag.color = self.color.clone();
        tag.text_color = self.text_color.clone();
        debug!(tag = %self.id, "updated tag");
        Ok(Applied::Changed)
    }
}
