//! AddTag command

use crate::context::KanbanContext;
use crate::error::{KanbanError, Result};
use crate::operation::{impl_operation, Applied, Execute};
use crate::types::{Board, Tag, TagId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Register a new tag at the end of the board's tag order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTag {
    pub name: String,
    pub color: String,
    pub text_color: String,
    /// Use this id instead of generating one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TagId>,
}

impl_operation!(AddTag, verb = "add", noun = "tag");

impl AddTag {
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        text_color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            text_color: text_color.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<TagId>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Execute<Board> for AddTag {
    fn apply(&self, board: &mut Board, _ctx: &KanbanContext) -> Result<Applied> {
        let mut tag = Tag::new(
            self.name.clone(),
            self.color.clone(),
            self.text_color.clone(),
        );
        if let Some(id) = &self.id {
            tag.id = id.clone();
        }

        let id = tag.id.clone();
        if !board.tags.insert(tag) {
            return Err(KanbanError::duplicate_id("tag", id));
        }
        debug!(tag = %id, name = %self.name, "added tag");
        Ok(Applied::Changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{board, ctx};

    #[test]
    fn test_add_tag_appends_to_order() {
        let board = AddTag::new("feature", "#0f0", "#000")
            .with_id("feature")
            .execute(board(), &ctx())
            .into_result()
            .unwrap();

        assert_eq!(board.tags().ids(), &[TagId::from("bug"), TagId::from("feature")]);
        let tag = board.tags().get(&"feature".into()).unwrap();
        assert_eq!(tag.name, "feature");
        assert_eq!(tag.color, "#0f0");
        assert_eq!(tag.text_color, "#000");
    }

    #[test]
    fn test_add_tag_generates_id() {
        let board = AddTag::new("feature", "#0f0", "#000")
            .execute(board(), &ctx())
            .into_result()
            .unwrap();
        let id = board.tags().ids().last().unwrap();
        assert_eq!(id.as_str().len(), 26);
        assert_eq!(board.tags().get(id).unwrap().name, "feature");
    }

    #[test]
    fn test_add_tag_duplicate_id() {
        let before = board();
        let result = AddTag::new("other", "", "").with_id("bug").execute(before.clone(), &ctx());
        assert!(matches!(result.error(), Some(KanbanError::DuplicateId { .. })));
        assert_eq!(result.into_document(), before);
    }
}
