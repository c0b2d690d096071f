//! UpdateColumn command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{impl_operation, Applied, Execute};
use crate::types::{Board, ColumnId, ColumnOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Rename a column and replace its WIP limit settings.
///
/// An unknown column id is skipped rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateColumn {
    pub column_id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub limiting: bool,
    #[serde(default)]
    pub limit_number: usize,
}

impl_operation!(UpdateColumn, verb = "update", noun = "column");

impl UpdateColumn {
    pub fn new(column_id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            title: title.into(),
            limiting: false,
            limit_number: 0,
        }
    }

    pub fn with_limit(mut self, limit_number: usize) -> Self {
        self.limiting = true;
        self.limit_number = limit_number;
        self
    }
}

impl Execute<Board> for UpdateColumn {
    fn apply(&self, board: &mut Board, _ctx: &KanbanContext) -> Result<Applied> {
        let Some(index) = board.column_index(&self.column_id) else {
            debug!(column = %self.column_id, "column not on board, nothing to update");
            return Ok(Applied::Unchanged);
        };

        let column = &mut board.columns[index];
        column.title = self.title.clone();
        column.options = ColumnOptions {
            limiting: self.limiting,
            limit_number: self.limit_number,
        };
        debug!(column = %self.column_id, "updated column");
        Ok(Applied::Changed)
    }
}
