//! Column types

use super::ids::{CardId, ColumnId};
use serde::{Deserialize, Serialize};

/// WIP limit settings of a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnOptions {
    pub limiting: bool,
    pub limit_number: usize,
}

/// A column defines a workflow stage.
///
/// The column holds card ids in display order; the cards themselves live in
/// the board's card arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub options: ColumnOptions,
    #[serde(default)]
    pub(crate) cards: Vec<CardId>,
}

impl Column {
    /// Create an empty, non-limiting column with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(),
            title: title.into(),
            options: ColumnOptions::default(),
            cards: Vec::new(),
        }
    }

    /// Replace the generated id
    pub fn with_id(mut self, id: impl Into<ColumnId>) -> Self {
        self.id = id.into();
        self
    }

    /// Turn on the WIP limit
    pub fn with_limit(mut self, limit_number: usize) -> Self {
        self.options = ColumnOptions {
            limiting: true,
            limit_number,
        };
        self
    }

    /// Card ids in display order
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn position_of(&self, card: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    /// True when the column is limiting and holds more cards than allowed
    pub fn is_over_limit(&self) -> bool {
        self.options.limiting && self.cards.len() > self.options.limit_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_creation() {
        let column = Column::new("To Do");
        assert_eq!(column.title, "To Do");
        assert!(column.is_empty());
        assert!(!column.options.limiting);
    }

    #[test]
    fn test_over_limit() {
        let mut column = Column::new("Doing").with_limit(1);
        assert!(!column.is_over_limit());
        column.cards.push(CardId::from("a"));
        assert!(!column.is_over_limit());
        column.cards.push(CardId::from("b"));
        assert!(column.is_over_limit());

        column.options.limiting = false;
        assert!(!column.is_over_limit());
    }

    #[test]
    fn test_position_of() {
        let mut column = Column::new("Done");
        column.cards = vec!["a".into(), "b".into()];
        assert_eq!(column.position_of(&"b".into()), Some(1));
        assert_eq!(column.position_of(&"z".into()), None);
    }
}
