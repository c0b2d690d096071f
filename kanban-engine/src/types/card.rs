//! Card types: Card, Flag, ArchiveEntry

use super::ids::{CardId, TagId};
use crate::checklist::{self, Task};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A card on the kanban board.
///
/// Cards are owned by the board's card arena; columns only refer to them by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    /// Board-scoped sequential number, shown to users as `#number`
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<TagId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<Flag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub past_deadline: bool,
    pub last_modified: DateTime<Utc>,
}

impl Card {
    /// Create a new card with a fresh id, no flag and no deadline
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<TagId>,
        number: u64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CardId::new(),
            number,
            title: title.into(),
            description: description.into(),
            tags,
            flag: None,
            deadline: None,
            past_deadline: false,
            last_modified: now,
        }
    }

    /// Replace the generated id
    pub fn with_id(mut self, id: impl Into<CardId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the deadline
    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Checklist items parsed from the description
    pub fn tasks(&self) -> Vec<Task> {
        checklist::extract_tasks(&self.description)
    }

    /// Fraction of checked checklist items, 0.0 when there are none
    pub fn progress(&self) -> f64 {
        let tasks = self.tasks();
        if tasks.is_empty() {
            return 0.0;
        }
        let done = tasks.iter().filter(|t| t.checked).count();
        done as f64 / tasks.len() as f64
    }

    pub fn is_flagged(&self) -> bool {
        self.flag.as_ref().is_some_and(|f| f.status)
    }

    pub fn has_tag(&self, tag: &TagId) -> bool {
        self.tags.contains(tag)
    }
}

/// Status marker shown on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    pub status: bool,
}

impl Flag {
    pub fn new(status: bool) -> Self {
        Self { status }
    }
}

/// A card held off-board in the archive.
///
/// The entry owns the full card while it is archived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveEntry {
    pub card_id: CardId,
    pub archived_on: DateTime<Utc>,
    pub card: Card,
}

impl ArchiveEntry {
    pub fn new(card: Card, archived_on: DateTime<Utc>) -> Self {
        Self {
            card_id: card.id.clone(),
            archived_on,
            card,
        }
    }
}
