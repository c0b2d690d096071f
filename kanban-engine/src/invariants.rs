//! Consistency checks across the denormalized views of a board.
//!
//! A board is consistent when:
//! - every id in a column list names an active card and appears in exactly
//!   one column, once;
//! - every active card appears in some column;
//! - archived cards are in neither the arena nor any column, and are archived once;
//! - the tag registry's order list is a permutation of its id map;
//! - every tag referenced by an active or archived card is registered;
//! - card numbers are unique and no greater than the board's card counter.

use crate::error::{KanbanError, Result};
use crate::types::{Board, CardId, TagId};
use std::collections::{HashMap, HashSet};

/// Check a board and report the first inconsistency found
pub fn check(board: &Board) -> Result<()> {
    check_columns(board)?;
    check_archive(board)?;
    check_tag_registry(board)?;
    check_tag_references(board)?;
    check_numbers(board)
}

fn check_columns(board: &Board) -> Result<()> {
    let mut seen: HashMap<&CardId, &str> = HashMap::new();
    for column in board.columns() {
        for id in column.cards() {
            if let Some(other) = seen.insert(id, column.id.as_str()) {
                return Err(KanbanError::invariant(format!(
                    "card {} listed in column '{}' and again in column '{}'",
                    id, other, column.id
                )));
            }
            if board.card(id).is_none() {
                return Err(KanbanError::invariant(format!(
                    "column '{}' references card {} which is not on the board",
                    column.id, id
                )));
            }
        }
    }

    for (key, card) in &board.cards {
        if key != &card.id {
            return Err(KanbanError::invariant(format!(
                "card {} is stored under id {}",
                card.id, key
            )));
        }
        if !seen.contains_key(key) {
            return Err(KanbanError::invariant(format!(
                "card {} is not in any column",
                key
            )));
        }
    }
    Ok(())
}

fn check_archive(board: &Board) -> Result<()> {
    let mut archived = HashSet::new();
    for entry in board.archive() {
        if entry.card_id != entry.card.id {
            return Err(KanbanError::invariant(format!(
                "archive entry {} holds card {}",
                entry.card_id, entry.card.id
            )));
        }
        if !archived.insert(&entry.card_id) {
            return Err(KanbanError::invariant(format!(
                "card {} archived more than once",
                entry.card_id
            )));
        }
        if board.card(&entry.card_id).is_some() || board.locate_card(&entry.card_id).is_some() {
            return Err(KanbanError::invariant(format!(
                "archived card {} is still on the board",
                entry.card_id
            )));
        }
    }
    Ok(())
}

fn check_tag_registry(board: &Board) -> Result<()> {
    let registry = board.tags();
    let mut ordered = HashSet::new();
    for id in registry.ids() {
        if !ordered.insert(id) {
            return Err(KanbanError::invariant(format!(
                "tag {} appears twice in the tag order",
                id
            )));
        }
        if !registry.contains(id) {
            return Err(KanbanError::invariant(format!(
                "tag {} is ordered but not registered",
                id
            )));
        }
    }
    for id in registry.keys() {
        if !ordered.contains(id) {
            return Err(KanbanError::invariant(format!(
                "tag {} is registered but missing from the tag order",
                id
            )));
        }
        if registry.get(id).is_some_and(|t| &t.id != id) {
            return Err(KanbanError::invariant(format!(
                "tag registered under {} has a different id",
                id
            )));
        }
    }
    Ok(())
}

fn check_tag_references(board: &Board) -> Result<()> {
    let cards = board
        .cards()
        .chain(board.archive().iter().map(|entry| &entry.card));
    for card in cards {
        if let Some(tag) = card.tags.iter().find(|t| !board.tags().contains(t)) {
            return Err(dangling_tag(&card.id, tag));
        }
    }
    Ok(())
}

fn dangling_tag(card: &CardId, tag: &TagId) -> KanbanError {
    KanbanError::invariant(format!("card {} references unknown tag {}", card, tag))
}

fn check_numbers(board: &Board) -> Result<()> {
    let mut numbers = HashMap::new();
    let cards = board
        .cards()
        .chain(board.archive().iter().map(|entry| &entry.card));
    for card in cards {
        if card.number > board.cards_counter() {
            return Err(KanbanError::invariant(format!(
                "card {} has number {} above the counter {}",
                card.id,
                card.number,
                board.cards_counter()
            )));
        }
        if let Some(other) = numbers.insert(card.number, &card.id) {
            return Err(KanbanError::invariant(format!(
                "cards {} and {} share number {}",
                other, card.id, card.number
            )));
        }
    }
    Ok(())
}
