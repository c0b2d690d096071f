//! Fixtures shared by unit tests

use crate::context::{FixedClock, KanbanContext};
use crate::types::{Board, Card, Column, Placement, Tag};
use chrono::{DateTime, TimeZone, Utc};

pub fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn ctx() -> KanbanContext {
    KanbanContext::new().with_clock(FixedClock::new(now()))
}

/// Board with columns todo/doing/done, tag `bug`, cards a, b in todo and c in doing
pub fn board() -> Board {
    let mut board = Board::new("Test")
        .with_column(Column::new("To Do").with_id("todo"))
        .with_column(Column::new("Doing").with_id("doing"))
        .with_column(Column::new("Done").with_id("done"));
    board.tags.insert(Tag::new("bug", "#f00", "#fff").with_id("bug"));
    for (id, column) in [("a", 0), ("b", 0), ("c", 1)] {
        let number = board.claim_card_number();
        let card = Card::new(id, "", vec!["bug".into()], number, created_at()).with_id(id);
        board.attach_card(card, column, Placement::Bottom);
    }
    board
}
