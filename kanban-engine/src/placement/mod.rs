//! Card placement commands

mod mv;
mod transfer;

pub use mv::{MoveCard, Slot};
pub use transfer::MoveCardToBoard;
