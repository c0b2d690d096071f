//! Checklist task commands

mod toggle;

pub use toggle::{toggle_task, ToggleTask};
