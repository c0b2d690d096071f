//! Markdown checklist items embedded in card descriptions.
//!
//! A task line is optional indentation, a `-`, `+` or `*` bullet, a bracketed
//! mark and the task text:
//!
//! ```text
//! - [ ] buy milk
//!   * [x] call the plumber
//! ```
//!
//! A task is checked only when its mark is exactly `x`.

use crate::error::{KanbanError, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

static TASK_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[-+*]\s*\[([^\]]*)\]\s*(.*)$").expect("task line pattern is valid")
});

/// One checklist line parsed out of a description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub content: String,
    pub checked: bool,
}

/// Extract the checklist items of a description, in line order.
pub fn extract_tasks(description: &str) -> Vec<Task> {
    description
        .lines()
        .filter_map(|line| TASK_LINE.captures(line))
        .map(|caps| Task {
            content: caps[2].trim_end().to_string(),
            checked: &caps[1] == "x",
        })
        .collect()
}

/// Rewrite every task line whose text equals `content` as checked or unchecked.
///
/// Matching is by text, so all task lines sharing the same text flip
/// together. Indentation is kept; the bullet is normalized to `-`.
///
/// The gaps around the bullet and the mark accept the same whitespace as
/// [`extract_tasks`] (any Unicode whitespace except line breaks), so every
/// line the parser reports as a task can be rewritten.
pub fn set_task_state(description: &str, content: &str, done: bool) -> Result<String> {
    let pattern = format!(
        r"(?mR)^(?P<indent>[^\S\r\n]*)[-+*][^\S\r\n]*\[[^\]\r\n]*\][^\S\r\n]*{}[^\S\r\n]*$",
        regex::escape(content)
    );
    let regex = Regex::new(&pattern).map_err(|source| KanbanError::Pattern { source })?;
    let mark = if done { 'x' } else { ' ' };

    let replaced = regex.replace_all(description, |caps: &Captures| {
        format!("{}- [{}] {}", &caps["indent"], mark, content)
    });
    Ok(replaced.into_owned())
}

/// Count (total, checked) task lines
pub fn checklist_counts(description: &str) -> (usize, usize) {
    let tasks = extract_tasks(description);
    let checked = tasks.iter().filter(|t| t.checked).count();
    (tasks.len(), checked)
}
