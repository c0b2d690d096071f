//! Logging helpers for board documents

use serde::Serialize;
use std::fmt::Debug;

/// Renders a board, card or tag as YAML for `trace!` output.
///
/// `Execute::execute` uses it to dump the document after every applied
/// command. Anything that fails to serialize is shown with `{:#?}` instead.
///
/// ```
/// use kanban_engine::{logging::Pretty, Tag};
///
/// let tag = Tag::new("bug", "#f00", "#fff");
/// assert!(Pretty(&tag).to_string().contains("name: bug"));
/// ```
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> std::fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

impl<T: Serialize + Debug> std::fmt::Debug for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tag;

    #[test]
    fn test_pretty_renders_yaml() {
        let tag = Tag::new("bug", "#f00", "#fff").with_id("t1");
        let rendered = format!("{}", Pretty(&tag));
        assert!(rendered.starts_with('\n'));
        assert!(rendered.contains("name: bug"));
        assert!(rendered.contains("textColor:"));
        assert!(rendered.contains("#fff"));
    }
}
