//! Typed identifiers for board entities.
//!
//! Identifiers are plain strings on the wire. Fresh ones are ULIDs, but any
//! string is accepted so that hand-written ids like `"todo"` keep working.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh ULID-based id
            pub fn new() -> Self {
                Self(Ulid::new().to_string())
            }

            /// Wrap an existing id string
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }
    };
}

define_id!(
    /// Identifies a board inside a [`Boards`](crate::Boards) document
    BoardId
);
define_id!(
    /// Identifies a card for the whole of its lifetime on a board
    CardId
);
define_id!(
    /// Identifies a column on a board
    ColumnId
);
define_id!(
    /// Identifies a tag in a board's tag registry
    TagId
);
define_id!(
    /// Identifies an applied-mutation log entry
    LogEntryId
);
