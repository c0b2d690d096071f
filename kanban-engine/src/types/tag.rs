//! Tag types: Tag and the board's TagRegistry

use super::ids::TagId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A tag categorizes cards on one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    /// Background color, e.g. `#ff0000`
    pub color: String,
    pub text_color: String,
}

impl Tag {
    /// Create a new tag with a fresh id
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        text_color: impl Into<String>,
    ) -> Self {
        Self {
            id: TagId::new(),
            name: name.into(),
            color: color.into(),
            text_color: text_color.into(),
        }
    }

    /// Replace the generated id
    pub fn with_id(mut self, id: impl Into<TagId>) -> Self {
        self.id = id.into();
        self
    }
}

/// Tags of a board: an id-keyed map plus the display order.
///
/// `all_ids` always holds exactly the keys of `by_id`, each once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRegistry {
    by_id: IndexMap<TagId, Tag>,
    all_ids: Vec<TagId>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &TagId) -> Option<&Tag> {
        self.by_id.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &TagId) -> Option<&mut Tag> {
        self.by_id.get_mut(id)
    }

    pub fn contains(&self, id: &TagId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Tag ids in display order
    pub fn ids(&self) -> &[TagId] {
        &self.all_ids
    }

    /// Tags in display order
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.all_ids.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn len(&self) -> usize {
        self.all_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_ids.is_empty()
    }

    /// Register a tag at the end of the display order.
    ///
    /// Returns false and leaves the registry alone if the id is taken.
    pub(crate) fn insert(&mut self, tag: Tag) -> bool {
        if self.by_id.contains_key(&tag.id) {
            return false;
        }
        self.all_ids.push(tag.id.clone());
        self.by_id.insert(tag.id.clone(), tag);
        true
    }

    /// Drop a tag from both the map and the display order
    pub(crate) fn remove(&mut self, id: &TagId) -> Option<Tag> {
        let tag = self.by_id.shift_remove(id)?;
        self.all_ids.retain(|t| t != id);
        Some(tag)
    }

    /// Keys of the id map, in map order
    pub(crate) fn keys(&self) -> impl Iterator<Item = &TagId> {
        self.by_id.keys()
    }
}
