use std::fmt;

/// Index of an item in the world's item arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) usize);

impl ItemId {
    /// Position of the item in the world's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Normalize a name into the key items are looked up by.
///
/// Lookups are case-insensitive and ignore runs of whitespace, so
/// `"  rusty   KEY "` and `"Rusty Key"` share a key.
pub fn lookup_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A portable object that may carry a clue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    description: String,
    clue: Option<String>,
    key: String,
}

impl Item {
    /// Create an item without a clue.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        let key = lookup_key(&name);
        Self {
            name,
            description: description.into(),
            clue: None,
            key,
        }
    }

    /// Attach the clue revealed when the item is used.
    pub fn with_clue(mut self, clue: impl Into<String>) -> Self {
        self.clue = Some(clue.into());
        self
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flavor text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The clue text, if the item has one.
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    /// Normalized lookup key (see [`lookup_key`]).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// True if `key` (already normalized) names this item.
    pub fn matches(&self, key: &str) -> bool {
        self.key == key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_case_and_space_insensitive() {
        assert_eq!(lookup_key("  rusty   KEY "), "rusty key");
        assert_eq!(Item::new("Rusty Key", "").key(), "rusty key");
    }

    #[test]
    fn clue_builder() {
        let note = Item::new("Note", "A note.").with_clue("Look under the rug.");
        assert_eq!(note.clue(), Some("Look under the rug."));
        assert_eq!(Item::new("Candle", "A candle.").clue(), None);
    }

    #[test]
    fn matches_normalized_key_only() {
        let note = Item::new("Note", "");
        assert!(note.matches(&lookup_key("NOTE")));
        assert!(!note.matches("NOTE"));
    }
}
