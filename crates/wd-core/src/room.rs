use std::collections::BTreeMap;
use std::fmt;

use crate::item::ItemId;

/// Index of a room in the world's room arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub(crate) usize);

impl RoomId {
    /// Position of the room in the world's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room#{}", self.0)
    }
}

/// A room in the house. Exits point at other rooms by ID; the world owns
/// every room.
#[derive(Debug, Clone)]
pub struct Room {
    name: String,
    description: String,
    items: Vec<ItemId>,
    exits: BTreeMap<String, RoomId>,
}

impl Room {
    /// Create an empty room with no exits.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            items: Vec::new(),
            exits: BTreeMap::new(),
        }
    }

    /// Room name, unique within a world.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text shown when looking around.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Items lying here, in placement order.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Target of the exit labeled `direction`, if any.
    pub fn exit(&self, direction: &str) -> Option<RoomId> {
        self.exits.get(direction).copied()
    }

    /// All exits, ordered by label.
    pub fn exits(&self) -> impl Iterator<Item = (&str, RoomId)> {
        self.exits.iter().map(|(label, id)| (label.as_str(), *id))
    }

    /// Returns the previous target if the direction was already taken.
    pub(crate) fn set_exit(&mut self, direction: String, to: RoomId) -> Option<RoomId> {
        self.exits.insert(direction, to)
    }

    pub(crate) fn push_item(&mut self, item: ItemId) {
        self.items.push(item);
    }

    pub(crate) fn remove_item_at(&mut self, index: usize) -> ItemId {
        self.items.remove(index)
    }
}
