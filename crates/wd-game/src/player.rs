//! Player state management.

use wd_core::item::lookup_key;
use wd_core::{ItemId, RoomId, World};

/// Where the player is and what they carry.
#[derive(Debug, Clone)]
pub struct Player {
    /// Current room.
    pub location: RoomId,
    /// Items carried, in the order they were taken.
    pub inventory: Vec<ItemId>,
}

impl Player {
    /// Create a player with empty hands at the given room.
    pub fn new(location: RoomId) -> Self {
        Self {
            location,
            inventory: Vec::new(),
        }
    }

    /// Check if the player has an item.
    pub fn has_item(&self, item_id: ItemId) -> bool {
        self.inventory.contains(&item_id)
    }

    /// Add an item to inventory. The item must already be out of its room.
    pub fn add_item(&mut self, item_id: ItemId) {
        self.inventory.push(item_id);
    }

    /// Find a carried item by name (case-insensitive).
    pub fn find_item(&self, world: &World, name: &str) -> Option<ItemId> {
        let key = lookup_key(name);
        self.inventory
            .iter()
            .copied()
            .find(|id| world.item(*id).is_some_and(|item| item.matches(&key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wd_core::{Item, Room};

    fn world_with_note() -> (World, RoomId, ItemId) {
        let mut world = World::new();
        let hall = world.add_room(Room::new("Hall", "")).unwrap();
        let note = world.place_item(hall, Item::new("Old Note", "")).unwrap();
        (world, hall, note)
    }

    #[test]
    fn player_new() {
        let (_, hall, _) = world_with_note();
        let player = Player::new(hall);
        assert_eq!(player.location, hall);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn inventory_management() {
        let (_, hall, note) = world_with_note();
        let mut player = Player::new(hall);

        assert!(!player.has_item(note));
        player.add_item(note);
        assert!(player.has_item(note));
        assert_eq!(player.inventory, vec![note]);
    }

    #[test]
    fn find_item_by_name() {
        let (world, hall, note) = world_with_note();
        let mut player = Player::new(hall);
        assert_eq!(player.find_item(&world, "old note"), None);

        player.add_item(note);
        assert_eq!(player.find_item(&world, "OLD   note"), Some(note));
        assert_eq!(player.find_item(&world, "note"), None);
    }
}
