use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::item::{Item, ItemId, lookup_key};
use crate::room::{Room, RoomId};

/// The world graph. Owns every room and item.
///
/// Items never leave the arena; only the room lists (and whatever inventory
/// the caller keeps) record where an item currently is.
#[derive(Debug, Clone, Default)]
pub struct World {
    rooms: Vec<Room>,
    items: Vec<Item>,

    // Indexes
    by_name_lower: HashMap<String, RoomId>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Add a room to the world. Returns the room's ID.
    pub fn add_room(&mut self, room: Room) -> CoreResult<RoomId> {
        let name_lower = room.name().to_lowercase();
        if self.by_name_lower.contains_key(&name_lower) {
            return Err(CoreError::DuplicateRoom(room.name().to_string()));
        }

        let id = RoomId(self.rooms.len());
        self.by_name_lower.insert(name_lower, id);
        self.rooms.push(room);
        Ok(id)
    }

    /// Get a room by ID.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    fn room_mut(&mut self, id: RoomId) -> CoreResult<&mut Room> {
        self.rooms.get_mut(id.0).ok_or(CoreError::RoomNotFound(id))
    }

    /// Find a room ID by name (case-insensitive).
    pub fn find_room(&self, name: &str) -> Option<RoomId> {
        self.by_name_lower.get(&name.to_lowercase()).copied()
    }

    /// Iterate over all rooms in insertion order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    // -----------------------------------------------------------------------
    // Connections
    // -----------------------------------------------------------------------

    /// Add a directed exit from `from` to `to`. An existing exit with the
    /// same label is overwritten.
    pub fn connect(
        &mut self,
        from: RoomId,
        direction: impl Into<String>,
        to: RoomId,
    ) -> CoreResult<()> {
        if self.room(to).is_none() {
            return Err(CoreError::RoomNotFound(to));
        }
        self.room_mut(from)?.set_exit(direction.into(), to);
        Ok(())
    }

    /// Follow the exit labeled `direction` out of `from`.
    pub fn exit(&self, from: RoomId, direction: &str) -> Option<RoomId> {
        self.room(from).and_then(|r| r.exit(direction))
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    /// Put a new item into a room. Returns the item's ID.
    pub fn place_item(&mut self, room: RoomId, item: Item) -> CoreResult<ItemId> {
        let id = ItemId(self.items.len());
        self.room_mut(room)?.push_item(id);
        self.items.push(item);
        Ok(id)
    }

    /// Get an item by ID.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0)
    }

    /// Number of items, wherever they are.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Find an item lying in `room` by name (case-insensitive). The first
    /// match in room order wins.
    pub fn find_item_in_room(&self, room: RoomId, name: &str) -> Option<ItemId> {
        self.position_in_room(room, &lookup_key(name))
            .and_then(|pos| self.room(room).map(|r| r.items()[pos]))
    }

    /// Remove an item from `room` by name and hand it to the caller, who
    /// becomes responsible for tracking it.
    pub fn remove_item_from_room(&mut self, room: RoomId, name: &str) -> Option<ItemId> {
        let pos = self.position_in_room(room, &lookup_key(name))?;
        self.rooms.get_mut(room.0).map(|r| r.remove_item_at(pos))
    }

    fn position_in_room(&self, room: RoomId, key: &str) -> Option<usize> {
        self.room(room)?
            .items()
            .iter()
            .position(|id| self.item(*id).is_some_and(|item| item.matches(key)))
    }

    // -----------------------------------------------------------------------
    // Description
    // -----------------------------------------------------------------------

    /// Describe a room: its description, then the items lying in it when
    /// there are any.
    pub fn describe(&self, room: RoomId) -> CoreResult<String> {
        let room_ref = self.room(room).ok_or(CoreError::RoomNotFound(room))?;
        let mut output = room_ref.description().to_string();

        let names: Vec<&str> = room_ref
            .items()
            .iter()
            .filter_map(|id| self.item(*id))
            .map(Item::name)
            .collect();

        if !names.is_empty() {
            output.push_str("\nYou see the following objects:");
            for name in names {
                output.push('\n');
                output.push_str(name);
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn two_rooms() -> (World, RoomId, RoomId) {
        let mut world = World::new();
        let hall = world
            .add_room(Room::new("Hall", "A long hall."))
            .unwrap();
        let study = world
            .add_room(Room::new("Study", "Books everywhere."))
            .unwrap();
        (world, hall, study)
    }

    #[test]
    fn add_and_find_room() {
        let (world, hall, _) = two_rooms();
        assert_eq!(world.room_count(), 2);
        assert_eq!(world.find_room("hall"), Some(hall));
        assert_eq!(world.room(hall).unwrap().name(), "Hall");
        assert!(world.find_room("Attic").is_none());
    }

    #[test]
    fn duplicate_room_rejected() {
        let (mut world, _, _) = two_rooms();
        let err = world.add_room(Room::new("HALL", "")).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateRoom(name) if name == "HALL"));
    }

    #[test]
    fn connections_are_directed() {
        let (mut world, hall, study) = two_rooms();
        world.connect(hall, "east", study).unwrap();

        assert_eq!(world.exit(hall, "east"), Some(study));
        assert_eq!(world.exit(study, "west"), None);
    }

    #[test]
    fn connect_overwrites_direction() {
        let (mut world, hall, study) = two_rooms();
        world.connect(hall, "east", study).unwrap();
        world.connect(hall, "east", hall).unwrap();

        assert_eq!(world.exit(hall, "east"), Some(hall));
        assert_eq!(world.room(hall).unwrap().exits().count(), 1);
    }

    #[test]
    fn connect_unknown_room_fails() {
        let (mut world, hall, _) = two_rooms();
        let err = world.connect(hall, "up", RoomId(9)).unwrap_err();
        assert!(matches!(err, CoreError::RoomNotFound(RoomId(9))));
    }

    #[test]
    fn describe_empty_room() {
        let (world, hall, _) = two_rooms();
        assert_eq!(world.describe(hall).unwrap(), "A long hall.");
    }

    #[test]
    fn describe_lists_items_in_order() {
        let (mut world, _, study) = two_rooms();
        world.place_item(study, Item::new("Ledger", "")).unwrap();
        world.place_item(study, Item::new("Quill", "")).unwrap();

        insta::assert_snapshot!(world.describe(study).unwrap(), @r"
        Books everywhere.
        You see the following objects:
        Ledger
        Quill
        ");
    }

    #[test]
    fn remove_item_first_match_wins() {
        let (mut world, hall, _) = two_rooms();
        let first = world.place_item(hall, Item::new("Coin", "gold")).unwrap();
        let second = world.place_item(hall, Item::new("coin", "silver")).unwrap();

        assert_eq!(world.find_item_in_room(hall, "COIN"), Some(first));
        assert_eq!(world.remove_item_from_room(hall, "COIN"), Some(first));
        assert_eq!(world.remove_item_from_room(hall, "coin"), Some(second));
        assert_eq!(world.remove_item_from_room(hall, "coin"), None);
        assert!(world.room(hall).unwrap().items().is_empty());
    }

    #[test]
    fn remove_item_from_wrong_room() {
        let (mut world, hall, study) = two_rooms();
        world.place_item(hall, Item::new("Coin", "")).unwrap();
        assert_eq!(world.remove_item_from_room(study, "coin"), None);
    }

    proptest! {
        #[test]
        fn items_are_never_duplicated_or_lost(
            takes in proptest::collection::vec((0usize..2, "(?i)(coin|ledger|quill|ghost)"), 0..12)
        ) {
            let (mut world, hall, study) = two_rooms();
            world.place_item(hall, Item::new("Coin", "")).unwrap();
            world.place_item(study, Item::new("Ledger", "")).unwrap();
            world.place_item(study, Item::new("Quill", "")).unwrap();

            let rooms = [hall, study];
            let mut held: Vec<ItemId> = Vec::new();
            for (room, name) in takes {
                if let Some(id) = world.remove_item_from_room(rooms[room], &name) {
                    held.push(id);
                }
            }

            for index in 0..world.item_count() {
                let id = ItemId(index);
                let in_rooms = world
                    .rooms()
                    .filter(|(_, r)| r.items().contains(&id))
                    .count();
                let in_hand = held.iter().filter(|h| **h == id).count();
                prop_assert_eq!(in_rooms + in_hand, 1);
            }
        }
    }
}
