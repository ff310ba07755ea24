use crate::error::CoreResult;
use crate::item::Item;
use crate::room::{Room, RoomId};
use crate::world::World;

/// A ready-to-play world and the room the player starts in.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// The rooms, items and exits.
    pub world: World,
    /// Starting room.
    pub start: RoomId,
}

/// The manor: living room, kitchen and bedroom, with a clue in two of them.
///
/// ```text
///              Bedroom
///                 |
/// Living Room - Kitchen
/// ```
pub fn classic_manor() -> CoreResult<Scenario> {
    let mut world = World::new();

    let living_room = world.add_room(Room::new(
        "Living Room",
        "You are in the cozy living room.",
    ))?;
    let kitchen = world.add_room(Room::new("Kitchen", "You are in the messy kitchen."))?;
    let bedroom = world.add_room(Room::new("Bedroom", "You are in the dimly lit bedroom."))?;

    world.place_item(
        living_room,
        Item::new("Note", "A handwritten note with mysterious symbols.")
            .with_clue("The key to the mystery is hidden under the old rug."),
    )?;
    world.place_item(
        kitchen,
        Item::new("Key", "A rusty key that seems important.")
            .with_clue("The door to the secret room can be unlocked with this key."),
    )?;
    world.place_item(bedroom, Item::new("Candle", "A partially burnt candle."))?;

    world.connect(living_room, "east", kitchen)?;
    world.connect(kitchen, "west", living_room)?;
    world.connect(kitchen, "north", bedroom)?;
    world.connect(bedroom, "south", kitchen)?;

    Ok(Scenario {
        world,
        start: living_room,
    })
}
