use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_ITEM_DESCRIPTION: &str = "An item.";
pub const DEFAULT_ROOM_DESCRIPTION: &str = "A non-descript location.";

////////////////////////////////
/// GAME STRUCTS AND HANDLES ///
////////////////////////////////

/// Handle to an item owned by a [`World`]. Rooms and players hold these,
/// never the `Item` itself.
///
/// A handle is an index into the arena of the world that issued it and means
/// nothing anywhere else. Handing it to another world resolves to whatever
/// item sits at that index there, or to nothing; `validate_world` can only
/// catch the second case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    description: String,
}

impl Item {
    pub(crate) fn new(name: String, description: String) -> Self {
        Item { name, description }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    description: String,
    exits: BTreeMap<String, String>, // normalized direction -> room name
    items: Vec<ItemId>,
}

impl Room {
    pub(crate) fn new(name: String, description: String) -> Self {
        Room {
            name,
            description,
            exits: BTreeMap::new(),
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn exits(&self) -> &BTreeMap<String, String> {
        &self.exits
    }

    /// Destination for a direction. The direction is normalized the same way
    /// exit keys are when a world is loaded.
    pub fn exit(&self, direction: &str) -> Option<&str> {
        self.exits
            .get(&normalize_direction(direction))
            .map(String::as_str)
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn contains_item(&self, id: ItemId) -> bool {
        self.items.contains(&id)
    }

    pub fn add_item(&mut self, id: ItemId) {
        self.items.push(id);
    }

    /// Removes the first occurrence of `id`. Returns false if the room did not hold it.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|held| *held == id) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Overwrites any existing exit in the same direction.
    pub(crate) fn set_exit(&mut self, direction: String, destination: String) -> Option<String> {
        self.exits.insert(direction, destination)
    }
}

/// Runtime world handed to the game engine.
///
/// Only the builder can construct one, so the referential invariants checked at
/// load time keep holding: exits point at rooms that exist, room item handles
/// index into this world's arena, and the start room is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    rooms: HashMap<String, Room>,
    items: Vec<Item>,
    item_index: HashMap<String, ItemId>,
    start_room: String,
}

impl World {
    pub(crate) fn empty() -> Self {
        World {
            rooms: HashMap::new(),
            items: Vec::new(),
            item_index: HashMap::new(),
            start_room: String::new(),
        }
    }

    pub fn get_room(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    pub fn room_mut(&mut self, name: &str) -> Option<&mut Room> {
        self.rooms.get_mut(name)
    }

    pub fn get_item(&self, name: &str) -> Option<&Item> {
        self.item_id(name).and_then(|id| self.item(id))
    }

    pub fn item_id(&self, name: &str) -> Option<ItemId> {
        self.item_index.get(name).copied()
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0)
    }

    pub fn start_room_name(&self) -> &str {
        &self.start_room
    }

    pub fn start_room(&self) -> Option<&Room> {
        self.rooms.get(&self.start_room)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Items in arena order, which is the order they were declared in.
    pub fn items(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items
            .iter()
            .enumerate()
            .map(|(idx, item)| (ItemId(idx), item))
    }

    pub fn room_items<'a>(&'a self, room: &'a Room) -> impl Iterator<Item = &'a Item> + 'a {
        room.items.iter().filter_map(|id| self.item(*id))
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn contains_room(&self, name: &str) -> bool {
        self.rooms.contains_key(name)
    }

    pub(crate) fn insert_item(&mut self, item: Item) -> ItemId {
        let id = ItemId(self.items.len());
        self.item_index.insert(item.name.clone(), id);
        self.items.push(item);
        id
    }

    pub(crate) fn insert_room(&mut self, room: Room) {
        self.rooms.insert(room.name.clone(), room);
    }

    pub(crate) fn set_start_room(&mut self, name: String) {
        self.start_room = name;
    }

    pub(crate) fn room_entries(&self) -> impl Iterator<Item = (&String, &Room)> {
        self.rooms.iter()
    }

    pub(crate) fn item_index_entries(&self) -> impl Iterator<Item = (&String, &ItemId)> {
        self.item_index.iter()
    }
}

/// Trim + lowercase, used for exit keys and player input alike.
pub fn normalize_direction(raw: &str) -> String {
    raw.trim().to_lowercase()
}
