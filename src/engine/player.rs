use crate::engine::error::ActionError;
use crate::world::{ItemId, World};

/// The player's position and inventory. Inventory entries are handles into the
/// world's item table, the same handles rooms hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    current_room: String,
    inventory: Vec<ItemId>,
}

impl Player {
    pub fn new(starting_room: &str) -> Result<Self, ActionError> {
        let room = starting_room.trim();
        if room.is_empty() {
            return Err(ActionError::BlankRoomName);
        }
        Ok(Player {
            current_room: room.to_string(),
            inventory: Vec::new(),
        })
    }

    /// Place a new player in the world's start room.
    pub fn at_start(world: &World) -> Self {
        Player {
            current_room: world.start_room_name().to_string(),
            inventory: Vec::new(),
        }
    }

    pub fn current_room(&self) -> &str {
        &self.current_room
    }

    pub fn move_to(&mut self, room: &str) -> Result<(), ActionError> {
        let room = room.trim();
        if room.is_empty() {
            return Err(ActionError::BlankRoomName);
        }
        self.current_room = room.to_string();
        Ok(())
    }

    pub fn inventory(&self) -> &[ItemId] {
        &self.inventory
    }

    pub fn is_carrying(&self, id: ItemId) -> bool {
        self.inventory.contains(&id)
    }

    pub fn take_item(&mut self, id: ItemId) {
        self.inventory.push(id);
    }

    /// Returns false if the item wasn't carried.
    pub fn drop_item(&mut self, id: ItemId) -> bool {
        match self.inventory.iter().position(|held| *held == id) {
            Some(idx) => {
                self.inventory.remove(idx);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_room_names_are_rejected() {
        assert_eq!(Player::new("  "), Err(ActionError::BlankRoomName));
        let mut player = Player::new(" Hall ").unwrap();
        assert_eq!(player.current_room(), "Hall");
        assert_eq!(player.move_to(""), Err(ActionError::BlankRoomName));
        assert_eq!(player.current_room(), "Hall");
    }
}
