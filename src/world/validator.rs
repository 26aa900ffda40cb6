use std::collections::HashSet;

use super::model::World;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Re-check the structural invariants of a loaded world and return every
/// violation found. A world produced by the builder always yields an empty list;
/// engines that mutate rooms can call this to confirm they kept it that way.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // start_room must exist
    if world.get_room(world.start_room_name()).is_none() {
        errors.push(ValidationError::new(format!(
            "start room '{}' not found among rooms",
            world.start_room_name()
        )));
    }

    // Room keys are the trimmed room names
    for (key, room) in world.room_entries() {
        if key != room.name() || key.trim() != key || key.is_empty() {
            errors.push(ValidationError::new(format!(
                "room keyed '{}' is named '{}'",
                key,
                room.name()
            )));
        }
    }

    // Item index agrees with the arena, one entry per item
    let mut indexed = HashSet::new();
    for (key, id) in world.item_index_entries() {
        match world.item(*id) {
            Some(item) if item.name() == key && key.trim() == key && !key.is_empty() => {}
            Some(item) => errors.push(ValidationError::new(format!(
                "item keyed '{}' is named '{}'",
                key,
                item.name()
            ))),
            None => errors.push(ValidationError::new(format!(
                "item key '{}' points outside the item table",
                key
            ))),
        }
        if !indexed.insert(*id) {
            errors.push(ValidationError::new(format!(
                "item key '{}' shares its item with another key",
                key
            )));
        }
    }
    if indexed.len() != world.item_count() {
        errors.push(ValidationError::new(format!(
            "{} items stored but {} indexed by name",
            world.item_count(),
            indexed.len()
        )));
    }

    // Validate exits and room contents
    for room in world.rooms() {
        for (direction, target) in room.exits() {
            if world.get_room(target).is_none() {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room.name(),
                    direction,
                    target
                )));
            }
        }

        for id in room.items() {
            if world.item(*id).is_none() {
                errors.push(ValidationError::new(format!(
                    "room '{}' holds an item missing from the item table",
                    room.name()
                )));
            }
        }
    }

    errors
}
