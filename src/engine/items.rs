use crate::engine::error::ActionError;
use crate::engine::output::Output;
use crate::engine::player::Player;
use crate::world::{self, ItemId};

/// Pick the handle whose item is named `query`. Exact names win over
/// case-insensitive ones.
fn match_item(world: &world::World, candidates: &[ItemId], query: &str) -> Option<ItemId> {
    let query = query.trim();
    let named = |id: &&ItemId| world.item(**id).map(|item| item.name());

    candidates
        .iter()
        .find(|id| named(id) == Some(query))
        .or_else(|| {
            candidates.iter().find(|id| {
                named(id).is_some_and(|name| name.eq_ignore_ascii_case(query))
            })
        })
        .copied()
}

fn missing_item(world: &world::World, query: &str, not_found: ActionError) -> ActionError {
    let query = query.trim();
    let exists = world
        .items()
        .any(|(_, item)| item.name().eq_ignore_ascii_case(query));
    if exists {
        not_found
    } else {
        ActionError::NoSuchItem(query.to_string())
    }
}

/// Move an item from the player's current room into their inventory.
pub fn take_item(
    world: &mut world::World,
    player: &mut Player,
    name: &str,
) -> Result<ItemId, ActionError> {
    let room_name = player.current_room().to_string();
    let room = world
        .get_room(&room_name)
        .ok_or_else(|| ActionError::UnknownRoom(room_name.clone()))?;

    let id = match match_item(world, room.items(), name) {
        Some(id) => id,
        None => {
            let not_here = ActionError::NotHere(name.trim().to_string());
            return Err(missing_item(world, name, not_here));
        }
    };

    if let Some(room) = world.room_mut(&room_name) {
        room.remove_item(id);
    }
    player.take_item(id);
    Ok(id)
}

/// Move an item from the player's inventory into their current room.
pub fn drop_item(
    world: &mut world::World,
    player: &mut Player,
    name: &str,
) -> Result<ItemId, ActionError> {
    let Some(id) = match_item(world, player.inventory(), name) else {
        let not_carried = ActionError::NotCarried(name.trim().to_string());
        return Err(missing_item(world, name, not_carried));
    };

    let room_name = player.current_room().to_string();
    let room = world
        .room_mut(&room_name)
        .ok_or(ActionError::UnknownRoom(room_name))?;
    room.add_item(id);
    player.drop_item(id);
    Ok(id)
}

pub fn handle_take(out: &mut Output, world: &mut world::World, player: &mut Player, target: &str) {
    if target.trim().is_empty() {
        out.say("Take what?");
        return;
    }

    match take_item(world, player, target) {
        Ok(id) => {
            if let Some(item) = world.item(id) {
                out.say(format!("You take the {}.", item.name()));
            }
        }
        Err(e) => out.say(format!("{}.", capitalize(&e.to_string()))),
    }
}

pub fn handle_drop(out: &mut Output, world: &mut world::World, player: &mut Player, target: &str) {
    if target.trim().is_empty() {
        out.say("Drop what?");
        return;
    }

    match drop_item(world, player, target) {
        Ok(id) => {
            if let Some(item) = world.item(id) {
                out.say(format!("You drop the {}.", item.name()));
            }
        }
        Err(e) => out.say(format!("{}.", capitalize(&e.to_string()))),
    }
}

pub fn handle_inventory(out: &mut Output, world: &world::World, player: &Player) {
    let carried: Vec<&world::Item> = player
        .inventory()
        .iter()
        .filter_map(|id| world.item(*id))
        .collect();

    if carried.is_empty() {
        out.say("You are carrying nothing.");
        return;
    }

    out.say("You are carrying:");
    for item in carried {
        out.say(format!("  {}: {}", item.name(), item.description()));
    }
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
