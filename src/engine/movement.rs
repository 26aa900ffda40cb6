use crate::engine::error::ActionError;
use crate::engine::output::Output;
use crate::engine::player::Player;
use crate::engine::render::render_room;
use crate::world::{self, normalize_direction};

/// Follow the exit in `direction` from the player's current room.
pub fn go<'w>(
    world: &'w world::World,
    player: &mut Player,
    direction: &str,
) -> Result<&'w world::Room, ActionError> {
    let current = world
        .get_room(player.current_room())
        .ok_or_else(|| ActionError::UnknownRoom(player.current_room().to_string()))?;

    let direction = normalize_direction(direction);
    let target = current
        .exit(&direction)
        .ok_or_else(|| ActionError::NoExit(direction.clone()))?;
    let room = world
        .get_room(target)
        .ok_or_else(|| ActionError::UnknownRoom(target.to_string()))?;

    player.move_to(room.name())?;
    Ok(room)
}

pub fn handle_movement(out: &mut Output, world: &world::World, player: &mut Player, cmd: &str) {
    let direction = normalize_direction(cmd);
    if direction.is_empty() {
        out.say("Go where?");
        return;
    }

    match go(world, player, &direction) {
        Ok(room) => {
            out.event(format!("You go {}.", direction));
            render_room(out, world, room);
        }
        Err(e) => out.say(format!("{}.", super::items::capitalize(&e.to_string()))),
    }
}
