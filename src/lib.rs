pub mod engine;
pub mod world;

use engine::{
    Output, Player, handle_drop, handle_inventory, handle_movement, handle_take, render_room,
};
use world::World;

pub use world::{LoadError, LoadReport, load_game_data, load_world_from_str};

/// A loaded world and the player walking through it.
pub struct GameState {
    pub world: World,
    pub player: Player,
}

impl GameState {
    pub fn new(world: World) -> Self {
        let player = Player::at_start(&world);
        GameState { world, player }
    }

    /// Render the room the player is standing in.
    pub fn look(&self) -> Output {
        let mut out = Output::new();
        match self.world.get_room(self.player.current_room()) {
            Some(room) => render_room(&mut out, &self.world, room),
            None => out.say("You are nowhere at all."),
        }
        out
    }

    pub fn go(&mut self, direction: &str) -> Output {
        let mut out = Output::new();
        handle_movement(&mut out, &self.world, &mut self.player, direction);
        out
    }

    pub fn take(&mut self, item: &str) -> Output {
        let mut out = Output::new();
        handle_take(&mut out, &mut self.world, &mut self.player, item);
        out
    }

    pub fn drop(&mut self, item: &str) -> Output {
        let mut out = Output::new();
        handle_drop(&mut out, &mut self.world, &mut self.player, item);
        out
    }

    pub fn inventory(&self) -> Output {
        let mut out = Output::new();
        handle_inventory(&mut out, &self.world, &self.player);
        out
    }
}
