mod error;
mod items;
mod movement;
mod output;
mod player;
mod render;

pub use error::ActionError;

pub use items::{drop_item, handle_drop, handle_inventory, handle_take, take_item};

pub use movement::{go, handle_movement};
pub use output::{Output, OutputBlock};
pub use player::Player;
pub use render::render_room;
