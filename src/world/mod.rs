mod builder;
mod diagnostics;
mod error;
mod loader;
mod model;
mod record;
mod validator;

pub use builder::{LoadReport, build_world};
pub use loader::{
    DocumentFormat, load_game_data, load_world_from_str, load_world_from_toml_str, parse_document,
};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use diagnostics::Diagnostic;
pub use error::{BuildError, BuildPhase, LoadError, ParseSource, Source};
pub use model::{
    DEFAULT_ITEM_DESCRIPTION, DEFAULT_ROOM_DESCRIPTION, Item, ItemId, Room, World,
    normalize_direction,
};
pub use record::{ExitTable, ItemRecord, RoomRecord, WorldRecord, map_document};
pub use validator::{ValidationError, validate_world};
