use std::collections::HashSet;

use log::{debug, info};

use super::diagnostics::{Diagnostic, Diagnostics};
use super::error::BuildError;
use super::model::{
    DEFAULT_ITEM_DESCRIPTION, DEFAULT_ROOM_DESCRIPTION, Item, ItemId, Room, World,
    normalize_direction,
};
use super::record::{ItemRecord, RoomRecord, WorldRecord};
use super::validator::validate_world;

/// A successfully built world plus everything that was skipped on the way.
#[derive(Debug)]
pub struct LoadReport {
    pub world: World,
    pub diagnostics: Vec<Diagnostic>,
}

/// Turn mapped records into a [`World`].
///
/// Phases run in a fixed order and the first structural defect aborts the
/// build: top-level shape, items, rooms (names only), exits and room items,
/// then the player start. Rooms are created in one pass and linked in a second
/// so exits may point at rooms declared later in the document.
///
/// Entries with a blank name, and exits or item references with a blank side,
/// are skipped and reported through [`LoadReport::diagnostics`]. Dangling
/// references are always fatal.
pub fn build_world(record: WorldRecord) -> Result<LoadReport, BuildError> {
    let WorldRecord {
        player_start,
        items,
        rooms,
    } = record;

    let rooms = rooms.ok_or(BuildError::MissingField("rooms"))?;
    let player_start = non_blank(player_start.as_deref())
        .ok_or(BuildError::MissingField("playerStart"))?
        .to_string();

    let mut diagnostics = Diagnostics::default();
    let items = items.unwrap_or_else(|| {
        diagnostics.push(Diagnostic::NoItems);
        Vec::new()
    });

    let mut world = World::empty();
    materialize_items(&mut world, &items, &mut diagnostics)?;
    materialize_rooms(&mut world, &rooms, &mut diagnostics)?;
    link_rooms(&mut world, &rooms, &mut diagnostics)?;

    if !world.contains_room(&player_start) {
        return Err(BuildError::UnknownStartRoom(player_start));
    }
    debug!("player start room set to '{}'", player_start);
    world.set_start_room(player_start);

    debug_assert!(
        validate_world(&world).is_empty(),
        "freshly built world violates its invariants"
    );

    let diagnostics = diagnostics.into_vec();
    info!(
        "world built: {} rooms, {} items, start '{}', {} warnings",
        world.room_count(),
        world.item_count(),
        world.start_room_name(),
        diagnostics.len()
    );

    Ok(LoadReport { world, diagnostics })
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn room_name(entry: &Option<RoomRecord>) -> Option<&str> {
    entry.as_ref().and_then(|r| non_blank(r.name.as_deref()))
}

fn description_or(raw: Option<&str>, fallback: &str) -> String {
    match raw {
        Some(desc) if !desc.trim().is_empty() => desc.to_string(),
        _ => fallback.to_string(),
    }
}

fn materialize_items(
    world: &mut World,
    items: &[Option<ItemRecord>],
    diagnostics: &mut Diagnostics,
) -> Result<(), BuildError> {
    for (index, entry) in items.iter().enumerate() {
        let Some(entry) = entry else {
            diagnostics.push(Diagnostic::UnnamedItem { index });
            continue;
        };
        let Some(name) = non_blank(entry.name.as_deref()) else {
            diagnostics.push(Diagnostic::UnnamedItem { index });
            continue;
        };

        if world.item_id(name).is_some() {
            return Err(BuildError::DuplicateItem(name.to_string()));
        }

        let description = description_or(entry.description.as_deref(), DEFAULT_ITEM_DESCRIPTION);
        world.insert_item(Item::new(name.to_string(), description));
        debug!("created item '{}'", name);
    }
    Ok(())
}

fn materialize_rooms(
    world: &mut World,
    rooms: &[Option<RoomRecord>],
    diagnostics: &mut Diagnostics,
) -> Result<(), BuildError> {
    for (index, entry) in rooms.iter().enumerate() {
        let Some(name) = room_name(entry) else {
            diagnostics.push(Diagnostic::UnnamedRoom { index });
            continue;
        };

        if world.contains_room(name) {
            return Err(BuildError::DuplicateRoom(name.to_string()));
        }

        let description = description_or(
            entry.as_ref().and_then(|r| r.description.as_deref()),
            DEFAULT_ROOM_DESCRIPTION,
        );
        world.insert_room(Room::new(name.to_string(), description));
        debug!("created room '{}'", name);
    }
    Ok(())
}

/// Second pass over the room records. Every room exists by now, so exit
/// destinations and item references can be checked against complete tables.
fn link_rooms(
    world: &mut World,
    rooms: &[Option<RoomRecord>],
    diagnostics: &mut Diagnostics,
) -> Result<(), BuildError> {
    for entry in rooms {
        // Unnamed rooms were already reported in the previous pass.
        let (Some(record), Some(name)) = (entry.as_ref(), room_name(entry)) else {
            continue;
        };

        let exits = resolve_exits(world, name, record, diagnostics)?;
        let items = resolve_items(world, name, record, diagnostics)?;

        let Some(room) = world.room_mut(name) else {
            continue;
        };
        for (direction, destination) in exits {
            debug!("added exit from '{}' [{}] to '{}'", name, direction, destination);
            if room.set_exit(direction.clone(), destination).is_some() {
                diagnostics.push(Diagnostic::ExitOverwritten {
                    room: name.to_string(),
                    direction,
                });
            }
        }
        for id in items {
            room.add_item(id);
        }
    }
    Ok(())
}

fn resolve_exits(
    world: &World,
    room: &str,
    record: &RoomRecord,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<(String, String)>, BuildError> {
    let Some(exits) = &record.exits else {
        debug!("room '{}' has no exits defined", room);
        return Ok(Vec::new());
    };

    let mut resolved = Vec::new();
    for (direction, destination) in exits.iter() {
        let (Some(direction_key), Some(destination)) =
            (non_blank(Some(direction)), non_blank(destination))
        else {
            diagnostics.push(Diagnostic::BlankExit {
                room: room.to_string(),
                direction: direction.to_string(),
            });
            continue;
        };

        let direction = normalize_direction(direction_key);
        if !world.contains_room(destination) {
            return Err(BuildError::BrokenExit {
                room: room.to_string(),
                direction,
                destination: destination.to_string(),
            });
        }
        resolved.push((direction, destination.to_string()));
    }
    Ok(resolved)
}

fn resolve_items(
    world: &World,
    room: &str,
    record: &RoomRecord,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<ItemId>, BuildError> {
    let Some(names) = &record.items else {
        debug!("room '{}' has no items defined", room);
        return Ok(Vec::new());
    };

    let mut resolved = Vec::with_capacity(names.len());
    let mut seen: HashSet<ItemId> = HashSet::new();
    for (index, raw) in names.iter().enumerate() {
        let Some(item_name) = non_blank(raw.as_deref()) else {
            diagnostics.push(Diagnostic::BlankItemReference {
                room: room.to_string(),
                index,
            });
            continue;
        };

        let Some(id) = world.item_id(item_name) else {
            return Err(BuildError::UnknownItemReference {
                room: room.to_string(),
                item: item_name.to_string(),
            });
        };

        // Listing an item twice is allowed and yields two references to it.
        if !seen.insert(id) {
            diagnostics.push(Diagnostic::DuplicateItemReference {
                room: room.to_string(),
                item: item_name.to_string(),
            });
        }
        debug!("added item '{}' to room '{}'", item_name, room);
        resolved.push(id);
    }
    Ok(resolved)
}
