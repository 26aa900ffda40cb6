use crate::engine::output::Output;
use crate::world;

pub fn render_room(out: &mut Output, world: &world::World, room: &world::Room) {
    out.title(room.name());
    out.say(room.description().trim());

    let names: Vec<String> = world
        .room_items(room)
        .map(|item| item.name().to_string())
        .collect();
    out.list_items(names);

    // exits are kept sorted by direction
    if room.exits().is_empty() {
        out.set_exits("Exits: (none)");
    } else {
        let list = room
            .exits()
            .keys()
            .map(String::as_str)
            .collect::<Vec<&str>>()
            .join(", ");
        out.set_exits(format!("Exits: {}", list));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::output::OutputBlock;
    use crate::world::load_world_from_str;

    #[test]
    fn renders_items_in_room_order_and_sorted_exits() {
        let report = load_world_from_str(
            r#"{
                "playerStart": "Hall",
                "items": [{ "name": "lamp" }, { "name": "key" }],
                "rooms": [
                    { "name": "Hall", "description": "A long hall.", "exits": { "west": "Hall", "east": "Hall" }, "items": ["key", "lamp"] }
                ]
            }"#,
        )
        .unwrap();
        let world = &report.world;
        let mut out = Output::new();
        render_room(&mut out, world, world.start_room().unwrap());

        assert_eq!(
            out.blocks,
            vec![
                OutputBlock::Title("Hall".into()),
                OutputBlock::Text("A long hall.".into()),
                OutputBlock::Items(vec!["key".into(), "lamp".into()]),
                OutputBlock::Exits("Exits: east, west".into()),
            ]
        );
    }
}
