use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Unexpected, Visitor};
use serde::Deserialize;
use serde_json::Value;

////////////////////////
/// DOCUMENT RECORDS ///
////////////////////////

// Every field is optional and every list entry nullable: the mapper only rejects
// wrong types. Missing names and dangling references are the builder's call.

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldRecord {
    #[serde(default)]
    pub player_start: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<Option<ItemRecord>>>,
    #[serde(default)]
    pub rooms: Option<Vec<Option<RoomRecord>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RoomRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub exits: Option<ExitTable>,
    #[serde(default)]
    pub items: Option<Vec<Option<String>>>,
}

/// Raw `direction -> destination` pairs in document order. Kept as a list so
/// that when two keys normalize to the same direction the later one wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExitTable(pub Vec<(String, Option<String>)>);

impl ExitTable {
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0
            .iter()
            .map(|(direction, destination)| (direction.as_str(), destination.as_deref()))
    }
}

impl<'de> Deserialize<'de> for ExitTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ExitTableVisitor;

        impl<'de> Visitor<'de> for ExitTableVisitor {
            type Value = ExitTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of direction to room name")
            }

            fn visit_map<A>(self, mut map: A) -> Result<ExitTable, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((direction, destination)) =
                    map.next_entry::<String, Option<String>>()?
                {
                    entries.push((direction, destination));
                }
                Ok(ExitTable(entries))
            }
        }

        deserializer.deserialize_map(ExitTableVisitor)
    }
}

/// Map an untyped document tree onto records. Fails only on type mismatches.
pub fn map_document(tree: Value) -> Result<WorldRecord, serde_json::Error> {
    // serde would happily read a struct out of an array; a world is always an object.
    if !tree.is_object() {
        return Err(de::Error::invalid_type(unexpected(&tree), &"a world object"));
    }
    serde_json::from_value(tree)
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) => Unexpected::Float(f),
            None => Unexpected::Other("number"),
        },
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_optional_fields_map_to_none() {
        let record = map_document(json!({
            "playerStart": "Hall",
            "rooms": [{ "name": "Hall" }]
        }))
        .unwrap();

        assert_eq!(record.player_start.as_deref(), Some("Hall"));
        assert!(record.items.is_none());
        let rooms = record.rooms.unwrap();
        let hall = rooms[0].as_ref().unwrap();
        assert!(hall.description.is_none());
        assert!(hall.exits.is_none());
        assert!(hall.items.is_none());
    }

    #[test]
    fn null_entries_are_tolerated() {
        let record = map_document(json!({
            "playerStart": null,
            "items": [null, { "name": null }],
            "rooms": [null, { "name": "Hall", "exits": { "north": null }, "items": [null, "key"] }]
        }))
        .unwrap();

        assert!(record.player_start.is_none());
        assert_eq!(record.items.as_ref().map(Vec::len), Some(2));
        let rooms = record.rooms.unwrap();
        assert!(rooms[0].is_none());
        let hall = rooms[1].as_ref().unwrap();
        assert_eq!(
            hall.exits.as_ref().unwrap().0,
            vec![("north".to_string(), None)]
        );
        assert_eq!(
            hall.items.as_deref(),
            Some(&[None, Some("key".to_string())][..])
        );
    }

    #[test]
    fn exit_entries_keep_document_order() {
        let record = map_document(json!({
            "rooms": [{ "name": "Hall", "exits": { "west": "A", "North ": "B", "north": "C" } }]
        }))
        .unwrap();
        let rooms = record.rooms.unwrap();
        let exits = rooms[0].as_ref().unwrap().exits.as_ref().unwrap();
        let directions: Vec<&str> = exits.iter().map(|(d, _)| d).collect();
        assert_eq!(directions, vec!["west", "North ", "north"]);
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(map_document(json!({ "rooms": "Hall" })).is_err());
        assert!(map_document(json!({ "rooms": [{ "name": "Hall", "items": "key" }] })).is_err());
        assert!(map_document(json!({ "rooms": [{ "name": "Hall", "exits": ["north"] }] })).is_err());
        assert!(map_document(json!({ "playerStart": 7 })).is_err());
        assert!(map_document(json!([])).is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let record = map_document(json!({ "title": "Cave", "rooms": [] })).unwrap();
        assert_eq!(record.rooms, Some(Vec::new()));
    }
}
