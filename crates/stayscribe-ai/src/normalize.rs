//! Schema enforcement over untrusted candidate values.
//!
//! Normalization is total: whatever the candidate looks like (absent,
//! wrong type, out-of-vocabulary, oversized), the output satisfies the
//! schema. Every branch matches the candidate's JSON variant explicitly.

use serde_json::{Number, Value};

use stayscribe_core::profile::{BasicInfo, RoomRecord, TagMap, TagValue};
use stayscribe_core::schema::{BASIC_INFO, FieldKind, RoomSchema, TagSchema};

/// Most allowed tags a multi-select field keeps.
const MAX_TAGS: usize = 3;
/// Bounds on the normalized room sequence.
const MIN_ROOMS: usize = 2;
const MAX_ROOMS: usize = 4;

/// Coerce a candidate tag object into a fully schema-valid tag map: every
/// field present, every value of the kind the schema dictates.
pub fn normalize_tags(candidate: Option<&Value>, schema: &TagSchema) -> TagMap {
    let map = match candidate {
        Some(Value::Object(map)) => Some(map),
        _ => None,
    };

    let mut tags = TagMap::new();
    for spec in schema.fields() {
        let value = map.and_then(|m| m.get(&spec.name));
        let normalized = match &spec.kind {
            FieldKind::StringSet { options } => {
                TagValue::List(normalize_string_set(value, options))
            }
            FieldKind::NumberSet { options } => {
                TagValue::Number(normalize_number(value, options))
            }
            FieldKind::YesNo => TagValue::Text(normalize_yes_no(value)),
        };
        tags.insert(spec.name.clone(), normalized);
    }
    tags
}

/// Coerce one candidate room object into a schema-valid record.
/// `position` is the record's 0-based index in its containing sequence and
/// drives the "Room N" name placeholder.
pub fn normalize_room(candidate: Option<&Value>, schema: &RoomSchema, position: usize) -> RoomRecord {
    let map = match candidate {
        Some(Value::Object(map)) => Some(map),
        _ => None,
    };

    let basic_info = normalize_basic_info(map.and_then(|m| m.get(BASIC_INFO)), position);

    let mut tags = std::collections::BTreeMap::new();
    for spec in schema.tag_fields() {
        let value = map.and_then(|m| m.get(&spec.name));
        // Room tag fields are always multi-select.
        let options: &[String] = match &spec.kind {
            FieldKind::StringSet { options } => options,
            _ => &[],
        };
        tags.insert(spec.name.clone(), normalize_string_set(value, options));
    }

    RoomRecord { basic_info, tags }
}

/// Coerce a candidate room sequence into 2-4 schema-valid records.
///
/// Extra candidates beyond 4 are dropped before normalization. An empty
/// sequence becomes exactly 2 placeholders; a single record is duplicated
/// to reach the minimum.
pub fn normalize_rooms(candidates: &[Value], schema: &RoomSchema) -> Vec<RoomRecord> {
    let mut rooms: Vec<RoomRecord> = candidates
        .iter()
        .take(MAX_ROOMS)
        .enumerate()
        .map(|(idx, candidate)| normalize_room(Some(candidate), schema, idx))
        .collect();

    if rooms.is_empty() {
        rooms = (0..MIN_ROOMS)
            .map(|idx| normalize_room(None, schema, idx))
            .collect();
    }
    while rooms.len() < MIN_ROOMS {
        rooms.push(rooms[0].clone());
    }

    rooms
}

// ── Per-kind policies ──

fn normalize_string_set(candidate: Option<&Value>, options: &[String]) -> Vec<String> {
    let raw: Vec<&str> = match candidate {
        Some(Value::String(s)) => vec![s.as_str()],
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    };

    let mut kept: Vec<String> = Vec::new();
    for item in raw {
        if options.iter().any(|o| o.as_str() == item) && !kept.iter().any(|k| k.as_str() == item) {
            kept.push(item.to_string());
            if kept.len() == MAX_TAGS {
                break;
            }
        }
    }
    kept
}

fn normalize_number(candidate: Option<&Value>, options: &[Number]) -> Number {
    if let Some(Value::Number(n)) = candidate
        && options.contains(n)
    {
        return n.clone();
    }
    options.first().cloned().unwrap_or_else(|| Number::from(0))
}

fn normalize_yes_no(candidate: Option<&Value>) -> String {
    match candidate {
        Some(Value::String(s)) if s.to_lowercase() == "yes" => "yes".to_string(),
        _ => "no".to_string(),
    }
}

fn normalize_basic_info(candidate: Option<&Value>, position: usize) -> BasicInfo {
    let map = match candidate {
        Some(Value::Object(map)) => Some(map),
        _ => None,
    };
    let string_field = |key: &str| -> Option<String> {
        map.and_then(|m| m.get(key))
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    BasicInfo {
        name: string_field("Name").unwrap_or_else(|| format!("Room {}", position + 1)),
        area: string_field("Area").unwrap_or_default(),
        description: string_field("Description").unwrap_or_default(),
    }
}
