//! Prompt construction for the four generation intents.
//!
//! Each intent is a template with the schema's field lists and allowed
//! options substituted in as JSON, so the service sees exactly the
//! vocabulary the normalizer will later enforce.

use serde_json::{Map, Value};

use stayscribe_core::schema::{FieldKind, FieldSpec, RoomSchema, TagSchema};

/// Full composite-profile request: description, hotel tags, and rooms in
/// one JSON object.
pub fn composite_prompt(hotel: &str, location: &str, schema: &TagSchema, rooms: &RoomSchema) -> String {
    format!(
        "You are a travel assistant.\n\
         \n\
         Return ONLY a single minified JSON object with exactly these top-level keys: \
         \"hotelName\", \"location\", \"description\", \"hotelTags\", \"rooms\".\n\
         - No markdown, no code fences, no pre/post text.\n\
         - No comments.\n\
         - No trailing commas.\n\
         - Do not include any extra keys at top level or nested.\n\
         - description must be 150-200 words and engaging.\n\
         \n\
         Top-level fields:\n\
         - hotelName must equal the input hotel exactly.\n\
         - location must equal the input location exactly.\n\
         \n\
         hotelTags schema:\n\
         - hotelTags must be an object with exactly these keys:\n\
         {tag_fields}\n\
         - Use only these allowed options for each key (keys correspond to fields):\n\
         {tag_options}\n\
         - For keys in {numeric_fields}: output a single number from the allowed options.\n\
         - For keys in {yes_no_fields}: output \"yes\" or \"no\".\n\
         - For all other keys: output an array of strings, selecting a plausible subset (1-3) \
         from the allowed options. Use [] if not applicable or unknown.\n\
         \n\
         Rooms schema:\n\
         - List this hotel's rooms with accurate, exact names.\n\
         - Each room item must be an object that includes keys exactly matching these labels:\n\
         {room_labels}\n\
         - Use these allowed options when applicable (keys correspond to labels):\n\
         {room_options}\n\
         \n\
         Rules for room values:\n\
         - For key \"Basic Info\": the value must be an object \
         {{\"Name\":\"<name>\", \"Area\":\"<area (e.g., 350 sq ft)>\", \"Description\":\"<short description>\"}}.\n\
         - For other keys: value must be an array of strings; choose a plausible subset of the \
         allowed options. Use [] if not applicable or unknown.\n\
         \n\
         Input:\n\
         hotel: {hotel}\n\
         location: {location}\n",
        tag_fields = field_names_json(schema),
        tag_options = tag_options_json(schema),
        numeric_fields = names_json(&schema.numeric_fields()),
        yes_no_fields = names_json(&schema.yes_no_fields()),
        room_labels = names_json(&rooms.labels()),
        room_options = room_options_json(rooms),
        hotel = hotel,
        location = location,
    )
}

/// Narrative-only request: one plain-text paragraph, no JSON.
pub fn description_prompt(hotel: &str, location: &str) -> String {
    format!(
        "You are a travel assistant.\n\
         \n\
         Return ONLY a single plain text paragraph describing the hotel \"{hotel}\" in \"{location}\".\n\
         - No JSON, no markdown, no headings.\n\
         - 150-200 words.\n\
         - Engaging and informative; mention style, vibe, amenities, location highlights, and ideal guests.\n"
    )
}

/// Rooms-only request: a bare JSON array of 2-4 room objects.
pub fn rooms_prompt(hotel: &str, location: &str, rooms: &RoomSchema) -> String {
    format!(
        "You are a travel assistant.\n\
         \n\
         Return ONLY a single minified JSON array of 2-4 room objects. No top-level key, just the array.\n\
         - No markdown, no code fences, no pre/post text.\n\
         - Do not include comments or extra fields.\n\
         - Never return an empty array. Always include 2-4 rooms.\n\
         - Output must be strictly a JSON array, not wrapped in any text.\n\
         \n\
         Each room object must include keys exactly matching these labels:\n\
         {room_labels}\n\
         \n\
         Rules:\n\
         - For \"Basic Info\": value must be an object \
         {{\"Name\":\"<name>\", \"Area\":\"<area (e.g., 350 sq ft)>\", \"Description\":\"<short description>\"}}.\n\
         - For all other keys: value must be an array of strings selecting a plausible subset \
         from these allowed options:\n\
         {room_options}\n\
         - Use [] if a key is not applicable or unknown.\n\
         \n\
         Context:\n\
         hotel: {hotel}\n\
         location: {location}\n",
        room_labels = names_json(&rooms.labels()),
        room_options = room_options_json(rooms),
        hotel = hotel,
        location = location,
    )
}

/// Hotel-tags-only request: a bare JSON object covering the tag schema.
pub fn hotel_tags_prompt(hotel: &str, location: &str, schema: &TagSchema) -> String {
    format!(
        "You are a travel assistant.\n\
         \n\
         Return ONLY a single minified JSON object with exactly these keys:\n\
         {tag_fields}\n\
         - Use only these allowed options for each key (keys correspond to fields):\n\
         {tag_options}\n\
         - For keys in {numeric_fields}: output a single number from the allowed options.\n\
         - For keys in {yes_no_fields}: output \"yes\" or \"no\".\n\
         - For all other keys: output an array of strings, selecting a plausible subset (1-3) \
         from the allowed options. Use [] if not applicable or unknown.\n\
         \n\
         Context:\n\
         hotel: {hotel}\n\
         location: {location}\n",
        tag_fields = field_names_json(schema),
        tag_options = tag_options_json(schema),
        numeric_fields = names_json(&schema.numeric_fields()),
        yes_no_fields = names_json(&schema.yes_no_fields()),
        hotel = hotel,
        location = location,
    )
}

// ── JSON substitution helpers ──

fn names_json(names: &[&str]) -> String {
    Value::from(names.iter().map(|n| (*n).to_string()).collect::<Vec<_>>()).to_string()
}

fn field_names_json(schema: &TagSchema) -> String {
    names_json(&schema.field_names())
}

fn allowed_values(spec: &FieldSpec) -> Value {
    match &spec.kind {
        FieldKind::StringSet { options } => Value::from(options.clone()),
        FieldKind::NumberSet { options } => {
            Value::Array(options.iter().cloned().map(Value::Number).collect())
        }
        FieldKind::YesNo => Value::from(vec!["yes".to_string(), "no".to_string()]),
    }
}

fn tag_options_json(schema: &TagSchema) -> String {
    let mut map = Map::new();
    for spec in schema.fields() {
        map.insert(spec.name.clone(), allowed_values(spec));
    }
    Value::Object(map).to_string()
}

fn room_options_json(rooms: &RoomSchema) -> String {
    let mut map = Map::new();
    for spec in rooms.tag_fields() {
        map.insert(spec.name.clone(), allowed_values(spec));
    }
    Value::Object(map).to_string()
}
