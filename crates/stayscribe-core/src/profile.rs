//! Response types for a generated hotel profile.
//!
//! These are the schema-guaranteed shapes produced by normalization, never
//! the raw generation output. Serialized keys follow the wire contract:
//! camelCase at the top level, catalog labels inside tag maps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A normalized hotel tag value. Which variant applies is dictated by the
/// field's kind in the schema: multi-select fields carry a list, numeric
/// fields a single number, yes/no fields the literal "yes" or "no".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    Number(Number),
    Text(String),
    List(Vec<String>),
}

/// Normalized hotel-level tags, keyed by schema field name.
pub type TagMap = BTreeMap<String, TagValue>;

/// The free-text descriptor every room carries under "Basic Info".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BasicInfo {
    pub name: String,
    pub area: String,
    pub description: String,
}

/// One normalized room: the "Basic Info" record plus a list of allowed
/// tags per room category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    #[serde(rename = "Basic Info")]
    pub basic_info: BasicInfo,
    #[serde(flatten)]
    pub tags: BTreeMap<String, Vec<String>>,
}

/// The composite result for one request. `hotel_name` and `location` are
/// always copied verbatim from the request, never generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelProfile {
    pub hotel_name: String,
    pub location: String,
    pub description: String,
    pub hotel_tags: TagMap,
    pub rooms: Vec<RoomRecord>,
}

impl HotelProfile {
    /// Empty skeleton for the given request inputs. Every section is
    /// filled by the repair pipeline before the profile is returned.
    pub fn skeleton(hotel_name: &str, location: &str) -> Self {
        HotelProfile {
            hotel_name: hotel_name.to_string(),
            location: location.to_string(),
            description: String::new(),
            hotel_tags: TagMap::new(),
            rooms: Vec::new(),
        }
    }
}
