//! Tag schema definitions: field specifications and their value kinds.
//!
//! A schema is an ordered list of fields, each constrained to one of three
//! kinds: a set of allowed strings (multi-select), a set of allowed numbers
//! (single-select), or a yes/no flag. Kind is inferred from the raw
//! `{field, value}` definition, so catalogs can be supplied as plain JSON.

use serde::Deserialize;
use serde_json::{Number, Value};

/// Raw schema entry as supplied in catalog definitions: a field name plus
/// its allowed-value array.
#[derive(Debug, Clone, Deserialize)]
pub struct TagFieldDef {
    pub field: String,
    pub value: Vec<Value>,
}

/// The three value kinds a tag field can take, carrying the allowed values
/// where the kind constrains them.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Multi-select from an allowed vocabulary. Normalizes to 0–3 unique
    /// members; empty means "not applicable".
    StringSet { options: Vec<String> },
    /// Single-select from an allowed numeric set. Normalizes to exactly one
    /// member, defaulting to the first (or 0 when the set is empty).
    NumberSet { options: Vec<Number> },
    /// Exactly "yes" or "no".
    YesNo,
}

/// One field of a tag schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Classify a raw definition into a typed field spec.
    ///
    /// An all-numeric value array is a NumberSet (vacuously so when empty),
    /// exactly the pair "yes"/"no" is a YesNo, anything else is a StringSet.
    /// Non-string elements of a StringSet vocabulary are dropped.
    pub fn classify(def: &TagFieldDef) -> Self {
        let kind = if def.value.iter().all(Value::is_number) {
            FieldKind::NumberSet {
                options: def
                    .value
                    .iter()
                    .filter_map(|v| v.as_number().cloned())
                    .collect(),
            }
        } else if is_yes_no(&def.value) {
            FieldKind::YesNo
        } else {
            FieldKind::StringSet {
                options: def
                    .value
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect(),
            }
        };

        FieldSpec {
            name: def.field.clone(),
            kind,
        }
    }
}

fn is_yes_no(values: &[Value]) -> bool {
    values.len() == 2
        && values.iter().any(|v| v.as_str() == Some("yes"))
        && values.iter().any(|v| v.as_str() == Some("no"))
}

/// Ordered hotel-level tag schema.
///
/// Field names are unique; enumeration order matters for prompt
/// construction but not for validity.
#[derive(Debug, Clone)]
pub struct TagSchema {
    fields: Vec<FieldSpec>,
}

impl TagSchema {
    /// Build a schema from raw definitions, classifying each field.
    pub fn from_defs(defs: &[TagFieldDef]) -> Self {
        TagSchema {
            fields: defs.iter().map(FieldSpec::classify).collect(),
        }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Field names in schema order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Names of the yes/no fields, in schema order.
    pub fn yes_no_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.kind == FieldKind::YesNo)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Names of the numeric fields, in schema order.
    pub fn numeric_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| matches!(f.kind, FieldKind::NumberSet { .. }))
            .map(|f| f.name.as_str())
            .collect()
    }
}

/// The distinguished free-text room field. Its value is a fixed-shape
/// record of `Name`/`Area`/`Description` strings, not a constrained set.
pub const BASIC_INFO: &str = "Basic Info";

/// Ordered room-level tag schema: the "Basic Info" record plus a list of
/// multi-select tag fields.
#[derive(Debug, Clone)]
pub struct RoomSchema {
    tag_fields: Vec<FieldSpec>,
}

impl RoomSchema {
    /// Build a room schema from `(label, options)` pairs. Every room tag
    /// field is a StringSet.
    pub fn from_options(categories: &[(&str, &[&str])]) -> Self {
        RoomSchema {
            tag_fields: categories
                .iter()
                .map(|(label, options)| FieldSpec {
                    name: (*label).to_string(),
                    kind: FieldKind::StringSet {
                        options: options.iter().map(|s| (*s).to_string()).collect(),
                    },
                })
                .collect(),
        }
    }

    /// The multi-select tag fields (excludes "Basic Info").
    pub fn tag_fields(&self) -> &[FieldSpec] {
        &self.tag_fields
    }

    /// All labels a room object must carry: "Basic Info" first, then the
    /// tag fields in schema order.
    pub fn labels(&self) -> Vec<&str> {
        std::iter::once(BASIC_INFO)
            .chain(self.tag_fields.iter().map(|f| f.name.as_str()))
            .collect()
    }
}
