pub mod catalog;
pub mod profile;
pub mod schema;

pub use catalog::Catalog;
pub use profile::{BasicInfo, HotelProfile, RoomRecord, TagMap, TagValue};
pub use schema::{BASIC_INFO, FieldKind, FieldSpec, RoomSchema, TagFieldDef, TagSchema};
