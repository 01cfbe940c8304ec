//! Built-in tag catalogs: the static vocabulary the schemas are built from.
//!
//! The hotel catalog is expressed as raw `{field, value}` definitions so it
//! round-trips through the same classification path as an externally
//! supplied JSON catalog. The room vocabulary is grouped into nine fixed
//! categories.

use serde_json::Value;

use crate::schema::{RoomSchema, TagFieldDef, TagSchema};

// ── Room vocabulary ──

pub const ROOM_TYPE_LAYOUT: &[&str] = &[
    "Studio Room",
    "Suite Room",
    "Family Room",
    "Connecting Rooms",
    "Twin Bed",
    "King Bed",
    "Queen Bed",
    "Sofa Bed",
    "Extra Bed Available",
    "Bunk Beds",
];

pub const VIEW_AMBIENCE: &[&str] = &[
    "Ocean View",
    "City View",
    "Mountain View",
    "Garden View",
    "Courtyard View",
    "Quiet Room",
    "High Floor",
    "Poolside Room",
    "Balcony Access",
    "Private Terrace",
];

pub const RECOMMENDED_FOR: &[&str] = &[
    "Perfect for Couples",
    "Great for Families",
    "Kids Friendly",
    "Pet Friendly",
    "Solo Travelers",
    "Business Travelers",
    "Friends Getaway",
    "Long Stay Travelers",
    "Honeymooners",
    "Remote Workers",
];

pub const FEATURES_AMENITIES: &[&str] = &[
    "Kitchenette",
    "Full Kitchen",
    "Washer & Dryer",
    "Workspace / Desk",
    "Fast WiFi",
    "Bathtub",
    "Jacuzzi / Hot Tub",
    "Rain Shower",
    "Smart TV",
    "In-Room Safe",
    "Fireplace",
    "Walk-in Closet",
];

pub const PLATFORM_SUGGESTIONS_PROMOTIONS: &[&str] = &[
    "Recommended",
    "Most Booked Room",
    "Trending Now",
    "Great Value",
    "Early Bird Deal",
    "Last Minute Deal",
    "Long Stay Discount",
    "Seasonal Favorite",
    "Exclusive to Our Platform",
    "Member-Only Price",
];

pub const ACCESSIBILITY_SAFETY: &[&str] = &[
    "Wheelchair Accessible",
    "Elevator Access",
    "Ground Floor",
    "Non-Smoking Room",
    "Smoke-Free Floor",
    "Accessible Bathroom",
    "Grab Bars in Shower",
    "Visual Alarms",
];

pub const BOOKING_CHECKIN_FLEXIBILITY: &[&str] = &[
    "Early Check-In Available",
    "Late Check-Out Available",
    "24-Hour Check-In",
    "Self Check-In",
    "Keyless Entry",
    "Instant Booking",
];

pub const LEISURE_LUXURY_ADDONS: &[&str] = &[
    "Private Pool",
    "Swim-Up Room",
    "Spa Access Included",
    "Rooftop Access",
    "Club Lounge Access",
    "Complimentary Breakfast",
    "Free Parking",
    "Airport Shuttle Included",
];

pub const LOCATION_TAGS: &[&str] = &[
    "City Center",
    "Near Beach",
    "Near Airport",
    "Near Convention Center",
    "Near Metro/Subway",
    "Walkable Neighborhood",
    "Quiet Neighborhood",
    "Historic District",
];

/// Room tag categories in prompt order, excluding "Basic Info".
pub const ROOM_CATEGORIES: &[(&str, &[&str])] = &[
    ("FEATURES_AMENITIES", FEATURES_AMENITIES),
    ("ROOM_TYPE_LAYOUT", ROOM_TYPE_LAYOUT),
    ("VIEW_AMBIENCE", VIEW_AMBIENCE),
    ("RECOMMENDED_FOR", RECOMMENDED_FOR),
    ("PLATFORM_SUGGESTIONS_PROMOTIONS", PLATFORM_SUGGESTIONS_PROMOTIONS),
    ("ACCESSIBILITY_SAFETY", ACCESSIBILITY_SAFETY),
    ("BOOKING_CHECKIN_FLEXIBILITY", BOOKING_CHECKIN_FLEXIBILITY),
    ("LOCATION_TAGS", LOCATION_TAGS),
    ("LEISURE_LUXURY_ADDONS", LEISURE_LUXURY_ADDONS),
];

// ── Hotel vocabulary ──

fn multi(field: &str, options: &[&str]) -> TagFieldDef {
    TagFieldDef {
        field: field.to_string(),
        value: options.iter().map(|s| Value::from(*s)).collect(),
    }
}

fn numeric(field: &str, options: &[i64]) -> TagFieldDef {
    TagFieldDef {
        field: field.to_string(),
        value: options.iter().map(|n| Value::from(*n)).collect(),
    }
}

fn flag(field: &str) -> TagFieldDef {
    TagFieldDef {
        field: field.to_string(),
        value: vec![Value::from("yes"), Value::from("no")],
    }
}

/// Raw hotel tag definitions. Fields with an all-numeric value array are
/// single-select numeric; a bare yes/no pair is a flag; everything else is
/// multi-select.
pub fn hotel_tag_defs() -> Vec<TagFieldDef> {
    vec![
        multi(
            "Property Type",
            &[
                "Boutique Hotel",
                "Resort",
                "City Hotel",
                "Bed & Breakfast",
                "Aparthotel",
                "Hostel",
                "Villa",
                "Guesthouse",
            ],
        ),
        numeric("Star Rating", &[1, 2, 3, 4, 5]),
        multi(
            "Property Amenities",
            &[
                "Swimming Pool",
                "Fitness Center",
                "Spa & Wellness",
                "Restaurant",
                "Bar / Lounge",
                "Rooftop Terrace",
                "Business Center",
                "Conference Rooms",
                "Laundry Service",
                "Concierge",
            ],
        ),
        multi(
            "Dining",
            &[
                "Breakfast Included",
                "All-Inclusive Available",
                "Room Service",
                "On-Site Restaurant",
                "Vegetarian Options",
                "Local Cuisine",
            ],
        ),
        multi(
            "Location Highlights",
            &[
                "City Center",
                "Near Beach",
                "Near Airport",
                "Historic District",
                "Shopping Nearby",
                "Nightlife Nearby",
                "Scenic Surroundings",
            ],
        ),
        multi(
            "Guest Vibe",
            &[
                "Romantic",
                "Family Friendly",
                "Business Ready",
                "Party Scene",
                "Peaceful Retreat",
                "Adventure Base",
            ],
        ),
        flag("Free WiFi"),
        flag("Pet Friendly"),
        flag("Free Parking"),
        flag("Airport Shuttle"),
    ]
}

/// The immutable schema pair the whole pipeline runs against. Built once at
/// startup and shared by reference.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub hotel: TagSchema,
    pub room: RoomSchema,
}

impl Catalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Catalog {
            hotel: TagSchema::from_defs(&hotel_tag_defs()),
            room: RoomSchema::from_options(ROOM_CATEGORIES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BASIC_INFO, FieldKind};

    #[test]
    fn builtin_hotel_schema_classifies_kinds() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.hotel.numeric_fields(), vec!["Star Rating"]);
        assert_eq!(
            catalog.hotel.yes_no_fields(),
            vec!["Free WiFi", "Pet Friendly", "Free Parking", "Airport Shuttle"]
        );

        let property_type = &catalog.hotel.fields()[0];
        assert_eq!(property_type.name, "Property Type");
        assert!(matches!(property_type.kind, FieldKind::StringSet { .. }));
    }

    #[test]
    fn builtin_room_schema_has_nine_categories() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.room.tag_fields().len(), 9);

        let labels = catalog.room.labels();
        assert_eq!(labels[0], BASIC_INFO);
        assert_eq!(labels.len(), 10);
    }
}
