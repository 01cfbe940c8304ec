//! The repair pipeline that turns one request into a schema-valid profile.
//!
//! One primary composite attempt, then up to three targeted follow-ups for
//! sections that came back missing or unusable. Every generation or parse
//! failure is absorbed here; normalization runs unconditionally at the end
//! so the returned profile is valid even when every attempt failed.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use stayscribe_core::schema::TagSchema;
use stayscribe_core::{Catalog, HotelProfile};

use crate::client::TextGenerator;
use crate::normalize::{normalize_rooms, normalize_tags};
use crate::prompt;
use crate::repair;

/// Descriptions shorter than this are treated as unusable.
const MIN_DESCRIPTION_CHARS: usize = 50;
/// Fewer candidate rooms than this triggers the rooms follow-up.
const MIN_ROOM_CANDIDATES: usize = 2;
/// Key the generator tends to wrap a bare room array under.
const ROOMS_KEY: &str = "rooms";

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("hotel name must not be empty")]
    MissingHotelName,
    #[error("location must not be empty")]
    MissingLocation,
}

/// Profile generator: a text-generation client plus the immutable schema
/// catalog.
pub struct ProfileGenerator<G> {
    generator: G,
    catalog: Arc<Catalog>,
}

impl<G: TextGenerator> ProfileGenerator<G> {
    pub fn new(generator: G, catalog: Arc<Catalog>) -> Self {
        ProfileGenerator { generator, catalog }
    }

    /// Produce a schema-valid profile for the given hotel and location.
    ///
    /// The only failure is invalid input; service and parse failures all
    /// degrade to defaults.
    pub async fn generate(
        &self,
        hotel_name: &str,
        location: &str,
    ) -> Result<HotelProfile, ProfileError> {
        let hotel_name = hotel_name.trim();
        let location = location.trim();
        if hotel_name.is_empty() {
            return Err(ProfileError::MissingHotelName);
        }
        if location.is_empty() {
            return Err(ProfileError::MissingLocation);
        }

        info!(hotel = %hotel_name, location = %location, "generating hotel profile");

        let composite = prompt::composite_prompt(
            hotel_name,
            location,
            &self.catalog.hotel,
            &self.catalog.room,
        );
        let primary_raw = match self.generator.generate(&composite).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "composite generation failed");
                String::new()
            }
        };

        let candidate = match repair::parse_object(&primary_raw) {
            Some(map) => map,
            None => {
                warn!("composite response unusable, rebuilding sections individually");
                Default::default()
            }
        };

        // Name and location always come from the request, never the service.
        let mut profile = HotelProfile::skeleton(hotel_name, location);

        if let Some(Value::String(desc)) = candidate.get("description") {
            profile.description = desc.clone();
        }
        if profile.description.trim().len() < MIN_DESCRIPTION_CHARS {
            match self
                .generator
                .generate(&prompt::description_prompt(hotel_name, location))
                .await
            {
                Ok(text) => profile.description = text.trim().to_string(),
                Err(e) => {
                    warn!(error = %e, "description generation failed, keeping raw primary text");
                    profile.description = primary_raw.trim().to_string();
                }
            }
        }
        if profile.description.is_empty() {
            profile.description = format!("{hotel_name} is a hotel in {location}.");
        }

        let mut room_candidates: Vec<Value> = match candidate.get(ROOMS_KEY) {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        };
        if room_candidates.len() < MIN_ROOM_CANDIDATES {
            match self
                .generator
                .generate(&prompt::rooms_prompt(hotel_name, location, &self.catalog.room))
                .await
            {
                Ok(text) => match repair::parse_array(&text, ROOMS_KEY) {
                    Some(items) => room_candidates = items,
                    None => warn!(
                        kept = room_candidates.len(),
                        "rooms response unusable, keeping existing candidates"
                    ),
                },
                Err(e) => warn!(error = %e, "rooms generation failed"),
            }
        }

        let mut tag_candidate = candidate.get("hotelTags").cloned();
        if needs_tag_followup(tag_candidate.as_ref(), &self.catalog.hotel) {
            match self
                .generator
                .generate(&prompt::hotel_tags_prompt(hotel_name, location, &self.catalog.hotel))
                .await
            {
                Ok(text) => match repair::parse_object(&text) {
                    Some(map) => tag_candidate = Some(Value::Object(map)),
                    None => warn!("hotel tags response unusable, keeping existing candidate"),
                },
                Err(e) => warn!(error = %e, "hotel tag generation failed"),
            }
        }

        // Unconditional final gate: whatever the candidates look like, the
        // profile leaves here schema-valid.
        profile.rooms = normalize_rooms(&room_candidates, &self.catalog.room);
        profile.hotel_tags = normalize_tags(tag_candidate.as_ref(), &self.catalog.hotel);

        info!(rooms = profile.rooms.len(), "profile assembled");
        Ok(profile)
    }
}

/// A tag candidate warrants a follow-up when it is missing, not an object,
/// empty, or shares no keys with the schema.
fn needs_tag_followup(candidate: Option<&Value>, schema: &TagSchema) -> bool {
    match candidate {
        Some(Value::Object(map)) => {
            map.is_empty() || schema.fields().iter().all(|f| !map.contains_key(&f.name))
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use crate::client::GenError;
    use stayscribe_core::TagValue;

    /// Generator that plays back a fixed script of responses, then reports
    /// empty completions.
    struct ScriptedGenerator {
        responses: Mutex<VecDeque<Result<String, GenError>>>,
    }

    impl ScriptedGenerator {
        fn new(responses: Vec<Result<String, GenError>>) -> Self {
            ScriptedGenerator {
                responses: Mutex::new(responses.into()),
            }
        }

        fn always_failing() -> Self {
            ScriptedGenerator::new(Vec::new())
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenError> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GenError::EmptyCompletion))
        }
    }

    fn generator(script: Vec<Result<String, GenError>>) -> ProfileGenerator<ScriptedGenerator> {
        ProfileGenerator::new(ScriptedGenerator::new(script), Arc::new(Catalog::builtin()))
    }

    fn api_error() -> Result<String, GenError> {
        Err(GenError::Api {
            status: 500,
            body: "upstream unavailable".into(),
        })
    }

    const LONG_DESCRIPTION: &str = "A breezy seaside hideaway with airy rooms, a saltwater pool, \
        and a terrace restaurant overlooking the harbour promenade.";

    #[tokio::test]
    async fn rejects_blank_inputs_before_generating() {
        let pipeline = generator(vec![]);
        assert!(matches!(
            pipeline.generate("", "Coastal Town").await,
            Err(ProfileError::MissingHotelName)
        ));
        assert!(matches!(
            pipeline.generate("Blue Lagoon Inn", "   ").await,
            Err(ProfileError::MissingLocation)
        ));
    }

    #[tokio::test]
    async fn total_service_failure_still_yields_valid_profile() {
        let pipeline = ProfileGenerator::new(
            ScriptedGenerator::always_failing(),
            Arc::new(Catalog::builtin()),
        );
        let profile = pipeline
            .generate("Blue Lagoon Inn", "Coastal Town")
            .await
            .unwrap();

        assert_eq!(profile.hotel_name, "Blue Lagoon Inn");
        assert_eq!(profile.location, "Coastal Town");
        assert!(!profile.description.is_empty());

        let catalog = Catalog::builtin();
        assert_eq!(profile.hotel_tags.len(), catalog.hotel.fields().len());
        assert_eq!(profile.hotel_tags["Star Rating"], TagValue::Number(1.into()));
        assert_eq!(profile.hotel_tags["Free WiFi"], TagValue::Text("no".into()));

        assert_eq!(profile.rooms.len(), 2);
        assert_eq!(profile.rooms[0].basic_info.name, "Room 1");
        assert_eq!(profile.rooms[1].basic_info.name, "Room 2");
    }

    #[tokio::test]
    async fn request_inputs_override_generated_name_and_location() {
        let primary = json!({
            "hotelName": "Totally Different Hotel",
            "location": "Elsewhere",
            "description": LONG_DESCRIPTION,
            "hotelTags": {"Star Rating": 4},
            "rooms": [
                {"Basic Info": {"Name": "Garden Room"}},
                {"Basic Info": {"Name": "Sea Suite"}}
            ]
        });
        let pipeline = generator(vec![Ok(primary.to_string())]);
        let profile = pipeline
            .generate("Blue Lagoon Inn", "Coastal Town")
            .await
            .unwrap();

        assert_eq!(profile.hotel_name, "Blue Lagoon Inn");
        assert_eq!(profile.location, "Coastal Town");
        assert_eq!(profile.description, LONG_DESCRIPTION);
        assert_eq!(profile.hotel_tags["Star Rating"], TagValue::Number(4.into()));
        assert_eq!(profile.rooms[1].basic_info.name, "Sea Suite");
    }

    #[tokio::test]
    async fn short_description_triggers_followup() {
        let primary = json!({
            "description": "Too short.",
            "hotelTags": {"Star Rating": 3},
            "rooms": [{"Basic Info": {"Name": "A"}}, {"Basic Info": {"Name": "B"}}]
        });
        let pipeline = generator(vec![
            Ok(primary.to_string()),
            Ok(format!("  {LONG_DESCRIPTION}  ")),
        ]);
        let profile = pipeline
            .generate("Blue Lagoon Inn", "Coastal Town")
            .await
            .unwrap();

        assert_eq!(profile.description, LONG_DESCRIPTION);
    }

    #[tokio::test]
    async fn description_falls_back_to_raw_primary_text() {
        let prose = "The Blue Lagoon Inn is a charming waterfront property with \
                     friendly staff and generous breakfasts for every guest.";
        // Primary output is unusable as JSON; the description follow-up also
        // fails, so the raw primary text is adopted.
        let pipeline = generator(vec![
            Ok(format!("  {prose}  ")),
            api_error(),
            api_error(),
            api_error(),
        ]);
        let profile = pipeline
            .generate("Blue Lagoon Inn", "Coastal Town")
            .await
            .unwrap();

        assert_eq!(profile.description, prose);
        assert_eq!(profile.rooms.len(), 2);
    }

    #[tokio::test]
    async fn rooms_followup_replaces_sparse_candidates() {
        let primary = json!({
            "description": LONG_DESCRIPTION,
            "hotelTags": {"Star Rating": 5},
            "rooms": [{"Basic Info": {"Name": "Lonely Room"}}]
        });
        let rooms_reply = "```json\n".to_string()
            + &json!([
                {"Basic Info": {"Name": "Garden Room"}},
                {"Basic Info": {"Name": "Sea Suite"}},
                {"Basic Info": {"Name": "Loft"}}
            ])
            .to_string()
            + "\n```";
        let pipeline = generator(vec![Ok(primary.to_string()), Ok(rooms_reply)]);
        let profile = pipeline
            .generate("Blue Lagoon Inn", "Coastal Town")
            .await
            .unwrap();

        let names: Vec<&str> = profile
            .rooms
            .iter()
            .map(|r| r.basic_info.name.as_str())
            .collect();
        assert_eq!(names, vec!["Garden Room", "Sea Suite", "Loft"]);
    }

    #[tokio::test]
    async fn failed_rooms_followup_keeps_existing_candidate() {
        let primary = json!({
            "description": LONG_DESCRIPTION,
            "hotelTags": {"Star Rating": 5},
            "rooms": [{"Basic Info": {"Name": "Lonely Room"}}]
        });
        let pipeline = generator(vec![Ok(primary.to_string()), api_error()]);
        let profile = pipeline
            .generate("Blue Lagoon Inn", "Coastal Town")
            .await
            .unwrap();

        // The single survivor is duplicated up to the minimum.
        assert_eq!(profile.rooms.len(), 2);
        assert_eq!(profile.rooms[0].basic_info.name, "Lonely Room");
        assert_eq!(profile.rooms[0], profile.rooms[1]);
    }

    #[tokio::test]
    async fn tag_followup_runs_when_candidate_shares_no_schema_keys() {
        let primary = json!({
            "description": LONG_DESCRIPTION,
            "hotelTags": {"Unrelated Key": "x"},
            "rooms": [{"Basic Info": {"Name": "A"}}, {"Basic Info": {"Name": "B"}}]
        });
        let tags_reply = json!({
            "Star Rating": 5,
            "Pet Friendly": "yes",
            "Dining": ["Room Service", "Local Cuisine"]
        });
        let pipeline = generator(vec![Ok(primary.to_string()), Ok(tags_reply.to_string())]);
        let profile = pipeline
            .generate("Blue Lagoon Inn", "Coastal Town")
            .await
            .unwrap();

        assert_eq!(profile.hotel_tags["Star Rating"], TagValue::Number(5.into()));
        assert_eq!(profile.hotel_tags["Pet Friendly"], TagValue::Text("yes".into()));
        assert_eq!(
            profile.hotel_tags["Dining"],
            TagValue::List(vec!["Room Service".into(), "Local Cuisine".into()])
        );
    }

    #[tokio::test]
    async fn partial_tag_candidate_skips_followup() {
        // One schema key present: no follow-up, remaining fields default.
        let primary = json!({
            "description": LONG_DESCRIPTION,
            "hotelTags": {"Star Rating": 3},
            "rooms": [{"Basic Info": {"Name": "A"}}, {"Basic Info": {"Name": "B"}}]
        });
        // Script contains no tag reply; a follow-up would surface as the
        // EmptyCompletion default being normalized away anyway, so assert
        // the primary's value survives.
        let pipeline = generator(vec![Ok(primary.to_string())]);
        let profile = pipeline
            .generate("Blue Lagoon Inn", "Coastal Town")
            .await
            .unwrap();

        assert_eq!(profile.hotel_tags["Star Rating"], TagValue::Number(3.into()));
        assert_eq!(profile.hotel_tags["Free WiFi"], TagValue::Text("no".into()));
    }

    #[tokio::test]
    async fn inputs_are_trimmed_before_use() {
        let pipeline = ProfileGenerator::new(
            ScriptedGenerator::always_failing(),
            Arc::new(Catalog::builtin()),
        );
        let profile = pipeline
            .generate("  Blue Lagoon Inn  ", " Coastal Town ")
            .await
            .unwrap();
        assert_eq!(profile.hotel_name, "Blue Lagoon Inn");
        assert_eq!(profile.location, "Coastal Town");
    }
}
