//! Generation pipeline: prompt construction, lenient JSON repair, schema
//! normalization, and the repair orchestrator that ties them together.

pub mod client;
pub mod generate;
pub mod normalize;
pub mod prompt;
pub mod repair;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GenError, GroqClient, TextGenerator};
pub use generate::{ProfileError, ProfileGenerator};
