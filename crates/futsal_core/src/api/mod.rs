pub mod json_api;

pub use json_api::{simulate_match, simulate_match_json, MatchRequest, SCHEMA_VERSION};
