//! Courier matching
//!
//! Scores courier candidates against an OBC shipment requirement with a fixed additive
//! heuristic and ranks the results. Point values are kept exactly as tuned; they are not
//! derived from any model.

mod engine;
mod location;
mod scoring;
mod types;

pub use engine::CourierRanker;
pub use location::{city_for_airport, extract_city};
pub use scoring::CourierMatchScorer;
pub use types::*;

pub const COUNTRY_CODE_POINTS: i32 = 40;
pub const COUNTRY_NAME_POINTS: i32 = 35;
pub const CITY_EXACT_POINTS: i32 = 30;
pub const CITY_NEAR_POINTS: i32 = 20;
pub const SERVICE_TYPE_POINTS: i32 = 15;
pub const AVAILABLE_POINTS: i32 = 10;
pub const BUSY_POINTS: i32 = 0;
pub const OFFLINE_POINTS: i32 = -10;
pub const CAPACITY_POINTS: i32 = 10;
pub const CAPACITY_SHORTFALL_POINTS: i32 = -5;
pub const LANGUAGE_POINTS: i32 = 5;
pub const CERTIFICATION_POINTS: i32 = 5;
pub const ACTIVE_ONLINE_POINTS: i32 = 5;

pub const MIN_SCORE: u8 = 0;
pub const MAX_SCORE: u8 = 100;

/// Results below this are not meaningful matches and are never suggested
pub const MIN_MATCH_SCORE: u8 = 20;
