//! Types for courier matching

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::courier::{CourierCandidate, CourierId, CourierLocation, CourierStatus};

/// Clamped score plus the reasons that produced it, in evaluation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchScore {
    /// Score in `0..=100`
    pub value: u8,
    /// One entry per scoring rule that fired
    pub reasons: Vec<String>,
}

/// A scored courier, carrying the display fields callers render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub courier_id: CourierId,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: CourierLocation,
    pub status: CourierStatus,
    pub score: u8,
    pub reasons: Vec<String>,
    /// Declared for display but never computed; always `None`.
    pub distance_from_origin: Option<Decimal>,
}

impl MatchResult {
    pub fn from_candidate(candidate: &CourierCandidate, score: MatchScore) -> Self {
        Self {
            courier_id: candidate.id.clone(),
            name: candidate.name.clone(),
            phone: candidate.phone.clone(),
            email: candidate.email.clone(),
            location: candidate.location.clone(),
            status: candidate.status,
            score: score.value,
            reasons: score.reasons,
            distance_from_origin: None,
        }
    }
}

/// Per-status counts over a suggestion list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub available: usize,
    pub busy: usize,
    pub offline: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: CourierStatus) {
        match status {
            CourierStatus::Available => self.available += 1,
            CourierStatus::Busy => self.busy += 1,
            CourierStatus::Offline => self.offline += 1,
        }
    }
}

/// Aggregate view over a ranked suggestion list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionSummary {
    pub total: usize,
    pub by_status: StatusCounts,
    /// Arithmetic mean of scores, `0.0` for an empty list
    pub average_score: f64,
    /// First entry of the list as given
    pub top_match: Option<MatchResult>,
    /// Counts keyed by city, or by country when the courier has no city
    pub by_location: BTreeMap<String, usize>,
}
