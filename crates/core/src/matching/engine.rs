//! Filtering, ranking and summarizing of courier candidates

use tracing::debug;

use crate::domain::courier::CourierCandidate;
use crate::domain::shipment::{ServiceType, ShipmentRequirement};

use super::scoring::CourierMatchScorer;
use super::types::{MatchResult, StatusCounts, SuggestionSummary};
use super::MIN_MATCH_SCORE;

/// Produces ranked courier suggestions for a shipment
#[derive(Debug, Clone, Default)]
pub struct CourierRanker {
    scorer: CourierMatchScorer,
}

impl CourierRanker {
    pub fn new() -> Self {
        Self { scorer: CourierMatchScorer::new() }
    }

    /// Score one candidate; `None` when the requirement is not an OBC shipment.
    pub fn score(
        &self,
        candidate: &CourierCandidate,
        requirement: &ShipmentRequirement,
    ) -> Option<MatchResult> {
        self.scorer
            .score(candidate, requirement)
            .map(|score| MatchResult::from_candidate(candidate, score))
    }

    /// Rank active candidates by descending score, dropping anything below
    /// [`MIN_MATCH_SCORE`]. Equal scores keep their input order.
    pub fn suggest(
        &self,
        candidates: &[CourierCandidate],
        requirement: &ShipmentRequirement,
    ) -> Vec<MatchResult> {
        if requirement.service_type != ServiceType::Obc {
            debug!(
                event_name = "matching.suggest.not_applicable",
                service_type = %requirement.service_type,
                "suggestions only apply to OBC shipments"
            );
            return Vec::new();
        }

        let mut results: Vec<MatchResult> = candidates
            .iter()
            .filter(|candidate| candidate.active)
            .filter_map(|candidate| self.score(candidate, requirement))
            .filter(|result| result.score >= MIN_MATCH_SCORE)
            .collect();

        // sort_by is stable, which keeps ties in roster order.
        results.sort_by(|a, b| b.score.cmp(&a.score));

        debug!(
            event_name = "matching.suggest.completed",
            candidates = candidates.len(),
            suggestions = results.len(),
            top_score = results.first().map(|result| result.score),
            "courier suggestions ranked"
        );

        results
    }

    pub fn summarize(&self, results: &[MatchResult]) -> SuggestionSummary {
        let mut by_status = StatusCounts::default();
        let mut by_location = std::collections::BTreeMap::new();
        let mut score_total: u64 = 0;

        for result in results {
            by_status.record(result.status);
            *by_location.entry(result.location.label().to_string()).or_insert(0) += 1;
            score_total += u64::from(result.score);
        }

        let average_score =
            if results.is_empty() { 0.0 } else { score_total as f64 / results.len() as f64 };

        SuggestionSummary {
            total: results.len(),
            by_status,
            average_score,
            top_match: results.first().cloned(),
            by_location,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::domain::courier::{
        CourierId, CourierLocation, CourierSkills, CourierStatus,
    };

    fn candidate(id: &str, city: Option<&str>, status: CourierStatus) -> CourierCandidate {
        CourierCandidate {
            id: CourierId(id.to_string()),
            name: format!("Courier {id}"),
            phone: None,
            email: None,
            location: CourierLocation {
                country: "Germany".to_string(),
                country_code: "DE".to_string(),
                city: city.map(str::to_string),
            },
            skills: CourierSkills {
                service_types: BTreeSet::from([ServiceType::Obc]),
                ..CourierSkills::default()
            },
            status,
            active: true,
            online: false,
        }
    }

    fn requirement() -> ShipmentRequirement {
        ShipmentRequirement::new("Frankfurt (FRA)", "Germany", "DE", ServiceType::Obc)
    }

    fn ids(results: &[MatchResult]) -> Vec<&str> {
        results.iter().map(|result| result.courier_id.0.as_str()).collect()
    }

    #[test]
    fn test_suggest_orders_by_score_descending() {
        let roster = vec![
            candidate("munich", Some("Munich"), CourierStatus::Available),
            candidate("frankfurt", Some("Frankfurt"), CourierStatus::Available),
            candidate("offline", Some("Frankfurt"), CourierStatus::Offline),
        ];

        let results = CourierRanker::new().suggest(&roster, &requirement());
        assert_eq!(ids(&results), vec!["frankfurt", "offline", "munich"]);
        assert_eq!(results[0].score, 95);
        assert_eq!(results[1].score, 75);
        assert_eq!(results[2].score, 65);
    }

    #[test]
    fn test_suggest_keeps_input_order_for_ties() {
        let roster = vec![
            candidate("b", Some("Frankfurt"), CourierStatus::Available),
            candidate("a", Some("Frankfurt"), CourierStatus::Available),
            candidate("c", Some("Frankfurt"), CourierStatus::Available),
        ];

        let results = CourierRanker::new().suggest(&roster, &requirement());
        assert_eq!(ids(&results), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_suggest_drops_inactive_and_weak_matches() {
        let mut inactive = candidate("inactive", Some("Frankfurt"), CourierStatus::Available);
        inactive.active = false;

        let mut weak = candidate("weak", None, CourierStatus::Available);
        weak.location.country = "Spain".to_string();
        weak.location.country_code = "ES".to_string();
        // 15 (service) + 10 (available) = 25 clears the floor
        let mut below_floor = weak.clone();
        below_floor.id = CourierId("below".to_string());
        below_floor.status = CourierStatus::Busy;
        // 15 (service) + 0 (busy) = 15 does not

        let results = CourierRanker::new().suggest(&[inactive, weak, below_floor], &requirement());
        assert_eq!(ids(&results), vec!["weak"]);
        assert_eq!(results[0].score, 25);
    }

    #[test]
    fn test_suggest_returns_nothing_for_nfo() {
        let roster = vec![candidate("frankfurt", Some("Frankfurt"), CourierStatus::Available)];
        let nfo = ShipmentRequirement::new("Frankfurt", "Germany", "DE", ServiceType::Nfo);
        assert!(CourierRanker::new().suggest(&roster, &nfo).is_empty());
    }

    #[test]
    fn test_suggest_with_empty_roster_is_empty() {
        assert!(CourierRanker::new().suggest(&[], &requirement()).is_empty());
    }

    #[test]
    fn test_summarize_counts_and_average() {
        let roster = vec![
            candidate("frankfurt", Some("Frankfurt"), CourierStatus::Available),
            candidate("busy", Some("Frankfurt"), CourierStatus::Busy),
            candidate("countryside", None, CourierStatus::Offline),
        ];
        let ranker = CourierRanker::new();
        let results = ranker.suggest(&roster, &requirement());
        let summary = ranker.summarize(&results);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.by_status, StatusCounts { available: 1, busy: 1, offline: 1 });
        // 95 + 85 + 45
        assert!((summary.average_score - 75.0).abs() < f64::EPSILON);
        assert_eq!(summary.top_match.as_ref().map(|top| top.score), Some(95));
        assert_eq!(summary.by_location.get("Frankfurt"), Some(&2));
        assert_eq!(summary.by_location.get("Germany"), Some(&1));
    }

    #[test]
    fn test_summarize_empty_list() {
        let summary = CourierRanker::new().summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_score, 0.0);
        assert!(summary.top_match.is_none());
        assert!(summary.by_location.is_empty());
    }
}
