//! Point-based scoring of one courier against one shipment requirement

use crate::domain::courier::{CourierCandidate, CourierStatus};
use crate::domain::shipment::{ServiceType, ShipmentRequirement};

use super::location::extract_city;
use super::types::MatchScore;
use super::{
    ACTIVE_ONLINE_POINTS, AVAILABLE_POINTS, BUSY_POINTS, CAPACITY_POINTS,
    CAPACITY_SHORTFALL_POINTS, CERTIFICATION_POINTS, CITY_EXACT_POINTS, CITY_NEAR_POINTS,
    COUNTRY_CODE_POINTS, COUNTRY_NAME_POINTS, LANGUAGE_POINTS, MAX_SCORE, MIN_SCORE,
    OFFLINE_POINTS, SERVICE_TYPE_POINTS,
};

/// Accumulates points and reasons in rule order
#[derive(Debug, Default)]
struct Tally {
    points: i32,
    reasons: Vec<String>,
}

impl Tally {
    fn add(&mut self, points: i32, reason: String) {
        self.points += points;
        self.reasons.push(reason);
    }

    fn finish(self) -> MatchScore {
        MatchScore { value: clamp_score(self.points), reasons: self.reasons }
    }
}

fn clamp_score(raw: i32) -> u8 {
    // Clamped into MIN_SCORE..=MAX_SCORE, so the cast cannot truncate.
    raw.clamp(i32::from(MIN_SCORE), i32::from(MAX_SCORE)) as u8
}

/// Scores couriers for on-board courier shipments
#[derive(Debug, Clone, Copy, Default)]
pub struct CourierMatchScorer;

impl CourierMatchScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score `candidate` for `requirement`.
    ///
    /// Returns `None` when the requirement is not an OBC shipment: scoring does not apply.
    pub fn score(
        &self,
        candidate: &CourierCandidate,
        requirement: &ShipmentRequirement,
    ) -> Option<MatchScore> {
        if requirement.service_type != ServiceType::Obc {
            return None;
        }

        let mut tally = Tally::default();
        self.score_country(candidate, requirement, &mut tally);
        self.score_city(candidate, requirement, &mut tally);
        self.score_service_type(candidate, requirement, &mut tally);
        self.score_status(candidate, &mut tally);
        self.score_capacity(candidate, requirement, &mut tally);
        self.score_languages(candidate, requirement, &mut tally);
        self.score_certifications(candidate, &mut tally);

        if candidate.active && candidate.online {
            tally.add(ACTIVE_ONLINE_POINTS, "Online now".to_string());
        }

        Some(tally.finish())
    }

    fn score_country(
        &self,
        candidate: &CourierCandidate,
        requirement: &ShipmentRequirement,
        tally: &mut Tally,
    ) {
        let location = &candidate.location;
        let reason = || format!("Based in {}", location.country);

        if same_text(&location.country_code, &requirement.origin_country_code) {
            tally.add(COUNTRY_CODE_POINTS, reason());
        } else if same_text(&location.country, &requirement.origin_country) {
            tally.add(COUNTRY_NAME_POINTS, reason());
        }
    }

    fn score_city(
        &self,
        candidate: &CourierCandidate,
        requirement: &ShipmentRequirement,
        tally: &mut Tally,
    ) {
        let Some(city) = candidate.location.city.as_deref().map(str::trim) else {
            return;
        };
        if city.is_empty() {
            return;
        }

        let wanted = extract_city(&requirement.origin_city).to_lowercase();
        let city_lower = city.to_lowercase();

        if wanted == city_lower {
            tally.add(CITY_EXACT_POINTS, format!("Located in {city}"));
        } else if wanted.contains(&city_lower) {
            tally.add(CITY_NEAR_POINTS, format!("Near {city}"));
        }
    }

    fn score_service_type(
        &self,
        candidate: &CourierCandidate,
        requirement: &ShipmentRequirement,
        tally: &mut Tally,
    ) {
        if candidate.skills.supports(requirement.service_type) {
            tally.add(
                SERVICE_TYPE_POINTS,
                format!("Experienced in {} service", requirement.service_type),
            );
        }
    }

    fn score_status(&self, candidate: &CourierCandidate, tally: &mut Tally) {
        match candidate.status {
            CourierStatus::Available => tally.add(AVAILABLE_POINTS, "Currently available".into()),
            CourierStatus::Busy => tally.add(BUSY_POINTS, "Currently busy".into()),
            CourierStatus::Offline => tally.add(OFFLINE_POINTS, "Currently offline".into()),
        }
    }

    fn score_capacity(
        &self,
        candidate: &CourierCandidate,
        requirement: &ShipmentRequirement,
        tally: &mut Tally,
    ) {
        let (Some(required), Some(capacity)) =
            (requirement.weight, candidate.skills.max_carry_weight)
        else {
            return;
        };

        let capacity_kg = capacity.normalize();
        if capacity >= required {
            tally.add(CAPACITY_POINTS, format!("Can carry up to {capacity_kg}kg"));
        } else {
            tally.add(
                CAPACITY_SHORTFALL_POINTS,
                format!(
                    "Can only carry {capacity_kg}kg of the required {}kg",
                    required.normalize()
                ),
            );
        }
    }

    fn score_languages(
        &self,
        candidate: &CourierCandidate,
        requirement: &ShipmentRequirement,
        tally: &mut Tally,
    ) {
        let Some(required) = requirement.required_languages.as_deref() else {
            return;
        };

        let matched: Vec<&str> = required
            .iter()
            .map(|language| language.trim())
            .filter(|language| {
                candidate.skills.languages.iter().any(|spoken| same_text(spoken, language))
            })
            .collect();

        if !matched.is_empty() {
            tally.add(LANGUAGE_POINTS, format!("Speaks {}", matched.join(", ")));
        }
    }

    fn score_certifications(&self, candidate: &CourierCandidate, tally: &mut Tally) {
        match candidate.skills.certifications.as_deref() {
            Some(certifications) if !certifications.is_empty() => {
                tally.add(CERTIFICATION_POINTS, format!("Certified: {}", certifications.join(", ")));
            }
            _ => {}
        }
    }
}

/// Case-insensitive comparison that never matches on blank values
fn same_text(left: &str, right: &str) -> bool {
    let left = left.trim();
    let right = right.trim();
    !left.is_empty() && left.to_lowercase() == right.to_lowercase()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::courier::{CourierId, CourierLocation, CourierSkills};

    fn courier() -> CourierCandidate {
        CourierCandidate {
            id: CourierId("c-1".to_string()),
            name: "Anna Weber".to_string(),
            phone: Some("+49 69 1234".to_string()),
            email: Some("anna@example.com".to_string()),
            location: CourierLocation {
                country: "Germany".to_string(),
                country_code: "DE".to_string(),
                city: Some("Frankfurt".to_string()),
            },
            skills: CourierSkills {
                languages: BTreeSet::from(["German".to_string(), "English".to_string()]),
                max_carry_weight: None,
                service_types: BTreeSet::from([ServiceType::Obc]),
                certifications: None,
            },
            status: CourierStatus::Available,
            active: true,
            online: false,
        }
    }

    fn frankfurt_obc() -> ShipmentRequirement {
        ShipmentRequirement::new("Frankfurt (FRA)", "Germany", "DE", ServiceType::Obc)
    }

    #[test]
    fn test_full_local_match_lists_reasons_in_rule_order() {
        let score = CourierMatchScorer::new().score(&courier(), &frankfurt_obc()).unwrap();

        assert_eq!(score.value, 95);
        assert_eq!(
            score.reasons,
            vec![
                "Based in Germany",
                "Located in Frankfurt",
                "Experienced in OBC service",
                "Currently available",
            ]
        );
    }

    #[test]
    fn test_nfo_requirement_is_not_scored() {
        let requirement = ShipmentRequirement::new("Frankfurt", "Germany", "DE", ServiceType::Nfo);
        assert!(CourierMatchScorer::new().score(&courier(), &requirement).is_none());
    }

    #[test]
    fn test_country_name_fallback_scores_35() {
        let mut candidate = courier();
        candidate.location.country_code = "GER".to_string();
        candidate.location.city = None;
        candidate.skills.service_types.clear();
        candidate.status = CourierStatus::Busy;

        let score = CourierMatchScorer::new().score(&candidate, &frankfurt_obc()).unwrap();
        assert_eq!(score.value, 35);
        assert_eq!(score.reasons, vec!["Based in Germany", "Currently busy"]);
    }

    #[test]
    fn test_partial_city_match_scores_near() {
        let mut candidate = courier();
        candidate.location.city = Some("frankfurt".to_string());
        let requirement =
            ShipmentRequirement::new("Frankfurt am Main (FRA)", "Germany", "DE", ServiceType::Obc);

        let score = CourierMatchScorer::new().score(&candidate, &requirement).unwrap();
        assert_eq!(score.value, 40 + 20 + 15 + 10);
        assert_eq!(score.reasons[1], "Near frankfurt");
    }

    #[test]
    fn test_bare_airport_code_resolves_city() {
        let requirement = ShipmentRequirement::new("FRA", "Germany", "DE", ServiceType::Obc);
        let score = CourierMatchScorer::new().score(&courier(), &requirement).unwrap();
        assert!(score.reasons.contains(&"Located in Frankfurt".to_string()));
    }

    #[test]
    fn test_capacity_bonus_and_shortfall() {
        let mut candidate = courier();
        candidate.skills.max_carry_weight = Some(Decimal::new(300, 1));

        let enough = frankfurt_obc().with_weight(Decimal::from(25));
        let score = CourierMatchScorer::new().score(&candidate, &enough).unwrap();
        assert_eq!(score.value, 100);
        assert_eq!(score.reasons.last().unwrap(), "Can carry up to 30kg");

        let too_heavy = frankfurt_obc().with_weight(Decimal::from(45));
        let score = CourierMatchScorer::new().score(&candidate, &too_heavy).unwrap();
        assert_eq!(score.value, 90);
        assert_eq!(score.reasons.last().unwrap(), "Can only carry 30kg of the required 45kg");
    }

    #[test]
    fn test_capacity_ignored_without_requirement_weight() {
        let mut candidate = courier();
        candidate.skills.max_carry_weight = Some(Decimal::from(10));
        let score = CourierMatchScorer::new().score(&candidate, &frankfurt_obc()).unwrap();
        assert_eq!(score.value, 95);
    }

    #[test]
    fn test_language_overlap_is_case_insensitive() {
        let requirement = frankfurt_obc().with_required_languages(vec![
            "english".to_string(),
            "French".to_string(),
        ]);
        let score = CourierMatchScorer::new().score(&courier(), &requirement).unwrap();
        assert_eq!(score.value, 100);
        assert_eq!(score.reasons.last().unwrap(), "Speaks english");
    }

    #[test]
    fn test_no_language_overlap_adds_nothing() {
        let requirement = frankfurt_obc().with_required_languages(vec!["Japanese".to_string()]);
        let score = CourierMatchScorer::new().score(&courier(), &requirement).unwrap();
        assert_eq!(score.value, 95);
        assert_eq!(score.reasons.len(), 4);
    }

    #[test]
    fn test_certifications_and_online_bonus() {
        let mut candidate = courier();
        candidate.location.city = None;
        candidate.online = true;
        candidate.skills.certifications =
            Some(vec!["IATA DGR".to_string(), "TSA".to_string()]);

        let score = CourierMatchScorer::new().score(&candidate, &frankfurt_obc()).unwrap();
        assert_eq!(score.value, 40 + 15 + 10 + 5 + 5);
        assert_eq!(
            &score.reasons[3..],
            &["Certified: IATA DGR, TSA".to_string(), "Online now".to_string()]
        );
    }

    #[test]
    fn test_score_is_clamped_at_both_ends() {
        let mut best = courier();
        best.online = true;
        best.skills.max_carry_weight = Some(Decimal::from(50));
        best.skills.certifications = Some(vec!["DGR".to_string()]);
        let requirement = frankfurt_obc()
            .with_weight(Decimal::from(10))
            .with_required_languages(vec!["German".to_string()]);
        assert_eq!(CourierMatchScorer::new().score(&best, &requirement).unwrap().value, 100);

        let mut worst = courier();
        worst.location = CourierLocation {
            country: "Brazil".to_string(),
            country_code: "BR".to_string(),
            city: Some("Recife".to_string()),
        };
        worst.skills.service_types.clear();
        worst.skills.max_carry_weight = Some(Decimal::from(1));
        worst.status = CourierStatus::Offline;
        let requirement = frankfurt_obc().with_weight(Decimal::from(10));
        let score = CourierMatchScorer::new().score(&worst, &requirement).unwrap();
        assert_eq!(score.value, 0);
        assert_eq!(score.reasons.len(), 2);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let scorer = CourierMatchScorer::new();
        let first = scorer.score(&courier(), &frankfurt_obc());
        let second = scorer.score(&courier(), &frankfurt_obc());
        assert_eq!(first, second);
    }
}
