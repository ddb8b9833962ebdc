//! Function-call surface consumed by storage, presentation and messaging layers.
//!
//! Every function is pure over its inputs and the read-only airline table, so callers may
//! invoke them concurrently from any thread.

use rust_decimal::Decimal;

use crate::baggage::{AirlineRuleRegistry, BaggagePartitionOptimizer, PartitionPlan};
use crate::domain::airline::AirlineRule;
use crate::domain::courier::CourierCandidate;
use crate::domain::shipment::ShipmentRequirement;
use crate::errors::DomainError;
use crate::matching::{CourierRanker, MatchResult, SuggestionSummary};

/// `None` when the requirement's service type is not OBC.
pub fn score_courier(
    candidate: &CourierCandidate,
    requirement: &ShipmentRequirement,
) -> Option<MatchResult> {
    CourierRanker::new().score(candidate, requirement)
}

pub fn suggest_couriers(
    candidates: &[CourierCandidate],
    requirement: &ShipmentRequirement,
) -> Vec<MatchResult> {
    CourierRanker::new().suggest(candidates, requirement)
}

pub fn summarize_suggestions(results: &[MatchResult]) -> SuggestionSummary {
    CourierRanker::new().summarize(results)
}

pub fn get_airline_rule(code: &str) -> Result<&'static AirlineRule, DomainError> {
    AirlineRuleRegistry::global().require(code)
}

pub fn list_airline_rules() -> &'static [AirlineRule] {
    AirlineRuleRegistry::global().list_all()
}

pub fn search_airlines(query: &str) -> Vec<&'static AirlineRule> {
    AirlineRuleRegistry::global().search(query)
}

pub fn plan_baggage_partition(
    weight: Decimal,
    airline_code: &str,
) -> Result<PartitionPlan, DomainError> {
    BaggagePartitionOptimizer::new().plan(weight, airline_code)
}

pub fn compare_baggage_options(
    weight: Decimal,
    airline_code: &str,
    per_courier_cost: Decimal,
) -> Result<PartitionPlan, DomainError> {
    BaggagePartitionOptimizer::new().compare(weight, airline_code, per_courier_cost)
}
