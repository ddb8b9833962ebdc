pub mod advisor;
pub mod baggage;
pub mod config;
pub mod domain;
pub mod errors;
pub mod matching;

pub use advisor::{
    compare_baggage_options, get_airline_rule, list_airline_rules, plan_baggage_partition,
    score_courier, search_airlines, suggest_couriers, summarize_suggestions,
};
pub use baggage::{
    AirlineRuleRegistry, BaggagePartitionOptimizer, CostComparison, GreedyDistribution,
    PartitionPlan, RecommendedOption, WeightDistribution, MAX_COURIERS_PER_PLAN,
};
pub use domain::airline::{AirlineCode, AirlineRule, HandLuggageAllowance};
pub use domain::courier::{
    CourierCandidate, CourierId, CourierLocation, CourierSkills, CourierStatus,
};
pub use domain::shipment::{ServiceType, ShipmentRequirement};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use matching::{
    CourierMatchScorer, CourierRanker, MatchResult, MatchScore, StatusCounts, SuggestionSummary,
};
