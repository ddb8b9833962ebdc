//! Airline baggage rules and courier-count planning

mod partition;
mod registry;
mod types;

pub use partition::{
    BaggagePartitionOptimizer, GreedyDistribution, WeightDistribution, MAX_COURIERS_PER_PLAN,
};
pub use registry::AirlineRuleRegistry;
pub use types::*;
