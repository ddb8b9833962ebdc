//! Types for baggage partitioning

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::airline::AirlineRule;

/// Which way of moving the shipment is cheaper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedOption {
    /// Option 1: one courier carrying everything and paying excess baggage
    SingleCourierWithExcess,
    /// Option 2: the weight split across the required couriers
    MultipleCouriers,
    /// Both options cost the same
    Either,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostComparison {
    pub one_courier_total: Decimal,
    pub multi_courier_total: Decimal,
    pub recommended: RecommendedOption,
    pub recommendation: String,
}

/// How a shipment's weight is split across couriers on one airline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionPlan {
    pub required_couriers: u32,
    pub total_weight: Decimal,
    /// One allocation per courier, each rounded to 2 decimals
    pub weight_per_courier: Vec<Decimal>,
    pub excess_baggage_fee: Decimal,
    pub airline_rule: AirlineRule,
    pub breakdown: Vec<String>,
    pub cost_comparison: Option<CostComparison>,
}
