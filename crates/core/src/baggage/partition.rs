//! Courier-count optimizer for airline baggage allowances

use std::cmp::Ordering;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::domain::airline::AirlineRule;
use crate::errors::DomainError;

use super::registry::AirlineRuleRegistry;
use super::types::{CostComparison, PartitionPlan, RecommendedOption};

/// Largest courier count a single plan may call for.
pub const MAX_COURIERS_PER_PLAN: u32 = 1_000;

/// Splits a total weight into per-courier allocations.
pub trait WeightDistribution: Send + Sync {
    fn distribute(
        &self,
        total_weight: Decimal,
        max_per_courier: Decimal,
        couriers: u32,
    ) -> Vec<Decimal>;
}

/// Fill each courier up to the allowance before moving to the next.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyDistribution;

impl WeightDistribution for GreedyDistribution {
    fn distribute(
        &self,
        total_weight: Decimal,
        max_per_courier: Decimal,
        couriers: u32,
    ) -> Vec<Decimal> {
        let mut remaining = total_weight;
        let mut allocations = Vec::with_capacity(couriers as usize);

        for _ in 0..couriers {
            let allocation = remaining.min(max_per_courier);
            allocations.push(round_2dp(allocation));
            remaining -= allocation;
        }

        allocations
    }
}

fn round_2dp(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn kg(value: Decimal) -> Decimal {
    value.normalize()
}

fn money(value: Decimal) -> String {
    format!("{:.2}", round_2dp(value))
}

pub struct BaggagePartitionOptimizer<'r, D = GreedyDistribution> {
    registry: &'r AirlineRuleRegistry,
    distribution: D,
}

impl BaggagePartitionOptimizer<'static, GreedyDistribution> {
    pub fn new() -> Self {
        Self { registry: AirlineRuleRegistry::global(), distribution: GreedyDistribution }
    }
}

impl Default for BaggagePartitionOptimizer<'static, GreedyDistribution> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r, D: WeightDistribution> BaggagePartitionOptimizer<'r, D> {
    pub fn with_distribution(registry: &'r AirlineRuleRegistry, distribution: D) -> Self {
        Self { registry, distribution }
    }

    /// Work out how many couriers `total_weight` kg needs on `airline_code` and how the
    /// weight is split between them.
    pub fn plan(
        &self,
        total_weight: Decimal,
        airline_code: &str,
    ) -> Result<PartitionPlan, DomainError> {
        if total_weight <= Decimal::ZERO {
            return Err(DomainError::Validation(format!(
                "total weight must be greater than zero, got {total_weight}"
            )));
        }

        let rule = self.registry.require(airline_code)?;
        let max_per_courier = rule.max_per_courier();
        let required_couriers = required_couriers(total_weight, max_per_courier)?;

        let weight_per_courier =
            self.distribution.distribute(total_weight, max_per_courier, required_couriers);

        let mut excess_baggage_fee = Decimal::ZERO;
        for allocation in &weight_per_courier {
            // Only reachable with a distribution that overfills a courier.
            if *allocation > max_per_courier {
                let fee = checked_charge(*allocation - max_per_courier, rule.excess_fee_per_kg)?;
                excess_baggage_fee = checked_sum(excess_baggage_fee, fee)?;
            }
        }
        let excess_baggage_fee = round_2dp(excess_baggage_fee);

        let breakdown = plan_breakdown(
            rule,
            total_weight,
            max_per_courier,
            required_couriers,
            &weight_per_courier,
            excess_baggage_fee,
        );

        debug!(
            event_name = "baggage.plan.computed",
            airline_code = %rule.code,
            total_weight = %total_weight,
            required_couriers,
            excess_baggage_fee = %excess_baggage_fee,
            "baggage partition planned"
        );

        Ok(PartitionPlan {
            required_couriers,
            total_weight,
            weight_per_courier,
            excess_baggage_fee,
            airline_rule: rule.clone(),
            breakdown,
            cost_comparison: None,
        })
    }

    /// [`plan`](Self::plan) plus a cost comparison between one courier paying excess
    /// baggage and the multi-courier split.
    pub fn compare(
        &self,
        total_weight: Decimal,
        airline_code: &str,
        per_courier_cost: Decimal,
    ) -> Result<PartitionPlan, DomainError> {
        if per_courier_cost < Decimal::ZERO {
            return Err(DomainError::Validation(format!(
                "per-courier cost must not be negative, got {per_courier_cost}"
            )));
        }

        let mut plan = self.plan(total_weight, airline_code)?;
        let rule = &plan.airline_rule;
        let max_per_courier = rule.max_per_courier();

        let excess_weight = (total_weight - max_per_courier).max(Decimal::ZERO);
        let one_courier_total =
            checked_sum(per_courier_cost, checked_charge(excess_weight, rule.excess_fee_per_kg)?)?;
        let multi_courier_total = checked_sum(
            checked_charge(Decimal::from(plan.required_couriers), per_courier_cost)?,
            plan.excess_baggage_fee,
        )?;

        let (recommended, recommendation) = match one_courier_total.cmp(&multi_courier_total) {
            Ordering::Less => (
                RecommendedOption::SingleCourierWithExcess,
                format!(
                    "Option 1 recommended: one courier paying excess baggage costs {} vs {} for {} couriers",
                    money(one_courier_total),
                    money(multi_courier_total),
                    plan.required_couriers
                ),
            ),
            Ordering::Greater => (
                RecommendedOption::MultipleCouriers,
                format!(
                    "Option 2 recommended: {} couriers cost {} vs {} for one courier paying excess baggage",
                    plan.required_couriers,
                    money(multi_courier_total),
                    money(one_courier_total)
                ),
            ),
            Ordering::Equal => (
                RecommendedOption::Either,
                format!("Both options cost the same: {}", money(one_courier_total)),
            ),
        };

        plan.breakdown.push(format!(
            "Option 1 (one courier + excess baggage): {} + {}kg x {} = {}",
            money(per_courier_cost),
            kg(excess_weight),
            money(rule.excess_fee_per_kg),
            money(one_courier_total)
        ));
        plan.breakdown.push(format!(
            "Option 2 ({} couriers): {} x {} + {} = {}",
            plan.required_couriers,
            plan.required_couriers,
            money(per_courier_cost),
            money(plan.excess_baggage_fee),
            money(multi_courier_total)
        ));
        plan.breakdown.push(recommendation.clone());

        debug!(
            event_name = "baggage.compare.recommended",
            airline_code = %rule.code,
            one_courier_total = %one_courier_total,
            multi_courier_total = %multi_courier_total,
            recommended = ?recommended,
            "baggage options compared"
        );

        plan.cost_comparison = Some(CostComparison {
            one_courier_total,
            multi_courier_total,
            recommended,
            recommendation,
        });
        Ok(plan)
    }
}

fn required_couriers(total_weight: Decimal, max_per_courier: Decimal) -> Result<u32, DomainError> {
    let couriers = total_weight
        .checked_div(max_per_courier)
        .map(|ratio| ratio.ceil())
        .and_then(|couriers| couriers.to_u32())
        .ok_or_else(|| {
            DomainError::Validation(format!(
                "cannot split {total_weight}kg into allowances of {max_per_courier}kg"
            ))
        })?;

    if couriers > MAX_COURIERS_PER_PLAN {
        return Err(DomainError::Validation(format!(
            "{total_weight}kg needs {couriers} couriers, more than the {MAX_COURIERS_PER_PLAN} a plan supports"
        )));
    }

    Ok(couriers)
}

fn checked_charge(quantity: Decimal, rate: Decimal) -> Result<Decimal, DomainError> {
    quantity.checked_mul(rate).ok_or_else(|| {
        DomainError::Validation(format!("{quantity} x {rate} exceeds the supported amount range"))
    })
}

fn checked_sum(left: Decimal, right: Decimal) -> Result<Decimal, DomainError> {
    left.checked_add(right).ok_or_else(|| {
        DomainError::Validation(format!("{left} + {right} exceeds the supported amount range"))
    })
}

fn plan_breakdown(
    rule: &AirlineRule,
    total_weight: Decimal,
    max_per_courier: Decimal,
    required_couriers: u32,
    weight_per_courier: &[Decimal],
    excess_baggage_fee: Decimal,
) -> Vec<String> {
    let mut lines = vec![
        format!("Total weight: {}kg", kg(total_weight)),
        format!("Airline: {} ({})", rule.name, rule.code),
        format!(
            "Allowance per courier: {} x {}kg = {}kg",
            rule.max_baggage_pieces,
            kg(rule.max_baggage_weight),
            kg(max_per_courier)
        ),
        format!("Couriers required: {required_couriers}"),
    ];

    lines.extend(
        weight_per_courier
            .iter()
            .enumerate()
            .map(|(position, weight)| format!("Courier {}: {}kg", position + 1, kg(*weight))),
    );

    if excess_baggage_fee > Decimal::ZERO {
        lines.push(format!("Excess baggage fee: {}", money(excess_baggage_fee)));
    }

    lines
}
