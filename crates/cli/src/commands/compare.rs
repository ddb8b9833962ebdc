use courier_advisor_core::errors::{ApplicationError, DomainError};
use courier_advisor_core::{compare_baggage_options, PartitionPlan};
use rust_decimal::Decimal;

use crate::commands::input::parse_decimal;
use crate::commands::plan::PlanData;
use crate::commands::{CommandContext, CommandResult};

const COMMAND: &str = "compare";

pub fn run(
    context: &CommandContext,
    weight: &str,
    airline: &str,
    courier_cost: Option<&str>,
) -> CommandResult {
    match compare(context, weight, airline, courier_cost) {
        Ok(plan) => {
            let recommendation = plan
                .cost_comparison
                .as_ref()
                .map(|comparison| comparison.recommendation.clone())
                .unwrap_or_default();
            let message =
                format!("{recommendation} (amounts in {})", context.config.advisor.currency);
            let details = plan.breakdown.clone();
            let data = PlanData { currency: &context.config.advisor.currency, plan };
            CommandResult::success(COMMAND, &context.correlation_id, message, data, details)
        }
        Err(error) => CommandResult::from_error(COMMAND, &context.correlation_id, error),
    }
}

fn compare(
    context: &CommandContext,
    weight: &str,
    airline: &str,
    courier_cost: Option<&str>,
) -> Result<PartitionPlan, ApplicationError> {
    let weight = parse_decimal("weight", weight)?;
    let cost = resolve_cost(context, courier_cost)?;
    Ok(compare_baggage_options(weight, airline, cost)?)
}

/// An explicit argument wins over `advisor.default_courier_cost`.
fn resolve_cost(
    context: &CommandContext,
    courier_cost: Option<&str>,
) -> Result<Decimal, ApplicationError> {
    match (courier_cost, context.config.advisor.default_courier_cost) {
        (Some(raw), _) => parse_decimal("courier cost", raw),
        (None, Some(default)) => Ok(default),
        (None, None) => Err(ApplicationError::from(DomainError::Validation(
            "courier cost is required: pass --courier-cost or set advisor.default_courier_cost"
                .to_string(),
        ))),
    }
}
