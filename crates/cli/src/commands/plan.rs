use courier_advisor_core::errors::ApplicationError;
use courier_advisor_core::{plan_baggage_partition, PartitionPlan};
use serde::Serialize;

use crate::commands::input::parse_decimal;
use crate::commands::{CommandContext, CommandResult};

const COMMAND: &str = "plan";

#[derive(Debug, Serialize)]
pub(crate) struct PlanData<'a> {
    pub currency: &'a str,
    pub plan: PartitionPlan,
}

pub fn run(context: &CommandContext, weight: &str, airline: &str) -> CommandResult {
    let planned = parse_decimal("weight", weight)
        .and_then(|weight| plan_baggage_partition(weight, airline).map_err(ApplicationError::from));

    match planned {
        Ok(plan) => {
            let message = format!(
                "{}kg on {} needs {} courier(s)",
                plan.total_weight.normalize(),
                plan.airline_rule.code,
                plan.required_couriers
            );
            let details = plan.breakdown.clone();
            let data = PlanData { currency: &context.config.advisor.currency, plan };
            CommandResult::success(COMMAND, &context.correlation_id, message, data, details)
        }
        Err(error) => CommandResult::from_error(COMMAND, &context.correlation_id, error),
    }
}
