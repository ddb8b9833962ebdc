use courier_advisor_core::errors::ApplicationError;
use courier_advisor_core::{get_airline_rule, list_airline_rules, search_airlines, AirlineRule};

use crate::commands::{CommandContext, CommandResult};

const COMMAND: &str = "airlines";

pub fn run(context: &CommandContext, code: Option<&str>, search: Option<&str>) -> CommandResult {
    if let Some(code) = code {
        return match get_airline_rule(code) {
            Ok(rule) => CommandResult::success(
                COMMAND,
                &context.correlation_id,
                format!("{} ({})", rule.name, rule.code),
                rule,
                vec![render(rule)],
            ),
            Err(error) => CommandResult::from_error(
                COMMAND,
                &context.correlation_id,
                ApplicationError::from(error),
            ),
        };
    }

    let rules: Vec<&AirlineRule> = match search {
        Some(query) => search_airlines(query),
        None => list_airline_rules().iter().collect(),
    };
    let message = match search {
        Some(query) => format!("{} airlines match `{query}`", rules.len()),
        None => format!("{} airlines known", rules.len()),
    };
    let details = rules.iter().map(|rule| render(rule)).collect();
    CommandResult::success(COMMAND, &context.correlation_id, message, rules, details)
}

fn render(rule: &AirlineRule) -> String {
    format!(
        "{} {}: {} x {}kg checked (max {}kg per piece), excess {}/kg, hand luggage {} x {}kg",
        rule.code,
        rule.name,
        rule.max_baggage_pieces,
        rule.max_baggage_weight.normalize(),
        rule.max_weight_per_piece.normalize(),
        rule.excess_fee_per_kg.normalize(),
        rule.hand_luggage.max_pieces,
        rule.hand_luggage.max_weight.normalize()
    )
}
