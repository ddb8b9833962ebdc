use std::path::Path;

use courier_advisor_core::errors::ApplicationError;
use courier_advisor_core::{
    suggest_couriers, summarize_suggestions, CourierCandidate, MatchResult, ShipmentRequirement,
    SuggestionSummary,
};
use serde::Serialize;

use crate::commands::input::read_json;
use crate::commands::{CommandContext, CommandResult};

const COMMAND: &str = "suggest";

#[derive(Debug, Serialize)]
struct SuggestData {
    matches: Vec<MatchResult>,
    summary: SuggestionSummary,
}

pub fn run(context: &CommandContext, roster: &Path, requirement: &Path) -> CommandResult {
    match load(roster, requirement) {
        Ok((candidates, requirement)) => {
            let matches = suggest_couriers(&candidates, &requirement);
            let summary = summarize_suggestions(&matches);
            tracing::info!(
                event_name = "cli.suggest.completed",
                correlation_id = %context.correlation_id,
                roster_size = candidates.len(),
                matches = matches.len(),
                "ranked courier roster"
            );

            let message = format!(
                "{} of {} couriers matched for {} {}",
                matches.len(),
                candidates.len(),
                requirement.service_type,
                requirement.origin_city
            );
            let details = matches.iter().enumerate().map(|(rank, m)| render(rank + 1, m)).collect();
            CommandResult::success(
                COMMAND,
                &context.correlation_id,
                message,
                SuggestData { matches, summary },
                details,
            )
        }
        Err(error) => CommandResult::from_error(COMMAND, &context.correlation_id, error),
    }
}

fn load(
    roster: &Path,
    requirement: &Path,
) -> Result<(Vec<CourierCandidate>, ShipmentRequirement), ApplicationError> {
    Ok((read_json(roster)?, read_json(requirement)?))
}

pub(crate) fn render(rank: usize, result: &MatchResult) -> String {
    format!(
        "{rank}. {} ({}) score {} [{}]: {}",
        result.name,
        result.courier_id,
        result.score,
        result.location.label(),
        result.reasons.join("; ")
    )
}
