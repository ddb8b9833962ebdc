use std::path::Path;

use courier_advisor_core::{score_courier, CourierCandidate, ShipmentRequirement};

use crate::commands::input::read_json;
use crate::commands::suggest::render;
use crate::commands::{CommandContext, CommandResult};

const COMMAND: &str = "score";

pub fn run(context: &CommandContext, courier: &Path, requirement: &Path) -> CommandResult {
    let loaded = read_json::<CourierCandidate>(courier).and_then(|candidate| {
        read_json::<ShipmentRequirement>(requirement).map(|requirement| (candidate, requirement))
    });
    let (candidate, requirement) = match loaded {
        Ok(loaded) => loaded,
        Err(error) => return CommandResult::from_error(COMMAND, &context.correlation_id, error),
    };

    match score_courier(&candidate, &requirement) {
        Some(result) => {
            let message = format!("{} scored {}", result.name, result.score);
            let details = vec![render(1, &result)];
            CommandResult::success(COMMAND, &context.correlation_id, message, result, details)
        }
        None => CommandResult::success(
            COMMAND,
            &context.correlation_id,
            format!("not applicable: scoring only covers OBC, got {}", requirement.service_type),
            Option::<()>::None,
            Vec::new(),
        ),
    }
}
