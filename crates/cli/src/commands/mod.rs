pub mod airlines;
pub mod compare;
pub mod config;
pub mod input;
pub mod plan;
pub mod score;
pub mod suggest;

use courier_advisor_core::config::AppConfig;
use courier_advisor_core::errors::{ApplicationError, InterfaceError};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// Per-invocation state shared by every command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: AppConfig,
    pub correlation_id: String,
}

impl CommandContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config, correlation_id: Uuid::new_v4().to_string() }
    }
}

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
    pub human: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    correlation_id: String,
    data: Option<Value>,
}

impl CommandResult {
    pub fn success(
        command: &str,
        correlation_id: &str,
        message: impl Into<String>,
        data: impl Serialize,
        details: Vec<String>,
    ) -> Self {
        let message = message.into();
        let human = std::iter::once(message.clone()).chain(details).collect::<Vec<_>>().join("\n");
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message,
            correlation_id: correlation_id.to_string(),
            data: serde_json::to_value(data).ok(),
        };
        Self { exit_code: 0, output: serialize_payload(payload), human }
    }

    pub fn failure(
        command: &str,
        correlation_id: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let message = message.into();
        let human = format!("error ({error_class}): {message}");
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message,
            correlation_id: correlation_id.to_string(),
            data: None,
        };
        Self { exit_code, output: serialize_payload(payload), human }
    }

    pub fn from_error(command: &str, correlation_id: &str, error: ApplicationError) -> Self {
        let interface = error.into_interface(correlation_id);
        let exit_code = match interface {
            InterfaceError::BadRequest { .. } => 3,
            InterfaceError::NotFound { .. } => 4,
            InterfaceError::Internal { .. } => 2,
        };
        Self::failure(
            command,
            correlation_id,
            interface.error_class(),
            interface.message(),
            exit_code,
        )
    }

    pub fn render(&self, human: bool) -> &str {
        if human {
            &self.human
        } else {
            &self.output
        }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
