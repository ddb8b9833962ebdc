use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use courier_advisor_core::config::{resolve_config_path, LogFormat};
use serde::Serialize;
use toml::Value;

use crate::commands::{CommandContext, CommandResult};

const COMMAND: &str = "config";

#[derive(Debug, Serialize)]
pub struct ConfigField {
    pub key: &'static str,
    pub value: String,
    pub source: String,
}

pub fn run(context: &CommandContext) -> CommandResult {
    let config = &context.config;
    let config_file_path = resolve_config_path(None);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let attribution = Attribution { doc: config_file_doc.as_ref(), path: config_file_path };

    let default_courier_cost = config
        .advisor
        .default_courier_cost
        .map(|cost| cost.normalize().to_string())
        .unwrap_or_else(|| "<unset>".to_string());
    let fields = vec![
        attribution.field(
            "advisor.currency",
            config.advisor.currency.clone(),
            &["COURIER_ADVISOR_CURRENCY"],
        ),
        attribution.field(
            "advisor.default_courier_cost",
            default_courier_cost,
            &["COURIER_ADVISOR_DEFAULT_COURIER_COST"],
        ),
        attribution.field(
            "logging.level",
            config.logging.level.clone(),
            &["COURIER_ADVISOR_LOGGING_LEVEL", "COURIER_ADVISOR_LOG_LEVEL"],
        ),
        attribution.field(
            "logging.format",
            format_name(config.logging.format).to_string(),
            &["COURIER_ADVISOR_LOGGING_FORMAT", "COURIER_ADVISOR_LOG_FORMAT"],
        ),
    ];

    let details = fields.iter().map(render_line).collect();
    CommandResult::success(
        COMMAND,
        &context.correlation_id,
        "effective config (source precedence: env > file > default):",
        fields,
        details,
    )
}

struct Attribution<'a> {
    doc: Option<&'a Value>,
    path: Option<PathBuf>,
}

impl Attribution<'_> {
    fn field(&self, key: &'static str, value: String, env_keys: &[&str]) -> ConfigField {
        ConfigField { key, value, source: self.source(key, env_keys) }
    }

    fn source(&self, key_path: &str, env_keys: &[&str]) -> String {
        let env_key = env_keys
            .iter()
            .find(|env_key| env::var(env_key).is_ok_and(|value| !value.trim().is_empty()));
        if let Some(env_key) = env_key {
            return format!("env ({env_key})");
        }

        if let Some(doc) = self.doc {
            if contains_path(doc, key_path) {
                let file_path = self
                    .path
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "config file".to_string());
                return format!("file ({file_path})");
            }
        }

        "default".to_string()
    }
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn format_name(format: LogFormat) -> &'static str {
    match format {
        LogFormat::Compact => "compact",
        LogFormat::Pretty => "pretty",
        LogFormat::Json => "json",
    }
}

fn render_line(field: &ConfigField) -> String {
    format!("- {} = {} (source: {})", field.key, field.value, field.source)
}
