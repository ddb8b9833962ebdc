//! Loading of JSON fixtures and numeric arguments.

use std::fs;
use std::path::Path;

use anyhow::Context;
use courier_advisor_core::errors::{ApplicationError, DomainError};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ApplicationError> {
    load_json(path).map_err(|error| ApplicationError::Input(format!("{error:#}")))
}

fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read `{}`", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("could not parse `{}`", path.display()))
}

/// Non-numeric input is a validation failure, like a non-positive weight.
pub fn parse_decimal(field: &str, raw: &str) -> Result<Decimal, ApplicationError> {
    raw.trim().parse::<Decimal>().map_err(|_| {
        ApplicationError::from(DomainError::Validation(format!(
            "{field} must be a number, got `{raw}`"
        )))
    })
}
