use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Two-character carrier code, trimmed and upper-cased.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AirlineCode(String);

impl AirlineCode {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let well_formed =
            trimmed.len() == 2 && trimmed.chars().all(|ch| ch.is_ascii_alphanumeric());
        if !well_formed {
            return Err(DomainError::Validation(format!(
                "airline code `{trimmed}` must be two alphanumeric characters"
            )));
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirlineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandLuggageAllowance {
    pub max_weight: Decimal,
    pub max_pieces: u32,
}

/// Checked-baggage rules for one carrier. Weights are kilograms, the fee is per kilogram.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineRule {
    pub code: AirlineCode,
    pub name: String,
    pub max_baggage_weight: Decimal,
    pub max_baggage_pieces: u32,
    pub max_weight_per_piece: Decimal,
    pub excess_fee_per_kg: Decimal,
    pub hand_luggage: HandLuggageAllowance,
}

impl AirlineRule {
    /// Checked allowance one courier can carry without excess fees.
    pub fn max_per_courier(&self) -> Decimal {
        self.max_baggage_weight * Decimal::from(self.max_baggage_pieces)
    }
}

#[cfg(test)]
mod tests {
    use super::AirlineCode;
    use crate::errors::DomainError;

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let code = AirlineCode::parse(" lh ").expect("valid code");
        assert_eq!(code.as_str(), "LH");
    }

    #[test]
    fn parse_rejects_malformed_codes() {
        for raw in ["", "L", "LHX", "L-", "ü1"] {
            assert!(
                matches!(AirlineCode::parse(raw), Err(DomainError::Validation(_))),
                "`{raw}` should be rejected"
            );
        }
    }

    #[test]
    fn parse_accepts_alphanumeric_carrier_codes() {
        assert_eq!(AirlineCode::parse("u2").expect("valid code").as_str(), "U2");
    }
}
