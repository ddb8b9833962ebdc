//! Read-only table of per-airline baggage rules

use std::collections::HashMap;
use std::sync::OnceLock;

use rust_decimal::Decimal;
use tracing::warn;

use crate::domain::airline::{AirlineCode, AirlineRule, HandLuggageAllowance};
use crate::errors::DomainError;

#[derive(Debug, Clone, Copy)]
struct AirlineSeed {
    code: &'static str,
    name: &'static str,
    max_baggage_weight_kg: i64,
    max_baggage_pieces: u32,
    max_weight_per_piece_kg: i64,
    /// Minor currency units per kilogram
    excess_fee_per_kg_cents: i64,
    hand_luggage_kg: i64,
    hand_luggage_pieces: u32,
}

const AIRLINE_SEEDS: &[AirlineSeed] = &[
    AirlineSeed {
        code: "LH",
        name: "Lufthansa",
        max_baggage_weight_kg: 32,
        max_baggage_pieces: 2,
        max_weight_per_piece_kg: 32,
        excess_fee_per_kg_cents: 1_500,
        hand_luggage_kg: 8,
        hand_luggage_pieces: 1,
    },
    AirlineSeed {
        code: "BA",
        name: "British Airways",
        max_baggage_weight_kg: 23,
        max_baggage_pieces: 2,
        max_weight_per_piece_kg: 32,
        excess_fee_per_kg_cents: 2_000,
        hand_luggage_kg: 23,
        hand_luggage_pieces: 1,
    },
    AirlineSeed {
        code: "AF",
        name: "Air France",
        max_baggage_weight_kg: 23,
        max_baggage_pieces: 2,
        max_weight_per_piece_kg: 32,
        excess_fee_per_kg_cents: 1_500,
        hand_luggage_kg: 12,
        hand_luggage_pieces: 1,
    },
    AirlineSeed {
        code: "KL",
        name: "KLM Royal Dutch Airlines",
        max_baggage_weight_kg: 23,
        max_baggage_pieces: 2,
        max_weight_per_piece_kg: 32,
        excess_fee_per_kg_cents: 1_500,
        hand_luggage_kg: 12,
        hand_luggage_pieces: 1,
    },
    AirlineSeed {
        code: "DL",
        name: "Delta Air Lines",
        max_baggage_weight_kg: 23,
        max_baggage_pieces: 2,
        max_weight_per_piece_kg: 32,
        excess_fee_per_kg_cents: 2_500,
        hand_luggage_kg: 10,
        hand_luggage_pieces: 1,
    },
    AirlineSeed {
        code: "AA",
        name: "American Airlines",
        max_baggage_weight_kg: 23,
        max_baggage_pieces: 2,
        max_weight_per_piece_kg: 32,
        excess_fee_per_kg_cents: 2_500,
        hand_luggage_kg: 10,
        hand_luggage_pieces: 1,
    },
    AirlineSeed {
        code: "UA",
        name: "United Airlines",
        max_baggage_weight_kg: 23,
        max_baggage_pieces: 2,
        max_weight_per_piece_kg: 32,
        excess_fee_per_kg_cents: 2_500,
        hand_luggage_kg: 10,
        hand_luggage_pieces: 1,
    },
    AirlineSeed {
        code: "TK",
        name: "Turkish Airlines",
        max_baggage_weight_kg: 32,
        max_baggage_pieces: 2,
        max_weight_per_piece_kg: 32,
        excess_fee_per_kg_cents: 1_000,
        hand_luggage_kg: 8,
        hand_luggage_pieces: 1,
    },
    AirlineSeed {
        code: "EK",
        name: "Emirates",
        max_baggage_weight_kg: 32,
        max_baggage_pieces: 2,
        max_weight_per_piece_kg: 32,
        excess_fee_per_kg_cents: 1_800,
        hand_luggage_kg: 7,
        hand_luggage_pieces: 1,
    },
    AirlineSeed {
        code: "LX",
        name: "Swiss International Air Lines",
        max_baggage_weight_kg: 23,
        max_baggage_pieces: 2,
        max_weight_per_piece_kg: 32,
        excess_fee_per_kg_cents: 1_500,
        hand_luggage_kg: 8,
        hand_luggage_pieces: 1,
    },
    AirlineSeed {
        code: "QR",
        name: "Qatar Airways",
        max_baggage_weight_kg: 32,
        max_baggage_pieces: 2,
        max_weight_per_piece_kg: 32,
        excess_fee_per_kg_cents: 1_800,
        hand_luggage_kg: 7,
        hand_luggage_pieces: 1,
    },
];

impl AirlineSeed {
    fn to_rule(self) -> Option<AirlineRule> {
        Some(AirlineRule {
            code: AirlineCode::parse(self.code).ok()?,
            name: self.name.to_owned(),
            max_baggage_weight: Decimal::from(self.max_baggage_weight_kg),
            max_baggage_pieces: self.max_baggage_pieces,
            max_weight_per_piece: Decimal::from(self.max_weight_per_piece_kg),
            excess_fee_per_kg: Decimal::new(self.excess_fee_per_kg_cents, 2),
            hand_luggage: HandLuggageAllowance {
                max_weight: Decimal::from(self.hand_luggage_kg),
                max_pieces: self.hand_luggage_pieces,
            },
        })
    }
}

/// Baggage rules keyed by carrier code. Built once per process and never mutated.
#[derive(Debug)]
pub struct AirlineRuleRegistry {
    rules: Vec<AirlineRule>,
    index: HashMap<AirlineCode, usize>,
}

impl AirlineRuleRegistry {
    /// The process-wide table.
    pub fn global() -> &'static AirlineRuleRegistry {
        static REGISTRY: OnceLock<AirlineRuleRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| Self::new(AIRLINE_SEEDS.iter().filter_map(|seed| seed.to_rule())))
    }

    fn new(rules: impl IntoIterator<Item = AirlineRule>) -> Self {
        let rules: Vec<AirlineRule> = rules.into_iter().collect();
        let index =
            rules.iter().enumerate().map(|(position, rule)| (rule.code.clone(), position)).collect();
        Self { rules, index }
    }

    /// Case-insensitive lookup. Malformed and unknown codes both yield `None`.
    pub fn get(&self, code: &str) -> Option<&AirlineRule> {
        let code = AirlineCode::parse(code).ok()?;
        self.find(&code)
    }

    pub fn find(&self, code: &AirlineCode) -> Option<&AirlineRule> {
        self.index.get(code).and_then(|position| self.rules.get(*position))
    }

    /// Lookup that distinguishes a malformed code from an unknown one.
    pub fn require(&self, code: &str) -> Result<&AirlineRule, DomainError> {
        let code = AirlineCode::parse(code)?;
        self.find(&code).ok_or_else(|| {
            warn!(
                event_name = "airline.lookup.not_found",
                airline_code = %code,
                "no baggage rules for airline"
            );
            DomainError::AirlineNotFound { code: code.to_string() }
        })
    }

    /// Every rule, in table order.
    pub fn list_all(&self) -> &[AirlineRule] {
        &self.rules
    }

    /// Case-insensitive substring search over code and name, in table order.
    pub fn search(&self, query: &str) -> Vec<&AirlineRule> {
        let needle = query.trim().to_lowercase();
        self.rules
            .iter()
            .filter(|rule| {
                rule.code.as_str().to_lowercase().contains(&needle)
                    || rule.name.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{AirlineRuleRegistry, AIRLINE_SEEDS};
    use crate::errors::DomainError;

    #[test]
    fn every_seed_becomes_a_rule() {
        assert_eq!(AirlineRuleRegistry::global().list_all().len(), AIRLINE_SEEDS.len());
    }

    #[test]
    fn lufthansa_values_match_reference_table() {
        let rule = AirlineRuleRegistry::global().get("LH").expect("LH is seeded");
        assert_eq!(rule.name, "Lufthansa");
        assert_eq!(rule.max_baggage_weight, Decimal::from(32));
        assert_eq!(rule.max_baggage_pieces, 2);
        assert_eq!(rule.excess_fee_per_kg, Decimal::from(15));
        assert_eq!(rule.hand_luggage.max_weight, Decimal::from(8));
        assert_eq!(rule.hand_luggage.max_pieces, 1);
        assert_eq!(rule.max_per_courier(), Decimal::from(64));
    }

    #[test]
    fn lookup_ignores_case() {
        let registry = AirlineRuleRegistry::global();
        assert_eq!(registry.get("lh"), registry.get("LH"));
        assert!(registry.get("lh").is_some());
    }

    #[test]
    fn required_carriers_are_present() {
        let registry = AirlineRuleRegistry::global();
        for code in ["LH", "BA", "AF", "KL", "DL", "AA", "UA", "TK", "EK"] {
            assert!(registry.get(code).is_some(), "{code} should be seeded");
        }
    }

    #[test]
    fn unknown_code_has_no_fallback() {
        let registry = AirlineRuleRegistry::global();
        assert!(registry.get("ZZ").is_none());
        assert_eq!(
            registry.require("zz"),
            Err(DomainError::AirlineNotFound { code: "ZZ".to_string() })
        );
    }

    #[test]
    fn malformed_code_is_a_validation_error() {
        assert!(matches!(
            AirlineRuleRegistry::global().require("LUFT"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn search_matches_code_or_name() {
        let registry = AirlineRuleRegistry::global();

        let by_name: Vec<&str> =
            registry.search("air").iter().map(|rule| rule.code.as_str()).collect();
        assert_eq!(by_name, vec!["BA", "AF", "KL", "DL", "AA", "UA", "TK", "LX", "QR"]);

        let by_code: Vec<&str> =
            registry.search("ek").iter().map(|rule| rule.code.as_str()).collect();
        assert_eq!(by_code, vec!["EK"]);
    }

    #[test]
    fn list_order_is_stable() {
        let codes = || -> Vec<String> {
            AirlineRuleRegistry::global()
                .list_all()
                .iter()
                .map(|rule| rule.code.to_string())
                .collect()
        };
        assert_eq!(codes(), codes());
        assert_eq!(codes()[0], "LH");
    }
}
