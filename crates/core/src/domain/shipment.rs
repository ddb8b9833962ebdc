use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    /// On-board courier: hand-carried as accompanied baggage.
    #[serde(rename = "OBC")]
    Obc,
    /// Next flight out: unaccompanied air freight.
    #[serde(rename = "NFO")]
    Nfo,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Obc => "OBC",
            Self::Nfo => "NFO",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a shipment needs from a courier. `origin_city` is free text and may embed an
/// airport code, e.g. `"Frankfurt (FRA)"` or just `"FRA"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRequirement {
    pub origin_city: String,
    pub origin_country: String,
    pub origin_country_code: String,
    pub service_type: ServiceType,
    #[serde(default)]
    pub weight: Option<Decimal>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub required_languages: Option<Vec<String>>,
}

impl ShipmentRequirement {
    pub fn new(
        origin_city: impl Into<String>,
        origin_country: impl Into<String>,
        origin_country_code: impl Into<String>,
        service_type: ServiceType,
    ) -> Self {
        Self {
            origin_city: origin_city.into(),
            origin_country: origin_country.into(),
            origin_country_code: origin_country_code.into(),
            service_type,
            weight: None,
            deadline: None,
            required_languages: None,
        }
    }

    pub fn with_weight(mut self, weight: Decimal) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_required_languages(mut self, languages: Vec<String>) -> Self {
        self.required_languages = Some(languages);
        self
    }
}
