use std::collections::BTreeSet;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shipment::ServiceType;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourierId(pub String);

impl fmt::Display for CourierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourierStatus {
    Available,
    Busy,
    Offline,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourierLocation {
    pub country: String,
    pub country_code: String,
    #[serde(default)]
    pub city: Option<String>,
}

impl CourierLocation {
    /// City when known, otherwise the country.
    pub fn label(&self) -> &str {
        match self.city.as_deref().map(str::trim) {
            Some(city) if !city.is_empty() => city,
            _ => &self.country,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourierSkills {
    #[serde(default)]
    pub languages: BTreeSet<String>,
    #[serde(default)]
    pub max_carry_weight: Option<Decimal>,
    #[serde(default)]
    pub service_types: BTreeSet<ServiceType>,
    #[serde(default)]
    pub certifications: Option<Vec<String>>,
}

impl CourierSkills {
    pub fn supports(&self, service_type: ServiceType) -> bool {
        self.service_types.contains(&service_type)
    }
}

/// A courier record as supplied by the roster owner. Never mutated by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourierCandidate {
    pub id: CourierId,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub location: CourierLocation,
    #[serde(default)]
    pub skills: CourierSkills,
    pub status: CourierStatus,
    pub active: bool,
    pub online: bool,
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{CourierCandidate, CourierStatus};
    use crate::domain::shipment::ServiceType;

    #[test]
    fn roster_record_deserializes_with_optional_fields_missing() {
        let raw = r#"{
            "id": "c-42",
            "name": "Jo",
            "location": { "country": "Germany", "country_code": "DE" },
            "status": "busy",
            "active": true,
            "online": false
        }"#;

        let candidate: CourierCandidate = serde_json::from_str(raw).expect("valid record");

        assert_eq!(candidate.status, CourierStatus::Busy);
        assert_eq!(candidate.location.label(), "Germany");
        assert!(candidate.phone.is_none());
        assert!(candidate.skills.service_types.is_empty());
    }

    #[test]
    fn skills_accept_service_type_codes() {
        let raw = r#"{
            "id": "c-7",
            "name": "Ana",
            "location": { "country": "Spain", "country_code": "ES", "city": " " },
            "skills": { "service_types": ["OBC"], "max_carry_weight": "22.5" },
            "status": "available",
            "active": true,
            "online": true
        }"#;

        let candidate: CourierCandidate = serde_json::from_str(raw).expect("valid record");

        assert!(candidate.skills.supports(ServiceType::Obc));
        assert!(!candidate.skills.supports(ServiceType::Nfo));
        assert_eq!(candidate.skills.max_carry_weight, Some(Decimal::new(225, 1)));
        assert_eq!(candidate.location.label(), "Spain");
    }
}
