//! Origin-string parsing for city matching.

struct AirportSeed {
    code: &'static str,
    city: &'static str,
}

const AIRPORT_SEEDS: &[AirportSeed] = &[
    AirportSeed { code: "FRA", city: "Frankfurt" },
    AirportSeed { code: "MUC", city: "Munich" },
    AirportSeed { code: "BER", city: "Berlin" },
    AirportSeed { code: "HAM", city: "Hamburg" },
    AirportSeed { code: "DUS", city: "Dusseldorf" },
    AirportSeed { code: "STR", city: "Stuttgart" },
    AirportSeed { code: "CGN", city: "Cologne" },
    AirportSeed { code: "LHR", city: "London" },
    AirportSeed { code: "LGW", city: "London" },
    AirportSeed { code: "CDG", city: "Paris" },
    AirportSeed { code: "ORY", city: "Paris" },
    AirportSeed { code: "AMS", city: "Amsterdam" },
    AirportSeed { code: "BRU", city: "Brussels" },
    AirportSeed { code: "ZRH", city: "Zurich" },
    AirportSeed { code: "VIE", city: "Vienna" },
    AirportSeed { code: "MAD", city: "Madrid" },
    AirportSeed { code: "BCN", city: "Barcelona" },
    AirportSeed { code: "FCO", city: "Rome" },
    AirportSeed { code: "MXP", city: "Milan" },
    AirportSeed { code: "CPH", city: "Copenhagen" },
    AirportSeed { code: "ARN", city: "Stockholm" },
    AirportSeed { code: "IST", city: "Istanbul" },
    AirportSeed { code: "DXB", city: "Dubai" },
    AirportSeed { code: "JFK", city: "New York" },
    AirportSeed { code: "EWR", city: "Newark" },
    AirportSeed { code: "ORD", city: "Chicago" },
    AirportSeed { code: "ATL", city: "Atlanta" },
    AirportSeed { code: "LAX", city: "Los Angeles" },
    AirportSeed { code: "SFO", city: "San Francisco" },
    AirportSeed { code: "DFW", city: "Dallas" },
    AirportSeed { code: "HKG", city: "Hong Kong" },
    AirportSeed { code: "SIN", city: "Singapore" },
    AirportSeed { code: "NRT", city: "Tokyo" },
    AirportSeed { code: "PVG", city: "Shanghai" },
];

/// Resolve a three-letter IATA airport code to its city, ignoring case.
pub fn city_for_airport(code: &str) -> Option<&'static str> {
    let code = code.trim();
    AIRPORT_SEEDS.iter().find(|seed| seed.code.eq_ignore_ascii_case(code)).map(|seed| seed.city)
}

/// Pull the city name out of a free-text origin.
///
/// `"Frankfurt (FRA)"` yields `"Frankfurt"`, a bare known code such as `"FRA"` or `"(FRA)"` is
/// mapped through the airport table, and anything else is returned trimmed.
pub fn extract_city(origin: &str) -> String {
    let origin = origin.trim();

    if let Some((before, rest)) = origin.split_once('(') {
        let city = before.trim();
        if !city.is_empty() {
            return city.to_owned();
        }

        let code = rest.split(')').next().unwrap_or_default();
        return city_for_airport(code).map(str::to_owned).unwrap_or_else(|| code.trim().to_owned());
    }

    if is_airport_code(origin) {
        if let Some(city) = city_for_airport(origin) {
            return city.to_owned();
        }
    }

    origin.to_owned()
}

fn is_airport_code(value: &str) -> bool {
    value.len() == 3 && value.chars().all(|ch| ch.is_ascii_alphabetic())
}
