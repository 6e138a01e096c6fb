use std::fmt;

use serde::{Deserialize, Serialize};

/// ISO2 country code as it appears in the dump.
///
/// The value is taken verbatim: grouping must follow whatever the source
/// field contains, so no normalization or validation happens here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One city row from the dump, immutable once decoded.
///
/// Field order matches the output contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub population: u64,
    pub wiki: String,
}

impl CityRecord {
    pub fn new(name: String, lat: f64, lon: f64, population: u64) -> Self {
        let wiki = wiki_url(&name);
        Self {
            name,
            lat,
            lon,
            population,
            wiki,
        }
    }
}

fn wiki_url(name: &str) -> String {
    format!("https://en.wikipedia.org/wiki/{}", name.replace(' ', "_"))
}
