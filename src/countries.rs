use std::collections::HashMap;

use crate::domain::CountryCode;

/// ISO2 code to official country name, built from the live
/// `countryInfo.txt` feed.
#[derive(Debug, Default)]
pub struct CountryNames {
    names: HashMap<CountryCode, String>,
}

impl CountryNames {
    /// Parse the reference feed. Comment and blank lines are skipped, as are
    /// lines too short to carry the official-name column.
    pub fn parse(text: &str, min_fields: usize) -> Self {
        let mut names = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < min_fields {
                continue;
            }
            names.insert(CountryCode::new(fields[0]), fields[4].to_string());
        }
        Self { names }
    }

    /// Display name for a code, falling back to the code itself.
    pub fn resolve<'a>(&'a self, code: &'a CountryCode) -> &'a str {
        self.names
            .get(code)
            .map(String::as_str)
            .unwrap_or_else(|| code.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
