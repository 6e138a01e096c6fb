use std::collections::BTreeMap;
use std::io::BufRead;

use thiserror::Error;

use crate::config::ExportConfig;
use crate::domain::{CityRecord, CountryCode};
use crate::error::ExportError;

// Column indices in the GeoNames main table.
const NAME_FIELD: usize = 1;
const LAT_FIELD: usize = 4;
const LON_FIELD: usize = 5;
const COUNTRY_FIELD: usize = 8;
const POPULATION_FIELD: usize = 14;

#[derive(Debug, Error)]
pub enum RowError {
    #[error("expected at least {required} fields, found {found}")]
    TooFewFields { required: usize, found: usize },

    #[error("invalid latitude: {0}")]
    Latitude(String),

    #[error("invalid longitude: {0}")]
    Longitude(String),

    #[error("invalid population: {0}")]
    Population(String),
}

/// Decode one tab-separated row of the cities table.
pub fn decode_city_row(line: &str, min_fields: usize) -> Result<(CountryCode, CityRecord), RowError> {
    let fields: Vec<&str> = line.trim().split('\t').collect();
    if fields.len() < min_fields {
        return Err(RowError::TooFewFields {
            required: min_fields,
            found: fields.len(),
        });
    }

    let lat: f64 = fields[LAT_FIELD]
        .parse()
        .map_err(|_| RowError::Latitude(fields[LAT_FIELD].to_string()))?;
    let lon: f64 = fields[LON_FIELD]
        .parse()
        .map_err(|_| RowError::Longitude(fields[LON_FIELD].to_string()))?;
    let population: u64 = fields[POPULATION_FIELD]
        .parse()
        .map_err(|_| RowError::Population(fields[POPULATION_FIELD].to_string()))?;

    let country = CountryCode::new(fields[COUNTRY_FIELD]);
    let record = CityRecord::new(fields[NAME_FIELD].to_string(), lat, lon, population);
    Ok((country, record))
}

/// Cities grouped by country code, with skip counters for rejected rows.
#[derive(Debug, Default)]
pub struct CityTable {
    pub groups: BTreeMap<CountryCode, Vec<CityRecord>>,
    pub skipped_short_rows: usize,
    pub skipped_invalid_rows: usize,
}

impl CityTable {
    /// Read the whole table, grouping rows by country.
    ///
    /// Rows with too few fields are dropped without comment; rows whose
    /// numeric fields fail to parse are dropped with a warning and counted.
    pub fn read_from<R: BufRead>(reader: R, config: &ExportConfig) -> Result<Self, ExportError> {
        let mut table = Self::default();
        for line in reader.lines() {
            let line = line.map_err(|err| ExportError::Filesystem(err.to_string()))?;
            match decode_city_row(&line, config.min_city_fields) {
                Ok((country, record)) => {
                    table.groups.entry(country).or_default().push(record);
                }
                Err(RowError::TooFewFields { .. }) => {
                    table.skipped_short_rows += 1;
                }
                Err(err) => {
                    tracing::warn!("dropping city row: {err}");
                    table.skipped_invalid_rows += 1;
                }
            }
        }
        Ok(table)
    }

    pub fn city_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn row(name: &str, lat: &str, lon: &str, country: &str, population: &str) -> String {
        [
            "2988507", name, name, "", lat, lon, "P", "PPLC", country, "", "11", "75", "", "",
            population, "", "42", "Europe/Paris", "2024-01-01",
        ]
        .join("\t")
    }

    #[test]
    fn decode_valid_row() {
        let line = row("Paris", "48.85341", "2.3488", "FR", "2138551");
        let (country, record) = decode_city_row(&line, 15).unwrap();
        assert_eq!(country.as_str(), "FR");
        assert_eq!(record.name, "Paris");
        assert_eq!(record.lat, 48.85341);
        assert_eq!(record.lon, 2.3488);
        assert_eq!(record.population, 2_138_551);
        assert_eq!(record.wiki, "https://en.wikipedia.org/wiki/Paris");
    }

    #[test]
    fn decode_short_row() {
        let err = decode_city_row("a\tb\tc", 15).unwrap_err();
        assert_matches!(err, RowError::TooFewFields { found: 3, .. });
    }

    #[test]
    fn decode_bad_population() {
        let line = row("Paris", "48.85341", "2.3488", "FR", "many");
        let err = decode_city_row(&line, 15).unwrap_err();
        assert_matches!(err, RowError::Population(_));
    }

    #[test]
    fn decode_bad_latitude() {
        let line = row("Paris", "north", "2.3488", "FR", "2138551");
        let err = decode_city_row(&line, 15).unwrap_err();
        assert_matches!(err, RowError::Latitude(_));
    }

    #[test]
    fn grouping_and_skip_counts() {
        let config = ExportConfig::default();
        let input = [
            row("Paris", "48.85341", "2.3488", "FR", "2138551"),
            row("Lyon", "45.74846", "4.84671", "FR", "522969"),
            row("Berlin", "52.52437", "13.41053", "DE", "3426354"),
            "too\tshort".to_string(),
            row("Ghost Town", "0.0", "0.0", "XX", "unknown"),
        ]
        .join("\n");

        let table = CityTable::read_from(input.as_bytes(), &config).unwrap();
        assert_eq!(table.groups.len(), 2);
        assert_eq!(table.groups[&CountryCode::new("FR")].len(), 2);
        assert_eq!(table.groups[&CountryCode::new("DE")].len(), 1);
        assert_eq!(table.skipped_short_rows, 1);
        assert_eq!(table.skipped_invalid_rows, 1);
        assert_eq!(table.city_count(), 3);
    }

    #[test]
    fn groups_iterate_in_code_order() {
        let config = ExportConfig::default();
        let input = [
            row("Berlin", "52.52437", "13.41053", "DE", "3426354"),
            row("Vienna", "48.20849", "16.37208", "AT", "1691468"),
        ]
        .join("\n");

        let table = CityTable::read_from(input.as_bytes(), &config).unwrap();
        let codes: Vec<&str> = table.groups.keys().map(CountryCode::as_str).collect();
        assert_eq!(codes, vec!["AT", "DE"]);
    }
}
