use serde::Serialize;

use crate::config::ExportConfig;
use crate::countries::CountryNames;
use crate::domain::{CityRecord, CountryCode};
use crate::error::ExportError;
use crate::table::CityTable;

/// One output entry: a country with its top cities by population.
#[derive(Debug, Clone, Serialize)]
pub struct CountryEntry {
    pub country: String,
    pub iso2: CountryCode,
    pub cities: Vec<CityRecord>,
}

/// Select the top cities per country and order the result by display name.
///
/// A country keeps 10 cities when its summed city population reaches the
/// cutoff, 3 otherwise. The per-country sort is stable, so equal populations
/// keep their input order.
pub fn build_report(
    table: CityTable,
    names: &CountryNames,
    config: &ExportConfig,
) -> Vec<CountryEntry> {
    let mut entries = Vec::with_capacity(table.groups.len());
    for (iso2, mut cities) in table.groups {
        let total: u64 = cities.iter().map(|city| city.population).sum();
        let bound = config.city_count_for(total);
        cities.sort_by(|a, b| b.population.cmp(&a.population));
        cities.truncate(bound);
        if cities.is_empty() {
            continue;
        }
        let country = names.resolve(&iso2).to_string();
        entries.push(CountryEntry {
            country,
            iso2,
            cities,
        });
    }
    entries.sort_by(|a, b| a.country.cmp(&b.country));
    entries
}

/// Pretty-printed UTF-8 JSON, non-ASCII characters kept literal.
pub fn render_json(entries: &[CountryEntry]) -> Result<Vec<u8>, ExportError> {
    serde_json::to_vec_pretty(entries).map_err(|err| ExportError::Encode(err.to_string()))
}
