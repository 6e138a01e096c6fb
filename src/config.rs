use camino::Utf8PathBuf;

/// Fixed parameters of the export pipeline.
///
/// The production values mirror the GeoNames dump layout; tests override the
/// path fields to point into a sandbox.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub cities_url: String,
    pub country_info_url: String,
    pub archive_path: Utf8PathBuf,
    pub table_member: String,
    pub table_path: Utf8PathBuf,
    pub output_path: Utf8PathBuf,
    pub population_cutoff: u64,
    pub major_city_count: usize,
    pub minor_city_count: usize,
    pub min_city_fields: usize,
    pub min_country_fields: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            cities_url: "https://download.geonames.org/export/dump/cities5000.zip".to_string(),
            country_info_url: "https://download.geonames.org/export/dump/countryInfo.txt"
                .to_string(),
            archive_path: Utf8PathBuf::from("cities5000.zip"),
            table_member: "cities5000.txt".to_string(),
            table_path: Utf8PathBuf::from("cities5000.txt"),
            output_path: Utf8PathBuf::from("src/data/cities.json"),
            population_cutoff: 1_000_000,
            major_city_count: 10,
            minor_city_count: 3,
            min_city_fields: 15,
            min_country_fields: 5,
        }
    }
}

impl ExportConfig {
    /// Selection bound for a country given its summed city population.
    pub fn city_count_for(&self, total_population: u64) -> usize {
        if total_population >= self.population_cutoff {
            self.major_city_count
        } else {
            self.minor_city_count
        }
    }
}
