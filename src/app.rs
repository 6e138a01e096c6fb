use std::fs::File;
use std::io::BufReader;

use serde::Serialize;

use crate::archive;
use crate::config::ExportConfig;
use crate::countries::CountryNames;
use crate::error::ExportError;
use crate::geonames::GeoNamesClient;
use crate::report;
use crate::staging::Staging;
use crate::table::CityTable;

#[derive(Debug, Clone)]
pub struct ProgressEvent {
    pub message: String,
}

pub trait ProgressSink {
    fn event(&self, event: ProgressEvent);
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub countries: usize,
    pub cities: usize,
    pub skipped_short_rows: usize,
    pub skipped_invalid_rows: usize,
    pub output_path: String,
}

pub struct App<C: GeoNamesClient> {
    config: ExportConfig,
    staging: Staging,
    client: C,
}

impl<C: GeoNamesClient> App<C> {
    pub fn new(config: ExportConfig, client: C) -> Self {
        let staging = Staging::new(&config);
        Self {
            config,
            staging,
            client,
        }
    }

    /// Run the whole pipeline: stage the archive and table, group the rows,
    /// resolve country names and write the report.
    pub fn run(&self, sink: &dyn ProgressSink) -> Result<ExportSummary, ExportError> {
        self.fetch_archive(sink)?;
        self.extract_table(sink)?;

        let file = File::open(self.staging.table().as_std_path())
            .map_err(|err| ExportError::Filesystem(err.to_string()))?;
        let table = CityTable::read_from(BufReader::new(file), &self.config)?;

        // The country feed is small and changes upstream; it is fetched live
        // on every run rather than staged.
        let feed = self.client.fetch_text(&self.config.country_info_url)?;
        let names = CountryNames::parse(&feed, self.config.min_country_fields);

        let cities = table.city_count();
        let skipped_short_rows = table.skipped_short_rows;
        let skipped_invalid_rows = table.skipped_invalid_rows;
        let entries = report::build_report(table, &names, &self.config);
        let json = report::render_json(&entries)?;
        Staging::write_bytes_atomic(self.staging.output(), &json)?;

        Ok(ExportSummary {
            countries: entries.len(),
            cities,
            skipped_short_rows,
            skipped_invalid_rows,
            output_path: self.staging.output().to_string(),
        })
    }

    fn fetch_archive(&self, sink: &dyn ProgressSink) -> Result<(), ExportError> {
        if Staging::is_staged(self.staging.archive()) {
            return Ok(());
        }
        sink.event(ProgressEvent {
            message: format!("downloading {}", self.config.cities_url),
        });
        let staged = Staging::tempfile_beside(self.staging.archive())?;
        self.client
            .download_file(&self.config.cities_url, staged.path())?;
        Staging::persist_temp(staged, self.staging.archive())
    }

    fn extract_table(&self, sink: &dyn ProgressSink) -> Result<(), ExportError> {
        if Staging::is_staged(self.staging.table()) {
            return Ok(());
        }
        sink.event(ProgressEvent {
            message: format!("extracting {}", self.config.table_member),
        });
        let content = archive::extract_member(
            self.staging.archive().as_std_path(),
            &self.config.table_member,
        )?;
        Staging::write_bytes_atomic(self.staging.table(), &content)
    }
}
