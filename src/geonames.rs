use std::fs::File;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::error::ExportError;

/// Remote operations against the GeoNames dump server.
///
/// The archive is streamed to disk; the country reference list is fetched
/// as text and never staged locally.
pub trait GeoNamesClient: Send + Sync {
    fn download_file(&self, url: &str, destination: &Path) -> Result<(), ExportError>;
    fn fetch_text(&self, url: &str) -> Result<String, ExportError>;
}

#[derive(Clone)]
pub struct GeoNamesHttpClient {
    client: Client,
}

impl GeoNamesHttpClient {
    pub fn new() -> Result<Self, ExportError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("geonames-export/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| ExportError::Http(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|err| ExportError::Http(err.to_string()))?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, ExportError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| ExportError::Http(err.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "GeoNames request failed".to_string());
            return Err(ExportError::Status { status, message });
        }
        Ok(response)
    }
}

impl GeoNamesClient for GeoNamesHttpClient {
    fn download_file(&self, url: &str, destination: &Path) -> Result<(), ExportError> {
        let mut response = self.get(url)?;
        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| ExportError::Filesystem(err.to_string()))?;
        }
        let mut file =
            File::create(destination).map_err(|err| ExportError::Filesystem(err.to_string()))?;
        std::io::copy(&mut response, &mut file)
            .map_err(|err| ExportError::Filesystem(err.to_string()))?;
        Ok(())
    }

    fn fetch_text(&self, url: &str) -> Result<String, ExportError> {
        let response = self.get(url)?;
        response
            .text()
            .map_err(|err| ExportError::Http(err.to_string()))
    }
}
