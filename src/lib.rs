//! Batch exporter for the GeoNames `cities5000` dump.
//!
//! Downloads the dump once, extracts the city table, groups cities by ISO2
//! country code, keeps the most populous cities per country and writes a
//! pretty-printed JSON feed ordered by country display name.

pub mod app;
pub mod archive;
pub mod config;
pub mod countries;
pub mod domain;
pub mod error;
pub mod geonames;
pub mod output;
pub mod report;
pub mod staging;
pub mod table;
