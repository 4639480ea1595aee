//! CSV ingestion of investment catalogs.
//!
//! Expected layout: a header row, then one option per row with the columns
//! `id, description, cost, payback, risk` in that order. Any malformed row
//! fails the whole load.

use crate::domain::{
    catalog::{CatalogRuleError, InvestmentCatalog, InvestmentOption},
    value_objects::RiskCategory,
};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const COLUMNS: usize = 5;

/// Catalog loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to open catalog {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read catalog at line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("line {line}: expected 5 columns, found {found}")]
    ColumnCount { line: u64, found: usize },

    #[error("line {line}: invalid {field} '{value}': {source}")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    Rule(#[from] CatalogRuleError),
}

/// Load a catalog from a CSV file
pub fn load_catalog(path: impl AsRef<Path>) -> Result<InvestmentCatalog, CatalogError> {
    let path = path.as_ref();
    let reader = reader_builder()
        .from_path(path)
        .map_err(|source| CatalogError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let catalog = read_records(reader)?;
    debug!(path = %path.display(), options = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Load a catalog from any CSV source
pub fn load_catalog_from_reader<R: Read>(source: R) -> Result<InvestmentCatalog, CatalogError> {
    read_records(reader_builder().from_reader(source))
}

/// Map a risk label, falling back to High for anything unrecognized
pub fn map_risk_label(label: &str) -> RiskCategory {
    RiskCategory::from_label(label).unwrap_or(RiskCategory::High)
}

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(true).flexible(true).trim(Trim::All);
    builder
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<InvestmentCatalog, CatalogError> {
    let mut options = Vec::new();

    for (index, record) in reader.records().enumerate() {
        // Header occupies line 1
        let fallback_line = index as u64 + 2;
        let record = record.map_err(|source| CatalogError::Read {
            line: source
                .position()
                .map(|p| p.line())
                .unwrap_or(fallback_line),
            source,
        })?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(fallback_line);

        options.push(parse_record(&record, line)?);
    }

    Ok(InvestmentCatalog::new(options)?)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<InvestmentOption, CatalogError> {
    if record.len() != COLUMNS {
        return Err(CatalogError::ColumnCount {
            line,
            found: record.len(),
        });
    }

    let id: u32 = parse_field(record, 0, "id", line)?;
    let description = record[1].to_string();
    let cost: u64 = parse_field(record, 2, "cost", line)?;
    let payback: u64 = parse_field(record, 3, "payback", line)?;

    let label = &record[4];
    let risk = match RiskCategory::from_label(label) {
        Some(risk) => risk,
        None => {
            warn!(line, id, label, "unrecognized risk label, treating option as High risk");
            map_risk_label(label)
        }
    };

    Ok(InvestmentOption::new(id, description, cost, payback, risk))
}

fn parse_field<T>(
    record: &StringRecord,
    index: usize,
    field: &'static str,
    line: u64,
) -> Result<T, CatalogError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    let value = &record[index];
    value.parse().map_err(|source| CatalogError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
        source,
    })
}
