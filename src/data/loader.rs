use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use super::model::{Penguin, PenguinTable, Species};

/// Copy of the Palmer Penguins dataset shipped with the binary so the
/// dashboard always opens with data.
const EMBEDDED_CSV: &str = include_str!("../../data/penguins.csv");

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Structured parse failures surfaced while decoding the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("row {row}: unknown species '{value}'")]
    UnknownSpecies { row: usize, value: String },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the embedded dataset. Called once at startup; a failure here means
/// the shipped data file is broken and is fatal to the process.
pub fn load_embedded() -> Result<PenguinTable> {
    read_csv(EMBEDDED_CSV.as_bytes()).context("parsing embedded penguins.csv")
}

/// Load a penguins CSV from disk (File → Open…).
///
/// Expected layout: header row with at least the columns
/// `species,island,bill_length_mm,bill_depth_mm,body_mass_g`.
/// Extra columns (flipper length, sex, year) are ignored; `NA` or empty
/// measurement cells become absent values.
pub fn load_file(path: &Path) -> Result<PenguinTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_csv(file).with_context(|| format!("parsing {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV decoding
// ---------------------------------------------------------------------------

/// One raw CSV row. Species stays a string here so unknown labels can be
/// reported with their row number instead of a bare serde error.
#[derive(Debug, Deserialize)]
struct RawRow {
    species: String,
    island: String,
    #[serde(default, deserialize_with = "de_na_f64")]
    bill_length_mm: Option<f64>,
    #[serde(default, deserialize_with = "de_na_f64")]
    bill_depth_mm: Option<f64>,
    #[serde(default, deserialize_with = "de_na_f64")]
    body_mass_g: Option<f64>,
}

fn read_csv<R: Read>(reader: R) -> Result<PenguinTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for (row_no, result) in csv_reader.deserialize::<RawRow>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;

        let species =
            Species::from_name(&raw.species).ok_or_else(|| DatasetError::UnknownSpecies {
                row: row_no,
                value: raw.species.clone(),
            })?;

        rows.push(Penguin {
            species,
            island: raw.island,
            bill_length_mm: raw.bill_length_mm,
            bill_depth_mm: raw.bill_depth_mm,
            body_mass_g: raw.body_mass_g,
        });
    }

    Ok(PenguinTable::new(rows))
}

/// Decode a measurement cell, treating `NA`, `NaN` and empty as absent.
fn de_na_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let cell = String::deserialize(deserializer)?;
    let cell = cell.trim();
    if cell.is_empty() || cell.eq_ignore_ascii_case("na") || cell.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    cell.parse::<f64>().map(Some).map_err(serde::de::Error::custom)
}
