//! Year-indexed tables read from the scenario CSV files.

use std::{fs::File, io, path::Path};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use crate::error::{Result, VizError};

/// Name of the year column of every dataset file.
pub const YEAR_COLUMN: &str = "t";

/// A small table: one row per year, one `f64` column per parameter.
/// Missing cells are `NaN`.
///
/// Serializes as a column data source: `{"t": [...], "<column>": [...]}`.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    source: String,
    years: Vec<i32>,
    columns: IndexMap<String, Vec<f64>>, // Invariant: all of length `years.len()`
}

fn parse_cell(source: &str, column: &str, cell: &str) -> Result<f64> {
    let cell = cell.trim();
    if cell.is_empty() || cell.eq_ignore_ascii_case("nan") {
        return Ok(f64::NAN)
    }
    cell.parse::<f64>().map_err(|_| VizError::InvalidNumber {
        source_name: source.to_string(),
        column: column.to_string(),
        value: cell.to_string() })
}

impl Frame {
    /// An empty table over `years` (used to assemble wide tables).
    pub fn with_years(source: impl Into<String>, years: Vec<i32>) -> Self {
        Frame { source: source.into(), years, columns: IndexMap::new() }
    }

    /// Read the year column and the columns `usecols` from CSV data.
    /// `source` names the data in error messages.  Columns of the file
    /// not listed in `usecols` are ignored.
    pub fn read_csv<R: io::Read>(reader: R, source: &str, usecols: &[&str])
                                 -> Result<Self> {
        let csv_err = |e| VizError::Csv { source_name: source.to_string(),
                                          source: e };
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = rdr.headers().map_err(csv_err)?.clone();
        let position = |name: &str| {
            headers.iter().position(|h| h == name)
                .ok_or_else(|| VizError::MissingColumn {
                    source_name: source.to_string(),
                    column: name.to_string() })
        };
        let year_idx = position(YEAR_COLUMN)?;
        let mut wanted: Vec<(&str, usize)> = Vec::with_capacity(usecols.len());
        for &name in usecols.iter().filter(|&&c| c != YEAR_COLUMN) {
            if wanted.iter().any(|&(w, _)| w == name) { continue }
            wanted.push((name, position(name)?));
        }

        let mut years = Vec::new();
        let mut columns: IndexMap<String, Vec<f64>> = wanted.iter()
            .map(|(name, _)| (name.to_string(), Vec::new())).collect();
        for record in rdr.records() {
            let record = record.map_err(csv_err)?;
            let cell = |i: usize| record.get(i).unwrap_or("");
            // Years are sometimes written as floats ("2010.0").
            let year = parse_cell(source, YEAR_COLUMN, cell(year_idx))?;
            if !year.is_finite() || year.fract() != 0. {
                return Err(VizError::InvalidNumber {
                    source_name: source.to_string(),
                    column: YEAR_COLUMN.to_string(),
                    value: cell(year_idx).to_string() })
            }
            years.push(year as i32);
            for (name, i) in &wanted {
                let v = parse_cell(source, name, cell(*i))?;
                if let Some(col) = columns.get_mut(*name) { col.push(v) }
            }
        }
        Ok(Frame { source: source.to_string(), years, columns })
    }

    /// Read the CSV file at `path`, see [`Frame::read_csv`].
    pub fn from_path(path: &Path, usecols: &[&str]) -> Result<Self> {
        let fh = File::open(path).map_err(|source| VizError::Io {
            path: path.to_path_buf(), source })?;
        let frame = Self::read_csv(fh, &path.display().to_string(), usecols)?;
        tracing::debug!(path = %path.display(), rows = frame.len(),
                        "loaded csv");
        Ok(frame)
    }

    /// Where the data came from.
    pub fn source(&self) -> &str { &self.source }

    pub fn years(&self) -> &[i32] { &self.years }

    pub fn len(&self) -> usize { self.years.len() }

    pub fn is_empty(&self) -> bool { self.years.is_empty() }

    /// Names of the value columns (the year column excluded).
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|k| k.as_str())
    }

    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.columns.get(name).map(|c| c.as_slice())
            .ok_or_else(|| VizError::MissingColumn {
                source_name: self.source.clone(),
                column: name.to_string() })
    }

    /// Value of `column` in `year`.
    pub fn value_at(&self, column: &str, year: i32) -> Result<f64> {
        let col = self.column(column)?;
        let i = self.years.iter().position(|&y| y == year)
            .ok_or_else(|| VizError::MissingYear {
                source_name: self.source.clone(), year })?;
        Ok(col[i])
    }

    /// Last year and value of `column`, if the table has rows.
    pub fn last(&self, column: &str) -> Result<Option<(i32, f64)>> {
        let col = self.column(column)?;
        Ok(self.years.last().copied().zip(col.last().copied()))
    }

    /// Add (or replace) a column.  `values` must have one entry per
    /// year.
    pub(crate) fn insert_column(&mut self, name: impl Into<String>,
                                values: Vec<f64>) {
        debug_assert_eq!(values.len(), self.years.len());
        self.columns.insert(name.into(), values);
    }

    /// Keep the rows whose year satisfies `keep`.
    pub fn retain_years(mut self, keep: impl Fn(i32) -> bool) -> Self {
        let mask: Vec<bool> = self.years.iter().map(|&y| keep(y)).collect();
        let filter = |v: &mut Vec<f64>| {
            let mut m = mask.iter();
            v.retain(|_| *m.next().unwrap_or(&false));
        };
        for col in self.columns.values_mut() { filter(col) }
        let mut m = mask.iter();
        self.years.retain(|_| *m.next().unwrap_or(&false));
        self
    }

    /// Drop the rows of `year`.  The 2007 calibration year is dropped
    /// from every chart.
    pub fn without_year(self, year: i32) -> Self {
        self.retain_years(|y| y != year)
    }

    /// Keep only the rows of `years`.
    pub fn only_years(self, years: &[i32]) -> Self {
        self.retain_years(|y| years.contains(&y))
    }
}

impl Serialize for Frame {
    fn serialize<S: Serializer>(&self, serializer: S)
                                -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len() + 1))?;
        map.serialize_entry(YEAR_COLUMN, &self.years)?;
        for (name, values) in &self.columns {
            // JSON has no NaN.
            let values: Vec<Option<f64>> = values.iter()
                .map(|v| if v.is_finite() { Some(*v) } else { None })
                .collect();
            map.serialize_entry(name, &values)?;
        }
        map.end()
    }
}
