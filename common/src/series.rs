use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use itertools::{Itertools, MinMaxResult};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Columns every measurement CSV must carry, in reporting order.
pub const REQUIRED_COLUMNS: [&str; 4] = ["t", "serial_ms", "thread_ms", "speedup"];

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("CSV not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("{} is missing columns: {missing:?}. Found: {found:?}", path.display())]
    MissingColumns {
        path: PathBuf,
        missing: Vec<String>,
        found: Vec<String>,
    },
    #[error("Read {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// One row of a benchmark run at a fixed thread count.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Measurement {
    pub t: u32,
    pub serial_ms: f64,
    pub thread_ms: f64,
    pub speedup: f64,
}

/// Measurements of one view, ordered by thread count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    rows: Vec<Measurement>,
}

impl Series {
    /// Builds a series from rows in any order. The sort is stable, so rows sharing a
    /// thread count keep their relative order.
    pub fn new(mut rows: Vec<Measurement>) -> Self {
        rows.sort_by_key(|row| row.t);
        Self { rows }
    }

    pub fn rows(&self) -> &[Measurement] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Smallest and largest thread count
    pub fn t_range(&self) -> Option<(u32, u32)> {
        match self.rows.iter().map(|row| row.t).minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(t) => Some((t, t)),
            MinMaxResult::MinMax(min, max) => Some((min, max)),
        }
    }

    /// Serial time of the lowest thread count, used as the runtime baseline.
    pub fn baseline_ms(&self) -> Option<f64> {
        self.rows.first().map(|row| row.serial_ms)
    }

    pub fn thread_counts(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().map(|row| row.t)
    }
}

/// Thread count range covered by either series.
pub fn union_t_range(a: &Series, b: &Series) -> Option<(u32, u32)> {
    match (a.t_range(), b.t_range()) {
        (Some((a_min, a_max)), Some((b_min, b_max))) => Some((a_min.min(b_min), a_max.max(b_max))),
        (Some(range), None) | (None, Some(range)) => Some(range),
        (None, None) => None,
    }
}

/// Loads a measurement CSV and orders it by thread count.
///
/// Only the presence of the required columns is validated. Extra columns are
/// ignored and values are not range checked.
pub fn load_csv(path: &Path) -> Result<Series, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let csv_error = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .trim(Trim::Fields)
        .from_path(path)
        .map_err(csv_error)?;

    let found = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_owned)
        .collect::<Vec<_>>();
    let missing = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !found.iter().any(|header| header.as_str() == **column))
        .map(|column| column.to_string())
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns {
            path: path.to_path_buf(),
            missing,
            found,
        });
    }

    let rows = reader
        .deserialize::<Measurement>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(csv_error)?;
    debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(Series::new(rows))
}
