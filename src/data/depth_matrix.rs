//! Depth matrix reading and statistics.

use super::Header;
use crate::error::{BathyError, Result};
use ndarray::Array2;
use std::io::BufRead;

/// Upper bound on cells reserved before any data has been read.
const INITIAL_CAPACITY: usize = 1 << 20;

/// Depth samples indexed `[latitude, longitude]`, southernmost row first.
///
/// Cells matching the header's `NODATA_VALUE` are stored as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthMatrix {
    values: Array2<Option<f64>>,
}

impl DepthMatrix {
    /// Read `nrows * ncols` depths following the header.
    ///
    /// The file lists rows north to south, so the k-th row read lands at
    /// `nrows - 1 - k`. `first_line` is the 1-based line number of the
    /// first data line, used in error messages.
    pub fn read<R: BufRead>(
        reader: &mut R,
        header: &Header,
        nodata_tolerance: f64,
        first_line: usize,
    ) -> Result<Self> {
        let ncols = header.ncols;
        let nrows = header.nrows;
        let expected = header.cell_count();

        // File order; grows with the data so a lying header cannot force a huge allocation.
        let mut cells: Vec<Option<f64>> = Vec::with_capacity(expected.min(INITIAL_CAPACITY));
        let mut found = 0usize;

        let mut buf = Vec::new();
        let mut line_no = first_line;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            // Undecodable bytes become U+FFFD and fail the numeric parse below.
            let line = String::from_utf8_lossy(&buf);
            for token in line.split_whitespace() {
                if found < expected {
                    let depth: f64 = token
                        .parse()
                        .ok()
                        .filter(|v: &f64| v.is_finite())
                        .ok_or_else(|| BathyError::not_numeric("depth", token, line_no))?;

                    cells.push(if header.is_nodata(depth, nodata_tolerance) {
                        None
                    } else {
                        Some(depth)
                    });
                }
                found += 1;
            }
            line_no += 1;
        }

        if found != expected {
            return Err(BathyError::TokenCountMismatch { expected, found });
        }

        let south_first: Vec<Option<f64>> = cells
            .chunks(ncols)
            .rev()
            .flat_map(|row| row.iter().copied())
            .collect();
        let values = Array2::from_shape_vec((nrows, ncols), south_first)
            .map_err(|e| BathyError::InvalidGrid(format!("Invalid shape/data size: {}", e)))?;
        Ok(Self { values })
    }

    /// Cell values.
    pub fn values(&self) -> &Array2<Option<f64>> {
        &self.values
    }

    /// Consume the matrix, returning its cells.
    pub fn into_values(self) -> Array2<Option<f64>> {
        self.values
    }

    /// Depth at `[lat_index, lon_index]`; `None` when missing or out of range.
    pub fn get(&self, lat_index: usize, lon_index: usize) -> Option<f64> {
        self.values.get((lat_index, lon_index)).copied().flatten()
    }

    /// `(nrows, ncols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// Count of cells with a measured depth.
    pub fn valid_count(&self) -> usize {
        self.values.iter().flatten().count()
    }

    /// Count of sentinel cells.
    pub fn missing_count(&self) -> usize {
        self.values.len() - self.valid_count()
    }

    /// Minimum and maximum measured depth.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.values.iter().flatten().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
    }

    /// Mean measured depth.
    pub fn mean(&self) -> Option<f64> {
        let (sum, count) = self
            .values
            .iter()
            .flatten()
            .fold((0.0f64, 0usize), |(s, c), &v| (s + v, c + 1));
        if count > 0 {
            Some(sum / count as f64)
        } else {
            None
        }
    }
}
