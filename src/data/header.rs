//! ARC ASCII grid header.
//!
//! The header is six `KEY value` lines in a fixed order:
//!
//! ```text
//! NCOLS         601
//! NROWS         1201
//! XLLCENTER     -80.25000
//! YLLCENTER     26.00000
//! CELLSIZE      0.00083333
//! NODATA_VALUE  999999
//! ```
//!
//! Keys match case-insensitively. `XLLCORNER`/`YLLCORNER` may stand in for
//! the CENTER keys, in which case the origin is shifted by half a cell.

use crate::error::{BathyError, Result};
use std::io::BufRead;

/// Keys accepted in each header slot. The first entry names the slot.
const SLOTS: [&[&str]; 6] = [
    &["NCOLS"],
    &["NROWS"],
    &["XLLCENTER", "XLLCORNER"],
    &["YLLCENTER", "YLLCORNER"],
    &["CELLSIZE"],
    &["NODATA_VALUE"],
];

/// Parsed grid header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Header {
    /// Number of columns (longitudes).
    pub ncols: usize,
    /// Number of rows (latitudes).
    pub nrows: usize,
    /// Longitude of the center of the first column, degrees.
    pub xll_center: f64,
    /// Latitude of the center of the southernmost row, degrees.
    pub yll_center: f64,
    /// Cell size in degrees, shared by both axes.
    pub cellsize: f64,
    /// Sentinel marking cells without a measurement.
    pub nodata_value: f64,
}

/// One raw header line.
struct Entry<'a> {
    key: String,
    value: &'a str,
}

impl Header {
    /// Number of lines the header occupies.
    pub const LINES: usize = SLOTS.len();

    /// Read the six header lines from `reader`.
    ///
    /// Leaves the reader positioned at the first data line.
    pub fn parse<R: BufRead>(reader: &mut R) -> Result<Self> {
        let mut ncols = 0;
        let mut nrows = 0;
        let mut x_origin = (0.0, false);
        let mut y_origin = (0.0, false);
        let mut cellsize = 0.0;
        let mut nodata_value = 0.0;

        let mut buf = Vec::new();
        for (slot, keys) in SLOTS.iter().enumerate() {
            let line_no = slot + 1;
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Err(BathyError::UnexpectedEof {
                    section: "header",
                    line: line_no,
                });
            }

            // Undecodable bytes become U+FFFD and fail as keys or values.
            let line = String::from_utf8_lossy(&buf);
            let entry = Self::split_entry(&line, keys, line_no)?;
            match slot {
                0 => ncols = Self::parse_count(&entry, line_no)?,
                1 => nrows = Self::parse_count(&entry, line_no)?,
                2 => x_origin = (Self::parse_float(&entry, line_no)?, entry.key.ends_with("CORNER")),
                3 => y_origin = (Self::parse_float(&entry, line_no)?, entry.key.ends_with("CORNER")),
                4 => cellsize = Self::parse_float(&entry, line_no)?,
                _ => nodata_value = Self::parse_float(&entry, line_no)?,
            }
        }

        if cellsize <= 0.0 {
            return Err(BathyError::invalid_header(format!(
                "CELLSIZE must be positive, got {}",
                cellsize
            )));
        }
        let storage = ncols
            .checked_mul(nrows)
            .and_then(|cells| cells.checked_mul(std::mem::size_of::<Option<f64>>()));
        if !matches!(storage, Some(bytes) if bytes <= isize::MAX as usize) {
            return Err(BathyError::invalid_header(format!(
                "grid of {} x {} cells is too large",
                ncols, nrows
            )));
        }

        let half_cell = cellsize / 2.0;
        let center = |(value, is_corner): (f64, bool)| {
            if is_corner {
                value + half_cell
            } else {
                value
            }
        };

        Ok(Self {
            ncols,
            nrows,
            xll_center: center(x_origin),
            yll_center: center(y_origin),
            cellsize,
            nodata_value,
        })
    }

    /// Total number of data cells.
    pub fn cell_count(&self) -> usize {
        self.ncols * self.nrows
    }

    /// Whether `value` matches the sentinel within a relative tolerance.
    pub fn is_nodata(&self, value: f64, tolerance: f64) -> bool {
        (value - self.nodata_value).abs() <= tolerance * self.nodata_value.abs().max(1.0)
    }

    fn split_entry<'a>(line: &'a str, keys: &[&'static str], line_no: usize) -> Result<Entry<'a>> {
        let expected = keys[0];
        let mut tokens = line.split_whitespace();
        let key = match tokens.next() {
            Some(k) => k.to_ascii_uppercase(),
            None => {
                return Err(BathyError::MissingKey {
                    key: expected,
                    line: line_no,
                })
            }
        };

        if !keys.iter().any(|k| *k == key) {
            // A known key out of place, or a data row, means the expected one is absent.
            let known = SLOTS.iter().flat_map(|slot| slot.iter()).any(|k| *k == key);
            if known || key.parse::<f64>().is_ok() {
                return Err(BathyError::MissingKey {
                    key: expected,
                    line: line_no,
                });
            }
            return Err(BathyError::unknown_key(key, line_no));
        }

        let value = tokens
            .next()
            .ok_or_else(|| BathyError::not_numeric(key.clone(), "", line_no))?;
        if let Some(extra) = tokens.next() {
            return Err(BathyError::invalid_header(format!(
                "unexpected text '{}' after {} on line {}",
                extra, key, line_no
            )));
        }

        Ok(Entry { key, value })
    }

    fn parse_count(entry: &Entry<'_>, line_no: usize) -> Result<usize> {
        let n: i64 = entry
            .value
            .parse()
            .map_err(|_| BathyError::not_numeric(entry.key.clone(), entry.value, line_no))?;
        match usize::try_from(n) {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(BathyError::invalid_header(format!(
                "{} must be at least 1, got {}",
                entry.key, n
            ))),
        }
    }

    fn parse_float(entry: &Entry<'_>, line_no: usize) -> Result<f64> {
        let v: f64 = entry
            .value
            .parse()
            .map_err(|_| BathyError::not_numeric(entry.key.clone(), entry.value, line_no))?;
        if !v.is_finite() {
            return Err(BathyError::invalid_header(format!(
                "{} must be finite, got {}",
                entry.key, entry.value
            )));
        }
        Ok(v)
    }
}
