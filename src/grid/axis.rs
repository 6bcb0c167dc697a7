//! Monotonic coordinate axis.

use crate::error::{BathyError, Result};

/// A strictly monotonic sequence of coordinates along one grid dimension.
///
/// Axes may run in either direction: a colatitude axis built from ascending
/// latitudes decreases, a longitude axis increases.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    values: Vec<f64>,
    increasing: bool,
}

impl Axis {
    /// Build an axis from explicit coordinates.
    ///
    /// Fails unless the sequence is non-empty, finite and strictly
    /// monotonic.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(BathyError::InvalidGrid("axis has no coordinates".to_string()));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(BathyError::InvalidGrid(format!(
                "axis coordinate {} is not finite",
                bad
            )));
        }

        let increasing = values.len() < 2 || values[1] > values[0];
        let monotonic = values.windows(2).all(|w| {
            if increasing {
                w[1] > w[0]
            } else {
                w[1] < w[0]
            }
        });
        if !monotonic {
            return Err(BathyError::InvalidGrid(
                "axis coordinates are not strictly monotonic".to_string(),
            ));
        }

        Ok(Self { values, increasing })
    }

    /// Build an evenly spaced axis of `len` points starting at `first`.
    pub fn linear(first: f64, increment: f64, len: usize) -> Result<Self> {
        if increment == 0.0 || !increment.is_finite() {
            return Err(BathyError::InvalidGrid(format!(
                "axis increment {} must be finite and non-zero",
                increment
            )));
        }
        Self::new((0..len).map(|i| first + i as f64 * increment).collect())
    }

    /// Number of coordinates.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: an axis holds at least one coordinate.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All coordinates in storage order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Coordinate at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// First coordinate.
    pub fn first(&self) -> f64 {
        self.values[0]
    }

    /// Last coordinate.
    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Whether coordinates grow with index.
    pub fn is_increasing(&self) -> bool {
        self.increasing
    }

    /// Find the interval containing `x`.
    ///
    /// Returns the lower index `i` of the bracketing pair `(i, i + 1)` and
    /// the fractional position of `x` between them. Outside the axis the
    /// edge interval is used and the fraction falls below 0 or above 1.
    /// A single-point axis always yields `(0, 0.0)`.
    pub fn locate(&self, x: f64) -> (usize, f64) {
        let n = self.values.len();
        if n < 2 {
            return (0, 0.0);
        }

        let upper = if self.increasing {
            self.values.partition_point(|&v| v <= x)
        } else {
            self.values.partition_point(|&v| v >= x)
        };
        let index = upper.saturating_sub(1).min(n - 2);

        let lo = self.values[index];
        let hi = self.values[index + 1];
        (index, (x - lo) / (hi - lo))
    }

    /// Index of the coordinate closest to `x`, clamped to the axis.
    pub fn nearest(&self, x: f64) -> usize {
        let (index, fraction) = self.locate(x);
        if self.values.len() < 2 || fraction < 0.5 {
            index
        } else {
            index + 1
        }
    }
}
