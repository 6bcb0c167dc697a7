//! Immutable 2-D grid with point interpolation.

use super::Axis;
use crate::error::{BathyError, Result};
use ndarray::Array2;

/// Interpolation method along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpMethod {
    /// Value of the closest grid point.
    Nearest,
    /// Linear blend of the two bracketing grid points.
    #[default]
    Linear,
}

impl InterpMethod {
    /// Get method name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Linear => "linear",
        }
    }
}

/// What a query returns when some of its contributing cells are missing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MissingPolicy {
    /// Any missing contributor makes the result missing.
    Propagate,
    /// Substitute a fixed value, in the grid's value units.
    Fallback(f64),
    /// Re-weight over the valid contributors only.
    #[default]
    Renormalize,
}

/// A read-only grid of optional values over two coordinate axes.
///
/// `values[[i, j]]` sits at `(axes[0][i], axes[1][j])`.
#[derive(Debug, Clone)]
pub struct DataGrid {
    axes: [Axis; 2],
    values: Array2<Option<f64>>,
    interp: [InterpMethod; 2],
    edge_limit: [bool; 2],
    missing: MissingPolicy,
}

impl DataGrid {
    /// Create a grid, checking that the matrix matches the axis lengths.
    pub fn new(axes: [Axis; 2], values: Array2<Option<f64>>) -> Result<Self> {
        let expected = (axes[0].len(), axes[1].len());
        if values.dim() != expected {
            return Err(BathyError::InvalidGrid(format!(
                "values have shape {:?} but axes have lengths {:?}",
                values.dim(),
                expected
            )));
        }

        Ok(Self {
            axes,
            values,
            interp: [InterpMethod::default(); 2],
            edge_limit: [true; 2],
            missing: MissingPolicy::default(),
        })
    }

    /// Set the interpolation method for each axis.
    pub fn with_interp(mut self, interp: [InterpMethod; 2]) -> Self {
        self.interp = interp;
        self
    }

    /// Set per-axis edge limiting. Limited axes clamp queries to the edge
    /// value, unlimited axes extrapolate linearly.
    pub fn with_edge_limit(mut self, edge_limit: [bool; 2]) -> Self {
        self.edge_limit = edge_limit;
        self
    }

    /// Set the missing-value policy.
    pub fn with_missing_policy(mut self, missing: MissingPolicy) -> Self {
        self.missing = missing;
        self
    }

    /// Both axes.
    pub fn axes(&self) -> &[Axis; 2] {
        &self.axes
    }

    /// Matrix shape as `(axis 0 length, axis 1 length)`.
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// Raw cell values.
    pub fn values(&self) -> &Array2<Option<f64>> {
        &self.values
    }

    /// Value stored at `(i, j)`; `None` when missing or out of range.
    pub fn cell(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get((i, j)).copied().flatten()
    }

    /// Interpolation method per axis.
    pub fn interp(&self) -> [InterpMethod; 2] {
        self.interp
    }

    /// Edge limiting per axis.
    pub fn edge_limit(&self) -> [bool; 2] {
        self.edge_limit
    }

    /// Missing-value policy.
    pub fn missing_policy(&self) -> MissingPolicy {
        self.missing
    }

    /// Interpolate the grid at `point`.
    ///
    /// Returns `None` for non-finite coordinates, or when missing cells
    /// contribute and the policy cannot produce a value.
    pub fn value_at(&self, point: [f64; 2]) -> Option<f64> {
        if !point.iter().all(|x| x.is_finite()) {
            return None;
        }

        let w0 = self.weights(0, point[0]);
        let w1 = self.weights(1, point[1]);

        let mut sum = 0.0;
        let mut weight_sum = 0.0;
        let mut missing = false;
        for &(i, wi) in &w0 {
            for &(j, wj) in &w1 {
                let w = wi * wj;
                if w == 0.0 {
                    continue;
                }
                match self.values[[i, j]] {
                    Some(v) => {
                        sum += w * v;
                        weight_sum += w;
                    }
                    None => missing = true,
                }
            }
        }

        if !missing {
            return Some(sum);
        }
        match self.missing {
            MissingPolicy::Propagate => None,
            MissingPolicy::Fallback(v) => Some(v),
            MissingPolicy::Renormalize => {
                if weight_sum.abs() > f64::EPSILON {
                    Some(sum / weight_sum)
                } else {
                    None
                }
            }
        }
    }

    /// Contributing indices and weights along one axis. The second entry
    /// carries zero weight when only one point contributes.
    fn weights(&self, dim: usize, x: f64) -> [(usize, f64); 2] {
        let axis = &self.axes[dim];
        match self.interp[dim] {
            InterpMethod::Nearest => {
                let i = axis.nearest(x);
                [(i, 1.0), (i, 0.0)]
            }
            InterpMethod::Linear if axis.len() < 2 => [(0, 1.0), (0, 0.0)],
            InterpMethod::Linear => {
                let (i, mut fraction) = axis.locate(x);
                if self.edge_limit[dim] {
                    fraction = fraction.clamp(0.0, 1.0);
                }
                [(i, 1.0 - fraction), (i + 1, fraction)]
            }
        }
    }
}
