//! Load configuration.

use crate::error::{BathyError, Result};
use crate::grid::{InterpMethod, MissingPolicy};

/// Reference earth radius of the acoustic model's sphere (meters).
///
/// Provided for callers; loading never applies it implicitly.
pub const EARTH_RADIUS: f64 = 6_378_101.030_201_019;

/// Default relative tolerance when matching cells against `NODATA_VALUE`.
pub const DEFAULT_NODATA_TOLERANCE: f64 = 1e-6;

/// Options controlling how a grid is loaded and queried.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    /// Local earth radius of curvature (meters). Zero keeps depths
    /// relative to the ocean surface.
    pub earth_radius: f64,
    /// Relative tolerance for the missing-data sentinel.
    pub nodata_tolerance: f64,
    /// Interpolation method along (latitude, longitude).
    pub interp: [InterpMethod; 2],
    /// Edge limiting along (latitude, longitude).
    pub edge_limit: [bool; 2],
    /// How queries over missing cells are answered.
    pub missing_policy: MissingPolicy,
}

impl LoadOptions {
    /// Options for the given earth radius with default grid behaviour.
    pub fn new(earth_radius: f64) -> Self {
        Self {
            earth_radius,
            nodata_tolerance: DEFAULT_NODATA_TOLERANCE,
            interp: [InterpMethod::default(); 2],
            edge_limit: [true; 2],
            missing_policy: MissingPolicy::default(),
        }
    }

    /// Set the sentinel tolerance.
    pub fn with_nodata_tolerance(mut self, tolerance: f64) -> Self {
        self.nodata_tolerance = tolerance;
        self
    }

    /// Use the same interpolation method on both axes.
    pub fn with_interp(mut self, method: InterpMethod) -> Self {
        self.interp = [method; 2];
        self
    }

    /// Use the same edge limiting on both axes.
    pub fn with_edge_limit(mut self, limit: bool) -> Self {
        self.edge_limit = [limit; 2];
        self
    }

    /// Set the missing-value policy.
    pub fn with_missing_policy(mut self, policy: MissingPolicy) -> Self {
        self.missing_policy = policy;
        self
    }

    /// Check that the numeric options are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.earth_radius.is_finite() || self.earth_radius < 0.0 {
            return Err(BathyError::InvalidOptions(format!(
                "earth radius {} must be zero or positive",
                self.earth_radius
            )));
        }
        if !self.nodata_tolerance.is_finite() || self.nodata_tolerance < 0.0 {
            return Err(BathyError::InvalidOptions(format!(
                "nodata tolerance {} must be zero or positive",
                self.nodata_tolerance
            )));
        }
        Ok(())
    }
}
