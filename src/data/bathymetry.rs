//! Assembled bathymetry grid.

use super::{ArcReader, AxisSet, DepthMatrix, Header};
use crate::config::LoadOptions;
use crate::coords;
use crate::error::{BathyError, Result};
use crate::grid::{Axis, DataGrid};
use crate::util;
use ndarray::Array2;
use std::fmt;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Bathymetry in spherical-earth coordinates, ready for interpolation.
///
/// Axis 0 of the underlying grid is colatitude (radians, decreasing as
/// latitude increases), axis 1 is longitude (radians). Cell values are
/// radial distances: `earth_radius - depth`, or `-depth` when the earth
/// radius is zero. Missing cells stay `None`.
#[derive(Debug, Clone)]
pub struct BathymetryGrid {
    header: Header,
    earth_radius: f64,
    grid: DataGrid,
    valid_count: usize,
    depth_range: Option<(f64, f64)>,
    source: Option<PathBuf>,
}

impl BathymetryGrid {
    /// Load an ARC ASCII file with default grid behaviour.
    ///
    /// `earth_radius` is in meters; zero keeps depths relative to the
    /// ocean surface.
    pub fn load(path: impl AsRef<Path>, earth_radius: f64) -> Result<Self> {
        Self::load_with(path, &LoadOptions::new(earth_radius))
    }

    /// Load an ARC ASCII file with explicit options.
    pub fn load_with(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        ArcReader::read_file(path.as_ref(), options)
    }

    /// Load from an in-memory or already opened source.
    pub fn from_reader<R: BufRead>(mut reader: R, options: &LoadOptions) -> Result<Self> {
        ArcReader::read(&mut reader, options)
    }

    /// Convert axes and depths to spherical-earth coordinates and freeze
    /// them into a grid.
    pub fn assemble(
        axes: AxisSet,
        matrix: DepthMatrix,
        header: Header,
        options: &LoadOptions,
    ) -> Result<Self> {
        let earth_radius = options.earth_radius;
        if matrix.shape() != (axes.latitudes.len(), axes.longitudes.len()) {
            return Err(BathyError::InvalidGrid(format!(
                "depth matrix {:?} does not match {} latitudes x {} longitudes",
                matrix.shape(),
                axes.latitudes.len(),
                axes.longitudes.len()
            )));
        }
        let valid_count = matrix.valid_count();
        let depth_range = matrix.min_max();

        let colatitudes = Axis::new(
            axes.latitudes
                .iter()
                .map(|&lat| coords::to_colatitude(lat))
                .collect(),
        )?;
        let longitudes = Axis::new(
            axes.longitudes
                .iter()
                .map(|&lon| coords::to_longitude(lon))
                .collect(),
        )?;

        let radial = Array2::from_shape_fn(matrix.shape(), |(i, j)| {
            matrix.get(i, j).map(|depth| {
                coords::to_spherical(axes.latitudes[i], axes.longitudes[j], depth, earth_radius)
                    .radius
            })
        });

        let grid = DataGrid::new([colatitudes, longitudes], radial)?
            .with_interp(options.interp)
            .with_edge_limit(options.edge_limit)
            .with_missing_policy(options.missing_policy);

        Ok(Self {
            header,
            earth_radius,
            grid,
            valid_count,
            depth_range,
            source: None,
        })
    }

    pub(crate) fn with_source(mut self, path: PathBuf) -> Self {
        self.source = Some(path);
        self
    }

    /// Header the grid was built from.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Earth radius used for the radial conversion (meters).
    pub fn earth_radius(&self) -> f64 {
        self.earth_radius
    }

    /// File the grid was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The underlying interpolation grid.
    pub fn grid(&self) -> &DataGrid {
        &self.grid
    }

    /// Latitude and longitude axes in degrees, both ascending.
    pub fn geodetic_axes(&self) -> AxisSet {
        AxisSet::from_header(&self.header)
    }

    /// Colatitude axis (radians).
    pub fn colatitudes(&self) -> &Axis {
        &self.grid.axes()[0]
    }

    /// Longitude axis (radians).
    pub fn longitudes(&self) -> &Axis {
        &self.grid.axes()[1]
    }

    /// Radial values indexed `[latitude, longitude]`, southernmost row first.
    pub fn radial(&self) -> &Array2<Option<f64>> {
        self.grid.values()
    }

    /// Count of cells with a measured depth.
    pub fn valid_count(&self) -> usize {
        self.valid_count
    }

    /// Count of missing cells.
    pub fn missing_count(&self) -> usize {
        self.header.cell_count() - self.valid_count
    }

    /// Shallowest and deepest measured depth in the file (meters).
    pub fn depth_range(&self) -> Option<(f64, f64)> {
        self.depth_range
    }

    /// Interpolated radial value at a geodetic position.
    pub fn radius_at(&self, latitude_deg: f64, longitude_deg: f64) -> Option<f64> {
        self.grid.value_at([
            coords::to_colatitude(latitude_deg),
            coords::to_longitude(longitude_deg),
        ])
    }

    /// Interpolated positive-down depth at a geodetic position.
    pub fn depth_at(&self, latitude_deg: f64, longitude_deg: f64) -> Option<f64> {
        self.radius_at(latitude_deg, longitude_deg)
            .map(|r| coords::to_depth(r, self.earth_radius))
    }
}

impl fmt::Display for BathymetryGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&util::format_summary(self))
    }
}
