//! arcbathy - ARC ASCII bathymetry grids for acoustic propagation models.
//!
//! Loads gridded seafloor depth in the ESRI/GEODAS "ARC ASCII grid" text
//! format and stores it in spherical-earth coordinates (colatitude,
//! longitude, radial distance) for fast interpolation.
//!
//! # Features
//!
//! - Strict six-line header validation
//! - South-to-north row ordering matching ascending latitude axes
//! - `NODATA_VALUE` cells kept as explicit missing values
//! - Nearest or linear interpolation with configurable missing-data policy
//!
//! # Example
//!
//! ```ignore
//! use arcbathy::{BathymetryGrid, EARTH_RADIUS};
//!
//! let grid = BathymetryGrid::load("crm_florida.asc", EARTH_RADIUS)?;
//! if let Some(depth) = grid.depth_at(26.5, -80.0) {
//!     println!("depth {:.1} m", depth);
//! }
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod config;
pub mod coords;
pub mod data;
pub mod error;
pub mod grid;
pub mod util;

pub use config::{LoadOptions, EARTH_RADIUS};
pub use data::{ArcReader, AxisSet, BathymetryGrid, DepthMatrix, Header};
pub use error::{BathyError, Result};
pub use grid::{Axis, DataGrid, InterpMethod, MissingPolicy};
