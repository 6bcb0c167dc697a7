//! Generic two-dimensional interpolation grid.
//!
//! A [`DataGrid`] owns two monotonic coordinate axes and a matching matrix
//! of optional values. Missing cells are stored as `None` and the grid's
//! [`MissingPolicy`] decides how queries touching them are answered.

mod axis;
mod data_grid;

pub use axis::Axis;
pub use data_grid::{DataGrid, InterpMethod, MissingPolicy};
