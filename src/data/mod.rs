//! Data reading and representation.
//!
//! This module handles reading ARC ASCII grid files and assembling their
//! contents into a [`BathymetryGrid`].

mod axes;
mod bathymetry;
mod depth_matrix;
mod header;
mod reader;

pub use axes::AxisSet;
pub use bathymetry::BathymetryGrid;
pub use depth_matrix::DepthMatrix;
pub use header::Header;
pub use reader::ArcReader;
