//! Geodetic coordinate axes derived from a header.

use super::Header;

/// Cell-center coordinates of a grid, in degrees.
///
/// Both sequences ascend with a constant step of `cellsize`.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSet {
    /// Column centers, west to east.
    pub longitudes: Vec<f64>,
    /// Row centers, south to north.
    pub latitudes: Vec<f64>,
}

impl AxisSet {
    /// Build both axes from the header's origin and cell size.
    pub fn from_header(header: &Header) -> Self {
        let axis = |origin: f64, len: usize| -> Vec<f64> {
            (0..len)
                .map(|i| origin + i as f64 * header.cellsize)
                .collect()
        };

        Self {
            longitudes: axis(header.xll_center, header.ncols),
            latitudes: axis(header.yll_center, header.nrows),
        }
    }

    /// Whether both axes are strictly increasing.
    pub fn is_strictly_increasing(&self) -> bool {
        let ascending = |v: &[f64]| v.windows(2).all(|w| w[1] > w[0]);
        ascending(&self.longitudes) && ascending(&self.latitudes)
    }
}
