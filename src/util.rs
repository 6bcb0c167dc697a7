//! Utility functions for arcbathy.

use crate::data::BathymetryGrid;

/// Format a human-readable summary of a loaded grid.
pub fn format_summary(grid: &BathymetryGrid) -> String {
    let header = grid.header();
    let axes = grid.geodetic_axes();
    let mut text = String::new();

    match grid.source().and_then(|p| p.file_name()) {
        Some(name) => text.push_str(&format!("Bathymetry Grid: {}\n", name.to_string_lossy())),
        None => text.push_str("Bathymetry Grid\n"),
    }
    text.push_str(&"=".repeat(60));
    text.push('\n');

    text.push_str(&format!(
        "Dimensions:   {} cols x {} rows\n",
        header.ncols, header.nrows
    ));
    text.push_str(&format!(
        "Longitude:    {} .. {} deg\n",
        format_coord(axes.longitudes[0]),
        format_coord(axes.longitudes[axes.longitudes.len() - 1])
    ));
    text.push_str(&format!(
        "Latitude:     {} .. {} deg\n",
        format_coord(axes.latitudes[0]),
        format_coord(axes.latitudes[axes.latitudes.len() - 1])
    ));
    text.push_str(&format!("Cell size:    {} deg\n", header.cellsize));

    if grid.earth_radius() > 0.0 {
        text.push_str(&format!("Earth radius: {} m\n", grid.earth_radius()));
    } else {
        text.push_str("Earth radius: 0 m (surface relative)\n");
    }

    text.push_str(&format!(
        "Cells:        {} valid, {} missing\n",
        grid.valid_count(),
        grid.missing_count()
    ));
    match grid.depth_range() {
        Some((min, max)) => text.push_str(&format!("Depth range:  {:.2} .. {:.2} m\n", min, max)),
        None => text.push_str("Depth range:  none\n"),
    }

    text
}

/// Format one point query result as `lat lon depth`.
pub fn format_query(latitude: f64, longitude: f64, depth: Option<f64>) -> String {
    match depth {
        Some(d) => format!("{} {} {:.2}", format_coord(latitude), format_coord(longitude), d),
        None => format!("{} {} missing", format_coord(latitude), format_coord(longitude)),
    }
}

fn format_coord(value: f64) -> String {
    format!("{:.6}", value)
}
