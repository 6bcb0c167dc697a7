//! Integration tests loading ARC ASCII files from disk.

use arcbathy::{BathyError, BathymetryGrid, LoadOptions, MissingPolicy, EARTH_RADIUS};
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "NCOLS 3\nNROWS 2\nXLLCENTER -80\nYLLCENTER 26\nCELLSIZE 1\nNODATA_VALUE 999999\n";

/// Write `contents` to a temporary `.asc` file.
fn write_grid(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".asc")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// Row order and axes
// =============================================================================

#[test]
fn test_rows_reversed_to_ascending_latitude() {
    let file = write_grid(&format!("{}1 2 3\n4 5 6\n", HEADER));
    let grid = BathymetryGrid::load(file.path(), 0.0).expect("Failed to load grid");

    let axes = grid.geodetic_axes();
    assert_eq!(axes.longitudes, vec![-80.0, -79.0, -78.0]);
    assert_eq!(axes.latitudes, vec![26.0, 27.0]);

    let rows: Vec<Vec<Option<f64>>> = grid
        .radial()
        .rows()
        .into_iter()
        .map(|row| row.to_vec())
        .collect();
    // Latitude 26 holds the last file row, latitude 27 the first.
    assert_eq!(rows[0], vec![Some(-4.0), Some(-5.0), Some(-6.0)]);
    assert_eq!(rows[1], vec![Some(-1.0), Some(-2.0), Some(-3.0)]);

    assert_eq!(grid.source(), Some(file.path()));
}

#[test]
fn test_axes_strictly_increasing_with_declared_lengths() {
    let header = "NCOLS 5\nNROWS 4\nXLLCENTER 10.5\nYLLCENTER -3.25\nCELLSIZE 0.25\nNODATA_VALUE -99999\n";
    let body: String = (0..4)
        .map(|r| {
            (0..5)
                .map(|c| format!("{}", r * 5 + c))
                .collect::<Vec<_>>()
                .join(" ")
                + "\n"
        })
        .collect();
    let file = write_grid(&format!("{}{}", header, body));
    let grid = BathymetryGrid::load(file.path(), EARTH_RADIUS).expect("Failed to load grid");

    let axes = grid.geodetic_axes();
    assert_eq!(axes.longitudes.len(), 5);
    assert_eq!(axes.latitudes.len(), 4);
    assert!(axes.is_strictly_increasing());

    assert_eq!(grid.longitudes().len(), 5);
    assert_eq!(grid.colatitudes().len(), 4);
    assert_eq!(grid.radial().dim(), (4, 5));
}

// =============================================================================
// Sentinel handling
// =============================================================================

#[test]
fn test_nodata_cells_are_missing() {
    let file = write_grid(&format!("{}1 999999 3\n4 5 999999.0\n", HEADER));
    let grid = BathymetryGrid::load(file.path(), 0.0).expect("Failed to load grid");

    assert_eq!(grid.grid().cell(1, 1), None);
    assert_eq!(grid.grid().cell(0, 2), None);
    assert_eq!(grid.missing_count(), 2);
    assert!(grid
        .radial()
        .iter()
        .flatten()
        .all(|&v| v.abs() < 999_000.0));
}

#[test]
fn test_negative_sentinel() {
    let header = HEADER.replace("999999", "-9999");
    let file = write_grid(&format!("{}-9999 2 3\n4 5 6\n", header));
    let grid = BathymetryGrid::load(file.path(), 0.0).expect("Failed to load grid");
    assert_eq!(grid.grid().cell(1, 0), None);
    assert_eq!(grid.valid_count(), 5);
}

#[test]
fn test_missing_policy_applies_to_queries() {
    let file = write_grid(&format!("{}1 999999 3\n4 5 6\n", HEADER));

    let propagate = LoadOptions::new(0.0).with_missing_policy(MissingPolicy::Propagate);
    let grid = BathymetryGrid::load_with(file.path(), &propagate).expect("Failed to load grid");
    assert_eq!(grid.depth_at(27.0, -79.0), None);

    let fallback = LoadOptions::new(0.0).with_missing_policy(MissingPolicy::Fallback(-100.0));
    let grid = BathymetryGrid::load_with(file.path(), &fallback).expect("Failed to load grid");
    assert_eq!(grid.depth_at(27.0, -79.0), Some(100.0));
}

#[test]
fn test_widened_tolerance_boundary() {
    // Band is 1e-3 * 999999 = 999.999 around the sentinel.
    let file = write_grid(&format!("{}999000 998999 3\n4 5 999999\n", HEADER));

    let widened = LoadOptions::new(0.0).with_nodata_tolerance(1e-3);
    let grid = BathymetryGrid::load_with(file.path(), &widened).expect("Failed to load grid");
    assert_eq!(grid.grid().cell(1, 0), None);
    assert_eq!(grid.grid().cell(1, 1), Some(-998_999.0));
    assert_eq!(grid.grid().cell(0, 2), None);
    assert_eq!(grid.missing_count(), 2);

    let default = LoadOptions::new(0.0);
    let grid = BathymetryGrid::load_with(file.path(), &default).expect("Failed to load grid");
    assert_eq!(grid.grid().cell(1, 0), Some(-999_000.0));
    assert_eq!(grid.missing_count(), 1);
}

// =============================================================================
// Line endings
// =============================================================================

#[test]
fn test_crlf_file_loads() {
    let contents = format!("{}1 2 3\r\n4 999999 6\r\n", HEADER.replace('\n', "\r\n"));
    let file = write_grid(&contents);
    let grid = BathymetryGrid::load(file.path(), 0.0).expect("Failed to load grid");

    let axes = grid.geodetic_axes();
    assert_eq!(axes.longitudes, vec![-80.0, -79.0, -78.0]);
    assert_eq!(axes.latitudes, vec![26.0, 27.0]);
    assert_eq!(grid.header().nodata_value, 999999.0);

    assert_eq!(grid.grid().cell(0, 0), Some(-4.0));
    assert_eq!(grid.grid().cell(0, 1), None);
    assert_eq!(grid.grid().cell(1, 2), Some(-3.0));
    assert_eq!(grid.missing_count(), 1);
}

// =============================================================================
// Earth radius conversion
// =============================================================================

#[test]
fn test_zero_radius_gives_negated_depths() {
    let file = write_grid(&format!("{}1 2 3\n4 5 6\n", HEADER));
    let grid = BathymetryGrid::load(file.path(), 0.0).expect("Failed to load grid");
    assert_eq!(grid.grid().cell(1, 0), Some(-1.0));
    assert_eq!(grid.earth_radius(), 0.0);
}

#[test]
fn test_positive_radius_gives_radial_distance() {
    let r = 6_371_000.0;
    let file = write_grid(&format!("{}1 2 3\n4 5 6\n", HEADER));
    let grid = BathymetryGrid::load(file.path(), r).expect("Failed to load grid");
    assert_eq!(grid.grid().cell(1, 0), Some(r - 1.0));
    assert_eq!(grid.grid().cell(0, 2), Some(r - 6.0));
}

#[test]
fn test_interpolated_depth_between_cells() {
    let file = write_grid(&format!("{}1 2 3\n4 5 6\n", HEADER));
    let grid = BathymetryGrid::load(file.path(), 0.0).expect("Failed to load grid");

    // Midway along longitude on the southern row.
    let d = grid.depth_at(26.0, -79.5).expect("depth should be present");
    assert_close(d, 4.5);

    // Queries outside the grid clamp to the edge.
    let d = grid.depth_at(30.0, -85.0).expect("depth should be present");
    assert_close(d, 1.0);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_missing_cellsize_is_format_error() {
    let header = HEADER.replace("CELLSIZE 1\n", "");
    let file = write_grid(&format!("{}1 2 3\n4 5 6\n", header));
    let err = BathymetryGrid::load(file.path(), 0.0).unwrap_err();
    assert!(err.is_format_error(), "unexpected error: {}", err);
    assert!(matches!(err, BathyError::MissingKey { key: "CELLSIZE", .. }));
}

#[test]
fn test_too_few_tokens_is_format_error() {
    let file = write_grid(&format!("{}1 2 3\n4 5\n", HEADER));
    let err = BathymetryGrid::load(file.path(), 0.0).unwrap_err();
    assert!(err.is_format_error());
    assert!(matches!(
        err,
        BathyError::TokenCountMismatch {
            expected: 6,
            found: 5
        }
    ));
}

#[test]
fn test_non_numeric_data_token() {
    let file = write_grid(&format!("{}1 2 3\n4 five 6\n", HEADER));
    let err = BathymetryGrid::load(file.path(), 0.0).unwrap_err();
    assert!(matches!(err, BathyError::NotNumeric { line: 8, .. }));
}

#[test]
fn test_oversized_header_is_format_error() {
    let header = HEADER.replace("NROWS 2", "NROWS 2000000000000000000");
    let file = write_grid(&format!("{}1 2 3\n", header));
    let err = BathymetryGrid::load(file.path(), 0.0).unwrap_err();
    assert!(err.is_format_error(), "unexpected error: {}", err);
}

#[test]
fn test_invalid_utf8_is_format_error() {
    let mut bytes = format!("{}1 2 3\n4 5 6\n", HEADER).into_bytes();
    let at = bytes.len() - 2;
    bytes[at] = 0xFF;
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(&bytes).expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");

    let err = BathymetryGrid::load(file.path(), 0.0).unwrap_err();
    assert!(err.is_format_error(), "unexpected error: {}", err);
    assert!(!err.is_io_error());
}

#[test]
fn test_nonexistent_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = BathymetryGrid::load(dir.path().join("absent.asc"), 0.0).unwrap_err();
    assert!(matches!(err, BathyError::FileNotFound { .. }));
    assert!(err.is_io_error());
}

#[test]
fn test_truncated_header_is_io_error() {
    let file = write_grid("NCOLS 3\nNROWS 2\nXLLCENTER -80\n");
    let err = BathymetryGrid::load(file.path(), 0.0).unwrap_err();
    assert!(err.is_io_error());
}

#[test]
fn test_negative_radius_rejected() {
    let file = write_grid(&format!("{}1 2 3\n4 5 6\n", HEADER));
    let err = BathymetryGrid::load(file.path(), -1.0).unwrap_err();
    assert!(matches!(err, BathyError::InvalidOptions(_)));
}

// =============================================================================
// Sharing
// =============================================================================

#[test]
fn test_grid_shared_across_threads() {
    let file = write_grid(&format!("{}1 2 3\n4 5 6\n", HEADER));
    let grid = std::sync::Arc::new(BathymetryGrid::load(file.path(), 0.0).expect("Failed to load grid"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let grid = grid.clone();
            std::thread::spawn(move || grid.depth_at(27.0, -80.0))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread panicked"), Some(1.0));
    }
}
