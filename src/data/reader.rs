//! ARC ASCII grid reader.

use super::{AxisSet, BathymetryGrid, DepthMatrix, Header};
use crate::config::LoadOptions;
use crate::error::{BathyError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Progress of a single load, used when reporting failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadStage {
    Unopened,
    Opened,
    HeaderParsed,
    MatrixRead,
    AxesBuilt,
}

impl LoadStage {
    fn name(&self) -> &'static str {
        match self {
            Self::Unopened => "unopened",
            Self::Opened => "opened",
            Self::HeaderParsed => "header parsed",
            Self::MatrixRead => "matrix read",
            Self::AxesBuilt => "axes built",
        }
    }
}

/// ARC ASCII bathymetry reader.
#[derive(Debug)]
pub struct ArcReader;

impl ArcReader {
    /// Load a whole ARC ASCII file.
    ///
    /// The file is closed before this returns, on success or failure.
    pub fn read_file(path: &Path, options: &LoadOptions) -> Result<BathymetryGrid> {
        let mut stage = LoadStage::Unopened;
        let result = Self::load_file(path, options, &mut stage);
        match &result {
            Ok(grid) => info!(
                path = %path.display(),
                ncols = grid.header().ncols,
                nrows = grid.header().nrows,
                "Loaded bathymetry"
            ),
            Err(err) => warn!(
                path = %path.display(),
                stage = stage.name(),
                error = %err,
                "Bathymetry load failed"
            ),
        }
        result
    }

    /// Load a grid from any buffered text source.
    pub fn read<R: BufRead>(reader: &mut R, options: &LoadOptions) -> Result<BathymetryGrid> {
        let mut stage = LoadStage::Opened;
        let result = Self::load(reader, options, &mut stage);
        if let Err(err) = &result {
            warn!(stage = stage.name(), error = %err, "Bathymetry load failed");
        }
        result
    }

    fn load_file(path: &Path, options: &LoadOptions, stage: &mut LoadStage) -> Result<BathymetryGrid> {
        let file = File::open(path).map_err(|e| BathyError::file_open(path.to_path_buf(), e))?;
        *stage = LoadStage::Opened;
        debug!(path = %path.display(), "Opened bathymetry file");

        let mut reader = BufReader::new(file);
        let grid = Self::load(&mut reader, options, stage)?;
        Ok(grid.with_source(path.to_path_buf()))
    }

    fn load<R: BufRead>(
        reader: &mut R,
        options: &LoadOptions,
        stage: &mut LoadStage,
    ) -> Result<BathymetryGrid> {
        options.validate()?;

        let header = Header::parse(reader)?;
        *stage = LoadStage::HeaderParsed;
        debug!(?header, "Parsed header");

        // Axes are sized by the header, so build them only once the data agrees.
        let matrix = DepthMatrix::read(reader, &header, options.nodata_tolerance, Header::LINES + 1)?;
        *stage = LoadStage::MatrixRead;
        let missing = matrix.missing_count();
        if missing > 0 {
            warn!(missing, total = header.cell_count(), "Grid contains missing cells");
        }
        debug!(valid = matrix.valid_count(), "Read depth matrix");

        let axes = AxisSet::from_header(&header);
        *stage = LoadStage::AxesBuilt;
        debug!(
            lon_first = axes.longitudes[0],
            lat_first = axes.latitudes[0],
            "Built axes"
        );

        BathymetryGrid::assemble(axes, matrix, header, options)
    }
}
