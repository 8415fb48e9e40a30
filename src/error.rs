use std::path::PathBuf;

/// Invalid dataset options, detected before any file is touched
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid band name {0:?}, expected one of: blue, green, red, nir")]
    InvalidBand(String),

    #[error("no callback or built-in computation found for feature {0:?}")]
    UnresolvedFeature(String),

    #[error("download requested but no downloader is configured")]
    MissingDownloader,
}

/// Error returned from [crate::TileLoader]
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TIFF decoding error: {0}")]
    Tiff(#[from] tiff::TiffError),

    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("unsupported pixel format")]
    UnsupportedPixelFormat,

    #[error("sample buffer of length {len} does not fit a {height}x{width} image")]
    BufferSize {
        len: usize,
        height: usize,
        width: usize,
    },

    #[error("page {page} is {actual:?} pixels while the first page is {expected:?}")]
    PageDimensions {
        page: usize,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("tile has {actual} bands, at least {minimum} are required")]
    BandCount { actual: usize, minimum: usize },
}

/// Error returned from [crate::SlumDetection] construction and access
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error(
        "no directory containing both bs_as and cordoba_capital was found under {}",
        .0.display()
    )]
    DatasetLayout(PathBuf),

    #[error("index {index} is out of range for dataset of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot read tile {}: {source}", .path.display())]
    Raster {
        path: PathBuf,
        #[source]
        source: RasterError,
    },

    #[error("cannot list directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset download failed: {0}")]
    Download(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DatasetError {
    pub(crate) fn raster(path: impl Into<PathBuf>, source: RasterError) -> Self {
        Self::Raster {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
