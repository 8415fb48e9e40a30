#![doc = include_str!("../README.md")]

#[cfg(test)]
#[macro_use]
mod tests;

mod band;
pub use band::{Band, BandSelection, RGB_BANDS};

pub mod band_math;
pub use band_math::SpectralIndex;

mod config;
pub use config::SlumDetectionConfig;

mod dataset;
pub use dataset::{ImageTransform, Sample, SlumDetection, SlumDetectionBuilder, TargetTransform};

mod download;
pub use download::{DownloadError, Downloader};

mod error;
pub use error::{ConfigError, DatasetError, RasterError};

mod evaluator;
pub use evaluator::{FeatureEvaluator, FeatureNamesDescriptionsTrait};

mod extractor;
pub use extractor::FeatureExtractor;

mod feature;
pub use feature::{ADDITIONAL_FEATURES, Feature};

mod feature_matrix;
pub use feature_matrix::FeatureMatrix;

pub mod features;
pub use features::*;

mod float_trait;
pub use float_trait::Float;

pub mod glcm;
pub use glcm::{Glcm, GlcmTexture};

mod label;
pub use label::{SLUM_CLASSES, SLUM_PREFIX, SlumClass};

mod maybe_rayon;

pub mod prelude;

mod raster;
pub use raster::{TileLoader, TiffLoader};

mod tile;
pub use tile::{TILE_BANDS, TILE_HEIGHT, TILE_WIDTH, TileSample, digitized_rgb};

pub mod tile_index;

pub use ndarray;
