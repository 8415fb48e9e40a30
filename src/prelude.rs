pub use crate::evaluator::{FeatureEvaluator, FeatureNamesDescriptionsTrait};
pub use crate::float_trait::Float;
pub use crate::raster::TileLoader;
pub use crate::download::Downloader;
