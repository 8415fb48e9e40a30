pub use crate::float_trait::Float;
pub use crate::tile::TileSample;

use enum_dispatch::enum_dispatch;
pub(crate) use macro_const::macro_const;
pub(crate) use schemars::JsonSchema;
pub(crate) use serde::{Deserialize, Serialize};
pub(crate) use std::fmt::Debug;

#[enum_dispatch]
pub trait FeatureNamesDescriptionsTrait {
    /// Feature name, the column name in the feature matrix
    fn get_name(&self) -> &str;

    /// Feature description
    fn get_description(&self) -> &str;
}

/// The trait each per-tile feature should implement
#[enum_dispatch]
pub trait FeatureEvaluator<T: Float>:
    FeatureNamesDescriptionsTrait + Clone + Debug + Send + Sync
{
    /// Scalar value of the feature for a loaded tile
    fn eval(&self, tile: &mut TileSample<T>) -> T;
}
