use crate::band_math::SpectralIndex;
use crate::error::ConfigError;
use crate::evaluator::*;
use crate::features::*;
use crate::glcm::GlcmTexture;

use enum_dispatch::enum_dispatch;
use lazy_static::lazy_static;
use std::collections::BTreeMap;

/// Default feature list: all textures followed by all spectral indices
pub const ADDITIONAL_FEATURES: [&str; 9] = [
    "contrast",
    "dissimilarity",
    "homogeneity",
    "energy",
    "correlation",
    "ASM",
    "mean_NDWI",
    "mean_NDVI",
    "mean_RVI",
];

/// A feature name resolved to the computation producing it
///
/// Consider to import [crate::FeatureEvaluator] as well
#[enum_dispatch(FeatureEvaluator<T>, FeatureNamesDescriptionsTrait)]
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Feature<T>
where
    T: Float,
{
    GlcmFeature,
    MeanSpectralIndex,
    UserFeature(UserFeature<T>),
}

#[derive(Clone, Copy, Debug)]
enum BuiltinFeature {
    Texture(GlcmTexture),
    SpectralIndex(SpectralIndex),
}

lazy_static! {
    static ref BUILTIN_FEATURES: BTreeMap<&'static str, BuiltinFeature> = {
        let textures = GlcmTexture::ALL
            .into_iter()
            .map(|texture| (texture.feature_name(), BuiltinFeature::Texture(texture)));
        let indices = SpectralIndex::ALL
            .into_iter()
            .map(|index| (index.feature_name(), BuiltinFeature::SpectralIndex(index)));
        textures.chain(indices).collect()
    };
}

impl<T> Feature<T>
where
    T: Float,
{
    /// Resolve a feature name: user callbacks first, then texture and spectral-index names
    pub fn resolve(name: &str, callbacks: &UserFeatureCallbacks<T>) -> Result<Self, ConfigError> {
        if let Some(callback) = callbacks.get(name) {
            return Ok(UserFeature::new(name, callback.clone()).into());
        }
        match BUILTIN_FEATURES.get(name) {
            Some(BuiltinFeature::Texture(texture)) => Ok(GlcmFeature::new(*texture).into()),
            Some(BuiltinFeature::SpectralIndex(index)) => {
                Ok(MeanSpectralIndex::new(*index).into())
            }
            None => Err(ConfigError::UnresolvedFeature(name.to_owned())),
        }
    }

    pub fn is_builtin_name(name: &str) -> bool {
        BUILTIN_FEATURES.contains_key(name)
    }
}
