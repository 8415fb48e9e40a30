//! Feature sections

mod glcm_feature;
pub use glcm_feature::GlcmFeature;

mod mean_spectral_index;
pub use mean_spectral_index::MeanSpectralIndex;

mod user_feature;
pub use user_feature::{UserFeature, UserFeatureCallbacks, UserFeatureFn};
