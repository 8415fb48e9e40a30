use crate::band::Band;
use crate::feature::ADDITIONAL_FEATURES;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Serializable dataset options
///
/// Names are kept as plain strings and validated when the dataset is built, so a configuration
/// file with a typo fails with [crate::ConfigError] rather than a deserialization error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SlumDetectionConfig {
    /// Directory searched for the dataset
    pub root: PathBuf,
    /// Run the configured downloader into `root` before indexing
    #[serde(default)]
    pub download: bool,
    /// Bands of the returned images, in order
    #[serde(default = "default_bands")]
    pub bands: Vec<String>,
    /// Compute the feature matrix at construction
    #[serde(default)]
    pub include_additional_features: bool,
    /// Feature names, in column order
    #[serde(default = "default_additional_features")]
    pub additional_features_list: Vec<String>,
}

fn default_bands() -> Vec<String> {
    Band::ALL.iter().map(|band| band.name().to_owned()).collect()
}

fn default_additional_features() -> Vec<String> {
    ADDITIONAL_FEATURES
        .iter()
        .map(|&name| name.to_owned())
        .collect()
}

impl SlumDetectionConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            download: false,
            bands: default_bands(),
            include_additional_features: false,
            additional_features_list: default_additional_features(),
        }
    }
}
