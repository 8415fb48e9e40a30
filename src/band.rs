use crate::error::ConfigError;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four spectral bands of a tile, the discriminant is the band's position in the raster
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Blue = 0,
    Green = 1,
    Red = 2,
    Nir = 3,
}

impl Band {
    /// Canonical raster order
    pub const ALL: [Band; 4] = [Band::Blue, Band::Green, Band::Red, Band::Nir];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
            Self::Nir => "nir",
        }
    }
}

/// Bands used to build the visible-light image for texture features, in channel order
pub const RGB_BANDS: [Band; 3] = [Band::Red, Band::Green, Band::Blue];

impl FromStr for Band {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|band| band.name() == s)
            .ok_or_else(|| ConfigError::InvalidBand(s.to_owned()))
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered band subset (or permutation) returned by the dataset
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct BandSelection(Vec<Band>);

impl BandSelection {
    pub fn new(bands: Vec<Band>) -> Self {
        Self(bands)
    }

    /// Parse band names, failing on the first unknown one
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn bands(&self) -> &[Band] {
        &self.0
    }

    /// Raster indices of the selected bands
    pub fn indices(&self) -> Vec<usize> {
        self.0.iter().map(|band| band.index()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for BandSelection {
    fn default() -> Self {
        Self(Band::ALL.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_indices_follow_raster_order() {
        let indices: Vec<_> = Band::ALL.iter().map(|b| b.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(RGB_BANDS.map(Band::index), [2, 1, 0]);
    }

    #[test]
    fn band_from_str() {
        assert_eq!("nir".parse::<Band>(), Ok(Band::Nir));
        assert_eq!(
            "NIR".parse::<Band>(),
            Err(ConfigError::InvalidBand("NIR".into()))
        );
    }

    #[test]
    fn selection_keeps_requested_order() {
        let selection = BandSelection::from_names(&["nir", "blue", "red"]).unwrap();
        assert_eq!(selection.bands(), &[Band::Nir, Band::Blue, Band::Red]);
        assert_eq!(selection.indices(), vec![3, 0, 2]);
    }

    #[test]
    fn selection_rejects_unknown_band() {
        let err = BandSelection::from_names(&["green", "swir"]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidBand("swir".into()));
    }

    #[test]
    fn default_selection_is_all_bands() {
        assert_eq!(BandSelection::default().bands(), &Band::ALL);
    }

    #[test]
    fn serde_band_names() {
        let selection: BandSelection = serde_json::from_str(r#"["red", "nir"]"#).unwrap();
        assert_eq!(selection.bands(), &[Band::Red, Band::Nir]);
        assert_eq!(serde_json::to_string(&Band::Blue).unwrap(), r#""blue""#);
    }
}
