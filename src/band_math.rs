//! Pixel-level band arithmetic: min-max normalization, grayscale conversion, digitization and
//! band-ratio spectral indices
//!
//! Degenerate inputs never fail: a constant array normalizes to zeros and a zero denominator in a
//! spectral index gives zero for that pixel. Non-finite pixel values propagate as NaN through
//! every function except [digitize], which maps them to the lowest level.

use crate::band::Band;
use crate::float_trait::Float;

use ndarray::{Array, Array2, ArrayView, ArrayView2, ArrayView3, Axis, Dimension, Zip};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of discrete gray levels produced by [digitize] for texture features
pub const GRAY_LEVELS: usize = 8;

/// ITU-R BT.601 luma weights for `[red, green, blue]`
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Linear rescale to `[0, 1]` using the global minimum and maximum of the whole array
pub fn normalize<T, D>(arr: ArrayView<T, D>) -> Array<T, D>
where
    T: Float,
    D: Dimension,
{
    let (min, max) = arr
        .iter()
        .filter(|x| x.is_finite())
        .fold((T::infinity(), T::neg_infinity()), |(min, max), &x| {
            (min.min(x), max.max(x))
        });
    let range = max - min;
    // `range` is -inf when there are no finite values
    let scale = |x: T| {
        if !x.is_finite() {
            T::nan()
        } else if range > T::zero() {
            (x - min) / range
        } else {
            T::zero()
        }
    };
    arr.mapv(scale)
}

/// Weighted luma of a `[3, H, W]` array with channels ordered as `[red, green, blue]`
pub fn to_grayscale<T: Float>(rgb: ArrayView3<T>) -> Array2<T> {
    assert_eq!(
        rgb.len_of(Axis(0)),
        3,
        "grayscale conversion requires exactly three channels"
    );
    let [w_red, w_green, w_blue] = LUMA_WEIGHTS.map(T::from_f64_const);
    Zip::from(rgb.index_axis(Axis(0), 0))
        .and(rgb.index_axis(Axis(0), 1))
        .and(rgb.index_axis(Axis(0), 2))
        .map_collect(|&r, &g, &b| w_red * r + w_green * g + w_blue * b)
}

/// Quantize `[0, 1]` values into `levels` equal-width bins
///
/// Values below zero go to the first bin, values of one or above to the last one.
pub fn digitize<T: Float>(gray: ArrayView2<T>, levels: usize) -> Array2<u8> {
    assert!(
        (2..=256).contains(&levels),
        "number of gray levels must be in [2, 256]"
    );
    let top = levels - 1;
    let scale = T::from_count(levels);
    gray.mapv(|x| {
        if !x.is_finite() {
            return 0;
        }
        let level = (x * scale).floor();
        if level <= T::zero() {
            0
        } else {
            level.to_usize().map_or(top, |level| level.min(top)) as u8
        }
    })
}

#[inline]
fn div_or_zero<T: Float>(numerator: T, denominator: T) -> T {
    if denominator == T::zero() {
        T::zero()
    } else {
        numerator / denominator
    }
}

/// `(a - b) / (a + b)`, zero where `a + b == 0`
pub fn normalized_difference<T: Float>(a: ArrayView2<T>, b: ArrayView2<T>) -> Array2<T> {
    Zip::from(a)
        .and(b)
        .map_collect(|&a, &b| div_or_zero(a - b, a + b))
}

/// Normalized difference water index `(green - nir) / (green + nir)`
pub fn ndwi<T: Float>(green: ArrayView2<T>, nir: ArrayView2<T>) -> Array2<T> {
    normalized_difference(green, nir)
}

/// Normalized difference vegetation index `(nir - red) / (nir + red)`
pub fn ndvi<T: Float>(nir: ArrayView2<T>, red: ArrayView2<T>) -> Array2<T> {
    normalized_difference(nir, red)
}

/// Ratio vegetation index `nir / red`, zero where `red == 0`
pub fn rvi<T: Float>(nir: ArrayView2<T>, red: ArrayView2<T>) -> Array2<T> {
    Zip::from(nir)
        .and(red)
        .map_collect(|&nir, &red| div_or_zero(nir, red))
}

/// Sum of the index divided by `height * width`
pub fn mean_index<T: Float>(index: ArrayView2<T>, height: usize, width: usize) -> T {
    div_or_zero(index.sum(), T::from_count(height * width))
}

/// Band-ratio index computed from the raw four-band tile
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum SpectralIndex {
    Ndwi,
    Ndvi,
    Rvi,
}

impl SpectralIndex {
    pub const ALL: [SpectralIndex; 3] = [Self::Ndwi, Self::Ndvi, Self::Rvi];

    /// Name of the tile-averaged feature
    pub const fn feature_name(self) -> &'static str {
        match self {
            Self::Ndwi => "mean_NDWI",
            Self::Ndvi => "mean_NDVI",
            Self::Rvi => "mean_RVI",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Ndwi => "mean normalized difference water index",
            Self::Ndvi => "mean normalized difference vegetation index",
            Self::Rvi => "mean ratio vegetation index",
        }
    }

    /// Numerator-side and denominator-side bands
    pub const fn bands(self) -> (Band, Band) {
        match self {
            Self::Ndwi => (Band::Green, Band::Nir),
            Self::Ndvi | Self::Rvi => (Band::Nir, Band::Red),
        }
    }

    /// Per-pixel index of a `[bands, H, W]` tile
    pub fn compute<T: Float>(self, tile: ArrayView3<T>) -> Array2<T> {
        let (a, b) = self.bands();
        let a = tile.index_axis(Axis(0), a.index());
        let b = tile.index_axis(Axis(0), b.index());
        match self {
            Self::Ndwi => ndwi(a, b),
            Self::Ndvi => ndvi(a, b),
            Self::Rvi => rvi(a, b),
        }
    }

    /// Index averaged over the tile area
    pub fn mean<T: Float>(self, tile: ArrayView3<T>) -> T {
        let (height, width) = (tile.len_of(Axis(1)), tile.len_of(Axis(2)));
        mean_index(self.compute(tile).view(), height, width)
    }
}

impl FromStr for SpectralIndex {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|index| index.feature_name() == s)
            .ok_or(())
    }
}

impl fmt::Display for SpectralIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.feature_name())
    }
}
