//! Gray-level co-occurrence matrix (GLCM) and the Haralick texture statistics derived from it
//!
//! The matrix counts horizontally adjacent pixel pairs (distance 1, angle 0). It is symmetric,
//! each pair is counted in both directions, and normalized to unit sum.

use crate::band_math::GRAY_LEVELS;
use crate::float_trait::Float;

use itertools::Itertools;
use ndarray::{Array2, ArrayView2};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Texture statistic of a [Glcm]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum GlcmTexture {
    /// Sum of `p(i, j) (i - j)^2`
    Contrast,
    /// Sum of `p(i, j) |i - j|`
    Dissimilarity,
    /// Sum of `p(i, j) / (1 + (i - j)^2)`
    Homogeneity,
    /// Square root of [GlcmTexture::Asm]
    Energy,
    /// Normalized covariance of the gray levels of a pair
    Correlation,
    /// Angular second moment, sum of `p(i, j)^2`
    Asm,
}

impl GlcmTexture {
    pub const ALL: [GlcmTexture; 6] = [
        Self::Contrast,
        Self::Dissimilarity,
        Self::Homogeneity,
        Self::Energy,
        Self::Correlation,
        Self::Asm,
    ];

    pub const fn feature_name(self) -> &'static str {
        match self {
            Self::Contrast => "contrast",
            Self::Dissimilarity => "dissimilarity",
            Self::Homogeneity => "homogeneity",
            Self::Energy => "energy",
            Self::Correlation => "correlation",
            Self::Asm => "ASM",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Contrast => "GLCM contrast of the digitized grayscale image",
            Self::Dissimilarity => "GLCM dissimilarity of the digitized grayscale image",
            Self::Homogeneity => "GLCM homogeneity of the digitized grayscale image",
            Self::Energy => "GLCM energy of the digitized grayscale image",
            Self::Correlation => "GLCM correlation of the digitized grayscale image",
            Self::Asm => "GLCM angular second moment of the digitized grayscale image",
        }
    }

    /// Build a GLCM of the image and evaluate the statistic
    ///
    /// Use [Glcm::texture] to evaluate several statistics of the same image.
    pub fn compute<T: Float>(self, image: ArrayView2<u8>) -> T {
        Glcm::from_image(image).texture(self)
    }
}

impl FromStr for GlcmTexture {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|texture| texture.feature_name() == s)
            .ok_or(())
    }
}

impl fmt::Display for GlcmTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.feature_name())
    }
}

/// Normalized symmetric co-occurrence matrix of a digitized image
#[derive(Clone, Debug, PartialEq)]
pub struct Glcm<T> {
    p: Array2<T>,
}

impl<T> Glcm<T>
where
    T: Float,
{
    /// Matrix with [GRAY_LEVELS] levels, or more if the image has larger values
    pub fn from_image(image: ArrayView2<u8>) -> Self {
        let levels = image
            .iter()
            .max()
            .map_or(0, |&max| max as usize + 1)
            .max(GRAY_LEVELS);
        Self::with_levels(image, levels)
    }

    /// Panics if any pixel is not less than `levels`
    pub fn with_levels(image: ArrayView2<u8>, levels: usize) -> Self {
        assert!(
            image.iter().all(|&x| (x as usize) < levels),
            "image has values outside of [0, {levels})"
        );
        let mut counts = Array2::<usize>::zeros((levels, levels));
        for row in image.rows() {
            for (&a, &b) in row.iter().tuple_windows() {
                counts[[a as usize, b as usize]] += 1;
                counts[[b as usize, a as usize]] += 1;
            }
        }
        let total = counts.sum();
        let p = if total == 0 {
            Array2::zeros((levels, levels))
        } else {
            let total = T::from_count(total);
            counts.mapv(|c| T::from_count(c) / total)
        };
        Self { p }
    }

    pub fn levels(&self) -> usize {
        self.p.nrows()
    }

    /// Co-occurrence probabilities indexed by `[i, j]`
    pub fn probabilities(&self) -> ArrayView2<'_, T> {
        self.p.view()
    }

    fn weighted_sum(&self, weight: impl Fn(T, T) -> T) -> T {
        self.p
            .indexed_iter()
            .map(|((i, j), &p)| p * weight(T::from_count(i), T::from_count(j)))
            .sum()
    }

    pub fn contrast(&self) -> T {
        self.weighted_sum(|i, j| (i - j).powi(2))
    }

    pub fn dissimilarity(&self) -> T {
        self.weighted_sum(|i, j| (i - j).abs())
    }

    pub fn homogeneity(&self) -> T {
        self.weighted_sum(|i, j| T::one() / (T::one() + (i - j).powi(2)))
    }

    pub fn asm(&self) -> T {
        self.p.iter().map(|&p| p * p).sum()
    }

    pub fn energy(&self) -> T {
        self.asm().sqrt()
    }

    /// Equals one if either marginal distribution has zero variance
    pub fn correlation(&self) -> T {
        let mean_i = self.weighted_sum(|i, _| i);
        let mean_j = self.weighted_sum(|_, j| j);
        let std_i = self.weighted_sum(|i, _| (i - mean_i).powi(2)).sqrt();
        let std_j = self.weighted_sum(|_, j| (j - mean_j).powi(2)).sqrt();
        let denominator = std_i * std_j;
        if denominator < T::from_f64_const(1e-15) {
            return T::one();
        }
        self.weighted_sum(|i, j| (i - mean_i) * (j - mean_j)) / denominator
    }

    pub fn texture(&self, texture: GlcmTexture) -> T {
        match texture {
            GlcmTexture::Contrast => self.contrast(),
            GlcmTexture::Dissimilarity => self.dissimilarity(),
            GlcmTexture::Homogeneity => self.homogeneity(),
            GlcmTexture::Energy => self.energy(),
            GlcmTexture::Correlation => self.correlation(),
            GlcmTexture::Asm => self.asm(),
        }
    }
}
