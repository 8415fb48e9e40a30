use crate::evaluator::*;
use crate::glcm::GlcmTexture;

macro_const! {
    const DOC: &str = r"
Texture statistic of the tile's visible-light image

The red, green and blue bands are min-max normalized together, converted to grayscale with
ITU-R BT.601 luma weights and digitized into eight gray levels. A symmetric normalized gray-level
co-occurrence matrix $p(i, j)$ of horizontally adjacent pixels is built from the digitized image
and reduced to one of

- contrast $\sum p(i, j) (i - j)^2$
- dissimilarity $\sum p(i, j) |i - j|$
- homogeneity $\sum p(i, j) / (1 + (i - j)^2)$
- ASM $\sum p(i, j)^2$
- energy $\sqrt{\mathrm{ASM}}$
- correlation $\sum p(i, j) (i - \mu_i) (j - \mu_j) / (\sigma_i \sigma_j)$

- Depends on: **red**, **green**, **blue**
- Number of features: **1**

Haralick, Shanmugam, Dinstein 1973. [DOI:10.1109/TSMC.1973.4309314](https://doi.org/10.1109/TSMC.1973.4309314)
";
}

#[doc = DOC!()]
#[derive(Clone, Copy, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct GlcmFeature {
    texture: GlcmTexture,
}

impl GlcmFeature {
    pub fn new(texture: GlcmTexture) -> Self {
        Self { texture }
    }

    pub fn texture(&self) -> GlcmTexture {
        self.texture
    }

    pub const fn doc() -> &'static str {
        DOC
    }
}

impl FeatureNamesDescriptionsTrait for GlcmFeature {
    fn get_name(&self) -> &str {
        self.texture.feature_name()
    }

    fn get_description(&self) -> &str {
        self.texture.description()
    }
}

impl<T> FeatureEvaluator<T> for GlcmFeature
where
    T: Float,
{
    fn eval(&self, tile: &mut TileSample<T>) -> T {
        tile.get_glcm().texture(self.texture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    feature_test!(
        contrast_of_stripes,
        [GlcmFeature::new(GlcmTexture::Contrast)],
        [49.0],
        vertical_stripes(),
    );

    feature_test!(
        homogeneity_of_stripes,
        [GlcmFeature::new(GlcmTexture::Homogeneity)],
        [0.02],
        vertical_stripes(),
    );

    feature_test!(
        flat_tile_textures,
        [
            GlcmFeature::new(GlcmTexture::Contrast),
            GlcmFeature::new(GlcmTexture::Dissimilarity),
            GlcmFeature::new(GlcmTexture::Homogeneity),
            GlcmFeature::new(GlcmTexture::Energy),
            GlcmFeature::new(GlcmTexture::Correlation),
            GlcmFeature::new(GlcmTexture::Asm),
        ],
        [0.0, 0.0, 1.0, 1.0, 1.0, 1.0],
        flat_tile(5.0),
    );

    #[test]
    fn names_follow_texture() {
        for texture in GlcmTexture::ALL {
            let feature = GlcmFeature::new(texture);
            assert_eq!(feature.get_name(), texture.feature_name());
            assert_eq!(feature.texture(), texture);
        }
    }
}
