use crate::band_math::SpectralIndex;
use crate::evaluator::*;

macro_const! {
    const DOC: &str = r"
Tile average of a band-ratio spectral index

Computed from the raw, not normalized, bands:

- mean_NDWI: $(\mathrm{green} - \mathrm{nir}) / (\mathrm{green} + \mathrm{nir})$
- mean_NDVI: $(\mathrm{nir} - \mathrm{red}) / (\mathrm{nir} + \mathrm{red})$
- mean_RVI: $\mathrm{nir} / \mathrm{red}$

Pixels with zero denominator contribute zero. The sum over pixels is divided by the tile area.

- Depends on: **green**, **nir** for NDWI, **red**, **nir** for NDVI and RVI
- Number of features: **1**
";
}

#[doc = DOC!()]
#[derive(Clone, Copy, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct MeanSpectralIndex {
    index: SpectralIndex,
}

impl MeanSpectralIndex {
    pub fn new(index: SpectralIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> SpectralIndex {
        self.index
    }

    pub const fn doc() -> &'static str {
        DOC
    }
}

impl FeatureNamesDescriptionsTrait for MeanSpectralIndex {
    fn get_name(&self) -> &str {
        self.index.feature_name()
    }

    fn get_description(&self) -> &str {
        self.index.description()
    }
}

impl<T> FeatureEvaluator<T> for MeanSpectralIndex
where
    T: Float,
{
    fn eval(&self, tile: &mut TileSample<T>) -> T {
        self.index.mean(tile.bands())
    }
}
