pub use crate::error::RasterError;
pub use crate::evaluator::*;
pub use crate::extractor::FeatureExtractor;
pub use crate::feature::Feature;
pub use crate::raster::TileLoader;
pub use crate::tile::{TILE_BANDS, TILE_HEIGHT, TILE_WIDTH};

pub use approx::assert_abs_diff_eq;
pub use ndarray::{Array3, Axis};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[macro_export]
macro_rules! feature_test {
    ($name: ident, [$($fe: expr),* $(,)?], $desired: expr_2021, $tile: expr_2021 $(,)?) => {
        feature_test!($name, [$($fe),*], $desired, $tile, 1e-6);
    };
    ($name: ident, [$($fe: expr),* $(,)?], $desired: expr_2021, $tile: expr_2021, $tol: expr_2021 $(,)?) => {
        #[test]
        fn $name() {
            let features: Vec<Feature<f64>> = vec![$($fe.into()),*];
            let fe = FeatureExtractor::new(features);
            let desired = $desired;
            let mut tile = TileSample::new($tile).unwrap();
            let actual = fe.eval(&mut tile);
            all_close(&desired[..], &actual[..], $tol);

            let names = fe.get_names();
            let descs = fe.get_descriptions();
            assert_eq!(fe.size_hint(), actual.len(), "size_hint() returns wrong size");
            assert_eq!(actual.len(), names.len(),
                "Length of values and names should be the same");
            assert_eq!(actual.len(), descs.len(),
                "Length of values and descriptions should be the same");
        }
    };
}

pub fn all_close(desired: &[f64], actual: &[f64], tol: f64) {
    assert_eq!(desired.len(), actual.len(), "slices have different lengths");
    for (&d, &a) in desired.iter().zip(actual) {
        assert_abs_diff_eq!(d, a, epsilon = tol);
    }
}

/// Tile with every band filled by its own constant, `values` ordered as blue, green, red, nir
pub fn band_tile(values: [f64; TILE_BANDS]) -> Array3<f64> {
    Array3::from_shape_fn((TILE_BANDS, TILE_HEIGHT, TILE_WIDTH), |(band, _, _)| {
        values[band]
    })
}

pub fn flat_tile(value: f64) -> Array3<f64> {
    band_tile([value; TILE_BANDS])
}

/// Visible bands alternate between 0 and 100 column by column, near-infrared is flat
pub fn vertical_stripes() -> Array3<f64> {
    Array3::from_shape_fn((TILE_BANDS, TILE_HEIGHT, TILE_WIDTH), |(band, _, col)| {
        if band == 3 {
            50.0
        } else if col % 2 == 1 {
            100.0
        } else {
            0.0
        }
    })
}

/// Tiles served from memory, keyed by path
#[derive(Clone, Debug, Default)]
pub struct InMemoryLoader<T> {
    tiles: BTreeMap<PathBuf, Array3<T>>,
}

impl<T> InMemoryLoader<T>
where
    T: Float,
{
    pub fn new<P: Into<PathBuf>>(tiles: impl IntoIterator<Item = (P, Array3<T>)>) -> Self {
        Self {
            tiles: tiles
                .into_iter()
                .map(|(path, tile)| (path.into(), tile))
                .collect(),
        }
    }
}

impl<T> TileLoader<T> for InMemoryLoader<T>
where
    T: Float,
{
    fn load_tile(&self, path: &Path) -> Result<Array3<T>, RasterError> {
        self.tiles.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, path.display().to_string()).into()
        })
    }
}
