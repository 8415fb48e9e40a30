use crate::error::DatasetError;
use crate::extractor::FeatureExtractor;
use crate::float_trait::Float;
use crate::maybe_rayon::*;
use crate::raster::TileLoader;
use crate::tile::TileSample;

use ndarray::{Array2, ArrayView1, ArrayView2};
use std::path::{Path, PathBuf};

/// Feature values of every tile, one row per tile and one named column per feature
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureMatrix<T> {
    names: Vec<String>,
    values: Array2<T>,
}

impl<T> FeatureMatrix<T>
where
    T: Float,
{
    /// Load every tile and evaluate the extractor on it
    ///
    /// Tiles are independent, with the `parallel` feature they are processed concurrently. Row
    /// order always follows `paths`. If any tile fails, the error of the first failing tile in
    /// `paths` order is returned.
    pub fn compute<L>(
        paths: &[PathBuf],
        loader: &L,
        extractor: &FeatureExtractor<T>,
    ) -> Result<Self, DatasetError>
    where
        L: TileLoader<T>,
    {
        let rows: Vec<_> = paths
            .into_par_iter()
            .map(|path| tile_features(path, loader, extractor))
            .collect();
        let rows = rows.into_iter().collect::<Result<Vec<_>, _>>()?;

        let mut values = Array2::zeros((paths.len(), extractor.size_hint()));
        for (mut row, features) in values.outer_iter_mut().zip(rows) {
            row.assign(&ArrayView1::from(&features));
        }
        log::info!(
            "computed feature matrix of {} tiles and {} features",
            values.nrows(),
            values.ncols()
        );
        Ok(Self {
            names: extractor
                .get_names()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            values,
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> ArrayView2<'_, T> {
        self.values.view()
    }

    /// Features of the `index`-th tile, panics if out of range
    pub fn row(&self, index: usize) -> ArrayView1<'_, T> {
        self.values.row(index)
    }

    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }
}

fn tile_features<T, L>(
    path: &Path,
    loader: &L,
    extractor: &FeatureExtractor<T>,
) -> Result<Vec<T>, DatasetError>
where
    T: Float,
    L: TileLoader<T>,
{
    let bands = loader
        .load_tile(path)
        .map_err(|err| DatasetError::raster(path, err))?;
    let mut tile = TileSample::new(bands).map_err(|err| DatasetError::raster(path, err))?;
    let features = extractor.eval(&mut tile);
    log::debug!("features of {}: {:?}", path.display(), features);
    Ok(features)
}
