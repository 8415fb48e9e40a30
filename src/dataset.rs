use crate::band::BandSelection;
use crate::config::SlumDetectionConfig;
use crate::download::Downloader;
use crate::error::{ConfigError, DatasetError, RasterError};
use crate::extractor::FeatureExtractor;
use crate::feature_matrix::FeatureMatrix;
use crate::features::{UserFeatureCallbacks, UserFeatureFn};
use crate::float_trait::Float;
use crate::label::{SLUM_CLASSES, SlumClass};
use crate::raster::{TileLoader, TiffLoader};
use crate::tile_index::{enumerate_tiles, locate_dataset_root};

use ndarray::{Array3, ArrayView1, ArrayView2, Axis};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Function applied to every returned image
pub type ImageTransform<T> = Box<dyn Fn(Array3<T>) -> Array3<T> + Send + Sync>;

/// Function applied to every returned label
pub type TargetTransform = Box<dyn Fn(usize) -> usize + Send + Sync>;

/// One dataset item
#[derive(Clone, Debug, PartialEq)]
pub struct Sample<'a, T> {
    /// Selected bands in the requested order, `[bands, height, width]`
    pub image: Array3<T>,
    /// [SlumClass] index, possibly transformed
    pub label: usize,
    /// Row of the feature matrix, if it was computed
    pub features: Option<ArrayView1<'a, T>>,
}

/// Slum detection tiles with file-name derived labels and optional per-tile features
///
/// Tiles are discovered once, at construction, below the first directory containing both
/// `bs_as` and `cordoba_capital`. Images are loaded on every access and never cached, features
/// are computed once for all tiles.
pub struct SlumDetection<T = f32, L = TiffLoader>
where
    T: Float,
{
    dataset_root: PathBuf,
    tile_paths: Vec<PathBuf>,
    bands: BandSelection,
    band_indices: Vec<usize>,
    loader: L,
    features: Option<FeatureMatrix<T>>,
    transform: Option<ImageTransform<T>>,
    target_transform: Option<TargetTransform>,
}

impl<T> SlumDetection<T, TiffLoader>
where
    T: Float,
{
    pub fn builder(root: impl Into<PathBuf>) -> SlumDetectionBuilder<T, TiffLoader> {
        SlumDetectionBuilder::new(root)
    }
}

impl<T, L> SlumDetection<T, L>
where
    T: Float,
    L: TileLoader<T>,
{
    pub fn len(&self) -> usize {
        self.tile_paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tile_paths.is_empty()
    }

    /// Load the `index`-th tile, select its bands and label it
    pub fn get(&self, index: usize) -> Result<Sample<'_, T>, DatasetError> {
        let path = self
            .tile_paths
            .get(index)
            .ok_or(DatasetError::IndexOutOfRange {
                index,
                len: self.len(),
            })?;
        let tile = self
            .loader
            .load_tile(path)
            .map_err(|err| DatasetError::raster(path, err))?;
        let image = self
            .select_bands(tile)
            .map_err(|err| DatasetError::raster(path, err))?;
        let image = match &self.transform {
            Some(transform) => transform(image),
            None => image,
        };

        let label = SlumClass::from_path(path).index();
        let label = match &self.target_transform {
            Some(target_transform) => target_transform(label),
            None => label,
        };

        Ok(Sample {
            image,
            label,
            features: self.features.as_ref().map(|features| features.row(index)),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Result<Sample<'_, T>, DatasetError>> + '_ {
        (0..self.len()).map(move |index| self.get(index))
    }

    fn select_bands(&self, tile: Array3<T>) -> Result<Array3<T>, RasterError> {
        let n_bands = tile.len_of(Axis(0));
        match self.band_indices.iter().max() {
            Some(&max) if max >= n_bands => Err(RasterError::BandCount {
                actual: n_bands,
                minimum: max + 1,
            }),
            _ => Ok(tile.select(Axis(0), &self.band_indices)),
        }
    }
}

impl<T, L> SlumDetection<T, L>
where
    T: Float,
{
    /// Directory containing `bs_as` and `cordoba_capital`
    pub fn dataset_root(&self) -> &Path {
        &self.dataset_root
    }

    /// Tile paths in index order
    pub fn tile_paths(&self) -> &[PathBuf] {
        &self.tile_paths
    }

    pub fn bands(&self) -> &BandSelection {
        &self.bands
    }

    pub fn classes(&self) -> &'static [SlumClass] {
        &SLUM_CLASSES
    }

    pub fn feature_names(&self) -> Option<&[String]> {
        self.features.as_ref().map(|features| features.names())
    }

    /// `[tiles, features]` matrix, if features were requested
    pub fn feature_matrix(&self) -> Option<ArrayView2<'_, T>> {
        self.features.as_ref().map(|features| features.values())
    }
}

impl<T, L> fmt::Debug for SlumDetection<T, L>
where
    T: Float,
    L: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlumDetection")
            .field("dataset_root", &self.dataset_root)
            .field("len", &self.tile_paths.len())
            .field("bands", &self.bands)
            .field("loader", &self.loader)
            .field("feature_names", &self.feature_names())
            .finish_non_exhaustive()
    }
}

/// Builder of [SlumDetection]
///
/// Validation happens in [SlumDetectionBuilder::build] before the filesystem is touched: band
/// names first, then feature names, then the downloader.
pub struct SlumDetectionBuilder<T, L = TiffLoader>
where
    T: Float,
{
    config: SlumDetectionConfig,
    user_features: UserFeatureCallbacks<T>,
    transform: Option<ImageTransform<T>>,
    target_transform: Option<TargetTransform>,
    downloader: Option<Box<dyn Downloader>>,
    loader: L,
}

impl<T> SlumDetectionBuilder<T, TiffLoader>
where
    T: Float,
{
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_config(SlumDetectionConfig::new(root))
    }

    pub fn from_config(config: SlumDetectionConfig) -> Self {
        Self {
            config,
            user_features: UserFeatureCallbacks::new(),
            transform: None,
            target_transform: None,
            downloader: None,
            loader: TiffLoader,
        }
    }
}

impl<T, L> SlumDetectionBuilder<T, L>
where
    T: Float,
    L: TileLoader<T>,
{
    pub fn config(&self) -> &SlumDetectionConfig {
        &self.config
    }

    pub fn download(mut self, download: bool) -> Self {
        self.config.download = download;
        self
    }

    pub fn bands<S: AsRef<str>>(mut self, bands: &[S]) -> Self {
        self.config.bands = bands.iter().map(|band| band.as_ref().to_owned()).collect();
        self
    }

    pub fn include_additional_features(mut self, include: bool) -> Self {
        self.config.include_additional_features = include;
        self
    }

    pub fn additional_features_list<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.config.additional_features_list =
            names.iter().map(|name| name.as_ref().to_owned()).collect();
        self
    }

    /// Register a callback, it replaces the built-in feature of the same name
    pub fn user_feature<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(ArrayView2<'_, u8>) -> T + Send + Sync + 'static,
    {
        let callback: UserFeatureFn<T> = Arc::new(f);
        self.user_features.insert(name.into(), callback);
        self
    }

    pub fn user_features(mut self, callbacks: UserFeatureCallbacks<T>) -> Self {
        self.user_features.extend(callbacks);
        self
    }

    pub fn transform<F>(mut self, f: F) -> Self
    where
        F: Fn(Array3<T>) -> Array3<T> + Send + Sync + 'static,
    {
        self.transform = Some(Box::new(f));
        self
    }

    pub fn target_transform<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) -> usize + Send + Sync + 'static,
    {
        self.target_transform = Some(Box::new(f));
        self
    }

    pub fn downloader<D>(mut self, downloader: D) -> Self
    where
        D: Downloader + 'static,
    {
        self.downloader = Some(Box::new(downloader));
        self
    }

    pub fn loader<L2>(self, loader: L2) -> SlumDetectionBuilder<T, L2>
    where
        L2: TileLoader<T>,
    {
        SlumDetectionBuilder {
            config: self.config,
            user_features: self.user_features,
            transform: self.transform,
            target_transform: self.target_transform,
            downloader: self.downloader,
            loader,
        }
    }

    pub fn build(self) -> Result<SlumDetection<T, L>, DatasetError> {
        let config = self.config;
        let bands = BandSelection::from_names(&config.bands)?;
        let extractor = if config.include_additional_features {
            Some(FeatureExtractor::from_names(
                &config.additional_features_list,
                &self.user_features,
            )?)
        } else {
            None
        };

        if config.download {
            let downloader = self.downloader.ok_or(ConfigError::MissingDownloader)?;
            log::info!("downloading dataset into {}", config.root.display());
            downloader
                .download(&config.root)
                .map_err(DatasetError::Download)?;
        }

        let dataset_root = locate_dataset_root(&config.root)?;
        log::info!("found dataset root {}", dataset_root.display());
        let tile_paths = enumerate_tiles(&dataset_root)?;
        if tile_paths.is_empty() {
            log::warn!("no tiles found below {}", dataset_root.display());
        } else {
            log::info!("found {} tiles", tile_paths.len());
        }

        let features = extractor
            .map(|extractor| FeatureMatrix::compute(&tile_paths, &self.loader, &extractor))
            .transpose()?;

        Ok(SlumDetection {
            dataset_root,
            tile_paths,
            band_indices: bands.indices(),
            bands,
            loader: self.loader,
            features,
            transform: self.transform,
            target_transform: self.target_transform,
        })
    }
}
