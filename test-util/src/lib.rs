use ndarray::{Array3, Axis};
use rand::Rng;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tiff::encoder::colortype::{self, ColorType};
use tiff::encoder::TiffEncoder;
use tiff::tags::{PhotometricInterpretation, SampleFormat};
use tiff::TiffError;

/// Subfolder of [DatasetTree::root] holding the dataset
pub const DATASET_DIR: &str = "slums";

/// Four-band `[band, height, width]` tile of uniform random reflectances
pub fn random_tile<R: Rng>(rng: &mut R, height: usize, width: usize) -> Array3<f32> {
    Array3::from_shape_simple_fn((4, height, width), || rng.random_range(0.0..10_000.0))
}

/// Four 32-bit float samples per pixel with BlackIsZero interpretation, the layout GDAL uses for
/// pixel-interleaved multiband rasters
pub struct Multiband32Float;

impl ColorType for Multiband32Float {
    type Inner = f32;
    const TIFF_VALUE: PhotometricInterpretation = PhotometricInterpretation::BlackIsZero;
    const BITS_PER_SAMPLE: &'static [u16] = &[32; 4];
    const SAMPLE_FORMAT: &'static [SampleFormat] = &[SampleFormat::IEEEFP; 4];

    fn horizontal_predict(_: &[Self::Inner], _: &mut Vec<Self::Inner>) {
        unreachable!("predictor is never enabled")
    }
}

/// Write a four-band tile as a pixel-interleaved multiband 32-bit float TIFF
pub fn write_tile(path: &Path, tile: &Array3<f32>) -> Result<(), TiffError> {
    write_tile_as::<Multiband32Float>(path, tile)
}

/// Write a four-band tile tagged as RGBA, as some exporters do
pub fn write_rgba_tile(path: &Path, tile: &Array3<f32>) -> Result<(), TiffError> {
    write_tile_as::<colortype::RGBA32Float>(path, tile)
}

fn write_tile_as<C>(path: &Path, tile: &Array3<f32>) -> Result<(), TiffError>
where
    C: ColorType<Inner = f32>,
{
    assert_eq!(tile.len_of(Axis(0)), 4, "only four-band tiles are supported");
    let (height, width) = (tile.len_of(Axis(1)), tile.len_of(Axis(2)));
    let interleaved: Vec<f32> = tile.view().permuted_axes([1, 2, 0]).iter().copied().collect();

    let mut encoder = TiffEncoder::new(File::create(path)?)?;
    encoder.write_image::<C>(width as u32, height as u32, &interleaved)?;
    Ok(())
}

/// Temporary directory with the dataset layout nested one level below the root
pub struct DatasetTree {
    dir: TempDir,
}

impl DatasetTree {
    /// `root/slums/{bs_as,cordoba_capital}`, both empty
    pub fn new() -> io::Result<Self> {
        let tree = Self::empty()?;
        for marker in ["bs_as", "cordoba_capital"] {
            fs::create_dir_all(tree.dataset_root().join(marker))?;
        }
        Ok(tree)
    }

    /// Root directory without any dataset
    pub fn empty() -> io::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn dataset_root(&self) -> PathBuf {
        self.root().join(DATASET_DIR)
    }

    fn prepare(&self, relative: &Path) -> io::Result<PathBuf> {
        let path = self.dataset_root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(path)
    }

    /// Empty file below the dataset root, for loaders which never read the disk
    pub fn add_empty_file(&self, relative: impl AsRef<Path>) -> io::Result<PathBuf> {
        let path = self.prepare(relative.as_ref())?;
        File::create(&path)?;
        Ok(path)
    }

    pub fn add_tile(
        &self,
        relative: impl AsRef<Path>,
        tile: &Array3<f32>,
    ) -> Result<PathBuf, TiffError> {
        let path = self.prepare(relative.as_ref())?;
        write_tile(&path, tile)?;
        Ok(path)
    }
}
