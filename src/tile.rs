use crate::band::{Band, RGB_BANDS};
use crate::band_math::{GRAY_LEVELS, digitize, normalize, to_grayscale};
use crate::error::RasterError;
use crate::float_trait::Float;
use crate::glcm::Glcm;

use ndarray::{Array2, Array3, ArrayView2, ArrayView3, Axis};

/// Expected tile height in pixels
pub const TILE_HEIGHT: usize = 32;
/// Expected tile width in pixels
pub const TILE_WIDTH: usize = 32;
/// Number of bands of a raw tile: blue, green, red and near-infrared
pub const TILE_BANDS: usize = 4;

/// Visible-light image of a raw tile, normalized, converted to grayscale and digitized into
/// [GRAY_LEVELS] levels
pub fn digitized_rgb<T: Float>(bands: ArrayView3<T>) -> Array2<u8> {
    let rgb = bands.select(Axis(0), &RGB_BANDS.map(Band::index));
    let gray = to_grayscale(normalize(rgb.view()).view());
    digitize(gray.view(), GRAY_LEVELS)
}

/// A loaded four-band tile with lazily computed derived images
///
/// The digitized image and its co-occurrence matrix are computed on first request and reused by
/// every feature evaluated on the same tile.
#[derive(Clone, Debug)]
pub struct TileSample<T>
where
    T: Float,
{
    bands: Array3<T>,
    digitized: Option<Array2<u8>>,
    glcm: Option<Glcm<T>>,
}

impl<T> TileSample<T>
where
    T: Float,
{
    /// Fails if the raster has fewer than [TILE_BANDS] bands
    pub fn new(bands: Array3<T>) -> Result<Self, RasterError> {
        let n_bands = bands.len_of(Axis(0));
        if n_bands < TILE_BANDS {
            return Err(RasterError::BandCount {
                actual: n_bands,
                minimum: TILE_BANDS,
            });
        }
        Ok(Self {
            bands,
            digitized: None,
            glcm: None,
        })
    }

    pub fn bands(&self) -> ArrayView3<'_, T> {
        self.bands.view()
    }

    pub fn height(&self) -> usize {
        self.bands.len_of(Axis(1))
    }

    pub fn width(&self) -> usize {
        self.bands.len_of(Axis(2))
    }

    pub fn get_digitized(&mut self) -> ArrayView2<'_, u8> {
        let bands = &self.bands;
        self.digitized
            .get_or_insert_with(|| digitized_rgb(bands.view()))
            .view()
    }

    pub fn get_glcm(&mut self) -> &Glcm<T> {
        let glcm = match self.glcm.take() {
            Some(glcm) => glcm,
            None => Glcm::from_image(self.get_digitized()),
        };
        self.glcm.insert(glcm)
    }
}
