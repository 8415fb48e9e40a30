use crate::error::RasterError;
use crate::float_trait::Float;

use ndarray::{Array3, Axis, concatenate};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tiff::decoder::{Decoder, DecodingResult};

/// Source of raw tile rasters shaped as `[bands, height, width]`
///
/// Both feature computation and sample access read tiles through this trait only, so a dataset
/// can be backed by something other than files on disk.
pub trait TileLoader<T: Float>: Send + Sync {
    fn load_tile(&self, path: &Path) -> Result<Array3<T>, RasterError>;
}

/// Loads tiles from TIFF files
///
/// Samples of every pixel become bands, in their on-disk order, whatever the photometric
/// interpretation: both GDAL-style BlackIsZero multiband files and RGBA-tagged files are read.
/// Multi-page files contribute the bands of each following page after the bands of the first one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TiffLoader;

impl TiffLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn read<T: Float>(path: &Path) -> Result<Array3<T>, RasterError> {
        let mut decoder = Decoder::new(BufReader::new(File::open(path)?))?;
        let expected = page_shape(&mut decoder)?;
        let mut pages = vec![];
        loop {
            let actual = page_shape(&mut decoder)?;
            if actual != expected {
                return Err(RasterError::PageDimensions {
                    page: pages.len(),
                    expected,
                    actual,
                });
            }
            let samples = cast_samples(decoder.read_image()?)?;
            pages.push(deinterleave(samples, expected)?);
            if !decoder.more_images() {
                break;
            }
            decoder.next_image()?;
        }
        if pages.len() == 1 {
            return Ok(pages.remove(0));
        }
        let views: Vec<_> = pages.iter().map(|page| page.view()).collect();
        Ok(concatenate(Axis(0), &views)?)
    }
}

impl<T: Float> TileLoader<T> for TiffLoader {
    fn load_tile(&self, path: &Path) -> Result<Array3<T>, RasterError> {
        Self::read(path)
    }
}

/// `(height, width)` of the current page
fn page_shape<R>(decoder: &mut Decoder<R>) -> Result<(usize, usize), RasterError>
where
    R: std::io::Read + std::io::Seek,
{
    let (width, height) = decoder.dimensions()?;
    Ok((height as usize, width as usize))
}

macro_rules! cast_decoded {
    ($result: expr, $($variant: ident),+ $(,)?) => {
        match $result {
            $(
                DecodingResult::$variant(buffer) => buffer
                    .into_iter()
                    .map(|x| num_traits::cast(x).unwrap_or_else(T::nan))
                    .collect(),
            )+
            #[allow(unreachable_patterns)]
            _ => return Err(RasterError::UnsupportedPixelFormat),
        }
    };
}

fn cast_samples<T: Float>(result: DecodingResult) -> Result<Vec<T>, RasterError> {
    let samples = cast_decoded!(result, U8, U16, U32, U64, I8, I16, I32, I64, F32, F64);
    Ok(samples)
}

/// Pixel-interleaved `[height, width, samples]` buffer to `[samples, height, width]` array
fn deinterleave<T: Float>(
    samples: Vec<T>,
    (height, width): (usize, usize),
) -> Result<Array3<T>, RasterError> {
    let pixels = height * width;
    if pixels == 0 || samples.len() % pixels != 0 {
        return Err(RasterError::BufferSize {
            len: samples.len(),
            height,
            width,
        });
    }
    let n_bands = samples.len() / pixels;
    let interleaved = Array3::from_shape_vec((height, width, n_bands), samples)?;
    Ok(interleaved
        .permuted_axes([2, 0, 1])
        .as_standard_layout()
        .into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use slum_detection_test_util::{random_tile, write_rgba_tile, write_tile};
    use tempfile::TempDir;

    #[test]
    fn deinterleave_pixels() {
        // two pixels with three samples each
        let samples = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
        let bands = deinterleave(samples, (1, 2)).unwrap();
        assert_eq!(bands, array![[[1.0, 4.0]], [[2.0, 5.0]], [[3.0, 6.0]]]);
    }

    #[test]
    fn deinterleave_wrong_size() {
        let err = deinterleave(vec![0.0_f32; 7], (2, 2)).unwrap_err();
        assert!(matches!(
            err,
            RasterError::BufferSize {
                len: 7,
                height: 2,
                width: 2
            }
        ));
    }

    #[test]
    fn cast_integer_samples() {
        let samples: Vec<f32> = cast_samples(DecodingResult::U16(vec![0, 1, 65535])).unwrap();
        assert_eq!(samples, vec![0.0, 1.0, 65535.0]);
        let samples: Vec<f64> = cast_samples(DecodingResult::I16(vec![-3, 7])).unwrap();
        assert_eq!(samples, vec![-3.0, 7.0]);
    }

    #[test]
    fn read_multiband_tile() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("vya_0001.tif");
        let mut rng = StdRng::seed_from_u64(0);
        let tile = random_tile(&mut rng, 32, 32);
        write_tile(&path, &tile).unwrap();

        let loaded: Array3<f32> = TiffLoader.load_tile(&path).unwrap();
        assert_eq!(loaded, tile);

        let loaded: Array3<f64> = TiffLoader::read(&path).unwrap();
        assert_eq!(loaded.shape(), &[4, 32, 32]);
        assert_eq!(loaded[[3, 31, 0]], tile[[3, 31, 0]] as f64);
    }

    #[test]
    fn read_rgba_tile() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("0002.tif");
        let mut rng = StdRng::seed_from_u64(1);
        let tile = random_tile(&mut rng, 32, 32);
        write_rgba_tile(&path, &tile).unwrap();

        let loaded: Array3<f32> = TiffLoader::read(&path).unwrap();
        assert_eq!(loaded, tile);
    }

    #[test]
    fn missing_file() {
        let tmp = TempDir::new().unwrap();
        let result = TiffLoader::read::<f32>(&tmp.path().join("missing.tif"));
        assert!(matches!(result, Err(RasterError::Io(_))));
    }

    #[test]
    fn not_a_tiff() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.tif");
        std::fs::write(&path, b"definitely not a tiff").unwrap();
        assert!(TiffLoader::read::<f32>(&path).is_err());
    }
}
