use conv::prelude::*;
use ndarray::NdFloat;
use num_traits::{FromPrimitive, NumCast};
use std::iter::Sum;

/// Floating-point type used for raster values and features: [f32] or [f64]
pub trait Float:
    NdFloat + FromPrimitive + NumCast + Sum + ApproxFrom<usize> + ValueFrom<u8> + Default
{
    /// Convert a count or a pixel level into `Self`
    fn from_count(n: usize) -> Self {
        n.approx_as::<Self>().unwrap()
    }

    fn from_f64_const(x: f64) -> Self {
        Self::from_f64(x).unwrap()
    }

    fn from_level(level: u8) -> Self {
        level.value_as::<Self>().unwrap()
    }
}

impl Float for f32 {}
impl Float for f64 {}
