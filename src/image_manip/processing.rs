use super::util::{arr_to_bufr, bufr_to_arr};
use crate::convert::error::FilterError;
use image::{ImageBuffer, Luma, Primitive};
use imageproc::filter::median_filter;
use imageproc::gradients::sobel_gradients;
use ndarray::{Array2, Zip};
use num_traits::Num;

pub trait Processor<T: Num + Copy + Primitive, U: Copy + Num + Primitive> {
    fn apply(
        &self,
        bufr: &ImageBuffer<Luma<T>, Vec<T>>,
    ) -> Result<ImageBuffer<Luma<U>, Vec<U>>, FilterError>;
}

/// Average of the 3x3 neighbourhood: the window sum divided by 9, truncated.
///
/// Neighbours outside the image repeat the nearest edge pixel.
pub struct MeanFilter {}

impl MeanFilter {
    pub fn new() -> Self {
        MeanFilter {}
    }
}

impl Processor<u8, u8> for MeanFilter {
    fn apply(
        &self,
        bufr: &ImageBuffer<Luma<u8>, Vec<u8>>,
    ) -> Result<ImageBuffer<Luma<u8>, Vec<u8>>, FilterError> {
        let src = bufr_to_arr(bufr)?;
        let (h, w) = src.dim();
        let mut mean = Array2::<u8>::zeros((h, w));
        Zip::indexed(&mut mean).par_for_each(|(y, x), px| {
            let mut sum = 0u32;
            for yy in [y.saturating_sub(1), y, (y + 1).min(h - 1)] {
                for xx in [x.saturating_sub(1), x, (x + 1).min(w - 1)] {
                    sum += src[[yy, xx]] as u32;
                }
            }
            *px = (sum / 9) as u8;
        });
        arr_to_bufr(&mean)
    }
}

/// Gradient magnitude of the 3x3 Sobel operators, saturated to a byte.
pub struct SobelMagnitude {}

impl SobelMagnitude {
    pub fn new() -> Self {
        SobelMagnitude {}
    }
}

impl Processor<u8, u8> for SobelMagnitude {
    fn apply(
        &self,
        bufr: &ImageBuffer<Luma<u8>, Vec<u8>>,
    ) -> Result<ImageBuffer<Luma<u8>, Vec<u8>>, FilterError> {
        let magnitude = bufr_to_arr(&sobel_gradients(bufr))?;
        let saturated = Zip::from(&magnitude).par_map_collect(|&g| g.min(255) as u8);
        arr_to_bufr(&saturated)
    }
}

pub struct MedianBlur {
    pub radius: u32,
}

impl MedianBlur {
    pub fn default() -> Self {
        MedianBlur { radius: 1 }
    }
}

impl Processor<u8, u8> for MedianBlur {
    fn apply(
        &self,
        bufr: &ImageBuffer<Luma<u8>, Vec<u8>>,
    ) -> Result<ImageBuffer<Luma<u8>, Vec<u8>>, FilterError> {
        Ok(median_filter(bufr, self.radius, self.radius))
    }
}
