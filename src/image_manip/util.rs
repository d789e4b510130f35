use crate::convert::error::FilterError;
use image::{ImageBuffer, Luma, Primitive};
use ndarray::{Array, Array2};
use num_traits::Num;

/// Copies a single-channel buffer into a `(height, width)` array.
pub fn bufr_to_arr<T: Num + Copy + 'static + Primitive>(
    bufr: &ImageBuffer<Luma<T>, Vec<T>>,
) -> Result<Array2<T>, FilterError> {
    let (w, h) = bufr.dimensions();
    let raw = bufr.as_raw().clone();
    Ok(Array::from_shape_vec((h as usize, w as usize), raw)?)
}

pub fn arr_to_bufr<T: Copy + Num + 'static + Primitive>(
    arr: &Array2<T>,
) -> Result<ImageBuffer<Luma<T>, Vec<T>>, FilterError> {
    let (h, w) = arr.dim();
    // iter() walks in logical order, so non-standard layouts still come out row-major
    let raw: Vec<T> = arr.iter().cloned().collect();
    ImageBuffer::from_raw(w as u32, h as u32, raw).ok_or(FilterError::NdArrayShapeError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn buffer_and_array_share_row_major_layout() {
        let bufr = ImageBuffer::<Luma<u8>, Vec<u8>>::from_raw(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let arr = bufr_to_arr(&bufr).unwrap();
        assert_eq!(arr, array![[1u8, 2, 3], [4, 5, 6]]);
        assert_eq!(arr[[1, 0]], bufr.get_pixel(0, 1)[0]);

        let back = arr_to_bufr(&arr).unwrap();
        assert_eq!(back, bufr);
    }

    #[test]
    fn transposed_views_are_written_in_logical_order() {
        let arr = array![[1u8, 2], [3, 4]].reversed_axes();
        let bufr = arr_to_bufr(&arr).unwrap();
        assert_eq!(bufr.as_raw(), &vec![1, 3, 2, 4]);
    }
}
