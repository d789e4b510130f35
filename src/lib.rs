//! Greyscale conversion and plain-text pixel grids.
//!
//! An image can be turned into greyscale, dumped to a `height width` header
//! followed by one line of pixel values per row, filtered in that text form,
//! and rebuilt into a JPEG again.

pub mod commands;
pub mod convert;
pub mod image_manip;
