use image::ImageError;
use ndarray::ShapeError;
use std::io::Error;

#[derive(Debug)]
pub enum FilterError {
    ImageError(ImageError),
    FileError(Error),
    NdArrayShapeError,
    InvalidFileName(String),
    Parse {
        line: usize,
        message: String,
    },
    PixelOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl FilterError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        FilterError::Parse {
            line,
            message: message.into(),
        }
    }
}

impl From<ImageError> for FilterError {
    fn from(err: ImageError) -> Self {
        FilterError::ImageError(err)
    }
}

impl From<ShapeError> for FilterError {
    fn from(_: ShapeError) -> Self {
        FilterError::NdArrayShapeError
    }
}

impl From<Error> for FilterError {
    fn from(err: Error) -> Self {
        FilterError::FileError(err)
    }
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::ImageError(err) => write!(f, "Failed processing image: {}", err),
            FilterError::FileError(err) => write!(f, "Failed reading or writing file: {}", err),
            FilterError::NdArrayShapeError => write!(
                f,
                "Failed converting image to array with given shape or layout"
            ),
            FilterError::InvalidFileName(name) => write!(
                f,
                "Invalid file name '{}': expected exactly one '.' separating name and extension",
                name
            ),
            FilterError::Parse { line, message } => {
                write!(f, "Malformed pixel grid at line {}: {}", line, message)
            }
            FilterError::PixelOutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "Pixel ({}, {}) is outside the declared {}x{} grid",
                x, y, width, height
            ),
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FilterError::ImageError(err) => Some(err),
            FilterError::FileError(err) => Some(err),
            _ => None,
        }
    }
}
