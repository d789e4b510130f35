use super::error::FilterError;
use crate::image_manip::util::{arr_to_bufr, bufr_to_arr};
use image::{GrayImage, Limits};
use ndarray::{Array2, Axis};
use rayon::prelude::*;
use std::io::{BufRead, Write};

/// Row-major greyscale pixels, indexed `[[y, x]]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Array2<u8>,
}

impl PixelGrid {
    /// A zero-filled grid.
    pub fn new(height: usize, width: usize) -> Self {
        PixelGrid {
            pixels: Array2::zeros((height, width)),
        }
    }

    pub fn from_array(pixels: Array2<u8>) -> Self {
        PixelGrid { pixels }
    }

    pub fn from_luma(bufr: &GrayImage) -> Result<Self, FilterError> {
        Ok(PixelGrid {
            pixels: bufr_to_arr(bufr)?,
        })
    }

    pub fn to_luma(&self) -> Result<GrayImage, FilterError> {
        arr_to_bufr(&self.pixels)
    }

    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    pub fn pixels(&self) -> &Array2<u8> {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.pixels.get([y, x]).copied()
    }

    /// Sets pixel `(x, y)`, failing if it lies outside the grid.
    pub fn set(&mut self, x: usize, y: usize, value: u8) -> Result<(), FilterError> {
        let (height, width) = self.pixels.dim();
        match self.pixels.get_mut([y, x]) {
            Some(pixel) => {
                *pixel = value;
                Ok(())
            }
            None => Err(FilterError::PixelOutOfBounds {
                x,
                y,
                width,
                height,
            }),
        }
    }

    /// Writes the `height width` header followed by one line per row.
    ///
    /// Every value is followed by a single space, so each row line ends with
    /// a trailing space before the newline.
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<(), FilterError> {
        writeln!(out, "{} {}", self.height(), self.width())?;

        let rows: Vec<String> = self
            .pixels
            .axis_iter(Axis(0))
            .into_par_iter()
            .map(|row| {
                let mut line = String::with_capacity(row.len() * 4 + 1);
                for value in row.iter() {
                    line.push_str(&value.to_string());
                    line.push(' ');
                }
                line.push('\n');
                line
            })
            .collect();

        for row in rows {
            out.write_all(row.as_bytes())?;
        }
        Ok(())
    }

    /// Parses a pixel grid text file.
    ///
    /// Rows shorter than the declared width and missing rows leave zeros
    /// behind. A value landing outside the declared grid is an error, blank
    /// lines are skipped over.
    pub fn read_text<R: BufRead>(reader: R) -> Result<Self, FilterError> {
        let mut lines = reader.lines();

        let header = lines
            .next()
            .ok_or_else(|| FilterError::parse(1, "missing 'height width' header"))??;
        let (height, width) = match header.split_whitespace().collect::<Vec<_>>().as_slice() {
            [h, w] => check_dimensions(parse_dimension(h)?, parse_dimension(w)?)?,
            _ => {
                return Err(FilterError::parse(
                    1,
                    format!("expected 'height width', found '{}'", header.trim()),
                ))
            }
        };

        let mut grid = PixelGrid::new(height, width);
        for (y, line) in lines.enumerate() {
            let line = line?;
            for (x, token) in line.split_whitespace().enumerate() {
                let value: u8 = token.parse().map_err(|_| {
                    FilterError::parse(y + 2, format!("'{}' is not a pixel value in 0..=255", token))
                })?;
                grid.set(x, y, value)?;
            }
        }

        Ok(grid)
    }
}

/// Buffers are built with `u32` sides, so anything wider is rejected here.
fn parse_dimension(token: &str) -> Result<u32, FilterError> {
    token
        .parse()
        .map_err(|_| FilterError::parse(1, format!("'{}' is not a valid dimension", token)))
}

/// Refuses grids larger than the image crate's default allocation limit.
fn check_dimensions(height: u32, width: u32) -> Result<(usize, usize), FilterError> {
    let pixels = u64::from(height) * u64::from(width);
    let max_alloc = Limits::default().max_alloc.unwrap_or(u64::MAX);
    if pixels > max_alloc || usize::try_from(pixels).is_err() {
        return Err(FilterError::parse(
            1,
            format!("{}x{} grid exceeds {} pixels", height, width, max_alloc),
        ));
    }
    Ok((height as usize, width as usize))
}
