use super::error::FilterError;
use super::naming::{filtered_text_output, greyscale_output, restored_output, text_output};
use super::pixel_grid::PixelGrid;
use crate::image_manip::processing::{MeanFilter, MedianBlur, Processor, SobelMagnitude};
use clap::ValueEnum;
use image::{DynamicImage, GrayImage, ImageFormat, ImageReader};
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Neighbourhood kernel applied by [`filter_txt`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum KernelKind {
    #[default]
    Mean,
    Sobel,
    Median,
}

impl KernelKind {
    pub fn processor(&self) -> Box<dyn Processor<u8, u8>> {
        match self {
            KernelKind::Mean => Box::new(MeanFilter::new()),
            KernelKind::Sobel => Box::new(SobelMagnitude::new()),
            KernelKind::Median => Box::new(MedianBlur::default()),
        }
    }
}

fn load_luma(path: &Path) -> Result<GrayImage, FilterError> {
    let img: DynamicImage = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.to_luma8())
}

fn read_grid(path: &Path) -> Result<PixelGrid, FilterError> {
    let grid = PixelGrid::read_text(BufReader::new(File::open(path)?))?;
    debug!(
        "Parsed {} ({} rows x {} columns)",
        path.display(),
        grid.height(),
        grid.width()
    );
    Ok(grid)
}

fn write_grid(grid: &PixelGrid, out: &Path) -> Result<(), FilterError> {
    let mut writer = BufWriter::new(File::create(out)?);
    grid.write_text(&mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Saves `name.ext` as single-channel luminance to `name_g.ext`.
pub fn image_to_greyscale(path: &Path) -> Result<PathBuf, FilterError> {
    let out = greyscale_output(path)?;
    info!("Converting {} to greyscale", path.display());

    load_luma(path)?.save(&out)?;

    info!("Wrote {}", out.display());
    Ok(out)
}

/// Dumps the greyscale pixels of `name.ext` to `name.txt`.
pub fn image_to_txt(path: &Path) -> Result<PathBuf, FilterError> {
    let out = text_output(path)?;
    info!("Dumping pixels of {}", path.display());

    let grid = PixelGrid::from_luma(&load_luma(path)?)?;
    write_grid(&grid, &out)?;

    info!(
        "Wrote {} ({} rows x {} columns)",
        out.display(),
        grid.height(),
        grid.width()
    );
    Ok(out)
}

/// Rebuilds an image from a pixel grid text file and saves it as
/// `name_filtered.jpg`.
pub fn txt_to_image(path: &Path) -> Result<PathBuf, FilterError> {
    let out = restored_output(path)?;
    info!("Reconstructing image from {}", path.display());

    let bufr = read_grid(path)?.to_luma()?;
    // the output is always JPEG, the extension of the input carries no meaning here
    bufr.save_with_format(&out, ImageFormat::Jpeg)?;

    info!("Wrote {}", out.display());
    Ok(out)
}

/// Applies `kernel` to a pixel grid text file, writing `name_f.txt`.
pub fn filter_txt(path: &Path, kernel: KernelKind) -> Result<PathBuf, FilterError> {
    let out = filtered_text_output(path)?;
    info!("Applying {:?} kernel to {}", kernel, path.display());

    let bufr = read_grid(path)?.to_luma()?;
    let filtered = kernel.processor().apply(&bufr)?;
    write_grid(&PixelGrid::from_luma(&filtered)?, &out)?;

    info!("Wrote {}", out.display());
    Ok(out)
}
