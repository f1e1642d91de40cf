//! PNG decoding and encoding at the pixel grid boundary

use std::fs;
use std::path::Path;

use image::{ColorType, DynamicImage, ImageFormat, ImageReader, RgbaImage};
use log::warn;
use tempfile::{Builder, NamedTempFile, PersistError};

use crate::io::configuration::STAGING_SUFFIX;
use crate::io::error::{BleedError, Result, file_system_error};
use crate::spatial::grid::PixelGrid;
use crate::spatial::pixel::Pixel;

/// Decode an image file into an RGBA grid
///
/// Grayscale and RGB images with 8-bit channels are widened to RGBA with an
/// opaque alpha channel where they have none.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or its format cannot be detected
/// - Decoding fails
/// - The image uses channels wider than 8 bits
pub fn load_png(path: &Path) -> Result<PixelGrid> {
    let reader = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|source| file_system_error(path, "open", source))?;

    let decoded = reader.decode().map_err(|source| BleedError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    grid_from_dynamic(decoded, path)
}

/// Encode a grid as an RGBA PNG, replacing `path`
///
/// The image is written to a uniquely named staging file next to `path` and
/// renamed over it, so a failed write leaves the original file intact and never
/// clobbers an unrelated sibling. An existing target keeps its permissions.
///
/// # Errors
///
/// Returns an error if the staging file cannot be created, encoding fails, or
/// the final rename fails
pub fn save_png(grid: &PixelGrid, path: &Path) -> Result<()> {
    let image = rgba_from_grid(grid)?;
    let mut staging = staging_file(path)?;

    if let Ok(metadata) = fs::metadata(path) {
        if let Err(source) = staging.as_file().set_permissions(metadata.permissions()) {
            discard_staging(staging);
            return Err(file_system_error(path, "copy permissions", source));
        }
    }

    if let Err(source) = image.write_to(&mut staging, ImageFormat::Png) {
        discard_staging(staging);
        return Err(BleedError::ImageExport {
            path: path.to_path_buf(),
            source,
        });
    }

    match staging.persist(path) {
        Ok(_) => Ok(()),
        Err(PersistError { error, file }) => {
            discard_staging(file);
            Err(file_system_error(path, "rename", error))
        }
    }
}

/// Convert a decoded image, rejecting anything that is not 8 bits per channel
///
/// # Errors
///
/// Returns `UnsupportedFormat` for 16-bit and floating point images
pub fn grid_from_dynamic(image: DynamicImage, path: &Path) -> Result<PixelGrid> {
    match image.color() {
        ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => {
            grid_from_rgba(&image.into_rgba8())
        }
        other => Err(BleedError::UnsupportedFormat {
            path: path.to_path_buf(),
            color: format!("{other:?}"),
        }),
    }
}

/// Copy an RGBA buffer into a pixel grid
///
/// # Errors
///
/// Returns `DimensionMismatch` if the buffer does not cover its dimensions
pub fn grid_from_rgba(image: &RgbaImage) -> Result<PixelGrid> {
    let (width, height) = image.dimensions();
    let pixels = image.pixels().map(|pixel| Pixel::from_rgba(pixel.0)).collect();

    PixelGrid::from_pixels(width, height, pixels)
}

/// Copy a pixel grid into an RGBA buffer
///
/// # Errors
///
/// Returns `DimensionMismatch` if the grid storage does not cover its dimensions
pub fn rgba_from_grid(grid: &PixelGrid) -> Result<RgbaImage> {
    let (width, height) = grid.dimensions();
    let bytes = grid
        .pixels()
        .iter()
        .flat_map(|pixel| pixel.to_rgba())
        .collect::<Vec<u8>>();

    RgbaImage::from_raw(width, height, bytes).ok_or(BleedError::DimensionMismatch {
        width,
        height,
        actual: grid.len(),
    })
}

fn staging_file(path: &Path) -> Result<NamedTempFile> {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut prefix = path.file_name().unwrap_or_default().to_os_string();
    prefix.push(".");

    Builder::new()
        .prefix(&prefix)
        .suffix(&format!(".{STAGING_SUFFIX}"))
        .tempfile_in(directory)
        .map_err(|source| file_system_error(path, "create staging file", source))
}

fn discard_staging(staging: NamedTempFile) {
    let staging_path = staging.path().to_path_buf();
    if let Err(error) = staging.close() {
        warn!(
            "Could not remove staging file '{}': {error}",
            staging_path.display()
        );
    }
}
