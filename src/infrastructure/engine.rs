//! Edit engine backed by the `image` crate
//!
//! Decodes the input, applies one [`EditOperation`], and writes the result
//! next to the input as `<stem><suffix>.<ext>` in the input's own format.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::config::Settings;
use crate::domain::{EditOperation, ResizeTarget};
use crate::infrastructure::error::{EngineError, EngineResult};
use crate::infrastructure::traits::EditEngine;

/// Extensions the engine reads and writes (lowercase, without dot).
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Largest output the engine will allocate, in pixels (16384 x 16384).
pub const MAX_OUTPUT_PIXELS: u64 = 1 << 28;

/// Production engine.
#[derive(Debug, Clone)]
pub struct ImageEngine {
    output_suffix: String,
    jpeg_quality: u8,
    filter: FilterType,
}

impl ImageEngine {
    pub fn new(output_suffix: impl Into<String>, jpeg_quality: u8) -> Self {
        Self {
            output_suffix: output_suffix.into(),
            jpeg_quality,
            filter: FilterType::Lanczos3,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.output_suffix.clone(), settings.jpeg_quality)
    }

    /// Where the edited copy of `input` is written.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut name = format!("{}{}", stem, self.output_suffix);
        if let Some(ext) = input.extension() {
            name.push('.');
            name.push_str(&ext.to_string_lossy());
        }
        input.with_file_name(name)
    }

    fn transform(&self, image: DynamicImage, operation: &EditOperation) -> EngineResult<DynamicImage> {
        let edited = match *operation {
            EditOperation::Reverse { vertical: true } => image.flipv(),
            EditOperation::Reverse { vertical: false } => image.fliph(),
            EditOperation::Resize(target) => {
                let (width, height) = resize_dimensions(image.width(), image.height(), target)?;
                debug!("resize: {}x{} -> {}x{}", image.width(), image.height(), width, height);
                image.resize_exact(width, height, self.filter)
            }
            EditOperation::Trim {
                left,
                top,
                width,
                height,
            } => {
                check_trim_area(image.width(), image.height(), left, top, width, height)?;
                image.crop_imm(left, top, width, height)
            }
            EditOperation::Grayscale => image.grayscale(),
        };
        Ok(edited)
    }

    /// Encode in memory, then write; a failed encode leaves no file behind.
    fn save(&self, image: &DynamicImage, format: ImageFormat, path: &Path) -> EngineResult<()> {
        let encoded = self.encode(image, format).map_err(|source| EngineError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, encoded)
            .map_err(|e| EngineError::io(format!("write {}", path.display()), e))
    }

    fn encode(&self, image: &DynamicImage, format: ImageFormat) -> image::ImageResult<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        match format {
            ImageFormat::Jpeg => {
                // JPEG carries no alpha channel
                let image = match image {
                    DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => image.clone(),
                    other => DynamicImage::ImageRgb8(other.to_rgb8()),
                };
                let encoder = JpegEncoder::new_with_quality(&mut buffer, self.jpeg_quality);
                image.write_with_encoder(encoder)?;
            }
            ImageFormat::Gif => {
                DynamicImage::ImageRgba8(image.to_rgba8()).write_to(&mut buffer, format)?
            }
            _ => image.write_to(&mut buffer, format)?,
        }
        Ok(buffer.into_inner())
    }
}

impl EditEngine for ImageEngine {
    #[instrument(skip(self))]
    fn apply(&self, operation: &EditOperation, path: &Path) -> EngineResult<PathBuf> {
        let format = format_for(path)?;

        let image = image::open(path).map_err(|source| EngineError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("apply: decoded {}x{} {:?}", image.width(), image.height(), format);

        let edited = self.transform(image, operation)?;

        let output = self.output_path(path);
        self.save(&edited, format, &output)?;
        debug!("apply: wrote {}", output.display());
        Ok(output)
    }
}

/// Map a path's extension onto a supported format.
fn format_for(path: &Path) -> EngineResult<ImageFormat> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let unsupported = || EngineError::UnsupportedExtension {
        extension: extension.clone(),
        supported: SUPPORTED_EXTENSIONS.iter().join("/"),
    };

    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(unsupported());
    }
    ImageFormat::from_extension(&extension).ok_or_else(unsupported)
}

/// Output size for a resize of a `width` x `height` image.
///
/// Rejects empty results and anything above [`MAX_OUTPUT_PIXELS`].
pub fn resize_dimensions(width: u32, height: u32, target: ResizeTarget) -> EngineResult<(u32, u32)> {
    let (out_width, out_height) = match target {
        ResizeTarget::Exact { width: 0, .. } | ResizeTarget::Exact { height: 0, .. } => {
            return Err(EngineError::InvalidGeometry(
                "width and height must be greater than 0".to_string(),
            ))
        }
        ResizeTarget::Exact { width, height } => (width, height),
        ResizeTarget::Ratio(ratio) if !ratio.is_finite() || ratio <= 0.0 => {
            return Err(EngineError::InvalidGeometry(format!(
                "ratio must be greater than 0, got {ratio}"
            )))
        }
        ResizeTarget::Ratio(ratio) => {
            let scale = |side: u32| -> EngineResult<u32> {
                let scaled = (f64::from(side) * ratio).round().max(1.0);
                if scaled > f64::from(u32::MAX) {
                    return Err(EngineError::InvalidGeometry(format!(
                        "ratio {ratio} is too large for a {width}x{height} image"
                    )));
                }
                Ok(scaled as u32)
            };
            (scale(width)?, scale(height)?)
        }
    };

    if u64::from(out_width) * u64::from(out_height) > MAX_OUTPUT_PIXELS {
        return Err(EngineError::InvalidGeometry(format!(
            "output of {out_width}x{out_height} exceeds the limit of {MAX_OUTPUT_PIXELS} pixels"
        )));
    }
    Ok((out_width, out_height))
}

fn check_trim_area(
    image_width: u32,
    image_height: u32,
    left: u32,
    top: u32,
    width: u32,
    height: u32,
) -> EngineResult<()> {
    if width == 0 || height == 0 {
        return Err(EngineError::InvalidGeometry(
            "trim width and height must be greater than 0".to_string(),
        ));
    }
    if left >= image_width || top >= image_height {
        return Err(EngineError::InvalidGeometry(format!(
            "trim area starts at ({left}, {top}), outside the {image_width}x{image_height} image"
        )));
    }
    Ok(())
}
