//! Pixel access and image loading boundary
//!
//! The extraction core only sees the [`PixelSource`] trait. Hosting
//! applications pick an adapter:
//!
//! - [`RgbaBuffer`] for raw RGB/RGBA byte buffers from any decoder
//! - `image::DynamicImage`, `image::RgbImage` and `image::RgbaImage`
//!
//! The loading helpers decode JPEG, PNG, WebP and GIF (first frame) through
//! the `image` crate and enforce the limits of a [`LoaderConfig`]. The core
//! never calls them itself.

use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader, RgbImage, RgbaImage};

use crate::config::LoaderConfig;
use crate::error::{ColorError, Result};

/// Read access to a width × height grid of RGBA samples
pub trait PixelSource {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Sample at (x, y) as `[r, g, b, a]`; sources without alpha report 255
    ///
    /// Callers stay within `0..width` and `0..height`.
    fn pixel(&self, x: u32, y: u32) -> [u8; 4];

    /// Whether samples carry a meaningful alpha channel
    fn has_alpha(&self) -> bool {
        false
    }
}

/// Channel layout of a raw buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    Rgb,
    Rgba,
}

impl Channels {
    pub fn count(&self) -> usize {
        match self {
            Channels::Rgb => 3,
            Channels::Rgba => 4,
        }
    }
}

/// Row-major interleaved byte buffer
#[derive(Debug, Clone)]
pub struct RgbaBuffer {
    width: u32,
    height: u32,
    channels: Channels,
    data: Vec<u8>,
}

impl RgbaBuffer {
    /// Wrap a buffer, checking that its length matches the dimensions
    ///
    /// # Errors
    ///
    /// Returns `ColorError::UnsupportedSource` on a length mismatch
    pub fn new(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * channels.count();
        if data.len() != expected {
            return Err(ColorError::unsupported(format!(
                "buffer holds {} bytes, {}x{} {:?} needs {}",
                data.len(),
                width,
                height,
                channels,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Image filled with a single RGB color
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let data = rgb
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 3)
            .collect();
        Self {
            width,
            height,
            channels: Channels::Rgb,
            data,
        }
    }
}

impl PixelSource for RgbaBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let stride = self.channels.count();
        let idx = (y as usize * self.width as usize + x as usize) * stride;
        match self.channels {
            Channels::Rgb => [self.data[idx], self.data[idx + 1], self.data[idx + 2], 255],
            Channels::Rgba => [
                self.data[idx],
                self.data[idx + 1],
                self.data[idx + 2],
                self.data[idx + 3],
            ],
        }
    }

    fn has_alpha(&self) -> bool {
        self.channels == Channels::Rgba
    }
}

impl PixelSource for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.get_pixel(x, y).0
    }

    fn has_alpha(&self) -> bool {
        self.color().has_alpha()
    }
}

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let [r, g, b] = self.get_pixel(x, y).0;
        [r, g, b, 255]
    }
}

impl PixelSource for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.get_pixel(x, y).0
    }

    fn has_alpha(&self) -> bool {
        true
    }
}

/// Formats accepted by the loading helpers
fn is_supported_format(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::WebP | ImageFormat::Gif
    )
}

/// Load an image file
///
/// # Errors
///
/// - `ColorError::UnsupportedSource` for unknown or unsupported formats and
///   inputs over the configured size limits
/// - `ColorError::ImageLoadError` if the file cannot be opened or decoded
pub fn load_image(path: &Path, config: &LoaderConfig) -> Result<DynamicImage> {
    let format = ImageFormat::from_path(path).map_err(|_| {
        ColorError::unsupported(format!("unknown image format for file: {}", path.display()))
    })?;
    if !is_supported_format(format) {
        return Err(ColorError::unsupported(format!("{:?} images are not supported", format)));
    }

    let size = std::fs::metadata(path)
        .map_err(|e| ColorError::image_load(format!("Failed to open {}", path.display()), e))?
        .len();
    if size > config.max_bytes as u64 {
        return Err(ColorError::unsupported(format!(
            "file is {} bytes, limit is {}",
            size, config.max_bytes
        )));
    }

    let reader = ImageReader::open(path).map_err(|e| {
        ColorError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;
    let image = reader.decode().map_err(|e| {
        ColorError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    let (width, height) = check_dimensions(&image, config)?;
    tracing::debug!(path = %path.display(), width, height, "image loaded");
    Ok(image)
}

/// Decode an in-memory image, optionally checking its declared MIME type
///
/// # Errors
///
/// Same conditions as [`load_image`], plus a MIME type outside
/// `config.allowed_mime_types`.
pub fn load_image_from_memory(
    bytes: &[u8],
    mime_type: Option<&str>,
    config: &LoaderConfig,
) -> Result<DynamicImage> {
    if bytes.is_empty() {
        return Err(ColorError::unsupported("empty upload"));
    }
    if bytes.len() > config.max_bytes {
        return Err(ColorError::unsupported(format!(
            "upload is {} bytes, limit is {}",
            bytes.len(),
            config.max_bytes
        )));
    }

    let format = match mime_type {
        Some(mime) => {
            if !config.allowed_mime_types.iter().any(|allowed| allowed == mime) {
                return Err(ColorError::unsupported(format!("MIME type {} is not allowed", mime)));
            }
            ImageFormat::from_mime_type(mime)
                .ok_or_else(|| ColorError::unsupported(format!("unknown MIME type {}", mime)))?
        }
        None => image::guess_format(bytes)
            .map_err(|e| ColorError::image_load("Failed to detect image format", e))?,
    };
    if !is_supported_format(format) {
        return Err(ColorError::unsupported(format!("{:?} images are not supported", format)));
    }

    let image = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| ColorError::image_load("Failed to decode image", e))?;

    check_dimensions(&image, config)?;
    Ok(image)
}

fn check_dimensions(image: &DynamicImage, config: &LoaderConfig) -> Result<(u32, u32)> {
    let (width, height) = GenericImageView::dimensions(image);
    let pixels = width as u64 * height as u64;
    if pixels > config.max_pixels {
        return Err(ColorError::unsupported(format!(
            "image has {} pixels, limit is {}",
            pixels, config.max_pixels
        )));
    }
    Ok((width, height))
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &["jpg", "jpeg", "png", "webp", "gif"]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}
