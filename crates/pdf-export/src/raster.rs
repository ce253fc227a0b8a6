//! In-memory raster image model
//!
//! [`RasterImage`] is the unit of input for export: a color mode, pixel
//! dimensions, one or more equally sized frames of raw sample data, and an
//! optional RGB palette for palette-mode images. Multi-frame images (GIF
//! animations, TIFF stacks) carry one buffer per frame; each frame becomes
//! one page when saved with `save_all`.

use image::DynamicImage;

use crate::types::{ColorMode, ExportError, Result};

/// Maximum palette size: 256 entries of RGB triples.
const MAX_PALETTE_LEN: usize = 256 * 3;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RasterImage {
    mode: ColorMode,
    width: u32,
    height: u32,
    frames: Vec<Vec<u8>>,
    palette: Option<Vec<u8>>,
}

impl RasterImage {
    /// Create a single-frame image from raw sample data.
    ///
    /// The buffer length must match the mode's layout exactly: packed rows
    /// for `Bilevel`, interleaved components for the multi-channel modes.
    pub fn new(mode: ColorMode, width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ExportError::Raster(format!(
                "image dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }
        let expected = mode.frame_len(width, height);
        if data.len() != expected {
            return Err(ExportError::Raster(format!(
                "mode {} at {}x{} needs {} bytes per frame, got {}",
                mode,
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(Self {
            mode,
            width,
            height,
            frames: vec![data],
            palette: None,
        })
    }

    /// Append another frame with the same mode and dimensions.
    pub fn add_frame(&mut self, data: Vec<u8>) -> Result<()> {
        let expected = self.mode.frame_len(self.width, self.height);
        if data.len() != expected {
            return Err(ExportError::Raster(format!(
                "frame {} needs {} bytes, got {}",
                self.frames.len(),
                expected,
                data.len()
            )));
        }
        self.frames.push(data);
        Ok(())
    }

    /// Attach an RGB palette (triples, at most 256 entries).
    ///
    /// Required for `Palette` mode images before they can be saved.
    pub fn set_palette(&mut self, rgb: Vec<u8>) -> Result<()> {
        if rgb.is_empty() || rgb.len() % 3 != 0 || rgb.len() > MAX_PALETTE_LEN {
            return Err(ExportError::Raster(format!(
                "palette must be 3..={} bytes of RGB triples, got {}",
                MAX_PALETTE_LEN,
                rgb.len()
            )));
        }
        self.palette = Some(rgb);
        Ok(())
    }

    /// Convert a decoded [`image::DynamicImage`] into the export model.
    ///
    /// Grayscale and RGB buffers map directly; everything else is flattened
    /// to RGB, dropping alpha.
    pub fn from_dynamic(image: &DynamicImage) -> Result<Self> {
        let (width, height) = (image.width(), image.height());
        match image {
            DynamicImage::ImageLuma8(buf) => {
                Self::new(ColorMode::Gray, width, height, buf.as_raw().clone())
            }
            DynamicImage::ImageRgb8(buf) => {
                Self::new(ColorMode::Rgb, width, height, buf.as_raw().clone())
            }
            other => Self::new(ColorMode::Rgb, width, height, other.to_rgb8().into_raw()),
        }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of frames, and therefore pages, this image yields in
    /// all-frames mode. At least 1.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Raw sample data of one frame.
    pub fn frame_data(&self, frame: usize) -> Result<&[u8]> {
        self.frames
            .get(frame)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                ExportError::Raster(format!(
                    "frame index {} out of range (image has {} frames)",
                    frame,
                    self.frames.len()
                ))
            })
    }

    pub fn palette(&self) -> Option<&[u8]> {
        self.palette.as_deref()
    }
}
