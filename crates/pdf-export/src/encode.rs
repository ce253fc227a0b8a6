//! Raster encoding dispatcher
//!
//! Turns one frame of a [`RasterImage`] into the byte payload of an image
//! XObject, under the filter chosen by the policy table. Only ASCIIHexDecode
//! and DCTDecode are implemented; asking for any other filter fails.

use std::borrow::Cow;

use crate::raster::RasterImage;
use crate::types::{ColorMode, ExportError, Filter, Result};

/// An encoded frame plus the geometry its image resource must declare.
///
/// For bilevel images encoded through the hex path, `width`/`height`
/// describe the reshaped single-row buffer, not the source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Encode one frame of `image` with the given filter.
pub fn encode_frame(image: &RasterImage, frame: usize, filter: Filter) -> Result<EncodedFrame> {
    let data = image.frame_data(frame)?;
    match filter {
        Filter::AsciiHex => encode_hex(image, data),
        Filter::Dct => encode_jpeg(image, data),
        other => Err(ExportError::UnsupportedFilter(other)),
    }
}

/// ASCIIHexDecode: hex digits terminated by the `>` end-of-data marker.
///
/// The hex path takes one byte per sample, so bilevel frames are first
/// expanded to a single-row grayscale buffer, one byte per pixel. The
/// expanded geometry (width = pixel count, height = 1) is what the image
/// resource declares; the page's media box keeps the source geometry.
fn encode_hex(image: &RasterImage, data: &[u8]) -> Result<EncodedFrame> {
    let (samples, width, height) = if image.mode() == ColorMode::Bilevel {
        let expanded = expand_bilevel(data, image.width(), image.height());
        let pixels = expanded.len() as u32;
        (Cow::Owned(expanded), pixels, 1)
    } else {
        (Cow::Borrowed(data), image.width(), image.height())
    };

    let mut payload = hex::encode_upper(samples.as_ref()).into_bytes();
    payload.push(b'>');
    Ok(EncodedFrame {
        width,
        height,
        data: payload,
    })
}

/// DCTDecode: delegate to the JPEG encoder, no reshaping.
fn encode_jpeg(image: &RasterImage, data: &[u8]) -> Result<EncodedFrame> {
    let color_type = match image.mode() {
        ColorMode::Gray => jpeg_encoder::ColorType::Luma,
        ColorMode::Rgb => jpeg_encoder::ColorType::Rgb,
        ColorMode::Cmyk => jpeg_encoder::ColorType::Cmyk,
        other => {
            return Err(ExportError::Raster(format!(
                "mode {} cannot be JPEG-encoded",
                other
            )));
        }
    };

    let width = u16::try_from(image.width()).map_err(|_| {
        ExportError::Raster(format!("width {} exceeds the JPEG limit", image.width()))
    })?;
    let height = u16::try_from(image.height()).map_err(|_| {
        ExportError::Raster(format!("height {} exceeds the JPEG limit", image.height()))
    })?;

    let mut payload = Vec::new();
    let encoder = jpeg_encoder::Encoder::new(&mut payload, crate::constants::JPEG_QUALITY);
    encoder.encode(data, width, height, color_type)?;
    Ok(EncodedFrame {
        width: image.width(),
        height: image.height(),
        data: payload,
    })
}

/// Expand packed 1-bit rows to one byte per pixel, row padding dropped.
///
/// Bits are read MSB first within each byte; set bits become 0xFF. The
/// result holds exactly `width * height` bytes.
fn expand_bilevel(packed: &[u8], width: u32, height: u32) -> Vec<u8> {
    let row_bytes = (width as usize).div_ceil(8);
    let mut out = Vec::with_capacity(width as usize * height as usize);
    for row in 0..height as usize {
        let row_data = &packed[row * row_bytes..(row + 1) * row_bytes];
        for col in 0..width as usize {
            let bit = (row_data[col / 8] >> (7 - col % 8)) & 1;
            out.push(if bit == 1 { 0xFF } else { 0x00 });
        }
    }
    out
}
